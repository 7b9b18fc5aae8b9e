/// The locale rules applied when converting numbers and dates.
///
/// A culture is always passed explicitly (via [`crate::Settings`]); there is no ambient default.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::Culture;
///
/// let culture = Culture::new("de-DE")
///     .decimal_separator(',')
///     .group_separator('.')
///     .date_time_formats(["%d.%m.%Y %H:%M:%S%.f", "%d.%m.%Y %H:%M"])
///     .date_formats(["%d.%m.%Y"]);
///
/// assert_eq!(culture.name(), "de-DE");
/// assert_eq!(culture.get_decimal_separator(), ',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: String,
    decimal_separator: char,
    group_separator: char,
    date_time_formats: Vec<String>,
    date_formats: Vec<String>,
}

impl Default for Culture {
    fn default() -> Self {
        Culture::invariant()
    }
}

impl Culture {
    /// The invariant culture: `.` decimal separator, `,` group separator, ISO-8601 dates first.
    pub fn invariant() -> Self {
        Self::new("")
    }

    /// Create a culture named `name`, starting from the invariant rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decimal_separator: '.',
            group_separator: ',',
            date_time_formats: [
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%dT%H:%M",
                "%Y-%m-%d %H:%M",
                "%m/%d/%Y %H:%M:%S%.f",
                "%m/%d/%Y %H:%M",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            date_formats: ["%Y-%m-%d", "%m/%d/%Y"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    /// Set the decimal separator.
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Set the digit group (thousands) separator.
    pub fn group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Replace the date-time formats (`chrono` strftime syntax).
    /// The first format is used when rendering a date-time.
    pub fn date_time_formats(
        mut self,
        formats: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.date_time_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the date-only formats (`chrono` strftime syntax).
    /// A date-only input maps to midnight.
    pub fn date_formats(mut self, formats: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// The culture name (empty for the invariant culture).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decimal separator.
    pub fn get_decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The digit group separator.
    pub fn get_group_separator(&self) -> char {
        self.group_separator
    }

    pub(crate) fn get_date_time_formats(&self) -> &[String] {
        &self.date_time_formats
    }

    pub(crate) fn get_date_formats(&self) -> &[String] {
        &self.date_formats
    }

    /// Rewrite a culture specific number into the `.`-decimal form understood by `FromStr`.
    pub(crate) fn normalize_number(&self, token: &str) -> String {
        token
            .trim()
            .chars()
            .filter(|c| *c != self.group_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect()
    }

    /// Rewrite a `.`-decimal number into this culture's form.
    pub(crate) fn localize_number(&self, token: &str) -> String {
        token.replace('.', &self.decimal_separator.to_string())
    }
}
