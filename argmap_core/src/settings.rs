use crate::convert::Culture;

/// How option and command names are compared against the Cli tokens.
///
/// Applies to long option names and command names.
/// Short option names are always compared exactly (`-v` and `-V` are distinct).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameComparison {
    /// Names must match exactly.
    #[default]
    Ordinal,
    /// Names match regardless of (unicode) case.
    IgnoreCase,
}

impl NameComparison {
    pub(crate) fn matches(&self, registered: &str, token: &str) -> bool {
        match self {
            NameComparison::Ordinal => registered == token,
            NameComparison::IgnoreCase => registered.to_lowercase() == token.to_lowercase(),
        }
    }

    /// The form under which two names are considered duplicates.
    pub(crate) fn normalize(&self, name: &str) -> String {
        match self {
            NameComparison::Ordinal => name.to_string(),
            NameComparison::IgnoreCase => name.to_lowercase(),
        }
    }
}

/// Explicit mapping configuration.
///
/// Every setting has its default assigned here; nothing is read from the host environment.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::{Culture, NameComparison, Settings};
///
/// let settings = Settings::default()
///     .name_comparison(NameComparison::IgnoreCase)
///     .culture(Culture::new("de-DE").decimal_separator(',').group_separator('.'))
///     .version("1.2.3");
///
/// assert_eq!(settings.get_name_comparison(), NameComparison::IgnoreCase);
/// assert_eq!(settings.get_culture().name(), "de-DE");
/// assert_eq!(settings.get_version(), Some("1.2.3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    name_comparison: NameComparison,
    culture: Culture,
    version: Option<String>,
}

impl Settings {
    /// Set the name comparison (default: [`NameComparison::Ordinal`]).
    pub fn name_comparison(mut self, name_comparison: NameComparison) -> Self {
        self.name_comparison = name_comparison;
        self
    }

    /// Set the culture used for value conversion (default: [`Culture::invariant`]).
    pub fn culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    /// Set the application version, printed by `-v`/`--version`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version.replace(version.into());
        self
    }

    #[allow(missing_docs)]
    pub fn get_name_comparison(&self) -> NameComparison {
        self.name_comparison
    }

    #[allow(missing_docs)]
    pub fn get_culture(&self) -> &Culture {
        &self.culture
    }

    #[allow(missing_docs)]
    pub fn get_version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NameComparison::Ordinal, "name", "name", true)]
    #[case(NameComparison::Ordinal, "name", "Name", false)]
    #[case(NameComparison::IgnoreCase, "name", "NAME", true)]
    #[case(NameComparison::IgnoreCase, "name", "names", false)]
    #[case(NameComparison::IgnoreCase, "straße", "STRASSE", false)]
    fn matches(
        #[case] comparison: NameComparison,
        #[case] registered: &str,
        #[case] token: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(comparison.matches(registered, token), expected);
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.get_name_comparison(), NameComparison::Ordinal);
        assert_eq!(settings.get_culture(), &Culture::invariant());
        assert_eq!(settings.get_version(), None);
    }
}
