#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Whitespace between two columns.
pub(crate) const PADDING_WIDTH: usize = 3;
// Leading whitespace of every row.
pub(crate) const INDENT_WIDTH: usize = 1;

// Keep a margin from the terminal's edge.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Room for at least three average (5 letter) words.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Lay out rows of `left | middle | rights..`, where only the middle column wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Columns {
    left: usize,
    middle: usize,
    rights: Vec<usize>,
}

impl Columns {
    /// Size the middle column to the widest `middle` content, within the `total` terminal width.
    pub(crate) fn fit(left: usize, middle: usize, rights: Vec<usize>, total: usize) -> Self {
        let fixed = INDENT_WIDTH
            + left
            + PADDING_WIDTH
            + rights.iter().map(|right| right + PADDING_WIDTH).sum::<usize>();
        let target = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
        let available = target.saturating_sub(fixed);
        let middle = middle.min(available).max(MINIMUM_MIDDLE_WIDTH);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Fixed columns take {fixed} of {total}, selecting middle width {middle}.");
        }

        Self {
            left,
            middle,
            rights,
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str, rights: &[String]) -> Vec<String> {
        assert!(
            rights.len() <= self.rights.len(),
            "internal error - cannot render more right columns than were fit"
        );
        let indent = INDENT_WIDTH;
        let padding = PADDING_WIDTH;
        let left_width = self.left;
        let middle_width = self.middle;
        let mut lines = wrap(middle, middle_width);

        if lines.is_empty() {
            lines.push(String::default());
        }

        let mut out = Vec::default();

        for (i, part) in lines.iter().enumerate() {
            let mut row = if i == 0 {
                format!("{:indent$}{left:left_width$}{:padding$}", "", "")
            } else {
                format!("{:indent$}{:left_width$}{:padding$}", "", "", "")
            };

            if i == 0 && !rights.is_empty() {
                row.push_str(&format!("{part:middle_width$}"));

                for (right, &width) in rights.iter().zip(self.rights.iter()) {
                    row.push_str(&format!("{:padding$}{right:width$}", ""));
                }
            } else {
                row.push_str(part);
            }

            out.push(row.trim_end().to_string());
        }

        out
    }
}

/// Break `paragraph` into lines of at most `width` characters.
/// Words longer than a line are hyphenated.
pub(crate) fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    assert!(width >= 2, "internal error - cannot wrap below 2 characters");
    let mut lines = Vec::default();
    let mut current = String::default();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if current_width > 0 && current_width + 1 + chars.len() <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + chars.len();
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
        }

        while chars.len() > width {
            let rest = chars.split_off(width - 1);
            lines.push(format!("{}-", chars.into_iter().collect::<String>()));
            chars = rest;
        }

        current_width = chars.len();
        current = chars.into_iter().collect();
    }

    if current_width > 0 {
        lines.push(current);
    }

    lines
}

/// The output sink for help, version and error messages.
pub trait UserInterface {
    /// Print an informational message (help, version).
    fn print(&self, message: String);

    /// Print an error message.
    fn print_error(&self, message: String);
}

/// Prints messages to `stdout`, and errors to `stderr`.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}
