pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const POSITIONAL_SEPARATOR: &str = "--";
pub(crate) const ASSIGNMENT_OPERATORS: [char; 2] = ['=', ':'];
pub(crate) const QUOTES: [char; 2] = ['"', '\''];

pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_SHORT: char = 'v';
pub(crate) const VERSION_MESSAGE: &str = "Show the version and exit.";
