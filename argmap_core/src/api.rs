mod command;
mod core;
mod parameter;
mod validate;

pub use self::core::*;
pub use command::*;
pub use parameter::*;
pub use validate::ConfigError;
pub(crate) use validate::validate;
