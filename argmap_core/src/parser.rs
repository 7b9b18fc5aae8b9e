mod interface;
mod middleware;
mod printer;

pub use interface::{ConsoleInterface, UserInterface};
pub use middleware::ArgsMapper;
pub(crate) use printer::Printer;

#[cfg(test)]
pub(crate) use interface::util;
