//! Core module for `argmap`.
//! See [documentation root](https://docs.rs/argmap/latest/argmap/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod binder;
mod constant;
mod convert;
mod model;
mod parser;
mod path;
mod registry;
mod resolver;
mod settings;
mod tokens;

pub use api::*;
pub use convert::*;
pub use model::*;
pub use parser::{ArgsMapper, ConsoleInterface, UserInterface};
pub use path::PropertyPath;
pub use registry::{CommandConfig, OptionConfig, Registry};
pub use resolver::{Parsed, UsageError};
pub use settings::{NameComparison, Settings};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
