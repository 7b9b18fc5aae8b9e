mod core;
mod culture;
mod value;

pub use self::core::*;
pub use culture::*;
pub use value::*;
