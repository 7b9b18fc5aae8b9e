//! `argmap` is a declarative command line argument mapper for Rust.
//!
//! Rather than parsing into loose variables, `argmap` maps the Cli tokens onto the fields of a typed data model.
//! Each option is declared against a [`PropertyPath`] into the model, and the mapper writes the converted values through that path.
//! Specifically, `argmap` attempts to prioritize the following design concerns:
//! * *Typed models*:
//! The user declares a `Default` model, and receives it populated.
//! No `&str -> T` conversion is done by hand.
//! * *Commands as models*:
//! Commands (and sub-commands) map into their own nested models, which are only instantiated when the command is selected.
//! * *Explicit configuration*:
//! The name comparison, the culture used for number and date conversions, and the version are all set via [`Settings`].
//! Nothing is read from the host environment.
//! * *Mapping without side effects*:
//! [`ArgsMapper::map`] reports help and version requests as values, so a mapper may be exercised without printing or exiting.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! usage: summer [-h] ITEM ... [-x]
//!
//! Sum the items.
//!
//! positional arguments:
//!  ITEM ...       The items to sum.  [u32]
//!
//! options:
//!  -h, --help     Show this help message and exit.
//!  -x, --verbose  Show the items before the sum.  bool
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer 1 blah
//! Parse error: Invalid value '1 blah' for option 'item': cannot convert 'blah' to u32.
//! ```
//!
//! # Options
//! Configure `argmap` by starting with a [`CommandLineMapper`] and `add`ing parameters.
//! There are two classes of parameters: [`Parameter::option`] and [`Parameter::positional`].
//!
//! The type of the property path decides how its values are converted:
//! * A scalar `T` (ex: `u32`, `String`, `chrono::NaiveDateTime`) takes precisely one value.
//! A `bool` option is a flag: it takes no value (`--verbose`), or an explicit one (`--verbose false`).
//! * `Option<T>` takes at most one value; an empty value assigns `None`.
//! * `Vec<T>` collects every value, across every appearance of the option.
//!
//! Custom enums may be used by deriving [`ArgEnum`].
//!
//! ```
//! use argmap::{property, ArgEnum, CommandLineMapper, Parameter};
//!
//! #[derive(Debug, PartialEq, ArgEnum)]
//! enum Colour {
//!     Red,
//!     Green,
//!     #[argmap(name = "sky")]
//!     Blue,
//! }
//!
//! #[derive(Default)]
//! struct Model {
//!     colours: Vec<Colour>,
//! }
//!
//! let mapper = CommandLineMapper::<Model>::new("paint")
//!     .add(Parameter::option(property!(Model, colours), "colour", Some('c')))
//!     .build();
//!
//! let model = mapper.parse_tokens(vec!["-c", "red", "SKY", "1"].as_slice()).unwrap();
//! assert_eq!(model.colours, vec![Colour::Red, Colour::Blue, Colour::Green]);
//! ```
//!
//! ### Defaults
//! Options absent from the Cli are assigned their [`Parameter::default_value`], or otherwise the zero value of their type.
//! Defaults are assigned before the Cli values, and only once per mapping.
//!
//! # Commands
//! Commands are declared via [`Command`], each against a property path into its own model.
//! The first token selects the command; each following token which names a sub-command descends further.
//! The remaining tokens are mapped onto the deepest command selected.
//!
//! ```no_run
#![doc = include_str!("../demos/todo.rs")]
//! ```
//!
//! ```console
//! $ todo add "Buy milk" -p urgent -t home errands
//! todo.txt: add 'Buy milk' (priority Some(High), tags ["home", "errands"])
//!
//! $ todo LIST --limit 3
//! todo.txt: list (all false, limit Some(3))
//!
//! $ todo add
//! usage: todo add [-h] TITLE [-p PRIORITY] [-t TAG ...]
//! <truncated>
//!
//! $ todo remove
//! Parse error: Unknown command 'remove'.
//! ```
//!
//! When the first token is an option (or no command is configured), the tokens are mapped onto the root model only.
//!
//! # Cli Semantics
//! * Options are matched by `--NAME`, or `-N` for a short name.
//! An option takes every following token, up until the next option.
//! * A value may be attached with `=` or `:` (ex: `--key=value` or `-k:value`).
//! Surrounding quotes are removed from attached values.
//! * Short names may be stacked: `-abc` is equivalent to `-a -b -c`.
//! The values following a stack are given to each of its options.
//! * Positional values come before any option, or after the `--` separator.
//! * The help switch (`-h` or `--help`) may appear anywhere; the version switch (`-v` or `--version`) must be the first token.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit the mapping decisions as `tracing` debug events.
pub use argmap_core::*;
pub use argmap_derive::ArgEnum;
