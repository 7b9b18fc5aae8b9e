use std::env;

use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::registry::Registry;
use crate::resolver::{self, Parsed, UsageError};
use crate::settings::Settings;

/// The configured command line mapper.
/// Built via [`crate::CommandLineMapper::build`].
///
/// The mapper is immutable once built: every mapping starts from a fresh `M::default()`.
pub struct ArgsMapper<M> {
    registry: Registry<M>,
    settings: Settings,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<M> std::fmt::Debug for ArgsMapper<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgsMapper")
            .field("registry", &self.registry)
            .field("settings", &self.settings)
            .finish()
    }
}

impl<M> ArgsMapper<M> {
    pub(crate) fn new(
        registry: Registry<M>,
        settings: Settings,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            registry,
            settings,
            printer,
            user_interface,
        }
    }

    /// The registered options and commands.
    pub fn registry(&self) -> &Registry<M> {
        &self.registry
    }

    #[allow(missing_docs)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl<M: Default> ArgsMapper<M> {
    /// Map the input tokens onto a new model, without printing anything.
    ///
    /// A help or version request is reported as [`Parsed::Help`] or [`Parsed::Version`], rather than a model.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, CommandLineMapper, Parameter, Parsed, UsageError};
    ///
    /// #[derive(Debug, Default, PartialEq)]
    /// struct Model {
    ///     count: u32,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("program")
    ///     .add(Parameter::option(property!(Model, count), "count", Some('c')))
    ///     .build();
    ///
    /// assert_eq!(mapper.map(&["-c", "2"]), Ok(Parsed::Model(Model { count: 2 })));
    /// assert_eq!(mapper.map(&["--help"]), Ok(Parsed::Help { commands: vec![] }));
    /// assert_eq!(mapper.map(&["--other"]), Err(UsageError::UnknownOption("--other".to_string())));
    /// ```
    pub fn map<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Parsed<M>, UsageError> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        resolver::map(&self.registry, &self.settings, &tokens)
    }

    /// Run the command line mapper against the input tokens.
    ///
    /// If the tokens cannot be mapped (ex: an unknown option, an unconvertible value, etc), the error is printed and `Err(1)` is returned.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the help message is printed and `Err(0)` is returned.
    /// Likewise for the version switch (`-v` or `--version`) as the first token.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<M, i32> {
        match self.map(tokens) {
            Ok(Parsed::Model(model)) => Ok(model),
            Ok(Parsed::Help { commands }) => {
                self.printer.print_help(
                    &self.registry,
                    &commands,
                    &self.settings,
                    self.user_interface.as_ref(),
                );
                Err(0)
            }
            Ok(Parsed::Version) => {
                self.printer
                    .print_version(&self.settings, self.user_interface.as_ref());
                Err(0)
            }
            Err(error) => {
                self.user_interface
                    .print_error(format!("Parse error: {error}"));
                Err(1)
            }
        }
    }

    /// Run the command line mapper against the Cli [`env::args`].
    ///
    /// If the tokens cannot be mapped, the error is printed and the program exits with error code `1` (via [`std::process::exit`]).
    ///
    /// If help or version is requested, it is printed and the program exits with error code `0`.
    pub fn parse(&self) -> M {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(model) => model,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::path::PropertyPath;
    use crate::registry::OptionConfig;
    use crate::test::assert_contains;

    #[derive(Debug, Default, PartialEq)]
    struct Model {
        count: u32,
    }

    fn mapper(settings: Settings, interface: &InMemoryInterface) -> ArgsMapper<Model> {
        let registry = Registry {
            options: vec![OptionConfig::new(
                "count",
                PropertyPath::new("count", |m: &mut Model| &mut m.count),
            )],
            commands: Vec::default(),
        };

        ArgsMapper::new(
            registry,
            settings,
            Printer::new("program", None, None),
            Box::new(interface.clone()),
        )
    }

    #[test]
    fn parse_tokens() {
        let interface = InMemoryInterface::default();
        let mapper = mapper(Settings::default(), &interface);

        assert_eq!(
            mapper.parse_tokens(vec!["--count", "3"].as_slice()),
            Ok(Model { count: 3 })
        );
        assert_eq!(interface.consume(), (None, None));

        // The mapper may be re-used, from a fresh model each time.
        assert_eq!(mapper.parse_tokens(&[] as &[&str]), Ok(Model { count: 0 }));
    }

    #[test]
    fn parse_tokens_help() {
        let interface = InMemoryInterface::default();
        let mapper = mapper(Settings::default(), &interface);

        assert_eq!(mapper.parse_tokens(vec!["--count", "3", "-h"].as_slice()), Err(0));

        let message = interface.consume_message();
        assert_contains!(message, "usage: program [-h] [--count COUNT]");
    }

    #[test]
    fn parse_tokens_version() {
        let interface = InMemoryInterface::default();
        let mapper = mapper(Settings::default().version("0.1.0"), &interface);

        assert_eq!(mapper.parse_tokens(vec!["--version"].as_slice()), Err(0));
        assert_eq!(interface.consume_message(), "program 0.1.0");
    }

    #[test]
    fn parse_tokens_error() {
        let interface = InMemoryInterface::default();
        let mapper = mapper(Settings::default(), &interface);

        assert_eq!(mapper.parse_tokens(vec!["--count", "x"].as_slice()), Err(1));
        assert_contains!(
            interface.consume_error(),
            "Parse error: Invalid value 'x' for option 'count'"
        );

        assert_eq!(mapper.parse_tokens(vec!["--other"].as_slice()), Err(1));
        assert_eq!(
            interface.consume_error(),
            "Parse error: Unknown option '--other'."
        );
    }

    #[test]
    fn map() {
        let interface = InMemoryInterface::default();
        let mapper = mapper(Settings::default(), &interface);

        assert_eq!(
            mapper.map(&["--count=4".to_string()]),
            Ok(Parsed::Model(Model { count: 4 }))
        );
        assert_eq!(mapper.map(&["-v"]), Ok(Parsed::Version));
        assert_eq!(interface.consume(), (None, None));
    }
}
