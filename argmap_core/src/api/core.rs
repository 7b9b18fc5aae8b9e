use crate::api::{validate, Command, ConfigError, Parameter};
use crate::convert::OptionValue;
use crate::parser::{ArgsMapper, ConsoleInterface, Printer, UserInterface};
use crate::registry::Registry;
use crate::settings::Settings;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The base command line mapper, over the model `M`.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::CommandLineMapper;
///
/// #[derive(Default)]
/// struct Model {}
///
/// let mapper = CommandLineMapper::<Model>::new("program")
///     // Configure with CommandLineMapper::add and CommandLineMapper::command.
///     .build();
/// mapper.parse_tokens(&[] as &[&str]).unwrap();
/// ```
pub struct CommandLineMapper<M> {
    program: String,
    about: Option<String>,
    settings: Settings,
    registry: Registry<M>,
}

impl<M> std::fmt::Debug for CommandLineMapper<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineMapper")
            .field("program", &self.program)
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .finish()
    }
}

impl<M: 'static> CommandLineMapper<M> {
    /// Create a command line mapper.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            settings: Settings::default(),
            registry: Registry::default(),
        }
    }

    #[cfg(feature = "unit_test")]
    pub(crate) fn from_parts(
        program: String,
        about: Option<String>,
        options: Vec<crate::registry::OptionConfig<M>>,
        commands: Vec<crate::registry::CommandConfig<M>>,
    ) -> Self {
        Self {
            program,
            about,
            settings: Settings::default(),
            registry: Registry { options, commands },
        }
    }

    /// Document the about message for this command line mapper.
    /// If repeated, only the final message will apply.
    ///
    /// An about message documents the program in full sentence/paragraph format.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Set the mapping configuration.
    /// If repeated, only the final settings will apply.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, CommandLineMapper, NameComparison, Parameter, Settings};
    ///
    /// #[derive(Default)]
    /// struct Model {
    ///     verbose: bool,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("program")
    ///     .settings(Settings::default().name_comparison(NameComparison::IgnoreCase))
    ///     .add(Parameter::option(property!(Model, verbose), "verbose", None))
    ///     .build();
    ///
    /// assert!(mapper.parse_tokens(vec!["--VERBOSE"].as_slice()).unwrap().verbose);
    /// ```
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Add a (named or positional) option to the root of the mapper.
    ///
    /// The order of options does not affect the mapping semantics.
    pub fn add<T: OptionValue>(mut self, parameter: Parameter<M, T>) -> Self {
        self.registry.options.push(parameter.consume());
        self
    }

    /// Add a top level command.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, Command, CommandLineMapper, Parameter, PropertyPath};
    ///
    /// #[derive(Default)]
    /// struct Model {
    ///     verbose: bool,
    ///     run: Option<Run>,
    /// }
    ///
    /// #[derive(Default)]
    /// struct Run {
    ///     target: String,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("program")
    ///     .add(Parameter::option(property!(Model, verbose), "verbose", None))
    ///     .command(
    ///         Command::new("run", PropertyPath::nested("run", |m: &mut Model| &mut m.run))
    ///             .add(Parameter::positional(property!(Run, target), "target", 0)),
    ///     )
    ///     .build();
    ///
    /// let model = mapper.parse_tokens(vec!["run", "all"].as_slice()).unwrap();
    /// assert_eq!(model.run.unwrap().target, "all");
    ///
    /// // Options first selects the root options.
    /// let model = mapper.parse_tokens(vec!["--verbose"].as_slice()).unwrap();
    /// assert!(model.verbose);
    /// assert!(model.run.is_none());
    /// ```
    pub fn command<S: 'static>(mut self, command: Command<M, S>) -> Self {
        self.registry.commands.push(command.consume());
        self
    }

    /// Build the command line mapper with a custom output sink.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<ArgsMapper<M>, ConfigError> {
        let CommandLineMapper {
            program,
            about,
            settings,
            registry,
        } = self;
        validate(&registry, settings.get_name_comparison())?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built the mapper for '{program}': {registry:?}.");
        }

        Ok(ArgsMapper::new(
            registry,
            settings,
            Printer::terminal(program, about),
            user_interface,
        ))
    }

    /// Build the command line mapper as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_mapper(self) -> Result<ArgsMapper<M>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line mapper.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> ArgsMapper<M> {
        match self.build_mapper() {
            Ok(mapper) => mapper,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
