use crate::api::Parameter;
use crate::convert::OptionValue;
use crate::path::PropertyPath;
use crate::registry::{CommandConfig, OptionConfig};

#[cfg(feature = "unit_test")]
use crate::api::{CommandLineMapper, ConfigError};
#[cfg(feature = "unit_test")]
use crate::parser::ArgsMapper;

/// A command (or sub-command) of the model `M`, mapping into its own model `S`.
///
/// The command's model is reached from `M` through a [`PropertyPath`].
/// Use [`PropertyPath::nested`] for an `Option<S>` field, which is instantiated when the command is selected.
///
/// A command either takes positional options, or has sub-commands; not both.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::{property, Command, CommandLineMapper, Parameter, PropertyPath};
///
/// #[derive(Default)]
/// struct Git {
///     remote: Option<Remote>,
/// }
///
/// #[derive(Default)]
/// struct Remote {
///     add: Option<RemoteAdd>,
/// }
///
/// #[derive(Default)]
/// struct RemoteAdd {
///     name: String,
///     url: String,
/// }
///
/// let mapper = CommandLineMapper::<Git>::new("git")
///     .command(
///         Command::new("remote", PropertyPath::nested("remote", |g: &mut Git| &mut g.remote))
///             .about("Manage the remotes.")
///             .command(
///                 Command::new("add", PropertyPath::nested("add", |r: &mut Remote| &mut r.add))
///                     .add(Parameter::positional(property!(RemoteAdd, name), "name", 0))
///                     .add(Parameter::positional(property!(RemoteAdd, url), "url", 1)),
///             ),
///     )
///     .build();
///
/// let git = mapper
///     .parse_tokens(vec!["remote", "add", "origin", "https://host/repo"].as_slice())
///     .unwrap();
/// let add = git.remote.unwrap().add.unwrap();
///
/// assert_eq!(add.name, "origin");
/// assert_eq!(add.url, "https://host/repo");
/// ```
pub struct Command<M, S> {
    name: String,
    path: PropertyPath<M, S>,
    about: Option<String>,
    options: Vec<OptionConfig<S>>,
    commands: Vec<CommandConfig<S>>,
    disabled: bool,
    show_usage_when_no_args: bool,
}

impl<M, S> std::fmt::Debug for Command<M, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("options", &self.options)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<M: 'static, S: 'static> Command<M, S> {
    /// Create a command named `name`, mapping into the field at `path`.
    pub fn new(name: impl Into<String>, path: PropertyPath<M, S>) -> Self {
        Self {
            name: name.into(),
            path,
            about: None,
            options: Vec::default(),
            commands: Vec::default(),
            disabled: false,
            show_usage_when_no_args: false,
        }
    }

    /// Document the about message for this command.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option to the command.
    pub fn add<T: OptionValue>(mut self, parameter: Parameter<S, T>) -> Self {
        self.options.push(parameter.consume());
        self
    }

    /// Add a sub-command to the command.
    pub fn command<U: 'static>(mut self, command: Command<S, U>) -> Self {
        self.commands.push(command.consume());
        self
    }

    /// Hide this command from the Cli.
    /// Selecting a disabled command is an unknown command error.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Show the command's usage, rather than mapping, when it receives no arguments.
    pub fn show_usage_when_no_args(mut self) -> Self {
        self.show_usage_when_no_args = true;
        self
    }

    pub(crate) fn consume(self) -> CommandConfig<M> {
        let Command {
            name,
            path,
            about,
            options,
            commands,
            disabled,
            show_usage_when_no_args,
        } = self;
        let mut config = CommandConfig::new(name, path, options, commands);
        config.description = about;
        config.disabled = disabled;
        config.show_usage_when_no_args = show_usage_when_no_args;
        config
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build this command's options and sub-commands into a standalone [`ArgsMapper`] over the command's model.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, Command, Parameter, PropertyPath};
    ///
    /// #[derive(Default)]
    /// struct Root {
    ///     serve: Option<Serve>,
    /// }
    ///
    /// #[derive(Default)]
    /// struct Serve {
    ///     port: u16,
    /// }
    ///
    /// // Function under test.
    /// // We want to make sure the command is wired up correctly.
    /// pub fn serve_command() -> Command<Root, Serve> {
    ///     Command::new("serve", PropertyPath::nested("serve", |r: &mut Root| &mut r.serve))
    ///         .add(Parameter::option(property!(Serve, port), "port", Some('p')))
    /// }
    ///
    /// let mapper = serve_command().build_mapper().unwrap();
    /// let serve = mapper.parse_tokens(vec!["-p", "80"].as_slice()).unwrap();
    /// assert_eq!(serve.port, 80);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_mapper(self) -> Result<ArgsMapper<S>, ConfigError>
    where
        S: Default,
    {
        let Command {
            name,
            about,
            options,
            commands,
            ..
        } = self;
        CommandLineMapper::from_parts(name, about, options, commands).build_mapper()
    }
}
