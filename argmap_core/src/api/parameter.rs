use std::marker::PhantomData;

use crate::convert::OptionValue;
use crate::path::PropertyPath;
use crate::registry::OptionConfig;

/// An option of the model `M`, bound to a field of type `T`.
///
/// There are two classes of options:
/// * *named* options, matched by `--long` or `-s` on the Cli ([`Parameter::option`]).
/// * *positional* options, matched by their position on the Cli ([`Parameter::positional`]).
///
/// The field type `T` determines how values are converted:
/// a scalar `T` takes a single value, `Option<T>` may take no value, and `Vec<T>` collects all values.
pub struct Parameter<M, T> {
    inner: OptionConfig<M>,
    _phantom: PhantomData<fn() -> T>,
}

impl<M, T> std::fmt::Debug for Parameter<M, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match (self.inner.position, self.inner.short) {
            (Some(position), _) => format!("{n}@{position}", n = self.inner.long),
            (None, Some(short)) => format!("--{n}, -{short}", n = self.inner.long),
            (None, None) => format!("--{n}", n = self.inner.long),
        };

        write!(
            f,
            "Parameter[{t}, {name}, {path}]",
            t = std::any::type_name::<T>(),
            path = self.inner.path,
        )
    }
}

impl<M: 'static, T: OptionValue> Parameter<M, T> {
    /// Create a named option.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, CommandLineMapper, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Model {
    ///     verbose: bool,
    ///     level: u8,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("program")
    ///     .add(Parameter::option(property!(Model, verbose), "verbose", None))
    ///     .add(Parameter::option(property!(Model, level), "level", Some('l')))
    ///     .build();
    ///
    /// let model = mapper.parse_tokens(vec!["--verbose", "-l", "3"].as_slice()).unwrap();
    ///
    /// assert!(model.verbose);
    /// assert_eq!(model.level, 3);
    /// ```
    pub fn option(
        path: PropertyPath<M, T>,
        name: impl Into<String>,
        short: Option<char>,
    ) -> Self {
        let mut inner = OptionConfig::new(name, path);
        inner.short = short;
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    /// Create a positional option.
    /// Positional values are assigned in order of `position`, irrespective of registration order.
    ///
    /// A list (`Vec<T>`) positional option collects every positional value, so it must be the only positional option of its scope.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, CommandLineMapper, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Model {
    ///     source: String,
    ///     target: String,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("copy")
    ///     .add(Parameter::positional(property!(Model, target), "target", 1))
    ///     .add(Parameter::positional(property!(Model, source), "source", 0))
    ///     .build();
    ///
    /// let model = mapper.parse_tokens(vec!["a.txt", "b.txt"].as_slice()).unwrap();
    ///
    /// assert_eq!(model.source, "a.txt");
    /// assert_eq!(model.target, "b.txt");
    /// ```
    pub fn positional(path: PropertyPath<M, T>, name: impl Into<String>, position: usize) -> Self {
        let mut inner = OptionConfig::new(name, path);
        inner.position.replace(position);
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    /// Document the help message for this option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.inner.description.replace(description.into());
        self
    }

    /// Require this option to receive a value.
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, CommandLineMapper, Parameter, Parsed, UsageError};
    ///
    /// #[derive(Debug, Default, PartialEq)]
    /// struct Model {
    ///     name: String,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("program")
    ///     .add(Parameter::option(property!(Model, name), "name", None).required())
    ///     .build();
    ///
    /// assert_eq!(
    ///     mapper.map(&["--name", "x"]),
    ///     Ok(Parsed::Model(Model { name: "x".to_string() })),
    /// );
    /// assert_eq!(
    ///     mapper.map(&[] as &[&str]),
    ///     Err(UsageError::RequiredOption("name".to_string())),
    /// );
    /// ```
    pub fn required(mut self) -> Self {
        self.inner.required = true;
        self
    }

    /// Hide this option from the Cli.
    /// A disabled option is neither matched nor shown in the help, but still receives its default.
    pub fn disabled(mut self) -> Self {
        self.inner.disabled = true;
        self
    }

    /// Set the value assigned when the option is absent from the Cli.
    /// Without a default, an absent option is assigned its type's zero value (ex: `0`, `false`, `None`, `vec![]`).
    ///
    /// ### Example
    /// ```
    /// # use argmap_core as argmap;
    /// use argmap::{property, CommandLineMapper, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Model {
    ///     port: u16,
    /// }
    ///
    /// let mapper = CommandLineMapper::<Model>::new("server")
    ///     .add(Parameter::option(property!(Model, port), "port", Some('p')).default_value(8080))
    ///     .build();
    ///
    /// assert_eq!(mapper.parse_tokens(&[] as &[&str]).unwrap().port, 8080);
    /// assert_eq!(mapper.parse_tokens(vec!["-p", "80"].as_slice()).unwrap().port, 80);
    /// ```
    pub fn default_value(mut self, value: T) -> Self {
        self.inner.default.replace(value.into_value());
        self
    }

    pub(crate) fn consume(self) -> OptionConfig<M> {
        self.inner
    }
}
