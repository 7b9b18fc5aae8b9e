use std::collections::HashSet;

use thiserror::Error;

use crate::binder::{bind, bind_default, enter};
use crate::constant::*;
use crate::convert::ConvertError;
use crate::registry::{positional_options, CommandConfig, OptionConfig, Registry};
use crate::settings::{NameComparison, Settings};
use crate::tokens::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the Cli input, as opposed to the mapper's configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsageError {
    /// A root option key matched no enabled option.
    #[error("Unknown option '{0}'.")]
    UnknownOption(String),

    /// A command option key matched no enabled option of the command.
    #[error("Unknown option '{name}' for command '{command}'.")]
    UnknownCommandOption {
        #[allow(missing_docs)]
        command: String,
        #[allow(missing_docs)]
        name: String,
    },

    /// A token in command position matched no enabled command.
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    /// A required root option received no value.
    #[error("Required option '{0}' is missing.")]
    RequiredOption(String),

    /// A required command option received no value.
    #[error("Required option '{name}' is missing for command '{command}'.")]
    RequiredCommandOption {
        #[allow(missing_docs)]
        command: String,
        #[allow(missing_docs)]
        name: String,
    },

    /// A positional value beyond the declared root positional options.
    #[error("No positional option matches the value '{0}'.")]
    NoMatchedValueForPositionalOption(String),

    /// A positional value beyond the declared command positional options.
    #[error("No positional option of command '{command}' matches the value '{value}'.")]
    NoMatchedValueForCommandPositionalOption {
        #[allow(missing_docs)]
        command: String,
        #[allow(missing_docs)]
        value: String,
    },

    /// The values of an option could not be converted to its type.
    #[error("Invalid value '{}' for option '{name}': {reason}", .values.join(" "))]
    InvalidOptionValue {
        #[allow(missing_docs)]
        name: String,
        #[allow(missing_docs)]
        values: Vec<String>,
        #[allow(missing_docs)]
        #[source]
        reason: ConvertError,
    },

    /// A single occurrence of a non-list option carried several values.
    #[error("Option '{name}' takes a single value, but received {count}.")]
    MultipleValueForNotCollectionType {
        #[allow(missing_docs)]
        name: String,
        #[allow(missing_docs)]
        count: usize,
    },
}

/// The outcome of a successful mapping.
#[derive(Debug, PartialEq)]
pub enum Parsed<M> {
    /// The populated model.
    Model(M),
    /// The help switch was used, or a "show usage when no args" command received no tokens.
    Help {
        /// The names of the resolved command chain (empty for the root).
        commands: Vec<String>,
    },
    /// The version switch was used.
    Version,
}

/// Map `args` into a fresh model `M`.
pub(crate) fn map<M: Default>(
    registry: &Registry<M>,
    settings: &Settings,
    args: &[String],
) -> Result<Parsed<M>, UsageError> {
    let comparison = settings.get_name_comparison();

    if let Some(first) = args.first() {
        if is_reserved(first, VERSION_NAME, VERSION_SHORT, comparison) {
            return Ok(Parsed::Version);
        }
    }

    let flat = args.is_empty() || is_option_token(&args[0]) || registry.commands.is_empty();

    if flat {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Mapping {args:?} in flat mode.");
        }

        if requests_help(args, comparison) {
            return Ok(Parsed::Help {
                commands: Vec::default(),
            });
        }

        let mut model = M::default();
        Scope::root(&registry.options).bind(&mut model, args, settings)?;
        return Ok(Parsed::Model(model));
    }

    let (chain, offset) = descend(registry, args, comparison)?;
    let stream = &args[offset..];
    let names: Vec<String> = chain.iter().map(|c| c.name.clone()).collect();
    let terminal = chain
        .last()
        .expect("internal error - command mode must resolve at least one command");

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Mapping {stream:?} onto the command chain {names:?}.");
    }

    if requests_help(stream, comparison) || (stream.is_empty() && terminal.show_usage_when_no_args)
    {
        return Ok(Parsed::Help { commands: names });
    }

    let mut model = M::default();
    enter(&mut model, &chain);

    // The scopes passed through only receive their defaults.
    for option in registry.options.iter() {
        bind_default(&mut model, option);
    }

    for command in &chain[..chain.len() - 1] {
        for option in command.options.iter() {
            bind_default(&mut model, option);
        }
    }

    Scope::command(&terminal.options, names.join(" ")).bind(&mut model, stream, settings)?;
    Ok(Parsed::Model(model))
}

fn is_reserved(token: &str, name: &str, short: char, comparison: NameComparison) -> bool {
    if let Some(rest) = token.strip_prefix(LONG_PREFIX) {
        comparison.matches(name, rest)
    } else if let Some(rest) = token.strip_prefix(SHORT_PREFIX) {
        let mut chars = rest.chars();
        chars.next() == Some(short) && chars.next().is_none()
    } else {
        false
    }
}

fn requests_help(args: &[String], comparison: NameComparison) -> bool {
    named_range(args)
        .iter()
        .any(|token| is_reserved(token, HELP_NAME, HELP_SHORT, comparison))
}

fn find_command<'r, M>(
    commands: &'r [CommandConfig<M>],
    token: &str,
    comparison: NameComparison,
) -> Option<&'r CommandConfig<M>> {
    commands
        .iter()
        .find(|command| comparison.matches(&command.name, token))
}

/// Walk the command chain named by the leading tokens of `args`.
/// Returns the chain, and the offset of the terminal command's token stream.
fn descend<'r, M>(
    registry: &'r Registry<M>,
    args: &[String],
    comparison: NameComparison,
) -> Result<(Vec<&'r CommandConfig<M>>, usize), UsageError> {
    let first = &args[0];
    let mut chain = match find_command(&registry.commands, first, comparison) {
        Some(command) if !command.disabled => vec![command],
        _ => return Err(UsageError::UnknownCommand(first.clone())),
    };
    let mut offset = 1;

    while let Some(token) = args.get(offset) {
        let current = chain
            .last()
            .expect("internal error - the chain cannot be empty");

        if !positional_options(&current.options).is_empty()
            || token == POSITIONAL_SEPARATOR
            || is_option_token(token)
        {
            break;
        }

        match find_command(&current.commands, token, comparison) {
            Some(command) if command.disabled => {
                return Err(UsageError::UnknownCommand(token.clone()));
            }
            Some(command) => {
                chain.push(command);
                offset += 1;
            }
            None => break,
        }
    }

    Ok((chain, offset))
}

/// The options of the root, or of a command, and the naming used for its errors.
struct Scope<'r, M> {
    options: &'r [OptionConfig<M>],
    command: Option<String>,
}

impl<'r, M> Scope<'r, M> {
    fn root(options: &'r [OptionConfig<M>]) -> Self {
        Self {
            options,
            command: None,
        }
    }

    fn command(options: &'r [OptionConfig<M>], command: String) -> Self {
        Self {
            options,
            command: Some(command),
        }
    }

    fn unknown_option(&self, key: &str) -> UsageError {
        match &self.command {
            None => UsageError::UnknownOption(key.to_string()),
            Some(command) => UsageError::UnknownCommandOption {
                command: command.clone(),
                name: key.to_string(),
            },
        }
    }

    fn required(&self, name: &str) -> UsageError {
        match &self.command {
            None => UsageError::RequiredOption(name.to_string()),
            Some(command) => UsageError::RequiredCommandOption {
                command: command.clone(),
                name: name.to_string(),
            },
        }
    }

    fn unmatched_positional(&self, value: String) -> UsageError {
        match &self.command {
            None => UsageError::NoMatchedValueForPositionalOption(value),
            Some(command) => UsageError::NoMatchedValueForCommandPositionalOption {
                command: command.clone(),
                value,
            },
        }
    }

    fn find_named(
        &self,
        group: &TokenGroup,
        comparison: NameComparison,
    ) -> Option<&'r OptionConfig<M>> {
        let mut candidates = self
            .options
            .iter()
            .filter(|option| !option.disabled && !option.is_positional());

        match group.kind() {
            MatchKind::LongName => {
                candidates.find(|option| comparison.matches(&option.long, group.name()))
            }
            MatchKind::ShortName => {
                let mut chars = group.name().chars();
                match (chars.next(), chars.next()) {
                    (Some(short), None) => candidates.find(|option| option.short == Some(short)),
                    _ => None,
                }
            }
        }
    }

    fn bind(&self, model: &mut M, args: &[String], settings: &Settings) -> Result<(), UsageError> {
        let culture = settings.get_culture();
        let groups = tokenize(args, 0);
        let mut named: Vec<(&'r OptionConfig<M>, &TokenGroup)> = Vec::default();

        for group in groups.iter() {
            match self.find_named(group, settings.get_name_comparison()) {
                Some(option) => named.push((option, group)),
                None => return Err(self.unknown_option(group.key())),
            }
        }

        let positionals = positional_options(self.options);
        let window = positional_window(args);
        let mut positional_values: Vec<(&'r OptionConfig<M>, Vec<String>)> = Vec::default();

        match positionals.as_slice() {
            [single] if single.kind.is_list() => {
                if !window.is_empty() {
                    positional_values.push((*single, window));
                }
            }
            _ => {
                for (index, value) in window.into_iter().enumerate() {
                    match positionals.get(index) {
                        Some(option) => positional_values.push((*option, vec![value])),
                        None => return Err(self.unmatched_positional(value)),
                    }
                }
            }
        }

        let named = merge(named, self.command.is_some())?;
        let given: HashSet<&str> = positional_values
            .iter()
            .map(|(option, _)| option.path())
            .chain(named.iter().map(|(option, _)| option.path()))
            .collect();

        for option in self.options.iter() {
            if option.required && !option.disabled && !given.contains(option.path()) {
                return Err(self.required(&option.long));
            }
        }

        for option in self.options.iter() {
            if !given.contains(option.path()) {
                bind_default(model, option);
            }
        }

        for (option, values) in positional_values.iter() {
            bind(model, option, values, culture)?;
        }

        for (option, values) in named.iter() {
            bind(model, option, values, culture)?;
        }

        Ok(())
    }
}

/// Merge the groups of options sharing a property path, ordering their values as they appeared on the Cli.
///
/// Within a command (`single_value`), one occurrence of a non-list option may carry only one value.
/// At the root, the extra values fall through to the converter, which keeps the last.
fn merge<'r, M>(
    named: Vec<(&'r OptionConfig<M>, &TokenGroup)>,
    single_value: bool,
) -> Result<Vec<(&'r OptionConfig<M>, Vec<String>)>, UsageError> {
    let mut merged: Vec<(&'r OptionConfig<M>, Vec<&Occurrence>)> = Vec::default();

    for (option, group) in named {
        if single_value && !option.kind.is_list() {
            if let Some(occurrence) = group
                .occurrences()
                .iter()
                .find(|occurrence| occurrence.values.len() > 1)
            {
                return Err(UsageError::MultipleValueForNotCollectionType {
                    name: option.long.clone(),
                    count: occurrence.values.len(),
                });
            }
        }

        match merged.iter_mut().find(|(o, _)| o.path == option.path) {
            Some((_, occurrences)) => occurrences.extend(group.occurrences()),
            None => merged.push((option, group.occurrences().iter().collect())),
        }
    }

    Ok(merged
        .into_iter()
        .map(|(option, mut occurrences)| {
            occurrences.sort_by_key(|occurrence| occurrence.offset);
            let values = occurrences
                .into_iter()
                .flat_map(|occurrence| occurrence.values.iter().cloned())
                .collect();
            (option, values)
        })
        .collect())
}
