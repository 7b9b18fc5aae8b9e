use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::constant::*;
use crate::convert::is_supported_type;
use crate::model::TypeKind;
use crate::registry::{CommandConfig, OptionConfig, Registry};
use crate::settings::NameComparison;

/// A mistake in the mapper's configuration, as opposed to the Cli input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Check the registration of every scope, from the root down.
pub(crate) fn validate<M>(
    registry: &Registry<M>,
    comparison: NameComparison,
) -> Result<(), ConfigError> {
    let mut kinds: HashMap<String, TypeKind> = HashMap::default();
    validate_scope(
        "root",
        &registry.options,
        &registry.commands,
        comparison,
        &mut kinds,
    )
}

fn validate_scope<M>(
    scope: &str,
    options: &[OptionConfig<M>],
    commands: &[CommandConfig<M>],
    comparison: NameComparison,
    kinds: &mut HashMap<String, TypeKind>,
) -> Result<(), ConfigError> {
    let mut longs: HashSet<String> = HashSet::default();
    let mut shorts: HashSet<char> = HashSet::default();
    let mut positions: HashSet<usize> = HashSet::default();
    let mut lists = 0;

    for option in options.iter() {
        validate_name(scope, "option", &option.long)?;

        if comparison.matches(HELP_NAME, &option.long)
            || comparison.matches(VERSION_NAME, &option.long)
        {
            return Err(ConfigError(format!(
                "{scope} option '{}' uses a reserved name.",
                option.long
            )));
        }

        if !longs.insert(comparison.normalize(&option.long)) {
            return Err(ConfigError(format!(
                "{scope} cannot duplicate the option '{}'.",
                option.long
            )));
        }

        if let Some(short) = option.short {
            if !short.is_alphabetic() {
                return Err(ConfigError(format!(
                    "{scope} option '{}' has an invalid short name '{short}'.",
                    option.long
                )));
            }

            if short == HELP_SHORT || short == VERSION_SHORT {
                return Err(ConfigError(format!(
                    "{scope} option '{}' uses a reserved short name '{short}'.",
                    option.long
                )));
            }

            if !shorts.insert(short) {
                return Err(ConfigError(format!(
                    "{scope} cannot duplicate the short option '{short}'.",
                )));
            }
        }

        if let Some(position) = option.position {
            if !positions.insert(position) {
                return Err(ConfigError(format!(
                    "{scope} cannot duplicate the position {position} (option '{}').",
                    option.long
                )));
            }

            if option.kind.is_list() {
                lists += 1;
            }
        }

        if !is_supported_type(&option.kind) {
            return Err(ConfigError(format!(
                "{scope} option '{}' has the unsupported type {}.",
                option.long, option.kind
            )));
        }

        match kinds.get(&option.path) {
            Some(kind) if kind != &option.kind => {
                return Err(ConfigError(format!(
                    "property '{}' is registered as both {kind} and {}.",
                    option.path, option.kind
                )));
            }
            Some(_) => {}
            None => {
                kinds.insert(option.path.clone(), option.kind);
            }
        }
    }

    if lists > 0 && positions.len() > 1 {
        return Err(ConfigError(format!(
            "{scope} has a list positional option, which must be its only positional option."
        )));
    }

    if !positions.is_empty() && !commands.is_empty() {
        return Err(ConfigError(format!(
            "{scope} cannot have both positional options and commands."
        )));
    }

    let mut names: HashSet<String> = HashSet::default();

    for command in commands.iter() {
        validate_name(scope, "command", &command.name)?;

        if !names.insert(comparison.normalize(&command.name)) {
            return Err(ConfigError(format!(
                "{scope} cannot duplicate the command '{}'.",
                command.name
            )));
        }
    }

    for command in commands.iter() {
        let inner = match scope {
            "root" => format!("command '{}'", command.name),
            _ => format!("{scope} > '{}'", command.name),
        };
        validate_scope(
            &inner,
            &command.options,
            &command.commands,
            comparison,
            kinds,
        )?;
    }

    Ok(())
}

fn validate_name(scope: &str, class: &str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError(format!("{scope} cannot have an empty {class} name.")));
    }

    if name.starts_with(SHORT_PREFIX)
        || !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError(format!(
            "{scope} {class} '{name}' contains invalid characters."
        )));
    }

    Ok(())
}
