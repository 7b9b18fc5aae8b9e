use std::sync::Arc;

use crate::convert::OptionValue;
use crate::model::{TypeKind, Value};
use crate::path::PropertyPath;

pub(crate) type Writer<M> = Arc<dyn Fn(&mut M, Value) + Send + Sync>;
pub(crate) type Enter<M> = Arc<dyn Fn(&mut M) + Send + Sync>;

/// The registered metadata of an option, erased over the root model `M`.
pub struct OptionConfig<M> {
    pub(crate) long: String,
    pub(crate) short: Option<char>,
    pub(crate) position: Option<usize>,
    pub(crate) required: bool,
    pub(crate) disabled: bool,
    pub(crate) description: Option<String>,
    pub(crate) default: Option<Value>,
    pub(crate) zero: Option<Value>,
    pub(crate) kind: TypeKind,
    pub(crate) path: String,
    pub(crate) write: Writer<M>,
}

impl<M> std::fmt::Debug for OptionConfig<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionConfig")
            .field("long", &self.long)
            .field("short", &self.short)
            .field("position", &self.position)
            .field("kind", &self.kind)
            .field("path", &self.path)
            .finish()
    }
}

impl<M: 'static> OptionConfig<M> {
    pub(crate) fn new<T: OptionValue>(long: impl Into<String>, path: PropertyPath<M, T>) -> Self {
        let display = path.display();
        Self {
            long: long.into(),
            short: None,
            position: None,
            required: false,
            disabled: false,
            description: None,
            default: None,
            zero: T::zero().map(OptionValue::into_value),
            kind: T::type_kind(),
            path: display,
            write: Arc::new(move |model: &mut M, value: Value| {
                let value = T::from_value(value)
                    .expect("internal error - converted value must match the declared type");
                *path.apply(model) = value;
            }),
        }
    }

    /// Re-root this option onto the model `R`, which reaches `M` through `via`.
    pub(crate) fn lift<R: 'static>(self, via: &PropertyPath<R, M>) -> OptionConfig<R> {
        let OptionConfig {
            long,
            short,
            position,
            required,
            disabled,
            description,
            default,
            zero,
            kind,
            path,
            write,
        } = self;
        let via = via.clone();

        OptionConfig {
            long,
            short,
            position,
            required,
            disabled,
            description,
            default,
            zero,
            kind,
            path: format!("{}.{path}", via.display()),
            write: Arc::new(move |model: &mut R, value: Value| write(via.apply(model), value)),
        }
    }
}

impl<M> OptionConfig<M> {
    /// The long name, ex: `verbose` for `--verbose`.
    pub fn long_name(&self) -> &str {
        &self.long
    }

    /// The single letter short name, ex: `v` for `-v`.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The position of a positional option.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Whether this option is matched by position rather than by name.
    pub fn is_positional(&self) -> bool {
        self.position.is_some()
    }

    #[allow(missing_docs)]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether this option is hidden from the Cli.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[allow(missing_docs)]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The configured default value.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The declared type.
    pub fn type_kind(&self) -> TypeKind {
        self.kind
    }

    /// The dotted property path from the root model, ex: `database.port`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn assign(&self, model: &mut M, value: Value) {
        (self.write)(model, value)
    }
}

/// The registered metadata of a command (or sub-command), erased over the root model `M`.
pub struct CommandConfig<M> {
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) options: Vec<OptionConfig<M>>,
    pub(crate) commands: Vec<CommandConfig<M>>,
    pub(crate) disabled: bool,
    pub(crate) show_usage_when_no_args: bool,
    pub(crate) description: Option<String>,
    pub(crate) enter: Enter<M>,
}

impl<M> std::fmt::Debug for CommandConfig<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandConfig")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("options", &self.options)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<M: 'static> CommandConfig<M> {
    pub(crate) fn new<S: 'static>(
        name: impl Into<String>,
        path: PropertyPath<M, S>,
        options: Vec<OptionConfig<S>>,
        commands: Vec<CommandConfig<S>>,
    ) -> Self {
        let options = options.into_iter().map(|o| o.lift(&path)).collect();
        let commands = commands.into_iter().map(|c| c.lift(&path)).collect();
        let display = path.display();

        Self {
            name: name.into(),
            path: display,
            options,
            commands,
            disabled: false,
            show_usage_when_no_args: false,
            description: None,
            enter: Arc::new(move |model: &mut M| {
                path.apply(model);
            }),
        }
    }

    pub(crate) fn lift<R: 'static>(self, via: &PropertyPath<R, M>) -> CommandConfig<R> {
        let CommandConfig {
            name,
            path,
            options,
            commands,
            disabled,
            show_usage_when_no_args,
            description,
            enter,
        } = self;
        let options = options.into_iter().map(|o| o.lift(via)).collect();
        let commands = commands.into_iter().map(|c| c.lift(via)).collect();
        let prefix = via.display();
        let via = via.clone();

        CommandConfig {
            name,
            path: format!("{prefix}.{path}"),
            options,
            commands,
            disabled,
            show_usage_when_no_args,
            description,
            enter: Arc::new(move |model: &mut R| enter(via.apply(model))),
        }
    }
}

impl<M> CommandConfig<M> {
    /// The name used to select this command on the Cli.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dotted property path of the command's model, from the root model.
    pub fn path(&self) -> &str {
        &self.path
    }

    #[allow(missing_docs)]
    pub fn options(&self) -> &[OptionConfig<M>] {
        &self.options
    }

    /// The sub-commands.
    pub fn commands(&self) -> &[CommandConfig<M>] {
        &self.commands
    }

    /// Whether this command is hidden from the Cli.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this command shows its usage, rather than mapping, when given no arguments.
    pub fn shows_usage_when_no_args(&self) -> bool {
        self.show_usage_when_no_args
    }

    #[allow(missing_docs)]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn enter(&self, model: &mut M) {
        (self.enter)(model)
    }
}

/// The enabled positional options of a scope, ordered by position.
pub(crate) fn positional_options<M>(options: &[OptionConfig<M>]) -> Vec<&OptionConfig<M>> {
    let mut positionals: Vec<&OptionConfig<M>> = options
        .iter()
        .filter(|o| o.is_positional() && !o.disabled)
        .collect();
    positionals.sort_by_key(|o| o.position);
    positionals
}

/// The complete registration of options and commands against the root model `M`.
///
/// Built once via [`crate::CommandLineMapper`], then shared read-only by every mapping.
pub struct Registry<M> {
    pub(crate) options: Vec<OptionConfig<M>>,
    pub(crate) commands: Vec<CommandConfig<M>>,
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self {
            options: Vec::default(),
            commands: Vec::default(),
        }
    }
}

impl<M> std::fmt::Debug for Registry<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("options", &self.options)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<M> Registry<M> {
    /// The top-level options.
    pub fn options(&self) -> &[OptionConfig<M>] {
        &self.options
    }

    /// The top-level commands.
    pub fn commands(&self) -> &[CommandConfig<M>] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarKind;

    #[derive(Default, Debug, PartialEq)]
    struct Root {
        level: u8,
        add: Option<Add>,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Add {
        name: String,
        remote: Option<Remote>,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Remote {
        url: Option<String>,
    }

    #[test]
    fn option_assign() {
        let option = OptionConfig::new("level", PropertyPath::new("level", |r: &mut Root| &mut r.level));
        let mut root = Root::default();

        option.assign(&mut root, Value::U8(3));

        assert_eq!(root.level, 3);
        assert_eq!(option.type_kind(), TypeKind::Scalar(ScalarKind::U8));
        assert_eq!(option.path(), "level");
        assert_eq!(option.zero, Some(Value::U8(0)));
        assert!(!option.is_positional());
    }

    #[test]
    #[should_panic(expected = "internal error")]
    fn option_assign_mismatch() {
        let option = OptionConfig::new("level", PropertyPath::new("level", |r: &mut Root| &mut r.level));
        let mut root = Root::default();

        option.assign(&mut root, Value::String("x".to_string()));
    }

    #[test]
    fn option_lift() {
        let option = OptionConfig::new("name", PropertyPath::new("name", |a: &mut Add| &mut a.name));
        let lifted = option.lift(&PropertyPath::nested("add", |r: &mut Root| &mut r.add));
        let mut root = Root::default();

        lifted.assign(&mut root, Value::String("abc".to_string()));

        assert_eq!(lifted.path(), "add.name");
        assert_eq!(root.add.unwrap().name, "abc");
    }

    #[test]
    fn command_nesting() {
        let remote = CommandConfig::new(
            "remote",
            PropertyPath::nested("remote", |a: &mut Add| &mut a.remote),
            vec![OptionConfig::new(
                "url",
                PropertyPath::new("url", |r: &mut Remote| &mut r.url),
            )],
            vec![],
        );
        let add = CommandConfig::new(
            "add",
            PropertyPath::nested("add", |r: &mut Root| &mut r.add),
            vec![],
            vec![remote],
        );
        let mut root = Root::default();

        add.enter(&mut root);
        assert_eq!(root.add, Some(Add::default()));

        let remote = &add.commands()[0];
        assert_eq!(remote.path(), "add.remote");
        assert_eq!(remote.options()[0].path(), "add.remote.url");

        remote.enter(&mut root);
        remote.options()[0].assign(&mut root, Value::String("x".to_string()));
        assert_eq!(
            root.add.unwrap().remote.unwrap().url,
            Some("x".to_string())
        );
    }

    #[test]
    fn positionals_ordered() {
        let mut first = OptionConfig::new("a", PropertyPath::new("level", |r: &mut Root| &mut r.level));
        first.position = Some(1);
        let mut second = OptionConfig::new("b", PropertyPath::new("level", |r: &mut Root| &mut r.level));
        second.position = Some(0);
        let mut hidden = OptionConfig::new("c", PropertyPath::new("level", |r: &mut Root| &mut r.level));
        hidden.position = Some(2);
        hidden.disabled = true;
        let named = OptionConfig::new("d", PropertyPath::new("level", |r: &mut Root| &mut r.level));
        let options = vec![first, second, hidden, named];

        let positionals: Vec<&str> = positional_options(&options)
            .into_iter()
            .map(|o| o.long_name())
            .collect();

        assert_eq!(positionals, vec!["b", "a"]);
    }
}
