use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::convert::{format_value, Culture};
use crate::model::{ScalarKind, TypeKind};
use crate::parser::interface::{Columns, UserInterface};
use crate::registry::{positional_options, CommandConfig, OptionConfig, Registry};
use crate::settings::Settings;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Used when the output is not a terminal.
const DEFAULT_TOTAL_WIDTH: usize = 100;

/// A single help row, before layout.
#[derive(Debug, PartialEq, Eq)]
struct Row {
    left: String,
    middle: String,
    rights: Vec<String>,
}

impl Row {
    fn new(left: String, middle: Option<&str>, rights: Vec<String>) -> Self {
        Self {
            left,
            middle: middle.unwrap_or_default().to_string(),
            rights,
        }
    }
}

pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(program: impl Into<String>, about: Option<String>) -> Self {
        let terminal_width = terminal_size().map(|(Width(width), _)| width as usize);
        Self::new(program, about, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            terminal_width,
        }
    }

    pub(crate) fn print_version(&self, settings: &Settings, user_interface: &dyn UserInterface) {
        match settings.get_version() {
            Some(version) => user_interface.print(format!("{} {version}", self.program)),
            None => user_interface.print(self.program.clone()),
        }
    }

    /// Print the help of the scope reached by the command chain `commands` (the root when empty).
    pub(crate) fn print_help<M>(
        &self,
        registry: &Registry<M>,
        commands: &[String],
        settings: &Settings,
        user_interface: &dyn UserInterface,
    ) {
        let mut options = registry.options();
        let mut sub_commands = registry.commands();
        let mut about = self.about.as_deref();

        for name in commands {
            let command = sub_commands
                .iter()
                .find(|command| command.name() == name)
                .expect("internal error - help must be requested for a registered command chain");
            options = command.options();
            sub_commands = command.commands();
            about = command.description();
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Printing the help for {commands:?}.");
        }

        let root = commands.is_empty();
        let version = root && settings.get_version().is_some();
        let culture = settings.get_culture();
        let positionals = positional_options(options);
        let named: Vec<&OptionConfig<M>> = options
            .iter()
            .filter(|option| !option.is_disabled() && !option.is_positional())
            .collect();
        let enabled: Vec<&CommandConfig<M>> = sub_commands
            .iter()
            .filter(|command| !command.is_disabled())
            .collect();

        let mut summary = vec![format!("[{SHORT_PREFIX}{HELP_SHORT}]")];
        if version {
            summary.push(format!("[{SHORT_PREFIX}{VERSION_SHORT}]"));
        }

        let mut positional_rows = Vec::default();
        for option in positionals.iter() {
            let grammar = grammar(option);
            summary.push(bracket(grammar.clone(), option.is_required()));
            positional_rows.push(Row::new(
                grammar,
                option.description(),
                meta(option, culture),
            ));
        }

        let mut option_rows = vec![Row::new(
            format!("{SHORT_PREFIX}{HELP_SHORT}, {LONG_PREFIX}{HELP_NAME}"),
            Some(HELP_MESSAGE),
            Vec::default(),
        )];
        if version {
            option_rows.push(Row::new(
                format!("{SHORT_PREFIX}{VERSION_SHORT}, {LONG_PREFIX}{VERSION_NAME}"),
                Some(VERSION_MESSAGE),
                Vec::default(),
            ));
        }

        for option in named.iter() {
            let grammar = grammar(option);
            let long = format!("{LONG_PREFIX}{}{grammar}", option.long_name());
            let (left, short_summary) = match option.short_name() {
                Some(short) => (
                    format!("{SHORT_PREFIX}{short}, {long}"),
                    format!("{SHORT_PREFIX}{short}{grammar}"),
                ),
                None => (long.clone(), long),
            };
            summary.push(bracket(short_summary, option.is_required()));
            option_rows.push(Row::new(left, option.description(), meta(option, culture)));
        }

        let command_rows: Vec<Row> = enabled
            .iter()
            .map(|command| {
                Row::new(
                    command.name().to_string(),
                    command.description(),
                    Vec::default(),
                )
            })
            .collect();

        if !enabled.is_empty() {
            let names: Vec<&str> = enabled.iter().map(|command| command.name()).collect();
            summary.push(format!("{{{}}} ...", names.join(",")));
        }

        let columns = self.columns(
            positional_rows
                .iter()
                .chain(option_rows.iter())
                .chain(command_rows.iter()),
        );
        let mut program = vec![self.program.clone()];
        program.extend(commands.iter().cloned());

        user_interface.print(format!(
            "usage: {p} {s}",
            p = program.join(" "),
            s = summary.join(" ")
        ));

        if let Some(about) = about {
            user_interface.print(String::default());
            for line in about.lines() {
                user_interface.print(line.to_string());
            }
        }

        for (title, rows) in [
            ("positional arguments:", &positional_rows),
            ("options:", &option_rows),
            ("commands:", &command_rows),
        ] {
            if rows.is_empty() {
                continue;
            }

            user_interface.print(String::default());
            user_interface.print(title.to_string());

            for row in rows.iter() {
                for line in columns.render(&row.left, &row.middle, &row.rights) {
                    user_interface.print(line);
                }
            }
        }
    }

    fn columns<'a>(&self, rows: impl Iterator<Item = &'a Row>) -> Columns {
        let mut left = 0;
        let mut middle = 0;
        let mut rights: Vec<usize> = Vec::default();

        for row in rows {
            left = left.max(row.left.chars().count());
            middle = middle.max(row.middle.chars().count());

            for (i, right) in row.rights.iter().enumerate() {
                let width = right.chars().count();
                match rights.get_mut(i) {
                    Some(current) => *current = (*current).max(width),
                    None => rights.push(width),
                }
            }
        }

        let total = self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH);
        Columns::fit(left, middle, rights, total)
    }
}

fn bracket(grammar: String, required: bool) -> String {
    if required {
        grammar
    } else {
        format!("[{grammar}]")
    }
}

/// How the option's values are written: ex `NAME`, `NAME ...`, or nothing for a flag.
fn grammar<M>(option: &OptionConfig<M>) -> String {
    let example = option.long_name().to_uppercase().replace('-', "_");
    let kind = option.type_kind();

    match (option.is_positional(), kind) {
        (true, TypeKind::List(_)) => format!("{example} ..."),
        (true, _) => example,
        (false, TypeKind::Scalar(ScalarKind::Bool) | TypeKind::Nullable(ScalarKind::Bool)) => {
            String::default()
        }
        (false, TypeKind::List(_)) => format!(" {example} ..."),
        (false, _) => format!(" {example}"),
    }
}

fn meta<M>(option: &OptionConfig<M>, culture: &Culture) -> Vec<String> {
    let requirement = if option.is_required() {
        "required".to_string()
    } else if let Some(value) = option.default_value() {
        format!("default: {}", format_value(value, culture))
    } else {
        String::default()
    };

    vec![type_name(option.type_kind()), requirement]
}

fn type_name(kind: TypeKind) -> String {
    let base = match kind.base() {
        ScalarKind::Enum(variants) => {
            let names: Vec<&str> = variants.iter().map(|(name, _)| *name).collect();
            format!("{{{}}}", names.join(","))
        }
        base => base.to_string(),
    };

    match kind {
        TypeKind::Scalar(_) => base,
        TypeKind::Nullable(_) => format!("{base}?"),
        TypeKind::List(_) => format!("[{base}]"),
    }
}
