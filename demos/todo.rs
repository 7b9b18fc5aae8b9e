use argmap::{property, ArgEnum, Command, CommandLineMapper, NameComparison, Parameter, PropertyPath, Settings};

#[derive(Debug, Clone, Copy, PartialEq, ArgEnum)]
enum Priority {
    Low = 1,
    Normal,
    #[argmap(name = "urgent")]
    High,
}

#[derive(Debug, Default)]
struct Todo {
    file: String,
    add: Option<Add>,
    list: Option<List>,
    done: Option<Done>,
}

#[derive(Debug, Default)]
struct Add {
    title: String,
    priority: Option<Priority>,
    tags: Vec<String>,
}

#[derive(Debug, Default)]
struct List {
    all: bool,
    limit: Option<usize>,
}

#[derive(Debug, Default)]
struct Done {
    ids: Vec<u32>,
}

fn main() {
    let mapper = CommandLineMapper::<Todo>::new("todo")
        .about("Keep track of the things to do.")
        .settings(
            Settings::default()
                .name_comparison(NameComparison::IgnoreCase)
                .version(env!("CARGO_PKG_VERSION")),
        )
        .add(
            Parameter::option(property!(Todo, file), "file", Some('f'))
                .default_value("todo.txt".to_string())
                .help("The file holding the list."),
        )
        .command(
            Command::new("add", PropertyPath::nested("add", |t: &mut Todo| &mut t.add))
                .about("Add an item.")
                .show_usage_when_no_args()
                .add(Parameter::positional(property!(Add, title), "title", 0).required())
                .add(Parameter::option(property!(Add, priority), "priority", Some('p')))
                .add(Parameter::option(property!(Add, tags), "tag", Some('t')).help("Any labels for the item.")),
        )
        .command(
            Command::new("list", PropertyPath::nested("list", |t: &mut Todo| &mut t.list))
                .about("List the items.")
                .add(Parameter::option(property!(List, all), "all", Some('a')).help("Include the finished items."))
                .add(Parameter::option(property!(List, limit), "limit", Some('l'))),
        )
        .command(
            Command::new("done", PropertyPath::nested("done", |t: &mut Todo| &mut t.done))
                .about("Mark items as finished.")
                .add(Parameter::positional(property!(Done, ids), "id", 0).required()),
        )
        .build();

    let todo = mapper.parse();

    if let Some(add) = todo.add {
        println!(
            "{}: add '{}' (priority {:?}, tags {:?})",
            todo.file, add.title, add.priority, add.tags
        );
    } else if let Some(list) = todo.list {
        println!("{}: list (all {}, limit {:?})", todo.file, list.all, list.limit);
    } else if let Some(done) = todo.done {
        println!("{}: done {:?}", todo.file, done.ids);
    } else {
        println!("{}: nothing to do", todo.file);
    }
}
