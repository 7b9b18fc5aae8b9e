use argmap::{property, CommandLineMapper, Parameter};

#[derive(Debug, Default)]
struct Summer {
    items: Vec<u32>,
    verbose: bool,
}

fn main() {
    let mapper = CommandLineMapper::<Summer>::new("summer")
        .about("Sum the items.")
        .add(Parameter::positional(property!(Summer, items), "item", 0).help("The items to sum."))
        .add(
            Parameter::option(property!(Summer, verbose), "verbose", Some('x'))
                .help("Show the items before the sum."),
        )
        .build();

    let summer = mapper.parse();

    if summer.verbose {
        println!("Items: {:?}", summer.items);
    }

    let sum: u32 = summer.items.iter().sum();
    println!("Sum: {sum}");
}
