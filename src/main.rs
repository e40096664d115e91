use bintree::{Order, OrderedTree, Record};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Build a binary search tree from the command line and print it
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(about = "Ordered id -> information tree with traversal reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert records, remove ids, then print the tree
    Report(ReportArgs),
    /// Walk through every tree operation on a fixed data set
    Demo,
}

#[derive(clap::Args, Debug)]
struct ReportArgs {
    /// Records to insert in order, as ID:INFO. Records with a negative id
    /// go after `--`, e.g. `report -r 3 -- -3:x 5:a`
    records: Vec<Record>,

    /// Ids to remove after all inserts
    #[arg(short, long = "remove", value_name = "ID", allow_negative_numbers = true)]
    removals: Vec<i32>,

    /// Print only this traversal instead of the full report
    #[arg(short, long)]
    order: Option<OrderArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Pre,
    In,
    Post,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Pre => Order::PreOrder,
            OrderArg::In => Order::InOrder,
            OrderArg::Post => Order::PostOrder,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bintree=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report(args) => report(args),
        Commands::Demo => demo(),
    }
    Ok(())
}

fn report(args: ReportArgs) {
    let mut tree = OrderedTree::new();
    for record in args.records {
        let id = record.id;
        if !tree.insert(id, record.information) {
            tracing::warn!("Skipping duplicate id {id}");
        }
    }
    for id in args.removals {
        if !tree.remove(id) {
            tracing::warn!("No record with id {id} to remove");
        }
    }
    tracing::info!(len = tree.len(), height = tree.height(), "Tree built");

    match args.order {
        Some(order) => print!("{}", tree.display_order(order.into())),
        None => print!("{}", tree.display()),
    }
}

fn demo() {
    const RECORDS: [(i32, &str); 9] = [
        (50, "fifty"),
        (30, "thirty"),
        (70, "seventy"),
        (20, "twenty"),
        (40, "forty"),
        (60, "sixty"),
        (80, "eighty"),
        (35, "thirty-five"),
        (65, "sixty-five"),
    ];

    let mut tree = OrderedTree::new();
    print!("{}", tree.display());

    let mut root = Record::default();
    println!("Testing getRootData()");
    println!("found: {}, root: {{{}, {:?}}}", tree.get_root(&mut root), root.id, root.information);
    println!();

    println!("Testing addNode()");
    for (id, information) in RECORDS {
        println!("added {id}: {}", tree.insert(id, information));
    }
    println!("added 40 again: {}", tree.insert(40, "duplicate"));
    println!();
    print!("{}", tree.display());

    println!("Testing getRootData()");
    println!("found: {}, root: {root}", tree.get_root(&mut root));
    println!();

    println!("Testing getNode() and contains()");
    for id in [35, 65, 99] {
        let mut found = Record::new(0, "not found");
        let hit = tree.get(id, &mut found);
        println!("getNode {id}: {hit} -> {found}");
        println!("contains {id}: {}", tree.contains(id));
    }
    println!();

    println!("Testing removeNode()");
    // leaf, node with one child, node with two children, missing id
    for id in [20, 30, 50, 99] {
        println!("removed {id}: {}", tree.remove(id));
    }
    println!();
    print!("{}", tree.display());

    println!("Testing clear()");
    tree.clear();
    print!("{}", tree.display());
}
