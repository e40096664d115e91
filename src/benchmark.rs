use bintree::{OrderedTree, TreeOps};
use clap::Parser;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "100000")]
    size: usize,

    /// Seed for shuffling ids; unshuffled ids degrade the tree to a chain
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Insert ids in ascending order instead of shuffling them
    #[arg(long)]
    sorted: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bintree=warn")),
        )
        .init();

    let args = Args::parse();
    let size = i32::try_from(args.size)?;
    let mut ids: Vec<i32> = (0..size).collect();
    if !args.sorted {
        let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
        ids.shuffle(&mut rng);
    }

    println!(
        "Running with {} ids ({})",
        args.size,
        if args.sorted { "sorted" } else { "shuffled" }
    );

    let mut tree = OrderedTree::new();
    run(&mut tree, &ids);
    Ok(())
}

fn run<T: TreeOps>(tree: &mut T, ids: &[i32]) {
    let start = Instant::now();
    for (i, &id) in ids.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.insert(id, id.to_string());
        assert!(tree.contains(id));
    }
    let inserted = Instant::now();
    for &id in ids {
        assert!(tree.contains(id));
    }
    let checked_contains = Instant::now();
    for &id in ids {
        assert!(tree.remove(id));
    }
    let end = Instant::now();
    assert_eq!(tree.len(), 0);

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
