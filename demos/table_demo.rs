use clap::Parser;
use clap::ValueEnum;
use shift_hash::Config;
use shift_hash::Table;
use shift_hash::hasher::Crc32;
use shift_hash::hasher::Djb2;
use shift_hash::hasher::Fnv1a;
use shift_hash::hasher::KeyHasher;
use shift_hash::hasher::Murmur3;
use shift_hash::hasher::Sdbm;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HasherChoice {
    Fnv1a,
    Djb2,
    Sdbm,
    Murmur3,
    Crc32,
}

impl HasherChoice {
    fn build(self) -> Box<dyn KeyHasher> {
        match self {
            HasherChoice::Fnv1a => Box::new(Fnv1a),
            HasherChoice::Djb2 => Box::new(Djb2),
            HasherChoice::Sdbm => Box::new(Sdbm),
            HasherChoice::Murmur3 => Box::new(Murmur3),
            HasherChoice::Crc32 => Box::new(Crc32),
        }
    }
}

#[derive(Parser, Debug)]
struct Args {
    /// Number of keys to insert.
    #[arg(short = 'n', long = "entries", default_value_t = 10_000)]
    entries: usize,

    /// Maximum load factor before the table grows.
    #[arg(long = "load-factor", default_value_t = 0.5)]
    load_factor: f64,

    /// Minimum load factor before the table shrinks.
    #[arg(long = "min-load-factor", default_value_t = 0.25)]
    min_load_factor: f64,

    /// Hash function for key digests.
    #[arg(long = "hasher", value_enum, default_value = "fnv1a")]
    hasher: HasherChoice,
}

fn main() {
    let args = Args::parse();

    let config = Config {
        load_factor: args.load_factor,
        min_load_factor: args.min_load_factor,
        hasher: Some(args.hasher.build()),
        ..Config::default()
    };
    let mut table: Table<String, usize> = match Table::with_config(config) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("failed to create table: {error}");
            std::process::exit(1);
        }
    };

    println!(
        "Inserting {} keys with hasher {:?}...",
        args.entries, args.hasher
    );
    for i in 0..args.entries {
        let key = format!("key_{i:016X}");
        if let Err(error) = table.insert(key, i) {
            eprintln!("insert {i} failed: {error}");
            std::process::exit(1);
        }
    }

    println!(
        "Inserted {} entries, capacity {} ({:.1}% full)",
        table.len(),
        table.capacity(),
        table.len() as f64 / table.capacity() as f64 * 100.0
    );
    table.probe_stats().print();

    println!("\nRemoving every other key...");
    for i in (0..args.entries).step_by(2) {
        let key = format!("key_{i:016X}");
        if let Err(error) = table.remove(&key) {
            eprintln!("remove {i} failed: {error}");
            std::process::exit(1);
        }
    }

    println!(
        "{} entries remain, capacity {} ({:.1}% full)",
        table.len(),
        table.capacity(),
        table.len() as f64 / table.capacity() as f64 * 100.0
    );
    table.probe_stats().print();

    let survivors = args.entries / 2;
    let mut checked = 0;
    table.for_each(|_key, _value| checked += 1);
    assert_eq!(checked, survivors);
    println!("\nTraversal visited {checked} surviving entries.");
}
