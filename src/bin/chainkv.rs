use chainkv::{HashTable, Result, TableError};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::process::exit;

const DEFAULT_CAPACITY: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "chainkv", version, about)]
struct Opt {
    /// Sets the number of buckets
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store, read and delete a key, printing what happens
    Demo,
    /// Print the home bucket of each key
    Index {
        /// Keys to place
        #[arg(required = true, value_name = "KEY")]
        keys: Vec<String>,
    },
    /// Load pairs into a table and print its buckets as JSON
    Layout {
        /// Pairs to load, later pairs overwrite earlier ones
        #[arg(required = true, value_name = "KEY=VALUE")]
        pairs: Vec<String>,
    },
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let opt = Opt::parse();
    if let Err(e) = run(opt) {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run(opt: Opt) -> Result<()> {
    let mut table: HashTable<String, String> = HashTable::try_new(opt.capacity)?;
    info!("Hash table with {} buckets", table.capacity());

    match opt.command {
        Command::Demo => demo(&mut table),
        Command::Index { keys } => {
            for key in keys {
                println!("{}\t{}", key, table.bucket_index(&key));
            }
        }
        Command::Layout { pairs } => {
            for pair in pairs {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| TableError::InvalidPair(pair.clone()))?;
                table.update_value(value.to_owned(), key.to_owned());
            }
            println!("{}", serde_json::to_string_pretty(&table.layout())?);
        }
    }
    Ok(())
}

fn demo(table: &mut HashTable<String, String>) {
    let first_name = "firstName".to_owned();
    let last_name = "lastName".to_owned();

    table.set(first_name.clone(), Some("Steve".to_owned()));

    if let Some(value) = table.get(&first_name) {
        println!("{}", value);
    }

    match table.get(&last_name) {
        Some(value) => println!("{}", value),
        None => println!("lastName key not in hash table"),
    }

    table.set(first_name.clone(), None);

    match table.get(&first_name) {
        Some(value) => println!("{}", value),
        None => println!("firstName key is not in the hash table"),
    }
}
