use acl_trie::{visitor::TreeStatsCollector, Ipv4Prefix, Trie};
use argh::FromArgs;
use std::{
    error::Error,
    fmt::Display,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader},
    path::PathBuf,
};

#[derive(FromArgs)]
/// Build a trie from a file of CIDR prefixes, one per line, and print stats
/// about its shape.
struct TrieStatsArgs {
    /// string used to delimit columns, the prefix is taken from the first one
    #[argh(option)]
    delimiter: Option<String>,

    /// input to read prefixes from
    #[argh(positional)]
    input_file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: TrieStatsArgs = argh::from_env();

    let input_file = OpenOptions::new().read(true).open(args.input_file)?;

    let trie = read_prefixes_from_text_file(input_file, args.delimiter)?;

    if trie.is_empty() {
        return Err(Box::new(EmptyTrieError));
    };

    let stats = TreeStatsCollector::collect(&trie);

    println!("{stats:#}");

    let nodes_per_prefix = (stats.node_count as f64) / (stats.occupied_count as f64);

    println!("{nodes_per_prefix} nodes allocated, per prefix stored in trie");

    Ok(())
}

fn read_prefixes_from_text_file(
    text_file: File,
    delimiter: Option<String>,
) -> Result<Trie<usize>, Box<dyn Error>> {
    let mut trie = Trie::new();

    for (line_number, line) in BufReader::new(text_file).lines().enumerate() {
        let line = line?;
        let column = match &delimiter {
            Some(delimiter) => line.split(delimiter.as_str()).next().unwrap_or_default(),
            None => line.as_str(),
        };
        let column = column.trim();
        if column.is_empty() || column.starts_with('#') {
            continue;
        }

        let prefix: Ipv4Prefix = column
            .parse()
            .map_err(|err| format!("line {}: {err}", line_number + 1))?;
        trie.insert(prefix, line_number);
    }

    Ok(trie)
}

#[derive(Debug)]
struct EmptyTrieError;

impl Display for EmptyTrieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no prefixes to insert into the trie!")
    }
}

impl Error for EmptyTrieError {}
