use acl_trie::{
    tests_common::{generate_ipv4_prefixes, generate_prefixes_fixed_length, generate_prefixes_skewed},
    visitor::DotPrinter,
    BitPrefix, Trie,
};
use argh::FromArgs;
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    str::FromStr,
};

#[derive(FromArgs)]
/// Draw a generated prefix trie in Graphviz dot notation.
struct TrieToDotArgs {
    /// what shape of trie to generate
    #[argh(positional)]
    shape: TrieShape,

    /// how large the trie should be
    ///
    /// For `skewed` this is ignored, for `full` it is the prefix length, and
    /// for `random` it is the number of prefixes.
    #[argh(positional)]
    size: usize,

    /// where to output the trie diagram
    ///
    /// To output to stdout, use '_'.
    #[argh(positional)]
    output_location: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: TrieToDotArgs = argh::from_env();

    let trie = args.shape.generate_trie(args.size);
    if trie.is_empty() {
        return Err(Box::new(EmptyTrieError));
    }

    if args.output_location == "_" {
        let stdout = io::stdout();
        let handle = stdout.lock();

        let mut buffer = BufWriter::new(handle);

        write_trie(&mut buffer, &trie)?;
    } else {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(args.output_location)?;

        let mut buffer = BufWriter::new(file);

        write_trie(&mut buffer, &trie)?;
    }

    Ok(())
}

fn write_trie(output: &mut dyn Write, trie: &Trie<usize>) -> Result<(), Box<dyn Error>> {
    DotPrinter::print_tree(output, trie)?;

    Ok(())
}

#[derive(Debug)]
enum TrieShape {
    Skewed,
    Full,
    Random,
}

impl TrieShape {
    fn generate_trie(self, size: usize) -> Trie<usize> {
        match self {
            TrieShape::Skewed => collect_trie(generate_prefixes_skewed::<u8>()),
            TrieShape::Full => {
                let len = u32::try_from(size).unwrap_or(u32::MAX).min(u8::BITS);
                collect_trie(generate_prefixes_fixed_length::<u8>(len, 1))
            },
            TrieShape::Random => collect_trie(
                generate_ipv4_prefixes(size, 0x5eed).map(|prefix| prefix.as_bit_prefix()),
            ),
        }
    }
}

fn collect_trie<P: acl_trie::BitWord>(prefixes: impl Iterator<Item = BitPrefix<P>>) -> Trie<usize> {
    prefixes.zip(0..).collect()
}

impl FromStr for TrieShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skewed" => Ok(TrieShape::Skewed),
            "full" => Ok(TrieShape::Full),
            "random" => Ok(TrieShape::Random),
            _ => Err(ShapeParseError(s.into())),
        }
    }
}

#[derive(Debug)]
struct ShapeParseError(String);

impl Display for ShapeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to parse trie shape from argument value [{}].",
            self.0
        )
    }
}

#[derive(Debug)]
struct EmptyTrieError;

impl Display for EmptyTrieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no prefixes to insert into the trie!")
    }
}

impl Error for EmptyTrieError {}
