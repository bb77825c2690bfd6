use acl_trie::{AclRule, FlowKey, Ipv4Prefix, Trie};
use argh::FromArgs;
use std::{
    error::Error,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader},
    net::Ipv4Addr,
    path::PathBuf,
};

#[derive(FromArgs)]
/// Find the ACL rules matching a flow.
///
/// Rules are read one per line as `src dst src_port dst_port proto`, for
/// example `10.0.0.0/8 0.0.0.0/0 0-65535 22-22 6-6`. Blank lines and lines
/// starting with '#' are skipped.
struct AclMatchArgs {
    /// file to read ACL rules from
    #[argh(positional)]
    rules_file: PathBuf,

    /// flow source address
    #[argh(positional)]
    src: Ipv4Addr,

    /// flow destination address
    #[argh(positional)]
    dst: Ipv4Addr,

    /// flow source port
    #[argh(positional)]
    src_port: u16,

    /// flow destination port
    #[argh(positional)]
    dst_port: u16,

    /// flow IP protocol number
    #[argh(option, default = "6")]
    proto: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: AclMatchArgs = argh::from_env();

    let rules_file = OpenOptions::new().read(true).open(&args.rules_file)?;
    let rules = read_rules(rules_file)?;
    let by_source = index_by_source(&rules);

    let flow = FlowKey {
        src: args.src,
        dst: args.dst,
        src_port: args.src_port,
        dst_port: args.dst_port,
        proto: args.proto,
    };

    let matching = matching_rules(&by_source, &rules, &flow);
    if matching.is_empty() {
        println!("no rule matches {flow:?}");
    }
    for index in matching {
        println!("rule {index}: {}", rules[index]);
    }

    Ok(())
}

fn read_rules(rules_file: File) -> Result<Vec<AclRule>, Box<dyn Error>> {
    let mut rules = Vec::new();

    for (line_number, line) in BufReader::new(rules_file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let rule: AclRule = line
            .parse()
            .map_err(|err| format!("line {}: {err}", line_number + 1))?;
        rules.push(rule);
    }

    Ok(rules)
}

/// Group the rule indices by their exact source prefix.
fn index_by_source(rules: &[AclRule]) -> Trie<Vec<usize>> {
    let mut trie: Trie<Vec<usize>> = Trie::new();

    for (index, rule) in rules.iter().enumerate() {
        match trie.find_mut(rule.src) {
            Some(indices) => indices.push(index),
            None => trie.insert(rule.src, vec![index]),
        }
    }

    trie
}

/// Collect the indices of every rule matching the flow, in file order.
///
/// The trie only answers exact-length queries, so every prefix length of the
/// source address is looked up in turn.
fn matching_rules(by_source: &Trie<Vec<usize>>, rules: &[AclRule], flow: &FlowKey) -> Vec<usize> {
    let host = Ipv4Prefix::host(flow.src);

    let mut matching: Vec<usize> = (0..=32)
        .filter_map(|len| host.truncate(len))
        .filter_map(|prefix| by_source.find(prefix))
        .flatten()
        .copied()
        .filter(|index| rules[*index].matches(flow))
        .collect();
    matching.sort_unstable();

    matching
}
