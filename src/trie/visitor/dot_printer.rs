use crate::{
    visitor::{BitPath, Visitable, Visitor},
    Trie, TrieNode,
};
use std::{
    fmt::Display,
    io::{self, Write},
};

/// A visitor of the trie that will print it in "dot" notation.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
///
/// Nodes are named after their path from the root, and edges are labeled with
/// the bit they consume. Nodes holding a value are drawn as boxes labeled with
/// the value.
pub struct DotPrinter<O: Write> {
    output: O,
}

impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the given trie to the given output.
    pub fn print_tree<T: Display>(output: O, trie: &Trie<T>) -> io::Result<()> {
        let mut visitor = DotPrinter { output };

        visitor.output_prelude()?;
        trie.visit_with(&mut visitor)?;
        visitor.output_epilogue()
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "strict digraph G {{")?;
        writeln!(self.output, "node [shape=circle]")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }
}

/// Node identifier unique within one trie.
fn node_id(path: BitPath) -> String {
    format!("n{}_{:x}", path.depth(), path.bits())
}

impl<T: Display, O: Write> Visitor<T> for DotPrinter<O> {
    type Output = io::Result<()>;

    fn default_output(&self) -> Self::Output {
        Ok(())
    }

    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
        o1.and(o2)
    }

    fn visit_node(&mut self, node: &TrieNode<T>, path: BitPath) -> Self::Output {
        let id = node_id(path);
        match node.value() {
            Some(value) => writeln!(
                self.output,
                "{id} [shape=box, label=\"{path}\\n{}\"]",
                escape_label(&value.to_string())
            )?,
            None => writeln!(self.output, "{id} [label=\"{path}\"]")?,
        }

        for (bit, child) in node.children() {
            let child_path = path.push(bit);
            writeln!(
                self.output,
                "{id} -> {} [label=\"{}\"]",
                node_id(child_path),
                u8::from(bit)
            )?;
            child.visit_with(self, child_path)?;
        }

        Ok(())
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
