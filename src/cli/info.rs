use super::common;
use crate::parsers::{CompressedTable, PTable};

/// Outputs information about a parse table
pub fn output(t: &CompressedTable, symbols: bool) {
    let width = common::LABEL_WIDTH;

    println!("{:w$}: {}", "Number of states", t.num_states(), w = width);
    println!(
        "{:w$}: {}",
        "Number of terminals",
        t.num_terminals(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Number of non-terminals",
        t.num_non_terminals(),
        w = width
    );
    println!("{:w$}: {}", "Number of rules", t.num_rules(), w = width);
    println!(
        "{:w$}: {}",
        "Number of table entries",
        t.entries.len(),
        w = width
    );
    println!("{:w$}: {}", "Final state", t.final_state(), w = width);

    if symbols {
        let terminals = (0..t.num_terminals()).map(|i| t.symbol_name(i));
        print_list("Terminals", terminals);

        let non_terminals = (t.num_terminals()..t.num_terminals() + t.num_non_terminals())
            .map(|i| t.symbol_name(i));
        print_list("Non-terminals", non_terminals);
    }
}

/// Outputs a labelled list of names, wrapped to the line length
fn print_list<'a>(label: &str, names: impl Iterator<Item = &'a str>) {
    let width = common::LABEL_WIDTH;

    for (i, line) in wrap(names, common::LINE_LENGTH - width).iter().enumerate() {
        let label = if i == 0 { label } else { "" };
        println!("{:w$}:{}", label, line, w = width);
    }
}

/// Joins names into lines no longer than width, each name preceded by a
/// space. A name longer than width gets a line of its own.
fn wrap<'a>(names: impl Iterator<Item = &'a str>, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for name in names {
        if !line.is_empty() && line.len() + 1 + name.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        line.push(' ');
        line.push_str(name);
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
