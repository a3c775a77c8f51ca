use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process;

use kansuji_core::euphony::apply_shifts;
use kansuji_core::namer::render;
use kansuji_core::reading::ReadingTable;
use kansuji_core::sanitize::sanitize;
use kansuji_core::tree::{place_tree, PlaceValue, PlaceValueTree};
use kansuji_core::{spell, spell_opt};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn spell_cmd(number: &str, reading: bool, both: bool) {
    let spelling = die!(spell(number), "Error: {}");
    if both {
        println!("{}\t{}", spelling.kanji, spelling.reading);
    } else if reading {
        println!("{}", spelling.reading);
    } else {
        println!("{}", spelling.kanji);
    }
}

/// One token per line; invalid lines produce no output line, matching the
/// no-reply behavior of embedding callers.
pub fn batch_cmd(input_file: &str, reading: bool) {
    let file = die!(File::open(input_file), "Error opening input file: {}");
    for line in BufReader::new(file).lines() {
        let line = die!(line, "Error reading input file: {}");
        if let Some(spelling) = spell_opt(line.trim()) {
            if reading {
                println!("{}", spelling.reading);
            } else {
                println!("{}", spelling.kanji);
            }
        }
    }
}

/// Walk one token through each pipeline stage and print the intermediates.
pub fn explain_cmd(number: &str) {
    let num = die!(sanitize(number), "Error: {}");
    let table = ReadingTable::global();

    println!("sanitized: {}", num);

    let tree = place_tree(&num);
    println!("place tree:");
    print_tree(&tree, 2);
    println!("reconstructed: {}", tree.reconstruct());

    let rendering = render(&tree, table);
    println!("kanji: {}", rendering.kanji);
    println!("raw reading: {}", rendering.reading);

    let contracted = apply_shifts(&rendering.reading, table.shifts());
    println!("contracted reading: {}", contracted);
}

fn print_tree(tree: &PlaceValueTree, indent: usize) {
    if tree.is_empty() {
        println!("{:indent$}(empty: zero)", "");
        return;
    }
    for (place, value) in tree.iter_descending() {
        match value {
            PlaceValue::Leaf(d) => println!("{:indent$}10^{place} × {d}", ""),
            PlaceValue::Branch(sub) => {
                println!("{:indent$}10^{place} ×", "");
                print_tree(sub, indent + 2);
            }
        }
    }
}

pub fn tables_cmd() {
    let table = ReadingTable::global();
    println!("readings:");
    for (glyph, reading) in table.readings() {
        println!("  {} → {}", glyph, reading);
    }
    println!("shifts (in order):");
    for rule in table.shifts() {
        println!("  {} → {}", rule.pattern, rule.replacement);
    }
}
