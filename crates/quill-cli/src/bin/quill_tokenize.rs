// quill-tokenize: tokenize lines from stdin.
//
// Prints one lowercased word token per line, with a blank line between
// input lines. Non-alphabetic runs are dropped by the tokenizer, so they
// never appear in the output.
//
// Usage:
//   quill-tokenize [-h]

use std::io::{self, BufRead, Write};

use quill_en::tokenizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if quill_cli::wants_help(&args) {
        println!("quill-tokenize: tokenize lines from stdin.");
        println!();
        println!("Usage: quill-tokenize");
        println!();
        println!("Prints one word token per line; input lines are separated");
        println!("by a blank line. No table files are required.");
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut first = true;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        if !first {
            let _ = writeln!(out);
        }
        first = false;

        for word in tokenizer::tokenize(&line) {
            let _ = writeln!(out, "{word}");
        }
    }
}
