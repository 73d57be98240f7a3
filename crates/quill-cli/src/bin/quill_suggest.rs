// quill-suggest: rank correction candidates for words from stdin.
//
// Reads words (one per line) and prints, per word:
//   W: recieve
//   S: receive (distance 2, frequency 10)
//   S: relieve (distance 3, frequency 3)
//
// With --search PATTERN the tool instead lists vocabulary entries
// containing PATTERN, sorted, and exits.
//
// Usage:
//   quill-suggest [-d DATA_PATH] [OPTIONS]
//
// Options:
//   -d, --data-path PATH   Directory containing the JSON table files
//   --search PATTERN       List vocabulary entries containing PATTERN
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn parse_search(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut pattern = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--search=") {
            pattern = Some(val.to_string());
        } else if arg == "--search" {
            if i + 1 < args.len() {
                pattern = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                quill_cli::fatal("--search requires a value");
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (pattern, remaining)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = quill_cli::parse_data_path(&args);
    let (search, args) = parse_search(&args);

    if quill_cli::wants_help(&args) {
        println!("quill-suggest: rank correction candidates for words from stdin.");
        println!();
        println!("Usage: quill-suggest [-d DATA_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  W: word");
        println!("  S: candidate (distance D, frequency F)");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing the JSON table files");
        println!("  --search PATTERN       List vocabulary entries containing PATTERN");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle =
        quill_cli::load_handle(data_path.as_deref()).unwrap_or_else(|e| quill_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    // Vocabulary search mode (the interactive page's sidebar, as a flag).
    if let Some(pattern) = search {
        let pattern = pattern.to_lowercase();
        let mut matches: Vec<&str> = handle
            .lexicon()
            .vocabulary()
            .filter(|(word, _)| word.contains(&pattern))
            .map(|(word, _)| word)
            .collect();
        matches.sort_unstable();
        for word in matches {
            let _ = writeln!(out, "{word}");
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let _ = writeln!(out, "W: {word}");
        let candidates = handle.suggest(word);
        if candidates.is_empty() {
            let _ = writeln!(out, "S: (no suitable suggestions)");
            continue;
        }
        for candidate in candidates {
            let _ = writeln!(
                out,
                "S: {} (distance {}, frequency {})",
                candidate.word, candidate.distance, candidate.frequency
            );
        }
    }
}
