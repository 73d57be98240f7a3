// quill-check: run the full correction pipeline on lines from stdin.
//
// For each input line prints the display tokens with grammar-corrected
// positions wrapped in brackets, followed by one block per detected error:
//   T: bitcoin is [rising] this year
//   E: rise (grammar)
//   S: rising
//   E: recieve (spelling)
//   S: receive (distance 2)
//
// Usage:
//   quill-check [-d DATA_PATH] [OPTIONS]
//
// Options:
//   -d, --data-path PATH    Directory containing the JSON table files
//   -n, --max-suggestions N Maximum suggestions per spelling error
//   --json                  Emit one JSON object per input line
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use quill_core::detection::ErrorKind;
use quill_core::distance::levenshtein;
use quill_en::handle::{CheckReport, CheckerHandle};
use serde::Serialize;

#[derive(Serialize)]
struct JsonError<'a> {
    word: &'a str,
    kind: &'static str,
    suggestions: &'a [String],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    display_tokens: &'a [String],
    corrected_positions: Vec<usize>,
    errors: Vec<JsonError<'a>>,
}

impl<'a> JsonReport<'a> {
    fn from_report(report: &'a CheckReport) -> Self {
        let mut corrected_positions: Vec<usize> =
            report.corrections.iter().map(|c| c.position).collect();
        corrected_positions.sort_unstable();
        corrected_positions.dedup();

        Self {
            display_tokens: &report.display_tokens,
            corrected_positions,
            errors: report
                .errors
                .iter()
                .map(|e| JsonError {
                    word: &e.word,
                    kind: e.kind.label(),
                    suggestions: &e.suggestions,
                })
                .collect(),
        }
    }
}

fn print_text(out: &mut impl Write, report: &CheckReport) -> io::Result<()> {
    let line: Vec<String> = report
        .display_tokens
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if report.is_corrected(i) {
                format!("[{word}]")
            } else {
                word.clone()
            }
        })
        .collect();
    writeln!(out, "T: {}", line.join(" "))?;

    for error in &report.errors {
        writeln!(out, "E: {} ({})", error.word, error.kind.label())?;
        if error.suggestions.is_empty() {
            writeln!(out, "S: (no suitable suggestions)")?;
            continue;
        }
        for suggestion in &error.suggestions {
            match error.kind {
                ErrorKind::Spelling => writeln!(
                    out,
                    "S: {} (distance {})",
                    suggestion,
                    levenshtein(&error.word, suggestion)
                )?,
                ErrorKind::Grammar => writeln!(out, "S: {suggestion}")?,
            }
        }
    }
    Ok(())
}

fn parse_max_suggestions(args: &[String]) -> (Option<usize>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                match args[i + 1].parse() {
                    Ok(n) => value = Some(n),
                    Err(_) => quill_cli::fatal(&format!("invalid value for {arg}")),
                }
                skip_next = true;
            } else {
                quill_cli::fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = quill_cli::parse_data_path(&args);
    let (max_suggestions, args) = parse_max_suggestions(&args);

    if quill_cli::wants_help(&args) {
        println!("quill-check: run the correction pipeline on lines from stdin.");
        println!();
        println!("Usage: quill-check [-d DATA_PATH] [OPTIONS]");
        println!();
        println!("Reads text lines from stdin. Prints the display tokens with");
        println!("grammar-corrected positions in brackets, then the detected");
        println!("errors with ordered suggestions.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH     Directory containing the JSON table files");
        println!("  -n, --max-suggestions N  Maximum suggestions per spelling error");
        println!("  --json                   Emit one JSON object per input line");
        println!("  -h, --help               Print this help");
        return;
    }

    let json_output = args.iter().any(|a| a == "--json");

    let mut handle: CheckerHandle =
        quill_cli::load_handle(data_path.as_deref()).unwrap_or_else(|e| quill_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        handle.set_max_suggestions(n);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let report = handle.check(&line);
        if json_output {
            match serde_json::to_string(&JsonReport::from_report(&report)) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => eprintln!("error serializing report: {e}"),
            }
        } else if let Err(e) = print_text(&mut out, &report) {
            eprintln!("error writing output: {e}");
            break;
        }
    }
}
