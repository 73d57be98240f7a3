// quill-lemma: print the lemma sequence for lines from stdin.
//
// Output format, one token per line:
//   surface <TAB> lemma
//
// Usage:
//   quill-lemma [-d DATA_PATH]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = quill_cli::parse_data_path(&args);

    if quill_cli::wants_help(&args) {
        println!("quill-lemma: lemmatize lines from stdin.");
        println!();
        println!("Usage: quill-lemma [-d DATA_PATH]");
        println!();
        println!("Prints one token per line as 'surface<TAB>lemma'. Auxiliary");
        println!("verbs keep their surface form; verbs are reduced to their");
        println!("base form; everything else gets noun lemmatization.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing the JSON table files");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle =
        quill_cli::load_handle(data_path.as_deref()).unwrap_or_else(|e| quill_cli::fatal(&e));

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

        for token in handle.analyze(&line) {
            let _ = writeln!(out, "{}\t{}", token.surface, token.lemma);
        }
    }
}
