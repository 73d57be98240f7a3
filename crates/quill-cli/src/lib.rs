// quill-cli: shared utilities for the CLI tools.

use std::path::PathBuf;
use std::process;

use quill_en::handle::CheckerHandle;
use quill_en::lexicon::Lexicon;

/// Word-frequency table file name (key set = vocabulary).
const WORD_FREQ_JSON: &str = "word_freq.json";

/// Bigram-count table file name.
const BIGRAM_JSON: &str = "bigram_counts.json";

/// Unigram-count table file name.
const UNIGRAM_JSON: &str = "unigram_counts.json";

/// Search for the table files and create a CheckerHandle.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `QUILL_DATA_PATH` environment variable
/// 3. `~/.quill/data`
/// 4. Current working directory
///
/// The first directory containing `word_freq.json` is used. All three table
/// files must then load cleanly; a missing or malformed table is fatal.
pub fn load_handle(data_path: Option<&str>) -> Result<CheckerHandle, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        let word_freq_path = dir.join(WORD_FREQ_JSON);
        if word_freq_path.is_file() {
            let word_freq = read_table(&word_freq_path)?;
            let bigrams = read_table(&dir.join(BIGRAM_JSON))?;
            let unigrams = read_table(&dir.join(UNIGRAM_JSON))?;

            let lexicon = Lexicon::from_json(&word_freq, &bigrams, &unigrams)
                .map_err(|e| format!("failed to load tables from {}: {e}", dir.display()))?;
            return Ok(CheckerHandle::new(lexicon));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORD_FREQ_JSON,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn read_table(path: &std::path::Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Build the list of directories to search for table files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    // 2. QUILL_DATA_PATH environment variable
    if let Ok(env_path) = std::env::var("QUILL_DATA_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".quill").join("data"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            if i + 1 < args.len() {
                data_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
