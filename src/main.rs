//! Wordle Worst Case CLI
//!
//! Scores every opening guess in a dictionary by the number of words an
//! adversarial answer leaves behind.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use wordle_worst_case::{ConsistencyCache, Corpus, WorstCase, WorstCaseSearch, N_SOLUTIONS};

/// Rank Wordle guesses by the worst case number of words they leave.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dictionary with one word per line, possible answers first.
    #[arg(short = 'f', long, default_value = "words-kura")]
    words_file: PathBuf,

    /// Number of leading dictionary words that are possible answers.
    #[arg(short, long, default_value_t = N_SOLUTIONS)]
    solutions: usize,

    /// Only score the first N words as guesses.
    #[arg(short, long)]
    limit: Option<usize>,

    /// Words already played; every candidate is scored after these.
    #[arg(short, long = "prefix")]
    prefix: Vec<String>,

    /// Count through the letter-subset cache instead of scanning every word.
    #[arg(long)]
    cache: bool,

    /// Write every result, best first, to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of best guesses to print.
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// Worker threads; defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,

    /// Only print results.
    #[arg(short, long)]
    quiet: bool,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the thread pool")?;
    }

    let start = Instant::now();
    if !args.quiet {
        eprintln!("Loading dictionary at {}", args.words_file.display());
    }
    let file = File::open(&args.words_file)
        .with_context(|| format!("opening {}", args.words_file.display()))?;
    let corpus = Corpus::from_reader(BufReader::new(file), args.solutions)
        .with_context(|| format!("loading {}", args.words_file.display()))?;
    if !args.quiet {
        eprintln!(
            "Loaded dict - {} words in dict, {} solutions",
            corpus.len(),
            corpus.num_solutions()
        );
    }

    let prefix = resolve_prefix(&corpus, &args.prefix)?;
    let setup = start.elapsed();

    let cache = if args.cache {
        let cache = ConsistencyCache::build(&corpus);
        if !args.quiet {
            eprintln!("Cache contains {} keys", cache.len());
        }
        Some(cache)
    } else {
        None
    };
    let search = match &cache {
        Some(cache) => WorstCaseSearch::with_cache(&corpus, cache),
        None => WorstCaseSearch::new(&corpus),
    };
    let cache_time = start.elapsed() - setup;

    let spinner = (!args.quiet).then(|| Spinner::new("Scoring guesses..."));
    let scan_start = Instant::now();
    let results = if prefix.is_empty() {
        search.evaluate_all(args.limit)
    } else {
        let count = args.limit.unwrap_or(corpus.len()).min(corpus.len());
        let candidates: Vec<usize> = (0..count).collect();
        search.evaluate_extensions(&prefix, &candidates)?
    };
    let scan = scan_start.elapsed();
    if let Some(spinner) = spinner {
        spinner.stop();
    }

    let lines = report(&corpus, &args.prefix, &results)?;
    for line in lines.iter().take(args.top) {
        println!("{}", line);
    }
    if let Some(path) = &args.output {
        fs::write(path, lines.join("\n"))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if !args.quiet {
        eprintln!(
            "Setup time: {:.2?} \tCachegen time: {:.2?} \tLoop time: {:.2?}",
            setup, cache_time, scan
        );
    }
    Ok(())
}

fn resolve_prefix(corpus: &Corpus, words: &[String]) -> Result<Vec<usize>> {
    words
        .iter()
        .map(|word| -> Result<usize> {
            match corpus.find(word)? {
                Some(index) => Ok(index),
                None => bail!("{} is not in the dictionary", word.to_uppercase()),
            }
        })
        .collect()
}

/// One `GUESS - COUNT (ADVERSARY)` line per guess, fewest remaining first.
fn report(corpus: &Corpus, prefix: &[String], results: &[WorstCase]) -> Result<Vec<String>> {
    let mut ranked: Vec<(usize, &WorstCase)> = results.iter().enumerate().collect();
    ranked.sort_by_key(|(_, result)| result.remaining);

    let opening: String = prefix.iter().map(|word| format!("{} ", word.to_uppercase())).collect();
    ranked
        .into_iter()
        .map(|(guess, result)| -> Result<String> {
            Ok(format!(
                "{}{} - {} ({})",
                opening,
                corpus.text(guess)?,
                result.remaining,
                corpus.text(result.solution)?
            ))
        })
        .collect()
}
