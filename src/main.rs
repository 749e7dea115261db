use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tfidf_ranker::{
    error::Result,
    loader::DEFAULT_EXTENSION,
    report::{
        TokenCount, WordLengthFilter, DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN,
        DEFAULT_TOP_WORDS,
    },
    retrieval::{retrieve_documents, RetrievalOptions, RetrievalReport, DEFAULT_K},
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Identifier (file name) of the query document
    #[arg(short, long)]
    document: String,

    /// Path to the directory holding the corpus
    #[arg(long, default_value = "data")]
    data_path: PathBuf,

    /// Number of documents to retrieve
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Number of most frequent words to report
    #[arg(long, default_value_t = DEFAULT_TOP_WORDS)]
    top_words: usize,

    /// Minimum word length for the filtered frequency report
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_word_len: usize,

    /// Maximum word length for the filtered frequency report
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,

    /// Extension of the files to load
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Load every file regardless of extension
    #[arg(long, default_value = "false")]
    all_files: bool,

    /// Descend into subdirectories
    #[arg(short, long, default_value = "false")]
    recursive: bool,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = RetrievalOptions {
        data_path: args.data_path.clone(),
        extension: (!args.all_files).then(|| args.extension.clone()),
        recursive: args.recursive,
        k: args.k,
        top_words: args.top_words,
        word_lengths: WordLengthFilter::new(args.min_word_len, args.max_word_len)?,
    };

    let report = retrieve_documents(&args.document, &options)?;

    let mut out = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        print_report(&mut out, &report)?;
    }

    Ok(())
}

fn print_report(out: &mut impl Write, report: &RetrievalReport) -> io::Result<()> {
    let frequency = &report.frequency;

    writeln!(
        out,
        "Top {} most popular words are:",
        frequency.most_frequent.len()
    )?;
    print_counts(out, &frequency.most_frequent)?;

    writeln!(
        out,
        "\nWords with min. size {} and max. size {} are :",
        frequency.filter.min(),
        frequency.filter.max()
    )?;
    print_counts(out, &frequency.within_length)?;

    writeln!(
        out,
        "\nTop {} relevant documents for document {} are :",
        report.results.len(),
        report.query
    )?;
    for result in &report.results {
        writeln!(out, "{result}")?;
    }

    Ok(())
}

fn print_counts(out: &mut impl Write, counts: &[TokenCount]) -> io::Result<()> {
    for TokenCount { token, count } in counts {
        writeln!(out, "{token} : {count}")?;
    }

    Ok(())
}
