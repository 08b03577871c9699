//! Command-line front end: read a document container, run the enabled
//! checkers, write the annotated copy next to it as `<stem>_checked.<ext>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use redline::{checked_filename, AmbiguityChecker, AtomicityChecker, Reviewer};

#[derive(Parser)]
#[command(
    name = "redline",
    about = "Annotate a structured document with review comments",
    version
)]
struct Cli {
    /// Document container to review (.json)
    input: PathBuf,

    /// Flag overlong sentences (when neither flag is given, both checks run)
    #[arg(long)]
    atomicity: bool,

    /// Flag ambiguous terms (when neither flag is given, both checks run)
    #[arg(long)]
    ambiguity: bool,

    /// Word-count limit for the atomicity check
    #[arg(long, default_value_t = redline::DEFAULT_WORD_LIMIT)]
    word_limit: usize,

    /// File with one ambiguity stem per line ('#' lines are comments)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Directory for the annotated copy (defaults to the input's directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.input.extension().and_then(|ext| ext.to_str()) != Some("json") {
        bail!(
            "expected a .json document container: {}",
            cli.input.display()
        );
    }

    let bytes = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let reviewer = build_reviewer(&cli)?;
    let annotated = reviewer.review_bytes(&bytes)?;

    let file_name = cli
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .context("input path has no file name")?;
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| cli.input.parent().unwrap_or(Path::new("")).to_path_buf());
    let output_path = output_dir.join(checked_filename(file_name));

    fs::write(&output_path, &annotated)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!("{}", output_path.display());
    Ok(())
}

fn build_reviewer(cli: &Cli) -> anyhow::Result<Reviewer> {
    // The original review form refuses to uncheck both boxes; an invocation
    // with neither flag means "run everything".
    let (run_atomicity, run_ambiguity) = if !cli.atomicity && !cli.ambiguity {
        (true, true)
    } else {
        (cli.atomicity, cli.ambiguity)
    };

    let mut reviewer = Reviewer::empty();
    if run_atomicity {
        reviewer =
            reviewer.with_atomicity(AtomicityChecker::new().with_word_limit(cli.word_limit));
    }
    if run_ambiguity {
        let checker = match &cli.lexicon {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read lexicon {}", path.display()))?;
                let stems = parse_lexicon(&text);
                if stems.is_empty() {
                    bail!("lexicon {} contains no stems", path.display());
                }
                AmbiguityChecker::from_stems(stems)
            }
            None => AmbiguityChecker::new(),
        };
        reviewer = reviewer.with_ambiguity(checker);
    }
    Ok(reviewer)
}

fn parse_lexicon(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
