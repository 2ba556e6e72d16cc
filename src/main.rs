use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use shears::error::Error;
use shears::stats::RunStats;
use shears::{batch, files, frequency, matcher, presets, summarizer, SnippetList};

#[derive(Parser, Debug)]
#[command(name = "shears")]
#[command(about = "Regex search/replace, word-frequency, and summarization for plain text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Stats output file path (JSON), written when provided
    #[arg(long, global = true)]
    stats_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Text to process, supplied inline
    text: Option<String>,

    /// Read the input text from this file instead
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PatternArgs {
    /// Custom regex pattern (wins over --preset)
    #[arg(long)]
    pattern: Option<String>,

    /// Named preset pattern: email, url, or dates
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find every match of a pattern in the input
    Find {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        pattern: PatternArgs,

        /// Drop duplicate matches, keeping first-occurrence order
        #[arg(long)]
        unique: bool,
    },

    /// Replace every match of a pattern in the input
    Replace {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        pattern: PatternArgs,

        /// Replacement string; may reference capture groups as $1 or ${name}
        #[arg(long)]
        replacement: String,

        /// Write the replaced text to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Count word frequencies in the input
    Count {
        #[command(flatten)]
        input: InputArgs,

        /// Use data-parallel counting workers
        #[arg(long)]
        parallel: bool,

        /// Show only the N most frequent words
        #[arg(long)]
        top: Option<usize>,
    },

    /// Reduce the input to its highest-scoring sentences
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        /// Number of sentences to keep
        #[arg(short = 'k', long = "sentences", default_value_t = 3)]
        sentences: usize,
    },

    /// Filter and transform a file line by line
    Batch {
        /// Input file, processed one line at a time
        #[arg(long)]
        file: PathBuf,

        /// Skip lines that are blank after trimming
        #[arg(long)]
        skip_blank: bool,

        /// Keep only lines containing a match of this pattern
        #[arg(long)]
        matching: Option<String>,

        /// Trim surrounding whitespace from each line
        #[arg(long)]
        trim: bool,

        /// Lowercase each line
        #[arg(long)]
        lowercase: bool,

        /// Write the processed lines to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging goes to stderr so stdout carries results only
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    info!("Starting shears");
    info!(?cli, "Parsed CLI arguments");

    let start = std::time::Instant::now();

    let (operation, input_bytes, output_bytes) = match &cli.command {
        Command::Find {
            input,
            pattern,
            unique,
        } => {
            let (input_bytes, output_bytes) = run_find(input, pattern, *unique).await?;
            ("find", input_bytes, output_bytes)
        }
        Command::Replace {
            input,
            pattern,
            replacement,
            output,
        } => {
            let (input_bytes, output_bytes) =
                run_replace(input, pattern, replacement, output.as_deref()).await?;
            ("replace", input_bytes, output_bytes)
        }
        Command::Count {
            input,
            parallel,
            top,
        } => {
            let (input_bytes, output_bytes) = run_count(input, *parallel, *top).await?;
            ("count", input_bytes, output_bytes)
        }
        Command::Summarize { input, sentences } => {
            let (input_bytes, output_bytes) = run_summarize(input, *sentences).await?;
            ("summarize", input_bytes, output_bytes)
        }
        Command::Batch {
            file,
            skip_blank,
            matching,
            trim,
            lowercase,
            output,
        } => {
            let (input_bytes, output_bytes) = run_batch(
                file,
                *skip_blank,
                matching.as_deref(),
                *trim,
                *lowercase,
                output.as_deref(),
            )
            .await?;
            ("batch", input_bytes, output_bytes)
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(operation, input_bytes, output_bytes, duration_ms, "Operation completed");

    if let Some(stats_path) = &cli.stats_out {
        let stats = RunStats::success(operation, input_bytes, output_bytes, duration_ms);
        let json = serde_json::to_string_pretty(&stats)?;
        files::write_string(stats_path, &json)
            .await
            .map_err(user_message)?;
        info!("Stats written to {}", stats_path.display());
    }

    Ok(())
}

/// Map a typed core error to a message fit for the terminal.
/// The core produces no user-facing text; that mapping lives here.
fn user_message(err: Error) -> anyhow::Error {
    let message = match &err {
        Error::InvalidInput => "no input text was provided".to_string(),
        Error::InvalidPattern { pattern, .. } => {
            format!("`{pattern}` is not a valid regular expression")
        }
        Error::NoPatternSelected => {
            "no pattern: pass --pattern <REGEX> or --preset <email|url|dates>".to_string()
        }
        Error::Io { path, .. } => format!("could not access {}", path.display()),
        Error::Summarization { message } => format!("summarization failed: {message}"),
    };
    anyhow::Error::new(err).context(message)
}

async fn load_input(input: &InputArgs) -> Result<String> {
    match (&input.text, &input.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => files::read_to_string(path).await.map_err(user_message),
        (None, None) => anyhow::bail!("no input: supply TEXT inline or --file <PATH>"),
    }
}

async fn run_find(input: &InputArgs, pattern: &PatternArgs, unique: bool) -> Result<(u64, u64)> {
    let text = load_input(input).await?;
    let regex = presets::resolve_pattern(pattern.pattern.as_deref(), pattern.preset.as_deref())
        .map_err(user_message)?;

    let matches = matcher::find_all(&text, &regex).map_err(user_message)?;
    let shown: Vec<String> = if unique {
        let mut seen = SnippetList::new();
        for m in matches {
            seen.add(m);
        }
        seen.entries().to_vec()
    } else {
        matches
    };

    println!("{} match(es)", shown.len());
    for m in &shown {
        println!("{m}");
    }

    let output_bytes: u64 = shown.iter().map(|m| m.len() as u64).sum();
    Ok((text.len() as u64, output_bytes))
}

async fn run_replace(
    input: &InputArgs,
    pattern: &PatternArgs,
    replacement: &str,
    output: Option<&Path>,
) -> Result<(u64, u64)> {
    let text = load_input(input).await?;
    let regex = presets::resolve_pattern(pattern.pattern.as_deref(), pattern.preset.as_deref())
        .map_err(user_message)?;

    let replaced =
        matcher::replace_all(Some(text.as_str()), &regex, replacement).map_err(user_message)?;

    match output {
        Some(path) => {
            files::write_string(path, &replaced)
                .await
                .map_err(user_message)?;
            println!("Replaced text written to {}", path.display());
        }
        None => println!("{replaced}"),
    }

    Ok((text.len() as u64, replaced.len() as u64))
}

async fn run_count(input: &InputArgs, parallel: bool, top: Option<usize>) -> Result<(u64, u64)> {
    let text = load_input(input).await?;
    let table = if parallel {
        frequency::count_parallel(&text)
    } else {
        frequency::count(&text)
    };

    // Display ordering only; the table itself carries no order guarantee
    let mut entries: Vec<(String, u64)> = table.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(top) = top {
        entries.truncate(top);
    }

    println!("{} distinct word(s)", entries.len());
    let mut output_bytes = 0u64;
    for (word, count) in &entries {
        println!("{word}\t{count}");
        output_bytes += word.len() as u64;
    }

    Ok((text.len() as u64, output_bytes))
}

async fn run_summarize(input: &InputArgs, sentences: usize) -> Result<(u64, u64)> {
    let text = load_input(input).await?;
    let summary = summarizer::summarize(&text, sentences).map_err(user_message)?;
    println!("{summary}");
    Ok((text.len() as u64, summary.len() as u64))
}

async fn run_batch(
    file: &Path,
    skip_blank: bool,
    matching: Option<&str>,
    trim: bool,
    lowercase: bool,
    output: Option<&Path>,
) -> Result<(u64, u64)> {
    let mut match_filter = match matching {
        Some(pattern) => Some(batch::matching_filter(pattern).map_err(user_message)?),
        None => None,
    };
    let filter = move |line: &str| {
        if skip_blank && line.trim().is_empty() {
            return false;
        }
        match match_filter.as_mut() {
            Some(keep) => keep(line),
            None => true,
        }
    };
    let transform = move |line: &str| {
        let line = if trim { line.trim() } else { line };
        if lowercase {
            line.to_lowercase()
        } else {
            line.to_string()
        }
    };

    let input_bytes = tokio::fs::metadata(file).await.map(|m| m.len()).unwrap_or(0);
    let lines = batch::process_file(file, filter, transform)
        .await
        .map_err(user_message)?;

    let mut body = lines.join("\n");
    match output {
        Some(path) => {
            if !body.is_empty() {
                body.push('\n');
            }
            files::write_string(path, &body)
                .await
                .map_err(user_message)?;
            println!("{} line(s) written to {}", lines.len(), path.display());
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }

    Ok((input_bytes, body.len() as u64))
}
