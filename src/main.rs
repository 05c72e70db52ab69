use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use conjugation_tools::config::{Settings, DEFAULT_DOWNLOAD};
use conjugation_tools::services::{convert, fetch, prompt, store};
use conjugation_tools::{BuildOutcome, ConjugationError, ParseFailurePolicy, RecordBuilder};

#[derive(Parser)]
#[command(name = "conjugation-tools", about = "Japanese conjugation spreadsheet to TypeScript data module")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a downloaded spreadsheet CSV into a complete data module
    Convert {
        /// Path to a local CSV file
        #[arg(short, long)]
        local: Option<PathBuf>,

        /// Path of the TypeScript output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip rows whose word type is not a known tag
        #[arg(long)]
        strict_types: bool,
    },

    /// Enter one record interactively and append it to a data module
    Add {
        /// Path of the TypeScript module to append to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Text stored for conjugations left blank
        #[arg(long, default_value = "")]
        placeholder: String,

        /// Reject word types that are not a known tag
        #[arg(long)]
        strict_types: bool,

        /// Replace an unreadable module instead of failing
        #[arg(long)]
        reset_on_parse_error: bool,
    },

    /// Download the published spreadsheet as CSV
    Fetch {
        #[arg(long)]
        url: Option<String>,

        #[arg(short, long, default_value = DEFAULT_DOWNLOAD)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command {
        Command::Convert {
            local,
            output,
            strict_types,
        } => {
            let Some(input) = local else {
                print_instructions(&settings);
                return Ok(());
            };
            let output = output.unwrap_or(settings.output);
            let builder = RecordBuilder::new().strict_types(strict_types);

            let report = convert::run(&input, &output, &builder)
                .with_context(|| format!("converting {}", input.display()))?;

            if !report.skipped.is_empty() {
                warn!("{} rows skipped", report.skipped.len());
            }
            println!(
                "Successfully converted {} to {} ({} records, {})",
                input.display(),
                output.display(),
                report.written,
                report.encoding
            );
        }

        Command::Add {
            output,
            placeholder,
            strict_types,
            reset_on_parse_error,
        } => {
            let output = output.unwrap_or(settings.append_output);
            let policy = if reset_on_parse_error {
                ParseFailurePolicy::Reset
            } else {
                ParseFailurePolicy::Fail
            };

            let row = {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut stdout = io::stdout();
                prompt::collect(&mut input, &mut stdout)?
            };

            let builder = RecordBuilder::new()
                .strict_types(strict_types)
                .filler(placeholder);
            let item = match builder.build(&row) {
                BuildOutcome::Built(item) => item,
                BuildOutcome::Skipped(reason) => {
                    return Err(ConjugationError::Rejected(reason.to_string()).into())
                }
            };

            let total = store::append(&output, item, policy)
                .with_context(|| format!("updating {}", output.display()))?;
            info!("{} now holds {} records", output.display(), total);
            println!("New entry added successfully!");
        }

        Command::Fetch { url, output } => {
            let url = url.unwrap_or(settings.sheet_url);
            fetch::download(&url, &output).with_context(|| format!("fetching {url}"))?;
            println!("Saved spreadsheet export to {}", output.display());
        }
    }

    Ok(())
}

fn print_instructions(settings: &Settings) {
    println!("Due to encoding issues with Japanese characters from direct URL access,");
    println!("please download the CSV file manually and provide the local path.");
    println!("\nDownload from: {}", settings.sheet_url);
    println!("  (or run: conjugation-tools fetch)");
    println!("Then run: conjugation-tools convert --local your_downloaded_file.csv");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
