// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use draft_tidy::utils::logging::{format_error, format_info, format_success, format_warning};
use draft_tidy::{
    Config, DraftProcessor, DraftSource, FileDraftSource, FileDraftStore, TextDraftSource,
    WriterSink,
};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "draft_tidy")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Normalize markdown drafts: emphasis, bullets, rules and block spacing", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a draft and store it as the new active draft
    Format {
        /// Draft file, or `-` for stdin
        input: PathBuf,

        /// Extra tag for the new draft (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Print the formatted draft instead of storing it
        #[arg(long)]
        stdout: bool,
    },

    /// Exit with status 1 when a draft is not in canonical form
    Check {
        /// Draft file, or `-` for stdin
        input: PathBuf,
    },

    /// Show the active draft in the store
    Active,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    draft_tidy::utils::logging::init_logger(cli.color, cli.verbose);

    let config = Config::load(Some(cli.config.as_path())).unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        Config::default_config()
    });

    let outcome = match cli.command {
        Commands::Format {
            input,
            tags,
            stdout,
        } => cmd_format(&config, &input, tags, stdout),
        Commands::Check { input } => cmd_check(&config, &input),
        Commands::Active => cmd_active(&config),
    };

    if let Err(e) = outcome {
        eprintln!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(2);
    }

    Ok(())
}

fn open_source(config: &Config, input: &Path, tags: Vec<String>) -> Result<Box<dyn DraftSource>> {
    if input == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read draft from stdin")?;
        Ok(Box::new(
            TextDraftSource::new(bytes, &config.input).with_tags(tags),
        ))
    } else {
        Ok(Box::new(
            FileDraftSource::new(input, &config.input).with_tags(tags),
        ))
    }
}

fn cmd_format(config: &Config, input: &Path, tags: Vec<String>, stdout: bool) -> Result<()> {
    let source = open_source(config, input, tags)?;

    if stdout {
        let processor = DraftProcessor::new(false);
        let mut sink = WriterSink::new(io::stdout().lock());
        processor
            .process(source.as_ref(), &mut sink)
            .context("Failed to format draft")?;
        return Ok(());
    }

    let processor = DraftProcessor::new(config.store.activate);
    let mut store =
        FileDraftStore::new(&config.store).context("Failed to open draft store")?;
    let result = processor
        .process(source.as_ref(), &mut store)
        .context("Failed to format draft")?;

    let path = store.root().join(format!("{}.md", result.handle.id));
    let summary = if result.changed {
        format!("Reformatted draft saved to {}", path.display())
    } else {
        format!("Draft already formatted, copy saved to {}", path.display())
    };
    eprintln!("{}", format_success(&summary));

    if result.activated {
        info!("Active draft is now {}", result.handle.id);
    }

    Ok(())
}

fn cmd_check(config: &Config, input: &Path) -> Result<()> {
    let source = open_source(config, input, Vec::new())?;
    let processor = DraftProcessor::new(false);

    let formatted = processor
        .check(source.as_ref())
        .context("Failed to check draft")?;

    if formatted {
        eprintln!("{}", format_success(&format!("{} is formatted", input.display())));
        Ok(())
    } else {
        eprintln!(
            "{}",
            format_warning(&format!("{} would be reformatted", input.display()))
        );
        std::process::exit(1);
    }
}

fn cmd_active(config: &Config) -> Result<()> {
    let store = FileDraftStore::new(&config.store).context("Failed to open draft store")?;

    match store.active().context("Failed to read active draft")? {
        Some(record) => {
            println!("{}", record.handle.id);
            eprintln!(
                "{}",
                format_info(&format!(
                    "created {} tags [{}]",
                    record.handle.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    record.tags.join(", ")
                ))
            );
        }
        None => {
            eprintln!("{}", format_warning("No active draft"));
        }
    }

    Ok(())
}
