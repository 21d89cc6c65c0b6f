use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use novelgen::input::{read_script, strip_code_fence};
use novelgen::report::{ParseReport, inspect};
use novelgen::scenario::Scenario;

#[derive(Parser)]
#[command(
    name = "novelgen",
    version,
    about = "Convert NovelGen scripts into scene documents"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Disable log output
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a script and print the scene document as JSON
    Parse {
        /// Script file path, or - for stdin
        script: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Remove a surrounding ``` code fence before parsing
        #[arg(long)]
        strip_fence: bool,
        /// Scenario id (a random UUID is used if only title/theme is given)
        #[arg(long)]
        id: Option<String>,
        /// Scenario title
        #[arg(long)]
        title: Option<String>,
        /// Scenario theme
        #[arg(long)]
        theme: Option<String>,
    },
    /// Parse a script and report what it contains
    Check {
        /// Script file path, or - for stdin
        script: PathBuf,
        #[arg(long)]
        strip_fence: bool,
        /// Fail if any line was dropped
        #[arg(long)]
        strict: bool,
    },
    /// Print each scene's content in script syntax
    Show {
        /// Script file path, or - for stdin
        script: PathBuf,
        #[arg(long)]
        strip_fence: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command {
        Commands::Parse {
            script,
            pretty,
            strip_fence,
            id,
            title,
            theme,
        } => {
            let report = load(&script, strip_fence)?;
            let document = report.into_document();

            let json = if id.is_some() || title.is_some() || theme.is_some() {
                let mut scenario = Scenario::new(document);
                if let Some(id) = id {
                    scenario = scenario.with_id(id);
                }
                if let Some(title) = title {
                    scenario = scenario.with_title(title);
                }
                if let Some(theme) = theme {
                    scenario = scenario.with_theme(theme);
                }
                to_json(&scenario, pretty)?
            } else {
                to_json(&document, pretty)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Check {
            script,
            strip_fence,
            strict,
        } => {
            let report = load(&script, strip_fence)?;
            let summary = report.summary();

            for dropped in &report.dropped {
                eprintln!(
                    "scene block {}, line {}: {} | {}",
                    dropped.block, dropped.line, dropped.reason, dropped.content
                );
            }

            if report.document.is_empty() {
                bail!("Script '{}' contains no scenes", script.display());
            }
            if strict && !report.dropped.is_empty() {
                bail!(
                    "Script '{}' has {} dropped lines",
                    script.display(),
                    report.dropped.len()
                );
            }

            println!(
                "Script '{}' is valid: {} scenes, {} content items, {} dropped lines",
                script.display(),
                summary.scenes,
                summary.content_items(),
                summary.dropped
            );
            Ok(())
        }
        Commands::Show {
            script,
            strip_fence,
        } => {
            let report = load(&script, strip_fence)?;

            println!("=== Scenes: {} ===\n", script.display());
            for (i, scene) in report.document.scenes.iter().enumerate() {
                println!("--- Scene {} ---", i + 1);
                for item in &scene.content {
                    println!("  {item}");
                }
                println!();
            }
            println!("{}", report.summary());
            Ok(())
        }
    }
}

fn load(path: &Path, strip_fence: bool) -> Result<ParseReport> {
    let content = read_script(path)?;
    let text = if strip_fence {
        strip_code_fence(&content)
    } else {
        content.as_str()
    };

    let report = inspect(text);
    tracing::info!(
        script = %path.display(),
        blocks = report.blocks,
        summary = %report.summary(),
        "parsed script"
    );
    Ok(report)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "warn,novelgen=info",
        2 => "info,novelgen=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
