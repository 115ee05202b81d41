mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Validate portfolio content and export the static page shell")]
struct Cli {
    /// Content file with the `site` block and section records.
    #[arg(long, env = "PORTFOLIO_CONTENT", default_value = "client/content/portfolio.json")]
    content: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate the content file.
    Check,
    /// Write `index.html` and `loader.js` into the output directory.
    Export {
        #[arg(long, env = "PORTFOLIO_OUT", default_value = "dist")]
        out: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), export::ExportError> {
    let portfolio = export::load(&cli.content)?;
    let summary = export::Summary::of(&portfolio);
    tracing::info!(
        content = %cli.content.display(),
        education = summary.education,
        experiences = summary.experiences,
        projects = summary.projects,
        skills = summary.skills,
        stats = summary.stats,
        "content valid"
    );

    match cli.command {
        Command::Check => {}
        Command::Export { out } => {
            let written = export::write_site(&portfolio, &out)?;
            tracing::info!(out = %out.display(), files = written.len(), "site exported");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "portfolio failed");
            ExitCode::FAILURE
        }
    }
}
