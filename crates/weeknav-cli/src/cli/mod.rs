//! CLI for the weeknav report-site navigator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use weeknav_core::config;
use weeknav_core::navigator::Button;

use commands::{run_identify, run_range, run_resolve};

/// Top-level CLI for the weeknav report-site navigator.
#[derive(Debug, Parser)]
#[command(name = "weeknav")]
#[command(
    about = "Resolve Previous/Next/Home navigation for a static weekly report site",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Navigation control to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ButtonArg {
    Prev,
    Next,
    Home,
}

impl From<ButtonArg> for Button {
    fn from(arg: ButtonArg) -> Self {
        match arg {
            ButtonArg::Prev => Button::Prev,
            ButtonArg::Next => Button::Next,
            ButtonArg::Home => Button::Home,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a page URL as a week page, the landing page, or other.
    Identify {
        /// URL of the page to classify.
        url: String,
    },

    /// Resolve a button press on the given page to its destination URL.
    Resolve {
        /// Which button was pressed.
        button: ButtonArg,
        /// URL of the page the button lives on.
        url: String,
    },

    /// Discover the first and last existing week for a year.
    Range {
        /// Year to scan; defaults to the configured year.
        #[arg(long)]
        year: Option<u32>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Identify { url } => run_identify(&url)?,
            CliCommand::Resolve { button, url } => {
                run_resolve(&cfg, button.into(), &url).await?;
            }
            CliCommand::Range { year } => run_range(&cfg, year).await?,
        }

        Ok(())
    }
}
