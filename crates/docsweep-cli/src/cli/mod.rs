//! CLI for docsweep.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use docsweep_core::config::{self, DocsweepConfig};
use std::path::PathBuf;

use commands::{
    run_check_anchors, run_check_links, run_clean_html, run_clean_md, run_completions, run_man,
    CheckLinksArgs,
};

/// Top-level CLI for docsweep.
#[derive(Debug, Parser)]
#[command(name = "docsweep", version)]
#[command(about = "Clean generated API reference docs and audit documentation links", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/docsweep/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite the generated HTML reference in place.
    CleanHtml {
        /// HTML file (default: [html].path from config).
        path: Option<PathBuf>,
        /// Only hide `Type:` paragraphs inside obj_/eqn_ definitions.
        #[arg(long)]
        only_in_definitions: bool,
    },

    /// Clean the scratch Markdown reference into the canonical file.
    CleanMd {
        /// Scratch Markdown (default: [markdown].input).
        input: Option<PathBuf>,
        /// Destination (default: [markdown].output).
        output: Option<PathBuf>,
    },

    /// Check every link in the navigation region of the documentation index pages.
    CheckLinks {
        /// Pages to audit (default: [audit].sources).
        urls: Vec<String>,
        /// Element id of the navigation region.
        #[arg(long, value_name = "ID")]
        region: Option<String>,
        /// Print each link as it is checked.
        #[arg(long)]
        progress: bool,
        /// Also audit sub-folder pages linked from each source (one level).
        #[arg(long)]
        follow_folders: bool,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check that fragment identifiers exist in the reference page.
    CheckAnchors {
        /// Fragments such as `#obj_rectangle`.
        #[arg(required = true)]
        fragments: Vec<String>,
        /// Reference page URL (default: [audit].reference_url).
        #[arg(long, value_name = "URL")]
        reference: Option<String>,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

/// Whether a command found something the caller should act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Problems,
}

impl Outcome {
    pub(crate) fn from_clean(clean: bool) -> Self {
        if clean {
            Outcome::Clean
        } else {
            Outcome::Problems
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<DocsweepConfig> {
    let cfg = match path {
        Some(p) => config::load_or_init_at(p),
        None => config::load_or_init(),
    }
    .context("load config")?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = load_config(cli.config.as_ref())?;

        match cli.command {
            CliCommand::CleanHtml {
                path,
                only_in_definitions,
            } => {
                let path = path.unwrap_or_else(|| cfg.html.path.clone());
                run_clean_html(&path, only_in_definitions || cfg.html.only_in_definitions)
            }
            CliCommand::CleanMd { input, output } => {
                let input = input.unwrap_or_else(|| cfg.markdown.input.clone());
                let output = output.unwrap_or_else(|| cfg.markdown.output.clone());
                run_clean_md(&input, &output)
            }
            CliCommand::CheckLinks {
                urls,
                region,
                progress,
                follow_folders,
                json,
            } => {
                let mut audit = cfg.audit.clone();
                if !urls.is_empty() {
                    audit.sources = urls;
                }
                if let Some(region) = region {
                    audit.region_id = region;
                }
                audit.follow_folders |= follow_folders;
                run_check_links(&cfg.http, &audit, CheckLinksArgs { progress, json })
            }
            CliCommand::CheckAnchors {
                fragments,
                reference,
            } => {
                let reference = reference.unwrap_or_else(|| cfg.audit.reference_url.clone());
                run_check_anchors(&cfg.http, &reference, &fragments)
            }
            CliCommand::Completions { .. } | CliCommand::Man => Ok(Outcome::Clean),
        }
    }
}

#[cfg(test)]
mod tests;
