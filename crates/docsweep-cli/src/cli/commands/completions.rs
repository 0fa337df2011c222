//! `docsweep completions <shell>` and `docsweep man`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::{Cli, Outcome};

pub fn run_completions(shell: Shell) -> Result<Outcome> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(Outcome::Clean)
}

pub fn run_man() -> Result<Outcome> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(Outcome::Clean)
}
