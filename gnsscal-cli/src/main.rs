// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

mod cli;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.input();
    debug!(?input, "selected input mode");

    let date = report::resolve(input, Local::now().date_naive())?;
    info!(%date, "resolved Gregorian date");

    print!("{}", report::render(date));
    Ok(())
}
