// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Result;
use clap::{Parser, Subcommand};
use slog::debug;
use st_common::cli::st_cli_style;
use st_common::log::{init_file_logger, init_logger};
use st_fixtures::docker::DockerHost;
use st_fixtures::local::LocalHost;
use st_fixtures::Host;
use std::path::PathBuf;

mod bgp;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    styles = st_cli_style(),
    infer_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Management tool to run on the target host
    #[arg(short, long, env = "ST_MANAGEMENT_TOOL", default_value = "calicoctl")]
    tool: String,

    /// Directory resource files are written to on the local host
    #[arg(short, long, env = "ST_WORKDIR", default_value = ".")]
    workdir: PathBuf,

    /// Target a docker container instead of the local host
    #[arg(short, long, env = "ST_CONTAINER")]
    container: Option<String>,

    /// Write bunyan formatted logs to this file instead of the terminal
    #[arg(long, env = "ST_LOG_FILE")]
    log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// BGP peer fixture commands.
    #[command(subcommand)]
    Bgp(bgp::Commands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = match &cli.log_file {
        Some(path) => init_file_logger(path),
        None => init_logger(),
    };

    let host: Box<dyn Host> = match &cli.container {
        Some(name) => {
            debug!(log, "targeting container {name}");
            Box::new(DockerHost::new(name, &cli.tool, log.clone()))
        }
        None => {
            debug!(log, "targeting local host in {}", cli.workdir.display());
            Box::new(LocalHost::new(&cli.workdir, &cli.tool, log.clone()))
        }
    };

    match cli.command {
        Commands::Bgp(command) => bgp::commands(command, host.as_ref())?,
    }
    Ok(())
}
