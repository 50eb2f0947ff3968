pub(crate) mod check;
pub(crate) mod cov;
pub(crate) mod summary;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check(args) => check::handle(args),
        Commands::Summary(args) => summary::handle(args),
        Commands::Cov(args) => cov::handle(args),
    }
}
