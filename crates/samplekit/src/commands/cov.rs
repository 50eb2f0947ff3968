//! Handler for the `samplekit cov` command.

use anyhow::{Context, Result};
use samplekit_math::covariance_matrix;

use crate::cli::CovArgs;
use crate::input;

pub(crate) fn handle(args: CovArgs) -> Result<()> {
    let x = input::read_sample(Some(&args.x))?;
    let y = input::read_sample(Some(&args.y))?;
    let matrix = covariance_matrix(&x, &y).context("cannot compute the covariance matrix")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        let rows = matrix.to_rows();
        println!("[ {:>14.6} {:>14.6} ]", rows[0][0], rows[0][1]);
        println!("[ {:>14.6} {:>14.6} ]", rows[1][0], rows[1][1]);
    }
    Ok(())
}
