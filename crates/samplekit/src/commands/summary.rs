//! Handler for the `samplekit summary` command.

use anyhow::{Context, Result};
use samplekit_math::{order_statistics, sample_mean, sample_std_dev, sample_variance};
use samplekit_types::{SummaryReceipt, SCHEMA_VERSION};

use crate::cli::{OutputFormat, SummaryArgs};
use crate::input;

pub(crate) fn handle(args: SummaryArgs) -> Result<()> {
    let data = input::read_sample(args.file.as_deref())?;
    let receipt = build_receipt(&data)?;

    match args.format {
        OutputFormat::Text => print_text(&receipt),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&receipt)?),
    }
    Ok(())
}

fn build_receipt(data: &[f64]) -> Result<SummaryReceipt> {
    let mean = sample_mean(data).context("cannot summarize the sample")?;
    let order = order_statistics(data)?;
    Ok(SummaryReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        len: data.len(),
        mean,
        variance: sample_variance(data).ok(),
        std_dev: sample_std_dev(data).ok(),
        order,
    })
}

fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

fn print_text(receipt: &SummaryReceipt) {
    println!("observations  {}", receipt.len);
    println!("mean          {}", receipt.mean);
    match receipt.variance {
        Some(variance) => println!("variance      {variance}"),
        None => println!("variance      n/a (needs at least 2 observations)"),
    }
    match receipt.std_dev {
        Some(std_dev) => println!("std dev       {std_dev}"),
        None => println!("std dev       n/a (needs at least 2 observations)"),
    }
    let (min, max, median, q1, q3) = receipt.order.into_tuple();
    println!("min           {min}");
    println!("q1            {q1}");
    println!("median        {median}");
    println!("q3            {q3}");
    println!("max           {max}");
}
