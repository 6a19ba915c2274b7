use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use oscprims_pattern::AddressPattern;
use serde::Serialize;

use crate::cmd::MatchArgs;
use crate::exit::{CliError, CliResult, FAILURE, SUCCESS, USAGE};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct MatchOutput<'a> {
    pattern: &'a str,
    address: &'a str,
    matched: bool,
}

pub fn run(args: MatchArgs, format: OutputFormat) -> CliResult<i32> {
    let pattern = AddressPattern::parse(&args.pattern)
        .map_err(|err| CliError::new(USAGE, format!("invalid pattern {}: {err}", args.pattern)))?;

    let results: Vec<MatchOutput<'_>> = args
        .addresses
        .iter()
        .map(|address| MatchOutput {
            pattern: pattern.as_str(),
            address,
            matched: pattern.matches(address),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            for result in &results {
                println!(
                    "{}",
                    serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ADDRESS", "MATCHED"]);
            for result in &results {
                table.add_row(vec![result.address.to_string(), result.matched.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for result in &results {
                let mark = if result.matched { "match" } else { "no match" };
                println!("{mark}: {}", result.address);
            }
        }
        OutputFormat::Raw => {
            for result in results.iter().filter(|r| r.matched) {
                println!("{}", result.address);
            }
        }
    }

    if results.iter().any(|r| r.matched) {
        Ok(SUCCESS)
    } else {
        Ok(FAILURE)
    }
}
