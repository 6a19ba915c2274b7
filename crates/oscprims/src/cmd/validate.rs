use comfy_table::{presets::UTF8_FULL, Table};
use oscprims_annotation::validate as validate_annotation;
use serde::Serialize;

use crate::cmd::ValidateArgs;
use crate::exit::{CliResult, DATA_INVALID, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ValidationOutput<'a> {
    annotation: &'a str,
    style: String,
    valid: bool,
}

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let valid = validate_annotation(&args.annotation, args.style);
    let out = ValidationOutput {
        annotation: &args.annotation,
        style: args.style.to_string(),
        valid,
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["STYLE", "VALID", "ANNOTATION"])
                .add_row(vec![out.style.clone(), valid.to_string(), args.annotation.clone()]);
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            println!("{}", if valid { "valid" } else { "invalid" });
        }
    }

    Ok(if valid { SUCCESS } else { DATA_INVALID })
}
