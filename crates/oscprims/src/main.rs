mod cmd;
mod exit;
mod hex;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "oscprims", version, about = "Open Sound Control packet tools")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). OSCPRIMS_LOG overrides with a full filter.
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use oscprims_annotation::AnnotationStyle;

    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "oscprims",
            "encode",
            "/synth/freq=440.0(f)",
            "--style",
            "equals-comma",
            "--framed",
        ])
        .expect("encode args should parse");

        let Command::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(args.style, AnnotationStyle::EqualsComma);
        assert!(args.framed);
    }

    #[test]
    fn rejects_conflicting_decode_inputs() {
        let err = Cli::try_parse_from([
            "oscprims",
            "decode",
            "--hex",
            "2f6100002c000000",
            "--file",
            "/tmp/packet.bin",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_unknown_style() {
        let err = Cli::try_parse_from(["oscprims", "validate", "/a 1", "--style", "tabs"])
            .expect_err("unknown style should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_match_subcommand() {
        let cli = Cli::try_parse_from(["oscprims", "match", "/foo/*", "/foo/bar", "/foo/baz"])
            .expect("match args should parse");
        let Command::Match(args) = cli.command else {
            panic!("expected match");
        };
        assert_eq!(args.addresses.len(), 2);
    }

    #[test]
    fn match_requires_an_address() {
        assert!(Cli::try_parse_from(["oscprims", "match", "/foo/*"]).is_err());
    }
}
