use clap::{Args, Subcommand};
use oscprims_annotation::AnnotationStyle;
use oscprims_codec::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_PACKET};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod matching;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode annotation text as a binary packet.
    Encode(EncodeArgs),
    /// Decode a binary packet and print it.
    Decode(DecodeArgs),
    /// Check that annotation text is well formed.
    Validate(ValidateArgs),
    /// Match addresses against an address pattern.
    #[command(name = "match")]
    Match(MatchArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Validate(args) => validate::run(args, format),
        Command::Match(args) => matching::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Annotation text, one per message (e.g. '/synth/freq 440.0(f)').
    #[arg(required = true)]
    pub annotations: Vec<String>,
    /// Annotation style of the input.
    #[arg(long, default_value = "spaces")]
    pub style: AnnotationStyle,
    /// Wrap the messages in a bundle (implied by more than one message).
    #[arg(long)]
    pub bundle: bool,
    /// Bundle time tag as a raw 64-bit NTP value. Default: immediate.
    #[arg(long, value_name = "NTP")]
    pub time: Option<u64>,
    /// Prefix the packet with its 4-byte size for stream transports.
    #[arg(long)]
    pub framed: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Packet bytes as hex.
    #[arg(long, conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read packet bytes from a file. Default: stdin.
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
    /// Annotation style for printed messages.
    #[arg(long, default_value = "spaces")]
    pub style: AnnotationStyle,
    /// Omit `(tag)` suffixes from printed messages.
    #[arg(long)]
    pub no_type_tags: bool,
    /// Input is a stream of size-prefixed packets.
    #[arg(long)]
    pub framed: bool,
    /// Maximum packet size in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_PACKET)]
    pub max_size: usize,
    /// Maximum bundle nesting depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Annotation text to check.
    pub annotation: String,
    /// Annotation style of the input.
    #[arg(long, default_value = "spaces")]
    pub style: AnnotationStyle,
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Address pattern (e.g. '/mixer/*/fader[1-4]').
    pub pattern: String,
    /// Addresses to test.
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
