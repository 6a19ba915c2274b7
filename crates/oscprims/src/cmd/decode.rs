use std::fs;
use std::io::Read;

use oscprims_annotation::AnnotationConfig;
use oscprims_codec::{decode_with_config, CodecConfig, PacketReader};
use oscprims_types::OscPacket;
use tracing::debug;

use crate::cmd::DecodeArgs;
use crate::exit::{codec_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::hex;
use crate::output::{print_packet, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = read_input(&args)?;
    let config = CodecConfig {
        max_packet_size: args.max_size,
        max_depth: args.max_depth,
    };
    let packets = decode_all(&data, args.framed, &config)?;
    debug!(bytes = data.len(), packets = packets.len(), "decoded input");

    let annotation = AnnotationConfig {
        style: args.style,
        include_type_tags: !args.no_type_tags,
    };
    for packet in &packets {
        print_packet(packet, &annotation, format);
    }
    Ok(SUCCESS)
}

fn read_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(text) = &args.hex {
        return hex::decode(text).map_err(|err| CliError::new(USAGE, format!("--hex: {err}")));
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    let mut data = Vec::new();
    std::io::stdin()
        .read_to_end(&mut data)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(data)
}

fn decode_all(data: &[u8], framed: bool, config: &CodecConfig) -> CliResult<Vec<OscPacket>> {
    let packets = if framed {
        PacketReader::with_config(data, config.clone()).collect()
    } else {
        decode_with_config(data, config).map(|packet| vec![packet])
    };
    packets.map_err(|err| codec_error("decode failed", err))
}
