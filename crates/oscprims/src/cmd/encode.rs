use bytes::BytesMut;
use oscprims_annotation::decode as decode_annotation;
use oscprims_codec::{encode_packet, encode_stream_frame};
use oscprims_types::{OscBundle, OscPacket, OscTimeTag};
use tracing::debug;

use crate::cmd::EncodeArgs;
use crate::exit::{codec_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let packet = build_packet(&args)?;

    let mut buf = BytesMut::new();
    let encoded = if args.framed {
        encode_stream_frame(&packet, &mut buf)
    } else {
        encode_packet(&packet, &mut buf)
    };
    encoded.map_err(|err| codec_error("encode failed", err))?;
    debug!(size = buf.len(), framed = args.framed, "encoded packet");

    print_encoded(&buf, args.framed, format);
    Ok(SUCCESS)
}

fn build_packet(args: &EncodeArgs) -> CliResult<OscPacket> {
    let mut messages = Vec::with_capacity(args.annotations.len());
    for text in &args.annotations {
        let msg = decode_annotation(text, args.style).ok_or_else(|| {
            CliError::new(
                DATA_INVALID,
                format!("invalid {} annotation: {text}", args.style),
            )
        })?;
        messages.push(OscPacket::from(msg));
    }

    if messages.len() == 1 && !args.bundle && args.time.is_none() {
        return Ok(messages.remove(0));
    }
    let time = args.time.map_or(OscTimeTag::IMMEDIATE, OscTimeTag::from_bits);
    Ok(OscBundle::new(time, messages).into())
}
