use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use oscprims_annotation::AnnotationConfig;
use oscprims_types::{OscArg, OscPacket};
use serde::Serialize;
use serde_json::Value;

use crate::hex;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum PacketOutput {
    Message {
        address: String,
        type_tags: String,
        args: Vec<ArgOutput>,
        annotation: String,
    },
    Bundle {
        time: String,
        time_bits: u64,
        content: Vec<PacketOutput>,
    },
}

#[derive(Serialize)]
struct ArgOutput {
    tag: char,
    value: Value,
}

impl PacketOutput {
    fn new(packet: &OscPacket, annotation: &AnnotationConfig) -> Self {
        match packet {
            OscPacket::Message(msg) => PacketOutput::Message {
                address: msg.address().to_string(),
                type_tags: msg.type_tags(),
                args: msg
                    .args()
                    .iter()
                    .map(|arg| ArgOutput {
                        tag: arg.tag().as_char(),
                        value: arg_value(arg),
                    })
                    .collect(),
                annotation: annotation.encode(msg),
            },
            OscPacket::Bundle(bundle) => PacketOutput::Bundle {
                time: bundle.time().to_string(),
                time_bits: bundle.time().to_bits(),
                content: bundle
                    .content()
                    .iter()
                    .map(|p| PacketOutput::new(p, annotation))
                    .collect(),
            },
        }
    }
}

/// JSON value for an argument. Non-finite floats become `null`.
fn arg_value(arg: &OscArg) -> Value {
    match arg {
        OscArg::Int(v) => Value::from(*v),
        OscArg::Long(v) => Value::from(*v),
        OscArg::Float(v) => Value::from(f64::from(*v)),
        OscArg::Double(v) => Value::from(*v),
        OscArg::String(s) => Value::from(s.as_str()),
        OscArg::Char(c) => Value::from(c.to_string()),
        OscArg::Blob(bytes) => Value::from(hex::encode(bytes)),
        OscArg::Color(color) => Value::from(hex::encode(&color.to_bytes())),
        OscArg::Midi(midi) => Value::from(hex::encode(&midi.to_bytes())),
        OscArg::Time(time) => Value::from(time.to_bits()),
        OscArg::True => Value::Bool(true),
        OscArg::False => Value::Bool(false),
        OscArg::Nil | OscArg::Impulse => Value::Null,
    }
}

/// Text shown for an argument in table cells.
fn arg_cell(arg: &OscArg) -> String {
    match arg_value(arg) {
        Value::String(s) => s,
        Value::Null => match arg {
            OscArg::Impulse => "impulse".to_string(),
            OscArg::Float(v) => v.to_string(),
            OscArg::Double(v) => v.to_string(),
            _ => "nil".to_string(),
        },
        other => other.to_string(),
    }
}

pub fn print_packet(packet: &OscPacket, annotation: &AnnotationConfig, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = PacketOutput::new(packet, annotation);
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ADDRESS", "#", "TAG", "VALUE"]);
            for msg in packet.messages() {
                if msg.args().is_empty() {
                    table.add_row(vec![msg.address(), "-", "-", "-"]);
                }
                for (i, arg) in msg.args().iter().enumerate() {
                    table.add_row(vec![
                        msg.address().to_string(),
                        i.to_string(),
                        arg.tag().to_string(),
                        arg_cell(arg),
                    ]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            print!("{}", render_tree(packet, annotation));
        }
        OutputFormat::Raw => {
            for msg in packet.messages() {
                println!("{}", annotation.encode(msg));
            }
        }
    }
}

/// Annotation lines with bundle headers, indented by nesting depth.
pub fn render_tree(packet: &OscPacket, annotation: &AnnotationConfig) -> String {
    fn walk(packet: &OscPacket, annotation: &AnnotationConfig, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match packet {
            OscPacket::Message(msg) => {
                out.push_str(&indent);
                out.push_str(&annotation.encode(msg));
                out.push('\n');
            }
            OscPacket::Bundle(bundle) => {
                out.push_str(&format!("{indent}#bundle {}\n", bundle.time()));
                for element in bundle.content() {
                    walk(element, annotation, depth + 1, out);
                }
            }
        }
    }

    let mut out = String::new();
    walk(packet, annotation, 0, &mut out);
    out
}

#[derive(Serialize)]
struct EncodedOutput {
    size: usize,
    framed: bool,
    hex: String,
}

pub fn print_encoded(bytes: &[u8], framed: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                size: bytes.len(),
                framed,
                hex: hex::encode(bytes),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SIZE", "FRAMED", "HEX"])
                .add_row(vec![
                    bytes.len().to_string(),
                    framed.to_string(),
                    hex::encode(bytes),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            print!("{}", hex::dump(bytes));
        }
        OutputFormat::Raw => {
            print_raw(bytes);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use oscprims_types::{OscBundle, OscMessage, OscTimeTag};

    use super::*;

    fn nested() -> OscPacket {
        let inner = OscBundle::new(
            OscTimeTag::new(1, 0),
            vec![OscMessage::empty("/b").unwrap().into()],
        );
        OscBundle::immediate(vec![
            OscMessage::new("/a", vec![OscArg::Int(1)]).unwrap().into(),
            inner.into(),
        ])
        .into()
    }

    #[test]
    fn tree_indents_nested_bundles() {
        let text = render_tree(&nested(), &AnnotationConfig::default());
        assert_eq!(
            text,
            "#bundle immediate\n  /a 1(i)\n  #bundle 1.00000000\n    /b\n"
        );
    }

    #[test]
    fn json_output_is_tagged_by_packet_type() {
        let out = PacketOutput::new(&nested(), &AnnotationConfig::default());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["type"], "bundle");
        assert_eq!(json["time_bits"], 1);
        assert_eq!(json["content"][0]["type"], "message");
        assert_eq!(json["content"][0]["type_tags"], ",i");
        assert_eq!(json["content"][0]["args"][0]["value"], 1);
        assert_eq!(json["content"][1]["content"][0]["address"], "/b");
    }

    #[test]
    fn argument_values() {
        assert_eq!(arg_value(&OscArg::Float(f32::NAN)), Value::Null);
        assert_eq!(arg_cell(&OscArg::Float(f32::NAN)), "NaN");
        assert_eq!(arg_cell(&OscArg::Impulse), "impulse");
        assert_eq!(arg_cell(&OscArg::from("x y")), "x y");
        assert_eq!(arg_value(&OscArg::Blob(vec![1u8, 2].into())), "0102");
    }
}
