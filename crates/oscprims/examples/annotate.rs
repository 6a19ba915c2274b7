//! Build a bundle, send it through the binary codec, and print it as
//! annotation text in both styles.
//!
//! Run with:
//!   cargo run --example annotate

use oscprims::annotation::{AnnotationConfig, AnnotationStyle};
use oscprims::codec::{decode, encode};
use oscprims::pattern::AddressPattern;
use oscprims::{OscArg, OscBundle, OscMessage, OscPacket};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = OscBundle::immediate(vec![
        OscMessage::new("/mixer/main/fader1", vec![OscArg::Float(0.8)])?.into(),
        OscMessage::new("/mixer/aux/fader2", vec![OscArg::Float(0.25)])?.into(),
        OscMessage::new("/mixer/main/label", vec![OscArg::from("lead vocal")])?.into(),
    ]);

    let bytes = encode(&OscPacket::from(bundle))?;
    eprintln!("encoded {} bytes", bytes.len());
    let packet = decode(&bytes)?;

    let faders = AddressPattern::parse("/mixer/*/fader[1-4]")?;
    for style in [AnnotationStyle::Spaces, AnnotationStyle::EqualsComma] {
        let config = AnnotationConfig {
            style,
            ..AnnotationConfig::default()
        };
        println!("# {style}");
        for msg in packet.messages() {
            let mark = if faders.matches(msg.address()) { "*" } else { " " };
            println!("{mark} {}", config.encode(msg));
        }
    }

    let parsed = AnnotationConfig::default()
        .decode(r#"/mixer/main/label "lead vocal"(s)"#)
        .ok_or("annotation did not parse")?;
    assert!(packet.messages().contains(&&parsed));
    Ok(())
}
