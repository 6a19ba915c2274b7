//! Stream size-prefixed OSC packets over an in-memory duplex pipe with
//! `tokio_util::codec`.
//!
//! Run with:
//!   cargo run --example async-stream --features async

use futures_util::{SinkExt, StreamExt};
use oscprims::codec::OscCodec;
use oscprims::{OscArg, OscMessage, OscPacket};
use tokio_util::codec::{FramedRead, FramedWrite};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (client, server) = tokio::io::duplex(4096);

    let writer = tokio::spawn(async move {
        let mut sink = FramedWrite::new(client, OscCodec::default());
        for step in 0..4 {
            let msg = OscMessage::new("/sequencer/step", vec![OscArg::Int(step)])?;
            sink.send(OscPacket::from(msg)).await?;
        }
        Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
    });

    let mut stream = FramedRead::new(server, OscCodec::default());
    while let Some(packet) = stream.next().await {
        for msg in packet?.messages() {
            println!("{} {:?}", msg.address(), msg.args());
        }
    }

    writer.await?.map_err(|err| err.to_string())?;
    Ok(())
}
