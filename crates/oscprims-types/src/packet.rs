use crate::message::OscMessage;
use crate::time::OscTimeTag;

/// A time-tagged, ordered collection of packets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OscBundle {
    time: OscTimeTag,
    content: Vec<OscPacket>,
}

impl OscBundle {
    pub fn new(time: OscTimeTag, content: Vec<OscPacket>) -> Self {
        Self { time, content }
    }

    /// A bundle to be executed as soon as it is received.
    pub fn immediate(content: Vec<OscPacket>) -> Self {
        Self::new(OscTimeTag::IMMEDIATE, content)
    }

    pub fn time(&self) -> OscTimeTag {
        self.time
    }

    pub fn content(&self) -> &[OscPacket] {
        &self.content
    }

    pub fn into_parts(self) -> (OscTimeTag, Vec<OscPacket>) {
        (self.time, self.content)
    }

    /// Depth of the deepest nested bundle, counting this one as 1.
    pub fn depth(&self) -> usize {
        1 + self
            .content
            .iter()
            .map(|packet| match packet {
                OscPacket::Message(_) => 0,
                OscPacket::Bundle(bundle) => bundle.depth(),
            })
            .max()
            .unwrap_or(0)
    }
}

/// The unit exchanged with the codecs: a message or a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OscPacket {
    Message(OscMessage),
    Bundle(OscBundle),
}

impl OscPacket {
    /// All messages in this packet, depth first, in wire order.
    pub fn messages(&self) -> Vec<&OscMessage> {
        let mut out = Vec::new();
        collect_messages(self, &mut out);
        out
    }
}

fn collect_messages<'a>(packet: &'a OscPacket, out: &mut Vec<&'a OscMessage>) {
    match packet {
        OscPacket::Message(msg) => out.push(msg),
        OscPacket::Bundle(bundle) => {
            for inner in bundle.content() {
                collect_messages(inner, out);
            }
        }
    }
}

impl From<OscMessage> for OscPacket {
    fn from(msg: OscMessage) -> Self {
        OscPacket::Message(msg)
    }
}

impl From<OscBundle> for OscPacket {
    fn from(bundle: OscBundle) -> Self {
        OscPacket::Bundle(bundle)
    }
}
