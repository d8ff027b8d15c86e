//! Per-packet decode state shared between handlers and the rewriting engine.

use crate::{address::LinkAddr, protocol::EtherProtocol};

/// The transmission direction of a packet being encoded.
///
/// Bidirectional link types use this to select between peer addresses when
/// reconstructing a header; unidirectional handlers ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Client to server.
    #[default]
    ClientToServer,
    /// Server to client.
    ServerToClient,
}

/// Per-packet scratch state populated by the active handler's decode and
/// consumed by the rewriting engine and the handler's encode.
///
/// A context is reused across packets; [`DecodeContext::reset`] clears the
/// previous packet's results. After a successful decode, `l2len` plus the
/// layer-3 offset never exceeds the packet length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeContext {
    /// Bytes consumed by the link header at the front of the packet.
    pub l2len: usize,
    /// The link-layer source address, for framings that carry one.
    pub src: Option<LinkAddr>,
    /// The link-layer destination address, for framings that carry one.
    pub dst: Option<LinkAddr>,
    /// The layer-3 protocol carried by the frame.
    pub proto: Option<EtherProtocol>,
}

impl DecodeContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the results of the previous packet's decode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_previous_decode() {
        let mut ctx = DecodeContext::new();
        ctx.l2len = 14;
        ctx.proto = Some(EtherProtocol::Ipv4);

        ctx.reset();

        assert_eq!(ctx, DecodeContext::default());
    }
}
