//! Handler for the raw IP link type, whose framing is a zero-length header.

use bytes::{Bytes, BytesMut};

use crate::{
    address::AddressKind,
    context::{DecodeContext, Direction},
    error::{Completion, DltError, DltResult},
    handler::{HandlerOptions, LinkHandler, Provides},
    linktype::LinkType,
    protocol::EtherProtocol,
};

/// Per-session configuration of the raw handler.
///
/// The raw link type declares no options, so the blob is empty; it still
/// follows the lazy init/cleanup lifecycle of the contract.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RawConfig {}

/// Handler-private decode scratch, reused across packets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RawExtra {}

/// Handler for [`LinkType::RAW`]: a zero-length link header directly
/// followed by an IPv4 or IPv6 packet.
///
/// The framing carries no addresses and nothing to reconstruct, so the
/// handler provides only the layer-3 protocol, which it reads from the IP
/// version nibble of the first payload byte. Packet encoding is refused as
/// a capability limit: with no header bytes to rebuild, a requested
/// re-encode cannot be honored and is surfaced rather than skipped.
#[derive(Debug, Default)]
pub struct RawHandler {
    config: Option<RawConfig>,
    extra: Option<RawExtra>,
}

impl RawHandler {
    /// The handler's name and option-namespace prefix.
    pub const NAME: &'static str = "raw";

    /// Creates the handler in its registered, uninitialized state.
    ///
    /// Allocates nothing; configuration and scratch are created lazily by
    /// [`init`][LinkHandler::init] once the handler becomes active.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkHandler for RawHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn link_type(&self) -> LinkType {
        LinkType::RAW
    }

    fn provides(&self) -> Provides {
        Provides::PROTOCOL
    }

    fn address_kind(&self) -> AddressKind {
        AddressKind::None
    }

    fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    fn init(&mut self) -> DltResult<()> {
        self.config.get_or_insert_with(RawConfig::default);
        self.extra.get_or_insert_with(RawExtra::default);

        Ok(Completion::Ok(()))
    }

    fn cleanup(&mut self) -> DltResult<()> {
        self.config = None;
        self.extra = None;

        Ok(Completion::Ok(()))
    }

    fn parse_options(&mut self, _options: &HandlerOptions) -> DltResult<()> {
        // No options in the "raw" namespace.
        Ok(Completion::Ok(()))
    }

    fn decode(&mut self, ctx: &mut DecodeContext, packet: &[u8]) -> DltResult<()> {
        if !self.is_initialized() {
            return Err(DltError::NotInitialized(Self::NAME));
        }

        ctx.proto = Some(self.protocol(packet)?);
        ctx.l2len = 0;

        Ok(Completion::Ok(()))
    }

    fn encode(
        &mut self,
        _ctx: &DecodeContext,
        _buffer: &mut BytesMut,
        _direction: Direction,
    ) -> DltResult<usize> {
        Err(DltError::EncodeUnsupported(Self::NAME))
    }

    fn protocol(&self, packet: &[u8]) -> Result<EtherProtocol, DltError> {
        let first_byte = packet.first().ok_or(DltError::EmptyPacket)?;
        EtherProtocol::from_ip_version(*first_byte)
    }

    fn layer2_length(&self, packet: &[u8]) -> Result<usize, DltError> {
        if packet.is_empty() {
            return Err(DltError::EmptyPacket);
        }

        Ok(0)
    }

    fn layer3_offset(&self, packet: &[u8]) -> Result<usize, DltError> {
        if packet.is_empty() {
            return Err(DltError::EmptyPacket);
        }

        Ok(0)
    }

    fn merge_layer3(&self, packet: Bytes, _l3data: Bytes) -> Result<Bytes, DltError> {
        if packet.is_empty() {
            return Err(DltError::EmptyPacket);
        }

        // No header bytes to keep in front of the new layer 3 data.
        Ok(packet)
    }
}
