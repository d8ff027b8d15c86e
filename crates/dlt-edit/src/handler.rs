//! The contract every link-type handler implements, and its dispatch type.

use std::{collections::HashMap, ops::BitOr};

use bytes::{Bytes, BytesMut};

use crate::{
    address::AddressKind,
    context::{DecodeContext, Direction},
    error::{DltError, DltResult},
    linktype::LinkType,
    protocol::EtherProtocol,
    raw::RawHandler,
};

/// The set of [`DecodeContext`] fields a handler fills in on decode.
///
/// Declared once at registration so the rewriting engine can check that a
/// requested operation (say, link-address rewriting) is supported by the
/// active link type before attempting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Provides(u8);

impl Provides {
    /// The handler fills in no context fields.
    pub const NONE: Self = Self(0);
    /// The handler determines the layer-3 protocol.
    pub const PROTOCOL: Self = Self(1 << 0);
    /// The handler parses the link-layer source address.
    pub const SRC_ADDR: Self = Self(1 << 1);
    /// The handler parses the link-layer destination address.
    pub const DST_ADDR: Self = Self(1 << 2);

    /// Returns true if every capability in `other` is present in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Provides {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Handler-specific configuration, keyed by option name within the
/// namespace of the handler's [`name`][LinkHandler::name] prefix.
#[derive(Debug, Clone, Default)]
pub struct HandlerOptions(HashMap<String, String>);

impl HandlerOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option for the named handler, e.g. `("raw", "strict")`.
    pub fn set(&mut self, handler: &str, key: &str, value: impl Into<String>) {
        self.0.insert(format!("{handler}.{key}"), value.into());
    }

    /// Looks up an option within the named handler's namespace.
    pub fn get(&self, handler: &str, key: &str) -> Option<&str> {
        self.0.get(&format!("{handler}.{key}")).map(String::as_str)
    }
}

/// The uniform contract implemented by every link-type handler.
///
/// A handler is bound to exactly one [`LinkType`] and moves through the
/// states Registered → Initialized → (decoding/encoding per packet) →
/// cleaned up (back to Registered). Construction performs no per-packet
/// allocation; [`init`][Self::init] lazily allocates configuration and
/// scratch exactly once, and [`cleanup`][Self::cleanup] releases them
/// idempotently. All operations are total over well-formed inputs and
/// signal failure through [`DltError`] on malformed ones.
pub trait LinkHandler {
    /// The handler's name, also used as its option-namespace prefix.
    fn name(&self) -> &'static str;

    /// The link type this handler is bound to.
    fn link_type(&self) -> LinkType;

    /// The [`DecodeContext`] fields this handler fills in on decode.
    fn provides(&self) -> Provides;

    /// The kind of link-layer addressing this handler's framing supports.
    fn address_kind(&self) -> AddressKind;

    /// Returns true once [`init`][Self::init] has run and
    /// [`cleanup`][Self::cleanup] has not.
    fn is_initialized(&self) -> bool;

    /// Allocates the handler's configuration and per-session scratch.
    ///
    /// Called once, lazily, only when the handler becomes active. Calling
    /// it again after [`cleanup`][Self::cleanup] restores the same state as
    /// a single `init`.
    fn init(&mut self) -> DltResult<()>;

    /// Releases configuration and scratch memory.
    ///
    /// Idempotent: safe to call when nothing was allocated, including after
    /// a partially failed `init`.
    fn cleanup(&mut self) -> DltResult<()>;

    /// Consumes handler-specific options from the handler's namespace.
    ///
    /// A no-op for handlers that declare no options.
    fn parse_options(&mut self, options: &HandlerOptions) -> DltResult<()>;

    /// Decodes the link header at the front of `packet`, filling in the
    /// context fields declared by [`provides`][Self::provides] and setting
    /// `ctx.l2len`.
    ///
    /// On failure the context's protocol field is left unmodified.
    fn decode(&mut self, ctx: &mut DecodeContext, packet: &[u8]) -> DltResult<()>;

    /// Reconstructs the link header into `buffer` after layer-3 rewriting,
    /// returning the number of header bytes written.
    ///
    /// A handler may refuse encoding entirely as a documented capability
    /// limit, in which case it returns [`DltError::EncodeUnsupported`] and
    /// leaves `buffer` untouched.
    fn encode(
        &mut self,
        ctx: &DecodeContext,
        buffer: &mut BytesMut,
        direction: Direction,
    ) -> DltResult<usize>;

    /// Determines the layer-3 protocol of `packet` without a full decode.
    fn protocol(&self, packet: &[u8]) -> Result<EtherProtocol, DltError>;

    /// Returns the number of link-header bytes this handler consumes for
    /// this packet.
    fn layer2_length(&self, packet: &[u8]) -> Result<usize, DltError>;

    /// Returns the offset into `packet` at which the layer-3 payload begins.
    fn layer3_offset(&self, packet: &[u8]) -> Result<usize, DltError>;

    /// Combines a packet's original link header with possibly-relocated,
    /// possibly-resized layer-3 data, returning a buffer in which the link
    /// header is immediately followed by the new layer-3 data.
    ///
    /// Handlers with non-zero headers may need to copy so the new layer-3
    /// data lands on the boundary their header layout requires; with a
    /// zero-length header the original buffer is returned unchanged.
    fn merge_layer3(&self, packet: Bytes, l3data: Bytes) -> Result<Bytes, DltError>;
}

/// The closed set of link-type handlers, dispatched by tag.
///
/// Adding a link type means adding a variant here; every `match` over the
/// set is then checked for exhaustiveness at compile time.
#[derive(Debug)]
pub enum Handler {
    /// The zero-length-header raw IP link type.
    Raw(RawHandler),
}

macro_rules! dispatch {
    ($self:expr, $handler:pat => $body:expr) => {
        match $self {
            Handler::Raw($handler) => $body,
        }
    };
}

impl LinkHandler for Handler {
    fn name(&self) -> &'static str {
        dispatch!(self, h => h.name())
    }

    fn link_type(&self) -> LinkType {
        dispatch!(self, h => h.link_type())
    }

    fn provides(&self) -> Provides {
        dispatch!(self, h => h.provides())
    }

    fn address_kind(&self) -> AddressKind {
        dispatch!(self, h => h.address_kind())
    }

    fn is_initialized(&self) -> bool {
        dispatch!(self, h => h.is_initialized())
    }

    fn init(&mut self) -> DltResult<()> {
        dispatch!(self, h => h.init())
    }

    fn cleanup(&mut self) -> DltResult<()> {
        dispatch!(self, h => h.cleanup())
    }

    fn parse_options(&mut self, options: &HandlerOptions) -> DltResult<()> {
        dispatch!(self, h => h.parse_options(options))
    }

    fn decode(&mut self, ctx: &mut DecodeContext, packet: &[u8]) -> DltResult<()> {
        dispatch!(self, h => h.decode(ctx, packet))
    }

    fn encode(
        &mut self,
        ctx: &DecodeContext,
        buffer: &mut BytesMut,
        direction: Direction,
    ) -> DltResult<usize> {
        dispatch!(self, h => h.encode(ctx, buffer, direction))
    }

    fn protocol(&self, packet: &[u8]) -> Result<EtherProtocol, DltError> {
        dispatch!(self, h => h.protocol(packet))
    }

    fn layer2_length(&self, packet: &[u8]) -> Result<usize, DltError> {
        dispatch!(self, h => h.layer2_length(packet))
    }

    fn layer3_offset(&self, packet: &[u8]) -> Result<usize, DltError> {
        dispatch!(self, h => h.layer3_offset(packet))
    }

    fn merge_layer3(&self, packet: Bytes, l3data: Bytes) -> Result<Bytes, DltError> {
        dispatch!(self, h => h.merge_layer3(packet, l3data))
    }
}

impl From<RawHandler> for Handler {
    fn from(handler: RawHandler) -> Self {
        Handler::Raw(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provides_contains_each_declared_capability() {
        let provides = Provides::PROTOCOL | Provides::SRC_ADDR;

        assert!(provides.contains(Provides::PROTOCOL));
        assert!(provides.contains(Provides::SRC_ADDR));
        assert!(provides.contains(Provides::NONE));
        assert!(!provides.contains(Provides::DST_ADDR));
        assert!(!provides.contains(Provides::PROTOCOL | Provides::DST_ADDR));
    }

    #[test]
    fn options_are_namespaced_by_handler_name() {
        let mut options = HandlerOptions::new();
        options.set("raw", "strict", "true");

        assert_eq!(options.get("raw", "strict"), Some("true"));
        assert_eq!(options.get("en10mb", "strict"), None);
        assert_eq!(options.get("raw", "other"), None);
    }

    #[test]
    fn dispatch_reaches_the_bound_handler() {
        let handler = Handler::from(RawHandler::new());

        assert_eq!(handler.name(), "raw");
        assert_eq!(handler.link_type(), LinkType::RAW);
        assert_eq!(handler.address_kind(), AddressKind::None);
        assert!(handler.provides().contains(Provides::PROTOCOL));
    }
}
