//! Pluggable link-layer (DLT) framing handlers for a packet-rewriting pipeline.
//!
//! A capture attaches a [`LinkType`] tag to every packet, identifying the
//! layer-2 framing that precedes the layer-3 payload. This crate provides a
//! uniform contract ([`LinkHandler`]) for stripping and reconstructing that
//! framing, a [`DltRegistry`] that selects the handler for a given tag, and
//! a reference implementation ([`RawHandler`]) for the zero-length-header
//! link type carrying bare IPv4/IPv6.
//!
//! The rewriting engine drives the flow: it decodes a packet through the
//! active handler to locate the layer-2/layer-3 boundary and the layer-3
//! protocol, rewrites the payload, then asks the handler to re-encode or
//! merge the framing back in front of the edited payload.

pub mod address;
pub mod context;
pub mod error;
pub mod handler;
pub mod linktype;
pub mod protocol;
pub mod raw;
pub mod registry;
pub(crate) mod utils;

pub use self::{
    address::{AddressKind, LinkAddr, MacAddr},
    context::{DecodeContext, Direction},
    error::{Completion, DltError, DltResult, Warning},
    handler::{Handler, HandlerOptions, LinkHandler, Provides},
    linktype::LinkType,
    protocol::EtherProtocol,
    raw::RawHandler,
    registry::DltRegistry,
};
