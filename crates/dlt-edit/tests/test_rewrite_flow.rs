//! End-to-end decode, rewrite, and merge flow through the registry.

use bytes::{Bytes, BytesMut};
use dlt_edit::{
    DecodeContext,
    Direction,
    DltError,
    DltRegistry,
    EtherProtocol,
    LinkHandler,
    LinkType,
    Provides,
};

type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A 20-byte IPv4 header followed by no payload.
const IPV4_PACKET: &[u8] = &[
    0x45, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x00, 0x40, 0x11, 0x00, 0x00, 0x0a, 0x00, 0x00,
    0x01, 0x0a, 0x00, 0x00, 0x02,
];

#[test]
fn rewrite_flow_over_raw_link_type() -> TestResult {
    let mut registry = DltRegistry::with_builtin_handlers();
    registry.init(LinkType::RAW)?.into_value();

    let mut ctx = DecodeContext::new();
    let handler = registry.get_mut(LinkType::RAW)?;

    // The engine checks the handler's capabilities before asking for a
    // protocol-dependent rewrite.
    assert!(handler.provides().contains(Provides::PROTOCOL));

    handler.decode(&mut ctx, IPV4_PACKET)?.into_value();
    assert_eq!(ctx.proto, Some(EtherProtocol::Ipv4));
    assert_eq!(ctx.l2len, 0);

    // Rewrite the layer-3 payload, which starts at the reported offset.
    let offset = handler.layer3_offset(IPV4_PACKET)?;
    let mut rewritten = BytesMut::from(&IPV4_PACKET[offset..]);
    rewritten[15] = 0x63;
    rewritten[19] = 0x63;

    // With a zero-length header the packet and its layer 3 data are the
    // same bytes; merging returns the buffer unchanged.
    let rewritten: Bytes = rewritten.freeze();
    let merged = handler.merge_layer3(rewritten.clone(), rewritten)?;
    assert_eq!(merged[15], 0x63);
    assert_eq!(merged.len(), IPV4_PACKET.len() - ctx.l2len);

    registry.cleanup(LinkType::RAW)?.into_value();
    Ok(())
}

#[test]
fn requested_encode_is_surfaced_not_skipped() -> TestResult {
    let mut registry = DltRegistry::with_builtin_handlers();
    registry.init(LinkType::RAW)?.into_value();

    let mut ctx = DecodeContext::new();
    let handler = registry.get_mut(LinkType::RAW)?;
    handler.decode(&mut ctx, IPV4_PACKET)?.into_value();

    let mut buffer = BytesMut::new();
    let result = handler.encode(&ctx, &mut buffer, Direction::ClientToServer);

    assert_eq!(result, Err(DltError::EncodeUnsupported("raw")));
    assert!(buffer.is_empty());
    Ok(())
}

#[test]
fn context_is_reused_across_packets() -> TestResult {
    let mut registry = DltRegistry::with_builtin_handlers();
    registry.init(LinkType::RAW)?.into_value();

    let mut ctx = DecodeContext::new();
    let handler = registry.get_mut(LinkType::RAW)?;

    handler.decode(&mut ctx, IPV4_PACKET)?.into_value();
    assert_eq!(ctx.proto, Some(EtherProtocol::Ipv4));

    ctx.reset();
    handler.decode(&mut ctx, &[0x60, 0x00, 0x00, 0x00])?.into_value();
    assert_eq!(ctx.proto, Some(EtherProtocol::Ipv6));

    ctx.reset();
    let result = handler.decode(&mut ctx, &[0x00, 0x00]);
    assert_eq!(result, Err(DltError::UnrecognizedPayload(0)));
    assert_eq!(ctx.proto, None);

    Ok(())
}
