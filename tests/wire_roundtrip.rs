//! End-to-end checks against hand-assembled wire buffers.

use std::net::Ipv4Addr;

use anyhow::Result;
use dns_wire::{
    Message, Opcode, Question, RData, Rcode, RecordClass, RecordType, ResourceRecord, WireError,
};

/// A captured-style response buffer: one question, one compressed
/// answer, built octet by octet.
fn example_response() -> Vec<u8> {
    let mut buf = Vec::new();
    // Header: ID=0x1234, QR|RD|RA, one question, one answer
    buf.extend_from_slice(&[0x12, 0x34, 0x81, 0x80, 0, 1, 0, 1, 0, 0, 0, 0]);
    // Question: example.com A IN, name starts at offset 12
    buf.extend_from_slice(b"\x07example\x03com\x00");
    buf.extend_from_slice(&[0, 1, 0, 1]);
    // Answer: pointer to offset 12, A IN, TTL 300, 93.184.216.34
    buf.extend_from_slice(&[0xC0, 12]);
    buf.extend_from_slice(&[0, 1, 0, 1]);
    buf.extend_from_slice(&[0, 0, 1, 44]);
    buf.extend_from_slice(&[0, 4, 93, 184, 216, 34]);
    buf
}

#[test]
fn decodes_compressed_response() -> Result<()> {
    let message = Message::from_bytes(&example_response())?;

    assert_eq!(message.header.id, 0x1234);
    assert!(message.header.flags.qr);
    assert_eq!(message.header.flags.opcode, Opcode::StandardQuery);
    assert_eq!(message.header.flags.rcode, Rcode::NoError);

    assert_eq!(message.questions.len(), 1);
    assert_eq!(message.questions[0].name, "example.com");

    assert_eq!(message.answers.len(), 1);
    let answer = &message.answers[0];
    assert_eq!(answer.name, "example.com");
    assert_eq!(answer.ttl, 300);
    assert_eq!(answer.rdata, RData::A(Ipv4Addr::new(93, 184, 216, 34)));
    Ok(())
}

#[test]
fn reencoded_response_survives_decode() -> Result<()> {
    let message = Message::from_bytes(&example_response())?;

    // The encoder never emits compression pointers, so the bytes will
    // differ from the captured buffer; the structure must not.
    let wire = message.to_bytes()?;
    let again = Message::from_bytes(&wire)?;
    assert_eq!(again, message);
    Ok(())
}

#[test]
fn query_fits_a_udp_datagram() -> Result<()> {
    let query = Message::new_query(
        0xABCD,
        vec![Question::new("www.example.com", RecordType::A, RecordClass::In)],
    );
    let wire = query.to_bytes()?;
    assert!(wire.len() <= 512);
    Ok(())
}

#[test]
fn oversized_label_fails_before_any_output() {
    let query = Message::new_query(
        1,
        vec![Question::new(
            "x".repeat(64),
            RecordType::A,
            RecordClass::In,
        )],
    );
    assert_eq!(query.to_bytes().unwrap_err(), WireError::LabelTooLong(64));
}

#[test]
fn truncated_or_garbage_buffers_never_panic() {
    let response = example_response();
    for cut in 0..response.len() {
        // Every prefix must decode or fail cleanly.
        let _ = Message::from_bytes(&response[..cut]);
    }

    let mut mangled = response.clone();
    for i in 0..mangled.len() {
        mangled[i] ^= 0xFF;
        let _ = Message::from_bytes(&mangled);
        mangled[i] ^= 0xFF;
    }
}

#[test]
fn name_bearing_rdata_roundtrips() -> Result<()> {
    let mut message = Message::new_query(
        9,
        vec![Question::new("example.com", RecordType::Ns, RecordClass::In)],
    );
    message.header.flags.qr = true;
    message
        .authority
        .push(ResourceRecord::new_ns("example.com", 86400, "ns1.example.com"));
    message
        .answers
        .push(ResourceRecord::new_ptr("1.0.0.127.in-addr.arpa", 60, "localhost"));

    let wire = message.to_bytes()?;
    let parsed = Message::from_bytes(&wire)?;
    assert_eq!(parsed, message);
    Ok(())
}
