//! Domain-name wire encoding, RFC 1035 §3.1 and §4.1.4.
//!
//! Names travel as a run of length-prefixed labels closed by a zero
//! octet. A length octet with both high bits set is instead a 2-octet
//! compression pointer whose low 14 bits give an offset into the
//! message where the rest of the name lives. The encoder here never
//! emits pointers; the decoder follows them, with a backward-only rule
//! that makes loops impossible on hostile input.

use bytes::{BufMut, BytesMut};

use crate::error::WireError;

/// Longest single label, in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name (length octets + label bytes + terminator).
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0xC0;

/// Encode a dotted domain name as length-prefixed labels plus the zero
/// terminator. `"example.com"` becomes `[7]example[3]com[0]`; `"."`
/// (and a trailing dot on any name) denotes the root.
///
/// The name is validated in full before anything is written, so a
/// failed encode leaves `out` untouched.
pub fn encode_name(name: &str, out: &mut BytesMut) -> Result<(), WireError> {
    let name = name.strip_suffix('.').unwrap_or(name);

    // Validation pass: nothing is written until the whole name checks out.
    let mut encoded_len = 1; // terminator
    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(WireError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong(label.len()));
            }
            encoded_len += 1 + label.len();
        }
        if encoded_len > MAX_NAME_LEN {
            return Err(WireError::NameTooLong(encoded_len));
        }
    }

    out.reserve(encoded_len);
    if !name.is_empty() {
        for label in name.split('.') {
            out.put_u8(label.len() as u8);
            out.put_slice(label.as_bytes());
        }
    }
    out.put_u8(0);

    Ok(())
}

/// Parse a domain name from a message buffer, following compression
/// pointers, and return it in dotted form along with the offset of the
/// first octet after the name.
///
/// A pointer always closes the name as far as the cursor is concerned:
/// the returned offset is two past the first pointer encountered, no
/// matter how much of the name lives at the jump target.
///
/// Each pointer target must lie strictly before the start of the label
/// run it was found in. Targets therefore decrease monotonically, which
/// rules out self references, forward references, and pointer cycles
/// without tracking visited offsets.
pub fn parse_name(bytes: &[u8], start: usize) -> Result<(String, usize), WireError> {
    let mut labels: Vec<&str> = Vec::new();
    let mut offset = start;
    // Start of the label run currently being read; every jump must land
    // strictly before it.
    let mut run_start = start;
    // Cursor position to report once a pointer has been followed.
    let mut after_pointer: Option<usize> = None;
    let mut encoded_len = 1; // terminator

    loop {
        let length = match bytes.get(offset) {
            Some(&octet) => octet,
            None => {
                return Err(WireError::UnexpectedEof {
                    expected: 1,
                    offset,
                })
            }
        };

        match length & POINTER_MASK {
            0xC0 => {
                let low = match bytes.get(offset + 1) {
                    Some(&octet) => octet,
                    None => return Err(WireError::TruncatedPointer { offset }),
                };
                let target =
                    u16::from_be_bytes([length & !POINTER_MASK, low]) as usize;

                if target >= run_start {
                    return Err(WireError::PointerOutOfRange {
                        target,
                        limit: run_start,
                    });
                }

                // Only the first pointer decides where the cursor lands.
                if after_pointer.is_none() {
                    after_pointer = Some(offset + 2);
                }

                offset = target;
                run_start = target;
            }
            0x00 => {
                offset += 1;

                if length == 0 {
                    break;
                }

                let length = length as usize;
                encoded_len += 1 + length;
                if encoded_len > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong(encoded_len));
                }

                let label = bytes.get(offset..offset + length).ok_or(
                    WireError::UnexpectedEof {
                        expected: length,
                        offset,
                    },
                )?;
                labels.push(
                    std::str::from_utf8(label).map_err(|_| WireError::InvalidLabel)?,
                );
                offset += length;
            }
            // 01 and 10 are reserved combinations
            _ => return Err(WireError::ReservedLabelType(length)),
        }
    }

    let end = after_pointer.unwrap_or(offset);
    let name = if labels.is_empty() {
        ".".to_string() // Root domain
    } else {
        labels.join(".")
    };

    Ok((name, end))
}
