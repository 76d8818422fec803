use std::net::Ipv4Addr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::WireError;
use crate::name::{encode_name, parse_name};
use crate::question::{RecordClass, RecordType};

/// Type-specific RDATA payload.
///
/// Only the types whose interior the codec understands get their own
/// variant; every other TYPE is carried as `Opaque` bytes of exactly
/// RDLENGTH octets. Unknown types are representable, never rejected,
/// since RDLENGTH makes the wire format self-describing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Ns(String),
    Cname(String),
    Ptr(String),
    Opaque(Bytes),
}

impl RData {
    /// Append the wire form of the payload to `out`.
    fn to_bytes(&self, out: &mut BytesMut) -> Result<(), WireError> {
        match self {
            RData::A(addr) => out.put_slice(&addr.octets()),
            RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => {
                // Compression is never attempted, even inside RDATA.
                encode_name(name, out)?
            }
            RData::Opaque(data) => out.put_slice(data),
        }
        Ok(())
    }
}

/// A resource record, RFC 1035 §4.1.3: the atomic unit of the answer,
/// authority, and additional sections.
///
/// RDLENGTH is not stored; it is recomputed from the serialized RDATA
/// on every encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String, // Owner domain name
    pub rtype: u16,   // Record type (A, CNAME, etc.)
    pub rclass: u16,  // Record class (usually IN for Internet)
    pub ttl: i32,     // Time to live in seconds; 0 means do not cache
    pub rdata: RData, // Payload, interpreted per rtype
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, rtype: u16, rclass: u16, ttl: i32, rdata: RData) -> Self {
        ResourceRecord {
            name: name.into(),
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Create an A record (IPv4 address) in class IN.
    pub fn new_a(name: impl Into<String>, ttl: i32, addr: Ipv4Addr) -> Self {
        Self::new(
            name,
            RecordType::A.to_u16(),
            RecordClass::In.to_u16(),
            ttl,
            RData::A(addr),
        )
    }

    /// Create an NS record in class IN.
    pub fn new_ns(name: impl Into<String>, ttl: i32, nsdname: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordType::Ns.to_u16(),
            RecordClass::In.to_u16(),
            ttl,
            RData::Ns(nsdname.into()),
        )
    }

    /// Create a CNAME record in class IN.
    pub fn new_cname(name: impl Into<String>, ttl: i32, target: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordType::Cname.to_u16(),
            RecordClass::In.to_u16(),
            ttl,
            RData::Cname(target.into()),
        )
    }

    /// Create a PTR record in class IN.
    pub fn new_ptr(name: impl Into<String>, ttl: i32, ptrdname: impl Into<String>) -> Self {
        Self::new(
            name,
            RecordType::Ptr.to_u16(),
            RecordClass::In.to_u16(),
            ttl,
            RData::Ptr(ptrdname.into()),
        )
    }

    /// Create a record of any type with caller-supplied RDATA bytes.
    pub fn new_opaque(name: impl Into<String>, rtype: u16, ttl: i32, data: Bytes) -> Self {
        Self::new(
            name,
            rtype,
            RecordClass::In.to_u16(),
            ttl,
            RData::Opaque(data),
        )
    }

    /// Parse a resource record starting at `offset`, returning it along
    /// with the offset of the next section entry.
    ///
    /// The cursor always advances by exactly RDLENGTH past the fixed
    /// fields. Name-bearing RDATA may contain compression pointers that
    /// resolve against the whole message buffer, but where their
    /// targets land never changes how many octets the record occupies.
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, offset) = parse_name(bytes, offset)?;

        if offset + 10 > bytes.len() {
            return Err(WireError::UnexpectedEof {
                expected: 10,
                offset,
            });
        }

        let rtype = u16::from_be_bytes([bytes[offset], bytes[offset + 1]]);
        let rclass = u16::from_be_bytes([bytes[offset + 2], bytes[offset + 3]]);
        let ttl = i32::from_be_bytes([
            bytes[offset + 4],
            bytes[offset + 5],
            bytes[offset + 6],
            bytes[offset + 7],
        ]);
        let rdlength = u16::from_be_bytes([bytes[offset + 8], bytes[offset + 9]]) as usize;

        let rdata_start = offset + 10;
        if rdata_start + rdlength > bytes.len() {
            return Err(WireError::UnexpectedEof {
                expected: rdlength,
                offset: rdata_start,
            });
        }

        let rdata = match RecordType::from_u16(rtype) {
            Some(RecordType::A) => {
                if rdlength != 4 {
                    return Err(WireError::RdataLengthMismatch {
                        rtype,
                        expected: 4,
                        found: rdlength,
                    });
                }
                RData::A(Ipv4Addr::new(
                    bytes[rdata_start],
                    bytes[rdata_start + 1],
                    bytes[rdata_start + 2],
                    bytes[rdata_start + 3],
                ))
            }
            Some(RecordType::Ns) => RData::Ns(parse_name(bytes, rdata_start)?.0),
            Some(RecordType::Cname) => RData::Cname(parse_name(bytes, rdata_start)?.0),
            Some(RecordType::Ptr) => RData::Ptr(parse_name(bytes, rdata_start)?.0),
            _ => RData::Opaque(Bytes::copy_from_slice(
                &bytes[rdata_start..rdata_start + rdlength],
            )),
        };

        Ok((
            ResourceRecord {
                name,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            rdata_start + rdlength,
        ))
    }

    /// Append the wire form of the record to `out`, computing RDLENGTH
    /// from the serialized RDATA.
    pub fn to_bytes(&self, out: &mut BytesMut) -> Result<(), WireError> {
        // Serialize RDATA first so a bad name fails before the owner
        // name or fixed fields hit the output.
        let mut rdata = BytesMut::new();
        self.rdata.to_bytes(&mut rdata)?;
        let rdlength =
            u16::try_from(rdata.len()).map_err(|_| WireError::RdataTooLong(rdata.len()))?;

        encode_name(&self.name, out)?;
        out.put_u16(self.rtype);
        out.put_u16(self.rclass);
        out.put_i32(self.ttl);
        out.put_u16(rdlength);
        out.put_slice(&rdata);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(record: &ResourceRecord) -> Vec<u8> {
        let mut out = BytesMut::new();
        record.to_bytes(&mut out).unwrap();
        out.to_vec()
    }

    #[test]
    fn test_a_record_decodes_to_address() {
        let record = ResourceRecord::new_a("example.com", 60, Ipv4Addr::new(127, 0, 0, 1));
        let bytes = encode(&record);

        // RDLENGTH=4, RDATA=7F 00 00 01 at the tail
        assert_eq!(&bytes[bytes.len() - 6..], &[0, 4, 0x7F, 0, 0, 1]);

        let (parsed, offset) = ResourceRecord::from_bytes(&bytes, 0).unwrap();
        assert_eq!(parsed.rdata, RData::A(Ipv4Addr::new(127, 0, 0, 1)));
        assert_eq!(parsed, record);
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn test_a_record_bad_rdlength() {
        // A record whose RDLENGTH claims 3 octets.
        let mut bytes = vec![1, b'a', 0];
        bytes.extend_from_slice(&[0, 1, 0, 1]); // TYPE=A, CLASS=IN
        bytes.extend_from_slice(&[0, 0, 0, 60]); // TTL
        bytes.extend_from_slice(&[0, 3, 127, 0, 0]); // RDLENGTH=3

        assert_eq!(
            ResourceRecord::from_bytes(&bytes, 0).unwrap_err(),
            WireError::RdataLengthMismatch {
                rtype: 1,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_rdlength_overruns_buffer() {
        let mut bytes = vec![1, b'a', 0];
        bytes.extend_from_slice(&[0, 16, 0, 1]); // TYPE=TXT
        bytes.extend_from_slice(&[0, 0, 0, 60]);
        bytes.extend_from_slice(&[0, 10, b'h', b'i']); // RDLENGTH=10, 2 present

        assert_eq!(
            ResourceRecord::from_bytes(&bytes, 0).unwrap_err(),
            WireError::UnexpectedEof {
                expected: 10,
                offset: 13
            }
        );
    }

    #[test]
    fn test_cname_roundtrip() {
        let record = ResourceRecord::new_cname("www.example.com", 300, "example.com");
        let bytes = encode(&record);
        let (parsed, offset) = ResourceRecord::from_bytes(&bytes, 0).unwrap();

        assert_eq!(parsed, record);
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn test_rdata_pointer_resolves_against_whole_buffer() {
        // "example.com" sits at offset 4; a CNAME record at offset 20
        // carries RDATA that is just a pointer back to it. The record
        // still occupies exactly RDLENGTH=2 octets of RDATA.
        let mut buf = vec![0u8; 20];
        buf[4..17].copy_from_slice(b"\x07example\x03com\x00");

        let record_start = buf.len();
        buf.extend_from_slice(&[1, b'w', 0]); // owner "w"
        buf.extend_from_slice(&[0, 5, 0, 1]); // TYPE=CNAME, CLASS=IN
        buf.extend_from_slice(&[0, 0, 1, 44]); // TTL=300
        buf.extend_from_slice(&[0, 2, 0xC0, 4]); // RDLENGTH=2, pointer to 4
        let trailing = buf.len();
        buf.extend_from_slice(&[0xEE, 0xEE]); // unrelated trailing bytes

        let (parsed, offset) = ResourceRecord::from_bytes(&buf, record_start).unwrap();
        assert_eq!(parsed.rdata, RData::Cname("example.com".to_string()));
        assert_eq!(offset, trailing);
    }

    #[test]
    fn test_unknown_type_kept_opaque() {
        // TYPE=28 (AAAA) is outside RFC 1035; its 16 octets pass through.
        let payload = Bytes::from_static(&[0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 1]);
        let record = ResourceRecord::new_opaque("v6.example.com", 28, 60, payload.clone());
        let bytes = encode(&record);
        let (parsed, _) = ResourceRecord::from_bytes(&bytes, 0).unwrap();

        assert_eq!(parsed.rtype, 28);
        assert_eq!(parsed.rdata, RData::Opaque(payload));
    }

    #[test]
    fn test_zero_ttl_roundtrip() {
        let record = ResourceRecord::new_a("a", 0, Ipv4Addr::new(10, 0, 0, 1));
        let (parsed, _) = ResourceRecord::from_bytes(&encode(&record), 0).unwrap();
        assert_eq!(parsed.ttl, 0);
    }

    #[test]
    fn test_truncated_fixed_fields() {
        // Name parses but only 6 of the 10 fixed octets remain.
        let bytes = [1, b'a', 0, 0, 1, 0, 1, 0, 0];
        assert_eq!(
            ResourceRecord::from_bytes(&bytes, 0).unwrap_err(),
            WireError::UnexpectedEof {
                expected: 10,
                offset: 3
            }
        );
    }
}
