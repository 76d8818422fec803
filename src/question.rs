use bytes::{BufMut, BytesMut};

use crate::error::WireError;
use crate::name::{encode_name, parse_name};

/// Resource record TYPE values, RFC 1035 §3.2.2 and §3.2.3.
///
/// QTYPEs are a superset of TYPEs; the values from AXFR up are only
/// valid in questions. On the wire a TYPE is just a u16, and unknown
/// values are carried as raw integers rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A = 1,       // IPv4 host address
    Ns = 2,      // Authoritative name server
    Md = 3,      // Mail destination (obsolete)
    Mf = 4,      // Mail forwarder (obsolete)
    Cname = 5,   // Canonical name
    Soa = 6,     // Start of authority
    Mb = 7,      // Mailbox domain name
    Mg = 8,      // Mail group member
    Mr = 9,      // Mail rename domain name
    Null = 10,   // Null RR
    Wks = 11,    // Well known service description
    Ptr = 12,    // Domain name pointer
    Hinfo = 13,  // Host information
    Minfo = 14,  // Mailbox or mail list information
    Mx = 15,     // Mail exchange
    Txt = 16,    // Text strings
    Axfr = 252,  // Zone transfer request (QTYPE only)
    Mailb = 253, // Mailbox-related records (QTYPE only)
    Maila = 254, // Mail agent records (QTYPE only)
    Any = 255,   // All records (QTYPE only)
}

impl RecordType {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::Ns),
            3 => Some(RecordType::Md),
            4 => Some(RecordType::Mf),
            5 => Some(RecordType::Cname),
            6 => Some(RecordType::Soa),
            7 => Some(RecordType::Mb),
            8 => Some(RecordType::Mg),
            9 => Some(RecordType::Mr),
            10 => Some(RecordType::Null),
            11 => Some(RecordType::Wks),
            12 => Some(RecordType::Ptr),
            13 => Some(RecordType::Hinfo),
            14 => Some(RecordType::Minfo),
            15 => Some(RecordType::Mx),
            16 => Some(RecordType::Txt),
            252 => Some(RecordType::Axfr),
            253 => Some(RecordType::Mailb),
            254 => Some(RecordType::Maila),
            255 => Some(RecordType::Any),
            _ => None,
        }
    }

    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

/// CLASS values, RFC 1035 §3.2.4 and §3.2.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    In = 1,    // Internet
    Cs = 2,    // CSNET (obsolete)
    Ch = 3,    // CHAOS
    Hs = 4,    // Hesiod
    Any = 255, // Any class (QCLASS only)
}

impl RecordClass {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordClass::In),
            2 => Some(RecordClass::Cs),
            3 => Some(RecordClass::Ch),
            4 => Some(RecordClass::Hs),
            255 => Some(RecordClass::Any),
            _ => None,
        }
    }

    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

/// One entry of the question section: QNAME + QTYPE + QCLASS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String, // Domain name (e.g., "example.com")
    pub qtype: u16,   // Query type (A, CNAME, etc.)
    pub qclass: u16,  // Query class (usually IN for Internet)
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: RecordType, qclass: RecordClass) -> Self {
        Question {
            name: name.into(),
            qtype: qtype.to_u16(),
            qclass: qclass.to_u16(),
        }
    }

    /// Parse a question starting at `offset`, returning it along with
    /// the offset of the next section entry.
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, offset) = parse_name(bytes, offset)?;

        if offset + 4 > bytes.len() {
            return Err(WireError::UnexpectedEof {
                expected: 4,
                offset,
            });
        }

        let qtype = u16::from_be_bytes([bytes[offset], bytes[offset + 1]]);
        let qclass = u16::from_be_bytes([bytes[offset + 2], bytes[offset + 3]]);

        Ok((
            Question {
                name,
                qtype,
                qclass,
            },
            offset + 4,
        ))
    }

    /// Append the wire form of the question to `out`.
    pub fn to_bytes(&self, out: &mut BytesMut) -> Result<(), WireError> {
        encode_name(&self.name, out)?;
        out.put_u16(self.qtype);
        out.put_u16(self.qclass);
        Ok(())
    }
}
