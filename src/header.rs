use crate::error::WireError;

/// Number of octets in the fixed DNS header.
pub const HEADER_LEN: usize = 12;

/// Operation code, RFC 1035 §4.1.1 plus the RFC 2136 UPDATE extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    StandardQuery,
    InverseQuery,
    Status,
    Update,
    /// Any of the values 3-4 and 6-15 reserved for future use.
    Reserved(u8),
}

impl Opcode {
    pub fn from_u4(value: u8) -> Self {
        match value & 0xF {
            0 => Opcode::StandardQuery,
            1 => Opcode::InverseQuery,
            2 => Opcode::Status,
            5 => Opcode::Update,
            other => Opcode::Reserved(other),
        }
    }

    pub fn to_u4(self) -> u8 {
        match self {
            Opcode::StandardQuery => 0,
            Opcode::InverseQuery => 1,
            Opcode::Status => 2,
            Opcode::Update => 5,
            Opcode::Reserved(value) => value & 0xF,
        }
    }
}

/// Response code, RFC 1035 §4.1.1 plus the RFC 2136 UPDATE extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rcode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    YxDomain,
    YxRrSet,
    NxRrSet,
    NotAuth,
    NotZone,
    Reserved(u8),
}

impl Rcode {
    pub fn from_u4(value: u8) -> Self {
        match value & 0xF {
            0 => Rcode::NoError,
            1 => Rcode::FormatError,
            2 => Rcode::ServerFailure,
            3 => Rcode::NameError,
            4 => Rcode::NotImplemented,
            5 => Rcode::Refused,
            6 => Rcode::YxDomain,
            7 => Rcode::YxRrSet,
            8 => Rcode::NxRrSet,
            9 => Rcode::NotAuth,
            10 => Rcode::NotZone,
            other => Rcode::Reserved(other),
        }
    }

    pub fn to_u4(self) -> u8 {
        match self {
            Rcode::NoError => 0,
            Rcode::FormatError => 1,
            Rcode::ServerFailure => 2,
            Rcode::NameError => 3,
            Rcode::NotImplemented => 4,
            Rcode::Refused => 5,
            Rcode::YxDomain => 6,
            Rcode::YxRrSet => 7,
            Rcode::NxRrSet => 8,
            Rcode::NotAuth => 9,
            Rcode::NotZone => 10,
            Rcode::Reserved(value) => value & 0xF,
        }
    }
}

/// The second 16-bit word of the header, unpacked.
///
/// Packing and unpacking go through explicit shifts and masks, never a
/// bit-field struct: in-memory bit-field layout is platform dependent
/// and not wire compatible. The Z field is not represented; it is
/// written as zero and ignored on receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub qr: bool,       // Query/Response (false = query, true = response)
    pub opcode: Opcode, // Kind of query
    pub aa: bool,       // Authoritative Answer
    pub tc: bool,       // Truncation
    pub rd: bool,       // Recursion Desired
    pub ra: bool,       // Recursion Available
    pub rcode: Rcode,   // Response code
}

impl Flags {
    pub fn to_u16(self) -> u16 {
        let mut flags: u16 = 0;

        if self.qr {
            flags |= 1 << 15; // QR at bit 15
        }
        flags |= (self.opcode.to_u4() as u16) << 11; // OPCODE at bits 11-14
        if self.aa {
            flags |= 1 << 10; // AA at bit 10
        }
        if self.tc {
            flags |= 1 << 9; // TC at bit 9
        }
        if self.rd {
            flags |= 1 << 8; // RD at bit 8
        }
        if self.ra {
            flags |= 1 << 7; // RA at bit 7
        }
        // Z at bits 4-6 stays zero
        flags |= self.rcode.to_u4() as u16; // RCODE at bits 0-3

        flags
    }

    pub fn from_u16(flags: u16) -> Self {
        Flags {
            qr: (flags & (1 << 15)) != 0,
            opcode: Opcode::from_u4(((flags >> 11) & 0xF) as u8),
            aa: (flags & (1 << 10)) != 0,
            tc: (flags & (1 << 9)) != 0,
            rd: (flags & (1 << 8)) != 0,
            ra: (flags & (1 << 7)) != 0,
            rcode: Rcode::from_u4((flags & 0xF) as u8),
        }
    }
}

/// The fixed 12-octet DNS message header, RFC 1035 §4.1.1.
///
/// The four counts describe the sections that follow. When a whole
/// [`Message`](crate::Message) is encoded they are recomputed from the
/// actual section lengths, so a hand-assembled header cannot lie about
/// them on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Parse the header from the first 12 octets of a message buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() < HEADER_LEN {
            return Err(WireError::UnexpectedEof {
                expected: HEADER_LEN,
                offset: 0,
            });
        }

        Ok(Header {
            id: u16::from_be_bytes([bytes[0], bytes[1]]),
            flags: Flags::from_u16(u16::from_be_bytes([bytes[2], bytes[3]])),
            qdcount: u16::from_be_bytes([bytes[4], bytes[5]]),
            ancount: u16::from_be_bytes([bytes[6], bytes[7]]),
            nscount: u16::from_be_bytes([bytes[8], bytes[9]]),
            arcount: u16::from_be_bytes([bytes[10], bytes[11]]),
        })
    }

    /// Serialize the header, all fields big-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];

        bytes[0..2].copy_from_slice(&self.id.to_be_bytes());
        bytes[2..4].copy_from_slice(&self.flags.to_u16().to_be_bytes());
        bytes[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        bytes[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        bytes[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        bytes[10..12].copy_from_slice(&self.arcount.to_be_bytes());

        bytes
    }
}
