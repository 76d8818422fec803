//! Wire-format codec for DNS messages, RFC 1035 §4.
//!
//! The crate converts between [`Message`] and the exact byte sequence
//! carried in a UDP datagram: the packed 12-octet header, the question
//! section, and the three resource-record sections, including the
//! domain-name label-compression scheme on decode.
//!
//! Decoding is defensive against hostile input: every read is bounds
//! checked, compression pointers may only point backwards, and every
//! structural violation comes back as a typed [`WireError`] instead of
//! a panic. Encoding validates names before writing anything, so a
//! failed encode produces no bytes.
//!
//! Transport is someone else's problem. The codec opens no sockets and
//! keeps no state between calls:
//!
//! ```
//! use dns_wire::{Message, Question, RecordClass, RecordType};
//!
//! let query = Message::new_query(
//!     0x1234,
//!     vec![Question::new("example.com", RecordType::A, RecordClass::In)],
//! );
//! let wire = query.to_bytes()?;
//! // hand `wire` to a UdpSocket, receive a reply into `wire`...
//! let reply = Message::from_bytes(&wire)?;
//! assert_eq!(reply.questions[0].name, "example.com");
//! # Ok::<(), dns_wire::WireError>(())
//! ```

mod error;
mod header;
mod message;
pub mod name;
mod question;
mod record;

pub use error::WireError;
pub use header::{Flags, Header, Opcode, Rcode, HEADER_LEN};
pub use message::Message;
pub use question::{Question, RecordClass, RecordType};
pub use record::{RData, ResourceRecord};
