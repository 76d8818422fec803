use bytes::{Bytes, BytesMut};

use crate::error::WireError;
use crate::header::{Flags, Header, Opcode, Rcode, HEADER_LEN};
use crate::question::Question;
use crate::record::ResourceRecord;

/// A complete DNS message: header plus the question, answer, authority,
/// and additional sections, RFC 1035 §4.1.
///
/// A message is self-contained; the codec keeps no state between calls
/// and two decodes of the same buffer are fully independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Message {
    /// Create a standard query with the given ID and questions, RD set.
    pub fn new_query(id: u16, questions: Vec<Question>) -> Self {
        Message {
            header: Header {
                id,
                flags: Flags {
                    qr: false,
                    opcode: Opcode::StandardQuery,
                    aa: false,
                    tc: false,
                    rd: true,
                    ra: false,
                    rcode: Rcode::NoError,
                },
                qdcount: questions.len() as u16,
                ancount: 0,
                nscount: 0,
                arcount: 0,
            },
            questions,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Decode one message from a buffer.
    ///
    /// The header counts drive the section loops: QDCOUNT questions,
    /// then ANCOUNT, NSCOUNT, and ARCOUNT records, all sharing one
    /// cursor. A count that runs the cursor past the buffer end fails
    /// the whole decode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        let header = Header::from_bytes(bytes)?;
        let mut offset = HEADER_LEN;

        // Counts come off the wire, so sizes are not trusted for
        // preallocation.
        let mut questions = Vec::new();
        for _ in 0..header.qdcount {
            let (question, next) = Question::from_bytes(bytes, offset)?;
            questions.push(question);
            offset = next;
        }

        let mut sections = [Vec::new(), Vec::new(), Vec::new()];
        for (section, count) in sections
            .iter_mut()
            .zip([header.ancount, header.nscount, header.arcount])
        {
            for _ in 0..count {
                let (record, next) = ResourceRecord::from_bytes(bytes, offset)?;
                section.push(record);
                offset = next;
            }
        }
        let [answers, authority, additional] = sections;

        Ok(Message {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Encode the message for transmission.
    ///
    /// The four header counts are computed from the section lengths,
    /// never taken from `self.header`, so the counts on the wire always
    /// match the records actually written.
    pub fn to_bytes(&self) -> Result<Bytes, WireError> {
        let mut out = BytesMut::with_capacity(512);

        let header = Header {
            qdcount: self.questions.len() as u16,
            ancount: self.answers.len() as u16,
            nscount: self.authority.len() as u16,
            arcount: self.additional.len() as u16,
            ..self.header
        };
        out.extend_from_slice(&header.to_bytes());

        for question in &self.questions {
            question.to_bytes(&mut out)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            record.to_bytes(&mut out)?;
        }

        Ok(out.freeze())
    }
}
