use crate::errors::Result;
use crate::io::ByteCursor;
use crate::types::{Opcode, Rcode};
use rand::Rng;

/// The second 16 bit word of the header, holding the QR, Opcode, AA, TC, RD,
/// RA, Z and RCODE fields.
///
/// ```text
///   15  14 13 12 11  10   9   8   7   6  5  4   3  2  1  0
/// +----+-----------+----+----+----+----+--------+-----------+
/// | QR |  Opcode   | AA | TC | RD | RA |   Z    |   RCODE   |
/// +----+-----------+----+----+----+----+--------+-----------+
/// ```
///
/// Only RD can be changed in place. A `Flags` with other bits set is built
/// whole from its wire form with [`Flags::from_bits`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u16);

impl Flags {
    const QR: u16 = 0b1000_0000_0000_0000;
    const OPCODE: u16 = 0b0111_1000_0000_0000;
    const AA: u16 = 0b0000_0100_0000_0000;
    const TC: u16 = 0b0000_0010_0000_0000;
    const RD: u16 = 0b0000_0001_0000_0000;
    const RA: u16 = 0b0000_0000_1000_0000;
    const Z: u16 = 0b0000_0000_0111_0000;
    const RCODE: u16 = 0b0000_0000_0000_1111;

    pub const fn from_bits(bits: u16) -> Flags {
        Flags(bits)
    }

    /// The raw wire form.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// QR. Specifies whether this message is a query (false), or a response (true).
    pub fn is_response(self) -> bool {
        self.0 & Self::QR != 0
    }

    pub fn opcode(self) -> Opcode {
        Opcode::from(((self.0 & Self::OPCODE) >> 11) as u8)
    }

    /// AA. Authoritative Answer - this bit is valid in responses, and
    /// specifies that the responding name server is an authority for the
    /// domain name in question section.
    pub fn is_authoritative_answer(self) -> bool {
        self.0 & Self::AA != 0
    }

    /// TC. Specifies that this message was truncated due to length greater
    /// than that permitted on the transmission channel.
    pub fn is_truncated(self) -> bool {
        self.0 & Self::TC != 0
    }

    /// RD. Recursion Desired - this bit directs the name server to pursue the
    /// query recursively. It is copied into the response.
    pub fn recursion_desired(self) -> bool {
        self.0 & Self::RD != 0
    }

    pub fn set_recursion_desired(&mut self, rd: bool) {
        if rd {
            self.0 |= Self::RD;
        } else {
            self.0 &= !Self::RD;
        }
    }

    /// RA. Recursion Available - set or cleared in a response, and denotes
    /// whether recursive query support is available in the name server.
    pub fn recursion_available(self) -> bool {
        self.0 & Self::RA != 0
    }

    /// Z. Reserved for future use, and meant to be zero. It is not checked.
    pub fn z(self) -> u8 {
        ((self.0 & Self::Z) >> 4) as u8
    }

    pub fn rcode(self) -> Rcode {
        Rcode::from((self.0 & Self::RCODE) as u8)
    }
}

/// The fixed 12 byte header found at the start of every message.
/// See [rfc1035#section-4.1.1].
///
/// [rfc1035#section-4.1.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Header {
    /// 16-bit identifier assigned by the program that generates any kind of
    /// query. This identifier is copied into the corresponding reply and can be
    /// used by the requester to match up replies to outstanding queries.
    pub id: u16,

    pub flags: Flags,

    /// QDCOUNT, number of entries in the question section.
    pub question_count: u16,

    /// ANCOUNT, number of resource records in the answer section.
    pub answer_count: u16,

    /// NSCOUNT, number of name server resource records in the authority section.
    pub authority_count: u16,

    /// ARCOUNT, number of resource records in the additional section.
    pub additional_count: u16,
}

impl Header {
    /// Number of bytes a header takes on the wire.
    pub const LEN: usize = 12;

    /// A new query header, with all flags and counts zero.
    pub fn new(id: u16) -> Header {
        Header {
            id,
            ..Default::default()
        }
    }

    /// A new query header with an id drawn from `rng`.
    pub fn random<R: Rng>(rng: &mut R) -> Header {
        Header::new(rng.gen())
    }

    pub fn read<T: AsRef<[u8]>>(cur: &mut ByteCursor<T>) -> Result<Header> {
        Ok(Header {
            id: cur.read_integer()?,
            flags: Flags::from_bits(cur.read_integer()?),
            question_count: cur.read_integer()?,
            answer_count: cur.read_integer()?,
            authority_count: cur.read_integer()?,
            additional_count: cur.read_integer()?,
        })
    }

    pub fn write<T>(&self, cur: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        cur.write_u16(self.id)?;
        cur.write_u16(self.flags.bits())?;
        cur.write_u16(self.question_count)?;
        cur.write_u16(self.answer_count)?;
        cur.write_u16(self.authority_count)?;
        cur.write_u16(self.additional_count)
    }
}
