use crate::errors::Result;
use crate::io::ByteCursor;
use crate::name;
use crate::types::{Class, Type};
use std::net::Ipv4Addr;

/// Resource Record (RR)
///
/// The answer, authority, and additional sections all share this format.
/// Records are only ever decoded. See [rfc1035#section-4.1.3].
///
/// [rfc1035#section-4.1.3]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.3
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    /// The domain name this record pertains to.
    pub name: String,

    pub rtype: Type,
    pub rclass: Class,

    /// The number of seconds that the resource record may be cached
    /// before the source of the information should again be consulted.
    /// Zero is interpreted to mean that the RR can only be used for the
    /// transaction in progress.
    pub ttl: u32,

    /// The raw RDATA. Its format depends on the type and class.
    pub data: Vec<u8>,
}

impl Record {
    pub fn read<T: AsRef<[u8]>>(cur: &mut ByteCursor<T>) -> Result<Record> {
        let name = name::read_name(cur)?;
        let rtype = Type::from(cur.read_integer::<u16>()?);
        let rclass = Class::from(cur.read_integer::<u16>()?);
        let ttl = cur.read_integer::<u32>()?;

        let len = cur.read_integer::<u16>()?;
        let data = cur.read_bytes(len.into())?.to_vec();

        Ok(Record {
            name,
            rtype,
            rclass,
            ttl,
            data,
        })
    }

    /// Returns the address held by an A record, or None for any other type,
    /// or if the data is too short to hold one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != Type::A {
            return None;
        }

        match self.data.get(0..4)? {
            &[a, b, c, d] => Some(Ipv4Addr::new(a, b, c, d)),
            _ => None,
        }
    }
}
