use crate::errors::Result;
use crate::io::ByteCursor;
use crate::name;
use crate::types::{Class, Type};

/// DNS Question.
///
/// Carries the parameters that define what is being asked. See [rfc1035#section-4.1.2].
///
/// [rfc1035#section-4.1.2]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.2
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Question {
    /// A dot separated domain name, for example `example.com`.
    pub name: String,
    pub qtype: Type,
    pub qclass: Class,
}

impl Question {
    pub fn new(name: &str, qtype: Type, qclass: Class) -> Question {
        Question {
            name: name.to_string(),
            qtype,
            qclass,
        }
    }

    /// Number of bytes this question takes on the wire. Fails if the name
    /// can't be encoded.
    pub fn wire_len(&self) -> Result<usize> {
        Ok(name::encoded_len(&self.name)? + 4)
    }

    pub fn read<T: AsRef<[u8]>>(cur: &mut ByteCursor<T>) -> Result<Question> {
        let name = name::read_name(cur)?;
        let qtype = Type::from(cur.read_integer::<u16>()?);
        let qclass = Class::from(cur.read_integer::<u16>()?);

        Ok(Question {
            name,
            qtype,
            qclass,
        })
    }

    pub fn write<T>(&self, cur: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        name::write_name(cur, &self.name)?;
        cur.write_u16(self.qtype.into())?;
        cur.write_u16(self.qclass.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write() {
        let q = Question::new("bramp.net", Type::MX, Class::Internet);
        assert_eq!(q.wire_len().unwrap(), 15);

        let mut cur = ByteCursor::new(vec![0; q.wire_len().unwrap()]);
        q.write(&mut cur).unwrap();
        assert!(cur.is_empty());

        assert_eq!(
            cur.into_inner(),
            b"\x05bramp\x03net\x00\x00\x0F\x00\x01".to_vec()
        );
    }

    #[test]
    fn test_read() {
        let buf = b"\x06google\x02ru\x00\x00\x01\x00\x01\xFF";
        let mut cur = ByteCursor::new(&buf[..]);

        let q = Question::read(&mut cur).unwrap();
        assert_eq!(q, Question::new("google.ru", Type::A, Class::Internet));
        assert_eq!(cur.remaining(), 1);
    }

    #[test]
    fn test_read_unknown_codes() {
        let buf = b"\x00\x00\x1C\x00\xFE";
        let q = Question::read(&mut ByteCursor::new(&buf[..])).unwrap();

        assert_eq!(q.name, "");
        assert_eq!(q.qtype, Type::Unknown(28));
        assert_eq!(q.qclass, Class::Unknown(254));
    }

    #[test]
    fn test_read_truncated() {
        let buf = b"\x06google\x02ru\x00\x00\x01\x00";
        assert!(matches!(
            Question::read(&mut ByteCursor::new(&buf[..])),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_invalid_name() {
        let q = Question::new(&"a".repeat(64), Type::A, Class::Internet);
        assert!(matches!(q.wire_len(), Err(Error::LabelTooLong(_))));
    }
}
