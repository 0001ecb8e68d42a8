//! Encoding and decoding of domain names, as defined by [rfc1035#section-4.1.4].
//!
//! [rfc1035#section-4.1.4]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4

use crate::errors::{Error, Result};
use crate::io::ByteCursor;
use log::trace;

/// Restricts the total length of a encoded domain name to 255 octets. [RFC1035]
pub const MAX_NAME_LEN: usize = 255;

/// Restricts the length of a domain label to 63 octets. [RFC1035]
pub const MAX_LABEL_LEN: usize = 63;

const POINTER_MASK: u8 = 0b1100_0000;
const OFFSET_MASK: u16 = 0b0011_1111_1111_1111;

/// Splits `name` into its labels. A single trailing dot is allowed, and both
/// `""` and `"."` are the root (no labels).
fn labels(name: &str) -> Result<Vec<&str>> {
    if name.is_empty() || name == "." {
        return Ok(Vec::new());
    }

    name.split_terminator('.')
        .map(|label| {
            if label.is_empty() {
                return Err(Error::EmptyLabel(name.to_string()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(Error::LabelTooLong(label.to_string()));
            }
            Ok(label)
        })
        .collect()
}

/// Returns the number of bytes `name` takes on the wire (without compression),
/// checking that it can be encoded at all.
pub fn encoded_len(name: &str) -> Result<usize> {
    let len = labels(name)?
        .iter()
        .map(|label| label.len() + 1)
        .sum::<usize>()
        + 1; // The null label of the root.

    if len > MAX_NAME_LEN {
        return Err(Error::NameTooLong(len));
    }
    Ok(len)
}

/// Writes `name` as a sequence of length prefixed labels, terminated by the
/// zero length root label.
pub fn write_name<T>(cur: &mut ByteCursor<T>, name: &str) -> Result<()>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
{
    encoded_len(name)?;

    for label in labels(name)? {
        cur.write_u8(label.len() as u8)?;
        cur.write_bytes(label.as_bytes())?;
    }
    cur.write_u8(0)
}

/// Reads a domain name, following any compression pointers.
///
/// Pointers are absolute offsets from the start of the cursor's region, so the
/// cursor must span the whole message. On return the cursor is left just past
/// the name as it appeared in place, that is after the terminating zero octet,
/// or after the first 2-byte pointer if the name was compressed.
///
/// # Errors
///
/// * [`Error::OutOfBounds`] if the name, or a pointer target, runs off the end.
/// * [`Error::MalformedLabel`] if a label is not valid UTF-8, or uses one of the
///   reserved `01`/`10` label types.
/// * [`Error::CompressionCycle`] if more pointers are followed than there are
///   bytes in the message.
/// * [`Error::NameTooLong`] if the decoded name would be longer than 255 octets.
pub fn read_name<T: AsRef<[u8]>>(cur: &mut ByteCursor<T>) -> Result<String> {
    // Pointers only reach the first 16 KiB, so longer buffers can't need more hops.
    let max_hops = cur.len().min(usize::from(OFFSET_MASK) + 1);
    let mut hops = 0;

    // Where to continue once the name is done, set by the first pointer.
    let mut resume = None;

    let mut name = String::new();
    let mut wire_len = 1;

    loop {
        let offset = cur.position();
        let len = cur.read_integer::<u8>()?;

        match len & POINTER_MASK {
            0x00 if len == 0 => break,

            // No compression
            0x00 => {
                wire_len += len as usize + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(Error::NameTooLong(wire_len));
                }

                let label = cur.read_bytes(len.into())?;
                let label = std::str::from_utf8(label).map_err(|e| Error::MalformedLabel {
                    offset,
                    reason: e.to_string(),
                })?;

                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(label);
            }

            // Compression
            POINTER_MASK => {
                cur.seek(offset)?;
                let ptr = (cur.read_integer::<u16>()? & OFFSET_MASK) as usize;

                hops += 1;
                if hops > max_hops {
                    return Err(Error::CompressionCycle { hops: max_hops });
                }

                if resume.is_none() {
                    resume = Some(cur.position());
                }

                trace!("following compression pointer at {} to {}", offset, ptr);
                cur.seek(ptr)?;
            }

            // Unknown
            _ => {
                return Err(Error::MalformedLabel {
                    offset,
                    reason: format!("unsupported label type {:02b}", len >> 6),
                })
            }
        }
    }

    if let Some(pos) = resume {
        cur.seek(pos)?;
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode(name: &str) -> Result<Vec<u8>> {
        let mut cur = ByteCursor::new(vec![0; encoded_len(name)?]);
        write_name(&mut cur, name)?;
        assert!(cur.is_empty());
        Ok(cur.into_inner())
    }

    #[test]
    fn test_write_name() {
        assert_eq!(
            encode("example.com").unwrap(),
            b"\x07example\x03com\x00".to_vec()
        );
        assert_eq!(
            encode("example.com.").unwrap(),
            b"\x07example\x03com\x00".to_vec()
        );
        assert_eq!(encode("").unwrap(), vec![0]);
        assert_eq!(encode(".").unwrap(), vec![0]);
    }

    #[test]
    fn test_write_name_invalid() {
        assert!(matches!(encode("a..b"), Err(Error::EmptyLabel(_))));
        assert!(matches!(encode(".com"), Err(Error::EmptyLabel(_))));

        let label = "a".repeat(64);
        assert!(matches!(encode(&label), Err(Error::LabelTooLong(_))));
        assert_eq!(encode(&"a".repeat(63)).unwrap().len(), 65);

        // 4 * (63 + 1) + 1 = 257
        let long = vec!["b".repeat(63); 4].join(".");
        assert!(matches!(encode(&long), Err(Error::NameTooLong(257))));
    }

    #[test]
    fn test_write_name_does_not_fit() {
        let mut cur = ByteCursor::new(vec![0; 5]);
        assert!(matches!(
            write_name(&mut cur, "example.com"),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let longest = vec!["c".repeat(63), "d".repeat(63), "e".repeat(63), "f".repeat(61)].join(".");
        assert_eq!(encoded_len(&longest).unwrap(), 255);

        for name in ["a", "bramp.net", "a.b.c.d.e.f", "xn--74h.com", longest.as_str()].iter() {
            let buf = encode(name).unwrap();
            let mut cur = ByteCursor::new(&buf[..]);
            assert_eq!(read_name(&mut cur).unwrap(), *name);
            assert!(cur.is_empty());
        }
    }

    #[test]
    fn test_read_compressed() {
        #[rustfmt::skip]
        let buf = [
            0x06, b'g', b'o', b'o', b'g', b'l', b'e', 0x02, b'r', b'u', 0x00, // 0: google.ru
            0x03, b'w', b'w', b'w', 0xC0, 0x00,                               // 11: www -> 0
            0xC0, 0x0B,                                                       // 17: -> 11
            0xFF,
        ];
        let mut cur = ByteCursor::new(&buf[..]);

        assert_eq!(read_name(&mut cur).unwrap(), "google.ru");
        assert_eq!(cur.position(), 11);

        assert_eq!(read_name(&mut cur).unwrap(), "www.google.ru");
        assert_eq!(cur.position(), 17);

        // A pointer to a name that itself ends in a pointer.
        assert_eq!(read_name(&mut cur).unwrap(), "www.google.ru");
        assert_eq!(cur.position(), 19);
    }

    #[test]
    fn test_read_compression_cycle() {
        // Points at itself.
        let buf = [0xC0, 0x00];
        let mut cur = ByteCursor::new(&buf[..]);
        assert!(matches!(
            read_name(&mut cur),
            Err(Error::CompressionCycle { .. })
        ));

        // Two pointers pointing at each other, behind a label.
        let buf = [0x01, b'a', 0xC0, 0x04, 0xC0, 0x02];
        let mut cur = ByteCursor::new(&buf[..]);
        assert!(matches!(
            read_name(&mut cur),
            Err(Error::CompressionCycle { .. })
        ));
    }

    #[test]
    fn test_read_compression_cycle_large_buffer() {
        let mut buf = vec![0; 100_000];
        buf[0] = 0xC0;
        buf[1] = 0x00;

        let mut cur = ByteCursor::new(&buf[..]);
        assert!(matches!(
            read_name(&mut cur),
            Err(Error::CompressionCycle { hops: 16384 })
        ));

        // Small buffers are still bounded by their length.
        let mut cur = ByteCursor::new(&buf[..2]);
        assert!(matches!(
            read_name(&mut cur),
            Err(Error::CompressionCycle { hops: 2 })
        ));
    }

    #[test]
    fn test_read_invalid() {
        // Pointer past the end of the message.
        let buf = [0xC0, 0x10];
        assert!(matches!(
            read_name(&mut ByteCursor::new(&buf[..])),
            Err(Error::OutOfBounds { .. })
        ));

        // Label longer than the remaining bytes.
        let buf = [0x05, b'a', b'b'];
        assert!(matches!(
            read_name(&mut ByteCursor::new(&buf[..])),
            Err(Error::OutOfBounds { .. })
        ));

        // Missing terminator.
        let buf = [0x01, b'a'];
        assert!(matches!(
            read_name(&mut ByteCursor::new(&buf[..])),
            Err(Error::OutOfBounds { .. })
        ));

        // Not UTF-8.
        let buf = [0x02, 0xC3, 0x28, 0x00];
        assert!(matches!(
            read_name(&mut ByteCursor::new(&buf[..])),
            Err(Error::MalformedLabel { offset: 0, .. })
        ));

        // Reserved label type.
        let buf = [0x41, 0x00];
        assert!(matches!(
            read_name(&mut ByteCursor::new(&buf[..])),
            Err(Error::MalformedLabel { .. })
        ));
    }

    #[test]
    fn test_read_too_long() {
        // A pointer back to the start repeats the two labels until the name
        // no longer fits in 255 octets.
        let mut buf = vec![63];
        buf.extend(vec![b'x'; 63]);
        buf.extend(&[63]);
        buf.extend(vec![b'y'; 63]);
        buf.extend(&[0xC0, 0x00]);

        assert!(matches!(
            read_name(&mut ByteCursor::new(&buf[..])),
            Err(Error::NameTooLong(_))
        ));
    }
}
