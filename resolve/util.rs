use encoding8::ascii;
use std::fmt::Write;

// Formats the slice in a pretty way, sixteen bytes a row.
pub fn hexdump(slice: &[u8]) -> String {
    const WIDTH: usize = 16;
    let mut out = String::new();

    for (i, row) in slice.chunks(WIDTH).enumerate() {
        let row_hex: String = row.iter().map(|x| format!("{0:02X} ", x)).collect();

        // For each byte on this row, only print out the ascii printable ones.
        let row_str: String = row
            .iter()
            .map(|x| {
                if ascii::is_printable(*x) {
                    *x as char
                } else {
                    '.'
                }
            })
            .collect();

        // Writing to a String can't fail.
        let _ = writeln!(out, "{0:>08x}: {1:<48} {2:}", i * WIDTH, row_hex, row_str);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hexdump() {
        let got = hexdump(b"\x00\x0F\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x07example");
        let want = concat!(
            "00000000: 00 0F 01 00 00 01 00 00 00 00 00 00 07 65 78 61  .............exa\n",
            "00000010: 6D 70 6C 65                                      mple\n",
        );
        assert_eq!(got, want);
    }

    #[test]
    fn test_hexdump_empty() {
        assert_eq!(hexdump(&[]), "");
    }
}
