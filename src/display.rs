//! Implements the Display trait for the various types, so they output
//! in `dig` style.
// Refer to https://github.com/tigeli/bind-utils/blob/master/bin/dig/dig.c for reference.

use crate::Header;
use crate::Query;
use crate::Question;
use crate::Record;
use crate::Response;
use std::fmt;

/// Displays this response in a format resembling `dig` output.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_header(
            f,
            &self.header,
            [
                self.questions.len(),
                self.answers.len(),
                self.authorities.len(),
                self.additional.len(),
            ],
        )?;

        // Always display the question section, but optionally
        // display the other sections.
        fmt_questions(f, &self.questions)?;

        for (title, records) in &[
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authorities),
            ("ADDITIONAL", &self.additional),
        ] {
            if records.is_empty() {
                continue;
            }

            writeln!(f, ";; {} SECTION:", title)?;
            for record in records.iter() {
                write!(f, "{}", record)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_header(f, &self.header, [self.questions().len(), 0, 0, 0])?;
        fmt_questions(f, self.questions())
    }
}

fn fmt_header(f: &mut fmt::Formatter, header: &Header, counts: [usize; 4]) -> fmt::Result {
    let flags = header.flags;

    writeln!(
        f,
        ";; ->>HEADER<<- opcode: {opcode}, status: {rcode}, id: {id}",
        opcode = flags.opcode(),
        rcode = flags.rcode(),
        id = header.id,
    )?;

    let mut names = String::new();

    if flags.is_response() {
        names.push_str(" qr")
    }
    if flags.is_authoritative_answer() {
        names.push_str(" aa")
    }
    if flags.is_truncated() {
        names.push_str(" tc")
    }
    if flags.recursion_desired() {
        names.push_str(" rd")
    }
    if flags.recursion_available() {
        names.push_str(" ra")
    }

    writeln!(f, ";; flags:{flags}; QUERY: {qd_count}, ANSWER: {an_count}, AUTHORITY: {ns_count}, ADDITIONAL: {ar_count}",
        flags = names,
        qd_count = counts[0],
        an_count = counts[1],
        ns_count = counts[2],
        ar_count = counts[3],
    )?;

    writeln!(f)
}

fn fmt_questions(f: &mut fmt::Formatter, questions: &[Question]) -> fmt::Result {
    writeln!(f, ";; QUESTION SECTION:")?;
    for question in questions {
        write!(f, "{}", question)?;
    }
    writeln!(f)
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";{name:<20}      {class:4} {type}",
            name = self.name,
            class = self.qclass,
            r#type = self.qtype,
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{name:<20} {ttl:>4} {class:4} {type:6} ",
            name = self.name,
            ttl = self.ttl,
            class = self.rclass,
            r#type = self.rtype,
        )?;

        // Only A records are understood, everything else is shown in the
        // generic form from rfc3597.
        match self.ipv4() {
            Some(ip) => writeln!(f, "{}", ip),
            None => {
                write!(f, "\\# {}", self.data.len())?;
                if !self.data.is_empty() {
                    write!(f, " ")?;
                    for b in &self.data {
                        write!(f, "{:02X}", b)?;
                    }
                }
                writeln!(f)
            }
        }
    }
}
