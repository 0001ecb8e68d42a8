use crate::errors::{Error, Result};
use crate::header::Header;
use crate::io::ByteCursor;
use crate::question::Question;
use crate::record::Record;
use crate::types::{Class, Type};
use log::debug;
use rand::Rng;
use std::convert::TryFrom;

/// A DNS query, ready to be encoded and sent.
///
/// # Examples
///
/// ```rust
/// use netdns::{Query, Type};
///
/// let query = Query::question(&mut rand::thread_rng(), "example.com", Type::A);
///
/// // Encode the query as a Vec<u8>.
/// let req = query.to_vec().expect("failed to encode DNS request");
/// assert_eq!(req.len(), 29);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub header: Header,

    // Private so the header's question count can follow it.
    questions: Vec<Question>,
}

impl Query {
    /// A new query, with no questions and a random id drawn from `rng`.
    pub fn new<R: Rng>(rng: &mut R) -> Query {
        Query {
            header: Header::random(rng),
            questions: Vec::new(),
        }
    }

    /// A new recursive query with a single Internet class question.
    pub fn question<R: Rng>(rng: &mut R, name: &str, qtype: Type) -> Query {
        let mut query = Query::new(rng);
        query.add_question(Question::new(name, qtype, Class::Internet));
        query.header.flags.set_recursion_desired(true);
        query
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        // Saturates; to_vec refuses to encode more than u16::MAX.
        self.header.question_count = u16::try_from(self.questions.len()).unwrap_or(u16::MAX);
    }

    /// Removes all questions.
    pub fn clear_questions(&mut self) {
        self.questions.clear();
        self.header.question_count = 0;
    }

    /// Number of bytes this query takes on the wire.
    pub fn wire_len(&self) -> Result<usize> {
        self.questions
            .iter()
            .try_fold(Header::LEN, |len, q| -> Result<usize> {
                Ok(len + q.wire_len()?)
            })
    }

    /// Returns this Query as a Vec<u8> ready to be sent, as defined by [rfc1035](https://datatracker.ietf.org/doc/html/rfc1035).
    ///
    /// # Errors
    ///
    /// Fails if any question's name can't be encoded, or if there are more
    /// questions than fit in the header's 16 bit count.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let question_count = u16::try_from(self.questions.len())
            .map_err(|_| Error::TooManyQuestions(self.questions.len()))?;

        // A query only carries questions.
        let header = Header {
            question_count,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
            ..self.header
        };

        let mut cur = ByteCursor::new(vec![0; self.wire_len()?]);
        header.write(&mut cur)?;
        for question in &self.questions {
            question.write(&mut cur)?;
        }
        debug_assert!(cur.is_empty());

        Ok(cur.into_inner())
    }
}

/// A decoded DNS response.
///
/// # Examples
///
/// ```rust
/// use netdns::{Response, Rcode};
///
/// let buf = [
///     0x0C, 0x54, 0x81, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
/// ];
/// let response = Response::from_slice(&buf).expect("invalid response");
/// assert_eq!(response.header.flags.rcode(), Rcode::Success);
/// assert!(response.answers.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub header: Header,

    /// The questions.
    pub questions: Vec<Question>,

    /// The answer records.
    pub answers: Vec<Record>,

    /// Records pointing toward an authority.
    pub authorities: Vec<Record>,

    /// Records holding additional information.
    pub additional: Vec<Record>,
}

impl Response {
    /// The smallest valid message, a bare header.
    pub const MIN_LEN: usize = Header::LEN;

    /// Messages carried over UDP are restricted to 512 bytes (not counting the
    /// IP or UDP headers).
    pub const MAX_UDP_LEN: usize = 512;

    /// Decodes a response, reading exactly as many entries as each of the
    /// header's counts declare.
    ///
    /// The buffer is untrusted. Running out of bytes, or any malformed name,
    /// fails the whole decode rather than returning a partial response.
    pub fn from_slice(buf: &[u8]) -> Result<Response> {
        MessageParser::new(buf).parse()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum RecordSection {
    Answers,
    Authorities,
    Additional,
}

// A helper class to hold state while the parsing is happening.
struct MessageParser<'a> {
    cur: ByteCursor<&'a [u8]>,

    m: Response,
}

impl<'a> MessageParser<'a> {
    fn new(buf: &'a [u8]) -> MessageParser<'a> {
        MessageParser {
            cur: ByteCursor::new(buf),
            m: Response::default(),
        }
    }

    /// Consume the MessageParser and returned the resulting Response.
    fn parse(mut self) -> Result<Response> {
        self.m.header = Header::read(&mut self.cur)?;

        let header = self.m.header;
        debug!(
            "decoding response id {}: {} question(s), {} answer(s), {} authority, {} additional",
            header.id,
            header.question_count,
            header.answer_count,
            header.authority_count,
            header.additional_count,
        );

        self.read_questions(header.question_count)?;
        self.read_records(header.answer_count, RecordSection::Answers)?;
        self.read_records(header.authority_count, RecordSection::Authorities)?;
        self.read_records(header.additional_count, RecordSection::Additional)?;

        if !self.cur.is_empty() {
            debug!(
                "finished parsing with {} bytes left over",
                self.cur.remaining()
            );
        }

        Ok(self.m)
    }

    fn read_questions(&mut self, count: u16) -> Result<()> {
        // Each question takes at least 5 bytes, so don't trust large counts.
        self.m
            .questions
            .reserve(usize::from(count).min(self.cur.remaining() / 5));

        for _ in 0..count {
            let question = Question::read(&mut self.cur)?;
            self.m.questions.push(question);
        }

        Ok(())
    }

    fn read_records(&mut self, count: u16, section: RecordSection) -> Result<()> {
        let records = match section {
            RecordSection::Answers => &mut self.m.answers,
            RecordSection::Authorities => &mut self.m.authorities,
            RecordSection::Additional => &mut self.m.additional,
        };
        // Each record takes at least 11 bytes.
        records.reserve(usize::from(count).min(self.cur.remaining() / 11));

        for _ in 0..count {
            records.push(Record::read(&mut self.cur)?);
        }

        Ok(())
    }
}
