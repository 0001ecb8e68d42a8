use std::fmt;
use strum_macros::EnumString;

/// Resource Record Type, for example, A, CNAME or SOA.
///
/// TYPE fields are used in resource records. QTYPE fields appear in the
/// question part of a query, and are a superset of TYPEs. See [rfc1035#section-3.2.2].
///
/// Codes without a name are kept as [`Type::Unknown`], so they survive a round trip.
///
/// [rfc1035#section-3.2.2]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.2
#[derive(Copy, Clone, Debug, EnumString, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Type {
    /// (Default) IPv4 Address.
    A,

    /// An authoritative name server.
    NS,

    /// A mail destination (Obsolete - use MX).
    MD,

    /// A mail forwarder (Obsolete - use MX).
    MF,

    /// The canonical name for an alias.
    CNAME,

    /// Marks the start of a zone of authority.
    SOA,

    /// A mailbox domain name (EXPERIMENTAL).
    MB,

    /// A mail group member (EXPERIMENTAL).
    MG,

    /// A mail rename domain name (EXPERIMENTAL).
    MR,

    /// A null RR (EXPERIMENTAL).
    NULL,

    /// A well known service description.
    WKS,

    /// Domain name pointer.
    PTR,

    /// Host information.
    HINFO,

    /// Mailbox or mail list information.
    MINFO,

    /// Mail exchange.
    MX,

    /// Text strings.
    TXT,

    #[strum(disabled)]
    Unknown(u16),
}

impl Default for Type {
    fn default() -> Self {
        Type::A
    }
}

impl From<u16> for Type {
    fn from(code: u16) -> Self {
        match code {
            1 => Type::A,
            2 => Type::NS,
            3 => Type::MD,
            4 => Type::MF,
            5 => Type::CNAME,
            6 => Type::SOA,
            7 => Type::MB,
            8 => Type::MG,
            9 => Type::MR,
            10 => Type::NULL,
            11 => Type::WKS,
            12 => Type::PTR,
            13 => Type::HINFO,
            14 => Type::MINFO,
            15 => Type::MX,
            16 => Type::TXT,
            _ => Type::Unknown(code),
        }
    }
}

impl From<Type> for u16 {
    fn from(t: Type) -> Self {
        match t {
            Type::A => 1,
            Type::NS => 2,
            Type::MD => 3,
            Type::MF => 4,
            Type::CNAME => 5,
            Type::SOA => 6,
            Type::MB => 7,
            Type::MG => 8,
            Type::MR => 9,
            Type::NULL => 10,
            Type::WKS => 11,
            Type::PTR => 12,
            Type::HINFO => 13,
            Type::MINFO => 14,
            Type::MX => 15,
            Type::TXT => 16,
            Type::Unknown(code) => code,
        }
    }
}

impl Type {
    fn mnemonic(self) -> Option<&'static str> {
        Some(match self {
            Type::A => "A",
            Type::NS => "NS",
            Type::MD => "MD",
            Type::MF => "MF",
            Type::CNAME => "CNAME",
            Type::SOA => "SOA",
            Type::MB => "MB",
            Type::MG => "MG",
            Type::MR => "MR",
            Type::NULL => "NULL",
            Type::WKS => "WKS",
            Type::PTR => "PTR",
            Type::HINFO => "HINFO",
            Type::MINFO => "MINFO",
            Type::MX => "MX",
            Type::TXT => "TXT",
            Type::Unknown(_) => return None,
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mnemonic() {
            Some(s) => f.pad(s),
            // Unknown types are written as per rfc3597.
            None => f.pad(&format!("TYPE{}", u16::from(*self))),
        }
    }
}

/// Resource Record Class, for example Internet.
///
/// See [rfc1035#section-3.2.4].
///
/// [rfc1035#section-3.2.4]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.4
#[derive(Copy, Clone, Debug, EnumString, PartialEq, Eq, Hash)]
pub enum Class {
    /// (Default) The Internet (IN).
    #[strum(serialize = "IN")]
    Internet,

    /// CSNET (CS), obsolete (used only for examples in some obsolete RFCs).
    #[strum(serialize = "CS")]
    CsNet,

    /// Chaosnet (CH), obsolete LAN protocol created at MIT in the mid-1970s.
    #[strum(serialize = "CH")]
    Chaos,

    /// Hesiod (HS), an information service developed by MIT's Project Athena.
    #[strum(serialize = "HS")]
    Hesiod,

    #[strum(disabled)]
    Unknown(u16),
}

impl Default for Class {
    fn default() -> Self {
        Class::Internet
    }
}

impl From<u16> for Class {
    fn from(code: u16) -> Self {
        match code {
            1 => Class::Internet,
            2 => Class::CsNet,
            3 => Class::Chaos,
            4 => Class::Hesiod,
            _ => Class::Unknown(code),
        }
    }
}

impl From<Class> for u16 {
    fn from(class: Class) -> Self {
        match class {
            Class::Internet => 1,
            Class::CsNet => 2,
            Class::Chaos => 3,
            Class::Hesiod => 4,
            Class::Unknown(code) => code,
        }
    }
}

impl Class {
    fn mnemonic(self) -> Option<&'static str> {
        match self {
            Class::Internet => Some("IN"),
            Class::CsNet => Some("CS"),
            Class::Chaos => Some("CH"),
            Class::Hesiod => Some("HS"),
            Class::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mnemonic() {
            Some(s) => f.pad(s),
            None => f.pad(&format!("CLASS{}", u16::from(*self))),
        }
    }
}

/// Specifies kind of query in this message. A four bit field, set by the
/// originator of a query and copied into the response.
#[derive(Copy, Clone, Debug, EnumString, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// A standard query.
    #[strum(serialize = "QUERY")]
    Query,

    /// An inverse query (OBSOLETE). See [rfc3425].
    ///
    /// [rfc3425]: https://datatracker.ietf.org/doc/html/rfc3425
    #[strum(serialize = "IQUERY")]
    InverseQuery,

    /// A server status request.
    #[strum(serialize = "STATUS")]
    Status,

    /// 3-15 reserved for future use.
    #[strum(disabled)]
    Reserved(u8),
}

impl Default for Opcode {
    fn default() -> Self {
        Opcode::Query
    }
}

impl From<u8> for Opcode {
    /// Only the low four bits of `code` are used.
    fn from(code: u8) -> Self {
        match code & 0x0F {
            0 => Opcode::Query,
            1 => Opcode::InverseQuery,
            2 => Opcode::Status,
            code => Opcode::Reserved(code),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        match opcode {
            Opcode::Query => 0,
            Opcode::InverseQuery => 1,
            Opcode::Status => 2,
            Opcode::Reserved(code) => code & 0x0F,
        }
    }
}

impl Opcode {
    fn mnemonic(self) -> Option<&'static str> {
        match self {
            Opcode::Query => Some("QUERY"),
            Opcode::InverseQuery => Some("IQUERY"),
            Opcode::Status => Some("STATUS"),
            Opcode::Reserved(_) => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mnemonic() {
            Some(s) => f.pad(s),
            None => f.pad(&format!("RESERVED{}", u8::from(*self))),
        }
    }
}

/// Response Codes. A four bit field set as part of responses.
/// See [rfc1035#section-4.1.1].
///
/// [rfc1035#section-4.1.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
#[derive(Copy, Clone, Debug, EnumString, PartialEq, Eq, Hash)]
pub enum Rcode {
    /// No error condition.
    #[strum(serialize = "NOERROR")]
    Success,

    /// The name server was unable to interpret the query.
    #[strum(serialize = "FORMERR")]
    FormatError,

    /// The name server was unable to process this query due to a problem with
    /// the name server.
    #[strum(serialize = "SERVFAIL")]
    ServerFailure,

    /// Meaningful only for responses from an authoritative name server, this
    /// code signifies that the domain name referenced in the query does not
    /// exist.
    #[strum(serialize = "NXDOMAIN")]
    NameError,

    /// The name server does not support the requested kind of query.
    #[strum(serialize = "NOTIMP")]
    NotImplemented,

    /// The name server refuses to perform the specified operation for policy
    /// reasons.
    #[strum(serialize = "REFUSED")]
    Refused,

    /// 6-15 reserved for future use.
    #[strum(disabled)]
    Reserved(u8),
}

impl Default for Rcode {
    fn default() -> Self {
        Rcode::Success
    }
}

impl Rcode {
    fn mnemonic(self) -> Option<&'static str> {
        match self {
            Rcode::Success => Some("NOERROR"),
            Rcode::FormatError => Some("FORMERR"),
            Rcode::ServerFailure => Some("SERVFAIL"),
            Rcode::NameError => Some("NXDOMAIN"),
            Rcode::NotImplemented => Some("NOTIMP"),
            Rcode::Refused => Some("REFUSED"),
            Rcode::Reserved(_) => None,
        }
    }

    /// The wording rfc1035 uses for this code.
    pub fn description(self) -> &'static str {
        match self {
            Rcode::Success => "No error",
            Rcode::FormatError => "Format error",
            Rcode::ServerFailure => "Server failure",
            Rcode::NameError => "Name Error",
            Rcode::NotImplemented => "Not Implemented",
            Rcode::Refused => "Refused",
            Rcode::Reserved(_) => "Reserved",
        }
    }
}

impl From<u8> for Rcode {
    /// Only the low four bits of `code` are used.
    fn from(code: u8) -> Self {
        match code & 0x0F {
            0 => Rcode::Success,
            1 => Rcode::FormatError,
            2 => Rcode::ServerFailure,
            3 => Rcode::NameError,
            4 => Rcode::NotImplemented,
            5 => Rcode::Refused,
            code => Rcode::Reserved(code),
        }
    }
}

impl From<Rcode> for u8 {
    fn from(rcode: Rcode) -> Self {
        match rcode {
            Rcode::Success => 0,
            Rcode::FormatError => 1,
            Rcode::ServerFailure => 2,
            Rcode::NameError => 3,
            Rcode::NotImplemented => 4,
            Rcode::Refused => 5,
            Rcode::Reserved(code) => code & 0x0F,
        }
    }
}

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mnemonic() {
            Some(s) => f.pad(s),
            None => f.pad(&format!("RESERVED{}", u8::from(*self))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_type_codes() {
        for code in 0..=300_u16 {
            assert_eq!(u16::from(Type::from(code)), code);
        }
        assert_eq!(Type::from(1), Type::A);
        assert_eq!(Type::from(16), Type::TXT);
        assert_eq!(Type::from(28), Type::Unknown(28));
    }

    #[test]
    fn test_class_codes() {
        for code in 0..=300_u16 {
            assert_eq!(u16::from(Class::from(code)), code);
        }
        assert_eq!(Class::from(1), Class::Internet);
        assert_eq!(Class::from(255), Class::Unknown(255));
    }

    #[test]
    fn test_opcode_rcode_codes() {
        for code in 0..16_u8 {
            assert_eq!(u8::from(Opcode::from(code)), code);
            assert_eq!(u8::from(Rcode::from(code)), code);
        }
        assert_eq!(Opcode::from(2), Opcode::Status);
        assert_eq!(Opcode::from(3), Opcode::Reserved(3));
        assert_eq!(Rcode::from(3), Rcode::NameError);
        assert_eq!(Rcode::from(6), Rcode::Reserved(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Type::CNAME.to_string(), "CNAME");
        assert_eq!(Type::Unknown(28).to_string(), "TYPE28");
        assert_eq!(format!("{:6}|", Type::A), "A     |");
        assert_eq!(Class::Internet.to_string(), "IN");
        assert_eq!(Class::Unknown(254).to_string(), "CLASS254");
        assert_eq!(Opcode::InverseQuery.to_string(), "IQUERY");
        assert_eq!(Rcode::NameError.to_string(), "NXDOMAIN");
        assert_eq!(Rcode::Reserved(9).to_string(), "RESERVED9");
        assert_eq!(Rcode::Refused.description(), "Refused");
    }

    #[test]
    fn test_display_parses_back() {
        // Every code can be displayed, and every named one parses back.
        for code in 0..=300_u16 {
            let t = Type::from(code);
            let name = t.to_string();
            match t {
                Type::Unknown(_) => assert!(Type::from_str(&name).is_err(), "{}", name),
                _ => assert_eq!(Type::from_str(&name).unwrap(), t),
            }

            let class = Class::from(code);
            let name = class.to_string();
            match class {
                Class::Unknown(_) => assert!(Class::from_str(&name).is_err(), "{}", name),
                _ => assert_eq!(Class::from_str(&name).unwrap(), class),
            }
        }

        for code in 0..16_u8 {
            let opcode = Opcode::from(code);
            match opcode {
                Opcode::Reserved(_) => assert_eq!(opcode.to_string(), format!("RESERVED{}", code)),
                _ => assert_eq!(Opcode::from_str(&opcode.to_string()).unwrap(), opcode),
            }

            let rcode = Rcode::from(code);
            match rcode {
                Rcode::Reserved(_) => assert_eq!(rcode.to_string(), format!("RESERVED{}", code)),
                _ => assert_eq!(Rcode::from_str(&rcode.to_string()).unwrap(), rcode),
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Type::from_str("MX").unwrap(), Type::MX);
        assert_eq!(Class::from_str("CH").unwrap(), Class::Chaos);
        assert_eq!(Opcode::from_str("STATUS").unwrap(), Opcode::Status);
        assert_eq!(Rcode::from_str("SERVFAIL").unwrap(), Rcode::ServerFailure);

        assert!(Type::from_str("Unknown").is_err());
        assert!(Type::from_str("AAAA").is_err());
    }
}
