use std::fmt;

/// Record and query types the balancer needs to tell apart.
///
/// NAPTR is the only type whose records are ever reordered. AXFR and IXFR
/// only appear as query types and mark zone transfers, which are always
/// passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,

    RRSIG,
    OPT,

    IXFR,
    AXFR,
    ANY,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::RRSIG => "RRSIG",
            RecordType::OPT => "OPT",
            RecordType::IXFR => "IXFR",
            RecordType::AXFR => "AXFR",
            RecordType::ANY => "ANY",
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            33 => Some(RecordType::SRV),
            35 => Some(RecordType::NAPTR),
            41 => Some(RecordType::OPT),
            46 => Some(RecordType::RRSIG),
            251 => Some(RecordType::IXFR),
            252 => Some(RecordType::AXFR),
            255 => Some(RecordType::ANY),
            _ => None,
        }
    }

    /// Full (AXFR) or incremental (IXFR) zone transfer.
    pub fn is_zone_transfer(&self) -> bool {
        matches!(self, RecordType::AXFR | RecordType::IXFR)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
