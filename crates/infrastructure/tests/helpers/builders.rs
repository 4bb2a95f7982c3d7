use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, NAPTR};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const ZONE: &str = "example.com.";

pub fn naptr_record(order: u16, preference: u16, replacement: &str) -> Record {
    let naptr = NAPTR::new(
        order,
        preference,
        b"a".to_vec().into_boxed_slice(),
        b"x-3gpp-pgw:x-s5-gtp:x-s8-gtp:x-gn:x-gp"
            .to_vec()
            .into_boxed_slice(),
        Vec::new().into_boxed_slice(),
        Name::from_str(replacement).unwrap(),
    );
    Record::from_rdata(Name::from_str(ZONE).unwrap(), 120, RData::NAPTR(naptr))
}

pub fn a_record(ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_str(ZONE).unwrap(),
        120,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}

pub fn query(record_type: RecordType) -> Query {
    let mut query = Query::new();
    query.set_name(Name::from_str(ZONE).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);
    query
}

pub fn request(id: u16, record_type: RecordType) -> Message {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.metadata.recursion_desired = true;
    message.add_query(query(record_type));
    message
}

/// Builder for a finished response with explicit sections
pub struct ResponseBuilder {
    id: u16,
    query_type: Option<RecordType>,
    rcode: ResponseCode,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additionals: Vec<Record>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            id: 4242,
            query_type: Some(RecordType::NAPTR),
            rcode: ResponseCode::NoError,
            answers: Vec::new(),
            authority: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn query_type(mut self, query_type: RecordType) -> Self {
        self.query_type = Some(query_type);
        self
    }

    pub fn without_query(mut self) -> Self {
        self.query_type = None;
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn answers(mut self, records: Vec<Record>) -> Self {
        self.answers = records;
        self
    }

    pub fn authority(mut self, records: Vec<Record>) -> Self {
        self.authority = records;
        self
    }

    pub fn additionals(mut self, records: Vec<Record>) -> Self {
        self.additionals = records;
        self
    }

    pub fn build(self) -> Message {
        let mut message = Message::new(self.id, MessageType::Response, OpCode::Query);
        message.metadata.response_code = self.rcode;
        if let Some(query_type) = self.query_type {
            message.add_query(query(query_type));
        }
        message.answers = self.answers;
        message.authorities = self.authority;
        message.additionals = self.additionals;
        message
    }
}

pub fn count_naptr(records: &[Record]) -> usize {
    records
        .iter()
        .filter(|r| r.record_type() == RecordType::NAPTR)
        .count()
}
