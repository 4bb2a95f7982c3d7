//! Mapping from `hickory_proto::rr::RecordType` to `naptr_lb_domain::RecordType`

use naptr_lb_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Maps hickory record types onto the domain types the balancer names
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for types the balancer has no use for.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
