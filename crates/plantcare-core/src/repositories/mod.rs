//! Repository traits (ports)

pub mod record_store;
pub mod user_records;

pub use record_store::RecordStore;
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use user_records::{read_user_record, write_user_record};
