pub mod process_type;
pub mod record;

pub use process_type::ProcessType;
pub use record::{HEADERS, Record, RecordId};
