pub mod discovery;
pub mod error;
pub mod extjson;
pub mod reader;
pub mod records;
pub mod snapshot;

pub use discovery::{SNAPSHOT_EXTENSIONS, SnapshotFiles, find_collection_file, locate_snapshot};
pub use error::{IngestError, Result};
pub use extjson::parse_timestamp;
pub use reader::{ReadOutcome, read_records};
pub use records::{OrderItem, OrderRecord, ProductRecord, ShippingAddress, UserRecord};
pub use snapshot::{Snapshot, load_snapshot};
