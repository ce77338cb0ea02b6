pub mod record;
pub mod snapshot;

pub use record::{month_from_name, normalize_rows, CrashRecord, RawCrashRow};
pub use snapshot::Snapshot;
