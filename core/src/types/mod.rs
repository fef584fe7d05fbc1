pub mod config;
pub use config::{AppConfig, AppConfigError};

pub(crate) mod record_id;
pub use record_id::{MAX_RECORD_ID_LENGTH, RecordId, RecordIdError};

pub(crate) mod record;
pub use record::Record;

pub(crate) mod list;
pub use list::{ListFilter, ListType, ParseListFilterError};
