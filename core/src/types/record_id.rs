use crate::error::ValidationError;
use nutype::nutype;

pub const MAX_RECORD_ID_LENGTH: usize = 64;

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_RECORD_ID_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RecordId(String);

impl RecordId {
    /// Parses a raw id, mapping the newtype error into the crate's validation taxonomy.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        Self::try_new(raw.clone())
            .map_err(|e| ValidationError::InvalidRecordId(format!("{raw:?}: {e}")))
    }
}
