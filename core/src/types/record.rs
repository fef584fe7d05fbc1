use super::RecordId;
use serde::{Deserialize, Serialize};

/// A searchable currency entry.
///
/// Immutable once built; consumers read the fields through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id: RecordId,
    #[serde(alias = "name")]
    display_name: String,
    symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl Record {
    pub fn new(id: RecordId, display_name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            symbol: symbol.into(),
            code: None,
        }
    }

    /// Attaches an ISO-style code (fiat entries carry one).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId::try_new(s.to_string()).unwrap()
    }

    #[test]
    fn record_accessors() {
        let record = Record::new(id("SGD"), "Singapore Dollar", "$").with_code("SGD");

        assert_eq!(record.id().as_str(), "SGD");
        assert_eq!(record.display_name(), "Singapore Dollar");
        assert_eq!(record.symbol(), "$");
        assert_eq!(record.code(), Some("SGD"));
    }

    #[test]
    fn record_serializes_camel_case_without_missing_code() {
        let record = Record::new(id("BTC"), "Bitcoin", "BTC");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "BTC", "displayName": "Bitcoin", "symbol": "BTC" })
        );
    }

    #[test]
    fn record_accepts_legacy_name_field() {
        let record: Record =
            serde_json::from_str(r#"{"id":"EUR","name":"Euro","symbol":"€","code":"EUR"}"#)
                .unwrap();

        assert_eq!(record.display_name(), "Euro");
        assert_eq!(record.code(), Some("EUR"));
    }

    #[test]
    fn record_rejects_blank_id() {
        let result = serde_json::from_str::<Record>(r#"{"id":"  ","name":"X","symbol":"X"}"#);
        result.unwrap_err();
    }
}
