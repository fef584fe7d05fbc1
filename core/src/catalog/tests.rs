use super::*;

mod common {
    use super::*;

    pub(super) fn record(id: &str, name: &str, symbol: &str) -> Record {
        Record::new(RecordId::try_new(id.to_string()).unwrap(), name, symbol)
    }

    pub(super) fn sample() -> Catalog {
        Catalog::new(
            vec![
                record("BTC", "Bitcoin", "BTC"),
                record("ETH", "Ethereum", "ETH"),
            ],
            vec![record("SGD", "Singapore Dollar", "$").with_code("SGD")],
        )
    }

    pub(super) fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id().as_str()).collect()
    }
}

mod records {
    use super::common::*;
    use super::*;

    #[test]
    fn test_records_crypto_only() {
        let catalog = sample();
        assert_eq!(ids(&catalog.records(ListFilter::Crypto)), ["BTC", "ETH"]);
    }

    #[test]
    fn test_records_fiat_only() {
        let catalog = sample();
        assert_eq!(ids(&catalog.records(ListFilter::Fiat)), ["SGD"]);
    }

    #[test]
    fn test_records_all_is_crypto_then_fiat() {
        let catalog = sample();
        assert_eq!(ids(&catalog.records(ListFilter::All)), ["BTC", "ETH", "SGD"]);
    }

    #[test]
    fn test_records_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.records(ListFilter::All).is_empty());
        assert!(catalog.is_empty());
    }
}

mod set_list {
    use super::common::*;
    use super::*;

    #[test]
    fn test_set_list_replaces_whole_list() {
        let mut catalog = sample();
        catalog.set_list(ListType::Crypto, vec![record("XRP", "XRP", "XRP")]);

        assert_eq!(ids(catalog.list(ListType::Crypto)), ["XRP"]);
        assert_eq!(catalog.len(), 2);
    }
}

mod list_type_of {
    use super::common::*;
    use super::*;

    #[test]
    fn test_list_type_of_known_ids() {
        let catalog = sample();
        let btc = RecordId::try_new("BTC".to_string()).unwrap();
        let sgd = RecordId::try_new("SGD".to_string()).unwrap();
        let xyz = RecordId::try_new("XYZ".to_string()).unwrap();

        assert_eq!(catalog.list_type_of(&btc), Some(ListType::Crypto));
        assert_eq!(catalog.list_type_of(&sgd), Some(ListType::Fiat));
        assert_eq!(catalog.list_type_of(&xyz), None);
    }
}

mod from_json {
    use super::common::*;
    use super::*;

    #[test]
    fn test_from_json_full_snapshot() {
        let json = r#"{
            "crypto": [{ "id": "BTC", "name": "Bitcoin", "symbol": "BTC" }],
            "fiat": [{ "id": "EUR", "displayName": "Euro", "symbol": "€", "code": "EUR" }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(ids(&catalog.records(ListFilter::All)), ["BTC", "EUR"]);
        assert_eq!(catalog.list(ListType::Fiat)[0].code(), Some("EUR"));
    }

    #[test]
    fn test_from_json_missing_list_defaults_to_empty() {
        let catalog = Catalog::from_json(r#"{ "fiat": [] }"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_malformed_is_snapshot_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::Error::Snapshot(_)));
    }
}
