use super::*;
use crate::types::RecordId;

mod common {
    use super::*;

    pub(super) fn record(id: &str, name: &str, symbol: &str) -> Record {
        Record::new(RecordId::try_new(id.to_string()).unwrap(), name, symbol)
    }
}

mod load {
    use super::*;

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        assert!(store.load(ListType::Crypto).unwrap().is_empty());
        assert!(store.load_catalog().unwrap().is_empty());
    }
}

mod save {
    use super::common::*;
    use super::*;

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = MemoryStore::new();
        store
            .save(
                ListType::Crypto,
                vec![record("ETH", "Ethereum", "ETH"), record("BTC", "Bitcoin", "BTC")],
            )
            .unwrap();

        let loaded = store.load(ListType::Crypto).unwrap();
        let ids: Vec<&str> = loaded.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["ETH", "BTC"]);
        assert!(store.load(ListType::Fiat).unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_previous_list() {
        let store = MemoryStore::new();
        store
            .save(ListType::Fiat, vec![record("EUR", "Euro", "€")])
            .unwrap();
        store
            .save(ListType::Fiat, vec![record("GBP", "British Pound", "£")])
            .unwrap();

        let loaded = store.load(ListType::Fiat).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id().as_str(), "GBP");
    }
}

mod clear_all {
    use super::common::*;
    use super::*;

    #[test]
    fn test_clear_all_empties_both_lists() {
        let catalog = Catalog::new(
            vec![record("BTC", "Bitcoin", "BTC")],
            vec![record("EUR", "Euro", "€")],
        );
        let store = MemoryStore::from_catalog(&catalog);
        assert_eq!(store.load_catalog().unwrap(), catalog);

        store.clear_all().unwrap();

        assert!(store.load_catalog().unwrap().is_empty());
    }
}
