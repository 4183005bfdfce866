use super::*;

#[test]
fn memory_store_round_trips_value() {
    let mut store = MemoryStore::new();
    assert_eq!(store.load("theme"), Ok(None));
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.get("theme"), Some("dark"));
}

#[test]
fn memory_store_overwrites() {
    let mut store = MemoryStore::new().with_entry("theme", "dark");
    store.save("theme", "light").unwrap();
    assert_eq!(store.get("theme"), Some("light"));
}

#[test]
fn unavailable_store_fails_both_ways() {
    let mut store = UnavailableStore;
    assert_eq!(store.load("theme"), Err(StoreError::Unavailable));
    assert_eq!(store.save("theme", "dark"), Err(StoreError::Unavailable));
}
