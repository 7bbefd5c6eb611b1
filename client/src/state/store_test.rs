use super::*;

#[test]
fn memory_store_reads_absent_keys_as_none() {
    let store = MemoryStore::default();
    assert_eq!(store.read("userFirstName"), None);
}

#[test]
fn memory_store_round_trips_written_values() {
    let store = MemoryStore::default();
    store.write("userFirstName", "Jane");
    assert_eq!(store.read("userFirstName"), Some("Jane".to_owned()));
}

#[test]
fn memory_store_overwrites_prior_values() {
    let store = MemoryStore::default();
    store.write("userCity", "Orlando");
    store.write("userCity", "Anaheim");
    assert_eq!(store.read("userCity"), Some("Anaheim".to_owned()));
}

#[test]
fn empty_value_is_distinct_from_absence() {
    let store = MemoryStore::default();
    store.write("userState", "");
    assert_eq!(store.read("userState"), Some(String::new()));
    assert_eq!(store.read("userCity"), None);
}

#[test]
fn write_batch_stores_every_entry() {
    let store = MemoryStore::default();
    store.write_batch(&[
        ("userFirstName", "Jane".to_owned()),
        ("userLastName", "Doe".to_owned()),
        ("userState", String::new()),
    ]);
    assert_eq!(store.read("userFirstName"), Some("Jane".to_owned()));
    assert_eq!(store.read("userLastName"), Some("Doe".to_owned()));
    assert_eq!(store.read("userState"), Some(String::new()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn cookie_store_is_inert_outside_a_browser() {
    let store = CookieStore;
    store.write("userFirstName", "Jane");
    assert_eq!(store.read("userFirstName"), None);
}

#[test]
fn handle_derefs_to_the_wrapped_store() {
    let handle = ProfileStoreHandle::new(Arc::new(MemoryStore::default()));
    handle.write("userCity", "Orlando");
    assert_eq!(handle.read("userCity"), Some("Orlando".to_owned()));
}
