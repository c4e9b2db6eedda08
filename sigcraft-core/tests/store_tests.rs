// sigcraft-core/tests/store_tests.rs
use anyhow::Result;
use sigcraft_core::{
    render, ContactField, ContactPatch, ContactRecord, FileStorage, MemoryStorage, PresetCatalog,
    SavedSignature, SignatureStorage, SignatureStore, SigcraftConfig, StoreEvent,
    DEFAULT_STORAGE_KEY,
};
use std::cell::RefCell;
use std::rc::Rc;

fn work_record(store: &mut SignatureStore<MemoryStorage>) {
    store.update_field(ContactField::FullName, "Alex Johnson");
    store.update_field(ContactField::JobTitle, "Senior Marketing Manager");
    store.update_field(ContactField::Email, "alex.johnson@techcorp.com");
}

#[test_log::test]
fn save_appends_persisted_snapshot() -> Result<()> {
    let mut store = SignatureStore::new(MemoryStorage::new());
    work_record(&mut store);

    let saved = store.save("Work");
    assert_eq!(saved.name, "Work");
    assert_eq!(&saved.data, store.record());
    assert_eq!(saved.html, store.html());
    assert_eq!(store.saved(), &[saved.clone()]);

    let raw = store
        .storage()
        .read(DEFAULT_STORAGE_KEY)?
        .expect("list should be persisted");
    let persisted: Vec<SavedSignature> = serde_json::from_str(&raw)?;
    assert_eq!(persisted, vec![saved]);
    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains("\"fullName\":\"Alex Johnson\""));
    Ok(())
}

#[test]
fn load_restores_stored_html_verbatim() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    work_record(&mut store);
    let saved = store.save("Work");

    store.reset();
    assert_ne!(store.html(), saved.html);

    let mut stale = saved.clone();
    stale.html = "<p>rendered by an older version</p>".to_string();
    store.load(&stale);
    assert_eq!(store.record(), &saved.data);
    assert_eq!(store.html(), "<p>rendered by an older version</p>");

    assert!(store.load_by_id(&saved.id));
    assert_eq!(store.html(), saved.html);
    assert!(!store.load_by_id("missing"));
}

#[test]
fn delete_removes_exactly_one_entry_in_order() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    let a = store.save("A");
    let b = store.save("B");
    let c = store.save("C");

    assert!(store.delete(&b.id));
    let names: Vec<&str> = store.saved().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(store.saved()[0].id, a.id);
    assert_eq!(store.saved()[1].id, c.id);
}

#[test]
fn delete_of_unknown_id_does_not_persist() -> Result<()> {
    let mut store = SignatureStore::new(MemoryStorage::new());
    assert!(!store.delete("nope"));
    assert_eq!(store.storage().read(DEFAULT_STORAGE_KEY)?, None);
    Ok(())
}

#[test]
fn duplicate_appends_renamed_copy() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    work_record(&mut store);
    let original = store.save("Work");
    let _other = store.save("Other");

    let copy = store.duplicate(&original.id).expect("original exists");
    assert_eq!(copy.name, "Work (Copy)");
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.data, original.data);
    assert_eq!(copy.html, original.html);
    assert_eq!(store.saved().last(), Some(&copy));
    assert_eq!(store.saved().len(), 3);

    assert!(store.duplicate("missing").is_none());
    assert_eq!(store.saved().len(), 3);
}

#[test_log::test]
fn malformed_persisted_json_yields_empty_list() {
    let storage = MemoryStorage::new().with_value(DEFAULT_STORAGE_KEY, "{not json");
    let mut store = SignatureStore::new(storage);
    store.load_persisted();
    assert!(store.saved().is_empty());
}

#[test]
fn missing_persisted_key_yields_empty_list() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    store.load_persisted();
    assert!(store.saved().is_empty());
}

#[test]
fn persisted_entries_with_missing_fields_still_load() {
    let raw = r#"[{"id":"1","name":"Old","data":{"fullName":"Jo"},"html":"<p>x</p>","createdAt":"2024-01-01T00:00:00.000Z"}]"#;
    let mut store = SignatureStore::new(MemoryStorage::new().with_value(DEFAULT_STORAGE_KEY, raw));
    store.load_persisted();
    assert_eq!(store.saved().len(), 1);
    assert_eq!(store.saved()[0].data.full_name, "Jo");
    assert_eq!(store.saved()[0].data.email, "");
}

#[test]
fn file_storage_survives_a_new_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("signatures.json");

    let saved = {
        let mut store = SignatureStore::new(FileStorage::at_file(&file));
        store.update_field(ContactField::CompanyName, "Acme");
        store.save("Acme")
    };

    let mut next = SignatureStore::new(FileStorage::at_file(&file));
    next.load_persisted();
    assert_eq!(next.saved(), &[saved]);
    Ok(())
}

#[test]
fn store_from_config_uses_configured_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = SigcraftConfig::load_default()?;
    config.storage.path = Some(dir.path().join("custom.json"));

    let mut store = SignatureStore::from_config(&config);
    store.save("One");
    assert!(dir.path().join("custom.json").is_file());
    Ok(())
}

#[test]
fn replace_record_merges_and_renders_once() -> Result<()> {
    let mut store = SignatureStore::new(MemoryStorage::new());
    store.update_field(ContactField::Address, "keep me");

    let events = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&events);
    store.subscribe(move |event| {
        if matches!(event, StoreEvent::Rendered { .. }) {
            *counter.borrow_mut() += 1;
        }
    });

    let patch = ContactPatch::default()
        .with(ContactField::FullName, "Pat")
        .with(ContactField::Email, "pat@example.com");
    store.replace_record(&patch);

    assert_eq!(*events.borrow(), 1);
    assert_eq!(store.record().full_name, "Pat");
    assert_eq!(store.record().address, "keep me");
    assert_eq!(store.html(), render(store.record()));

    let catalog = PresetCatalog::load_default()?;
    let preset = catalog.require("executive-1")?;
    store.replace_record(&preset.patch());
    assert_eq!(store.record(), &preset.data);
    assert_eq!(*events.borrow(), 2);
    Ok(())
}

#[test]
fn reset_restores_empty_render() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    store.update_field(ContactField::FullName, "Pat");
    store.reset();
    assert_eq!(store.record(), &ContactRecord::default());
    assert_eq!(store.html(), render(&ContactRecord::default()));
}

#[test]
fn list_changes_notify_subscribers() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    let lengths = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lengths);
    store.subscribe(move |event| {
        if let StoreEvent::SavedChanged { saved } = event {
            sink.borrow_mut().push(saved.len());
        }
    });

    let first = store.save("A");
    store.duplicate(&first.id);
    store.delete(&first.id);
    store.delete(&first.id);

    assert_eq!(*lengths.borrow(), vec![1, 2, 1]);
}

#[test]
fn search_matches_name_and_contact_fields() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    store.update_field(ContactField::CompanyName, "TechCorp");
    store.save("Work");
    store.reset();
    store.update_field(ContactField::Email, "me@home.example");
    store.save("Personal");

    assert_eq!(store.search("").len(), 2);
    assert_eq!(store.search("techcorp")[0].name, "Work");
    assert_eq!(store.search("HOME")[0].name, "Personal");
    assert_eq!(store.search("pers").len(), 1);
    assert!(store.search("nothing").is_empty());
}

#[test]
fn sanitized_preview_matches_render() {
    let mut store = SignatureStore::new(MemoryStorage::new());
    store.update_field(ContactField::Website, "example.com");
    assert_eq!(store.sanitized_html(), store.html());
}
