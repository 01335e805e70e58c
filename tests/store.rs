//! Tests for the column-fix collection and the subscriber-notified store.
mod common;
use common::*;
use fixchain::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn test_add_appends_and_update_replaces_in_place() {
    let mut config = seeded_config();
    assert_eq!(config.len(), 2);

    // Updating the first column must not move it to the back.
    config.add_or_update(ColumnFix::new("first_name", FixChain::SkipLeads));
    assert_eq!(config.len(), 2);
    assert_eq!(config.column_fixes[0].column_name, "first_name");
    assert_eq!(config.column_fixes[0].chain, FixChain::SkipLeads);

    config.add_or_update(ColumnFix::new("city", FixChain::SendBlank));
    assert_eq!(config.len(), 3);
    assert_eq!(config.column_fixes[2].column_name, "city");
}

#[test]
fn test_csv_alias_resolves_to_one_fix() {
    let mut config = CsvConfig::new();
    config.add_or_update(ColumnFix::new("title", FixChain::SendBlank));

    // Both spellings of the column reach the same entry.
    assert!(config.get("title").is_some());
    assert!(config.get("csv_title").is_some());

    // Storing under the aliased name replaces instead of duplicating.
    config.add_or_update(ColumnFix::new("csv_title", FixChain::SkipLeads));
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("title").expect("fix").chain, FixChain::SkipLeads);
}

#[test]
fn test_uniqueness_invariant_over_mixed_sequences() {
    let mut config = CsvConfig::new();
    let names = [
        "company", "csv_company", "company", "title", "csv_title", "csv_company",
    ];
    for (i, name) in names.iter().enumerate() {
        config.add_or_update(ColumnFix::new(
            *name,
            FixChain::InsertDefaultValue {
                value: i.to_string(),
            },
        ));
    }
    // Two logical columns, whatever mix of spellings arrived.
    assert_eq!(config.len(), 2);
    assert_eq!(
        config.get("company").expect("company fix").chain,
        FixChain::InsertDefaultValue {
            value: "5".to_string()
        }
    );
}

#[test]
fn test_add_many_applies_in_input_order() {
    let mut config = CsvConfig::new();
    config.add_or_update_many([
        ColumnFix::new("a", FixChain::SendBlank),
        ColumnFix::new("b", FixChain::SkipLeads),
        ColumnFix::new("a", FixChain::SkipLeads),
    ]);
    assert_eq!(config.len(), 2);
    assert_eq!(config.column_fixes[0].column_name, "a");
    assert_eq!(config.column_fixes[0].chain, FixChain::SkipLeads);
}

#[test]
fn test_remove_is_a_silent_no_op_when_missing() {
    let mut config = seeded_config();
    config.remove("nonexistent");
    assert_eq!(config.len(), 2);

    config.remove("csv_first_name");
    assert_eq!(config.len(), 1);
    assert!(config.get("first_name").is_none());
}

#[test]
fn test_clear_preserves_detected_columns() {
    let mut config = seeded_config();
    config.set_detected_columns(vec!["first_name".to_string(), "company_name".to_string()]);
    config.clear();
    assert!(config.is_empty());
    assert_eq!(config.detected_columns.len(), 2);
}

#[test]
fn test_mutations_stamp_last_updated() {
    let mut config = CsvConfig::new();
    assert!(config.last_updated.is_none());

    config.add_or_update(ColumnFix::new("a", FixChain::SendBlank));
    let stamped = config.last_updated.expect("timestamp after mutation");
    assert!(stamped > 0);

    // Reads do not touch the timestamp.
    let _ = config.get("a");
    assert_eq!(config.last_updated, Some(stamped));

    config.remove("a");
    assert!(config.last_updated.expect("timestamp after remove") >= stamped);
}

#[test]
fn test_store_notifies_once_per_mutation() {
    let mut store = ConfigStore::default();
    let notifications = Rc::new(Cell::new(0usize));

    let counter = Rc::clone(&notifications);
    let id = store.subscribe(move |_| counter.set(counter.get() + 1));

    store.add_column_fix("a", FixChain::SendBlank);
    store.add_column_fix("b", FixChain::SkipLeads);
    store.remove_column_fix("a");
    store.clear_column_fixes();
    assert_eq!(notifications.get(), 4);

    store.unsubscribe(id);
    store.add_column_fix("c", FixChain::SendBlank);
    assert_eq!(notifications.get(), 4);
}

#[test]
fn test_subscribers_see_the_new_state() {
    let mut store = ConfigStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    store.subscribe(move |config: &CsvConfig| sink.borrow_mut().push(config.len()));

    store.add_column_fix("a", FixChain::SendBlank);
    store.add_column_fix("b", FixChain::SkipLeads);
    store.clear_column_fixes();
    assert_eq!(*seen.borrow(), vec![1, 2, 0]);
}

#[test]
fn test_store_replaces_through_alias() {
    let mut store = ConfigStore::default();
    store.add_column_fix("csv_company", FixChain::SendBlank);
    store.add_column_fix("company", FixChain::SkipLeads);
    assert_eq!(store.config().len(), 1);
    assert_eq!(
        store.config().get("csv_company").expect("fix").chain,
        FixChain::SkipLeads
    );
}
