//! Library-level tests for the contact store: slot round-trips, fail-soft
//! loading and the pure collection operations.

mod common;
use common::setup_test_store;

use rolo::models::contact::Contact;
use rolo::store::initialize::init_store;
use rolo::store::pool::StorePool;
use rolo::store::slots::{self, CONTACTS_SLOT};

fn open_store(name: &str) -> StorePool {
    let path = setup_test_store(name);
    let pool = StorePool::new(&path).expect("open store");
    init_store(&pool.conn).expect("init store");
    pool
}

#[test]
fn load_is_empty_before_anything_is_saved() {
    let mut pool = open_store("store_load_empty");
    let contacts = slots::load_contacts(&mut pool).expect("load");
    assert!(contacts.is_empty());
}

#[test]
fn save_upsert_load_round_trip_contains_the_contact_exactly_once() {
    let mut pool = open_store("store_round_trip");

    let mut contacts = slots::load_contacts(&mut pool).expect("load");
    let mut new_contact = Contact::new("Amy");
    new_contact.restaurant = Some("Bistro Verde".to_string());
    let id = new_contact.id.clone();

    slots::upsert(&mut contacts, new_contact.clone());
    slots::save_contacts(&mut pool, &contacts).expect("save");

    let reloaded = slots::load_contacts(&mut pool).expect("reload");
    let hits: Vec<&Contact> = reloaded.iter().filter(|c| c.id == id).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0], &new_contact);
}

#[test]
fn upsert_replaces_by_id_instead_of_duplicating() {
    let mut pool = open_store("store_upsert_replace");

    let mut contacts = slots::load_contacts(&mut pool).expect("load");
    let contact = Contact::new("Amy");
    let id = contact.id.clone();
    slots::upsert(&mut contacts, contact.clone());

    let mut renamed = contact;
    renamed.first_name = "Amelia".to_string();
    slots::upsert(&mut contacts, renamed);
    slots::save_contacts(&mut pool, &contacts).expect("save");

    let reloaded = slots::load_contacts(&mut pool).expect("reload");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].id, id);
    assert_eq!(reloaded[0].first_name, "Amelia");
}

#[test]
fn remove_deletes_by_id_and_reports_misses() {
    let mut pool = open_store("store_remove");

    let mut contacts = slots::load_contacts(&mut pool).expect("load");
    let contact = Contact::new("Amy");
    let id = contact.id.clone();
    slots::upsert(&mut contacts, contact);

    assert!(slots::remove(&mut contacts, &id));
    assert!(!slots::remove(&mut contacts, &id));
    assert!(!slots::remove(&mut contacts, "no-such-id"));

    slots::save_contacts(&mut pool, &contacts).expect("save");
    assert!(slots::load_contacts(&mut pool).expect("reload").is_empty());
}

#[test]
fn malformed_collection_slot_loads_empty_and_is_cleared() {
    let mut pool = open_store("store_malformed");

    slots::write_slot(&pool.conn, CONTACTS_SLOT, "{ not json [").expect("seed garbage");

    let contacts = slots::load_contacts(&mut pool).expect("load survives garbage");
    assert!(contacts.is_empty());

    // The slot was dropped, not left to fail again on the next load.
    let raw = slots::read_slot(&pool.conn, CONTACTS_SLOT).expect("read");
    assert!(raw.is_none());
}

#[test]
fn wrong_shape_slot_is_also_recovered() {
    let mut pool = open_store("store_wrong_shape");

    // Valid JSON, wrong shape: an object instead of an array.
    slots::write_slot(&pool.conn, CONTACTS_SLOT, r#"{"firstName":"Amy"}"#).expect("seed");

    let contacts = slots::load_contacts(&mut pool).expect("load");
    assert!(contacts.is_empty());
    assert!(slots::read_slot(&pool.conn, CONTACTS_SLOT).expect("read").is_none());
}

#[test]
fn contacts_persist_across_store_handles() {
    let path = setup_test_store("store_across_handles");

    {
        let mut pool = StorePool::new(&path).expect("open");
        init_store(&pool.conn).expect("init");
        let mut contacts = Vec::new();
        slots::upsert(&mut contacts, Contact::new("Nina"));
        slots::save_contacts(&mut pool, &contacts).expect("save");
    }

    let mut reopened = StorePool::new(&path).expect("reopen");
    let contacts = slots::load_contacts(&mut reopened).expect("load");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].first_name, "Nina");
}
