//! One-time legacy import: decoding, preview, accept/decline and the
//! never-runs-twice guarantee.

mod common;
use common::{rolo, seed_legacy_slot, setup_test_store};

use predicates::str::contains;
use rolo::models::day::Day;
use rolo::models::legacy::LegacyContact;
use rolo::models::shift::ShiftPeriod;
use rolo::store::initialize::init_store;
use rolo::store::legacy::{
    MigrationState, migration_state, pending_legacy_import, resolve_legacy_import,
};
use rolo::store::pool::StorePool;
use rolo::store::slots::{self, LEGACY_SLOT};

const LEGACY_JSON: &str = r#"[
    {"_id": "legacy-1", "firstName": "Nina", "shifts": [0, 4], "notes": "old friend"},
    {"_id": "legacy-2", "firstName": "  Otto  ", "shifts": [20, 21, 300]},
    {"firstName": "   "},
    {"notes": "record without a name"}
]"#;

fn open_store(name: &str) -> (String, StorePool) {
    let path = setup_test_store(name);
    let pool = StorePool::new(&path).expect("open store");
    init_store(&pool.conn).expect("init store");
    (path, pool)
}

#[test]
fn legacy_shift_list_decodes_by_div_and_mod_three() {
    let legacy = LegacyContact {
        id: Some("legacy-1".to_string()),
        first_name: Some("Nina".to_string()),
        notes: None,
        shifts: Some(vec![0, 4]),
        place: None,
    };

    let contact = legacy.into_contact().expect("decodes");
    assert_eq!(contact.id, "legacy-1");

    // 0 → Monday morning, 4 → Tuesday afternoon.
    assert!(contact.shifts[&Day::Monday].contains(&ShiftPeriod::Morning));
    assert!(contact.shifts[&Day::Tuesday].contains(&ShiftPeriod::Afternoon));
    assert_eq!(contact.shifts.len(), 2);
}

#[test]
fn out_of_range_shift_indexes_are_skipped_not_fatal() {
    let legacy = LegacyContact {
        id: None,
        first_name: Some("Otto".to_string()),
        notes: None,
        shifts: Some(vec![20, 21, 300, -3]),
        place: None,
    };

    let contact = legacy.into_contact().expect("decodes");

    // 20 → Sunday evening; 21, 300 and -3 fall outside [0, 21).
    assert_eq!(contact.shifts.len(), 1);
    assert!(contact.shifts[&Day::Sunday].contains(&ShiftPeriod::Evening));
    // No stored id → a fresh one is generated.
    assert!(!contact.id.is_empty());
}

#[test]
fn records_without_a_first_name_are_dropped() {
    let legacy = LegacyContact {
        id: Some("legacy-9".to_string()),
        first_name: Some("   ".to_string()),
        notes: Some("kept nowhere".to_string()),
        shifts: None,
        place: None,
    };
    assert!(legacy.into_contact().is_none());
}

#[test]
fn preview_decodes_without_committing() {
    let (_path, mut pool) = open_store("migration_preview");
    slots::write_slot(&pool.conn, LEGACY_SLOT, LEGACY_JSON).expect("seed");

    let pending = pending_legacy_import(&mut pool).expect("pending");
    let names: Vec<&str> = pending.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Nina", "Otto"]);

    // Nothing moved: collection still empty, flag still unresolved,
    // legacy slot still in place, and a second preview sees the same data.
    assert!(slots::load_contacts(&mut pool).expect("load").is_empty());
    assert_eq!(
        migration_state(&mut pool).expect("state"),
        MigrationState::Unresolved
    );
    assert_eq!(pending_legacy_import(&mut pool).expect("again").len(), 2);
}

#[test]
fn accept_appends_sets_the_flag_and_drops_the_legacy_slot() {
    let (_path, mut pool) = open_store("migration_accept");
    slots::write_slot(&pool.conn, LEGACY_SLOT, LEGACY_JSON).expect("seed");

    let imported = resolve_legacy_import(&mut pool, true).expect("accept");
    assert_eq!(imported, 2);

    let contacts = slots::load_contacts(&mut pool).expect("load");
    assert_eq!(contacts.len(), 2);
    assert_eq!(
        migration_state(&mut pool).expect("state"),
        MigrationState::Accepted
    );
    assert!(slots::read_slot(&pool.conn, LEGACY_SLOT).expect("read").is_none());
}

#[test]
fn decline_discards_but_still_resolves() {
    let (_path, mut pool) = open_store("migration_decline");
    slots::write_slot(&pool.conn, LEGACY_SLOT, LEGACY_JSON).expect("seed");

    let imported = resolve_legacy_import(&mut pool, false).expect("decline");
    assert_eq!(imported, 0);

    assert!(slots::load_contacts(&mut pool).expect("load").is_empty());
    assert_eq!(
        migration_state(&mut pool).expect("state"),
        MigrationState::Declined
    );
    assert!(slots::read_slot(&pool.conn, LEGACY_SLOT).expect("read").is_none());
}

#[test]
fn migration_never_runs_twice_even_if_legacy_data_reappears() {
    let (_path, mut pool) = open_store("migration_idempotent");
    slots::write_slot(&pool.conn, LEGACY_SLOT, LEGACY_JSON).expect("seed");

    resolve_legacy_import(&mut pool, true).expect("accept");

    // The legacy slot coming back must not re-offer the import.
    slots::write_slot(&pool.conn, LEGACY_SLOT, LEGACY_JSON).expect("reseed");
    assert!(pending_legacy_import(&mut pool).expect("pending").is_empty());

    let again = resolve_legacy_import(&mut pool, true).expect("resolve again");
    assert_eq!(again, 0);
    assert_eq!(slots::load_contacts(&mut pool).expect("load").len(), 2);
}

#[test]
fn malformed_legacy_slot_is_dropped_and_offers_nothing() {
    let (_path, mut pool) = open_store("migration_malformed");
    slots::write_slot(&pool.conn, LEGACY_SLOT, "[{ truncated").expect("seed");

    assert!(pending_legacy_import(&mut pool).expect("pending").is_empty());
    assert!(slots::read_slot(&pool.conn, LEGACY_SLOT).expect("read").is_none());

    // The flag is untouched: only an explicit accept/decline resolves it.
    assert_eq!(
        migration_state(&mut pool).expect("state"),
        MigrationState::Unresolved
    );
}

#[test]
fn cli_import_previews_accepts_and_goes_quiet() {
    let store_path = setup_test_store("cli_import_flow");

    rolo()
        .args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    seed_legacy_slot(&store_path, LEGACY_JSON);

    rolo()
        .args(["--store", &store_path, "import"])
        .assert()
        .success()
        .stdout(contains("Found 2 contacts"))
        .stdout(contains("Nina"))
        .stdout(contains("Otto"));

    rolo()
        .args(["--store", &store_path, "import", "--accept"])
        .assert()
        .success()
        .stdout(contains("Imported 2 contacts."));

    rolo()
        .args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("Nina"))
        .stdout(contains("Otto"));

    // Resolved: a reseeded legacy slot changes nothing.
    seed_legacy_slot(&store_path, LEGACY_JSON);
    rolo()
        .args(["--store", &store_path, "import"])
        .assert()
        .success()
        .stdout(contains("No legacy contacts to import."));
}

#[test]
fn cli_import_decline_discards() {
    let store_path = setup_test_store("cli_import_decline");

    rolo()
        .args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    seed_legacy_slot(&store_path, LEGACY_JSON);

    rolo()
        .args(["--store", &store_path, "import", "--decline"])
        .assert()
        .success()
        .stdout(contains("Legacy contacts discarded."));

    rolo()
        .args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("No contacts yet"));
}
