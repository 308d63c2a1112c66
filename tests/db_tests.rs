use bday::db::*;
use bday::model::*;
use bday::ops::contact_ops;
use bday::seed;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn insert_and_find_by_id_roundtrips() {
    let conn = schema::test_connection();
    let mut contact = Contact::create("Alice".into(), date(1990, 5, 15), Relationship::Friend);
    contact.interests = vec!["hiking".into(), "jazz".into()];
    contact.email = Some("alice@example.com".into());
    contact.phone = Some("+1 555 0100".into());
    contact_repo::insert(&conn, &contact).unwrap();

    let found = contact_repo::find_by_id(&conn, contact.id).unwrap().unwrap();
    assert_eq!(found.name, "Alice");
    assert_eq!(found.birthday, date(1990, 5, 15));
    assert_eq!(found.relationship, Relationship::Friend);
    assert_eq!(found.interests, vec!["hiking", "jazz"]);
    assert_eq!(found.email.as_deref(), Some("alice@example.com"));
    assert_eq!(found.phone.as_deref(), Some("+1 555 0100"));
}

#[test]
fn find_by_id_returns_none_for_unknown() {
    let conn = schema::test_connection();
    assert!(contact_repo::find_by_id(&conn, ContactId::generate())
        .unwrap()
        .is_none());
}

#[test]
fn find_all_preserves_insertion_order() {
    let conn = schema::test_connection();
    for name in ["Zoe", "Adam", "Mia"] {
        let contact = Contact::create(name.into(), date(1990, 1, 1), Relationship::Friend);
        contact_repo::insert(&conn, &contact).unwrap();
    }

    let all = contact_repo::find_all(&conn).unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
}

#[test]
fn interest_order_survives_the_roundtrip() {
    let conn = schema::test_connection();
    let mut contact = Contact::create("Bea".into(), date(1990, 1, 1), Relationship::Family);
    contact.interests = vec!["c".into(), "a".into(), "b".into()];
    contact_repo::insert(&conn, &contact).unwrap();

    let found = contact_repo::find_by_id(&conn, contact.id).unwrap().unwrap();
    assert_eq!(found.interests, vec!["c", "a", "b"]);
}

#[test]
fn count_tracks_inserts() {
    let conn = schema::test_connection();
    assert_eq!(contact_repo::count(&conn).unwrap(), 0);
    contact_ops::add_contact(
        &conn,
        "Alice",
        date(1990, 1, 1),
        Relationship::Friend,
        &[],
        None,
        None,
    )
    .unwrap();
    assert_eq!(contact_repo::count(&conn).unwrap(), 1);
}

// ==========================================================================
// SEEDING
// ==========================================================================

#[test]
fn seed_examples_loads_three_contacts_in_order() {
    let conn = schema::test_connection();
    assert_eq!(seed::seed_examples(&conn).unwrap(), 3);

    let all = contact_repo::find_all(&conn).unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Johnson", "Mike Chen", "Emma Davis"]);
    assert_eq!(all[0].interests, vec!["photography", "traveling", "coffee"]);
    assert_eq!(all[1].relationship, Relationship::Colleague);
    assert_eq!(all[2].email.as_deref(), Some("emma@example.com"));
}

#[test]
fn import_contacts_reads_a_json_seed_file() {
    let conn = schema::test_connection();
    let path = std::env::temp_dir().join(format!("bday-seed-ok-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[
            {"name": "Nia", "birthday": "1993-04-12", "relationship": "Partner",
             "interests": ["chess"], "email": "nia@example.com"},
            {"name": "Odin", "birthday": "1988-11-02", "relationship": "Acquaintance"}
        ]"#,
    )
    .unwrap();

    let count = seed::import_contacts(&conn, &path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(count, 2);
    let all = contact_repo::find_all(&conn).unwrap();
    assert_eq!(all[0].name, "Nia");
    assert_eq!(all[0].interests, vec!["chess"]);
    assert_eq!(all[1].name, "Odin");
    assert!(all[1].email.is_none());
}

#[test]
fn import_contacts_rejects_malformed_json() {
    let conn = schema::test_connection();
    let path = std::env::temp_dir().join(format!("bday-seed-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{not json").unwrap();

    let result = seed::import_contacts(&conn, &path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
    assert_eq!(contact_repo::count(&conn).unwrap(), 0);
}

#[test]
fn import_contacts_stops_on_an_invalid_entry() {
    let conn = schema::test_connection();
    let path = std::env::temp_dir().join(format!("bday-seed-dup-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[
            {"name": "Pia", "birthday": "1990-01-05", "relationship": "Friend",
             "interests": ["tea", "tea"]}
        ]"#,
    )
    .unwrap();

    let result = seed::import_contacts(&conn, &path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}
