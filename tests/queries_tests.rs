use bday::birthday;
use bday::db::*;
use bday::model::*;
use bday::ops::contact_ops;
use bday::queries::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add(conn: &rusqlite::Connection, name: &str, birthday: NaiveDate) -> Contact {
    contact_ops::add_contact(conn, name, birthday, Relationship::Friend, &[], None, None).unwrap()
}

// Reference date for every digest test.
const TODAY: (i32, u32, u32) = (2024, 6, 1);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

// ==========================================================================
// UPCOMING DIGEST
// ==========================================================================

#[test]
fn digest_includes_the_full_inclusive_window() {
    let conn = schema::test_connection();
    add(&conn, "Today", date(1990, 6, 1));
    add(&conn, "Tomorrow", date(1990, 6, 2));
    add(&conn, "Edge", date(1990, 6, 8));
    add(&conn, "Beyond", date(1990, 6, 9));
    add(&conn, "LastWeek", date(1990, 5, 25));

    let digest = digest_queries::upcoming_birthdays(&conn, today()).unwrap();
    let names: Vec<&str> = digest.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Today", "Tomorrow", "Edge"]);
}

#[test]
fn digest_membership_matches_days_until() {
    let conn = schema::test_connection();
    // Birthdays scattered through the year.
    for (i, offset) in [0u32, 3, 7, 8, 40, 200].iter().enumerate() {
        let birthday = today() + chrono::Days::new(u64::from(*offset));
        add(&conn, &format!("c{}", i), birthday);
    }

    let digest = digest_queries::upcoming_birthdays(&conn, today()).unwrap();
    let all = contact_queries::all_contacts(&conn).unwrap();
    for contact in &all {
        let days = birthday::days_until(contact.birthday, today());
        let in_digest = digest.iter().any(|c| c.id == contact.id);
        assert_eq!(in_digest, days <= 7, "{} ({} days)", contact.name, days);
    }
}

#[test]
fn digest_preserves_insertion_order_not_proximity() {
    let conn = schema::test_connection();
    add(&conn, "Far", date(1990, 6, 7));
    add(&conn, "Near", date(1990, 6, 2));

    let digest = digest_queries::upcoming_birthdays(&conn, today()).unwrap();
    let names: Vec<&str> = digest.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Far", "Near"]);
}

#[test]
fn digest_rolls_over_the_year_boundary() {
    let conn = schema::test_connection();
    add(&conn, "NewYear", date(1990, 1, 2));

    let digest = digest_queries::upcoming_birthdays(&conn, date(2024, 12, 30)).unwrap();
    assert_eq!(digest.len(), 1);
}

#[test]
fn digest_is_empty_without_near_birthdays() {
    let conn = schema::test_connection();
    add(&conn, "Distant", date(1990, 12, 25));

    assert!(digest_queries::upcoming_birthdays(&conn, today())
        .unwrap()
        .is_empty());
}

// ==========================================================================
// LOOKUPS & STATS
// ==========================================================================

#[test]
fn find_by_name_is_case_insensitive_substring() {
    let conn = schema::test_connection();
    add(&conn, "Sarah Johnson", date(1990, 6, 5));
    add(&conn, "Mike Chen", date(1990, 6, 8));

    let results = contact_queries::find_by_name(&conn, "sarah").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Sarah Johnson");

    assert!(contact_queries::find_by_name(&conn, "nobody").unwrap().is_empty());
}

#[test]
fn stats_counts_contacts_and_upcoming() {
    let conn = schema::test_connection();
    add(&conn, "Soon", date(1990, 6, 3));
    add(&conn, "Later", date(1990, 9, 3));

    let stats = digest_queries::stats(&conn, today()).unwrap();
    assert_eq!(stats.total_contacts, 2);
    assert_eq!(stats.upcoming_birthdays, 1);
}
