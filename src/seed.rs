//! Session seeding. The store lives only for one run, so every session
//! starts from either the built-in examples or a caller-supplied JSON file.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Deserialize;

use crate::db::contact_repo;
use crate::error::{BdayError, BdayResult};
use crate::model::Relationship;
use crate::ops::contact_ops;

/// Seed the built-in example contacts. Returns how many were added.
pub fn seed_examples(conn: &Connection) -> BdayResult<usize> {
    let examples: [(&str, (i32, u32, u32), Relationship, &[&str], &str); 3] = [
        (
            "Sarah Johnson",
            (2024, 6, 5),
            Relationship::Friend,
            &["photography", "traveling", "coffee"],
            "sarah@example.com",
        ),
        (
            "Mike Chen",
            (2024, 6, 8),
            Relationship::Colleague,
            &["coding", "gaming", "music"],
            "mike@example.com",
        ),
        (
            "Emma Davis",
            (2024, 6, 15),
            Relationship::Family,
            &["cooking", "reading", "yoga"],
            "emma@example.com",
        ),
    ];

    for (name, (y, m, d), relationship, interests, email) in examples {
        let birthday = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| BdayError::InvalidDate {
            value: format!("{}-{}-{}", y, m, d),
        })?;
        let interests: Vec<String> = interests.iter().map(|s| s.to_string()).collect();
        contact_ops::add_contact(conn, name, birthday, relationship, &interests, Some(email), None)?;
    }

    Ok(3)
}

/// Shape of one contact in a seed file.
#[derive(Debug, Deserialize)]
struct SeedContact {
    name: String,
    birthday: NaiveDate,
    relationship: Relationship,
    #[serde(default)]
    interests: Vec<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

/// Seed the session from a JSON array of contacts instead of the built-in
/// examples. Each entry goes through the normal intake validation; the first
/// invalid entry aborts the import. Returns how many were added.
pub fn import_contacts(conn: &Connection, json_path: &Path) -> BdayResult<usize> {
    let json_str = std::fs::read_to_string(json_path)?;
    let seeds: Vec<SeedContact> = serde_json::from_str(&json_str)?;

    let mut count = 0;
    for seed in &seeds {
        contact_ops::add_contact(
            conn,
            &seed.name,
            seed.birthday,
            seed.relationship,
            &seed.interests,
            seed.email.as_deref(),
            seed.phone.as_deref(),
        )?;
        count += 1;
    }

    Ok(count)
}
