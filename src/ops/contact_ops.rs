use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::contact_repo;
use crate::error::{BdayError, BdayResult};
use crate::model::{Contact, Relationship};
use crate::validation::{self, trim_optional};

/// Add one interest to a draft interest list. Trims the value, rejects
/// blanks and case-sensitive duplicates, appends at the end.
pub fn add_interest(interests: &mut Vec<String>, value: &str) -> BdayResult<String> {
    let interest = validation::non_blank(value, "interest")?;
    if interests.contains(&interest) {
        return Err(BdayError::DuplicateInterest { interest });
    }
    interests.push(interest.clone());
    Ok(interest)
}

/// Remove an interest by exact value. Returns whether anything was removed.
/// Duplicates are disallowed, so at most one entry can match.
pub fn remove_interest(interests: &mut Vec<String>, value: &str) -> bool {
    match interests.iter().position(|i| i == value) {
        Some(pos) => {
            interests.remove(pos);
            true
        }
        None => false,
    }
}

/// Admit a new contact into the store. Name, birthday, and relationship are
/// mandatory; a validation failure leaves the store untouched. Contacts are
/// immutable once added.
pub fn add_contact(
    conn: &Connection,
    name: &str,
    birthday: NaiveDate,
    relationship: Relationship,
    interests: &[String],
    email: Option<&str>,
    phone: Option<&str>,
) -> BdayResult<Contact> {
    let valid_name = validation::non_blank(name, "name")?;

    // Re-run the interest rules so the no-duplicates invariant holds even
    // for callers that bypassed the draft flow.
    let mut valid_interests = Vec::new();
    for interest in interests {
        add_interest(&mut valid_interests, interest)?;
    }

    let mut contact = Contact::create(valid_name, birthday, relationship);
    contact.interests = valid_interests;
    contact.email = trim_optional(email);
    contact.phone = trim_optional(phone);

    contact_repo::insert(conn, &contact)?;
    Ok(contact)
}
