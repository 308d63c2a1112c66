use rusqlite::{params, Connection};
use std::str::FromStr;

use crate::error::{BdayError, BdayResult};
use crate::model::{Contact, ContactId, Relationship};

/// Append a contact to the store. The store is append-only: there is no
/// update or delete.
pub fn insert(conn: &Connection, contact: &Contact) -> BdayResult<()> {
    conn.execute(
        "INSERT INTO contacts (id, name, birthday, relationship, email, phone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            contact.id.to_string(),
            contact.name,
            contact.birthday.to_string(),
            contact.relationship.as_str(),
            contact.email,
            contact.phone,
        ],
    )?;

    for (position, interest) in contact.interests.iter().enumerate() {
        conn.execute(
            "INSERT INTO contact_interests (contact_id, position, interest)
             VALUES (?1, ?2, ?3)",
            params![contact.id.to_string(), position as i64, interest],
        )?;
    }

    Ok(())
}

pub fn find_by_id(conn: &Connection, id: ContactId) -> BdayResult<Option<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, birthday, relationship, email, phone
         FROM contacts WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.to_string()], row_to_contact);

    match result {
        Ok(contact) => {
            let mut contact = contact?;
            contact.interests = interests_for(conn, contact.id)?;
            Ok(Some(contact))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All contacts in insertion order.
pub fn find_all(conn: &Connection) -> BdayResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, birthday, relationship, email, phone
         FROM contacts ORDER BY rowid",
    )?;

    let contacts = stmt
        .query_map([], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(contacts.len());
    for mut contact in contacts {
        contact.interests = interests_for(conn, contact.id)?;
        out.push(contact);
    }
    Ok(out)
}

pub fn count(conn: &Connection) -> BdayResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn interests_for(conn: &Connection, id: ContactId) -> BdayResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT interest FROM contact_interests WHERE contact_id = ?1 ORDER BY position",
    )?;
    let interests = stmt
        .query_map(params![id.to_string()], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(interests)
}

fn row_to_contact(row: &rusqlite::Row) -> Result<BdayResult<Contact>, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let birthday_str: String = row.get(2)?;
    let relationship_str: String = row.get(3)?;

    Ok(build_contact(
        id_str,
        row.get(1)?,
        birthday_str,
        relationship_str,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn build_contact(
    id_str: String,
    name: String,
    birthday_str: String,
    relationship_str: String,
    email: Option<String>,
    phone: Option<String>,
) -> BdayResult<Contact> {
    Ok(Contact {
        id: ContactId::parse(&id_str)
            .map_err(|e| BdayError::Other(format!("Invalid UUID: {}", e)))?,
        name,
        birthday: chrono::NaiveDate::parse_from_str(&birthday_str, "%Y-%m-%d").map_err(|_| {
            BdayError::InvalidDate {
                value: birthday_str,
            }
        })?,
        relationship: Relationship::from_str(&relationship_str)?,
        interests: Vec::new(),
        email,
        phone,
    })
}
