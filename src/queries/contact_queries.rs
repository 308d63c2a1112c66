use rusqlite::Connection;

use crate::db::contact_repo;
use crate::error::BdayResult;
use crate::model::Contact;

/// All contacts, in insertion order.
pub fn all_contacts(conn: &Connection) -> BdayResult<Vec<Contact>> {
    contact_repo::find_all(conn)
}

/// Case-insensitive substring match on the name, insertion order preserved.
pub fn find_by_name(conn: &Connection, query: &str) -> BdayResult<Vec<Contact>> {
    let lower = query.trim().to_lowercase();
    let contacts = contact_repo::find_all(conn)?;
    Ok(contacts
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&lower))
        .collect())
}
