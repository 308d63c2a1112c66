use chrono::NaiveDate;
use rusqlite::Connection;

use crate::birthday;
use crate::db::contact_repo;
use crate::error::BdayResult;
use crate::model::Contact;

/// Dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_contacts: usize,
    pub upcoming_birthdays: usize,
}

/// Contacts whose next birthday falls within `[today, today + 7]`,
/// inclusive. Shares the next-occurrence computation with the per-contact
/// display, so anyone shown as "Today" or "Tomorrow" is always in here.
/// Ordering is insertion order, not proximity.
pub fn upcoming_birthdays(conn: &Connection, today: NaiveDate) -> BdayResult<Vec<Contact>> {
    let contacts = contact_repo::find_all(conn)?;
    Ok(contacts
        .into_iter()
        .filter(|c| birthday::is_upcoming(c.birthday, today))
        .collect())
}

pub fn stats(conn: &Connection, today: NaiveDate) -> BdayResult<Stats> {
    Ok(Stats {
        total_contacts: contact_repo::count(conn)?,
        upcoming_birthdays: upcoming_birthdays(conn, today)?.len(),
    })
}
