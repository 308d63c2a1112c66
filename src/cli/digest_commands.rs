use chrono::Datelike;

use crate::birthday;
use crate::cli::context::CLIContext;
use crate::queries::digest_queries;

/// The 7-day digest: the dashboard's "Upcoming Birthdays" panel.
pub fn upcoming(ctx: &CLIContext) {
    let today = CLIContext::today();
    let upcoming = digest_queries::upcoming_birthdays(&ctx.conn, today).unwrap_or_default();

    if upcoming.is_empty() {
        println!("No birthdays in the next 7 days");
        return;
    }

    println!("Birthdays coming up in the next 7 days:");
    println!();
    for contact in &upcoming {
        println!(
            "  {} - {} ({})",
            contact.name,
            birthday::classify(contact.birthday, today),
            contact.relationship,
        );
    }
}

/// Every contact with their next-birthday countdown, store order.
pub fn reminders(ctx: &CLIContext) {
    let today = CLIContext::today();
    let contacts = crate::queries::contact_queries::all_contacts(&ctx.conn).unwrap_or_default();

    if contacts.is_empty() {
        println!("No contacts yet. Use 'add-contact' to add someone.");
        return;
    }

    println!("Birthday reminders:");
    println!();
    for contact in &contacts {
        let next = birthday::next_occurrence(contact.birthday, today);
        println!(
            "  {} - {} {} - {}",
            contact.name,
            next.format("%B"),
            next.day(),
            birthday::classify(contact.birthday, today),
        );
    }
}

pub fn stats(ctx: &CLIContext) {
    match digest_queries::stats(&ctx.conn, CLIContext::today()) {
        Ok(s) => {
            println!();
            println!("Total contacts: {}", s.total_contacts);
            println!("Upcoming birthdays: {}", s.upcoming_birthdays);
        }
        Err(e) => ctx.print_error(&e),
    }
}
