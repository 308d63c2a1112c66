use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

use crate::birthday;
use crate::cli::context::CLIContext;
use crate::model::{Contact, Relationship};
use crate::ops::contact_ops;
use crate::queries::contact_queries;

/// "June 5" — the year is display noise since only month/day recur.
fn month_day(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.day())
}

pub fn list(ctx: &CLIContext) {
    let contacts = contact_queries::all_contacts(&ctx.conn).unwrap_or_default();
    if contacts.is_empty() {
        println!("No contacts yet. Use 'add-contact' to add someone.");
        return;
    }

    let today = CLIContext::today();
    println!("Contacts ({}):", contacts.len());
    println!();
    for contact in &contacts {
        println!(
            "  {} ({}) - {} - {}",
            contact.name,
            contact.relationship,
            month_day(contact.birthday),
            birthday::classify(contact.birthday, today),
        );
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    let contact = match ctx.find_contact(args) {
        Some(c) => c,
        None => {
            if args.trim().is_empty() {
                println!("Usage: show <name>");
            }
            return;
        }
    };

    let today = CLIContext::today();
    println!();
    println!("{}", contact.name);
    println!("  Relationship: {}", contact.relationship);
    println!(
        "  Birthday: {} ({})",
        month_day(contact.birthday),
        birthday::classify(contact.birthday, today),
    );
    if !contact.interests.is_empty() {
        println!("  Interests: {}", contact.interests.join(", "));
    }
    if let Some(email) = &contact.email {
        println!("  Email: {}", email);
    }
    if let Some(phone) = &contact.phone {
        println!("  Phone: {}", phone);
    }
}

pub fn find(ctx: &CLIContext, args: &str) {
    if args.trim().is_empty() {
        println!("Usage: find <query>");
        return;
    }

    let matches = contact_queries::find_by_name(&ctx.conn, args).unwrap_or_default();
    if matches.is_empty() {
        println!("No contact found matching '{}'", args.trim());
        return;
    }

    for contact in &matches {
        println!("  {} ({})", contact.name, contact.relationship);
    }
}

/// Interactive intake. All mandatory fields are collected before anything
/// touches the store, so an abandoned or invalid draft leaves it unchanged.
pub fn add(ctx: &CLIContext, args: &str) -> Option<Contact> {
    println!("Adding a new contact (press Enter to skip optional fields)");
    println!();

    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name (required): ") {
            Some(s) if s.is_empty() => {
                println!("Name is required.");
                return None;
            }
            Some(s) => s,
            None => return None,
        }
    };

    let birthday = loop {
        let input = ctx.prompt("Birthday (YYYY-MM-DD, required): ")?;
        if input.is_empty() {
            println!("Birthday is required.");
            return None;
        }
        match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
            Ok(date) => break date,
            Err(_) => println!("Not a valid date: {}", input),
        }
    };

    let options: Vec<&str> = Relationship::ALL.iter().map(|r| r.as_str()).collect();
    let relationship = loop {
        let input = ctx.prompt(&format!("Relationship ({}, required): ", options.join("/")))?;
        if input.is_empty() {
            println!("Relationship is required.");
            return None;
        }
        match Relationship::from_str(&input) {
            Ok(r) => break r,
            Err(e) => ctx.print_error(&e),
        }
    };

    let email = ctx.prompt("Email: ")?;
    let phone = ctx.prompt("Phone: ")?;

    let mut interests = Vec::new();
    println!("Interests (blank to finish, '-value' to remove one):");
    loop {
        let input = ctx.prompt("  Interest: ")?;
        if input.is_empty() {
            break;
        }
        if let Some(value) = input.strip_prefix('-') {
            if !contact_ops::remove_interest(&mut interests, value.trim()) {
                println!("  No such interest: {}", value.trim());
            }
            continue;
        }
        match contact_ops::add_interest(&mut interests, &input) {
            Ok(added) => println!("  Added: {}", added),
            Err(e) => ctx.print_error(&e),
        }
    }

    match contact_ops::add_contact(
        &ctx.conn,
        &name,
        birthday,
        relationship,
        &interests,
        Some(email.as_str()),
        Some(phone.as_str()),
    ) {
        Ok(contact) => {
            println!("Added {}", contact.name);
            Some(contact)
        }
        Err(e) => {
            ctx.print_error(&e);
            None
        }
    }
}
