use chrono::Local;
use rusqlite::Connection;
use std::io::{self, Write};

use crate::model::{Contact, Sender};
use crate::queries::contact_queries;

pub struct CLIContext {
    pub conn: Connection,
    /// Sender identity, prompted once per session and reused for every send.
    pub sender: Option<Sender>,
}

impl CLIContext {
    pub fn new(conn: Connection) -> Self {
        Self { conn, sender: None }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a contact by name query. Prints an error if nothing matches or
    /// the query is ambiguous.
    pub fn find_contact(&self, args: &str) -> Option<Contact> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = contact_queries::find_by_name(&self.conn, query).unwrap_or_default();

        match matches.len() {
            0 => {
                println!("No contact found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|c| c.name.eq_ignore_ascii_case(query)) {
                    return Some(exact.clone());
                }
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {}", c.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::BdayError) {
        println!("Error: {}", e);
    }
}
