pub mod context;
pub mod contact_commands;
pub mod digest_commands;
pub mod message_commands;

use std::path::Path;

use context::CLIContext;

use crate::db::schema;
use crate::seed;

/// Run the interactive REPL over a fresh in-memory session.
pub fn run(seed_path: Option<&Path>) {
    println!("bday - birthday reminders & messages");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match schema::open_session() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening session store: {}", e);
            return;
        }
    };

    let seeded = match seed_path {
        Some(path) => seed::import_contacts(&conn, path),
        None => seed::seed_examples(&conn),
    };
    match seeded {
        Ok(count) => println!("Loaded {} contacts.", count),
        Err(e) => {
            eprintln!("Error seeding contacts: {}", e);
            return;
        }
    }
    println!();

    let mut ctx = CLIContext::new(conn);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Contacts
            "contacts" | "list" | "ls" => contact_commands::list(ctx),
            "add-contact" | "add" => {
                contact_commands::add(ctx, args);
            }
            "show" | "view" => contact_commands::show(ctx, args),
            "find" => contact_commands::find(ctx, args),

            // Birthdays
            "upcoming" | "digest" => digest_commands::upcoming(ctx),
            "reminders" | "remind" => digest_commands::reminders(ctx),

            // Messages
            "message" | "msg" => message_commands::message(ctx, args),

            // Other
            "stats" => digest_commands::stats(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(
        r#"
COMMANDS:

  Contacts:
    contacts                List all contacts
    add-contact [name]      Add a new contact (interactive)
    show <name>             Show contact details
    find <query>            Search contacts by name

  Birthdays:
    upcoming                Birthdays in the next 7 days
    reminders               Countdown for every contact

  Messages:
    message <name>          Generate a birthday message, then copy or send

  Other:
    stats                   Show totals
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - Contacts live only for this session; seed a file with --seed"#
    );
}
