use crate::cli::context::CLIContext;
use crate::delivery::{EmailJsDelivery, SimulatedDelivery, SystemClipboard};
use crate::message;
use crate::model::{Contact, Sender};
use crate::ops::message_ops;

/// Generate a message for a contact, then offer regenerate/copy/send.
pub fn message(ctx: &mut CLIContext, args: &str) {
    let contact = match ctx.find_contact(args) {
        Some(c) => c,
        None => {
            if args.trim().is_empty() {
                println!("Usage: message <name>");
            }
            return;
        }
    };

    let mut rng = rand::rng();
    let mut body = message::generate(&contact, &mut rng);
    print_preview(&contact, &body);

    loop {
        let input = match ctx.prompt("[r]egenerate, [c]opy, [s]end, [d]one: ") {
            Some(s) => s.to_lowercase(),
            None => return,
        };

        match input.as_str() {
            "r" | "regenerate" => {
                body = message::generate(&contact, &mut rng);
                print_preview(&contact, &body);
            }
            "c" | "copy" => match message_ops::copy_to_clipboard(&body, &SystemClipboard) {
                Ok(()) => println!("Message copied to clipboard."),
                Err(e) => {
                    ctx.print_error(&e);
                    println!("The message is printed above for manual copy.");
                }
            },
            "s" | "send" => send(ctx, &contact, &body),
            "d" | "done" | "q" | "" => return,
            other => println!("Unknown choice: {}", other),
        }
    }
}

fn print_preview(contact: &Contact, body: &str) {
    println!();
    println!("To: {}", contact.name);
    println!("Subject: {}", message::subject_for(contact));
    println!();
    println!("{}", body);
    if contact.email.is_none() {
        println!();
        println!("(no email address on file - sending will be refused)");
    }
    println!();
}

fn send(ctx: &mut CLIContext, contact: &Contact, body: &str) {
    let sender = match sender_identity(ctx) {
        Some(s) => s,
        None => return,
    };

    // The REPL blocks until delivery finishes, so a second send for the
    // same contact cannot start while one is pending. No cancellation.
    println!("Sending...");
    let result = match EmailJsDelivery::from_env() {
        Some(delivery) => message_ops::send(contact, &sender, body, &delivery),
        None => message_ops::send(contact, &sender, body, &SimulatedDelivery::new()),
    };

    match result {
        Ok(email) => println!(
            "Birthday message sent to {} at {}",
            email.recipient_name, email.recipient_email
        ),
        Err(e) => {
            ctx.print_error(&e);
            println!("You can try sending again.");
        }
    }
}

/// The cached sender identity, prompting for it on first use.
fn sender_identity(ctx: &mut CLIContext) -> Option<Sender> {
    if let Some(sender) = &ctx.sender {
        return Some(sender.clone());
    }

    let name = ctx.prompt("Your name: ")?;
    let email = ctx.prompt("Your email: ")?;
    match Sender::new(&name, &email) {
        Ok(sender) => {
            ctx.sender = Some(sender.clone());
            Some(sender)
        }
        Err(e) => {
            ctx.print_error(&e);
            None
        }
    }
}
