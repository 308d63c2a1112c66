use crate::delivery::{Clipboard, EmailDelivery, OutboundEmail};
use crate::error::{BdayError, BdayResult};
use crate::message;
use crate::model::{Contact, Sender};
use crate::validation;

/// Send a birthday message to a contact through the delivery collaborator.
///
/// Aborts before any delivery attempt when the contact has no email on file
/// or the message body is blank. A delivery failure is reported as-is and
/// never retried automatically; the caller may reattempt.
pub fn send(
    contact: &Contact,
    sender: &Sender,
    body: &str,
    delivery: &dyn EmailDelivery,
) -> BdayResult<OutboundEmail> {
    let recipient_email = contact
        .email
        .clone()
        .ok_or_else(|| BdayError::MissingRecipientEmail {
            contact: contact.name.clone(),
        })?;
    let body = validation::non_blank(body, "message")?;

    let email = OutboundEmail {
        recipient_name: contact.name.clone(),
        recipient_email,
        sender_name: sender.name.clone(),
        sender_email: sender.email.clone(),
        subject: message::subject_for(contact),
        body,
    };

    delivery.send(&email)?;
    Ok(email)
}

/// Copy a generated message to the clipboard. On failure the message is
/// still on screen, so the caller just reports the error and moves on.
pub fn copy_to_clipboard(body: &str, clipboard: &dyn Clipboard) -> BdayResult<()> {
    clipboard.copy(body)
}
