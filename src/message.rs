//! Birthday message generation.
//!
//! A fixed, hand-written set of templates; "generation" is a uniform draw
//! from that set with the contact's name, relationship, and interests
//! interpolated. The random source is a parameter so callers (and tests)
//! control determinism.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::Contact;

type Template = fn(&Contact) -> String;

/// The full template set, in authored order. Selection does not track
/// history, so consecutive draws may repeat.
pub const TEMPLATES: [Template; 4] = [joyful, wishing, incredible, celebration];

/// Subject line used for outbound birthday mail.
pub fn subject_for(contact: &Contact) -> String {
    format!("🎉 Happy Birthday {}!", contact.name)
}

/// Pick one template uniformly at random and render it for the contact.
pub fn generate<R: Rng + ?Sized>(contact: &Contact, rng: &mut R) -> String {
    let template = TEMPLATES
        .choose(rng)
        .expect("template set is never empty");
    template(contact)
}

/// First interest, or a template-specific fallback phrase.
fn first_interest<'a>(contact: &'a Contact, fallback: &'a str) -> &'a str {
    contact
        .interests
        .first()
        .map(String::as_str)
        .unwrap_or(fallback)
}

/// First two interests joined with "and", or a fallback when there are none.
fn leading_interests(contact: &Contact, fallback: &str) -> String {
    if contact.interests.is_empty() {
        fallback.to_string()
    } else {
        contact.interests[..contact.interests.len().min(2)].join(" and ")
    }
}

fn joyful(c: &Contact) -> String {
    format!(
        "🎉 Happy Birthday, {}! 🎂 Hope your special day is filled with joy and all your \
         favorite things. As someone who loves {}, I know you'll make this year amazing! \
         Have a wonderful celebration! 🎈",
        c.name,
        first_interest(c, "life"),
    )
}

fn wishing(c: &Contact) -> String {
    format!(
        "Hey {}! 🎊 Wishing you the happiest of birthdays! May this new year bring you \
         endless opportunities to enjoy {}. You deserve all the happiness in the world! 🌟",
        c.name,
        leading_interests(c, "all the things you love"),
    )
}

fn incredible(c: &Contact) -> String {
    format!(
        "Happy Birthday to an incredible {}! 🎁 {}, I hope your day is as special as you \
         are. Here's to another year of {} and making beautiful memories! Celebrate big! 🥳",
        c.relationship.lowercase(),
        c.name,
        first_interest(c, "adventures"),
    )
}

fn celebration(c: &Contact) -> String {
    format!(
        "🎂 It's {}'s birthday! 🎉 Sending you warm wishes and hoping your day is filled \
         with laughter, love, and everything that makes you smile. Your passion for {} \
         inspires everyone around you! Have an amazing day! ✨",
        c.name,
        leading_interests(c, "life"),
    )
}
