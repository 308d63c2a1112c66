//! External collaborators: email delivery and the system clipboard.
//!
//! Delivery is a trait so the operations layer never knows whether it is
//! talking to the simulated sender (the default) or a real mail service.

use serde::Serialize;
use std::env;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use crate::error::{BdayError, BdayResult};

/// Everything a mail service needs to deliver one birthday message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub recipient_name: String,
    pub recipient_email: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

pub trait EmailDelivery {
    fn send(&self, email: &OutboundEmail) -> BdayResult<()>;
}

/// Stand-in delivery: waits a fixed artificial delay, logs the payload, and
/// reports success. Nothing leaves the machine.
pub struct SimulatedDelivery {
    pub delay: Duration,
}

impl SimulatedDelivery {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }

    /// Zero-delay variant for tests.
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailDelivery for SimulatedDelivery {
    fn send(&self, email: &OutboundEmail) -> BdayResult<()> {
        thread::sleep(self.delay);
        println!(
            "[simulated send] {} <{}> -> {} <{}>: {}",
            email.sender_name,
            email.sender_email,
            email.recipient_name,
            email.recipient_email,
            email.subject,
        );
        Ok(())
    }
}

const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Real delivery through the EmailJS REST API. Only used when the service
/// credentials are present in the environment.
pub struct EmailJsDelivery {
    service_id: String,
    template_id: String,
    user_id: String,
}

impl EmailJsDelivery {
    /// Build from `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, and
    /// `EMAILJS_USER_ID`. Returns None unless all three are set.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            service_id: env::var("EMAILJS_SERVICE_ID").ok()?,
            template_id: env::var("EMAILJS_TEMPLATE_ID").ok()?,
            user_id: env::var("EMAILJS_USER_ID").ok()?,
        })
    }
}

impl EmailDelivery for EmailJsDelivery {
    fn send(&self, email: &OutboundEmail) -> BdayResult<()> {
        let request_body = serde_json::json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.user_id,
            "template_params": {
                "to_name": email.recipient_name,
                "to_email": email.recipient_email,
                "from_name": email.sender_name,
                "from_email": email.sender_email,
                "subject": email.subject,
                "message": email.body,
            },
        });

        ureq::post(EMAILJS_API_URL)
            .set("Content-Type", "application/json")
            .timeout(Duration::from_secs(10))
            .send_json(request_body)
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    BdayError::Delivery {
                        reason: format!(
                            "EmailJS returned HTTP {}: {}",
                            code,
                            truncated(&body, 200)
                        ),
                    }
                }
                ureq::Error::Transport(t) => BdayError::Delivery {
                    reason: t.to_string(),
                },
            })?;
        Ok(())
    }
}

/// At most `limit` bytes of `text`, cut on a char boundary so multibyte
/// error bodies never panic the failure report.
fn truncated(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> BdayResult<()>;
}

/// Copies through whichever platform clipboard tool is on PATH.
pub struct SystemClipboard;

const CLIPBOARD_TOOLS: [(&str, &[&str]); 4] = [
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> BdayResult<()> {
        for (tool, args) in CLIPBOARD_TOOLS {
            let spawned = Command::new(tool)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(c) => c,
                Err(_) => continue,
            };

            if let Some(mut stdin) = child.stdin.take() {
                if stdin.write_all(text.as_bytes()).is_err() {
                    continue;
                }
            }

            match child.wait() {
                Ok(status) if status.success() => return Ok(()),
                _ => continue,
            }
        }

        Err(BdayError::Clipboard {
            reason: "no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel)".into(),
        })
    }
}
