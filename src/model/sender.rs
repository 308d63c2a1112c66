use serde::{Deserialize, Serialize};

use crate::error::{BdayError, BdayResult};
use crate::validation;

/// The identity an outbound message is sent as. Both fields are required;
/// a send without them is rejected before any delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

impl Sender {
    pub fn new(name: &str, email: &str) -> BdayResult<Self> {
        let name = validation::non_blank(name, "sender name")
            .map_err(|_| BdayError::MissingSenderIdentity)?;
        let email = validation::non_blank(email, "sender email")
            .map_err(|_| BdayError::MissingSenderIdentity)?;
        Ok(Self { name, email })
    }
}
