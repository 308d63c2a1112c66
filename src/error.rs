use thiserror::Error;

#[derive(Debug, Error)]
pub enum BdayError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Not a valid date: {value}")]
    InvalidDate { value: String },

    #[error("Unknown relationship: {value}")]
    UnknownRelationship { value: String },

    #[error("Interest already added: {interest}")]
    DuplicateInterest { interest: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{contact} has no email address on file")]
    MissingRecipientEmail { contact: String },

    #[error("Sender name and email are required before sending")]
    MissingSenderIdentity,

    #[error("Delivery failed: {reason}")]
    Delivery { reason: String },

    #[error("Clipboard copy failed: {reason}")]
    Clipboard { reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type BdayResult<T> = Result<T, BdayError>;
