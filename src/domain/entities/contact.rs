use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

const MAX_NAME_LENGTH: u64 = 100;
const MAX_SUBJECT_LENGTH: u64 = 200;

// ───── Database Model ───────────────────────────────────────────────

/// A message left by a site visitor. `is_read` starts false and only an
/// explicit update flips it; reads never do.
#[derive(Debug, Clone, Serialize, SimpleObject, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug)]
pub struct ContactInsert {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate, InputObject)]
#[graphql(name = "CreateContactInput")]
pub struct NewContactRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = MAX_SUBJECT_LENGTH))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateContactRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = MAX_SUBJECT_LENGTH))]
    pub subject: Option<String>,

    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: Option<String>,

    pub is_read: Option<bool>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<NewContactRequest> for ContactInsert {
    fn from(request: NewContactRequest) -> Self {
        ContactInsert {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}
