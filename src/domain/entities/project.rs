use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{
    option_fields::OptionField,
    validation::{validate_url, validate_url_field},
};

const MAX_TITLE_LENGTH: u64 = 150;
const MAX_URL_LENGTH: u64 = 200;
const MAX_TECHNOLOGIES_LENGTH: u64 = 100;
const MAX_ATTACHMENT_LENGTH: u64 = 200;

// ───── Database Model ───────────────────────────────────────────────

/// A portfolio project. `created_at` is written once by the store and
/// never changes; `updated_at` is touched on every successful mutation.
/// `file` and `image` are opaque references into external media storage.
#[derive(Debug, Clone, Serialize, SimpleObject, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub url: Option<String>,
    pub repository: Option<String>,
    pub technologies_used: Option<String>,
    pub file: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub url: Option<String>,
    pub repository: Option<String>,
    pub technologies_used: Option<String>,
    pub file: Option<String>,
    pub image: Option<String>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate, InputObject)]
#[graphql(name = "CreateProjectInput")]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_url"))]
    pub url: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_url"))]
    pub repository: Option<String>,

    #[validate(length(max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies_used: Option<String>,

    #[validate(length(max = MAX_ATTACHMENT_LENGTH))]
    pub file: Option<String>,

    #[validate(length(max = MAX_ATTACHMENT_LENGTH))]
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: OptionField<NaiveDate>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_url_field"))]
    pub url: OptionField<String>,

    #[validate(length(max = MAX_URL_LENGTH), custom(function = "validate_url_field"))]
    pub repository: OptionField<String>,

    #[validate(length(max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies_used: OptionField<String>,

    #[validate(length(max = MAX_ATTACHMENT_LENGTH))]
    pub file: OptionField<String>,

    #[validate(length(max = MAX_ATTACHMENT_LENGTH))]
    pub image: OptionField<String>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<NewProjectRequest> for ProjectInsert {
    fn from(request: NewProjectRequest) -> Self {
        ProjectInsert {
            title: request.title,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            url: request.url,
            repository: request.repository,
            technologies_used: request.technologies_used,
            file: request.file,
            image: request.image,
        }
    }
}
