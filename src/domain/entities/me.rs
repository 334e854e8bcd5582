use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{
    option_fields::OptionField,
    validation::{validate_phone, validate_url, validate_url_field},
};

const MAX_NAME_LENGTH: u64 = 50;
const MAX_PHONE_LENGTH: u64 = 50;
const MAX_LINK_LENGTH: u64 = 150;

// ───── Database Model ───────────────────────────────────────────────

/// The site owner's profile. Multiple records are allowed; each is
/// independently lifecycled.
#[derive(Debug, Clone, Serialize, SimpleObject, sqlx::FromRow)]
pub struct Me {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub telegram: Option<String>,
    pub education: Option<String>,
    pub work_history: Option<String>,
}

#[derive(Debug)]
pub struct MeInsert {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub telegram: Option<String>,
    pub education: Option<String>,
    pub work_history: Option<String>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate, InputObject)]
#[graphql(name = "CreateMeInput")]
pub struct NewMeRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 3, max = MAX_PHONE_LENGTH), custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url"))]
    pub instagram: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url"))]
    pub github: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url"))]
    pub linkedin: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url"))]
    pub telegram: Option<String>,

    pub education: Option<String>,
    pub work_history: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateMeRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 3, max = MAX_PHONE_LENGTH), custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url_field"))]
    pub instagram: OptionField<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url_field"))]
    pub github: OptionField<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url_field"))]
    pub linkedin: OptionField<String>,

    #[validate(length(max = MAX_LINK_LENGTH), custom(function = "validate_url_field"))]
    pub telegram: OptionField<String>,

    pub education: OptionField<String>,
    pub work_history: OptionField<String>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<NewMeRequest> for MeInsert {
    fn from(request: NewMeRequest) -> Self {
        MeInsert {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            instagram: request.instagram,
            github: request.github,
            linkedin: request.linkedin,
            telegram: request.telegram,
            education: request.education,
            work_history: request.work_history,
        }
    }
}
