use async_graphql::{InputObject, MaybeUndefined};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{
    contact::UpdateContactRequest,
    me::UpdateMeRequest,
    pricing::UpdatePricingRequest,
    project::UpdateProjectRequest,
    skill::{SkillCategory, UpdateSkillRequest},
};

// Update inputs carry every mutable field as an explicit optional slot.
// For nullable columns `MaybeUndefined` keeps "absent" (keep stored
// value) distinct from an explicit null (clear); non-nullable fields use
// plain `Option` where absent and null both mean "keep".

#[derive(Debug, InputObject)]
pub struct UpdateMeInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub instagram: MaybeUndefined<String>,
    pub github: MaybeUndefined<String>,
    pub linkedin: MaybeUndefined<String>,
    pub telegram: MaybeUndefined<String>,
    pub education: MaybeUndefined<String>,
    pub work_history: MaybeUndefined<String>,
}

impl From<UpdateMeInput> for UpdateMeRequest {
    fn from(input: UpdateMeInput) -> Self {
        UpdateMeRequest {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            instagram: input.instagram.into(),
            github: input.github.into(),
            linkedin: input.linkedin.into(),
            telegram: input.telegram.into(),
            education: input.education.into(),
            work_history: input.work_history.into(),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: MaybeUndefined<NaiveDate>,
    pub url: MaybeUndefined<String>,
    pub repository: MaybeUndefined<String>,
    pub technologies_used: MaybeUndefined<String>,
    pub file: MaybeUndefined<String>,
    pub image: MaybeUndefined<String>,
}

impl From<UpdateProjectInput> for UpdateProjectRequest {
    fn from(input: UpdateProjectInput) -> Self {
        UpdateProjectRequest {
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date.into(),
            url: input.url.into(),
            repository: input.repository.into(),
            technologies_used: input.technologies_used.into(),
            file: input.file.into(),
            image: input.image.into(),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdateSkillInput {
    pub category: Option<SkillCategory>,
    pub name: Option<String>,
    pub percentage: Option<i16>,
}

impl From<UpdateSkillInput> for UpdateSkillRequest {
    fn from(input: UpdateSkillInput) -> Self {
        UpdateSkillRequest {
            category: input.category,
            name: input.name,
            percentage: input.percentage,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdatePricingInput {
    pub service: Option<String>,
    pub description: Option<String>,
    pub rate_per_hour: Option<Decimal>,
    pub estimated_hours: Option<Decimal>,
}

impl From<UpdatePricingInput> for UpdatePricingRequest {
    fn from(input: UpdatePricingInput) -> Self {
        UpdatePricingRequest {
            service: input.service,
            description: input.description,
            rate_per_hour: input.rate_per_hour,
            estimated_hours: input.estimated_hours,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdateContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub is_read: Option<bool>,
}

impl From<UpdateContactInput> for UpdateContactRequest {
    fn from(input: UpdateContactInput) -> Self {
        UpdateContactRequest {
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            is_read: input.is_read,
        }
    }
}
