use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};
use validator::Validate;

const MAX_SKILL_NAME_LENGTH: u64 = 50;

/// Closed set of skill categories. Values outside this enumeration are
/// rejected at the type boundary, before anything reaches the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "skill_category", rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Design,
    Languages,
    Database,
    Frameworks,
    Tools,
    SoftSkills,
    Web,
    Mobile,
    Cloud,
    Testing,
    Analytics,
    MachineLearning,
    Security,
    Networking,
    Graphics,
    AudioVideo,
    ProjectManagement,
    Communication,
    Leadership,
    Entrepreneurship,
    DataScience,
    Automation,
    Devops,
    Blockchain,
    Robotics,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 26] = [
        SkillCategory::Programming,
        SkillCategory::Design,
        SkillCategory::Languages,
        SkillCategory::Database,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
        SkillCategory::Web,
        SkillCategory::Mobile,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Analytics,
        SkillCategory::MachineLearning,
        SkillCategory::Security,
        SkillCategory::Networking,
        SkillCategory::Graphics,
        SkillCategory::AudioVideo,
        SkillCategory::ProjectManagement,
        SkillCategory::Communication,
        SkillCategory::Leadership,
        SkillCategory::Entrepreneurship,
        SkillCategory::DataScience,
        SkillCategory::Automation,
        SkillCategory::Devops,
        SkillCategory::Blockchain,
        SkillCategory::Robotics,
    ];
}

// ───── Database Model ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, SimpleObject, sqlx::FromRow)]
pub struct Skill {
    pub id: i64,
    pub category: SkillCategory,
    pub name: String,
    /// Proficiency level, 0..=100 inclusive.
    pub percentage: i16,
}

#[derive(Debug)]
pub struct SkillInsert {
    pub category: SkillCategory,
    pub name: String,
    pub percentage: i16,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate, InputObject)]
#[graphql(name = "CreateSkillInput")]
pub struct NewSkillRequest {
    pub category: SkillCategory,

    #[validate(length(min = 1, max = MAX_SKILL_NAME_LENGTH))]
    pub name: String,

    #[validate(range(min = 0, max = 100, message = "Percentage must be between 0 and 100"))]
    pub percentage: i16,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateSkillRequest {
    pub category: Option<SkillCategory>,

    #[validate(length(min = 1, max = MAX_SKILL_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Percentage must be between 0 and 100"))]
    pub percentage: Option<i16>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<NewSkillRequest> for SkillInsert {
    fn from(request: NewSkillRequest) -> Self {
        SkillInsert {
            category: request.category,
            name: request.name,
            percentage: request.percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_percentage(percentage: i16) -> NewSkillRequest {
        NewSkillRequest {
            category: SkillCategory::Programming,
            name: "Rust".into(),
            percentage,
        }
    }

    #[test]
    fn percentage_bounds_are_inclusive() {
        assert!(request_with_percentage(0).validate().is_ok());
        assert!(request_with_percentage(100).validate().is_ok());
        assert!(request_with_percentage(-1).validate().is_err());
        assert!(request_with_percentage(101).validate().is_err());
    }

    #[test]
    fn update_percentage_bounds_also_hold() {
        let patch = UpdateSkillRequest {
            percentage: Some(101),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = UpdateSkillRequest {
            percentage: Some(100),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn category_serializes_as_snake_case() {
        for category in SkillCategory::ALL {
            let value = serde_json::to_value(category).unwrap();
            let text = value.as_str().unwrap().to_string();
            assert_eq!(text, text.to_lowercase());
            let back: SkillCategory = serde_json::from_value(value).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn unknown_category_is_rejected_at_the_boundary() {
        let result: Result<NewSkillRequest, _> = serde_json::from_value(serde_json::json!({
            "category": "astrology",
            "name": "Star charts",
            "percentage": 50
        }));
        assert!(result.is_err());
    }
}
