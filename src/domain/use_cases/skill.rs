use validator::Validate;

use crate::{
    domain::entities::skill::{NewSkillRequest, Skill, SkillInsert, UpdateSkillRequest},
    errors::AppError,
    interfaces::repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// Creates a new skill entry
    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<Skill, AppError> {
        request.validate()?;

        let insert = SkillInsert::from(request);

        self.skill_repo.create_skill(&insert).await
    }

    /// Retrieves a skill by its ID
    pub async fn get_skill(&self, id: i64) -> Result<Skill, AppError> {
        self.skill_repo.get_skill_by_id(id).await
    }

    /// Lists all skills in insertion order
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    /// Applies a partial update; only explicitly supplied fields change
    pub async fn update_skill(
        &self,
        id: i64,
        patch: &UpdateSkillRequest,
    ) -> Result<Skill, AppError> {
        patch.validate()?;

        self.skill_repo.update_skill(id, patch).await
    }

    /// Deletes a skill by its ID
    pub async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        self.skill_repo.delete_skill(id).await
    }
}
