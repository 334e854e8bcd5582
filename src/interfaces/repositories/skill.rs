use std::sync::Arc;

use async_trait::async_trait;
use sqlx::QueryBuilder;

use crate::{
    domain::entities::skill::{Skill, SkillInsert, UpdateSkillRequest},
    errors::AppError,
    interfaces::repositories::sqlx_repo::{push_patch_field, SqlxRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, insert: &SkillInsert) -> Result<Skill, AppError>;
    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn update_skill(&self, id: i64, patch: &UpdateSkillRequest) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl<R: SkillRepository + ?Sized> SkillRepository for Arc<R> {
    async fn create_skill(&self, insert: &SkillInsert) -> Result<Skill, AppError> {
        (**self).create_skill(insert).await
    }
    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError> {
        (**self).get_skill_by_id(id).await
    }
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        (**self).list_skills().await
    }
    async fn update_skill(&self, id: i64, patch: &UpdateSkillRequest) -> Result<Skill, AppError> {
        (**self).update_skill(id, patch).await
    }
    async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        (**self).delete_skill(id).await
    }
}

#[async_trait]
impl SkillRepository for SqlxRepo {
    async fn create_skill(&self, insert: &SkillInsert) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (category, name, percentage)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(insert.category)
        .bind(&insert.name)
        .bind(insert.percentage)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill)
    }

    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Skill", id))
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn update_skill(&self, id: i64, patch: &UpdateSkillRequest) -> Result<Skill, AppError> {
        let mut qb = QueryBuilder::new("UPDATE skills SET id = id");

        push_patch_field!(qb, "category", &patch.category);
        push_patch_field!(qb, "name", &patch.name);
        push_patch_field!(qb, "percentage", &patch.percentage);

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Skill>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Skill", id))
    }

    async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::not_found("Skill", id))
        } else {
            Ok(())
        }
    }
}
