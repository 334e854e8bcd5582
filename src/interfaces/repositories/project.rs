use std::sync::Arc;

use async_trait::async_trait;
use sqlx::QueryBuilder;

use crate::{
    domain::entities::project::{Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    interfaces::repositories::sqlx_repo::{push_patch_field, push_patch_slot, SqlxRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError>;
    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError>;
    /// Newest-created first, regardless of the projects' start dates.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn update_project(&self, id: i64, patch: &UpdateProjectRequest)
        -> Result<Project, AppError>;
    async fn delete_project(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl<R: ProjectRepository + ?Sized> ProjectRepository for Arc<R> {
    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError> {
        (**self).create_project(insert).await
    }
    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError> {
        (**self).get_project_by_id(id).await
    }
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        (**self).list_projects().await
    }
    async fn update_project(
        &self,
        id: i64,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        (**self).update_project(id, patch).await
    }
    async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        (**self).delete_project(id).await
    }
}

#[async_trait]
impl ProjectRepository for SqlxRepo {
    async fn create_project(&self, insert: &ProjectInsert) -> Result<Project, AppError> {
        // created_at/updated_at come from the table defaults, not the caller
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, description, start_date, end_date,
                url, repository, technologies_used, file, image
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&insert.title)
        .bind(&insert.description)
        .bind(insert.start_date)
        .bind(insert.end_date)
        .bind(&insert.url)
        .bind(&insert.repository)
        .bind(&insert.technologies_used)
        .bind(&insert.file)
        .bind(&insert.image)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Project", id))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn update_project(
        &self,
        id: i64,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        // updated_at is touched on every successful mutation, even an
        // empty patch; created_at is never written here.
        let mut qb = QueryBuilder::new("UPDATE projects SET updated_at = NOW()");

        push_patch_field!(qb, "title", &patch.title);
        push_patch_field!(qb, "description", &patch.description);
        push_patch_field!(qb, "start_date", &patch.start_date);
        push_patch_slot!(qb, "end_date", &patch.end_date);
        push_patch_slot!(qb, "url", &patch.url);
        push_patch_slot!(qb, "repository", &patch.repository);
        push_patch_slot!(qb, "technologies_used", &patch.technologies_used);
        push_patch_slot!(qb, "file", &patch.file);
        push_patch_slot!(qb, "image", &patch.image);

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Project>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Project", id))
    }

    async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::not_found("Project", id))
        } else {
            Ok(())
        }
    }
}
