use validator::Validate;

use crate::{
    domain::entities::project::{NewProjectRequest, Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    interfaces::repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Creates a new project; the store assigns id and timestamps
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let insert = ProjectInsert::from(request);

        self.project_repo.create_project(&insert).await
    }

    /// Retrieves a project by its ID
    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo.get_project_by_id(id).await
    }

    /// Lists projects, newest-created first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Applies a partial update; only explicitly supplied fields change
    pub async fn update_project(
        &self,
        id: i64,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        patch.validate()?;

        self.project_repo.update_project(id, patch).await
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await
    }
}
