use validator::Validate;

use crate::{
    domain::entities::me::{Me, MeInsert, NewMeRequest, UpdateMeRequest},
    errors::AppError,
    interfaces::repositories::me::MeRepository,
};

pub struct MeHandler<R>
where
    R: MeRepository,
{
    pub me_repo: R,
}

impl<R> MeHandler<R>
where
    R: MeRepository,
{
    pub fn new(me_repo: R) -> Self {
        MeHandler { me_repo }
    }

    /// Creates a profile record from the provided fields
    pub async fn create_me(&self, request: NewMeRequest) -> Result<Me, AppError> {
        request.validate()?;

        let insert = MeInsert::from(request);

        self.me_repo.create_me(&insert).await
    }

    /// Retrieves a profile by its ID
    pub async fn get_me(&self, id: i64) -> Result<Me, AppError> {
        self.me_repo.get_me_by_id(id).await
    }

    /// Lists all profiles in insertion order
    pub async fn list_me(&self) -> Result<Vec<Me>, AppError> {
        self.me_repo.list_me().await
    }

    /// Applies a partial update; only explicitly supplied fields change
    pub async fn update_me(&self, id: i64, patch: &UpdateMeRequest) -> Result<Me, AppError> {
        patch.validate()?;

        self.me_repo.update_me(id, patch).await
    }

    /// Deletes a profile by its ID
    pub async fn delete_me(&self, id: i64) -> Result<(), AppError> {
        self.me_repo.delete_me(id).await
    }
}
