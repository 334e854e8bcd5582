use validator::Validate;

use crate::{
    domain::entities::pricing::{NewPricingRequest, Pricing, PricingInsert, UpdatePricingRequest},
    errors::AppError,
    interfaces::repositories::pricing::PricingRepository,
};

pub struct PricingHandler<R>
where
    R: PricingRepository,
{
    pub pricing_repo: R,
}

impl<R> PricingHandler<R>
where
    R: PricingRepository,
{
    pub fn new(pricing_repo: R) -> Self {
        PricingHandler { pricing_repo }
    }

    /// Creates a new pricing entry
    pub async fn create_pricing(&self, request: NewPricingRequest) -> Result<Pricing, AppError> {
        request.validate()?;

        let insert = PricingInsert::from(request);

        self.pricing_repo.create_pricing(&insert).await
    }

    /// Retrieves a pricing entry by its ID
    pub async fn get_pricing(&self, id: i64) -> Result<Pricing, AppError> {
        self.pricing_repo.get_pricing_by_id(id).await
    }

    /// Lists all pricing entries in insertion order
    pub async fn list_pricings(&self) -> Result<Vec<Pricing>, AppError> {
        self.pricing_repo.list_pricings().await
    }

    /// Applies a partial update; only explicitly supplied fields change
    pub async fn update_pricing(
        &self,
        id: i64,
        patch: &UpdatePricingRequest,
    ) -> Result<Pricing, AppError> {
        patch.validate()?;

        self.pricing_repo.update_pricing(id, patch).await
    }

    /// Deletes a pricing entry by its ID
    pub async fn delete_pricing(&self, id: i64) -> Result<(), AppError> {
        self.pricing_repo.delete_pricing(id).await
    }
}
