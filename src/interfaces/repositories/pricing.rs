use std::sync::Arc;

use async_trait::async_trait;
use sqlx::QueryBuilder;

use crate::{
    domain::entities::pricing::{Pricing, PricingInsert, UpdatePricingRequest},
    errors::AppError,
    interfaces::repositories::sqlx_repo::{push_patch_field, SqlxRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingRepository: Send + Sync {
    async fn create_pricing(&self, insert: &PricingInsert) -> Result<Pricing, AppError>;
    async fn get_pricing_by_id(&self, id: i64) -> Result<Pricing, AppError>;
    async fn list_pricings(&self) -> Result<Vec<Pricing>, AppError>;
    async fn update_pricing(
        &self,
        id: i64,
        patch: &UpdatePricingRequest,
    ) -> Result<Pricing, AppError>;
    async fn delete_pricing(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl<R: PricingRepository + ?Sized> PricingRepository for Arc<R> {
    async fn create_pricing(&self, insert: &PricingInsert) -> Result<Pricing, AppError> {
        (**self).create_pricing(insert).await
    }
    async fn get_pricing_by_id(&self, id: i64) -> Result<Pricing, AppError> {
        (**self).get_pricing_by_id(id).await
    }
    async fn list_pricings(&self) -> Result<Vec<Pricing>, AppError> {
        (**self).list_pricings().await
    }
    async fn update_pricing(
        &self,
        id: i64,
        patch: &UpdatePricingRequest,
    ) -> Result<Pricing, AppError> {
        (**self).update_pricing(id, patch).await
    }
    async fn delete_pricing(&self, id: i64) -> Result<(), AppError> {
        (**self).delete_pricing(id).await
    }
}

#[async_trait]
impl PricingRepository for SqlxRepo {
    async fn create_pricing(&self, insert: &PricingInsert) -> Result<Pricing, AppError> {
        // total_cost is never stored; it is derived on read
        let pricing = sqlx::query_as::<_, Pricing>(
            r#"
            INSERT INTO pricings (service, description, rate_per_hour, estimated_hours)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&insert.service)
        .bind(&insert.description)
        .bind(insert.rate_per_hour)
        .bind(insert.estimated_hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(pricing)
    }

    async fn get_pricing_by_id(&self, id: i64) -> Result<Pricing, AppError> {
        sqlx::query_as::<_, Pricing>("SELECT * FROM pricings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Pricing", id))
    }

    async fn list_pricings(&self) -> Result<Vec<Pricing>, AppError> {
        let pricings = sqlx::query_as::<_, Pricing>("SELECT * FROM pricings ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(pricings)
    }

    async fn update_pricing(
        &self,
        id: i64,
        patch: &UpdatePricingRequest,
    ) -> Result<Pricing, AppError> {
        let mut qb = QueryBuilder::new("UPDATE pricings SET id = id");

        push_patch_field!(qb, "service", &patch.service);
        push_patch_field!(qb, "description", &patch.description);
        push_patch_field!(qb, "rate_per_hour", &patch.rate_per_hour);
        push_patch_field!(qb, "estimated_hours", &patch.estimated_hours);

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Pricing>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Pricing", id))
    }

    async fn delete_pricing(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM pricings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::not_found("Pricing", id))
        } else {
            Ok(())
        }
    }
}
