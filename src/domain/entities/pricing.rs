use async_graphql::{ComplexObject, InputObject, SimpleObject};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::validation::new_validation_error;

const MAX_SERVICE_LENGTH: u64 = 100;

// ───── Database Model ───────────────────────────────────────────────

/// A priced service offering. `total_cost` is derived on read and never
/// stored.
#[derive(Debug, Clone, Serialize, SimpleObject, sqlx::FromRow)]
#[graphql(complex)]
pub struct Pricing {
    pub id: i64,
    pub service: String,
    pub description: String,
    pub rate_per_hour: Decimal,
    pub estimated_hours: Decimal,
}

#[ComplexObject]
impl Pricing {
    async fn total_cost(&self) -> Decimal {
        self.rate_per_hour * self.estimated_hours
    }
}

#[derive(Debug)]
pub struct PricingInsert {
    pub service: String,
    pub description: String,
    pub rate_per_hour: Decimal,
    pub estimated_hours: Decimal,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub id: i64,
    pub service: String,
    pub description: String,
    pub rate_per_hour: Decimal,
    pub estimated_hours: Decimal,
    pub total_cost: Decimal,
}

impl From<Pricing> for PricingResponse {
    fn from(pricing: Pricing) -> Self {
        PricingResponse {
            id: pricing.id,
            total_cost: pricing.rate_per_hour * pricing.estimated_hours,
            service: pricing.service,
            description: pricing.description,
            rate_per_hour: pricing.rate_per_hour,
            estimated_hours: pricing.estimated_hours,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate, InputObject)]
#[graphql(name = "CreatePricingInput")]
pub struct NewPricingRequest {
    #[validate(length(min = 1, max = MAX_SERVICE_LENGTH))]
    pub service: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    #[validate(custom(function = "validate_rate"))]
    pub rate_per_hour: Decimal,

    #[validate(custom(function = "validate_hours"))]
    pub estimated_hours: Decimal,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdatePricingRequest {
    #[validate(length(min = 1, max = MAX_SERVICE_LENGTH))]
    pub service: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_rate"))]
    pub rate_per_hour: Option<Decimal>,

    #[validate(custom(function = "validate_hours"))]
    pub estimated_hours: Option<Decimal>,
}

// ───── Validation Helpers ───────────────────────────────────────────

// NUMERIC(10, 2) in the store
pub fn validate_rate(rate: &Decimal) -> Result<(), ValidationError> {
    validate_money(rate, Decimal::from(100_000_000), "rate_out_of_range")
}

// NUMERIC(5, 2) in the store
pub fn validate_hours(hours: &Decimal) -> Result<(), ValidationError> {
    validate_money(hours, Decimal::from(1_000), "hours_out_of_range")
}

fn validate_money(
    value: &Decimal,
    limit: Decimal,
    code: &'static str,
) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(new_validation_error(code, "Value must not be negative"));
    }
    if value.normalize().scale() > 2 {
        return Err(new_validation_error(
            "too_many_decimal_places",
            "Value may have at most 2 decimal places",
        ));
    }
    if *value >= limit {
        return Err(new_validation_error(code, "Value is too large"));
    }
    Ok(())
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<NewPricingRequest> for PricingInsert {
    fn from(request: NewPricingRequest) -> Self {
        PricingInsert {
            service: request.service,
            description: request.description,
            rate_per_hour: request.rate_per_hour,
            estimated_hours: request.estimated_hours,
        }
    }
}
