//! Credit handlers
//!
//! Endpoints for creating credit proposals and reading them back, either
//! as a per-customer listing or by credit code.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Credit, CustomerId, NewCredit};
use crate::domain::ports::{CreditRepository, CustomerRepository};
use crate::error::ApiError;
use crate::handlers::customers::CustomerIdQuery;
use crate::handlers::ensure_valid;
use crate::AppState;

/// Request body for credit creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installment: i32,
    pub customer_id: i64,
}

impl CreditRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.credit_value <= Decimal::ZERO {
            errors.push("creditValue: must be positive".to_string());
        }
        if self.day_first_installment <= Utc::now().date_naive() {
            errors.push("dayFirstInstallment: must be in the future".to_string());
        }
        if self.number_of_installment < 1 {
            errors.push("numberOfInstallment: must be at least 1".to_string());
        }
        errors
    }

    fn into_new_credit(self) -> NewCredit {
        NewCredit::new(
            self.credit_value,
            self.day_first_installment,
            self.number_of_installment,
            CustomerId(self.customer_id),
        )
    }
}

/// Full credit view returned for single lookups and creation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditResponse {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installment: i32,
    pub customer_id: i64,
}

impl From<Credit> for CreditResponse {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            day_first_installment: credit.day_first_installment,
            number_of_installment: credit.number_of_installment,
            customer_id: credit.customer_id.0,
        }
    }
}

/// Compact credit view for per-customer listings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installment: i32,
}

impl From<Credit> for CreditSummary {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installment: credit.number_of_installment,
        }
    }
}

/// POST /api/credits
pub async fn create_credit<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Json(request): Json<CreditRequest>,
) -> Result<(StatusCode, Json<CreditResponse>), ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    ensure_valid(request.validate())?;

    let credit = state.credit_service.save(request.into_new_credit()).await?;

    Ok((StatusCode::CREATED, Json(credit.into())))
}

/// GET /api/credits?customerId={id}
pub async fn list_credits<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Query(query): Query<CustomerIdQuery>,
) -> Result<Json<Vec<CreditSummary>>, ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    let credits = state
        .credit_service
        .find_all_by_customer(CustomerId(query.customer_id))
        .await?;

    Ok(Json(credits.into_iter().map(CreditSummary::from).collect()))
}

/// GET /api/credits/:credit_code?customerId={id}
pub async fn get_credit<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Path(credit_code): Path<Uuid>,
    Query(query): Query<CustomerIdQuery>,
) -> Result<Json<CreditResponse>, ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    let credit = state
        .credit_service
        .find_by_credit_code(CustomerId(query.customer_id), credit_code)
        .await?;

    Ok(Json(credit.into()))
}
