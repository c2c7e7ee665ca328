//! Customer handlers
//!
//! Endpoints for creating, fetching, patching and deleting customers.

use std::sync::LazyLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Address, Customer, CustomerId, CustomerPatch, NewCustomer};
use crate::domain::ports::{CreditRepository, CustomerRepository};
use crate::error::ApiError;
use crate::handlers::ensure_valid;
use crate::AppState;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

fn is_valid_cpf(cpf: &str) -> bool {
    cpf.len() == 11 && cpf.chars().all(|c| c.is_ascii_digit())
}

/// Request body for customer creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

impl CustomerRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push("firstName: must not be empty".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("lastName: must not be empty".to_string());
        }
        if !is_valid_cpf(&self.cpf) {
            errors.push("cpf: must be an 11-digit number".to_string());
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push("email: must be a well-formed email address".to_string());
        }
        if self.income < Decimal::ZERO {
            errors.push("income: must not be negative".to_string());
        }
        if self.password.is_empty() {
            errors.push("password: must not be empty".to_string());
        }
        if self.zip_code.trim().is_empty() {
            errors.push("zipCode: must not be empty".to_string());
        }
        if self.street.trim().is_empty() {
            errors.push("street: must not be empty".to_string());
        }
        errors
    }

    fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            email: self.email,
            income: self.income,
            password: self.password,
            address: Address {
                zip_code: self.zip_code,
                street: self.street,
            },
        }
    }
}

/// Request body for the partial customer update; absent fields stay as stored
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub income: Option<Decimal>,
    pub zip_code: Option<String>,
    pub street: Option<String>,
}

impl CustomerUpdateRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if matches!(&self.first_name, Some(v) if v.trim().is_empty()) {
            errors.push("firstName: must not be empty".to_string());
        }
        if matches!(&self.last_name, Some(v) if v.trim().is_empty()) {
            errors.push("lastName: must not be empty".to_string());
        }
        if matches!(self.income, Some(v) if v < Decimal::ZERO) {
            errors.push("income: must not be negative".to_string());
        }
        if matches!(&self.zip_code, Some(v) if v.trim().is_empty()) {
            errors.push("zipCode: must not be empty".to_string());
        }
        if matches!(&self.street, Some(v) if v.trim().is_empty()) {
            errors.push("street: must not be empty".to_string());
        }
        errors
    }

    fn into_patch(self) -> CustomerPatch {
        CustomerPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            income: self.income,
            zip_code: self.zip_code,
            street: self.street,
        }
    }
}

/// Customer view returned by the API; the password never leaves the server
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.0,
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            email: customer.email,
            income: customer.income,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
        }
    }
}

/// Query parameter carrying the customer id for PATCH
#[derive(Debug, Deserialize)]
pub struct CustomerIdQuery {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
}

/// POST /api/customers
pub async fn create_customer<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Json(request): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    ensure_valid(request.validate())?;

    let customer = state
        .customer_service
        .save(request.into_new_customer())
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// GET /api/customers/:id
pub async fn get_customer<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    let customer = state.customer_service.find_by_id(CustomerId(id)).await?;
    Ok(Json(customer.into()))
}

/// PATCH /api/customers?customerId={id}
pub async fn update_customer<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Query(query): Query<CustomerIdQuery>,
    Json(request): Json<CustomerUpdateRequest>,
) -> Result<Json<CustomerResponse>, ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    ensure_valid(request.validate())?;

    let customer = state
        .customer_service
        .update(CustomerId(query.customer_id), request.into_patch())
        .await?;

    Ok(Json(customer.into()))
}

/// DELETE /api/customers/:id
pub async fn delete_customer<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    CR: CustomerRepository + 'static,
    RR: CreditRepository + 'static,
{
    state.customer_service.delete_by_id(CustomerId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
