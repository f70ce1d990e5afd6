use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use service::policy::{final_price, CustomerTier};

use crate::errors::JsonApiError;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuoteRequest {
    pub price: f64,
    pub tier: CustomerTier,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct QuoteResponse {
    pub tier: CustomerTier,
    pub price: f64,
    pub final_price: f64,
}

/// Price after the tier's discount; the strategy is resolved from the tier once, here.
#[utoipa::path(
    post, path = "/pricing/quote", tag = "pricing",
    request_body = crate::openapi::QuoteRequestDoc,
    responses(
        (status = 200, description = "Quoted", body = crate::openapi::QuoteResponseDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn quote(body: Result<Json<QuoteRequest>, JsonRejection>) -> Result<Json<QuoteResponse>, JsonApiError> {
    let Json(req) = body.map_err(|_| JsonApiError::bad_request("Invalid input"))?;
    let calculator = req.tier.calculator();
    Ok(Json(QuoteResponse {
        tier: req.tier,
        price: req.price,
        final_price: final_price(req.price, calculator.as_ref()),
    }))
}
