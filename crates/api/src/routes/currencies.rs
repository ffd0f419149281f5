//! Supported currency listing routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for the supported currency list.
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    /// ISO 4217 codes present in the rate table, sorted.
    pub currencies: Vec<String>,
}

/// GET `/currencies` - List every currency the converter accepts.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrenciesResponse> {
    let currencies = state
        .converter
        .supported_currencies()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(CurrenciesResponse { currencies })
}
