//! Currency conversion route.
//!
//! Query parameters map onto a [`Money`] amount and a target code; the
//! response is the converted amount as `{currency_code, units, nanos}`.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::{AppState, routes::error_response};
use cambio_core::currency::DecimalAmount;
use cambio_shared::{AppError, AppResult, Money};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", get(convert_currency))
}

/// Query parameters for a conversion.
///
/// Every field is optional at the extractor level so missing parameters
/// produce a JSON validation error instead of a plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    /// Source currency code.
    pub from_currency_code: Option<String>,
    /// Whole units of the source amount. May carry a decimal fraction.
    pub from_units: Option<String>,
    /// Nanos of the source amount (defaults to 0).
    pub from_nanos: Option<String>,
    /// Target currency code.
    pub to_code: Option<String>,
}

/// A validated conversion request.
#[derive(Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Normalized source amount.
    pub from: Money,
    /// Target currency code.
    pub to_code: String,
}

impl ConvertQuery {
    /// Checks presence and numeric format of every field.
    ///
    /// `from_units` accepts a decimal such as `"12.5"` or exponent notation
    /// such as `"1.25e2"`; its fraction is carried into nanos together with
    /// `from_nanos`. `from_nanos` must be a plain integer.
    pub fn validate(self) -> AppResult<ConversionRequest> {
        let from_currency_code = self.from_currency_code.filter(|s| !s.is_empty());
        let to_code = self.to_code.filter(|s| !s.is_empty());

        let missing: Vec<&str> = [
            ("from_currency_code", from_currency_code.is_none()),
            ("to_code", to_code.is_none()),
            ("from_units", self.from_units.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (Some(from_currency_code), Some(to_code), Some(from_units)) =
            (from_currency_code, to_code, self.from_units)
        else {
            return Err(AppError::Validation(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            )));
        };

        let trimmed = from_units.trim();
        let units = trimmed
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| AppError::InvalidAmount(format!("from_units is not a number: {from_units:?}")))?;
        let nanos: i64 = match self.from_nanos.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::InvalidAmount(format!("from_nanos is not an integer: {raw:?}")))?,
        };

        let carried = DecimalAmount::new(units, Decimal::from(nanos))
            .carry()
            .ok_or_else(|| AppError::InvalidAmount("from_units is out of range".to_string()))?;
        if !carried.nanos.fract().is_zero() {
            return Err(AppError::InvalidAmount(format!(
                "from_units has more than 9 decimal places: {from_units:?}"
            )));
        }
        let from = carried.into_money(&from_currency_code)?;

        Ok(ConversionRequest { from, to_code })
    }
}

/// GET `/convert` - Convert an amount into another currency.
async fn convert_currency(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Response {
    let result = query.validate().and_then(|request| {
        let converted = state.converter.convert(&request.from, &request.to_code)?;
        debug!(from = %request.from, to = %converted, "Converted amount");
        Ok(converted)
    });

    match result {
        Ok(money) => (StatusCode::OK, Json(money)).into_response(),
        Err(e) => {
            if e.is_client_error() {
                warn!(error = %e, "Rejected conversion request");
            } else {
                error!(error = %e, "Conversion failed");
            }
            error_response(&e)
        }
    }
}
