//! EU VIES REST API client, the production [`NumberValidator`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::ValidationServiceError;
use crate::validate::{NumberValidator, Validation};

/// Result of a VIES tax-number check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViesResult {
    /// Whether the number is currently valid.
    pub valid: bool,
    /// Date of the request (YYYY-MM-DD).
    pub request_date: Option<String>,
    /// Registered company name (if available).
    pub name: Option<String>,
    /// Registered address (if available).
    pub address: Option<String>,
}

/// Error from the VIES API.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ViesError {
    /// Network or HTTP error.
    Network(String),
    /// The VIES API returned an error (e.g. member state unavailable).
    ApiError(String),
    /// Failed to parse the response.
    ParseError(String),
}

impl fmt::Display for ViesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "VIES network error: {e}"),
            Self::ApiError(e) => write!(f, "VIES API error: {e}"),
            Self::ParseError(e) => write!(f, "VIES parse error: {e}"),
        }
    }
}

impl std::error::Error for ViesError {}

impl From<ViesError> for ValidationServiceError {
    fn from(err: ViesError) -> Self {
        ValidationServiceError::with_source("VIES check failed", err)
    }
}

const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// VIES check-vat-number response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckVatResponse {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

impl ErrorWrapper {
    fn describe(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "unknown error".into())
    }
}

/// VIES check-vat-number request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckVatRequest {
    country_code: String,
    vat_number: String,
}

fn clean_field(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "---" && !v.is_empty())
}

/// Check a tax number against the EU VIES API.
///
/// `country_code` is the 2-letter VIES code (e.g. "DE", or "EL" for
/// Greece). `tax_number` is the number part without the country
/// prefix.
///
/// This function is async and requires network access.
/// The VIES API has no authentication — it is a free public service.
///
/// # Errors
///
/// Returns `ViesError::Network` on connection issues,
/// `ViesError::ApiError` if a member state is unavailable,
/// `ViesError::ParseError` on unexpected response formats.
pub async fn check_vies(country_code: &str, tax_number: &str) -> Result<ViesResult, ViesError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| ViesError::Network(e.to_string()))?;

    let req = CheckVatRequest {
        country_code: country_code.to_uppercase(),
        vat_number: tax_number.to_string(),
    };

    let resp = client
        .post(VIES_URL)
        .json(&req)
        .send()
        .await
        .map_err(|e| ViesError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ViesError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ViesError::ApiError(format!("HTTP {status}: {body}")));
    }

    let parsed: CheckVatResponse = serde_json::from_str(&body)
        .map_err(|e: serde_json::Error| ViesError::ParseError(e.to_string()))?;

    // API-level errors arrive with HTTP 200
    if let Some(err) = parsed.error_wrappers.as_ref().and_then(|e| e.first()) {
        return Err(ViesError::ApiError(err.describe()));
    }

    Ok(ViesResult {
        valid: parsed.valid.unwrap_or(false),
        request_date: parsed.request_date,
        name: clean_field(parsed.name),
        address: clean_field(parsed.address),
    })
}

/// [`NumberValidator`] backed by the EU VIES service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViesValidator;

impl ViesValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NumberValidator for ViesValidator {
    async fn validate(
        &self,
        country_code: &str,
        tax_number: &str,
    ) -> Result<Validation, ValidationServiceError> {
        let result = check_vies(country_code, tax_number).await?;
        Ok(Validation {
            valid: result.valid,
        })
    }
}
