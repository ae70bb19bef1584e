use log::{error, info};
use reqwest::Client;

use crate::assessment::AssessmentInput;
use crate::error::PredictionError;

use super::models::{ErrorBody, FeatureSet, HealthStatus, PredictionResult};

/// Thin client for the stress prediction service. One request at a time,
/// no retries; a transport failure surfaces as `Connectivity` so the UI
/// can hint that the backend is probably not running. No timeout is set,
/// a hung request is left to the transport.
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Serializes the assessment as JSON and POSTs it to `/predict`.
    pub async fn submit(
        &self,
        input: &AssessmentInput,
    ) -> Result<PredictionResult, PredictionError> {
        let url = format!("{}/predict", self.base_url);
        info!("Requesting stress prediction from {}", url);

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                error!("Prediction backend unreachable: {}", e);
                PredictionError::Connectivity(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("failed to get prediction (HTTP {})", status));
            error!("Prediction request rejected ({}): {}", status, message);
            return Err(PredictionError::Request(message));
        }

        let result = response.json::<PredictionResult>().await.map_err(|e| {
            PredictionError::Request(format!("could not parse prediction response: {}", e))
        })?;

        info!(
            "Prediction received: {} ({} factors, {} recommendations)",
            result.stress_label,
            result.contributing_factors.len(),
            result.recommendations.len()
        );
        Ok(result)
    }

    /// GETs `/health`; healthy when the backend reports `status == "healthy"`.
    pub async fn check_health(&self) -> Result<HealthStatus, PredictionError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PredictionError::Connectivity(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PredictionError::Request(format!(
                "health check failed (HTTP {})",
                response.status()
            )));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| PredictionError::Request(format!("could not parse health response: {}", e)))
    }

    /// GETs `/features`, the backend's own description of its input columns.
    pub async fn fetch_features(&self) -> Result<FeatureSet, PredictionError> {
        let url = format!("{}/features", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PredictionError::Connectivity(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PredictionError::Request(format!(
                "feature listing failed (HTTP {})",
                response.status()
            )));
        }

        response
            .json::<FeatureSet>()
            .await
            .map_err(|e| PredictionError::Request(format!("could not parse feature listing: {}", e)))
    }
}
