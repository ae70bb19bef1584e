use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Discrete classification returned by the backend as a numeric code.
/// Unknown codes are treated as high stress so the UI never understates
/// a result it cannot interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => StressLevel::Low,
            1 => StressLevel::Moderate,
            _ => StressLevel::High,
        }
    }

    /// CSS class the frontend applies to the stress indicator.
    pub fn display_class(&self) -> &'static str {
        match self {
            StressLevel::Low => "low-stress",
            StressLevel::Moderate => "moderate-stress",
            StressLevel::High => "high-stress",
        }
    }
}

/// One input dimension reported back with its raw value and its relative
/// importance to the prediction (normalized to [0,1]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub factor: String,
    pub value: i64,
    pub importance: f64,
}

/// Successful `/predict` response. Parsing is deliberately lenient: only
/// what the results view renders is required, and missing arrays read as
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub stress_level: i64,
    pub stress_label: String,
    pub confidence: f64,
    #[serde(default)]
    pub contributing_factors: Vec<ContributingFactor>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl PredictionResult {
    pub fn level(&self) -> StressLevel {
        StressLevel::from_code(self.stress_level)
    }
}

/// `/health` response. The backend also reports whether its model loaded
/// and how many feature columns it expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub features_count: Option<u32>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `/features` response, used by the diagnostic binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSet {
    pub features: Vec<String>,
    #[serde(default)]
    pub feature_descriptions: HashMap<String, String>,
}

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_codes_map_to_display_classes() {
        assert_eq!(StressLevel::from_code(0).display_class(), "low-stress");
        assert_eq!(StressLevel::from_code(1).display_class(), "moderate-stress");
        assert_eq!(StressLevel::from_code(2).display_class(), "high-stress");
        assert_eq!(StressLevel::from_code(7).display_class(), "high-stress");
        assert_eq!(StressLevel::from_code(-1).display_class(), "high-stress");
    }

    #[test]
    fn parses_a_full_prediction_response() {
        let body = r#"{
            "stress_level": 1,
            "stress_label": "Moderate Risk",
            "confidence": 87.3,
            "contributing_factors": [
                {"factor": "Anxiety Level", "value": 14, "importance": 0.21},
                {"factor": "Sleep Quality", "value": 2, "importance": 0.18}
            ],
            "recommendations": ["Take regular breaks from academic work"],
            "disclaimer": "This assessment is for informational purposes only."
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.level(), StressLevel::Moderate);
        assert_eq!(result.stress_label, "Moderate Risk");
        assert_eq!(result.contributing_factors.len(), 2);
        assert_eq!(result.contributing_factors[0].factor, "Anxiety Level");
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.disclaimer.is_some());
    }

    #[test]
    fn missing_arrays_read_as_empty() {
        let body = r#"{"stress_level": 0, "stress_label": "Low Risk", "confidence": 95.0}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();

        assert!(result.contributing_factors.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(result.disclaimer.is_none());
    }

    #[test]
    fn health_status_requires_healthy_string() {
        let healthy: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "model_loaded": true, "features_count": 20}"#)
                .unwrap();
        assert!(healthy.is_healthy());
        assert_eq!(healthy.features_count, Some(20));

        let degraded: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());
    }

    #[test]
    fn error_body_tolerates_missing_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "No data provided"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("No data provided"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }
}
