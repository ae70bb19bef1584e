use thiserror::Error;

/// Errors produced on the submission path. `Validation` is raised locally
/// before any network traffic; the other two classify what came back from
/// (or never reached) the prediction backend.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("{0}")]
    Validation(String),

    #[error("prediction request failed: {0}")]
    Request(String),

    #[error("could not reach the prediction backend: {0}")]
    Connectivity(String),
}

impl PredictionError {
    pub fn missing_field(name: &str) -> Self {
        PredictionError::Validation(format!("missing required field: {}", name))
    }

    /// Message shown to the user in the frontend alert. Connectivity failures
    /// carry an extra hint because the most common cause is a backend that
    /// was never started.
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::Validation(message) => {
                format!("Please fill in all required fields ({})", message)
            }
            PredictionError::Request(message) => {
                format!("An error occurred while processing your assessment: {}", message)
            }
            PredictionError::Connectivity(message) => {
                format!(
                    "An error occurred while processing your assessment. \
                     Please make sure the backend server is running on the configured port. ({})",
                    message
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = PredictionError::missing_field("bullying");
        assert!(err.to_string().contains("bullying"));
        assert!(err.user_message().contains("bullying"));
    }

    #[test]
    fn connectivity_message_hints_at_backend_availability() {
        let err = PredictionError::Connectivity("connection refused".to_string());
        assert!(err.user_message().contains("backend server is running"));
    }

    #[test]
    fn request_message_carries_server_text() {
        let err = PredictionError::Request("No data provided".to_string());
        assert!(err.user_message().contains("No data provided"));
    }
}
