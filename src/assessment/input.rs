use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::PredictionError;

/// One complete assessment, ready to be posted to the prediction backend.
/// Field names match the backend's feature columns exactly; the struct is
/// built fresh for every submission and dropped once the request resolves.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssessmentInput {
    #[validate(range(min = 0, max = 21))]
    pub anxiety_level: i64,
    #[validate(range(min = 0, max = 30))]
    pub self_esteem: i64,
    #[validate(range(min = 0, max = 1))]
    pub mental_health_history: i64,
    #[validate(range(min = 0, max = 27))]
    pub depression: i64,
    #[validate(range(min = 0, max = 5))]
    pub headache: i64,
    #[validate(range(min = 1, max = 5))]
    pub blood_pressure: i64,
    #[validate(range(min = 1, max = 5))]
    pub sleep_quality: i64,
    #[validate(range(min = 1, max = 5))]
    pub breathing_problem: i64,
    #[validate(range(min = 1, max = 5))]
    pub noise_level: i64,
    #[validate(range(min = 1, max = 5))]
    pub living_conditions: i64,
    #[validate(range(min = 1, max = 5))]
    pub safety: i64,
    #[validate(range(min = 1, max = 5))]
    pub basic_needs: i64,
    #[validate(range(min = 1, max = 5))]
    pub academic_performance: i64,
    #[validate(range(min = 1, max = 5))]
    pub study_load: i64,
    #[validate(range(min = 1, max = 5))]
    pub teacher_student_relationship: i64,
    #[validate(range(min = 1, max = 5))]
    pub future_career_concerns: i64,
    #[validate(range(min = 1, max = 5))]
    pub social_support: i64,
    #[validate(range(min = 1, max = 5))]
    pub peer_pressure: i64,
    #[validate(range(min = 0, max = 5))]
    pub extracurricular_activities: i64,
    #[validate(range(min = 1, max = 5))]
    pub bullying: i64,
}

impl AssessmentInput {
    /// Builds an input from the raw form responses. Every required field must
    /// be present and non-null; the first missing one fails the submission
    /// before any network call happens.
    pub fn from_responses(
        responses: &HashMap<String, Option<i64>>,
    ) -> Result<Self, PredictionError> {
        let get = |name: &str| -> Result<i64, PredictionError> {
            responses
                .get(name)
                .copied()
                .flatten()
                .ok_or_else(|| PredictionError::missing_field(name))
        };

        let input = Self {
            anxiety_level: get("anxiety_level")?,
            self_esteem: get("self_esteem")?,
            mental_health_history: get("mental_health_history")?,
            depression: get("depression")?,
            headache: get("headache")?,
            blood_pressure: get("blood_pressure")?,
            sleep_quality: get("sleep_quality")?,
            breathing_problem: get("breathing_problem")?,
            noise_level: get("noise_level")?,
            living_conditions: get("living_conditions")?,
            safety: get("safety")?,
            basic_needs: get("basic_needs")?,
            academic_performance: get("academic_performance")?,
            study_load: get("study_load")?,
            teacher_student_relationship: get("teacher_student_relationship")?,
            future_career_concerns: get("future_career_concerns")?,
            social_support: get("social_support")?,
            peer_pressure: get("peer_pressure")?,
            extracurricular_activities: get("extracurricular_activities")?,
            bullying: get("bullying")?,
        };

        input.check_ranges()?;
        Ok(input)
    }

    fn check_ranges(&self) -> Result<(), PredictionError> {
        self.validate().map_err(|e| {
            let fields: Vec<&str> = e.field_errors().keys().copied().collect();
            PredictionError::Validation(format!(
                "one or more responses are out of range: {}",
                fields.join(", ")
            ))
        })
    }
}
