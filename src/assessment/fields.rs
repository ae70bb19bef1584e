use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Descriptor for one assessment question. The frontend builds its sliders
/// from this table, and retake resets every slider back to `default`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

/// The twenty self-reported scales the prediction model was trained on,
/// in the order the backend expects them. Bounds match the model's
/// feature descriptions.
pub static ALL: [FieldSpec; 20] = [
    FieldSpec {
        name: "anxiety_level",
        label: "Anxiety Level",
        description: "Current anxiety level (0-21)",
        min: 0,
        max: 21,
        default: 10,
    },
    FieldSpec {
        name: "self_esteem",
        label: "Self-Esteem",
        description: "Self-esteem level (0-30)",
        min: 0,
        max: 30,
        default: 15,
    },
    FieldSpec {
        name: "mental_health_history",
        label: "Mental Health History",
        description: "Mental health history (0 = no, 1 = yes)",
        min: 0,
        max: 1,
        default: 0,
    },
    FieldSpec {
        name: "depression",
        label: "Depression",
        description: "Depression level (0-27)",
        min: 0,
        max: 27,
        default: 13,
    },
    FieldSpec {
        name: "headache",
        label: "Headache",
        description: "Headache frequency (0-5)",
        min: 0,
        max: 5,
        default: 2,
    },
    FieldSpec {
        name: "blood_pressure",
        label: "Blood Pressure",
        description: "Blood pressure level (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "sleep_quality",
        label: "Sleep Quality",
        description: "Sleep quality (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "breathing_problem",
        label: "Breathing Problem",
        description: "Breathing problems (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "noise_level",
        label: "Noise Level",
        description: "Environment noise level (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "living_conditions",
        label: "Living Conditions",
        description: "Living conditions quality (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "safety",
        label: "Safety",
        description: "Safety feeling (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "basic_needs",
        label: "Basic Needs",
        description: "Basic needs fulfillment (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "academic_performance",
        label: "Academic Performance",
        description: "Academic performance (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "study_load",
        label: "Study Load",
        description: "Study workload (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "teacher_student_relationship",
        label: "Teacher-Student Relationship",
        description: "Teacher-student relationship (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "future_career_concerns",
        label: "Future Career Concerns",
        description: "Future career concerns (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "social_support",
        label: "Social Support",
        description: "Social support level (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "peer_pressure",
        label: "Peer Pressure",
        description: "Peer pressure level (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
    FieldSpec {
        name: "extracurricular_activities",
        label: "Extracurricular Activities",
        description: "Extracurricular involvement (0-5)",
        min: 0,
        max: 5,
        default: 2,
    },
    FieldSpec {
        name: "bullying",
        label: "Bullying",
        description: "Bullying experience (1-5)",
        min: 1,
        max: 5,
        default: 3,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static FieldSpec>> =
    Lazy::new(|| ALL.iter().map(|spec| (spec.name, spec)).collect());

pub fn find(name: &str) -> Option<&'static FieldSpec> {
    BY_NAME.get(name).copied()
}
