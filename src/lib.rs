#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};
use parking_lot::Mutex;
use tauri::{Builder, Manager, State};

pub mod assessment;
pub mod config;
pub mod error;
pub mod prediction;
pub mod view;

use assessment::{fields, AssessmentInput};
use crate::config::BackendConfig;
use prediction::{HealthStatus, PredictionClient, PredictionResult};
use view::{ViewSnapshot, ViewState};

/// Everything the command layer needs, injected once at startup via
/// `Builder::manage`. The view state machine lives behind a mutex; the
/// prediction client is cheap to clone and shared as-is.
#[derive(Clone)]
pub struct AppState {
    view: Arc<Mutex<ViewState>>,
    client: PredictionClient,
}

impl AppState {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            view: Arc::new(Mutex::new(ViewState::new())),
            client: PredictionClient::new(config.base_url),
        }
    }
}

pub fn run() -> Result<()> {
    let config = BackendConfig::load()?;
    info!(
        "Student Stress Monitor starting, prediction backend at {}",
        config.base_url
    );

    Builder::default()
        .invoke_handler(tauri::generate_handler![
            get_assessment_fields,
            submit_assessment,
            retake_assessment,
            get_view_state,
            check_backend_health,
        ])
        .manage(AppState::new(config))
        .setup(|app| {
            info!("Student Stress Monitor application starting up...");

            // Probe the backend once at launch so a missing server shows up
            // in the logs before the first submission fails.
            let client = app.state::<AppState>().client.clone();
            tauri::async_runtime::spawn(async move {
                match client.check_health().await {
                    Ok(health) if health.is_healthy() => {
                        info!(
                            "Prediction backend is healthy (model loaded: {:?}, features: {:?})",
                            health.model_loaded, health.features_count
                        );
                    }
                    Ok(health) => {
                        warn!("Prediction backend reported status '{}'", health.status);
                    }
                    Err(e) => {
                        warn!("Prediction backend not reachable yet: {}", e);
                    }
                }
            });

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error while running tauri application");

    Ok(())
}

/// Field descriptors the frontend uses to build the sliders.
#[tauri::command]
fn get_assessment_fields() -> Vec<fields::FieldSpec> {
    fields::ALL.to_vec()
}

/// Validates the collected form responses, posts them to the backend, and
/// advances the view state. Exactly one request is in flight at a time;
/// the loading flag is cleared on every exit path.
#[tauri::command]
async fn submit_assessment(
    responses: HashMap<String, Option<i64>>,
    state: State<'_, AppState>,
) -> Result<PredictionResult, String> {
    if !state.view.lock().begin_submission() {
        warn!("Submission ignored: a prediction request is already in flight");
        return Err("An assessment is already being processed.".to_string());
    }

    let input = match AssessmentInput::from_responses(&responses) {
        Ok(input) => input,
        Err(e) => {
            state.view.lock().fail();
            error!("Assessment validation failed: {}", e);
            return Err(e.user_message());
        }
    };

    match state.client.submit(&input).await {
        Ok(result) => {
            info!(
                "Assessment classified as {} ({}% confidence)",
                result.stress_label, result.confidence
            );
            state.view.lock().complete(result.clone());
            Ok(result)
        }
        Err(e) => {
            state.view.lock().fail();
            error!("Prediction request failed: {}", e);
            Err(e.user_message())
        }
    }
}

/// Back to a fresh form. Returns the field table so the frontend can reset
/// every slider to its default.
#[tauri::command]
fn retake_assessment(state: State<'_, AppState>) -> Vec<fields::FieldSpec> {
    state.view.lock().retake();
    info!("Assessment reset to the input form");
    fields::ALL.to_vec()
}

#[tauri::command]
fn get_view_state(state: State<'_, AppState>) -> ViewSnapshot {
    state.view.lock().snapshot()
}

#[tauri::command]
async fn check_backend_health(state: State<'_, AppState>) -> Result<HealthStatus, String> {
    state
        .client
        .check_health()
        .await
        .map_err(|e| e.user_message())
}
