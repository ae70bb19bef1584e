use serde::Serialize;

use crate::prediction::PredictionResult;

/// Which of the two sections the frontend should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    ShowingForm,
    ShowingResults,
}

/// The form/results cycle. Owned by `AppState` and handed to the command
/// layer at startup; nothing here touches globals. `loading` is transient:
/// set when a submission starts and cleared on every exit path, so the UI
/// can never get stuck behind the overlay after a failure.
#[derive(Debug)]
pub struct ViewState {
    view: View,
    loading: bool,
    last_result: Option<PredictionResult>,
}

/// Serializable snapshot handed to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub view: View,
    pub loading: bool,
    pub last_result: Option<PredictionResult>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            view: View::ShowingForm,
            loading: false,
            last_result: None,
        }
    }

    /// Marks a submission in flight. Returns false when one already is;
    /// the form is busy until the outstanding request resolves.
    pub fn begin_submission(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Successful prediction: store the result and switch to the results view.
    pub fn complete(&mut self, result: PredictionResult) {
        self.last_result = Some(result);
        self.view = View::ShowingResults;
        self.loading = false;
    }

    /// Failed submission: stay on the form, clear the loading overlay.
    pub fn fail(&mut self) {
        self.loading = false;
    }

    /// Back to a fresh form; the previous result is discarded.
    pub fn retake(&mut self) {
        self.view = View::ShowingForm;
        self.last_result = None;
        self.loading = false;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_result(&self) -> Option<&PredictionResult> {
        self.last_result.as_ref()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            view: self.view,
            loading: self.loading,
            last_result: self.last_result.clone(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
