use axum::extract::State;
use axum::response::Redirect;

use crate::state::AppState;

/// Discard the current quiz and go back to the form.
pub async fn reset(State(state): State<AppState>) -> Redirect {
    state.controller.reset().await;
    Redirect::to("/")
}
