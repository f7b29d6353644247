use axum::{routing::post, Router};

use crate::modules::learning::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/learning/analyze", post(controller::analyze_learning))
}
