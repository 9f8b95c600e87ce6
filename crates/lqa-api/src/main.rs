//! Binary entrypoint for the LQA API server.
use lqa_api::state::AppState;
use lqa_gate::GateProfile;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    // Listen address and gate mode can be overridden with LQA_ADDR / LQA_MODE
    let addr = std::env::var("LQA_ADDR").unwrap_or_else(|_| "0.0.0.0:8790".to_string());
    let mode = std::env::var("LQA_MODE").unwrap_or_else(|_| "standard".to_string());

    let state = AppState::new(GateProfile::for_mode(&mode)).expect("Failed to build state");
    lqa_api::run(&addr, Arc::new(state)).await;
}
