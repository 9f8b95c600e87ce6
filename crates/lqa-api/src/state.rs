//! Shared application state.
use crate::metrics::Metrics;
use lqa_artifact::FsInspector;
use lqa_core::GateError;
use lqa_dedup::MemoryIndex;
use lqa_gate::{GateProfile, ListingGate};

pub struct AppState {
    pub gate: ListingGate,
    pub inspector: FsInspector,
    pub index: MemoryIndex,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(profile: GateProfile) -> Result<Self, GateError> {
        let inspector = FsInspector::new(profile.inspector.clone())?;
        Ok(Self {
            gate: ListingGate::new(profile),
            inspector,
            index: MemoryIndex::new(),
            metrics: Metrics::new(),
        })
    }
}
