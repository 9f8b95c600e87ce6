//! Prometheus registry backing `/v1/metrics`.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    pub registry: Registry,
    pub evaluations: IntCounter,
    pub failures: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let evaluations =
            IntCounter::new("lqa_evaluations_total", "Listings evaluated").expect("metric");
        let failures =
            IntCounter::new("lqa_failures_total", "Listings that failed the gate").expect("metric");
        registry
            .register(Box::new(evaluations.clone()))
            .expect("register metric");
        registry
            .register(Box::new(failures.clone()))
            .expect("register metric");
        Self {
            registry,
            evaluations,
            failures,
        }
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
