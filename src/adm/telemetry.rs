use serde::{Deserialize, Serialize};

use crate::adm::preference::PreferenceInfo;
use crate::region::{Hyperbox, Vector};

/// One entry appended per iteration; the sole export surface of the
/// core. Formatting to files or spreadsheets is an external concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: u64,
    pub hypervolume: f64,
    pub box_count: usize,
    pub creation_count: u64,
    pub pool_size: usize,
    pub accepted: Vec<Vector>,
    /// Best utility among the vectors handed in this iteration; `None`
    /// when the iteration carried no solutions.
    pub max_utility: Option<f64>,
    pub chosen_box: Hyperbox,
    pub box_score: f64,
    pub preference: PreferenceInfo,
}

/// Injectable append-only observer of per-iteration records. Replaces
/// any notion of process-wide telemetry state.
pub trait TelemetrySink {
    fn record(&mut self, record: IterationRecord);
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTelemetry {
    records: Vec<IterationRecord>,
}

impl InMemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }
}

impl TelemetrySink for InMemoryTelemetry {
    fn record(&mut self, record: IterationRecord) {
        self.records.push(record);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn record(&mut self, _record: IterationRecord) {}
}
