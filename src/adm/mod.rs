pub mod config;
pub mod controller;
pub mod error;
pub mod ports;
pub mod preference;
pub mod scoring;
pub mod telemetry;
pub mod utility;

pub use config::AdmConfig;
pub use controller::{AcceptOutcome, Adm, IterationOutcome, RoundOutcome};
pub use error::{AdmError, AdmErrorKind};
pub use ports::{SolverPort, filter_solver_output};
pub use preference::{
    AtMostClassificationStrategy, Bound, PreferenceInfo, PreferenceStrategy,
    ReferencePointStrategy, Relation,
};
pub use scoring::representative_point;
pub use telemetry::{InMemoryTelemetry, IterationRecord, NoopTelemetry, TelemetrySink};
pub use utility::{CesProduct, CesSum, Topsis, UtilityFunction, normalize};
