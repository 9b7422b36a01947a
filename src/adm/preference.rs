use serde::{Deserialize, Serialize};

use crate::region::{Hyperbox, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    AtMost,
}

/// One classified component of a preference-ordered reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub relation: Relation,
    pub value: f64,
}

/// Preference information handed to the external optimizer after each
/// iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreferenceInfo {
    /// Aspiration and reservation reference points.
    ReferencePoints {
        aspiration: Vector,
        reservation: Vector,
    },
    /// Per-component "should be at most" classification, for
    /// preference-ordered methods.
    Classification { bounds: Vec<Bound> },
}

/// Maps the chosen box and its representative point to preference
/// information. Selected at construction; strategies differ only in the
/// shape of the emitted preference.
pub trait PreferenceStrategy {
    fn preference(&self, hbox: &Hyperbox, representative: &[f64]) -> PreferenceInfo;
}

/// Default strategy: the representative point as aspiration, the box's
/// pessimistic corner as reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePointStrategy;

impl PreferenceStrategy for ReferencePointStrategy {
    fn preference(&self, hbox: &Hyperbox, representative: &[f64]) -> PreferenceInfo {
        PreferenceInfo::ReferencePoints {
            aspiration: representative.to_vec(),
            reservation: hbox.max.clone(),
        }
    }
}

/// NIMBUS-style strategy: every component of the representative point
/// becomes a "should be at most" classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtMostClassificationStrategy;

impl PreferenceStrategy for AtMostClassificationStrategy {
    fn preference(&self, _hbox: &Hyperbox, representative: &[f64]) -> PreferenceInfo {
        PreferenceInfo::Classification {
            bounds: representative
                .iter()
                .map(|&value| Bound {
                    relation: Relation::AtMost,
                    value,
                })
                .collect(),
        }
    }
}
