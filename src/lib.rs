//! Automatic decision maker (ADM) for interactive multiobjective
//! optimization, built around an exact box decomposition of the
//! not-yet-explored part of objective space.
//!
//! The `region` module maintains the potential region as a disjoint
//! union of axis-aligned boxes and carves dominance cones out of it
//! one revealed Pareto optimum at a time. The `adm` module drives the
//! region round by round: it accepts solutions from an external
//! optimizer, scores the surviving boxes with a utility function and
//! emits aspiration/reservation preference information for the most
//! promising one.

pub mod adm;
pub mod region;
