/// Release matching domain - pure business logic
///
/// Reconciles the operator mapping table against the release export,
/// applies target-version constraints and groups the outcome per product suite.
/// Nothing in this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
