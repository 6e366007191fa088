//! Turns a TAF's base forecast and change groups into a timeline of
//! non-overlapping forecast periods.

pub mod propagation;
pub mod unification;

pub use propagation::propagate;
pub use unification::unify;
