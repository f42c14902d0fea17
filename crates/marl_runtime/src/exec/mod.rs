//! Thunk evaluation.
//!
//! Implemented as methods on [`crate::Runtime`] because the output sink and
//! config live there. The environment is an explicit parameter: record
//! bodies and closure calls each run against their own chain.

mod call;
mod expr;
mod stmt;
