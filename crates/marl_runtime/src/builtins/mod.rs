//! Native function implementations, grouped by table section.

mod common;
mod general;
mod math;
mod ops;

pub(crate) use general::*;
pub(crate) use math::*;
pub(crate) use ops::*;
