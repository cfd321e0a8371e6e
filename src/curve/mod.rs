//! Deterministic curve generation: name -> seed -> parameters -> points.

pub mod error;
pub mod eval;
pub mod pool;
pub mod sampler;
pub mod seed;
pub mod variant;

pub use error::{CurveError, CurveResult};
pub use eval::{coordinate_bound, evaluate, PointSequence, UNIT_BOUND};
pub use sampler::{sample, Basis, BasisPair, CurveParameters, SampledCurve};
pub use variant::{SignMode, Variant};
