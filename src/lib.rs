//! Numerically stable array primitives for hidden Markov model fitting:
//! masked `exp`/`ln`, log-sum-exp and in-place probability normalization with
//! structural zeros, plus the sequence bookkeeping that goes with them.
pub mod error;
pub mod numerics;
pub mod traits;

pub use crate::error::{Error, Result};
pub use crate::numerics::*;
pub use crate::traits::*;
