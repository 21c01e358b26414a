use ndarray::{ArrayBase, DataMut, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::numerics::mask::StructuralMask;
use crate::numerics::utils::normalize;

/// How a fitted parameter array gets renormalized after re-estimation.
///
/// ```json
/// { "axis": 1, "mask": [[0, 2], [1, 0], [2, 0], [2, 1]] }
/// ```
///
/// Both fields are optional; the default sums over the whole array with no
/// structural zeros.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeOptions {
    pub axis: Option<usize>,
    pub mask: StructuralMask,
}

impl NormalizeOptions {
    /// Row-stochastic normalization of a transition matrix.
    pub fn transition_rows(mask: StructuralMask) -> Self {
        Self {
            axis: Some(1),
            mask,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn apply<S, D>(&self, a: &mut ArrayBase<S, D>) -> Result<()>
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        normalize(a, self.axis, &self.mask)
    }
}
