use std::collections::BTreeSet;

use ndarray::{ArrayBase, Axis, DataMut, Dimension};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cells of a transition-like matrix that are structurally forbidden.
///
/// A cell `(row, col)` addresses the sub-array `a[row, col, ..]` over the
/// first two axes, so the same mask works for a plain `n x n` transition
/// matrix and for stacked per-component arrays.
///
/// Serializes as a list of `[row, col]` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuralMask {
    cells: BTreeSet<(usize, usize)>,
}

impl StructuralMask {
    /// A mask that forbids nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Left-to-right (Bakis) topology over `n_states`: state `i` may only stay
    /// in `i` or move to `i + 1`.
    ///
    /// For three states this forbids `(0, 2)`, `(1, 0)`, `(2, 0)` and `(2, 1)`.
    pub fn left_to_right(n_states: usize) -> Self {
        let cells = (0..n_states)
            .flat_map(|i| (0..n_states).map(move |j| (i, j)))
            .filter(|&(i, j)| j < i || j > i + 1);
        Self::from_cells(cells)
    }

    pub fn cells(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Checks that every cell can be addressed in an array of `shape`.
    pub fn validate(&self, shape: &[usize]) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        if shape.len() < 2 {
            return Err(Error::MaskRank { ndim: shape.len() });
        }
        if let Some(&(row, col)) = self
            .cells
            .iter()
            .find(|&&(row, col)| row >= shape[0] || col >= shape[1])
        {
            return Err(Error::MaskOutOfBounds {
                row,
                col,
                shape: shape.to_vec(),
            });
        }
        Ok(())
    }

    /// Writes `value` into every masked sub-array of `a`.
    ///
    /// Panics on cells outside `a`; call [`StructuralMask::validate`] first.
    pub(crate) fn fill<S, D>(&self, a: &mut ArrayBase<S, D>, value: f64)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        let mut view = a.view_mut().into_dyn();
        for &(row, col) in &self.cells {
            let mut sub = view.index_axis_mut(Axis(0), row);
            sub.index_axis_mut(Axis(0), col).fill(value);
        }
    }
}
