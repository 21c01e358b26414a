use ndarray::{Array, ArrayBase, Data, DataMut, Dimension, RemoveAxis};

use crate::error::Result;
use crate::numerics::{utils, StructuralMask};

pub trait MaskedOps<D: Dimension> {
    fn exp_mask_zero(&self) -> Array<f64, D>;

    fn log_mask_zero(&self) -> Array<f64, D>;

    fn logsumexp(&self, axis: usize) -> Result<Array<f64, D::Smaller>>
    where
        D: RemoveAxis;

    /// `logsumexp` over the leading axis.
    fn logsumexp0(&self) -> Result<Array<f64, D::Smaller>>
    where
        D: RemoveAxis,
    {
        self.logsumexp(0)
    }
}

pub trait Normalize<D: Dimension>: MaskedOps<D> {
    fn normalize_with(&mut self, axis: Option<usize>, mask: &StructuralMask) -> Result<()>;

    /// Normalizes without structural zeros.
    fn normalize_inplace(&mut self, axis: Option<usize>) -> Result<()> {
        self.normalize_with(axis, &StructuralMask::none())
    }
}

impl<S, D> MaskedOps<D> for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn exp_mask_zero(&self) -> Array<f64, D> {
        utils::exp_mask_zero(self)
    }

    fn log_mask_zero(&self) -> Array<f64, D> {
        utils::log_mask_zero(self)
    }

    fn logsumexp(&self, axis: usize) -> Result<Array<f64, D::Smaller>>
    where
        D: RemoveAxis,
    {
        utils::logsumexp(self, axis)
    }
}

impl<S, D> Normalize<D> for ArrayBase<S, D>
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    fn normalize_with(&mut self, axis: Option<usize>, mask: &StructuralMask) -> Result<()> {
        utils::normalize(self, axis, mask)
    }
}
