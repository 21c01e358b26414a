use ndarray::{Array, ArrayBase, Axis, Data, DataMut, Dimension, RemoveAxis};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::numerics::mask::StructuralMask;

pub const EPS: f64 = f64::EPSILON;

#[inline]
fn exp_masked(x: f64) -> f64 {
    let out = x.exp();
    if out == 0.0 {
        EPS
    } else {
        out
    }
}

fn check_axis(axis: usize, ndim: usize) -> Result<()> {
    if axis >= ndim {
        return Err(Error::AxisOutOfBounds { axis, ndim });
    }
    Ok(())
}

/// Elementwise `exp(a)`; results that underflow to `0.0` become [`EPS`].
pub fn exp_mask_zero<S, D>(a: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let out = a.mapv(exp_masked);
    let masked = out.iter().filter(|&&y| y == EPS).count();
    if masked > 0 {
        trace!(masked, "exp underflowed to zero");
    }
    out
}

/// Elementwise `ln(a)`; `NaN` results become `0.0`. `ln(0.0)` stays `-inf`.
pub fn log_mask_zero<S, D>(a: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut masked = 0usize;
    let out = a.mapv(|x| {
        let y = x.ln();
        if y.is_nan() {
            masked += 1;
            0.0
        } else {
            y
        }
    });
    if masked > 0 {
        trace!(masked, "ln produced NaN");
    }
    out
}

/// Log of the sum of exponentials of `a` along `axis`.
///
/// A lane made only of `-inf` yields `NaN`; an empty lane yields `-inf`.
///
/// ```
/// use hmm_numerics::logsumexp;
/// use ndarray::Array1;
///
/// let a = Array1::range(0.0, 10.0, 1.0);
/// let out = logsumexp(&a, 0).unwrap().into_scalar();
/// assert!((out - 9.4586297444267107).abs() < 1e-12);
/// ```
pub fn logsumexp<S, D>(a: &ArrayBase<S, D>, axis: usize) -> Result<Array<f64, D::Smaller>>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    check_axis(axis, a.ndim())?;
    Ok(a.map_axis(Axis(axis), |lane| {
        let a_max = lane.fold(f64::NEG_INFINITY, |m, &x| m.max(x));
        let sum: f64 = lane.iter().map(|&x| exp_masked(x - a_max)).sum();
        sum.ln() + a_max
    }))
}

/// Normalizes `a` in place along `axis` (whole array for `None`). Masked cells
/// end at [`EPS`]; a slice summing to zero is divided by one.
pub fn normalize<S, D>(
    a: &mut ArrayBase<S, D>,
    axis: Option<usize>,
    mask: &StructuralMask,
) -> Result<()>
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    if let Some(axis) = axis {
        check_axis(axis, a.ndim())?;
    }
    mask.validate(a.shape())?;

    let mut view = a.view_mut().into_dyn();
    view += EPS;
    mask.fill(&mut view, 0.0);

    match axis {
        Some(axis) if view.ndim() > 1 => {
            let mut zero_sums = 0usize;
            let mut sums = view.sum_axis(Axis(axis));
            sums.mapv_inplace(|s| {
                if s == 0.0 {
                    zero_sums += 1;
                    1.0
                } else {
                    s
                }
            });
            if zero_sums > 0 {
                debug!(axis, zero_sums, "normalize: zero-sum slices left undivided");
            }
            let sums = sums.insert_axis(Axis(axis));
            view /= &sums;
        }
        _ => {
            let total = view.sum();
            if total == 0.0 {
                debug!("normalize: array sums to zero, left undivided");
            } else {
                view /= total;
            }
        }
    }

    mask.fill(&mut view, EPS);
    Ok(())
}
