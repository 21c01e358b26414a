use std::iter::FusedIterator;
use std::slice;

use tracing::debug;

use crate::error::{Error, Result};

const NO_LENGTHS: &[usize] = &[];

#[derive(Clone, Debug)]
pub struct Segments<'a> {
    whole: Option<usize>,
    lengths: slice::Iter<'a, usize>,
    start: usize,
}

// No lengths means one sequence over all rows.
pub fn iter_from_x_lengths(n_samples: usize, lengths: Option<&[usize]>) -> Result<Segments<'_>> {
    let Some(lengths) = lengths else {
        return Ok(Segments {
            whole: Some(n_samples),
            lengths: NO_LENGTHS.iter(),
            start: 0,
        });
    };

    let total = lengths.iter().fold(0usize, |acc, &l| acc.saturating_add(l));
    if total > n_samples {
        return Err(Error::LengthsExceedSamples { total, n_samples });
    }
    debug!(n_samples, sequences = lengths.len(), total, "splitting samples");

    Ok(Segments {
        whole: None,
        lengths: lengths.iter(),
        start: 0,
    })
}

impl Iterator for Segments<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(n) = self.whole.take() {
            return Some((0, n));
        }
        let len = *self.lengths.next()?;
        let segment = (self.start, self.start + len);
        self.start = segment.1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.whole.is_some()) + self.lengths.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}
