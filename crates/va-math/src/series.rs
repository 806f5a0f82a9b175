//! `Series` — a time-indexed sample path of real values.
//!
//! This is a thin newtype around `nalgebra::DVector<f64>` carrying one value
//! per time step: a position path, a per-unit PnL stream, a realized PnL
//! stream.  All arithmetic is element-wise over equally long operands and
//! allocates fresh output; nothing is mutated in place.

use nalgebra::DVector;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use va_core::{Real, Size};

/// A dynamically-sized sample path of `Real` values, one per time step.
///
/// Two series entering a binary operation must cover the same time grid,
/// i.e. have the same length.  A length disagreement is a caller bug and
/// panics via the underlying `nalgebra` dimension check rather than being
/// silently broadcast or truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct Series(DVector<Real>);

impl Series {
    /// Create a zero-filled series of length `n`.
    pub fn zeros(n: Size) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create a series filled with `value`.
    pub fn from_element(n: Size, value: Real) -> Self {
        Self(DVector::from_element(n, value))
    }

    /// Create a series from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create a series from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of time steps.
    pub fn size(&self) -> Size {
        self.0.len()
    }

    /// Return `true` if the series covers no time steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the values as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Iterator over the values in time order.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Element-wise product with another series of the same length.
    ///
    /// This is the projection primitive: scaling a per-unit stream by a
    /// position path held at each step.
    ///
    /// # Panics
    /// Panics if `other` has a different length.
    pub fn component_mul(&self, other: &Series) -> Self {
        Self(self.0.component_mul(&other.0))
    }

    /// Sum over all time steps.
    pub fn sum(&self) -> Real {
        self.0.sum()
    }

    /// Running total: element `i` of the result is the sum of elements
    /// `0..=i`.  Turns per-step PnL into a cumulative PnL path.
    pub fn cumulative(&self) -> Self {
        let mut acc = 0.0;
        Self(self.0.map(|x| {
            acc += x;
            acc
        }))
    }

    /// Apply a function element-wise, returning a new series.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Real) -> Self {
        Self(&self.0 * scalar)
    }
}

// ── From / Into conversions ───────────────────────────────────────────────────

impl From<DVector<Real>> for Series {
    fn from(v: DVector<Real>) -> Self {
        Self(v)
    }
}

impl From<Series> for DVector<Real> {
    fn from(s: Series) -> Self {
        s.0
    }
}

impl From<Vec<Real>> for Series {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl From<&[Real]> for Series {
    fn from(s: &[Real]) -> Self {
        Self::from_slice(s)
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<Size> for Series {
    type Output = Real;
    fn index(&self, i: Size) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<Size> for Series {
    fn index_mut(&mut self, i: Size) -> &mut Real {
        &mut self.0[i]
    }
}

// ── Element-wise arithmetic ───────────────────────────────────────────────────

impl Add for &Series {
    type Output = Series;
    fn add(self, rhs: &Series) -> Series {
        Series(&self.0 + &rhs.0)
    }
}

impl Add for Series {
    type Output = Series;
    fn add(self, rhs: Series) -> Series {
        Series(self.0 + rhs.0)
    }
}

impl Sub for &Series {
    type Output = Series;
    fn sub(self, rhs: &Series) -> Series {
        Series(&self.0 - &rhs.0)
    }
}

impl Sub for Series {
    type Output = Series;
    fn sub(self, rhs: Series) -> Series {
        Series(self.0 - rhs.0)
    }
}

impl Mul<Real> for &Series {
    type Output = Series;
    fn mul(self, rhs: Real) -> Series {
        Series(&self.0 * rhs)
    }
}

impl Mul<Real> for Series {
    type Output = Series;
    fn mul(self, rhs: Real) -> Series {
        Series(self.0 * rhs)
    }
}

impl Mul<&Series> for Real {
    type Output = Series;
    fn mul(self, rhs: &Series) -> Series {
        Series(&rhs.0 * self)
    }
}

impl Div<Real> for &Series {
    type Output = Series;
    fn div(self, rhs: Real) -> Series {
        Series(&self.0 / rhs)
    }
}

impl Div<Real> for Series {
    type Output = Series;
    fn div(self, rhs: Real) -> Series {
        Series(self.0 / rhs)
    }
}

impl Neg for &Series {
    type Output = Series;
    fn neg(self) -> Series {
        Series(-&self.0)
    }
}

impl Neg for Series {
    type Output = Series;
    fn neg(self) -> Series {
        Series(-self.0)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
