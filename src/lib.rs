/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Periodized discrete wavelet transforms over power-of-two signals.
//!
//! The crate covers four areas:
//! - a catalog of orthonormal and biorthogonal filters ([`WaveletFamily`])
//!   plus user-supplied filters ([`WaveletFilter`]),
//! - one-dimensional transforms, single level or as a packed in-place
//!   pyramid ([`DwtExecutor`]),
//! - separable N-dimensional transforms in standard or non-standard axis
//!   order ([`NdDwtExecutor`]),
//! - dyadic signal interpolation through the wavelet cascade
//!   ([`RefinementExecutor`]).
//!
//! Signals are treated as periodic, so transforms of any catalog filter
//! are exactly invertible with no boundary padding.
//!
//! ```
//! use cyclet::{Cyclet, WaveletFamily};
//!
//! let dwt = Cyclet::make_dwt_f64(WaveletFamily::Daubechies4);
//! let signal = [1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0];
//! let decomposed = dwt.dwt(&signal)?;
//! let restored = dwt.idwt(&decomposed)?;
//! assert!((restored[0] - signal[0]).abs() < 1e-9);
//! # Ok::<(), cyclet::CycletError>(())
//! ```
#![allow(clippy::excessive_precision)]

use num_traits::{AsPrimitive, MulAdd};
use std::fmt::Debug;
use std::ops::{Add, Mul};
use std::sync::Arc;

mod battle_lemarie;
mod burt_adelson;
mod coiflet;
mod daubechies;
mod err;
mod family;
mod filter;
mod haar;
mod nd;
mod pseudocoiflet;
mod refine;
mod spline;
mod transform;
mod util;

use crate::refine::CascadeRefinement;
use crate::transform::CyclicDwt;
pub use err::CycletError;
pub use family::WaveletFamily;
pub use filter::WaveletFilter;
pub use nd::{DecompositionOrder, MAX_DIMENSIONS};
pub use util::{max_pyramid_levels, wrap_index};

/// Scalar sample types the transforms operate on.
pub trait WaveletSample:
    Copy
    + Default
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
    + MulAdd<Self, Output = Self>
{
}

impl WaveletSample for f32 {}
impl WaveletSample for f64 {}

/// Trait for performing the forward discrete wavelet transform.
pub trait DwtForwardExecutor<T> {
    /// Executes one forward transform step on a 1D input signal.
    ///
    /// # Parameters
    /// - `input`: Slice of the input signal, power-of-two length.
    /// - `approx`: Mutable slice for the smooth (low-pass) coefficients.
    /// - `details`: Mutable slice for the detail (high-pass) coefficients.
    ///
    /// Both output slices must hold exactly half the input length.
    fn execute_forward(
        &self,
        input: &[T],
        approx: &mut [T],
        details: &mut [T],
    ) -> Result<(), CycletError>;

    /// Runs `levels` forward transform steps in-place.
    ///
    /// After each step the smooth coefficients occupy the low half of the
    /// block processed by that step, so level `k` works on the first
    /// `n / 2^k` slots. `levels` is clamped to the available dyadic
    /// depth.
    fn execute_forward_pyramid(&self, signal: &mut [T], levels: usize) -> Result<(), CycletError>;
}

/// Trait for performing the inverse discrete wavelet transform.
pub trait DwtInverseExecutor<T> {
    /// Reconstructs one transform step from smooth and detail
    /// coefficients.
    ///
    /// # Parameters
    /// - `approx`: Slice of smooth (low-pass) coefficients.
    /// - `details`: Slice of detail (high-pass) coefficients.
    /// - `output`: Mutable slice for the reconstructed signal, twice the
    ///   coefficient length.
    fn execute_inverse(
        &self,
        approx: &[T],
        details: &[T],
        output: &mut [T],
    ) -> Result<(), CycletError>;

    /// Undoes `levels` packed in-place transform steps, smallest block
    /// first.
    fn execute_inverse_pyramid(&self, signal: &mut [T], levels: usize) -> Result<(), CycletError>;
}

/// The result of a single-level decomposition.
pub struct Dwt<T> {
    /// Smooth (low-pass) coefficients of the signal.
    pub approximations: Vec<T>,
    /// Detail (high-pass) coefficients of the signal.
    pub details: Vec<T>,
}

/// Full 1D executor combining forward, inverse and allocating
/// conveniences.
pub trait DwtExecutor<T>: DwtForwardExecutor<T> + DwtInverseExecutor<T> + Send + Sync {
    /// Returns the longest kernel length of the underlying filter.
    fn filter_length(&self) -> usize;

    /// Single-level decomposition into freshly allocated coefficient
    /// vectors.
    fn dwt(&self, signal: &[T]) -> Result<Dwt<T>, CycletError>;

    /// Reconstructs the signal of a previous [`DwtExecutor::dwt`] call.
    fn idwt(&self, dwt: &Dwt<T>) -> Result<Vec<T>, CycletError>;
}

/// Separable N-dimensional transform over a row-major buffer.
///
/// Extents are listed slowest-varying axis first, exactly like the
/// dimensions of a nested array declaration, and every extent must be a
/// power of two. All operations work in-place.
pub trait NdDwtExecutor<T>: Send + Sync {
    /// Full-depth forward decomposition.
    fn execute_forward(&self, data: &mut [T], extents: &[usize]) -> Result<(), CycletError>;

    /// Full-depth inverse decomposition.
    fn execute_inverse(&self, data: &mut [T], extents: &[usize]) -> Result<(), CycletError>;

    /// Forward decomposition limited to `levels` steps per axis
    /// (standard order) or `levels` rounds (non-standard order).
    fn execute_forward_depth(
        &self,
        data: &mut [T],
        extents: &[usize],
        levels: usize,
    ) -> Result<(), CycletError>;

    /// Inverse of [`NdDwtExecutor::execute_forward_depth`] with the same
    /// `levels`.
    fn execute_inverse_depth(
        &self,
        data: &mut [T],
        extents: &[usize],
        levels: usize,
    ) -> Result<(), CycletError>;
}

/// Dyadic interpolation of a signal onto a finer grid.
pub trait RefinementExecutor<T>: Send + Sync {
    /// Refines `input` into `refined`, whose length must be `input`'s
    /// length times a power of two.
    fn refine(&self, input: &[T], refined: &mut [T]) -> Result<(), CycletError>;

    /// Allocating variant of [`RefinementExecutor::refine`].
    fn refine_to(&self, input: &[T], n_new: usize) -> Result<Vec<T>, CycletError>;
}

/// Factory for transform and refinement executors.
///
/// The typed `make_*_f32` / `make_*_f64` constructors wrap one generic
/// implementation per executor kind.
pub struct Cyclet {}

impl Cyclet {
    fn make_dwt_impl<T: WaveletSample>(
        family: WaveletFamily,
    ) -> Arc<dyn DwtExecutor<T> + Send + Sync>
    where
        f64: AsPrimitive<T>,
    {
        Arc::new(CyclicDwt::new(family.filter()))
    }

    fn make_nd_impl<T: WaveletSample>(
        family: WaveletFamily,
        order: DecompositionOrder,
    ) -> Arc<dyn NdDwtExecutor<T> + Send + Sync>
    where
        f64: AsPrimitive<T>,
    {
        Arc::new(nd::NdTransform::new(CyclicDwt::new(family.filter()), order))
    }

    fn make_refinement_impl<T: WaveletSample>(
        family: WaveletFamily,
    ) -> Arc<dyn RefinementExecutor<T> + Send + Sync>
    where
        f64: AsPrimitive<T>,
    {
        Arc::new(CascadeRefinement::new(family.filter()))
    }

    /// Creates a 1D transform executor for `f32` signals.
    pub fn make_dwt_f32(family: WaveletFamily) -> Arc<dyn DwtExecutor<f32> + Send + Sync> {
        Self::make_dwt_impl(family)
    }

    /// Creates a 1D transform executor for `f64` signals.
    pub fn make_dwt_f64(family: WaveletFamily) -> Arc<dyn DwtExecutor<f64> + Send + Sync> {
        Self::make_dwt_impl(family)
    }

    /// Creates a 1D transform executor from a user-supplied filter.
    pub fn make_custom_f32(filter: WaveletFilter<f32>) -> Arc<dyn DwtExecutor<f32> + Send + Sync> {
        Arc::new(CyclicDwt::new(filter))
    }

    /// Creates a 1D transform executor from a user-supplied filter.
    pub fn make_custom_f64(filter: WaveletFilter<f64>) -> Arc<dyn DwtExecutor<f64> + Send + Sync> {
        Arc::new(CyclicDwt::new(filter))
    }

    /// Creates an N-dimensional transform executor for `f32` buffers.
    pub fn make_nd_f32(
        family: WaveletFamily,
        order: DecompositionOrder,
    ) -> Arc<dyn NdDwtExecutor<f32> + Send + Sync> {
        Self::make_nd_impl(family, order)
    }

    /// Creates an N-dimensional transform executor for `f64` buffers.
    pub fn make_nd_f64(
        family: WaveletFamily,
        order: DecompositionOrder,
    ) -> Arc<dyn NdDwtExecutor<f64> + Send + Sync> {
        Self::make_nd_impl(family, order)
    }

    /// Creates an N-dimensional transform executor from a user-supplied
    /// filter.
    pub fn make_nd_custom_f32(
        filter: WaveletFilter<f32>,
        order: DecompositionOrder,
    ) -> Arc<dyn NdDwtExecutor<f32> + Send + Sync> {
        Arc::new(nd::NdTransform::new(CyclicDwt::new(filter), order))
    }

    /// Creates an N-dimensional transform executor from a user-supplied
    /// filter.
    pub fn make_nd_custom_f64(
        filter: WaveletFilter<f64>,
        order: DecompositionOrder,
    ) -> Arc<dyn NdDwtExecutor<f64> + Send + Sync> {
        Arc::new(nd::NdTransform::new(CyclicDwt::new(filter), order))
    }

    /// Creates a refinement executor for `f32` signals.
    pub fn make_refinement_f32(
        family: WaveletFamily,
    ) -> Arc<dyn RefinementExecutor<f32> + Send + Sync> {
        Self::make_refinement_impl(family)
    }

    /// Creates a refinement executor for `f64` signals.
    pub fn make_refinement_f64(
        family: WaveletFamily,
    ) -> Arc<dyn RefinementExecutor<f64> + Send + Sync> {
        Self::make_refinement_impl(family)
    }

    /// Creates a refinement executor from a user-supplied filter.
    pub fn make_refinement_custom_f32(
        filter: WaveletFilter<f32>,
    ) -> Arc<dyn RefinementExecutor<f32> + Send + Sync> {
        Arc::new(CascadeRefinement::new(filter))
    }

    /// Creates a refinement executor from a user-supplied filter.
    pub fn make_refinement_custom_f64(
        filter: WaveletFilter<f64>,
    ) -> Arc<dyn RefinementExecutor<f64> + Send + Sync> {
        Arc::new(CascadeRefinement::new(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_round_trip_f64() {
        let dwt = Cyclet::make_dwt_f64(WaveletFamily::Coiflet2);
        let signal = [1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0];
        let decomposed = dwt.dwt(&signal).unwrap();
        let restored = dwt.idwt(&decomposed).unwrap();
        for (i, (&got, &want)) in restored.iter().zip(signal.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "factory executor round trip diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_factory_round_trip_f32() {
        let dwt = Cyclet::make_dwt_f32(WaveletFamily::Haar);
        let signal = [4.0f32, -2.0, 8.0, 1.0];
        let decomposed = dwt.dwt(&signal).unwrap();
        let restored = dwt.idwt(&decomposed).unwrap();
        for (i, (&got, &want)) in restored.iter().zip(signal.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-5,
                "f32 round trip diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_custom_filter_matches_catalog() {
        let filter = WaveletFamily::Daubechies4.filter::<f64>();
        let custom = Cyclet::make_custom_f64(filter);
        let catalog = Cyclet::make_dwt_f64(WaveletFamily::Daubechies4);
        let signal = [1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0];
        let a = custom.dwt(&signal).unwrap();
        let b = catalog.dwt(&signal).unwrap();
        assert_eq!(a.approximations, b.approximations);
        assert_eq!(a.details, b.details);
    }

    #[test]
    fn test_executors_are_shareable() {
        fn assert_send_sync<S: Send + Sync>(_: &S) {}
        let dwt = Cyclet::make_dwt_f64(WaveletFamily::Haar);
        let nd = Cyclet::make_nd_f64(WaveletFamily::Haar, DecompositionOrder::NonStandard);
        let refine = Cyclet::make_refinement_f64(WaveletFamily::Haar);
        assert_send_sync(&dwt);
        assert_send_sync(&nd);
        assert_send_sync(&refine);
    }
}
