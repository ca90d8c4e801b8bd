/*
 * // Copyright (c) Radzivon Bartoshyk 12/2025. All rights reserved.
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
use crate::err::{CycletError, try_vec};
use crate::filter::WaveletFilter;
use crate::util::{fmla, wrap_index};
use crate::{RefinementExecutor, WaveletSample};
use num_traits::AsPrimitive;

/// Dyadic signal interpolation through the wavelet cascade.
///
/// Each doubling step is an inverse transform step whose detail
/// contribution is identically zero, so the signal is resampled onto the
/// finer grid following the shape of the synthesis smoothing kernel. A
/// final rescale by the square root of the refinement ratio restores the
/// sample magnitudes, which makes the cascade constant-preserving.
pub(crate) struct CascadeRefinement<T> {
    filter: WaveletFilter<T>,
}

impl<T: WaveletSample> CascadeRefinement<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(filter: WaveletFilter<T>) -> Self {
        Self { filter }
    }

    /// One smooth-only reconstruction step: spreads the `n / 2` coarse
    /// samples in the low half of `signal[..n]` over the full `n` slots.
    fn smooth_step(&self, signal: &mut [T], n: usize, scratch: &mut [T]) {
        let half = n / 2;
        for v in scratch[..n].iter_mut() {
            *v = T::default();
        }
        for j in 0..half {
            let coarse = signal[j];
            for (k, &h) in self.filter.rec_lo().iter().enumerate() {
                let ia = wrap_index(2 * j as isize + k as isize - self.filter.off_rec_lo(), n);
                scratch[ia] = fmla(h, coarse, scratch[ia]);
            }
        }
        signal[..n].copy_from_slice(&scratch[..n]);
    }
}

impl<T: WaveletSample> RefinementExecutor<T> for CascadeRefinement<T>
where
    f64: AsPrimitive<T>,
{
    fn refine(&self, input: &[T], refined: &mut [T]) -> Result<(), CycletError> {
        let n = input.len();
        let n_new = refined.len();
        if !n.is_power_of_two() {
            return Err(CycletError::InputSizeNotPowerOfTwo(n));
        }
        if !n_new.is_power_of_two() || n_new < n {
            return Err(CycletError::RefinementNotDyadic(n, n_new));
        }

        refined[..n].copy_from_slice(input);
        if n_new == n {
            return Ok(());
        }

        let mut scratch = try_vec![T::default(); n_new];
        let mut m = 2 * n;
        while m <= n_new {
            self.smooth_step(refined, m, &mut scratch);
            m *= 2;
        }

        let scale: T = ((n_new as f64) / (n as f64)).sqrt().as_();
        for v in refined.iter_mut() {
            *v = *v * scale;
        }
        Ok(())
    }

    fn refine_to(&self, input: &[T], n_new: usize) -> Result<Vec<T>, CycletError> {
        let mut refined = try_vec![T::default(); n_new];
        self.refine(input, &mut refined)?;
        Ok(refined)
    }
}
