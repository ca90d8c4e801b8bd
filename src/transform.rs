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
use crate::util::{fmla, max_pyramid_levels, mirror_high_pass, wrap_index};
use crate::{Dwt, DwtExecutor, DwtForwardExecutor, DwtInverseExecutor, WaveletSample};
use num_traits::AsPrimitive;

/// The shortest signal a single transform step accepts.
pub(crate) const MIN_SIGNAL: usize = 2;

/// Periodized wavelet transform over one filter.
///
/// The detail kernels are materialized once at construction from the dual
/// smoothing kernels, so the hot loops only read plain coefficient slices.
pub(crate) struct CyclicDwt<T> {
    filter: WaveletFilter<T>,
    dec_hi: Vec<T>,
    rec_hi: Vec<T>,
}

impl<T: WaveletSample> CyclicDwt<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(filter: WaveletFilter<T>) -> Self {
        Self {
            dec_hi: mirror_high_pass(filter.rec_lo()),
            rec_hi: mirror_high_pass(filter.dec_lo()),
            filter,
        }
    }

    /// One packed transform step over `n` strided elements starting at
    /// `base`, in either direction.
    ///
    /// The forward step leaves the smooth half in the low `n / 2` packed
    /// slots and the detail half above it; the inverse step consumes that
    /// layout. `scratch` must hold at least `n` elements; the strided
    /// window is read fully before it is overwritten, so the step works
    /// in-place.
    pub(crate) fn convolve_strided(
        &self,
        data: &mut [T],
        base: usize,
        stride: usize,
        n: usize,
        forward: bool,
        scratch: &mut [T],
    ) {
        debug_assert!(scratch.len() >= n);
        debug_assert!(n % 2 == 0);
        let half = n / 2;
        if forward {
            for i in 0..half {
                let mut smooth = T::default();
                for (j, &h) in self.filter.dec_lo().iter().enumerate() {
                    let ia = wrap_index(2 * i as isize + j as isize - self.filter.off_dec_lo(), n);
                    smooth = fmla(h, data[base + stride * ia], smooth);
                }
                scratch[i] = smooth;

                let mut detail = T::default();
                for (j, &g) in self.dec_hi.iter().enumerate() {
                    let ia = wrap_index(2 * i as isize + j as isize - self.filter.off_dec_hi(), n);
                    detail = fmla(g, data[base + stride * ia], detail);
                }
                scratch[half + i] = detail;
            }
        } else {
            for v in scratch[..n].iter_mut() {
                *v = T::default();
            }
            for j in 0..half {
                let smooth = data[base + stride * j];
                for (k, &h) in self.filter.rec_lo().iter().enumerate() {
                    let ia = wrap_index(2 * j as isize + k as isize - self.filter.off_rec_lo(), n);
                    scratch[ia] = fmla(h, smooth, scratch[ia]);
                }
                let detail = data[base + stride * (j + half)];
                for (k, &g) in self.rec_hi.iter().enumerate() {
                    let ia = wrap_index(2 * j as isize + k as isize - self.filter.off_rec_hi(), n);
                    scratch[ia] = fmla(g, detail, scratch[ia]);
                }
            }
        }
        for (i, &v) in scratch[..n].iter().enumerate() {
            data[base + stride * i] = v;
        }
    }

    /// Runs `levels` packed transform steps over a strided window, the
    /// forward direction descending from `n` and the inverse ascending
    /// back to it. `levels` is clamped to the available dyadic depth.
    pub(crate) fn pyramid_strided(
        &self,
        data: &mut [T],
        base: usize,
        stride: usize,
        n: usize,
        levels: usize,
        forward: bool,
        scratch: &mut [T],
    ) {
        let levels = levels.min(max_pyramid_levels(n));
        if levels == 0 {
            return;
        }
        if forward {
            let mut m = n;
            for _ in 0..levels {
                self.convolve_strided(data, base, stride, m, true, scratch);
                m /= 2;
            }
        } else {
            let mut m = n >> (levels - 1);
            for _ in 0..levels {
                self.convolve_strided(data, base, stride, m, false, scratch);
                m *= 2;
            }
        }
    }

    fn check_signal_length(n: usize) -> Result<(), CycletError> {
        if !n.is_power_of_two() {
            return Err(CycletError::InputSizeNotPowerOfTwo(n));
        }
        if n < MIN_SIGNAL {
            return Err(CycletError::SignalTooShort(n, MIN_SIGNAL));
        }
        Ok(())
    }
}

impl<T: WaveletSample> DwtForwardExecutor<T> for CyclicDwt<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_forward(
        &self,
        input: &[T],
        approx: &mut [T],
        details: &mut [T],
    ) -> Result<(), CycletError> {
        let n = input.len();
        Self::check_signal_length(n)?;
        let half = n / 2;
        if approx.len() != half {
            return Err(CycletError::ApproxDetailsSize(approx.len(), half));
        }
        if details.len() != half {
            return Err(CycletError::ApproxDetailsSize(details.len(), half));
        }

        for (i, (a, d)) in approx.iter_mut().zip(details.iter_mut()).enumerate() {
            let mut smooth = T::default();
            for (j, &h) in self.filter.dec_lo().iter().enumerate() {
                let ia = wrap_index(2 * i as isize + j as isize - self.filter.off_dec_lo(), n);
                smooth = fmla(h, input[ia], smooth);
            }
            *a = smooth;

            let mut detail = T::default();
            for (j, &g) in self.dec_hi.iter().enumerate() {
                let ia = wrap_index(2 * i as isize + j as isize - self.filter.off_dec_hi(), n);
                detail = fmla(g, input[ia], detail);
            }
            *d = detail;
        }
        Ok(())
    }

    fn execute_forward_pyramid(&self, signal: &mut [T], levels: usize) -> Result<(), CycletError> {
        let n = signal.len();
        Self::check_signal_length(n)?;
        let mut scratch = try_vec![T::default(); n];
        self.pyramid_strided(signal, 0, 1, n, levels, true, &mut scratch);
        Ok(())
    }
}

impl<T: WaveletSample> DwtInverseExecutor<T> for CyclicDwt<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_inverse(
        &self,
        approx: &[T],
        details: &[T],
        output: &mut [T],
    ) -> Result<(), CycletError> {
        if approx.len() != details.len() {
            return Err(CycletError::ApproxDetailsNotMatches(
                approx.len(),
                details.len(),
            ));
        }
        let n = 2 * approx.len();
        Self::check_signal_length(n)?;
        if output.len() != n {
            return Err(CycletError::OutputSizeNotMatches(output.len(), n));
        }

        for v in output.iter_mut() {
            *v = T::default();
        }
        for (j, (&smooth, &detail)) in approx.iter().zip(details.iter()).enumerate() {
            for (k, &h) in self.filter.rec_lo().iter().enumerate() {
                let ia = wrap_index(2 * j as isize + k as isize - self.filter.off_rec_lo(), n);
                output[ia] = fmla(h, smooth, output[ia]);
            }
            for (k, &g) in self.rec_hi.iter().enumerate() {
                let ia = wrap_index(2 * j as isize + k as isize - self.filter.off_rec_hi(), n);
                output[ia] = fmla(g, detail, output[ia]);
            }
        }
        Ok(())
    }

    fn execute_inverse_pyramid(&self, signal: &mut [T], levels: usize) -> Result<(), CycletError> {
        let n = signal.len();
        Self::check_signal_length(n)?;
        let mut scratch = try_vec![T::default(); n];
        self.pyramid_strided(signal, 0, 1, n, levels, false, &mut scratch);
        Ok(())
    }
}

impl<T: WaveletSample> DwtExecutor<T> for CyclicDwt<T>
where
    f64: AsPrimitive<T>,
{
    fn filter_length(&self) -> usize {
        self.filter.dec_lo().len().max(self.filter.rec_lo().len())
    }

    fn dwt(&self, signal: &[T]) -> Result<Dwt<T>, CycletError> {
        let half = signal.len() / 2;
        let mut approximations = try_vec![T::default(); half];
        let mut details = try_vec![T::default(); half];
        self.execute_forward(signal, &mut approximations, &mut details)?;
        Ok(Dwt {
            approximations,
            details,
        })
    }

    fn idwt(&self, dwt: &Dwt<T>) -> Result<Vec<T>, CycletError> {
        let mut output = try_vec![T::default(); 2 * dwt.approximations.len()];
        self.execute_inverse(&dwt.approximations, &dwt.details, &mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WaveletFamily;

    fn executor(family: WaveletFamily) -> CyclicDwt<f64> {
        CyclicDwt::new(family.filter())
    }

    #[test]
    fn test_daubechies4_forward_reference() {
        let input = [1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0];
        let dwt = executor(WaveletFamily::Daubechies4).dwt(&input).unwrap();
        let approx_ref = [
            1.379538385313,
            4.113231164568,
            3.829028128096,
            0.577697258635,
        ];
        let detail_ref = [
            0.129409522551,
            -1.448888739434,
            0.129409522551,
            -0.224143868042,
        ];
        for (i, (&got, &want)) in dwt.approximations.iter().zip(approx_ref.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "Daubechies-4 smooth component diverged at {i}: got {got}, expected {want}"
            );
        }
        for (i, (&got, &want)) in dwt.details.iter().zip(detail_ref.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "Daubechies-4 detail component diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_haar_full_pyramid_reference() {
        let mut signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        executor(WaveletFamily::Haar)
            .execute_forward_pyramid(&mut signal, 3)
            .unwrap();
        let reference = [
            12.727922061358,
            5.656854249492,
            2.0,
            2.0,
            0.707106781187,
            0.707106781187,
            0.707106781187,
            0.707106781187,
        ];
        for (i, (&got, &want)) in signal.iter().zip(reference.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "Haar pyramid diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_single_level_round_trip() {
        let input = [
            0.5, -1.25, 3.0, 2.75, -0.5, 4.0, 1.0, -2.0, 0.25, 1.5, -3.5, 2.0, 0.0, 1.0, -1.0, 6.0,
        ];
        for family in WaveletFamily::ALL {
            if family == WaveletFamily::BattleLemarie || family == WaveletFamily::Spline3_7 {
                // Truncated published coefficients, not an exact
                // reconstruction pair.
                continue;
            }
            let xfrm = executor(family);
            let dwt = xfrm.dwt(&input).unwrap();
            let restored = xfrm.idwt(&dwt).unwrap();
            for (i, (&got, &want)) in restored.iter().zip(input.iter()).enumerate() {
                assert!(
                    (got - want).abs() < 1e-7,
                    "{family:?} single-level round trip diverged at {i}: got {got}, expected {want}"
                );
            }
        }
    }

    #[test]
    fn test_pyramid_round_trip_partial_depth() {
        let input = [
            1.0, 9.0, -4.0, 2.5, 0.75, -6.0, 3.0, 3.0, -1.5, 2.0, 8.0, -7.25, 0.5, 0.5, 2.0, -9.0,
        ];
        for levels in 0..=4 {
            let xfrm = executor(WaveletFamily::Spline2_4);
            let mut signal = input;
            xfrm.execute_forward_pyramid(&mut signal, levels).unwrap();
            xfrm.execute_inverse_pyramid(&mut signal, levels).unwrap();
            for (i, (&got, &want)) in signal.iter().zip(input.iter()).enumerate() {
                assert!(
                    (got - want).abs() < 1e-7,
                    "depth-{levels} pyramid round trip diverged at {i}: got {got}, expected {want}"
                );
            }
        }
    }

    #[test]
    fn test_haar_constant_signal() {
        let input = [1.0, 1.0, 1.0, 1.0];
        let dwt = executor(WaveletFamily::Haar).dwt(&input).unwrap();
        let sqrt2 = std::f64::consts::SQRT_2;
        for (i, &a) in dwt.approximations.iter().enumerate() {
            assert!(
                (a - sqrt2).abs() < 1e-12,
                "Haar smooth of a constant should be sqrt(2) at {i}, got {a}"
            );
        }
        for (i, &d) in dwt.details.iter().enumerate() {
            assert!(
                d.abs() < 1e-12,
                "Haar detail of a constant should vanish at {i}, got {d}"
            );
        }
        let restored = executor(WaveletFamily::Haar).idwt(&dwt).unwrap();
        for (i, (&got, &want)) in restored.iter().zip(input.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-12,
                "Haar reconstruction diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_exchanged_filter_round_trips() {
        let filter = WaveletFamily::Spline2_2.filter::<f64>().exchange();
        let xfrm = CyclicDwt::new(filter);
        let input = [2.0, -1.0, 0.5, 3.0, 4.0, -2.5, 1.0, 0.0];
        let dwt = xfrm.dwt(&input).unwrap();
        let restored = xfrm.idwt(&dwt).unwrap();
        for (i, (&got, &want)) in restored.iter().zip(input.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-10,
                "exchanged filter round trip diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_orthogonal_transform_preserves_energy() {
        let input = [1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 0.0, 1.0];
        let dwt = executor(WaveletFamily::Daubechies4).dwt(&input).unwrap();
        let energy_in: f64 = input.iter().map(|x| x * x).sum();
        let energy_out: f64 = dwt
            .approximations
            .iter()
            .chain(dwt.details.iter())
            .map(|x| x * x)
            .sum();
        assert!(
            ((energy_in - energy_out) / energy_in).abs() < 1e-12,
            "orthonormal transform must preserve energy: {energy_in} vs {energy_out}"
        );
    }

    #[test]
    fn test_forward_rejects_bad_sizes() {
        let xfrm = executor(WaveletFamily::Haar);
        let input = [1.0; 6];
        let mut approx = [0.0; 3];
        let mut details = [0.0; 3];
        assert_eq!(
            xfrm.execute_forward(&input, &mut approx, &mut details),
            Err(CycletError::InputSizeNotPowerOfTwo(6))
        );

        let input = [1.0; 8];
        let mut short = [0.0; 3];
        let mut details = [0.0; 4];
        assert_eq!(
            xfrm.execute_forward(&input, &mut short, &mut details),
            Err(CycletError::ApproxDetailsSize(3, 4))
        );

        let input = [1.0];
        let mut approx = [0.0; 0];
        let mut details = [0.0; 0];
        assert_eq!(
            xfrm.execute_forward(&input, &mut approx, &mut details),
            Err(CycletError::SignalTooShort(1, MIN_SIGNAL))
        );
    }

    #[test]
    fn test_inverse_rejects_bad_sizes() {
        let xfrm = executor(WaveletFamily::Haar);
        let approx = [1.0; 4];
        let details = [1.0; 3];
        let mut output = [0.0; 8];
        assert_eq!(
            xfrm.execute_inverse(&approx, &details, &mut output),
            Err(CycletError::ApproxDetailsNotMatches(4, 3))
        );

        let details = [1.0; 4];
        let mut output = [0.0; 7];
        assert_eq!(
            xfrm.execute_inverse(&approx, &details, &mut output),
            Err(CycletError::OutputSizeNotMatches(7, 8))
        );
    }
}
