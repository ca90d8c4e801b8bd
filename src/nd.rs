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
use crate::transform::{CyclicDwt, MIN_SIGNAL};
use crate::{NdDwtExecutor, WaveletSample};
use num_traits::AsPrimitive;

/// Multidimensional transforms support at most this many dimensions.
pub const MAX_DIMENSIONS: usize = 32;

/// How a separable multidimensional decomposition interleaves its axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecompositionOrder {
    /// Each axis is decomposed to full depth before the next one starts.
    Standard,
    /// All axes are decomposed one level per round, the smooth hypercube
    /// shrinking between rounds.
    NonStandard,
}

/// Separable N-dimensional transform over a row-major buffer.
///
/// Extents are given slowest-varying first, as in a nested C array
/// declaration; internally they are reversed so index 0 is the
/// fastest-varying axis and strides grow with the axis number.
pub(crate) struct NdTransform<T> {
    dwt: CyclicDwt<T>,
    order: DecompositionOrder,
}

struct Layout {
    rev: Vec<usize>,
    inc: Vec<usize>,
    total: usize,
}

fn check_extents(extents: &[usize], len: usize) -> Result<Layout, CycletError> {
    let nd = extents.len();
    if nd == 0 {
        return Err(CycletError::ZeroedDimensions);
    }
    if nd > MAX_DIMENSIONS {
        return Err(CycletError::TooManyDimensions(nd, MAX_DIMENSIONS));
    }
    for (axis, &extent) in extents.iter().enumerate() {
        if !extent.is_power_of_two() {
            return Err(CycletError::ExtentNotPowerOfTwo(axis, extent));
        }
    }
    let mut rev = try_vec![0usize; nd];
    for (d, slot) in rev.iter_mut().enumerate() {
        *slot = extents[nd - 1 - d];
    }
    let mut inc = try_vec![0usize; nd];
    let mut total = 1usize;
    for (d, slot) in inc.iter_mut().enumerate() {
        *slot = total;
        total *= rev[d];
    }
    if total != len {
        return Err(CycletError::ExtentsProductMismatch(total, len));
    }
    Ok(Layout { rev, inc, total })
}

impl<T: WaveletSample> NdTransform<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(dwt: CyclicDwt<T>, order: DecompositionOrder) -> Self {
        Self { dwt, order }
    }

    fn scratch_for(&self, layout: &Layout) -> Result<Vec<T>, CycletError> {
        let longest = layout.rev.iter().copied().max().unwrap_or(1);
        Ok(try_vec![T::default(); longest])
    }

    /// Full per-axis pyramids, one axis after another. Axes are
    /// independent here, so forward and inverse walk them in the same
    /// order.
    fn run_standard(
        &self,
        data: &mut [T],
        layout: &Layout,
        levels: usize,
        forward: bool,
    ) -> Result<(), CycletError> {
        let mut scratch = self.scratch_for(layout)?;
        for d in 0..layout.rev.len() {
            let extent = layout.rev[d];
            let inc = layout.inc[d];
            let inc_next = extent * inc;
            if extent < MIN_SIGNAL {
                continue;
            }
            let mut i2 = 0;
            while i2 < layout.total {
                for i1 in 0..inc {
                    self.dwt.pyramid_strided(
                        data,
                        i1 + i2,
                        inc,
                        extent,
                        levels,
                        forward,
                        &mut scratch,
                    );
                }
                i2 += inc_next;
            }
        }
        Ok(())
    }

    /// One transform step along axis `d0` for every line of the current
    /// smooth block. Lines are enumerated and the enumeration index is
    /// decoded back into a buffer offset, skipping axes not active in
    /// this round.
    #[allow(clippy::too_many_arguments)]
    fn convolve_block(
        &self,
        data: &mut [T],
        layout: &Layout,
        nb: &[usize],
        active: impl Fn(usize) -> bool,
        d0: usize,
        nb_tot: usize,
        forward: bool,
        scratch: &mut [T],
    ) {
        let n_conv = nb_tot / nb[d0];
        for i_conv in 0..n_conv {
            let mut ia = 0usize;
            let mut decoded = i_conv;
            for d in 0..layout.rev.len() {
                if d != d0 && active(d) {
                    ia += layout.inc[d] * (decoded % nb[d]);
                    decoded /= nb[d];
                }
            }
            self.dwt
                .convolve_strided(data, ia, layout.inc[d0], nb[d0], forward, scratch);
        }
    }

    fn run_nonstd_forward(
        &self,
        data: &mut [T],
        layout: &Layout,
        rounds: usize,
    ) -> Result<(), CycletError> {
        let mut scratch = self.scratch_for(layout)?;
        let nd = layout.rev.len();
        let mut nb = layout.rev.clone();
        let mut nb_tot = layout.total;
        let mut remaining = rounds;
        while nb_tot > 1 && remaining > 0 {
            for d0 in 0..nd {
                if nb[d0] <= 1 {
                    continue;
                }
                self.convolve_block(data, layout, &nb, |_| true, d0, nb_tot, true, &mut scratch);
            }
            nb_tot = 1;
            for slot in nb.iter_mut() {
                if *slot > 1 {
                    *slot /= 2;
                }
                nb_tot *= *slot;
            }
            remaining -= 1;
        }
        Ok(())
    }

    /// Undoes the last `rounds` rounds of the non-standard decomposition,
    /// ascending from the smooth block the forward pass left behind.
    ///
    /// Non-hypercubic grids need care: a collapsed axis only re-stretches
    /// in the rounds where its remaining ratio ties the largest one,
    /// mirroring the rounds in which the forward pass stopped halving it.
    fn run_nonstd_inverse(
        &self,
        data: &mut [T],
        layout: &Layout,
        rounds: usize,
    ) -> Result<(), CycletError> {
        let mut scratch = self.scratch_for(layout)?;
        let nd = layout.rev.len();

        // Replay the forward halving schedule to find the block the
        // ascent starts from.
        let mut nb = layout.rev.clone();
        let mut nb_tot = layout.total;
        let mut remaining = rounds;
        while nb_tot > 1 && remaining > 0 {
            nb_tot = 1;
            for slot in nb.iter_mut() {
                if *slot > 1 {
                    *slot /= 2;
                }
                nb_tot *= *slot;
            }
            remaining -= 1;
        }

        let mut stretch_ok = try_vec![false; nd];
        while nb_tot < layout.total {
            let mut d_max = 0;
            for d in 1..nd {
                if layout.rev[d] * nb[d_max] >= layout.rev[d_max] * nb[d] {
                    d_max = d;
                }
            }
            for d in 0..nd {
                stretch_ok[d] = nb[d] < layout.rev[d]
                    && (nb[d] > 1 || layout.rev[d] * nb[d_max] >= layout.rev[d_max] * nb[d]);
            }

            for d0 in (0..nd).rev() {
                if !stretch_ok[d0] {
                    continue;
                }
                nb[d0] *= 2;
                nb_tot *= 2;
            }

            for d0 in (0..nd).rev() {
                if !stretch_ok[d0] {
                    continue;
                }
                self.convolve_block(
                    data,
                    layout,
                    &nb,
                    |d| stretch_ok[d],
                    d0,
                    nb_tot,
                    false,
                    &mut scratch,
                );
            }
        }
        Ok(())
    }
}

impl<T: WaveletSample> NdDwtExecutor<T> for NdTransform<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_forward(&self, data: &mut [T], extents: &[usize]) -> Result<(), CycletError> {
        self.execute_forward_depth(data, extents, usize::MAX)
    }

    fn execute_inverse(&self, data: &mut [T], extents: &[usize]) -> Result<(), CycletError> {
        self.execute_inverse_depth(data, extents, usize::MAX)
    }

    fn execute_forward_depth(
        &self,
        data: &mut [T],
        extents: &[usize],
        levels: usize,
    ) -> Result<(), CycletError> {
        let layout = check_extents(extents, data.len())?;
        match self.order {
            DecompositionOrder::Standard => self.run_standard(data, &layout, levels, true),
            DecompositionOrder::NonStandard => self.run_nonstd_forward(data, &layout, levels),
        }
    }

    fn execute_inverse_depth(
        &self,
        data: &mut [T],
        extents: &[usize],
        levels: usize,
    ) -> Result<(), CycletError> {
        let layout = check_extents(extents, data.len())?;
        match self.order {
            DecompositionOrder::Standard => self.run_standard(data, &layout, levels, false),
            DecompositionOrder::NonStandard => self.run_nonstd_inverse(data, &layout, levels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DwtForwardExecutor, WaveletFamily};

    fn executor(family: WaveletFamily, order: DecompositionOrder) -> NdTransform<f64> {
        NdTransform::new(CyclicDwt::new(family.filter()), order)
    }

    #[test]
    fn test_haar_2x2_standard_reference() {
        let mut data = [1.0, 2.0, 3.0, 4.0];
        executor(WaveletFamily::Haar, DecompositionOrder::Standard)
            .execute_forward(&mut data, &[2, 2])
            .unwrap();
        let reference = [5.0, 1.0, 2.0, 0.0];
        for (i, (&got, &want)) in data.iter().zip(reference.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-12,
                "Haar 2x2 transform diverged at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_constant_grid_agrees_across_orders() {
        // On a constant grid every detail vanishes, so both axis orders
        // concentrate everything into the single smooth coefficient.
        for order in [DecompositionOrder::Standard, DecompositionOrder::NonStandard] {
            let mut data = [1.0f64; 16];
            executor(WaveletFamily::Haar, order)
                .execute_forward(&mut data, &[4, 4])
                .unwrap();
            assert!(
                (data[0] - 4.0).abs() < 1e-12,
                "{order:?} smooth coefficient should be 4.0, got {}",
                data[0]
            );
            for (i, &v) in data.iter().enumerate().skip(1) {
                assert!(
                    v.abs() < 1e-12,
                    "{order:?} detail at {i} should vanish, got {v}"
                );
            }
        }
    }

    #[test]
    fn test_standard_1d_matches_pyramid() {
        let input = [1.0, 9.0, -4.0, 2.5, 0.75, -6.0, 3.0, 3.0];
        let mut nd_data = input;
        executor(WaveletFamily::Daubechies4, DecompositionOrder::Standard)
            .execute_forward(&mut nd_data, &[8])
            .unwrap();

        let dwt = CyclicDwt::<f64>::new(WaveletFamily::Daubechies4.filter());
        let mut pyramid = input;
        dwt.execute_forward_pyramid(&mut pyramid, 3).unwrap();

        for (i, (&got, &want)) in nd_data.iter().zip(pyramid.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-12,
                "1-dimensional grid should match packed pyramid at {i}: got {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_square_round_trip_both_orders() {
        let input: Vec<f64> = (0..16).map(|i| ((i * 37 + 11) % 17) as f64 - 8.0).collect();
        for order in [DecompositionOrder::Standard, DecompositionOrder::NonStandard] {
            for family in [
                WaveletFamily::Haar,
                WaveletFamily::Daubechies4,
                WaveletFamily::Spline2_2,
                WaveletFamily::Pseudocoiflet4_4,
            ] {
                let xfrm = executor(family, order);
                let mut data = input.clone();
                xfrm.execute_forward(&mut data, &[4, 4]).unwrap();
                xfrm.execute_inverse(&mut data, &[4, 4]).unwrap();
                for (i, (&got, &want)) in data.iter().zip(input.iter()).enumerate() {
                    assert!(
                        (got - want).abs() < 1e-7,
                        "{family:?}/{order:?} 4x4 round trip diverged at {i}: got {got}, expected {want}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_square_round_trip_both_orders() {
        let input: Vec<f64> = (0..32).map(|i| ((i * 29 + 5) % 23) as f64 * 0.5).collect();
        for order in [DecompositionOrder::Standard, DecompositionOrder::NonStandard] {
            let xfrm = executor(WaveletFamily::Daubechies4, order);
            let mut data = input.clone();
            xfrm.execute_forward(&mut data, &[4, 8]).unwrap();
            xfrm.execute_inverse(&mut data, &[4, 8]).unwrap();
            for (i, (&got, &want)) in data.iter().zip(input.iter()).enumerate() {
                assert!(
                    (got - want).abs() < 1e-7,
                    "{order:?} 4x8 round trip diverged at {i}: got {got}, expected {want}"
                );
            }
        }
    }

    #[test]
    fn test_3d_round_trip() {
        let input: Vec<f64> = (0..32).map(|i| ((i * 13 + 7) % 11) as f64 - 5.0).collect();
        for order in [DecompositionOrder::Standard, DecompositionOrder::NonStandard] {
            let xfrm = executor(WaveletFamily::Haar, order);
            let mut data = input.clone();
            xfrm.execute_forward(&mut data, &[2, 4, 4]).unwrap();
            xfrm.execute_inverse(&mut data, &[2, 4, 4]).unwrap();
            for (i, (&got, &want)) in data.iter().zip(input.iter()).enumerate() {
                assert!(
                    (got - want).abs() < 1e-10,
                    "{order:?} 2x4x4 round trip diverged at {i}: got {got}, expected {want}"
                );
            }
        }
    }

    #[test]
    fn test_depth_limited_round_trip() {
        let input: Vec<f64> = (0..64).map(|i| ((i * 31 + 3) % 19) as f64 * 0.25).collect();
        for order in [DecompositionOrder::Standard, DecompositionOrder::NonStandard] {
            for depth in 1..=3 {
                let xfrm = executor(WaveletFamily::Spline2_2, order);
                let mut data = input.clone();
                xfrm.execute_forward_depth(&mut data, &[8, 8], depth).unwrap();
                xfrm.execute_inverse_depth(&mut data, &[8, 8], depth).unwrap();
                for (i, (&got, &want)) in data.iter().zip(input.iter()).enumerate() {
                    assert!(
                        (got - want).abs() < 1e-7,
                        "{order:?} depth-{depth} round trip diverged at {i}: got {got}, expected {want}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_extent_validation() {
        let xfrm = executor(WaveletFamily::Haar, DecompositionOrder::Standard);
        let mut data = [0.0f64; 8];
        assert_eq!(
            xfrm.execute_forward(&mut data, &[]),
            Err(CycletError::ZeroedDimensions)
        );
        assert_eq!(
            xfrm.execute_forward(&mut data, &[2, 3]),
            Err(CycletError::ExtentNotPowerOfTwo(1, 3))
        );
        assert_eq!(
            xfrm.execute_forward(&mut data, &[4, 4]),
            Err(CycletError::ExtentsProductMismatch(16, 8))
        );
        let extents = [2usize; MAX_DIMENSIONS + 1];
        assert_eq!(
            xfrm.execute_forward(&mut data, &extents),
            Err(CycletError::TooManyDimensions(
                MAX_DIMENSIONS + 1,
                MAX_DIMENSIONS
            ))
        );
    }
}
