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
use crate::WaveletSample;
use crate::filter::WaveletFilter;
use num_traits::AsPrimitive;
use std::f64::consts::SQRT_2;

// Pseudocoiflet (4,4) biorthogonal filter pair.
//
// Source: Reissell, "Multiresolution Geometric Algorithms Using Wavelets I:
// Representation for Parametric Curves and Surfaces", UBC TR 93-17, p. 33.

static PSEUDOCOIFLET_4_LO: [f64; 14] = [
    SQRT_2 * -1.0 / 512.0,
    0.0,
    SQRT_2 * 18.0 / 512.0,
    SQRT_2 * -16.0 / 512.0,
    SQRT_2 * -63.0 / 512.0,
    SQRT_2 * 144.0 / 512.0,
    SQRT_2 * 348.0 / 512.0,
    SQRT_2 * 144.0 / 512.0,
    SQRT_2 * -63.0 / 512.0,
    SQRT_2 * -16.0 / 512.0,
    SQRT_2 * 18.0 / 512.0,
    0.0,
    SQRT_2 * -1.0 / 512.0,
    0.0,
];

static PSEUDOCOIFLET_4_DUAL_LO: [f64; 8] = [
    0.0,
    SQRT_2 * -1.0 / 32.0,
    0.0,
    SQRT_2 * 9.0 / 32.0,
    SQRT_2 * 16.0 / 32.0,
    SQRT_2 * 9.0 / 32.0,
    0.0,
    SQRT_2 * -1.0 / 32.0,
];

pub(crate) fn pseudocoiflet4_4<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&PSEUDOCOIFLET_4_LO, &PSEUDOCOIFLET_4_DUAL_LO, [6, 2, 4, 6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudocoiflet_normalization() {
        let lo: f64 = PSEUDOCOIFLET_4_LO.iter().sum();
        let dual: f64 = PSEUDOCOIFLET_4_DUAL_LO.iter().sum();
        assert!(
            (lo - SQRT_2).abs() < 1e-14,
            "Pseudocoiflet analysis taps must sum to sqrt(2), got {lo}"
        );
        assert!(
            (dual - SQRT_2).abs() < 1e-14,
            "Pseudocoiflet synthesis taps must sum to sqrt(2), got {dual}"
        );
    }
}
