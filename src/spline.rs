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

// Biorthogonal spline filter pairs.
//
// Source: Daubechies, "Ten Lectures on Wavelets", Table 8.2. The (3,7)
// synthesis kernel carries the 363 coefficients misprinted as 336 in the
// book. Analysis kernels are shared between pairs of the same spline order.

static SPLINE_2: [f64; 6] = [
    SQRT_2 * -0.125,
    SQRT_2 * 0.25,
    SQRT_2 * 0.75,
    SQRT_2 * 0.25,
    SQRT_2 * -0.125,
    0.0,
];

static SPLINE_3: [f64; 4] = [
    SQRT_2 * 1.0 / 8.0,
    SQRT_2 * 3.0 / 8.0,
    SQRT_2 * 3.0 / 8.0,
    SQRT_2 * 1.0 / 8.0,
];

static SPLINE_4: [f64; 10] = [
    SQRT_2 * 3.0 / 128.0,
    SQRT_2 * -6.0 / 128.0,
    SQRT_2 * -16.0 / 128.0,
    SQRT_2 * 38.0 / 128.0,
    SQRT_2 * 90.0 / 128.0,
    SQRT_2 * 38.0 / 128.0,
    SQRT_2 * -16.0 / 128.0,
    SQRT_2 * -6.0 / 128.0,
    SQRT_2 * 3.0 / 128.0,
    0.0,
];

static SPLINE_DUAL_2: [f64; 4] = [
    0.0,
    SQRT_2 * 1.0 / 4.0,
    SQRT_2 * 2.0 / 4.0,
    SQRT_2 * 1.0 / 4.0,
];

static SPLINE_DUAL_3: [f64; 8] = [
    SQRT_2 * 3.0 / 64.0,
    SQRT_2 * -9.0 / 64.0,
    SQRT_2 * -7.0 / 64.0,
    SQRT_2 * 45.0 / 64.0,
    SQRT_2 * 45.0 / 64.0,
    SQRT_2 * -7.0 / 64.0,
    SQRT_2 * -9.0 / 64.0,
    SQRT_2 * 3.0 / 64.0,
];

static SPLINE_DUAL_7: [f64; 16] = [
    SQRT_2 * -35.0 / 16384.0,
    SQRT_2 * -105.0 / 16384.0,
    SQRT_2 * -195.0 / 16384.0,
    SQRT_2 * 865.0 / 16384.0,
    SQRT_2 * 363.0 / 16384.0,
    SQRT_2 * -3489.0 / 16384.0,
    SQRT_2 * -307.0 / 16384.0,
    SQRT_2 * 11025.0 / 16384.0,
    SQRT_2 * 11025.0 / 16384.0,
    SQRT_2 * -307.0 / 16384.0,
    SQRT_2 * -3489.0 / 16384.0,
    SQRT_2 * 363.0 / 16384.0,
    SQRT_2 * 865.0 / 16384.0,
    SQRT_2 * -195.0 / 16384.0,
    SQRT_2 * -105.0 / 16384.0,
    SQRT_2 * -35.0 / 16384.0,
];

pub(crate) fn spline2_2<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&SPLINE_2, &SPLINE_DUAL_2, [2, 0, 2, 2])
}

pub(crate) fn spline2_4<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&SPLINE_4, &SPLINE_DUAL_2, [4, 0, 2, 4])
}

pub(crate) fn spline3_3<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&SPLINE_3, &SPLINE_DUAL_3, [1, 3, 3, 1])
}

pub(crate) fn spline3_7<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&SPLINE_3, &SPLINE_DUAL_7, [1, 7, 7, 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_normalization() {
        let tables: [&[f64]; 5] = [
            &SPLINE_2,
            &SPLINE_3,
            &SPLINE_4,
            &SPLINE_DUAL_2,
            &SPLINE_DUAL_3,
        ];
        for table in tables {
            let sum: f64 = table.iter().sum();
            assert!(
                (sum - SQRT_2).abs() < 1e-12,
                "Spline kernel of {} taps must sum to sqrt(2), got {sum}",
                table.len()
            );
        }
        // The published (3,7) synthesis taps sum to 16244/16384 * sqrt(2).
        let dual7: f64 = SPLINE_DUAL_7.iter().sum();
        assert!(
            (dual7 - SQRT_2 * 16244.0 / 16384.0).abs() < 1e-12,
            "Spline (3,7) synthesis sum drifted, got {dual7}"
        );
    }

    #[test]
    fn test_spline_pairs_biorthogonal() {
        assert!(!spline2_2::<f64>().is_orthogonal());
        assert!(!spline3_7::<f64>().is_orthogonal());
    }
}
