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

// Coiflet orthonormal filters.
//
// Source: Beylkin, Coifman and Rokhlin, "Fast Wavelet Transforms and
// Numerical Algorithms I", Comm. Pure Appl. Math., v. 44, Appendix A.

const SQRT15: f64 = 3.87298334620741688517927;

static COIFLET_2: [f64; 6] = [
    SQRT_2 * (SQRT15 - 3.0) / 32.0,
    SQRT_2 * (1.0 - SQRT15) / 32.0,
    SQRT_2 * (6.0 - 2.0 * SQRT15) / 32.0,
    SQRT_2 * (2.0 * SQRT15 + 6.0) / 32.0,
    SQRT_2 * (SQRT15 + 13.0) / 32.0,
    SQRT_2 * (9.0 - SQRT15) / 32.0,
];

static COIFLET_4: [f64; 12] = [
    0.0011945726958388,
    -0.01284557955324,
    0.024804330519353,
    0.050023519962135,
    -0.15535722285996,
    -0.071638282295294,
    0.57046500145033,
    0.75033630585287,
    0.28061165190244,
    -0.0074103835186718,
    -0.014611552521451,
    -0.0013587990591632,
];

static COIFLET_6: [f64; 18] = [
    -0.0016918510194918,
    -0.00348787621998426,
    0.019191160680044,
    0.021671094636352,
    -0.098507213321468,
    -0.056997424478478,
    0.45678712217269,
    0.78931940900416,
    0.38055713085151,
    -0.070438748794943,
    -0.056514193868065,
    0.036409962612716,
    0.0087601307091635,
    -0.011194759273835,
    -0.0019213354141368,
    0.0020413809772660,
    0.00044583039753204,
    -0.00021625727664696,
];

pub(crate) fn coiflet2<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&COIFLET_2, &COIFLET_2, [3, 1, 3, 1])
}

pub(crate) fn coiflet4<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&COIFLET_4, &COIFLET_4, [6, 4, 6, 4])
}

pub(crate) fn coiflet6<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&COIFLET_6, &COIFLET_6, [6, 10, 6, 10])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coiflet_normalization() {
        let tables: [&[f64]; 3] = [&COIFLET_2, &COIFLET_4, &COIFLET_6];
        for table in tables {
            let sum: f64 = table.iter().sum();
            assert!(
                (sum - SQRT_2).abs() < 1e-9,
                "Coiflet {} taps must sum to sqrt(2), got {sum}",
                table.len()
            );
        }
    }
}
