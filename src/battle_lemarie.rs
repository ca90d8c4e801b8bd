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

// Battle-Lemarie filter, truncated to three published decimals.
//
// Source: Mallat, "A Theory for Multiresolution Signal Decomposition: The
// Wavelet Representation", IEEE PAMI, v. 11, no. 7, Table 1. The signs of
// taps 5 and 6 differ from the paper; the published ones do not reconstruct.
// The trailing zero keeps the tap count even.
static BATTLE_LEMARIE: [f64; 24] = [
    SQRT_2 * -0.002,
    SQRT_2 * -0.003,
    SQRT_2 * 0.006,
    SQRT_2 * 0.006,
    SQRT_2 * -0.013,
    SQRT_2 * -0.012,
    SQRT_2 * 0.030,
    SQRT_2 * 0.023,
    SQRT_2 * -0.078,
    SQRT_2 * -0.035,
    SQRT_2 * 0.307,
    SQRT_2 * 0.542,
    SQRT_2 * 0.307,
    SQRT_2 * -0.035,
    SQRT_2 * -0.078,
    SQRT_2 * 0.023,
    SQRT_2 * 0.030,
    SQRT_2 * -0.012,
    SQRT_2 * -0.013,
    SQRT_2 * 0.006,
    SQRT_2 * 0.006,
    SQRT_2 * -0.003,
    SQRT_2 * -0.002,
    0.0,
];

pub(crate) fn battle_lemarie<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&BATTLE_LEMARIE, &BATTLE_LEMARIE, [11, 11, 11, 11])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_lemarie_symmetric() {
        for j in 0..BATTLE_LEMARIE.len() - 1 {
            assert_eq!(BATTLE_LEMARIE[j], BATTLE_LEMARIE[BATTLE_LEMARIE.len() - 2 - j]);
        }
    }

    #[test]
    fn test_battle_lemarie_approximate_normalization() {
        // The truncated table only sums to sqrt(2) within its 3-decimal
        // precision.
        let sum: f64 = BATTLE_LEMARIE.iter().sum();
        assert!(
            (sum - SQRT_2).abs() < 1e-2,
            "Battle-Lemarie taps should sum close to sqrt(2), got {sum}"
        );
    }
}
