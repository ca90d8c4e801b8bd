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

// Burt-Adelson biorthogonal filter pair.
//
// Source: Daubechies, "Ten Lectures on Wavelets", Table 8.4. Zero padding
// keeps both kernels at an even tap count.

static BURT_ADELSON_LO: [f64; 6] = [
    SQRT_2 * -1.0 / 20.0,
    SQRT_2 * 5.0 / 20.0,
    SQRT_2 * 12.0 / 20.0,
    SQRT_2 * 5.0 / 20.0,
    SQRT_2 * -1.0 / 20.0,
    0.0,
];

static BURT_ADELSON_DUAL_LO: [f64; 8] = [
    0.0,
    SQRT_2 * -3.0 / 280.0,
    SQRT_2 * -15.0 / 280.0,
    SQRT_2 * 73.0 / 280.0,
    SQRT_2 * 170.0 / 280.0,
    SQRT_2 * 73.0 / 280.0,
    SQRT_2 * -15.0 / 280.0,
    SQRT_2 * -3.0 / 280.0,
];

pub(crate) fn burt_adelson<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&BURT_ADELSON_LO, &BURT_ADELSON_DUAL_LO, [2, 2, 4, 2])
}
