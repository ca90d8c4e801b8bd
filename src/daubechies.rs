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

// Daubechies orthonormal filters.
//
// Source: Daubechies, "Ten Lectures on Wavelets", Table 6.1. The 4-tap
// kernel is kept in closed form.

const SQRT3: f64 = 1.73205080756887729352745;

static DAUBECHIES_4: [f64; 4] = [
    SQRT_2 * (1.0 + SQRT3) / 8.0,
    SQRT_2 * (3.0 + SQRT3) / 8.0,
    SQRT_2 * (3.0 - SQRT3) / 8.0,
    SQRT_2 * (1.0 - SQRT3) / 8.0,
];

static DAUBECHIES_6: [f64; 6] = [
    0.332670552950,
    0.806891509311,
    0.459877502118,
    -0.135011020010,
    -0.085441273882,
    0.035226291882,
];

static DAUBECHIES_8: [f64; 8] = [
    0.230377813309,
    0.714846570553,
    0.6308807667930,
    -0.027983769417,
    -0.187034811719,
    0.030841381836,
    0.032883011667,
    -0.010597401785,
];

static DAUBECHIES_10: [f64; 10] = [
    0.1601023979741929,
    0.6038292697971895,
    0.7243085284377726,
    0.1384281459013203,
    -0.2422948870663823,
    -0.0322448695846381,
    0.0775714938400459,
    -0.0062414902127983,
    -0.0125807519990820,
    0.0033357252854738,
];

static DAUBECHIES_12: [f64; 12] = [
    0.1115407433501095,
    0.4946238903984533,
    0.7511339080210959,
    0.3152503517091982,
    -0.2262646939654400,
    -0.1297668675672625,
    0.0975016055873225,
    0.0275228655303053,
    -0.0315820393184862,
    0.0005538422011614,
    0.0047772575119455,
    -0.0010773010853085,
];

static DAUBECHIES_20: [f64; 20] = [
    0.026670057901,
    0.188176800078,
    0.527201188932,
    0.688459039454,
    0.281172343661,
    -0.249846424327,
    -0.195946274377,
    0.127369340336,
    0.093057364604,
    -0.071394147166,
    -0.029457536822,
    0.033212674059,
    0.003606553567,
    -0.010733175483,
    0.001395351747,
    0.001992405295,
    -0.000685856695,
    -0.000116466855,
    0.000093588670,
    -0.000013264203,
];

pub(crate) fn daubechies4<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&DAUBECHIES_4, &DAUBECHIES_4, [1, 1, 1, 1])
}

pub(crate) fn daubechies6<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&DAUBECHIES_6, &DAUBECHIES_6, [1, 3, 1, 3])
}

pub(crate) fn daubechies8<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&DAUBECHIES_8, &DAUBECHIES_8, [1, 5, 1, 5])
}

pub(crate) fn daubechies10<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&DAUBECHIES_10, &DAUBECHIES_10, [1, 7, 1, 7])
}

pub(crate) fn daubechies12<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&DAUBECHIES_12, &DAUBECHIES_12, [1, 9, 1, 9])
}

pub(crate) fn daubechies20<T: WaveletSample>() -> WaveletFilter<T>
where
    f64: AsPrimitive<T>,
{
    WaveletFilter::from_tables(&DAUBECHIES_20, &DAUBECHIES_20, [2, 16, 2, 16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daubechies_normalization() {
        let tables: [&[f64]; 6] = [
            &DAUBECHIES_4,
            &DAUBECHIES_6,
            &DAUBECHIES_8,
            &DAUBECHIES_10,
            &DAUBECHIES_12,
            &DAUBECHIES_20,
        ];
        for table in tables {
            let sum: f64 = table.iter().sum();
            assert!(
                (sum - SQRT_2).abs() < 1e-9,
                "Daubechies {} taps must sum to sqrt(2), got {sum}",
                table.len()
            );
        }
    }

    #[test]
    fn test_daubechies_orthogonal() {
        assert!(daubechies4::<f64>().is_orthogonal());
        assert!(daubechies20::<f64>().is_orthogonal());
    }
}
