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
use crate::battle_lemarie::battle_lemarie;
use crate::burt_adelson::burt_adelson;
use crate::coiflet::{coiflet2, coiflet4, coiflet6};
use crate::daubechies::{
    daubechies4, daubechies6, daubechies8, daubechies10, daubechies12, daubechies20,
};
use crate::err::CycletError;
use crate::filter::WaveletFilter;
use crate::haar::haar;
use crate::pseudocoiflet::pseudocoiflet4_4;
use crate::spline::{spline2_2, spline2_4, spline3_3, spline3_7};
use num_traits::AsPrimitive;

/// The built-in wavelet filter catalog.
///
/// Orthonormal entries (Haar, Coiflet, Daubechies) share one smoothing
/// kernel for analysis and synthesis; the remaining entries are
/// biorthogonal pairs. Tap counts in variant names follow the literature:
/// `Daubechies4` is the 4-tap D2 filter, `Coiflet2` the 6-tap order-2
/// Coifman filter, `SplineM_N` the (m, n) biorthogonal spline pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WaveletFamily {
    Haar,
    BattleLemarie,
    BurtAdelson,
    Coiflet2,
    Coiflet4,
    Coiflet6,
    Daubechies4,
    Daubechies6,
    Daubechies8,
    Daubechies10,
    Daubechies12,
    Daubechies20,
    Pseudocoiflet4_4,
    Spline2_2,
    Spline2_4,
    Spline3_3,
    Spline3_7,
}

impl WaveletFamily {
    /// Resolves a catalog entry from its textual name and order.
    ///
    /// Names are matched case-insensitively. Families that exist in a
    /// single order (`haar`, `battle-lemarie`, `burt-adelson`) take an
    /// empty order string; `coiflet` and `daubechies` take the numeric
    /// order; `spline` takes the two-part `"m,n"` order; `pseudocoiflet`
    /// accepts either `""` or `"4,4"`. Any other combination is
    /// [`CycletError::UnknownFilter`].
    pub fn lookup(name: &str, order: &str) -> Result<WaveletFamily, CycletError> {
        let lowered = name.to_ascii_lowercase();
        let family = match (lowered.as_str(), order) {
            ("haar", "") => WaveletFamily::Haar,
            ("battle-lemarie", "") => WaveletFamily::BattleLemarie,
            ("burt-adelson", "") => WaveletFamily::BurtAdelson,
            ("coiflet", "2") => WaveletFamily::Coiflet2,
            ("coiflet", "4") => WaveletFamily::Coiflet4,
            ("coiflet", "6") => WaveletFamily::Coiflet6,
            ("daubechies", "4") => WaveletFamily::Daubechies4,
            ("daubechies", "6") => WaveletFamily::Daubechies6,
            ("daubechies", "8") => WaveletFamily::Daubechies8,
            ("daubechies", "10") => WaveletFamily::Daubechies10,
            ("daubechies", "12") => WaveletFamily::Daubechies12,
            ("daubechies", "20") => WaveletFamily::Daubechies20,
            ("pseudocoiflet", "" | "4,4") => WaveletFamily::Pseudocoiflet4_4,
            ("spline", "2,2") => WaveletFamily::Spline2_2,
            ("spline", "2,4") => WaveletFamily::Spline2_4,
            ("spline", "3,3") => WaveletFamily::Spline3_3,
            ("spline", "3,7") => WaveletFamily::Spline3_7,
            _ => {
                return Err(CycletError::UnknownFilter(
                    name.to_string(),
                    order.to_string(),
                ));
            }
        };
        Ok(family)
    }

    /// Materializes the filter for this family in the requested sample
    /// type.
    pub fn filter<T: WaveletSample>(&self) -> WaveletFilter<T>
    where
        f64: AsPrimitive<T>,
    {
        match self {
            WaveletFamily::Haar => haar(),
            WaveletFamily::BattleLemarie => battle_lemarie(),
            WaveletFamily::BurtAdelson => burt_adelson(),
            WaveletFamily::Coiflet2 => coiflet2(),
            WaveletFamily::Coiflet4 => coiflet4(),
            WaveletFamily::Coiflet6 => coiflet6(),
            WaveletFamily::Daubechies4 => daubechies4(),
            WaveletFamily::Daubechies6 => daubechies6(),
            WaveletFamily::Daubechies8 => daubechies8(),
            WaveletFamily::Daubechies10 => daubechies10(),
            WaveletFamily::Daubechies12 => daubechies12(),
            WaveletFamily::Daubechies20 => daubechies20(),
            WaveletFamily::Pseudocoiflet4_4 => pseudocoiflet4_4(),
            WaveletFamily::Spline2_2 => spline2_2(),
            WaveletFamily::Spline2_4 => spline2_4(),
            WaveletFamily::Spline3_3 => spline3_3(),
            WaveletFamily::Spline3_7 => spline3_7(),
        }
    }

    pub(crate) const ALL: [WaveletFamily; 17] = [
        WaveletFamily::Haar,
        WaveletFamily::BattleLemarie,
        WaveletFamily::BurtAdelson,
        WaveletFamily::Coiflet2,
        WaveletFamily::Coiflet4,
        WaveletFamily::Coiflet6,
        WaveletFamily::Daubechies4,
        WaveletFamily::Daubechies6,
        WaveletFamily::Daubechies8,
        WaveletFamily::Daubechies10,
        WaveletFamily::Daubechies12,
        WaveletFamily::Daubechies20,
        WaveletFamily::Pseudocoiflet4_4,
        WaveletFamily::Spline2_2,
        WaveletFamily::Spline2_4,
        WaveletFamily::Spline3_3,
        WaveletFamily::Spline3_7,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_combinations() {
        assert_eq!(WaveletFamily::lookup("haar", ""), Ok(WaveletFamily::Haar));
        assert_eq!(
            WaveletFamily::lookup("Daubechies", "12"),
            Ok(WaveletFamily::Daubechies12)
        );
        assert_eq!(
            WaveletFamily::lookup("SPLINE", "3,7"),
            Ok(WaveletFamily::Spline3_7)
        );
        assert_eq!(
            WaveletFamily::lookup("pseudocoiflet", ""),
            Ok(WaveletFamily::Pseudocoiflet4_4)
        );
        assert_eq!(
            WaveletFamily::lookup("pseudocoiflet", "4,4"),
            Ok(WaveletFamily::Pseudocoiflet4_4)
        );
    }

    #[test]
    fn test_lookup_rejects_unregistered() {
        assert_eq!(
            WaveletFamily::lookup("coiflet", "3"),
            Err(CycletError::UnknownFilter(
                "coiflet".to_string(),
                "3".to_string()
            ))
        );
        assert!(WaveletFamily::lookup("haar", "2").is_err());
        assert!(WaveletFamily::lookup("morlet", "").is_err());
    }

    #[test]
    fn test_every_family_materializes() {
        for family in WaveletFamily::ALL {
            let filter = family.filter::<f64>();
            assert!(!filter.dec_lo().is_empty(), "{family:?} has no analysis taps");
            assert!(!filter.rec_lo().is_empty(), "{family:?} has no synthesis taps");
        }
    }
}
