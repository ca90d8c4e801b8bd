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
use crate::err::CycletError;
use num_traits::AsPrimitive;

/// A wavelet basis described by its two smoothing kernels and four
/// alignment offsets.
///
/// Following Daubechies's naming, `dec_lo` is the analyzing smoothing filter
/// (H) and `rec_lo` is the reconstruction smoothing filter (Htilde). The
/// detail filters G and Gtilde are never stored; they are derived on demand
/// from the dual smoothing kernel through the quadrature-mirror relation.
///
/// For orthogonal bases the two kernels coincide and all four offsets are
/// equal; biorthogonal bases may use kernels of different lengths with
/// independent alignment.
///
/// A filter is an immutable value: [`WaveletFilter::exchange`] and
/// [`WaveletFilter::with_offsets`] return new filters and never touch the
/// receiver, so filters can be shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveletFilter<T> {
    dec_lo: Vec<T>,
    rec_lo: Vec<T>,
    off_dec_lo: isize,
    off_dec_hi: isize,
    off_rec_lo: isize,
    off_rec_hi: isize,
}

impl<T: WaveletSample> WaveletFilter<T> {
    /// Creates a filter from caller-supplied smoothing kernels.
    ///
    /// `dec_lo` is the analysis low-pass (H), `rec_lo` the synthesis
    /// low-pass (Htilde); offsets align H, G, Htilde and Gtilde in that
    /// order. Offsets are not validated; a misaligned offset only changes
    /// which cyclically wrapped samples each tap reads.
    pub fn new(
        dec_lo: Vec<T>,
        rec_lo: Vec<T>,
        off_dec_lo: isize,
        off_dec_hi: isize,
        off_rec_lo: isize,
        off_rec_hi: isize,
    ) -> Result<WaveletFilter<T>, CycletError> {
        if dec_lo.is_empty() || rec_lo.is_empty() {
            return Err(CycletError::EmptyFilter);
        }
        Ok(WaveletFilter {
            dec_lo,
            rec_lo,
            off_dec_lo,
            off_dec_hi,
            off_rec_lo,
            off_rec_hi,
        })
    }

    pub(crate) fn from_tables(
        dec_lo: &'static [f64],
        rec_lo: &'static [f64],
        offsets: [isize; 4],
    ) -> WaveletFilter<T>
    where
        f64: AsPrimitive<T>,
    {
        WaveletFilter {
            dec_lo: dec_lo.iter().map(|x| x.as_()).collect(),
            rec_lo: rec_lo.iter().map(|x| x.as_()).collect(),
            off_dec_lo: offsets[0],
            off_dec_hi: offsets[1],
            off_rec_lo: offsets[2],
            off_rec_hi: offsets[3],
        }
    }

    /// Exchanges the normal and tilde components of the filter.
    ///
    /// H and Htilde swap, as do the G and Gtilde offsets, producing the
    /// transposed biorthogonal pair. Applying it twice restores the
    /// original; for orthogonal filters the exchange is an identity.
    pub fn exchange(&self) -> WaveletFilter<T> {
        WaveletFilter {
            dec_lo: self.rec_lo.clone(),
            rec_lo: self.dec_lo.clone(),
            off_dec_lo: self.off_rec_lo,
            off_rec_lo: self.off_dec_lo,
            off_dec_hi: self.off_rec_hi,
            off_rec_hi: self.off_dec_hi,
        }
    }

    /// Returns a filter with identical coefficients but caller-specified
    /// alignment offsets for H, G, Htilde and Gtilde.
    ///
    /// Used to compensate for non-centered boundary conventions in data
    /// produced elsewhere. No validation is performed.
    pub fn with_offsets(
        &self,
        off_dec_lo: isize,
        off_dec_hi: isize,
        off_rec_lo: isize,
        off_rec_hi: isize,
    ) -> WaveletFilter<T> {
        WaveletFilter {
            dec_lo: self.dec_lo.clone(),
            rec_lo: self.rec_lo.clone(),
            off_dec_lo,
            off_dec_hi,
            off_rec_lo,
            off_rec_hi,
        }
    }

    /// True when the analysis and synthesis sides coincide, i.e. when
    /// [`WaveletFilter::exchange`] leaves the filter unchanged.
    pub fn is_orthogonal(&self) -> bool {
        self.dec_lo == self.rec_lo
            && self.off_dec_lo == self.off_rec_lo
            && self.off_dec_hi == self.off_rec_hi
    }

    /// The analysis low-pass kernel (H).
    pub fn dec_lo(&self) -> &[T] {
        &self.dec_lo
    }

    /// The synthesis low-pass kernel (Htilde).
    pub fn rec_lo(&self) -> &[T] {
        &self.rec_lo
    }

    pub fn off_dec_lo(&self) -> isize {
        self.off_dec_lo
    }

    pub fn off_dec_hi(&self) -> isize {
        self.off_dec_hi
    }

    pub fn off_rec_lo(&self) -> isize {
        self.off_rec_lo
    }

    pub fn off_rec_hi(&self) -> isize {
        self.off_rec_hi
    }
}
