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
use num_traits::{AsPrimitive, MulAdd};

/// Wraps a (possibly negative) index into `[0, n)` using the true
/// mathematical modulo.
///
/// Cyclic convolution centers each kernel with a signed alignment offset, so
/// intermediate indices routinely go negative; unlike C-style `%`, this
/// always returns a non-negative result.
///
/// # Panics
/// In debug builds, if `n` is zero.
#[inline]
pub fn wrap_index(index: isize, n: usize) -> usize {
    debug_assert!(n > 0, "wrap length must be non-zero");
    index.rem_euclid(n as isize) as usize
}

/// Returns the number of single-level steps in a full dyadic pyramid over a
/// length-`n` signal, i.e. `log2(n)` for a power of two and `0` otherwise.
#[inline]
pub fn max_pyramid_levels(n: usize) -> usize {
    if n.is_power_of_two() {
        n.trailing_zeros() as usize
    } else {
        0
    }
}

#[inline(always)]
pub(crate) fn fmla<T: MulAdd<T, Output = T>>(a: T, b: T, acc: T) -> T {
    MulAdd::mul_add(a, b, acc)
}

/// Derives a high-pass kernel from its dual low-pass kernel through the
/// quadrature-mirror relation: the dual kernel reversed, with the sign
/// flipped on even tap indices.
pub(crate) fn mirror_high_pass<T: WaveletSample>(low_pass: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let len = low_pass.len();
    let mut high = vec![T::default(); len];
    for (j, dst) in high.iter_mut().enumerate() {
        *dst = if j % 2 == 0 {
            (-1.0f64).as_()
        } else {
            1.0f64.as_()
        } * low_pass[len - 1 - j];
    }
    high
}
