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

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycletError {
    OutOfMemory(usize),
    UnknownFilter(String, String),
    EmptyFilter,
    InputSizeNotPowerOfTwo(usize),
    SignalTooShort(usize, usize),
    ApproxDetailsSize(usize, usize),
    ApproxDetailsNotMatches(usize, usize),
    OutputSizeNotMatches(usize, usize),
    ZeroedDimensions,
    TooManyDimensions(usize, usize),
    ExtentNotPowerOfTwo(usize, usize),
    ExtentsProductMismatch(usize, usize),
    RefinementNotDyadic(usize, usize),
}

impl Error for CycletError {}

impl std::fmt::Display for CycletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CycletError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector"))
            }
            CycletError::UnknownFilter(name, order) => f.write_fmt(format_args!(
                "No wavelet filter is registered for name \"{name}\" with order \"{order}\""
            )),
            CycletError::EmptyFilter => f.write_str("Wavelet filter must have at least one tap"),
            CycletError::InputSizeNotPowerOfTwo(size) => f.write_fmt(format_args!(
                "Signal length {size} is not a positive power of two"
            )),
            CycletError::SignalTooShort(size, min_size) => f.write_fmt(format_args!(
                "Signal length {size} is shorter than the minimum transform length {min_size}"
            )),
            CycletError::ApproxDetailsSize(size, expected) => f.write_fmt(format_args!(
                "Approximation and details are expected to be {expected} elements (half of the signal) but it was {size}"
            )),
            CycletError::ApproxDetailsNotMatches(approx, details) => f.write_fmt(format_args!(
                "Approx and details must match, but they don't {approx}x{details}"
            )),
            CycletError::OutputSizeNotMatches(size, expected) => f.write_fmt(format_args!(
                "Output size should be {expected}, but it was {size}"
            )),
            CycletError::ZeroedDimensions => {
                f.write_str("Extents array must contain at least one dimension")
            }
            CycletError::TooManyDimensions(dims, max_dims) => f.write_fmt(format_args!(
                "Number of dimensions {dims} exceeds the supported maximum {max_dims}"
            )),
            CycletError::ExtentNotPowerOfTwo(axis, extent) => f.write_fmt(format_args!(
                "Extent {extent} of dimension #{axis} is not a positive power of two"
            )),
            CycletError::ExtentsProductMismatch(expected, size) => f.write_fmt(format_args!(
                "Extents require a buffer of {expected} elements, but it was {size}"
            )),
            CycletError::RefinementNotDyadic(from, to) => f.write_fmt(format_args!(
                "Refined length {to} is not a power-of-two multiple of the source length {from}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::CycletError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

use std::error::Error;
use std::fmt::Formatter;
pub(crate) use try_vec;
