// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Randomization of big integers

use rand::distributions::Uniform;
use rand::Rng;

use crate::big_digit::{self, BigDigit};
use crate::bigint::Sign::{Minus, Plus};
use crate::bigint::BigInt;

pub trait RandBigInt {
    /// Generate a random `BigInt` with the given number of decimal digits.
    ///
    /// The sign and every digit are drawn uniformly, so the most significant
    /// digits may be zero; the result is normalized afterwards and can have
    /// fewer digits than requested.
    fn gen_bigint(&mut self, num_digits: usize) -> BigInt;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint(&mut self, num_digits: usize) -> BigInt {
        let sign = if self.gen::<bool>() { Plus } else { Minus };
        let digits = Uniform::new_inclusive(0, big_digit::MAX);
        let data: Vec<BigDigit> = (0..num_digits).map(|_| self.sample(&digits)).collect();
        BigInt::from_raw(sign, data)
    }
}

/// Generate a random `BigInt` of `num_digits` decimal digits from the
/// thread-local generator.
///
/// # Examples
///
/// ```
/// use decimal_bigint::random_bigint;
///
/// let n = random_bigint(100);
/// assert!(n.num_digits() <= 100);
/// ```
pub fn random_bigint(num_digits: usize) -> BigInt {
    rand::thread_rng().gen_bigint(num_digits)
}
