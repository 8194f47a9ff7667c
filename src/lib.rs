// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A big signed integer stored as base-10 digits.
//!
//! `BigInt` keeps a sign and a most-significant-first vector of decimal
//! digits, and implements addition, subtraction and multiplication with the
//! schoolbook algorithms: carry and borrow propagation digit by digit, and
//! long multiplication that sums one shifted row per digit.
//!
//! ## Example
//!
//! ```rust
//! use decimal_bigint::BigInt;
//! use num_traits::{One, Zero};
//!
//! // Calculate large fibonacci numbers.
//! fn fib(n: usize) -> BigInt {
//!     let mut f0: BigInt = Zero::zero();
//!     let mut f1: BigInt = One::one();
//!     for _ in 0..n {
//!         let f2 = &f0 + &f1;
//!         f0 = std::mem::replace(&mut f1, f2);
//!     }
//!     f0
//! }
//!
//! // This is a very large number.
//! println!("fib(1000) = {}", fib(1000));
//! ```
//!
//! It's easy to generate large random numbers:
//!
//! ```rust
//! # #[cfg(feature = "rand")]
//! # fn main() {
//! use decimal_bigint::RandBigInt;
//!
//! let mut rng = rand::thread_rng();
//! let a = rng.gen_bigint(1000);
//! let b = rng.gen_bigint(1000);
//!
//! // Probably an even larger number.
//! println!("{}", a * b);
//! # }
//! # #[cfg(not(feature = "rand"))]
//! # fn main() {}
//! ```
//!
//! ## Features
//!
//! - `rand` (default): random generation through [`RandBigInt`].
//! - `serde`: `Serialize` and `Deserialize` for [`BigInt`] and [`Sign`].
//! - `quickcheck`: `quickcheck::Arbitrary` for [`BigInt`].

use std::error::Error;
use std::fmt;

mod algorithms;
mod bigint;

#[cfg(any(feature = "rand", test))]
mod bigrand;

#[cfg(any(feature = "quickcheck", test))]
mod quickcheck_impls;

#[cfg(test)]
#[path = "tests/properties.rs"]
mod properties;

pub use crate::algorithms::big_digit;
pub use crate::big_digit::BigDigit;

pub use crate::bigint::{BigInt, Sign, ToBigInt};

#[cfg(any(feature = "rand", test))]
pub use crate::bigrand::{random_bigint, RandBigInt};

/// The error returned when a string is not a valid decimal integer.
///
/// Accepted input is an optional `+` or `-` followed by one or more ASCII
/// digits; anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError {
    kind: BigIntErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BigIntErrorKind {
    Empty,
    InvalidDigit,
}

impl ParseBigIntError {
    fn __description(&self) -> &str {
        use crate::BigIntErrorKind::*;
        match self.kind {
            Empty => "cannot parse integer from empty string",
            InvalidDigit => "invalid digit found in string",
        }
    }

    fn empty() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::Empty,
        }
    }

    fn invalid() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::InvalidDigit,
        }
    }
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.__description().fmt(f)
    }
}

impl Error for ParseBigIntError {
    #[allow(deprecated)]
    fn description(&self) -> &str {
        self.__description()
    }
}

/// The error returned by [`BigInt::power`] for a negative exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowError {
    exponent: BigInt,
}

impl PowError {
    fn negative_exponent(exponent: BigInt) -> Self {
        PowError { exponent }
    }

    /// The exponent that was rejected.
    pub fn exponent(&self) -> &BigInt {
        &self.exponent
    }
}

impl fmt::Display for PowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "negative exponent {} in integer power", self.exponent)
    }
}

impl Error for PowError {}
