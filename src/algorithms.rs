// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Magnitude algorithms over decimal digit slices.
//!
//! Every slice handled here stores one decimal digit per element, most
//! significant digit first. Inputs are expected to be normalized (no leading
//! zeros except the single digit `0`) and every returned vector is normalized
//! the same way.

use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::iter::repeat;

use self::big_digit::{BigDigit, DoubleBigDigit};

pub mod big_digit {
    /// A `BigDigit` is a `BigInt`'s composing element: one decimal digit.
    pub type BigDigit = u8;

    /// A `DoubleBigDigit` is the internal type used to do the computations.
    /// It holds any `a * b + c + carry` of single digits.
    pub type DoubleBigDigit = u16;

    pub const BASE: DoubleBigDigit = 10;

    pub const MAX: BigDigit = (BASE - 1) as BigDigit;

    /// Split one `DoubleBigDigit` into its carry and its low digit.
    #[inline]
    pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
        ((n / BASE) as BigDigit, (n % BASE) as BigDigit)
    }

    /// Join a carry and a low digit into one `DoubleBigDigit`.
    #[inline]
    pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
        (hi as DoubleBigDigit) * BASE + (lo as DoubleBigDigit)
    }
}

// Add with carry:
#[inline]
fn adc(a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        (a as DoubleBigDigit) + (b as DoubleBigDigit) + (*carry as DoubleBigDigit),
    );

    *carry = hi;
    lo
}

// Subtract with borrow:
#[inline]
fn sbb(a: BigDigit, b: BigDigit, borrow: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        big_digit::BASE + (a as DoubleBigDigit)
            - (b as DoubleBigDigit)
            - (*borrow as DoubleBigDigit),
    );
    // hi * BASE + lo == BASE + a - b - borrow, so a - b - borrow < 0 <=> hi == 0
    *borrow = if hi == 0 { 1 } else { 0 };
    lo
}

// Multiply with carry:
#[inline]
fn mul_with_carry(a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        (a as DoubleBigDigit) * (b as DoubleBigDigit) + (*carry as DoubleBigDigit),
    );
    *carry = hi;
    lo
}

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder.
///
/// The caller must ensure `hi < divisor`, so that the quotient fits in one digit.
#[inline]
fn div_wide(hi: BigDigit, lo: BigDigit, divisor: BigDigit) -> (BigDigit, BigDigit) {
    debug_assert!(hi < divisor);

    let lhs = big_digit::to_doublebigdigit(hi, lo);
    let rhs = divisor as DoubleBigDigit;
    ((lhs / rhs) as BigDigit, (lhs % rhs) as BigDigit)
}

/// Strip leading zero digits, keeping a single `0` for the value zero.
pub fn normalize(digits: &mut Vec<BigDigit>) {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    if leading == digits.len() {
        digits.clear();
        digits.push(0);
    } else if leading > 0 {
        digits.drain(..leading);
    }
}

#[inline]
pub fn is_zero(digits: &[BigDigit]) -> bool {
    digits.len() == 1 && digits[0] == 0
}

/// Compare two normalized magnitudes.
///
/// More digits means a larger magnitude; equal lengths are decided by the
/// first differing digit from the most significant end.
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.len() == 1 || a.first() != Some(&0));
    debug_assert!(b.len() == 1 || b.first() != Some(&0));

    let (a_len, b_len) = (a.len(), b.len());
    if a_len < b_len {
        return Less;
    }
    if a_len > b_len {
        return Greater;
    }

    for (&ai, &bi) in a.iter().zip(b.iter()) {
        if ai < bi {
            return Less;
        }
        if ai > bi {
            return Greater;
        }
    }
    Equal
}

/// Digit `i` counted from the least significant end, zero past the front.
#[inline]
fn digit_from_right(digits: &[BigDigit], i: usize) -> BigDigit {
    if i < digits.len() {
        digits[digits.len() - 1 - i]
    } else {
        0
    }
}

/// `|a| + |b|`.
///
/// The operands are aligned at the least significant digit; the shorter one
/// is padded with zeros. One extra position receives the final carry and is
/// dropped again if it stays zero.
pub fn add_digits(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let len = a.len().max(b.len());
    let mut sum = Vec::with_capacity(len + 1);

    let mut carry = 0;
    for i in 0..len {
        sum.push(adc(digit_from_right(a, i), digit_from_right(b, i), &mut carry));
    }
    sum.push(carry);

    sum.reverse();
    normalize(&mut sum);
    sum
}

/// `|a| - |b|`, which requires `|a| >= |b|`.
pub fn sub_digits(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    debug_assert!(cmp_slice(a, b) != Less);

    let mut diff = Vec::with_capacity(a.len());

    let mut borrow = 0;
    for i in 0..a.len() {
        diff.push(sbb(digit_from_right(a, i), digit_from_right(b, i), &mut borrow));
    }

    // note: we're _required_ to fail on underflow
    assert!(borrow == 0, "Cannot subtract b from a because b is larger than a.");

    diff.reverse();
    normalize(&mut diff);
    diff
}

/// `|a| * |b|` by long multiplication.
///
/// Each digit of `a`, least significant first, multiplies the whole of `b`
/// into a row. Row `k` is shifted left by `k` decimal places and summed into
/// the running total with [`add_digits`].
pub fn mul_digits(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let mut total = vec![0];
    for (row, &ai) in a.iter().rev().enumerate() {
        if ai == 0 {
            continue;
        }

        let mut line = Vec::with_capacity(b.len() + 1);
        let mut carry = 0;
        for &bi in b.iter().rev() {
            line.push(mul_with_carry(ai, bi, &mut carry));
        }
        if carry != 0 {
            line.push(carry);
        }
        line.reverse();
        line.extend(repeat(0).take(row));

        total = add_digits(&total, &line);
    }
    total
}

/// Short division of a magnitude by a single nonzero digit.
pub fn div_rem_digit(a: &[BigDigit], divisor: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    assert!(divisor != 0, "attempt to divide by zero");

    let mut quotient = Vec::with_capacity(a.len());
    let mut rem = 0;
    for &d in a {
        let (q, r) = div_wide(rem, d, divisor);
        quotient.push(q);
        rem = r;
    }

    normalize(&mut quotient);
    (quotient, rem)
}
