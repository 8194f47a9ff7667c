// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::default::Default;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::{self, FromStr};

use num_integer::Integer;
use num_traits::{
    CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, One, Pow, ToPrimitive, Zero,
};

use self::Sign::{Minus, Plus};

use crate::algorithms::{add_digits, cmp_slice, div_rem_digit, mul_digits, sub_digits};
use crate::big_digit::{self, BigDigit};
use crate::{ParseBigIntError, PowError};

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod bigint_tests;

/// A Sign is a `BigInt`'s composing element.
///
/// Zero always carries `Plus`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate Sign value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            Plus => Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Plus, Plus) | (Minus, Minus) => Plus,
            (Plus, Minus) | (Minus, Plus) => Minus,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sign {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Minus => serde::Serialize::serialize(&-1i8, serializer),
            Plus => serde::Serialize::serialize(&1i8, serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Unexpected};

        let sign: i8 = serde::Deserialize::deserialize(deserializer)?;
        match sign {
            -1 => Ok(Minus),
            0 | 1 => Ok(Plus),
            _ => Err(D::Error::invalid_value(
                Unexpected::Signed(sign.into()),
                &"a sign of -1, 0, or 1",
            )),
        }
    }
}

/// A big signed integer type.
///
/// The magnitude is a vector of decimal digits, most significant first, with
/// no leading zeros. Zero is the single digit `0` with a `Plus` sign, so two
/// values are equal exactly when their signs and digits are.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct BigInt {
    sign: Sign,
    data: Vec<BigDigit>,
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &BigInt) -> Ordering {
        let scmp = self.sign.cmp(&other.sign);
        if scmp != Equal {
            return scmp;
        }

        // further from zero is greater for Plus and lesser for Minus
        match self.sign {
            Plus => cmp_slice(&self.data, &other.data),
            Minus => cmp_slice(&other.data, &self.data),
        }
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.data.iter().map(|&d| char::from(b'0' + d)).collect();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (Minus, &s[1..]),
            Some(b'+') => (Plus, &s[1..]),
            _ => (Plus, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::empty());
        }

        let data = digits
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as BigDigit))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(ParseBigIntError::invalid)?;

        Ok(BigInt::from_raw(sign, data))
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            sign: Plus,
            data: vec![0],
        }
    }

    #[inline]
    fn set_zero(&mut self) {
        self.sign = Plus;
        self.data.clear();
        self.data.push(0);
    }

    #[inline]
    fn is_zero(&self) -> bool {
        crate::algorithms::is_zero(&self.data)
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt {
            sign: Plus,
            data: vec![1],
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Plus && self.data == [1]
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            self.clone_from(other);
            return;
        }

        match (self.sign, other.sign) {
            // same sign => keep the sign with the sum of magnitudes
            (Plus, Plus) | (Minus, Minus) => self.data = add_digits(&self.data, &other.data),
            // opposite signs => -a + b == b - a and a + -b == a - b
            (Plus, Minus) | (Minus, Plus) => self.sub_magnitude(&other.data),
        }
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigInt) {
        if self.is_zero() {
            *self = other;
        } else {
            *self += &other;
        }
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = -other;
            return;
        }

        match (self.sign, other.sign) {
            // opposite signs => a - -b == a + b and -a - b == -(a + b)
            (Plus, Minus) | (Minus, Plus) => self.data = add_digits(&self.data, &other.data),
            // same sign => the sign of the left flips when the right is further from zero
            (Plus, Plus) | (Minus, Minus) => self.sub_magnitude(&other.data),
        }
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigInt) {
        if self.is_zero() {
            *self = -other;
        } else {
            *self -= &other;
        }
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        if self.is_zero() || other.is_zero() {
            self.set_zero();
            return;
        }

        let sign = self.sign * other.sign;
        self.data = mul_digits(&self.data, &other.data);
        self.sign = sign;
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigInt) {
        *self *= &other;
    }
}

// Every val/ref combination copies the left operand, if borrowed, and
// forwards to the compound assignment taking the right operand by reference.
macro_rules! forward_all_binop_to_assign {
    (impl $imp:ident for BigInt, $method:ident, $assign:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: BigInt) -> BigInt {
                self.$assign(&other);
                self
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: &BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                let mut result = self.clone();
                result.$assign(&other);
                result
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                let mut result = self.clone();
                result.$assign(other);
                result
            }
        }
    };
}

forward_all_binop_to_assign!(impl Add for BigInt, add, add_assign);
forward_all_binop_to_assign!(impl Sub for BigInt, sub, sub_assign);
forward_all_binop_to_assign!(impl Mul for BigInt, mul, mul_assign);

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &BigInt) -> Option<BigInt> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, v: &BigInt) -> Option<BigInt> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &BigInt) -> Option<BigInt> {
        Some(self * v)
    }
}

impl<T> Sum<T> for BigInt
where
    BigInt: Add<T, Output = BigInt>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Zero::zero(), |acc, x| acc + x)
    }
}

impl<T> Product<T> for BigInt
where
    BigInt: Mul<T, Output = BigInt>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(One::one(), |acc, x| acc * x)
    }
}

// Exponentiation by squaring over a primitive exponent.
macro_rules! impl_pow_primitive {
    ($T:ty) => {
        impl Pow<$T> for BigInt {
            type Output = BigInt;

            fn pow(self, mut exp: $T) -> BigInt {
                let mut base = self;
                let mut acc = BigInt::one();
                while exp > 0 {
                    if exp.is_odd() {
                        acc *= &base;
                    }
                    exp >>= 1;
                    if exp > 0 {
                        base = &base * &base;
                    }
                }
                acc
            }
        }

        impl<'a> Pow<$T> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, exp: $T) -> BigInt {
                Pow::pow(self.clone(), exp)
            }
        }
    };
}

impl_pow_primitive!(u8);
impl_pow_primitive!(u16);
impl_pow_primitive!(u32);
impl_pow_primitive!(u64);
impl_pow_primitive!(u128);
impl_pow_primitive!(usize);

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let n = self.magnitude_u128()?;
        match self.sign {
            Plus => i128::try_from(n).ok(),
            Minus if n == 1 << 127 => Some(i128::MIN),
            Minus => i128::try_from(n).ok().map(|n| -n),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Plus => self.magnitude_u128(),
            Minus => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

/// Peel the decimal digits of `n`, least significant first, and return them
/// most significant first.
fn magnitude_digits(mut n: u128) -> Vec<BigDigit> {
    if n == 0 {
        return vec![0];
    }

    let base = u128::from(big_digit::BASE);
    let mut data = Vec::with_capacity(39);
    while n > 0 {
        let (q, r) = n.div_rem(&base);
        data.push(r as BigDigit);
        n = q;
    }
    data.reverse();
    data
}

impl From<i128> for BigInt {
    #[inline]
    fn from(n: i128) -> Self {
        let sign = if n < 0 { Minus } else { Plus };
        BigInt::from_raw(sign, magnitude_digits(n.unsigned_abs()))
    }
}

impl From<u128> for BigInt {
    #[inline]
    fn from(n: u128) -> Self {
        BigInt::from_raw(Plus, magnitude_digits(n))
    }
}

impl From<i64> for BigInt {
    #[inline]
    fn from(n: i64) -> Self {
        let sign = if n < 0 { Minus } else { Plus };
        BigInt::from_raw(sign, magnitude_digits(u128::from(n.unsigned_abs())))
    }
}

impl From<u64> for BigInt {
    #[inline]
    fn from(n: u64) -> Self {
        BigInt::from_raw(Plus, magnitude_digits(u128::from(n)))
    }
}

macro_rules! impl_bigint_from_int {
    ($T:ty) => {
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from(n as i64)
            }
        }
    };
}

impl_bigint_from_int!(i8);
impl_bigint_from_int!(i16);
impl_bigint_from_int!(i32);
impl_bigint_from_int!(isize);

macro_rules! impl_bigint_from_uint {
    ($T:ty) => {
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from(n as u64)
            }
        }
    };
}

impl_bigint_from_uint!(u8);
impl_bigint_from_uint!(u16);
impl_bigint_from_uint!(u32);
impl_bigint_from_uint!(usize);

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.sign, &self.data), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let (sign, data): (Sign, Vec<BigDigit>) = serde::Deserialize::deserialize(deserializer)?;
        BigInt::from_digits_be(sign, &data)
            .ok_or_else(|| D::Error::custom("decimal digit out of range"))
    }
}

/// A generic trait for converting a value to a `BigInt`.
pub trait ToBigInt {
    /// Converts the value of `self` to a `BigInt`.
    fn to_bigint(&self) -> Option<BigInt>;
}

impl ToBigInt for BigInt {
    #[inline]
    fn to_bigint(&self) -> Option<BigInt> {
        Some(self.clone())
    }
}

macro_rules! impl_to_bigint {
    ($T:ty) => {
        impl ToBigInt for $T {
            #[inline]
            fn to_bigint(&self) -> Option<BigInt> {
                Some(BigInt::from(*self))
            }
        }
    };
}

impl_to_bigint!(isize);
impl_to_bigint!(i8);
impl_to_bigint!(i16);
impl_to_bigint!(i32);
impl_to_bigint!(i64);
impl_to_bigint!(i128);
impl_to_bigint!(usize);
impl_to_bigint!(u8);
impl_to_bigint!(u16);
impl_to_bigint!(u32);
impl_to_bigint!(u64);
impl_to_bigint!(u128);

impl BigInt {
    /// Builds a `BigInt` from digits already known to be in `0..=9`,
    /// stripping leading zeros and giving zero a `Plus` sign.
    #[inline]
    pub(crate) fn from_raw(sign: Sign, mut data: Vec<BigDigit>) -> BigInt {
        crate::algorithms::normalize(&mut data);
        let sign = if crate::algorithms::is_zero(&data) {
            Plus
        } else {
            sign
        };
        BigInt { sign, data }
    }

    /// Creates and initializes a `BigInt` from decimal digits, most
    /// significant first.
    ///
    /// Leading zeros are ignored and an empty slice is zero. Returns `None`
    /// if any digit is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_bigint::{BigInt, Sign};
    ///
    /// assert_eq!(BigInt::from_digits_be(Sign::Minus, &[0, 4, 2]),
    ///            Some(BigInt::from(-42)));
    /// assert_eq!(BigInt::from_digits_be(Sign::Plus, &[1, 10]), None);
    /// ```
    pub fn from_digits_be(sign: Sign, digits: &[BigDigit]) -> Option<BigInt> {
        if digits.iter().any(|&d| d > big_digit::MAX) {
            return None;
        }
        Some(BigInt::from_raw(sign, digits.to_vec()))
    }

    /// Creates and initializes a `BigInt` from decimal ASCII bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_bigint::{BigInt, ToBigInt};
    ///
    /// assert_eq!(BigInt::parse_bytes(b"1234"), ToBigInt::to_bigint(&1234));
    /// assert_eq!(BigInt::parse_bytes(b"-0012"), ToBigInt::to_bigint(&-12));
    /// assert_eq!(BigInt::parse_bytes(b"12a4"), None);
    /// ```
    #[inline]
    pub fn parse_bytes(buf: &[u8]) -> Option<BigInt> {
        str::from_utf8(buf).ok().and_then(|s| s.parse().ok())
    }

    /// Returns the sign of the `BigInt` as a `Sign`.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_bigint::{BigInt, Sign};
    ///
    /// assert_eq!(BigInt::from(1234).sign(), Sign::Plus);
    /// assert_eq!(BigInt::from(-4321).sign(), Sign::Minus);
    /// assert_eq!(BigInt::from(0).sign(), Sign::Plus);
    /// ```
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the decimal digits of the magnitude, most significant first.
    #[inline]
    pub fn digits(&self) -> &[BigDigit] {
        &self.data
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    #[inline]
    pub fn num_digits(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Minus
    }

    /// Returns `true` for values greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Plus && !self.is_zero()
    }

    #[inline]
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Plus,
            data: self.data.clone(),
        }
    }

    /// Returns `-1`, `0` or `1` following the sign of `self`.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            Zero::zero()
        } else {
            BigInt {
                sign: self.sign,
                data: vec![1],
            }
        }
    }

    /// Adds one in place and returns the updated value.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// let mut a = BigInt::from(10);
    /// assert_eq!(*a.increment(), BigInt::from(11));
    /// assert_eq!(a, BigInt::from(11));
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut BigInt {
        *self += &BigInt::one();
        self
    }

    /// Subtracts one in place and returns the updated value.
    #[inline]
    pub fn decrement(&mut self) -> &mut BigInt {
        *self -= &BigInt::one();
        self
    }

    /// Adds one in place and returns the value held before.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// let mut a = BigInt::from(10);
    /// assert_eq!(a.fetch_increment(), BigInt::from(10));
    /// assert_eq!(a, BigInt::from(11));
    /// ```
    #[inline]
    pub fn fetch_increment(&mut self) -> BigInt {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtracts one in place and returns the value held before.
    #[inline]
    pub fn fetch_decrement(&mut self) -> BigInt {
        let previous = self.clone();
        self.decrement();
        previous
    }

    /// Raises `self` to the power of `exponent`, using exponentiation by
    /// squaring.
    ///
    /// Fails if `exponent` is negative. `x.power(0)` is one for every `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_bigint::BigInt;
    ///
    /// let a = BigInt::from(5);
    /// assert_eq!(a.power(&BigInt::from(10)), Ok(BigInt::from(9765625)));
    /// assert!(a.power(&BigInt::from(-1)).is_err());
    /// ```
    pub fn power(&self, exponent: &BigInt) -> Result<BigInt, PowError> {
        if exponent.is_negative() {
            return Err(PowError::negative_exponent(exponent.clone()));
        }

        let mut base = self.clone();
        let mut exp = exponent.data.clone();
        let mut acc = BigInt::one();
        while !crate::algorithms::is_zero(&exp) {
            let (half, bit) = div_rem_digit(&exp, 2);
            if bit.is_odd() {
                acc *= &base;
            }
            exp = half;
            if !crate::algorithms::is_zero(&exp) {
                base = &base * &base;
            }
        }
        Ok(acc)
    }

    /// `self = sign(self) * (|self| - |other|)`, flipping the sign when
    /// `other` is the larger magnitude.
    fn sub_magnitude(&mut self, other: &[BigDigit]) {
        match cmp_slice(&self.data, other) {
            Less => {
                self.data = sub_digits(other, &self.data);
                self.sign = -self.sign;
            }
            Greater => self.data = sub_digits(&self.data, other),
            Equal => self.set_zero(),
        }
    }

    fn magnitude_u128(&self) -> Option<u128> {
        let base = u128::from(big_digit::BASE);
        self.data
            .iter()
            .try_fold(0u128, |acc, &d| acc.checked_mul(base)?.checked_add(u128::from(d)))
    }
}
