use quickcheck::{empty_shrinker, Arbitrary, Gen};

use crate::big_digit::{self, BigDigit};
use crate::bigint::{BigInt, Sign};
use num_traits::Zero;

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let sign = if bool::arbitrary(g) {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let len = usize::arbitrary(g) % g.size().max(1) + 1;
        let data: Vec<BigDigit> = (0..len)
            .map(|_| u8::arbitrary(g) % (big_digit::MAX + 1))
            .collect();
        BigInt::from_raw(sign, data)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrink toward zero: zero itself, the absolute value, then the
        // value with its least significant digits cut off one at a time.
        if self.is_zero() {
            return empty_shrinker();
        }

        let mut items = vec![Self::zero()];
        if self.is_negative() {
            items.push(self.abs());
        }
        let digits = self.digits();
        for len in (1..digits.len()).rev() {
            items.push(BigInt::from_raw(self.sign(), digits[..len].to_vec()));
        }
        Box::new(items.into_iter())
    }
}
