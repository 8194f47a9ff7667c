use std::cmp::Ordering::{Equal, Greater, Less};

use num_traits::{ToPrimitive, Zero};
use quickcheck::{quickcheck, TestResult};

use crate::BigInt;

quickcheck! {
    fn prop_display_round_trip(a: BigInt) -> bool {
        a.to_string().parse::<BigInt>() == Ok(a)
    }

    fn prop_zero_never_negative(a: BigInt) -> bool {
        let z = &a - &a;
        z.is_zero() && !z.is_negative() && z.to_string() == "0"
    }

    fn prop_add_commutes(a: BigInt, b: BigInt) -> bool {
        &a + &b == &b + &a
    }

    fn prop_mul_commutes(a: BigInt, b: BigInt) -> bool {
        &a * &b == &b * &a
    }

    fn prop_add_associates(a: BigInt, b: BigInt, c: BigInt) -> bool {
        (&a + &b) + &c == &a + (&b + &c)
    }

    fn prop_mul_associates(a: BigInt, b: BigInt, c: BigInt) -> bool {
        (&a * &b) * &c == &a * (&b * &c)
    }

    fn prop_mul_distributes(a: BigInt, b: BigInt, c: BigInt) -> bool {
        (&a + &b) * &c == &a * &c + &b * &c
    }

    fn prop_additive_inverse(a: BigInt) -> bool {
        (&a + -&a).is_zero() && (&a - &a).is_zero()
    }

    fn prop_sub_is_add_neg(a: BigInt, b: BigInt) -> bool {
        &a - &b == &a + -&b
    }

    fn prop_sub_then_add(a: BigInt, b: BigInt) -> bool {
        (&a - &b) + &b == a
    }

    fn prop_ordering_total(a: BigInt, b: BigInt) -> bool {
        let holds = [a < b, a == b, a > b];
        holds.iter().filter(|&&h| h).count() == 1
    }

    fn prop_ordering_matches_difference(a: BigInt, b: BigInt) -> bool {
        let diff = &a - &b;
        let expected = if diff.is_zero() {
            Equal
        } else if diff.is_negative() {
            Less
        } else {
            Greater
        };
        a.cmp(&b) == expected
    }

    fn prop_increment_decrement(a: BigInt) -> bool {
        let mut b = a.clone();
        b.increment();
        b.decrement();
        b == a && a.clone().fetch_increment() == a
    }

    fn prop_matches_i64(x: i64, y: i64) -> bool {
        let (a, b) = (BigInt::from(x), BigInt::from(y));
        let (x, y) = (i128::from(x), i128::from(y));

        (&a + &b).to_i128() == Some(x + y)
            && (&a - &b).to_i128() == Some(x - y)
            && (&a * &b).to_i128() == Some(x * y)
            && a.cmp(&b) == x.cmp(&y)
    }

    fn prop_from_i64_round_trip(x: i64) -> bool {
        let a = BigInt::from(x);
        a.to_i64() == Some(x) && a.to_string() == x.to_string()
    }

    fn prop_power_matches_repeated_mul(a: BigInt, exp: u8) -> TestResult {
        if a.num_digits() > 8 {
            return TestResult::discard();
        }
        let exp = exp % 16;
        let mut expected = BigInt::from(1);
        for _ in 0..exp {
            expected *= &a;
        }
        TestResult::from_bool(a.power(&BigInt::from(exp)) == Ok(expected))
    }
}
