//! Checks `+`, `-` and `*` against results computed by an independent
//! big-integer implementation.
//!
//! Every file in `tests/data/` holds five lines: the two operands, then their
//! sum, difference and product, all as decimal strings.

use std::fs;
use std::path::{Path, PathBuf};

use decimal_bigint::BigInt;

struct Case {
    path: PathBuf,
    lhs: BigInt,
    rhs: BigInt,
    sum: BigInt,
    difference: BigInt,
    product: BigInt,
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn load(path: &Path) -> Case {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    let fields: Vec<BigInt> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse()
                .unwrap_or_else(|e| panic!("{}: bad value {:?}: {}", path.display(), line, e))
        })
        .collect();
    assert_eq!(fields.len(), 5, "{}: expected five values", path.display());

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap();
    Case {
        path: path.to_path_buf(),
        lhs: next(),
        rhs: next(),
        sum: next(),
        difference: next(),
        product: next(),
    }
}

fn cases() -> Vec<Case> {
    let mut paths: Vec<PathBuf> = fs::read_dir(data_dir())
        .expect("tests/data is missing")
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no reference files in tests/data");
    paths.iter().map(|path| load(path)).collect()
}

#[test]
fn sum_matches_reference() {
    for case in cases() {
        assert_eq!(&case.lhs + &case.rhs, case.sum, "{}", case.path.display());
    }
}

#[test]
fn difference_matches_reference() {
    for case in cases() {
        assert_eq!(&case.lhs - &case.rhs, case.difference, "{}", case.path.display());
    }
}

#[test]
fn product_matches_reference() {
    for case in cases() {
        assert_eq!(&case.lhs * &case.rhs, case.product, "{}", case.path.display());
    }
}

#[test]
fn reference_strings_round_trip() {
    for case in cases() {
        let text = fs::read_to_string(&case.path).unwrap();
        let printed: Vec<String> = [
            &case.lhs,
            &case.rhs,
            &case.sum,
            &case.difference,
            &case.product,
        ]
        .iter()
        .map(|n| n.to_string())
        .collect();
        let expected: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        assert_eq!(printed, expected, "{}", case.path.display());
    }
}

#[test]
fn compound_operators_match_reference() {
    for case in cases() {
        let mut acc = case.lhs.clone();
        acc += &case.rhs;
        assert_eq!(acc, case.sum);
        acc -= &case.rhs;
        assert_eq!(acc, case.lhs);
        acc -= &case.rhs;
        assert_eq!(acc, case.difference);

        let mut prod = case.lhs.clone();
        prod *= &case.rhs;
        assert_eq!(prod, case.product);
    }
}
