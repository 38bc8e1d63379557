// File: src/core/numeric.rs
use crate::core::lexicon;
use crate::core::types::{NumberRecord, Parity, PrimeStatus};
use crate::error::{AnalysisError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use md5::Md5;
use sha2::{Digest, Sha256};

/// Computes every numeric property of `n`.
///
/// Fails only when `n³` does not fit in a `u128`, which needs a value above
/// 6 981 463 658 331.
pub fn analyze_number(n: u64) -> Result<NumberRecord> {
    let wide = n as u128;
    let cube = wide
        .checked_pow(3)
        .ok_or(AnalysisError::PowerOverflow { value: n })?;
    let decimal = n.to_string();

    Ok(NumberRecord {
        decimal: n,
        hexadecimal: format!("{n:X}"),
        binary: format!("{n:b}"),
        octal: format!("{n:o}"),
        parity: parity(n),
        factors: factorize(n),
        prime_status: if is_prime(n) {
            PrimeStatus::Prime
        } else {
            PrimeStatus::Composite
        },
        digit_sum: digit_sum(n),
        digit_count: decimal.len(),
        square: wide * wide,
        cube,
        square_root: square_root(n),
        md5: format!("{:x}", Md5::digest(decimal.as_bytes())),
        sha256: format!("{:x}", Sha256::digest(decimal.as_bytes())),
        base64: STANDARD.encode(decimal.as_bytes()),
        meaning: lexicon::number_meaning(n).to_string(),
    })
}

pub fn parity(n: u64) -> Parity {
    if n % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// Values below 2 are returned as-is: `[0]` and `[1]`.
pub fn factorize(n: u64) -> Vec<u64> {
    if n < 2 {
        return vec![n];
    }
    let mut factors = Vec::new();
    let mut rest = n;
    let mut d = 2u64;
    while d.saturating_mul(d) <= rest {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }
    factors
}

/// Trial division up to `floor(sqrt(n))`. 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

pub fn digit_sum(n: u64) -> u32 {
    n.to_string().chars().filter_map(|c| c.to_digit(10)).sum()
}

/// Floating-point square root; NaN outside the domain.
pub fn square_root(n: u64) -> f64 {
    let x = n as f64;
    if x >= 0.0 {
        x.sqrt()
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorizes_small_values() {
        assert_eq!(factorize(0), vec![0]);
        assert_eq!(factorize(1), vec![1]);
        assert_eq!(factorize(2), vec![2]);
        assert_eq!(factorize(111), vec![3, 37]);
        assert_eq!(factorize(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(factorize(97), vec![97]);
    }

    #[test]
    fn primality() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(111));
        assert!(is_prime(113));
    }

    #[test]
    fn analyzes_bonzour_value() {
        let record = analyze_number(111).unwrap();
        assert_eq!(record.hexadecimal, "6F");
        assert_eq!(record.binary, "1101111");
        assert_eq!(record.octal, "157");
        assert_eq!(record.parity, Parity::Odd);
        assert_eq!(record.prime_status, PrimeStatus::Composite);
        assert_eq!(record.digit_sum, 3);
        assert_eq!(record.digit_count, 3);
        assert_eq!(record.square, 12_321);
        assert_eq!(record.cube, 1_367_631);
        assert_eq!(record.base64, "MTEx");
        assert_eq!(record.md5, "698d51a19d8a121ce581499d7b701668");
        assert_eq!(record.meaning, "Nonb jénéral");
    }

    #[test]
    fn zero_is_well_defined() {
        let record = analyze_number(0).unwrap();
        assert_eq!(record.hexadecimal, "0");
        assert_eq!(record.binary, "0");
        assert_eq!(record.factors, vec![0]);
        assert_eq!(record.prime_status, PrimeStatus::Composite);
        assert_eq!(record.parity, Parity::Even);
        assert_eq!(record.square_root, 0.0);
        assert_eq!(record.base64, "MA==");
        assert_eq!(
            record.sha256,
            "5feceb66ffc86f38d952786c6d696c79c2dbc239dd4e91b46729d73a27fb57e9"
        );
    }

    #[test]
    fn cube_overflow_is_reported() {
        assert!(analyze_number(6_981_463_658_331).is_ok());
        assert!(matches!(
            analyze_number(u64::MAX),
            Err(AnalysisError::PowerOverflow { value: u64::MAX })
        ));
    }
}
