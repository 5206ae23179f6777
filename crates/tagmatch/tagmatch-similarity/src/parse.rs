//! Strict parsing of raw scorer answers.

use tagmatch_core::errors::OracleError;

/// Parse a scorer answer into a similarity in `[0, 1]`.
///
/// The answer must be a bare number after trimming. NaN is rejected;
/// anything outside the unit interval (including infinities) is clamped.
pub fn parse_similarity(raw: &str) -> Result<f64, OracleError> {
    let value: f64 = raw.trim().parse().map_err(|_| OracleError::ParseFailed {
        raw: raw.to_string(),
    })?;
    if value.is_nan() {
        return Err(OracleError::ParseFailed {
            raw: raw.to_string(),
        });
    }
    Ok(value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_numbers() {
        assert_eq!(parse_similarity("0.75").unwrap(), 0.75);
        assert_eq!(parse_similarity("  0.3\n").unwrap(), 0.3);
        assert_eq!(parse_similarity("1").unwrap(), 1.0);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(parse_similarity("1.7").unwrap(), 1.0);
        assert_eq!(parse_similarity("-0.2").unwrap(), 0.0);
        assert_eq!(parse_similarity("inf").unwrap(), 1.0);
    }

    #[test]
    fn rejects_prose_and_nan() {
        assert!(parse_similarity("Similarity: 0.8").is_err());
        assert!(parse_similarity("").is_err());
        assert!(parse_similarity("NaN").is_err());
        assert!(parse_similarity("high").is_err());
    }

    proptest::proptest! {
        #[test]
        fn any_number_lands_in_unit_interval(x in proptest::num::f64::ANY) {
            match parse_similarity(&x.to_string()) {
                Ok(v) => proptest::prop_assert!((0.0..=1.0).contains(&v)),
                Err(_) => proptest::prop_assert!(x.is_nan()),
            }
        }
    }
}
