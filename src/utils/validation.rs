use crate::utils::error::{Result, SearchError};
use num_bigint::BigUint;

/// Parses the starting number as a non-negative base-10 integer of
/// unbounded magnitude.
pub fn parse_seed(value: &str) -> Result<BigUint> {
    value.parse::<BigUint>().map_err(|_| SearchError::InvalidInput {
        value: value.to_string(),
    })
}

/// Parses the iteration bound with native-width parsing, so negative
/// textual input is representable and can be rejected explicitly.
pub fn parse_iteration_bound(value: &str) -> Result<u64> {
    let bound = value.parse::<i64>().map_err(|_| SearchError::InvalidInput {
        value: value.to_string(),
    })?;

    if bound < 0 {
        return Err(SearchError::NegativeBound);
    }

    Ok(bound as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("59").unwrap(), BigUint::from(59u32));
        assert_eq!(parse_seed("0").unwrap(), BigUint::from(0u32));
        assert!(parse_seed("abc").is_err());
        assert!(parse_seed("").is_err());
        assert!(parse_seed("12x4").is_err());
    }

    #[test]
    fn test_parse_seed_beyond_native_width() {
        let seed = parse_seed("123456789012345678901234567890123456789").unwrap();
        assert_eq!(seed.to_string(), "123456789012345678901234567890123456789");
    }

    #[test]
    fn test_parse_iteration_bound() {
        assert_eq!(parse_iteration_bound("10").unwrap(), 10);
        assert_eq!(parse_iteration_bound("0").unwrap(), 0);
        assert_eq!(
            parse_iteration_bound("-1").unwrap_err(),
            SearchError::NegativeBound
        );
        assert!(matches!(
            parse_iteration_bound("ten").unwrap_err(),
            SearchError::InvalidInput { .. }
        ));
    }
}
