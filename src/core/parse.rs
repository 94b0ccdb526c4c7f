//! Whitespace-delimited numeric token parsing.

use crate::error::{Error, Result};

/// Parse a sequence of text chunks into a flat list of floats.
///
/// Each chunk (a CLI token, a file line, or a whole file body) is split on
/// whitespace; every resulting token must be a valid float literal. Token
/// order is preserved across chunks.
pub fn parse_numbers<I, S>(chunks: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut numbers = Vec::new();
    for chunk in chunks {
        for token in chunk.as_ref().split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| Error::ParseToken {
                token: token.to_string(),
            })?;
            numbers.push(value);
        }
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_mixed_chunks_in_order() {
        let parsed = parse_numbers(["4", " 8 ", "15 16", " 23    42 "]).unwrap();
        assert_eq!(parsed, vec![4.0, 8.0, 15.0, 16.0, 23.0, 42.0]);
    }

    #[test]
    fn surrounding_whitespace_is_irrelevant() {
        let clean = parse_numbers(["1", "2.5", "-3"]).unwrap();
        let padded = parse_numbers(["\t1\n", "  2.5  ", "\n -3 \n"]).unwrap();
        assert_eq!(clean, padded);
    }

    #[test]
    fn accepts_signs_and_exponents() {
        let parsed = parse_numbers(["-1.5 +2 3e2"]).unwrap();
        assert_eq!(parsed, vec![-1.5, 2.0, 300.0]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_numbers(["1 2 three 4"]).unwrap_err();
        match err {
            Error::ParseToken { token } => assert_eq!(token, "three"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_chunks_yield_no_numbers() {
        let parsed = parse_numbers(["", "   ", "\n\n"]).unwrap();
        assert!(parsed.is_empty());
    }
}
