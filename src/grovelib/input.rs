use nom::{character, combinator::all_consuming, IResult};

use crate::error::DecryptError;
use crate::ring::Value;

fn parse_number(s: &str) -> IResult<&str, Value> {
    all_consuming(character::complete::i64)(s)
}

/// Parse one signed integer per line. The first line that isn't one fails the whole parse.
pub fn parse_numbers(s: &str) -> Result<Vec<Value>, DecryptError> {
    s.lines()
        .enumerate()
        .map(|(i, line)| {
            let (_, value) =
                parse_number(line.trim()).map_err(|_| DecryptError::MalformedInput {
                    line: i + 1,
                    text: line.to_owned(),
                })?;
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_numbers;
    use crate::error::DecryptError;

    #[test]
    fn test_parse_sample() {
        let input = "1\n2\n-3\n3\n-2\n0\n4\n";
        assert_eq!(parse_numbers(input), Ok(vec![1, 2, -3, 3, -2, 0, 4]));
    }

    #[test]
    fn test_parse_crlf_and_large() {
        let input = "9223372036854775807\r\n-9223372036854775808\r\n0";
        assert_eq!(parse_numbers(input), Ok(vec![i64::MAX, i64::MIN, 0]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_numbers("1\n2x\n3\n"),
            Err(DecryptError::MalformedInput {
                line: 2,
                text: "2x".to_owned()
            })
        );
        assert_eq!(
            parse_numbers("1\n\n3\n"),
            Err(DecryptError::MalformedInput {
                line: 2,
                text: String::new()
            })
        );
        assert!(parse_numbers("9223372036854775808").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_numbers(""), Ok(vec![]));
    }
}
