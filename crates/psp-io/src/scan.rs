//! Whitespace token scanner
//!
//! Splits a byte stream on ASCII whitespace and reads numbers the way a
//! formatted `%lf` scan does: the longest numeric prefix of a token is
//! taken, and whatever follows it is scanned next. `1.5abc` yields `1.5`
//! and then the malformed `abc`; `3-4` yields `3` and then `-4`. Input is
//! consumed one line at a time, so large files are never held in memory at
//! once.

use std::collections::VecDeque;
use std::io::BufRead;

use nom::number::complete::double;
use nom::IResult;

use crate::error::IoResult;

/// One scanned token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A token that parsed as a floating-point number
    Number(f64),
    /// Text with no numeric prefix; carries the offending text
    Malformed(String),
    /// The source is exhausted
    End,
}

/// Reads numeric tokens from a buffered source
pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    line: Vec<u8>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Read the next token
    pub fn next_token(&mut self) -> IoResult<Token> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(Token::End);
            }
            self.pending.extend(
                self.line
                    .split(|b| b.is_ascii_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }

        let raw = match self.pending.pop_front() {
            Some(raw) => raw,
            None => return Ok(Token::End),
        };

        let parsed: IResult<&[u8], f64> = double(raw.as_slice());
        match parsed {
            Ok((rest, value)) => {
                if !rest.is_empty() {
                    self.pending.push_front(rest.to_vec());
                }
                Ok(Token::Number(value))
            }
            Err(_) => Ok(Token::Malformed(String::from_utf8_lossy(&raw).into_owned())),
        }
    }

    /// Read the next number, or `None` once the source is exhausted or a
    /// malformed token is hit.
    pub fn next_number(&mut self) -> IoResult<Option<f64>> {
        match self.next_token()? {
            Token::Number(value) => Ok(Some(value)),
            Token::Malformed(text) => {
                tracing::trace!(token = %text, "stopping at malformed token");
                Ok(None)
            }
            Token::End => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(input.as_bytes());
        let mut out = Vec::new();
        loop {
            let token = scanner.next_token().unwrap();
            let done = token == Token::End;
            out.push(token);
            if done {
                return out;
            }
        }
    }

    #[test]
    fn test_splits_on_any_whitespace() {
        assert_eq!(
            tokens("1 2\t3\n\n  4.5\r\n"),
            vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Number(4.5),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(
            tokens("1e3 abc"),
            vec![
                Token::Number(1000.0),
                Token::Malformed("abc".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_trailing_text_after_number() {
        assert_eq!(
            tokens("1.5abc"),
            vec![
                Token::Number(1.5),
                Token::Malformed("abc".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_comma_separated_stops_after_first() {
        assert_eq!(
            tokens("1,2,3"),
            vec![
                Token::Number(1.0),
                Token::Malformed(",2,3".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_adjacent_signed_numbers() {
        assert_eq!(
            tokens("3-4"),
            vec![Token::Number(3.0), Token::Number(-4.0), Token::End]
        );
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut scanner = Scanner::new(&b"\xff\xfe 1"[..]);
        assert!(matches!(scanner.next_token().unwrap(), Token::Malformed(_)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens(""), vec![Token::End]);
        assert_eq!(tokens("   \n\t"), vec![Token::End]);
    }
}
