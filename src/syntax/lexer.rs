use std::{iter::Peekable, str::CharIndices};

use super::token::Token;
use crate::error::{ErrorKind, PResult};

const NO_DIGIT_AFTER_SIGN: &str = "no digit after sign";
const NO_DIGIT_AFTER_POINT: &str = "no digit after decimal point";
const EXPECTED_DIGIT: &str = "expected a digit";
const UNREPRESENTABLE: &str = "not representable as a float";

/// Splits a source string into tokens, stopping after the first error.
pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    failed: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();

        let &(off, c) = self.chars.peek()?;
        let token = self.read_token(off, c);
        match &token {
            Ok(token) => log::trace!("{off}: {token:?}"),
            Err(_) => self.failed = true,
        }
        Some(token)
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            failed: false,
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !Token::is_whitespace(c) {
                break;
            }
            self.bump();
        }
    }

    fn skip_to(&mut self, to: usize) {
        while let Some(&(off, _)) = self.chars.peek() {
            if off >= to {
                break;
            }
            self.bump();
        }
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_token(&mut self, off: usize, c: char) -> PResult<Token<'src>> {
        if c == '+' || c == '-' || c.is_ascii_digit() {
            match parse_number(self.src, off) {
                Ok((value, to)) => {
                    self.skip_to(to);
                    return Ok(Token::Number(value));
                }
                // A lone sign is an operator, not a broken literal.
                Err(ErrorKind::MalformedNumber {
                    reason: NO_DIGIT_AFTER_SIGN,
                    ..
                }) => (),
                Err(why) => return Err(why),
            }
        }

        if Token::is_operator_char(c) {
            let symbol = self.slice_until(off, |c| !Token::is_operator_char(c));
            return Ok(Token::InfixOperator(symbol));
        }

        if Token::is_function_char(c) {
            let name = self.slice_until(off, |c| !Token::is_function_char(c));
            return Ok(Token::FunctionName(name));
        }

        self.bump();
        match c {
            '(' => Ok(Token::OpenParen),
            ')' => Ok(Token::CloseParen),
            ',' => Ok(Token::Comma),
            ch => Err(ErrorKind::UnexpectedChar { ch, offset: off }),
        }
    }
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

/// Reads a number literal starting at byte offset `from`.
///
/// Accepts an optional sign, at least one integer digit, and an optional
/// fractional part that must contain at least one digit. Returns the value
/// and the offset just past the literal.
pub fn parse_number(src: &str, from: usize) -> PResult<(f64, usize)> {
    let bytes = src.as_bytes();
    let mut to = from;

    let (signed, negative) = match bytes.get(to) {
        Some(b'-') => (true, true),
        Some(b'+') => (true, false),
        _ => (false, false),
    };
    if signed {
        to += 1;
    }

    let digits_from = to;
    to = skip_digits(bytes, to);
    if to == digits_from {
        let reason = if signed {
            NO_DIGIT_AFTER_SIGN
        } else {
            EXPECTED_DIGIT
        };
        return Err(ErrorKind::MalformedNumber {
            offset: digits_from,
            reason,
        });
    }

    if bytes.get(to) == Some(&b'.') {
        let fraction_from = to + 1;
        to = skip_digits(bytes, fraction_from);
        if to == fraction_from {
            return Err(ErrorKind::MalformedNumber {
                offset: fraction_from,
                reason: NO_DIGIT_AFTER_POINT,
            });
        }
    }

    // Digits are already validated; `f64` parsing of them cannot fail.
    let magnitude: f64 = src[digits_from..to]
        .parse()
        .map_err(|_| ErrorKind::MalformedNumber {
            offset: digits_from,
            reason: UNREPRESENTABLE,
        })?;

    Ok((if negative { -magnitude } else { magnitude }, to))
}

/// Tokenizes the whole source, failing on the first unrecognized input.
pub fn tokenize(src: &str) -> PResult<Vec<Token<'_>>> {
    let tokens = Lexer::new(src).collect::<PResult<Vec<_>>>()?;
    log::debug!("tokenized {} token(s) from {src:?}", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::{parse_number, tokenize, super::token::Token};
    use crate::error::ErrorKind;

    fn tokenize_str(s: &str) -> Vec<Token> {
        tokenize(s).unwrap()
    }

    fn number(s: &str) -> f64 {
        parse_number(s, 0).unwrap().0
    }

    #[test]
    fn read_number() {
        assert_eq!(number("1337"), 1337.0);
        assert_eq!(number("+1337"), 1337.0);
        assert_eq!(number("-1337"), -1337.0);
        assert_eq!(number("1337.42"), 1337.42);
        assert_eq!(number("-1337.42"), -1337.42);
    }

    #[test]
    fn read_number_stops_at_literal_end() {
        assert_eq!(parse_number("12.5)", 0), Ok((12.5, 4)));
        assert_eq!(parse_number("(7 ", 1), Ok((7.0, 2)));
    }

    #[test]
    fn reject_bare_decimal_point() {
        for literal in [".43", "12.", "-.43"] {
            assert!(matches!(
                parse_number(literal, 0),
                Err(ErrorKind::MalformedNumber { .. })
            ));
        }
    }

    #[test]
    fn reject_sign_without_digit() {
        assert_eq!(
            parse_number("- 1", 0),
            Err(ErrorKind::MalformedNumber {
                offset: 1,
                reason: "no digit after sign",
            })
        );
    }

    #[test]
    fn reject_missing_leading_digit() {
        assert_eq!(
            parse_number(".43", 0),
            Err(ErrorKind::MalformedNumber {
                offset: 0,
                reason: "expected a digit",
            })
        );
        assert_eq!(
            parse_number("7.x", 0),
            Err(ErrorKind::MalformedNumber {
                offset: 2,
                reason: "no digit after decimal point",
            })
        );
    }

    #[test]
    fn read_expression() {
        let tokens = tokenize_str("3 + 4 * 2 / (1 - 5)");
        let expected = &[
            Token::Number(3.0),
            Token::InfixOperator("+"),
            Token::Number(4.0),
            Token::InfixOperator("*"),
            Token::Number(2.0),
            Token::InfixOperator("/"),
            Token::OpenParen,
            Token::Number(1.0),
            Token::InfixOperator("-"),
            Token::Number(5.0),
            Token::CloseParen,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_function_call() {
        let tokens = tokenize_str("clamp(0,\t4, -10)\n");
        let expected = &[
            Token::FunctionName("clamp"),
            Token::OpenParen,
            Token::Number(0.0),
            Token::Comma,
            Token::Number(4.0),
            Token::Comma,
            Token::Number(-10.0),
            Token::CloseParen,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn operator_runs_are_greedy() {
        let tokens = tokenize_str("2 ** 3 +- 1");
        let expected = &[
            Token::Number(2.0),
            Token::InfixOperator("**"),
            Token::Number(3.0),
            Token::InfixOperator("+-"),
            Token::Number(1.0),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn sign_binds_to_following_digits() {
        let tokens = tokenize_str("3 -4");
        assert_eq!(tokens, &[Token::Number(3.0), Token::Number(-4.0)]);
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            tokenize("48 $ 7"),
            Err(ErrorKind::UnexpectedChar { ch: '$', offset: 3 })
        );
        assert_eq!(
            tokenize("sqrt(.5)"),
            Err(ErrorKind::UnexpectedChar { ch: '.', offset: 5 })
        );
    }

    #[test]
    fn trailing_decimal_point_is_fatal() {
        assert!(matches!(
            tokenize("1 + 12. * 3"),
            Err(ErrorKind::MalformedNumber { offset: 7, .. })
        ));
    }
}
