//! Tokenizer for calculator expressions.
//!
//! Accepts both the ASCII operators typed on a keyboard and the glyphs the
//! display uses (`×`, `÷`, `−`, `²`, `³`, `√`, `∛`, `π`).

use super::error::EvalError;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    /// Postfix `%`, percent of the operand.
    Percent,
    /// Postfix `²`.
    Square,
    /// Postfix `³`.
    Cube,
    /// Postfix `!`.
    Bang,
    /// Prefix `√`.
    Sqrt,
    /// Prefix `∛`.
    Cbrt,
    Pi,
    LParen,
    RParen,
}

impl Token {
    /// Text used when reporting this token in an error.
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Ident(s) => s.clone(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::Caret => "^".into(),
            Self::Percent => "%".into(),
            Self::Square => "²".into(),
            Self::Cube => "³".into(),
            Self::Bang => "!".into(),
            Self::Sqrt => "√".into(),
            Self::Cbrt => "∛".into(),
            Self::Pi => "π".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
        }
    }
}

/// A token with the byte offset it starts at.
pub type Spanned = (usize, Token);

/// Length of the leading identifier in `word`, with `mod` kept separate so
/// `Infinitymod` reads as `Infinity mod`.
fn split_mod(word: &str) -> usize {
    if word == "mod" {
        word.len()
    } else if word.starts_with("mod") {
        3
    } else if let Some(head) = word.strip_suffix("mod") {
        head.len()
    } else {
        word.len()
    }
}

pub struct Lexer<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Collect the whole input, stopping at the first lexical error.
    pub fn tokenize(input: &'input str) -> Result<Vec<Spanned>, EvalError> {
        Lexer::new(input).collect()
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let skipped: usize = rest
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        self.pos += skipped;
    }

    fn take_ident(&mut self) -> String {
        let rest = &self.input[self.pos..];
        let end = rest
            .char_indices()
            .find(|&(_, c)| !(c.is_ascii_alphabetic() || c == '_'))
            .map_or(rest.len(), |(i, _)| i);
        let end = split_mod(&rest[..end]);
        self.pos += end;
        rest[..end].to_string()
    }

    fn take_num(&mut self) -> Result<f64, EvalError> {
        let rest = &self.input[self.pos..];
        let bytes = rest.as_bytes();
        let n = bytes.len();
        let mut end = 0;

        while end < n && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end < n && bytes[end] == b'.' {
            end += 1;
            while end < n && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }

        // Exponent only when digits follow, so "2e" stays a number and the constant e.
        if end < n && (bytes[end] == b'e' || bytes[end] == b'E') {
            let exp_start = end;
            end += 1;
            if end < n && (bytes[end] == b'+' || bytes[end] == b'-') {
                end += 1;
            }
            if end < n && bytes[end].is_ascii_digit() {
                while end < n && bytes[end].is_ascii_digit() {
                    end += 1;
                }
            } else {
                end = exp_start;
            }
        }

        let text = &rest[..end];
        self.pos += end;
        f64::from_str(text).map_err(|_| EvalError::InvalidNumber(text.to_string()))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let start = self.pos;
        let c = self.input[self.pos..].chars().next()?;

        if c.is_ascii_digit() || c == '.' {
            return Some(self.take_num().map(|n| (start, Token::Number(n))));
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return Some(Ok((start, Token::Ident(self.take_ident()))));
        }

        self.pos += c.len_utf8();
        let tok = match c {
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' | '×' | '·' => Token::Star,
            '/' | '÷' => Token::Slash,
            '^' => Token::Caret,
            '%' => Token::Percent,
            '²' => Token::Square,
            '³' => Token::Cube,
            '!' => Token::Bang,
            '√' => Token::Sqrt,
            '∛' => Token::Cbrt,
            'π' => Token::Pi,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Some(Err(EvalError::UnexpectedChar { ch: c, pos: start })),
        };
        Some(Ok((start, tok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::tokenize(input)
            .unwrap()
            .into_iter()
            .map(|(_, t)| t)
            .collect()
    }

    #[test]
    fn test_numbers_and_operators() {
        assert_eq!(
            tokens("12.5+3*.25"),
            vec![
                Token::Number(12.5),
                Token::Plus,
                Token::Number(3.0),
                Token::Star,
                Token::Number(0.25),
            ]
        );
    }

    #[test]
    fn test_display_glyphs() {
        assert_eq!(
            tokens("4×2÷1−π"),
            vec![
                Token::Number(4.0),
                Token::Star,
                Token::Number(2.0),
                Token::Slash,
                Token::Number(1.0),
                Token::Minus,
                Token::Pi,
            ]
        );
        assert_eq!(
            tokens("√(9)²"),
            vec![
                Token::Sqrt,
                Token::LParen,
                Token::Number(9.0),
                Token::RParen,
                Token::Square,
            ]
        );
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(tokens("1e+21"), vec![Token::Number(1e21)]);
        assert_eq!(tokens("1.5e-7"), vec![Token::Number(1.5e-7)]);
        // No digits after the marker: the number ends and e is a name.
        assert_eq!(
            tokens("2e"),
            vec![Token::Number(2.0), Token::Ident("e".into())]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            tokens("sinh(x) mod Infinity"),
            vec![
                Token::Ident("sinh".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::RParen,
                Token::Ident("mod".into()),
                Token::Ident("Infinity".into()),
            ]
        );
    }

    #[test]
    fn test_identifiers_stop_at_digits() {
        assert_eq!(
            tokens("10mod3"),
            vec![
                Token::Number(10.0),
                Token::Ident("mod".into()),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_mod_splits_from_adjacent_identifiers() {
        assert_eq!(
            tokens("Infinitymod3"),
            vec![
                Token::Ident("Infinity".into()),
                Token::Ident("mod".into()),
                Token::Number(3.0),
            ]
        );
        assert_eq!(
            tokens("NaNmodInfinity"),
            vec![
                Token::Ident("NaN".into()),
                Token::Ident("mod".into()),
                Token::Ident("Infinity".into()),
            ]
        );
        assert_eq!(tokens("mod"), vec![Token::Ident("mod".into())]);
    }

    #[test]
    fn test_positions() {
        let spanned = Lexer::tokenize("1 + √2").unwrap();
        let positions: Vec<usize> = spanned.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0, 2, 4, 7]);
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(
            Lexer::tokenize("2 # 3"),
            Err(EvalError::UnexpectedChar { ch: '#', pos: 2 })
        );
    }

    #[test]
    fn test_lone_point_is_invalid_number() {
        assert_eq!(
            Lexer::tokenize("."),
            Err(EvalError::InvalidNumber(".".into()))
        );
    }
}
