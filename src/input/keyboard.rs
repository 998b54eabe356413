//! Keyboard mapping and line parsing for the terminal front end.

use super::{FunctionKey, Input, InputError, Operator};

impl Input {
    /// Map a single key press to an input.
    pub fn from_key(key: char) -> Result<Self, InputError> {
        let input = match key {
            '0'..='9' => Self::Digit(key),
            '.' => Self::Point,
            '+' => Self::Operator(Operator::Add),
            '-' | '−' => Self::Operator(Operator::Subtract),
            '*' | '×' => Self::Operator(Operator::Multiply),
            '/' | '÷' => Self::Operator(Operator::Divide),
            '=' => Self::Evaluate,
            '(' => Self::Function(FunctionKey::ParenOpen),
            ')' => Self::Function(FunctionKey::ParenClose),
            '^' => Self::Function(FunctionKey::Power),
            '%' => Self::Function(FunctionKey::Percent),
            '!' => Self::Function(FunctionKey::Factorial),
            'π' => Self::Function(FunctionKey::Pi),
            _ => return Err(InputError::UnknownKey(key)),
        };
        Ok(input)
    }
}

/// Parse a line of terminal input into a sequence of inputs.
///
/// Words are separated by whitespace. A word that names an action
/// (`sin`, `clear`, `deg-rad`, ...) becomes that action; any other word is
/// read as individual key presses, so `12+3=` types five keys.
pub fn parse_line(line: &str) -> Result<Vec<Input>, InputError> {
    let mut inputs = Vec::new();
    for word in line.split_whitespace() {
        match Input::from_action(word) {
            Ok(input) => inputs.push(input),
            Err(_) => {
                for key in word.chars() {
                    inputs.push(Input::from_key(key)?);
                }
            }
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(Input::from_key('4'), Ok(Input::Digit('4')));
        assert_eq!(Input::from_key('.'), Ok(Input::Point));
        assert_eq!(
            Input::from_key('-'),
            Ok(Input::Operator(Operator::Subtract))
        );
        assert_eq!(Input::from_key('='), Ok(Input::Evaluate));
        assert_eq!(
            Input::from_key('!'),
            Ok(Input::Function(FunctionKey::Factorial))
        );
        assert_eq!(Input::from_key('x'), Err(InputError::UnknownKey('x')));
    }

    #[test]
    fn test_parse_keys_and_actions() {
        let inputs = parse_line("12+3 = sqrt").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::Operator(Operator::Add),
                Input::Digit('3'),
                Input::Evaluate,
                Input::Function(FunctionKey::Sqrt),
            ]
        );
    }

    #[test]
    fn test_action_words_win() {
        assert_eq!(
            parse_line("mod e").unwrap(),
            vec![
                Input::Function(FunctionKey::Mod),
                Input::Function(FunctionKey::E),
            ]
        );
        assert_eq!(parse_line("5").unwrap(), vec![Input::Digit('5')]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_line("2 + y"), Err(InputError::UnknownKey('y')));
        assert!(parse_line("   ").unwrap().is_empty());
    }
}
