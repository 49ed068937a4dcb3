use std::sync::LazyLock;

use regex::Regex;

use super::error::ParseError;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f32),
    Word(String),
}

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?x)
        (?P<Comment>//) |
        (?P<WhiteSpace>\s+) |
        (?P<Number>-?(\d+\.?\d*|\.\d+)) |
        (?P<Word>[A-Za-z_][A-Za-z0-9_]*) |
        (?P<Unknown>\S)"
    ).unwrap()
});

/// Splits one argument line into numbers and bare words. `//` starts a
/// comment that runs to the end of the line.
pub fn tokenize_line(line_number: usize, line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();

    for captures in TOKEN_REGEX.captures_iter(line) {
        if captures.name("Comment").is_some() {
            break;
        } else if captures.name("WhiteSpace").is_some() {
            continue;
        } else if let Some(number) = captures.name("Number") {
            let value = number.as_str().parse::<f32>().map_err(|_| ParseError::MalformedNumber {
                line: line_number,
                token: number.as_str().to_string(),
            })?;
            tokens.push(Token::Number(value));
        } else if let Some(word) = captures.name("Word") {
            tokens.push(Token::Word(word.as_str().to_string()));
        } else if let Some(unknown) = captures.name("Unknown") {
            return Err(ParseError::UnexpectedCharacter {
                line: line_number,
                token: unknown.as_str().to_string(),
            });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_numbers_and_words() {
        let tokens = tokenize_line(1, "x 30.5 -2 .25").unwrap();
        assert_eq!(tokens, vec![
            Token::Word("x".into()),
            Token::Number(30.5),
            Token::Number(-2.0),
            Token::Number(0.25),
        ]);
    }

    #[test]
    fn comment_cuts_the_rest_of_the_line() {
        let tokens = tokenize_line(1, "1 2 // 3 4").unwrap();
        assert_eq!(tokens, vec![Token::Number(1.0), Token::Number(2.0)]);
    }

    #[test]
    fn stray_characters_are_errors() {
        let error = tokenize_line(7, "1 2 ?").unwrap_err();
        assert_eq!(error, ParseError::UnexpectedCharacter { line: 7, token: "?".into() });
    }

    #[test]
    fn blank_line_lexes_to_nothing() {
        assert_eq!(tokenize_line(1, "   ").unwrap(), vec![]);
    }
}
