use thiserror::Error;

/// Structural script errors. These abort the run and name the offending
/// 1-based line; unrecognized commands are recovered in the parser instead
/// and never reach this type.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: `{command}` is missing its argument line")]
    MissingArguments { line: usize, command: String },

    #[error("line {line}: `{command}` expects {expected} arguments, found {found}")]
    WrongArity { line: usize, command: String, expected: usize, found: usize },

    #[error("line {line}: expected a number, found `{found}`")]
    ExpectedNumber { line: usize, found: String },

    #[error("line {line}: malformed number `{token}`")]
    MalformedNumber { line: usize, token: String },

    #[error("line {line}: unknown rotation axis `{token}`")]
    BadAxis { line: usize, token: String },

    #[error("line {line}: unexpected character `{token}`")]
    UnexpectedCharacter { line: usize, token: String },
}
