#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every variant records the byte offset into the input at which the problem
/// was detected.
pub enum ParseError {
    /// The character at `position` starts neither a number nor `(`.
    UnexpectedCharacter {
        /// The offending character, or `None` at end of input.
        found:    Option<char>,
        /// Byte offset into the input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    MismatchedParentheses {
        /// Byte offset at which `)` was expected.
        position: usize,
    },
    /// A digit-led literal could not be read as a finite number.
    InvalidNumber {
        /// The text that was scanned.
        literal:  String,
        /// Byte offset of the start of the literal.
        position: usize,
    },
    /// Input remained after a complete expression in strict mode.
    UnexpectedTrailingInput {
        /// The first leftover character.
        found:    char,
        /// Byte offset of that character.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// Byte offset of the parenthesis that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset into the input at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MismatchedParentheses { position }
            | Self::InvalidNumber { position, .. }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found: Some(c), position } => write!(f,
                                                                            "Unexpected character '{c}' at position {position}: expected a number or '('."),
            Self::UnexpectedCharacter { found: None, position } => write!(f,
                                                                         "Unexpected end of input at position {position}: expected a number or '('."),

            Self::MismatchedParentheses { position } => write!(f,
                                                               "Mismatched parentheses: expected ')' at position {position}."),

            Self::InvalidNumber { literal, position } => {
                write!(f, "Invalid number '{literal}' at position {position}.")
            },

            Self::UnexpectedTrailingInput { found, position } => write!(f,
                                                                        "Unexpected trailing input '{found}' at position {position}."),

            Self::NestingTooDeep { position } => write!(f,
                                                        "Parentheses nested too deeply at position {position}."),
        }
    }
}

impl std::error::Error for ParseError {}
