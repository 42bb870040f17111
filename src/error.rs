use thiserror::Error;

/// The only ways a set can fail to parse. Every other malformed fragment
/// falls back to its default instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The message was empty or whitespace only.
    #[error("there is no set data to parse")]
    EmptyInput,

    /// The first line of a block did not contain a species.
    #[error("cannot find a pokemon species on the first line")]
    MissingSpecies,

    /// A `Level:` line whose value is not a positive number.
    #[error("`{0}` is not a valid level")]
    InvalidLevel(String),
}
