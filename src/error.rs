use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Password length {length} is too small (minimum is {min})")]
    InvalidLength { length: usize, min: usize },

    /// A filler character could not be placed within the retry budget.
    #[error("Failed to place a character after {attempts} attempts")]
    PlacementExhausted { attempts: usize },

    #[error("Failed to seed keystream from system entropy")]
    Entropy(#[source] getrandom::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
