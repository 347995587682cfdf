use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("Unknown cipher type: {0}")]
    UnknownCipherType(String),

    #[error("Unknown epoch: {0}")]
    UnknownEpoch(String),

    #[error("Invalid substitution map: {0}")]
    InvalidSubstitutionMap(String),

    #[error("Decode failed: {0}")]
    Decode(String),
}
