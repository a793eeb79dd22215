use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config yaml")]
    Config(#[from] serde_yaml::Error),
}

/// Caller mistakes rejected before any search runs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("source {0} is not in the network")]
    UnknownSource(String),
    #[error("target {0} is not in the network")]
    UnknownTarget(String),
    #[error("k must be at least 1")]
    ZeroK,
}

impl Error {
    pub fn is_input(&self) -> bool {
        matches!(self, Error::Input(_))
    }
    pub(crate) fn invalid_weight<N: std::fmt::Debug>(from: &N, to: &N, weight: f64) -> Self {
        Error::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }
}
