use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, SgdErr>;

/// The crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum SgdErr {
    /// Bad hyperparameters given when building an optimizer.
    InvalidConfig(String),
    /// A matrix does not have the shape an operation requires.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// Two sizes that must agree do not.
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    /// A predict-family call was issued before any successful fit.
    NotFitted,
    /// Fitting was requested on a training set without samples.
    EmptyDataset,
}

impl SgdErr {
    pub(crate) fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl Display for SgdErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SgdErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            SgdErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "{what} has the wrong shape, got {got} columns and expected {expected}"
            ),
            SgdErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            SgdErr::NotFitted => write!(f, "cannot predict before running fit"),
            SgdErr::EmptyDataset => write!(f, "cannot fit on a training set without samples"),
        }
    }
}

impl Error for SgdErr {}
