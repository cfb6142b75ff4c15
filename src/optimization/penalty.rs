use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::SgdErr;

/// The regularization penalty applied while fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// Penalizes the absolute value of the weights.
    L1,
    /// Penalizes the squared value of the weights.
    L2,
}

impl Penalty {
    /// Computes the (sub)gradient of the penalty for weight `w` scaled by `lambda`.
    pub fn grad(self, lambda: f64, w: f64) -> f64 {
        match self {
            Penalty::L1 => lambda * signum(w),
            Penalty::L2 => lambda * w,
        }
    }
}

/// The sign of `x`, zero is mapped to zero.
fn signum(x: f64) -> f64 {
    if x > 0. {
        1.
    } else if x < 0. {
        -1.
    } else {
        0.
    }
}

impl TryFrom<i64> for Penalty {
    type Error = SgdErr;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Penalty::L1),
            1 => Ok(Penalty::L2),
            _ => Err(SgdErr::invalid_config(format!(
                "unknown penalty type {code}, valid types are 0 (L1) or 1 (L2)"
            ))),
        }
    }
}

impl FromStr for Penalty {
    type Err = SgdErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l1" => Ok(Penalty::L1),
            "l2" => Ok(Penalty::L2),
            _ => Err(SgdErr::invalid_config(format!(
                "unknown penalty type {s:?}, valid types are \"l1\" or \"l2\""
            ))),
        }
    }
}

impl fmt::Display for Penalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Penalty::L1 => write!(f, "l1"),
            Penalty::L2 => write!(f, "l2"),
        }
    }
}

/// Whether the bias weight is regularized like the feature weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasPenalty {
    #[default]
    Regularized,
    Exempt,
}
