use serde::{Deserialize, Serialize};

use crate::optimization::BiasPenalty;

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Tanh,
    Sigmoid { amp: f64 },
}

/// The specification for the `Sgd` optimizer.
///
/// Values are checked when building, not when deserializing, so an invalid spec can be read and
/// then reported as an `InvalidConfig` error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgdSpec {
    pub penalty: String,
    pub lambda: f64,
    pub num_iterations: i64,
    pub learning_rate: f64,
    #[serde(default)]
    pub act_fn: Option<ActFnSpec>,
    #[serde(default)]
    pub bias_penalty: BiasPenalty,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SgdSpec {
    fn default() -> Self {
        Self {
            penalty: "l2".into(),
            lambda: 0.01,
            num_iterations: 1000,
            learning_rate: 0.1,
            act_fn: None,
            bias_penalty: BiasPenalty::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let json = r#"{
            "penalty": "l1",
            "lambda": 0.5,
            "num_iterations": 20,
            "learning_rate": 0.01
        }"#;

        let spec: SgdSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.penalty, "l1");
        assert_eq!(spec.num_iterations, 20);
        assert_eq!(spec.act_fn, None);
        assert_eq!(spec.bias_penalty, BiasPenalty::Regularized);
        assert_eq!(spec.seed, None);
    }

    #[test]
    fn full_json() {
        let json = r#"{
            "penalty": "l2",
            "lambda": 0.0,
            "num_iterations": -3,
            "learning_rate": 0.1,
            "act_fn": { "sigmoid": { "amp": 2.0 } },
            "bias_penalty": "exempt",
            "seed": 42
        }"#;

        let spec: SgdSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.num_iterations, -3);
        assert_eq!(spec.act_fn, Some(ActFnSpec::Sigmoid { amp: 2.0 }));
        assert_eq!(spec.bias_penalty, BiasPenalty::Exempt);
        assert_eq!(spec.seed, Some(42));

        let tanh: ActFnSpec = serde_json::from_str(r#""tanh""#).unwrap();
        assert_eq!(tanh, ActFnSpec::Tanh);
    }
}
