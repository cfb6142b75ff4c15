use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use super::{Penalty, Sgd};
use crate::{
    Result, SgdErr,
    arch::activations::ActFn,
    specs::{ActFnSpec, SgdSpec},
};

/// Builds `Sgd` optimizers given a specification.
#[derive(Default)]
pub struct SgdBuilder;

impl SgdBuilder {
    /// Creates a new `SgdBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Sgd` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the optimizer.
    ///
    /// # Returns
    /// A new untrained `Sgd` or `SgdErr::InvalidConfig` if the spec is invalid.
    pub fn build(&self, spec: &SgdSpec) -> Result<Sgd<StdRng>> {
        let penalty: Penalty = spec.penalty.parse()?;
        let num_iterations = usize::try_from(spec.num_iterations).map_err(|_| {
            SgdErr::invalid_config(format!(
                "num_iterations must be positive, got {}",
                spec.num_iterations
            ))
        })?;
        let act_fn = spec.act_fn.map(|spec| self.resolve_act_fn(spec));
        let rng = self.generate_rng(spec.seed);

        debug!("building sgd from {spec:?}");

        let sgd = Sgd::new(
            penalty,
            spec.lambda,
            num_iterations,
            spec.learning_rate,
            act_fn,
            rng,
        )?;

        Ok(sgd.with_bias_penalty(spec.bias_penalty))
    }

    fn resolve_act_fn(&self, spec: ActFnSpec) -> ActFn {
        match spec {
            ActFnSpec::Tanh => ActFn::tanh(),
            ActFnSpec::Sigmoid { amp } => ActFn::sigmoid(amp),
        }
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
