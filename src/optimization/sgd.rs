use std::{iter, mem};

use log::{debug, trace, warn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1};
use rand::Rng;

use super::{BiasPenalty, GradientDescent, Optimizer, Penalty};
use crate::{
    Result, SgdErr,
    arch::{Function, FunctionApproximator, LinearFunction, activations::ActFn},
};

/// Whether the optimizer has learned a model yet.
#[derive(Debug, Clone)]
enum State {
    Unfitted,
    Fitted(LinearFunction),
}

/// Stochastic gradient descent over a (generalized) linear function.
///
/// Each iteration samples a single training row uniformly at random with replacement and takes a
/// step against the gradient of its squared error plus the regularization penalty. The learned
/// `LinearFunction` is created on the first `fit` and kept across later calls, which continue
/// from the current weights.
#[derive(Debug, Clone)]
pub struct Sgd<R>
where
    R: Rng,
{
    penalty: Penalty,
    lambda: f64,
    num_iterations: usize,
    learning_rate: f64,
    bias_penalty: BiasPenalty,
    act_fn: Option<ActFn>,
    rng: R,

    state: State,
}

impl<R> Sgd<R>
where
    R: Rng,
{
    /// Creates a new, untrained `Sgd`.
    ///
    /// # Arguments
    /// * `penalty` - The regularization penalty used during fitting.
    /// * `lambda` - The regularization strength, must be finite and non negative.
    /// * `num_iterations` - The amount of single sample updates per `fit` call, at least one.
    /// * `learning_rate` - The constant learning rate, normalized by the input dimensions.
    /// * `act_fn` - The activation applied to the linear output, if any.
    /// * `rng` - The random source used for sampling training rows.
    ///
    /// # Returns
    /// A new `Sgd` or `SgdErr::InvalidConfig` if any hyperparameter is invalid.
    pub fn new(
        penalty: Penalty,
        lambda: f64,
        num_iterations: usize,
        learning_rate: f64,
        act_fn: Option<ActFn>,
        rng: R,
    ) -> Result<Self> {
        if !lambda.is_finite() || lambda < 0. {
            return Err(SgdErr::invalid_config(format!(
                "regularization parameter must be finite and non negative, got {lambda}"
            )));
        }

        if num_iterations < 1 {
            return Err(SgdErr::invalid_config("num_iterations must be positive"));
        }

        if !learning_rate.is_finite() {
            return Err(SgdErr::invalid_config(format!(
                "learning rate must be finite, got {learning_rate}"
            )));
        }

        Ok(Self {
            penalty,
            lambda,
            num_iterations,
            learning_rate,
            bias_penalty: BiasPenalty::default(),
            act_fn,
            rng,
            state: State::Unfitted,
        })
    }

    /// Sets whether the bias weight is regularized.
    pub fn with_bias_penalty(mut self, bias_penalty: BiasPenalty) -> Self {
        self.bias_penalty = bias_penalty;
        self
    }

    /// Creates an untrained `Sgd` with the same hyperparameters as this one, sampling with `rng`.
    pub fn new_copy_with<S>(&self, rng: S) -> Sgd<S>
    where
        S: Rng,
    {
        Sgd {
            penalty: self.penalty,
            lambda: self.lambda,
            num_iterations: self.num_iterations,
            learning_rate: self.learning_rate,
            bias_penalty: self.bias_penalty,
            act_fn: self.act_fn.clone(),
            rng,
            state: State::Unfitted,
        }
    }

    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn bias_penalty(&self) -> BiasPenalty {
        self.bias_penalty
    }

    pub fn act_fn(&self) -> Option<&ActFn> {
        self.act_fn.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, State::Fitted(_))
    }

    /// Returns the number of dimensions of a valid input vector, zero until the first `fit`.
    pub fn input_dims(&self) -> usize {
        match &self.state {
            State::Fitted(f) => f.input_dims(),
            State::Unfitted => 0,
        }
    }

    /// Returns the learned weights, the bias last.
    ///
    /// Before the first `fit` this is a single zero and carries no meaning.
    pub fn weights(&self) -> Array1<f64> {
        match &self.state {
            State::Fitted(f) => f.weights().to_owned(),
            State::Unfitted => Array1::zeros(1),
        }
    }

    /// Returns the learned model, if any.
    pub fn model(&self) -> Option<&LinearFunction> {
        match &self.state {
            State::Fitted(f) => Some(f),
            State::Unfitted => None,
        }
    }

    /// Runs `num_iterations` single sample updates over the training data.
    ///
    /// The first call fixes the input dimensions and starts from all zero weights, later calls
    /// continue from the current weights and must present the same amount of columns. Every
    /// check happens before any weight is touched, so a failed call leaves the model as it was.
    ///
    /// # Arguments
    /// * `x` - A matrix with one input vector per row.
    /// * `y` - A column vector with the label of each row of `x`.
    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        self.validate(x, y)?;

        let n = x.nrows();
        let input_dims = x.ncols();

        let mut f = match mem::replace(&mut self.state, State::Unfitted) {
            State::Fitted(f) => {
                trace!("warm starting from previous weights");
                f
            }
            State::Unfitted => LinearFunction::zeros(input_dims, self.act_fn.clone()),
        };

        debug!(
            samples = n, input_dims = input_dims, iterations = self.num_iterations;
            "fitting with {} penalty", self.penalty
        );

        let mut optimizer = GradientDescent::new(self.learning_rate / input_dims as f64);
        let mut grad = Array1::zeros(input_dims + 1);

        for _ in 0..self.num_iterations {
            let i = self.rng.random_range(0..n);
            self.compute_grad(&f, x.row(i), y[(i, 0)], grad.view_mut());
            optimizer.update_params(f.weights_mut(), grad.view());
        }

        if f.weights().iter().any(|w| !w.is_finite()) {
            warn!("fitting diverged, the weights are no longer finite");
        }

        debug!("fitted weights: {}", f.weights());
        self.state = State::Fitted(f);
        Ok(())
    }

    /// Predicts the output for a single input vector.
    pub fn predict(&self, instance: ArrayView1<f64>) -> Result<f64> {
        self.fitted()?.predict(instance)
    }

    /// Predicts the output for every row of `instances`.
    ///
    /// # Returns
    /// A column vector with one prediction per row.
    pub fn predict_m(&self, instances: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.fitted()?.predict_m(instances)
    }

    fn fitted(&self) -> Result<&LinearFunction> {
        self.model().ok_or(SgdErr::NotFitted)
    }

    fn validate(&self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        if x.nrows() != y.nrows() {
            return Err(SgdErr::SizeMismatch {
                a: "x rows",
                b: "y rows",
                got: x.nrows(),
                expected: y.nrows(),
            });
        }

        if y.ncols() != 1 {
            return Err(SgdErr::ShapeMismatch {
                what: "y",
                got: y.ncols(),
                expected: 1,
            });
        }

        if x.nrows() == 0 {
            return Err(SgdErr::EmptyDataset);
        }

        if x.ncols() == 0 {
            return Err(SgdErr::ShapeMismatch {
                what: "x",
                got: 0,
                expected: 1,
            });
        }

        if let State::Fitted(f) = &self.state {
            if f.input_dims() != x.ncols() {
                return Err(SgdErr::SizeMismatch {
                    a: "x columns",
                    b: "fitted input dims",
                    got: x.ncols(),
                    expected: f.input_dims(),
                });
            }
        }

        Ok(())
    }

    /// Writes into `grad` the gradient of the sample's squared error plus the penalty.
    ///
    /// The residual goes through the chain rule of the activation, with no activation the
    /// derivative is one.
    fn compute_grad(
        &self,
        f: &LinearFunction,
        x: ArrayView1<f64>,
        y: f64,
        mut grad: ArrayViewMut1<f64>,
    ) {
        let z = f.forward(x);
        let (y_pred, dz) = match f.act_fn() {
            Some(act_fn) => (act_fn.f(z), act_fn.df(z)),
            None => (z, 1.),
        };

        let scale = -(y - y_pred) * dz;
        let inputs = x.iter().copied().chain(iter::once(1.));
        grad.iter_mut().zip(inputs).for_each(|(g, xj)| *g = scale * xj);

        let penalized = match self.bias_penalty {
            BiasPenalty::Regularized => grad.len(),
            BiasPenalty::Exempt => grad.len() - 1,
        };

        grad.iter_mut()
            .zip(f.weights())
            .take(penalized)
            .for_each(|(g, &w)| *g += self.penalty.grad(self.lambda, w));
    }
}

impl<R> Sgd<R>
where
    R: Rng + Clone,
{
    /// Creates an untrained `Sgd` with the same hyperparameters as this one.
    ///
    /// The copy starts from a clone of this instance's random source.
    pub fn new_copy(&self) -> Self {
        self.new_copy_with(self.rng.clone())
    }
}

impl<R> Function for Sgd<R>
where
    R: Rng,
{
    fn eval(&self, instance: ArrayView1<f64>) -> Result<f64> {
        self.predict(instance)
    }

    fn input_dims(&self) -> usize {
        self.input_dims()
    }
}

impl<R> FunctionApproximator for Sgd<R>
where
    R: Rng,
{
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        self.fit(x, y)
    }

    fn predict(&self, instance: ArrayView1<f64>) -> Result<f64> {
        self.predict(instance)
    }

    fn predict_m(&self, instances: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.predict_m(instances)
    }
}
