use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, Axis};

use super::{Function, activations::ActFn, apply};
use crate::{Result, SgdErr};

/// A function that evaluates input vectors by multiplying them by a weight vector and optionally
/// passing the result through an activation function.
///
/// The last weight is the bias, its input is the implicit constant `1`, so a valid instance has
/// one element less than the weight vector.
#[derive(Clone, Debug)]
pub struct LinearFunction {
    weights: Array1<f64>,
    act_fn: Option<ActFn>,
}

impl LinearFunction {
    /// Creates a new `LinearFunction`.
    ///
    /// # Arguments
    /// * `weights` - The feature weights followed by the bias weight.
    /// * `act_fn` - The activation applied to the linear output, if any.
    ///
    /// # Returns
    /// A new `LinearFunction` or an error if `weights` has no room for the bias.
    pub fn new(weights: Array1<f64>, act_fn: Option<ActFn>) -> Result<Self> {
        if weights.is_empty() {
            return Err(SgdErr::ShapeMismatch {
                what: "weights",
                got: 0,
                expected: 1,
            });
        }

        Ok(Self { weights, act_fn })
    }

    /// Creates a `LinearFunction` for `input_dims` features with every weight set to zero.
    pub fn zeros(input_dims: usize, act_fn: Option<ActFn>) -> Self {
        Self {
            weights: Array1::zeros(input_dims + 1),
            act_fn,
        }
    }

    /// The feature weights followed by the bias weight.
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub(crate) fn weights_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.weights.view_mut()
    }

    pub fn act_fn(&self) -> Option<&ActFn> {
        self.act_fn.as_ref()
    }

    /// Returns the amount of feature weights, the bias excluded.
    pub fn input_dims(&self) -> usize {
        self.weights.len() - 1
    }

    /// Computes the output of the linear map before the activation is applied.
    ///
    /// # Arguments
    /// * `instance` - A vector with `input_dims` elements.
    pub fn linear(&self, instance: ArrayView1<f64>) -> Result<f64> {
        self.check_dims(instance.len())?;
        Ok(self.forward(instance))
    }

    /// Same as `linear` without checking the width of `instance`.
    pub(crate) fn forward(&self, instance: ArrayView1<f64>) -> f64 {
        let (w, b) = self.view_params();
        instance.dot(&w) + b
    }

    /// Evaluates the function at `instance`.
    ///
    /// # Arguments
    /// * `instance` - A vector with `input_dims` elements.
    pub fn predict(&self, instance: ArrayView1<f64>) -> Result<f64> {
        let z = self.linear(instance)?;

        let Some(ref act_fn) = self.act_fn else {
            return Ok(z);
        };

        Ok(act_fn.f(z))
    }

    /// Evaluates the function at every row of `instances`.
    ///
    /// # Arguments
    /// * `instances` - A matrix with `input_dims` columns.
    ///
    /// # Returns
    /// A column vector with one output per row.
    pub fn predict_m(&self, instances: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_dims(instances.ncols())?;

        let (w, b) = self.view_params();
        let z = (instances.dot(&w) + b).insert_axis(Axis(1));

        Ok(apply(z, self.act_fn.as_ref()))
    }

    fn check_dims(&self, got: usize) -> Result<()> {
        let expected = self.input_dims();

        if got != expected {
            return Err(SgdErr::SizeMismatch {
                a: "instance",
                b: "weights",
                got,
                expected,
            });
        }

        Ok(())
    }

    /// Splits the weight vector into the feature weights and the bias.
    fn view_params(&self) -> (ArrayView1<'_, f64>, f64) {
        let n = self.input_dims();
        let (w, b) = self.weights.view().split_at(Axis(0), n);
        (w, b[0])
    }
}

impl Function for LinearFunction {
    fn eval(&self, instance: ArrayView1<f64>) -> Result<f64> {
        self.predict(instance)
    }

    fn input_dims(&self) -> usize {
        self.input_dims()
    }
}
