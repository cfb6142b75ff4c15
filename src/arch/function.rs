use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::Result;

/// A mapping from a vector space to a scalar.
pub trait Function {
    /// Evaluates the function at the point given by `instance`.
    fn eval(&self, instance: ArrayView1<f64>) -> Result<f64>;

    /// Returns the number of dimensions of a valid input vector.
    fn input_dims(&self) -> usize;
}

/// A `Function` that can be trained on a labeled set of input vectors.
pub trait FunctionApproximator: Function {
    /// Fits the approximator to the training data.
    ///
    /// # Arguments
    /// * `x` - A matrix with one input vector per row.
    /// * `y` - A column vector with the desired output for each row of `x`.
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()>;

    /// Predicts the output for a single input vector.
    fn predict(&self, instance: ArrayView1<f64>) -> Result<f64>;

    /// Predicts the output for every row of `instances`.
    ///
    /// # Returns
    /// A column vector with one prediction per row.
    fn predict_m(&self, instances: ArrayView2<f64>) -> Result<Array2<f64>>;
}
