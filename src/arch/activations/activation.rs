/// A differentiable scalar map applied to the output of a linear predictor.
///
/// Both methods must be pure and defined for every real input.
pub trait Activation {
    /// Evaluates the function at `x`.
    fn f(&self, x: f64) -> f64;

    /// Evaluates the derivative of the function at `x`.
    fn df(&self, x: f64) -> f64;
}
