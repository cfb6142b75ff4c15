use ndarray::Array2;

use super::activations::ActFn;

/// Maps `act_fn` over every element of `m`.
///
/// # Arguments
/// * `m` - The matrix to transform, consumed so its buffer can be reused.
/// * `act_fn` - The function to apply, `None` leaves the matrix untouched.
///
/// # Returns
/// A matrix of the same shape as `m`.
pub fn apply(m: Array2<f64>, act_fn: Option<&ActFn>) -> Array2<f64> {
    let Some(act_fn) = act_fn else {
        return m;
    };

    m.mapv_into(|x| act_fn.f(x))
}
