pub mod activations;
mod function;
mod linear;
pub mod loss;
mod ops;

pub use function::{Function, FunctionApproximator};
pub use linear::LinearFunction;
pub use ops::apply;
