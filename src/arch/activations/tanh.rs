use super::Activation;

/// Hyperbolic tangent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tanh;

impl Tanh {
    pub fn new() -> Self {
        Self
    }
}

impl Activation for Tanh {
    fn f(&self, x: f64) -> f64 {
        x.tanh()
    }

    fn df(&self, x: f64) -> f64 {
        1. - x.tanh().powi(2)
    }
}
