use super::Activation;

#[derive(Clone, Debug, PartialEq)]
pub struct Sigmoid {
    amp: f64,
}

impl Sigmoid {
    pub fn new(amp: f64) -> Self {
        Self { amp }
    }

    fn logistic(z: f64) -> f64 {
        1. / (1. + (-z).exp())
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl Activation for Sigmoid {
    fn f(&self, z: f64) -> f64 {
        self.amp * Self::logistic(z)
    }

    fn df(&self, z: f64) -> f64 {
        // s(1 - s) stays finite where e^{-z} overflows.
        let s = Self::logistic(z);
        self.amp * s * (1. - s)
    }
}
