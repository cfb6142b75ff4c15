use std::{fmt, sync::Arc};

use super::{Activation, Sigmoid, Tanh};

/// The activation functions a linear function can be composed with.
#[derive(Clone)]
pub enum ActFn {
    Tanh(Tanh),
    Sigmoid(Sigmoid),
    /// A caller provided activation.
    Custom(Arc<dyn Activation + Send + Sync>),
}

impl ActFn {
    pub fn tanh() -> Self {
        Self::Tanh(Tanh::new())
    }

    pub fn sigmoid(amp: f64) -> Self {
        Self::Sigmoid(Sigmoid::new(amp))
    }

    pub fn custom<A>(act_fn: A) -> Self
    where
        A: Activation + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(act_fn))
    }

    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::Tanh(a) => a.f(x),
            Self::Sigmoid(a) => a.f(x),
            Self::Custom(a) => a.f(x),
        }
    }

    pub fn df(&self, x: f64) -> f64 {
        match self {
            Self::Tanh(a) => a.df(x),
            Self::Sigmoid(a) => a.df(x),
            Self::Custom(a) => a.df(x),
        }
    }
}

impl Activation for ActFn {
    fn f(&self, x: f64) -> f64 {
        ActFn::f(self, x)
    }

    fn df(&self, x: f64) -> f64 {
        ActFn::df(self, x)
    }
}

impl fmt::Debug for ActFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tanh(a) => f.debug_tuple("Tanh").field(a).finish(),
            Self::Sigmoid(a) => f.debug_tuple("Sigmoid").field(a).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
