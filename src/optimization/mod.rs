mod builder;
mod gradient_descent;
mod optimizer;
mod penalty;
mod sgd;

pub use builder::SgdBuilder;
pub use gradient_descent::GradientDescent;
pub use optimizer::Optimizer;
pub use penalty::{BiasPenalty, Penalty};
pub use sgd::Sgd;
