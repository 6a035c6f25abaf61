pub mod math;
pub mod fixedpoint;
pub mod logexpmath;
pub mod formula;

pub use fixedpoint::FixedPoint;
pub use formula::{BancorFormula, MAX_RESERVE_RATIO};
pub use logexpmath::LogExpMath;
pub use math::Math;
