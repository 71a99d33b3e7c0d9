pub mod abs;
pub mod sqrt;
pub mod trig;
pub mod zero;

pub use abs::Abs;
pub use sqrt::Sqrt;
pub use trig::Trig;
pub use zero::{One, Zero};
