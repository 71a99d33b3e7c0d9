pub mod kernel;
pub mod planar_kernel;
pub mod predicates;

pub use kernel::{GeodesicKernel, Orientation, SegmentIntersection};
pub use planar_kernel::PlanarKernel;
