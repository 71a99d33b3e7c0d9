pub mod point;
pub mod ray;
pub mod segment;
pub mod spatial_element;
pub mod triangle;
pub mod vector;

pub use point::{Point, Point2, Point3, PointOps};
pub use ray::{Line, Line2, Ray, Ray2};
pub use segment::{Segment, Segment2, Segment3, SegmentOps, interpolate_points};
pub use triangle::{Triangle, Triangle2, Triangle3};
pub use vector::{Cross2, Cross3, Vector, Vector2, Vector3, VectorOps};
