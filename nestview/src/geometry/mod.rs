/// Set of traits representing geometric operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod polygon_ops;
mod transformation;

#[doc(inline)]
pub use polygon_ops::compute_bounding_box;
#[doc(inline)]
pub use polygon_ops::polygon_to_path;
#[doc(inline)]
pub use polygon_ops::transform;
#[doc(inline)]
pub use transformation::Transformation;
