mod bounding_box;
mod point;

#[doc(inline)]
pub use bounding_box::BoundingBox;
#[doc(inline)]
pub use point::Point;
