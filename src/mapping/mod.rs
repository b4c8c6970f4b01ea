// Structural object mapping between entities, domain models and view models

pub mod mapper;
pub mod shape;
pub mod value;

pub use mapper::{Mapper, ShapeMapper};
pub use shape::Shape;
pub use value::{FieldType, FieldValue, MapField, OpaqueValue, Scalar, ScalarType};
