use crate::core::error::MappingError;
use crate::mapping::shape::Shape;
use tracing::trace;

/// Structural copier between two record shapes
pub trait Mapper: Send + Sync {
    /// Map an optional source into a fresh destination.
    ///
    /// `None` fails with [`MappingError::NullSource`].
    fn map_from<S: Shape, D: Shape>(&self, source: Option<&S>) -> Result<D, MappingError>;

    fn map<S: Shape, D: Shape>(&self, source: &S) -> Result<D, MappingError> {
        self.map_from(Some(source))
    }
}

/// Copies fields by exact name when both sides declare the same type.
///
/// Allow-listed types match by kind; types outside the allow-list match only
/// the identical Rust type. Fields missing on the destination are dropped. Any
/// other pairing is a mapping definition bug and fails with
/// [`MappingError::UnsupportedMapping`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeMapper;

impl ShapeMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Mapper for ShapeMapper {
    fn map_from<S: Shape, D: Shape>(&self, source: Option<&S>) -> Result<D, MappingError> {
        let source = source.ok_or(MappingError::NullSource {
            source_shape: S::shape_name(),
        })?;

        let mut destination = D::construct().ok_or(MappingError::DestinationConstruction {
            destination_shape: D::shape_name(),
        })?;

        for (field, value) in source.read_fields() {
            let Some(destination_type) = D::field_type(field) else {
                trace!(
                    field,
                    source = S::shape_name(),
                    destination = D::shape_name(),
                    "No destination field, skipping"
                );
                continue;
            };

            let source_type = value.field_type();
            let unsupported = || MappingError::UnsupportedMapping {
                field: field.to_string(),
                source_type: source_type.to_string(),
                destination_type: destination_type.to_string(),
            };

            if source_type != destination_type {
                return Err(unsupported());
            }

            if !destination.write_field(field, value) {
                return Err(unsupported());
            }
        }

        Ok(destination)
    }
}
