use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::any::{Any, TypeId};
use std::fmt;
use uuid::Uuid;

/// Scalar kinds the mapper is allowed to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Bool,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    Text,
    Date,
    DateTime,
    Guid,
    Bytes,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Bool => "bool",
            ScalarType::Int => "i32",
            ScalarType::Long => "i64",
            ScalarType::Float => "f32",
            ScalarType::Double => "f64",
            ScalarType::Decimal => "Decimal",
            ScalarType::Text => "String",
            ScalarType::Date => "NaiveDate",
            ScalarType::DateTime => "NaiveDateTime",
            ScalarType::Guid => "Uuid",
            ScalarType::Bytes => "Vec<u8>",
        };
        f.write_str(name)
    }
}

/// Declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    List(ScalarType),
    /// Outside the allow-list (nested records, maps, ...).
    /// Only ever compatible with the identical Rust type.
    Opaque {
        name: &'static str,
        type_id: TypeId,
    },
}

impl FieldType {
    pub fn opaque<T: Any>(name: &'static str) -> Self {
        FieldType::Opaque {
            name,
            type_id: TypeId::of::<T>(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(scalar) => write!(f, "{}", scalar),
            FieldType::List(scalar) => write!(f, "Vec<{}>", scalar),
            FieldType::Opaque { name, .. } => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Guid(Uuid),
    Bytes(Vec<u8>),
}

impl Scalar {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::Int(_) => ScalarType::Int,
            Scalar::Long(_) => ScalarType::Long,
            Scalar::Float(_) => ScalarType::Float,
            Scalar::Double(_) => ScalarType::Double,
            Scalar::Decimal(_) => ScalarType::Decimal,
            Scalar::Text(_) => ScalarType::Text,
            Scalar::Date(_) => ScalarType::Date,
            Scalar::DateTime(_) => ScalarType::DateTime,
            Scalar::Guid(_) => ScalarType::Guid,
            Scalar::Bytes(_) => ScalarType::Bytes,
        }
    }
}

/// Boxed value of a type outside the allow-list
pub struct OpaqueValue {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Box::new(value),
        }
    }

    pub fn field_type(&self) -> FieldType {
        FieldType::Opaque {
            name: self.name,
            type_id: (*self.value).type_id(),
        }
    }

    /// Recover the value if it is a `T`
    pub fn downcast<T: Any>(self) -> Option<T> {
        self.value.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.name).finish()
    }
}

/// Type-erased value read from (or written to) a record field
#[derive(Debug)]
pub enum FieldValue {
    Scalar(Scalar),
    /// Homogeneous list; the element type is kept so empty lists still carry it
    List(ScalarType, Vec<Scalar>),
    Opaque(OpaqueValue),
}

impl FieldValue {
    /// Runtime type of the value
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Scalar(scalar) => FieldType::Scalar(scalar.scalar_type()),
            FieldValue::List(element, _) => FieldType::List(*element),
            FieldValue::Opaque(opaque) => opaque.field_type(),
        }
    }
}

/// A Rust type that can sit in a mapped record field.
///
/// Implemented for every allow-listed scalar and `Vec` of each scalar.
/// Anything else must go through [`opaque_field!`](crate::opaque_field),
/// which lets the mapper copy the field only into the identical type.
pub trait MapField: Sized {
    fn field_type() -> FieldType;
    fn to_value(&self) -> FieldValue;
    fn from_value(value: FieldValue) -> Option<Self>;
}

trait ScalarField: Sized {
    const TYPE: ScalarType;
    fn to_scalar(&self) -> Scalar;
    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! scalar_field {
    ($ty:ty, $variant:ident) => {
        impl ScalarField for $ty {
            const TYPE: ScalarType = ScalarType::$variant;

            fn to_scalar(&self) -> Scalar {
                Scalar::$variant(self.clone())
            }

            fn from_scalar(scalar: Scalar) -> Option<Self> {
                match scalar {
                    Scalar::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl MapField for $ty {
            fn field_type() -> FieldType {
                FieldType::Scalar(ScalarType::$variant)
            }

            fn to_value(&self) -> FieldValue {
                FieldValue::Scalar(self.to_scalar())
            }

            fn from_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::Scalar(scalar) => Self::from_scalar(scalar),
                    _ => None,
                }
            }
        }

        impl MapField for Vec<$ty> {
            fn field_type() -> FieldType {
                FieldType::List(ScalarType::$variant)
            }

            fn to_value(&self) -> FieldValue {
                FieldValue::List(
                    <$ty as ScalarField>::TYPE,
                    self.iter().map(ScalarField::to_scalar).collect(),
                )
            }

            fn from_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::List(ScalarType::$variant, items) => items
                        .into_iter()
                        .map(<$ty as ScalarField>::from_scalar)
                        .collect(),
                    _ => None,
                }
            }
        }
    };
}

scalar_field!(bool, Bool);
scalar_field!(i32, Int);
scalar_field!(i64, Long);
scalar_field!(f32, Float);
scalar_field!(f64, Double);
scalar_field!(Decimal, Decimal);
scalar_field!(String, Text);
scalar_field!(NaiveDate, Date);
scalar_field!(NaiveDateTime, DateTime);
scalar_field!(Uuid, Guid);
scalar_field!(Vec<u8>, Bytes);

/// Declare a field type outside the allow-list, such as a nested record.
///
/// The type must be `Clone + Send + Sync + 'static`. The mapper copies such a
/// field only into a field of the identical type; any other pairing is an
/// unsupported mapping.
///
/// ```ignore
/// opaque_field!(Address);
/// ```
#[macro_export]
macro_rules! opaque_field {
    ($ty:ty) => {
        impl $crate::mapping::MapField for $ty {
            fn field_type() -> $crate::mapping::FieldType {
                $crate::mapping::FieldType::opaque::<$ty>(stringify!($ty))
            }

            fn to_value(&self) -> $crate::mapping::FieldValue {
                $crate::mapping::FieldValue::Opaque($crate::mapping::OpaqueValue::new(
                    stringify!($ty),
                    ::std::clone::Clone::clone(self),
                ))
            }

            fn from_value(value: $crate::mapping::FieldValue) -> Option<Self> {
                match value {
                    $crate::mapping::FieldValue::Opaque(opaque) => opaque.downcast::<$ty>(),
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_value_carries_type() {
        let value = 42i64.to_value();
        assert_eq!(value.field_type(), FieldType::Scalar(ScalarType::Long));
        assert_eq!(i64::from_value(value), Some(42));
    }

    #[test]
    fn test_scalar_rejects_other_variant() {
        let value = "42".to_string().to_value();
        assert_eq!(i64::from_value(value), None);
    }

    #[test]
    fn test_empty_list_keeps_element_type() {
        let empty: Vec<Uuid> = Vec::new();
        let value = empty.to_value();
        assert_eq!(value.field_type(), FieldType::List(ScalarType::Guid));
        assert_eq!(Vec::<Uuid>::from_value(value), Some(Vec::new()));
    }

    #[test]
    fn test_bytes_are_scalar_and_byte_lists_are_lists() {
        assert_eq!(<Vec<u8>>::field_type(), FieldType::Scalar(ScalarType::Bytes));
        assert_eq!(<Vec<Vec<u8>>>::field_type(), FieldType::List(ScalarType::Bytes));
    }

    #[test]
    fn test_list_of_wrong_element_type_is_rejected() {
        let value = vec![1i32, 2, 3].to_value();
        assert_eq!(Vec::<i64>::from_value(value), None);
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::Scalar(ScalarType::Text).to_string(), "String");
        assert_eq!(FieldType::List(ScalarType::Date).to_string(), "Vec<NaiveDate>");
        assert_eq!(FieldType::opaque::<Tag>("Tag").to_string(), "Tag");
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Tag(String);

    #[derive(Clone, Debug, PartialEq)]
    struct Label(String);

    crate::opaque_field!(Tag);
    crate::opaque_field!(Label);

    #[test]
    fn test_opaque_value_round_trips_into_same_type() {
        let value = Tag("vip".to_string()).to_value();
        assert_eq!(value.field_type(), Tag::field_type());
        assert_eq!(Tag::from_value(value), Some(Tag("vip".to_string())));
    }

    #[test]
    fn test_opaque_types_with_different_rust_types_differ() {
        assert_ne!(Tag::field_type(), Label::field_type());

        let value = Tag("vip".to_string()).to_value();
        assert_eq!(Label::from_value(value), None);
    }
}
