use crate::mapping::value::{FieldType, FieldValue};

/// A record the mapper can read from and write into by field name.
///
/// Normally generated by [`shape!`](crate::shape); hand-written impls are
/// only needed for records that cannot be default-constructed.
pub trait Shape: Sized {
    /// Name used in mapping errors
    fn shape_name() -> &'static str;

    /// Build an empty instance, or `None` if the record has no default state
    fn construct() -> Option<Self>;

    /// Declared type of the named field, `None` if the record has no such field
    fn field_type(name: &str) -> Option<FieldType>;

    /// Every field with its current value, in declaration order
    fn read_fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Assign a value to the named field.
    /// Returns false if the field is unknown or the value does not fit it.
    fn write_field(&mut self, name: &str, value: FieldValue) -> bool;
}

/// Declare a record struct together with its [`Shape`] impl.
///
/// Every field type must implement [`MapField`](crate::mapping::MapField)
/// and the struct must be `Default`.
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::mapping::Shape for $name {
            fn shape_name() -> &'static str {
                stringify!($name)
            }

            fn construct() -> Option<Self> {
                Some(<Self as ::std::default::Default>::default())
            }

            fn field_type(name: &str) -> Option<$crate::mapping::FieldType> {
                $(
                    if name == stringify!($field) {
                        return Some(<$field_ty as $crate::mapping::MapField>::field_type());
                    }
                )*
                None
            }

            fn read_fields(&self) -> Vec<(&'static str, $crate::mapping::FieldValue)> {
                vec![
                    $(
                        (
                            stringify!($field),
                            $crate::mapping::MapField::to_value(&self.$field),
                        ),
                    )*
                ]
            }

            fn write_field(&mut self, name: &str, value: $crate::mapping::FieldValue) -> bool {
                $(
                    if name == stringify!($field) {
                        return match <$field_ty as $crate::mapping::MapField>::from_value(value) {
                            Some(converted) => {
                                self.$field = converted;
                                true
                            }
                            None => false,
                        };
                    }
                )*
                let _ = value;
                false
            }
        }
    };
}
