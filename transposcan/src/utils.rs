//! This module contains various utility functions and helper macros used
//! throughout the transposcan crate.
//!
//! Key functionalities include:
//!
//! - Macros for common struct operations (getter functions, builder-style
//!   `with_*` methods).
//! - Rounding and rendering of density values the way the report
//!   tables print them.

#[macro_export]
macro_rules! getter_fn {
    ($field_name:ident, copy $field_type:ty) => {
        pub fn $field_name(&self) -> $field_type {
            self.$field_name
        }
    };
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}
pub use getter_fn;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
pub use with_field_fn;

/// Rounds `value` to `digits` decimal places.
///
/// Goes through the shortest decimal expansion, so halfway cases follow the
/// exact binary value instead of the scaled product.
pub fn round_to(
    value: f64,
    digits: usize,
) -> f64 {
    format!("{:.*}", digits, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Renders a float with at least one fractional digit (`1.0`, `0.25`).
pub fn float_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    }
    else {
        format!("{}", value)
    }
}
