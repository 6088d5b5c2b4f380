//! Required-field rule for vehicle creation.
//!
//! Vehicles are the one resource whose create path is checked before it
//! reaches the store. Fields are checked in a fixed order and only the
//! first missing one is reported.

/// A field that must be present and non-empty on vehicle create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    /// JSON key in the request body.
    pub field: &'static str,
    /// Message returned to the client when the field is missing.
    pub message: &'static str,
}

/// Required fields, in the order they are checked.
pub const REQUIRED_FIELDS: [RequiredField; 4] = [
    RequiredField {
        field: "name",
        message: "Name is required",
    },
    RequiredField {
        field: "model",
        message: "Model is required",
    },
    RequiredField {
        field: "manufacturer",
        message: "Manufacturer is required",
    },
    RequiredField {
        field: "vehicle_class",
        message: "Vehicle class is required",
    },
];

/// Return the first required field that is absent or empty.
///
/// Values are given in [`REQUIRED_FIELDS`] order.
pub fn first_missing(values: [Option<&str>; 4]) -> Option<RequiredField> {
    REQUIRED_FIELDS
        .into_iter()
        .zip(values)
        .find(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(required, _)| required)
}
