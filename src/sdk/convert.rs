//! Projection helpers for SDK output shapes
//!
//! SDK accessors return `&str` for required members and `Option<&str>` for
//! optional ones (likewise for numbers and booleans). `SdkField` flattens both
//! into an owned `Option`, so record projections read the same either way.

use aws_smithy_types::DateTime as SdkDateTime;
use chrono::{DateTime, Utc};

/// Owned, optional view of an SDK accessor's return value
pub trait SdkField {
    /// Owned value type
    type Value;

    /// Convert into an owned optional value
    fn into_field(self) -> Option<Self::Value>;
}

impl SdkField for &str {
    type Value = String;

    fn into_field(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl SdkField for Option<&str> {
    type Value = String;

    fn into_field(self) -> Option<String> {
        self.map(str::to_string)
    }
}

macro_rules! copy_field {
    ($($ty:ty),*) => {
        $(
            impl SdkField for $ty {
                type Value = $ty;

                fn into_field(self) -> Option<$ty> {
                    Some(self)
                }
            }

            impl SdkField for Option<$ty> {
                type Value = $ty;

                fn into_field(self) -> Option<$ty> {
                    self
                }
            }
        )*
    };
}

copy_field!(f64, i64, i32, bool);

/// Convert an SDK timestamp to `chrono`
pub fn to_utc(timestamp: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

/// Convert an optional SDK timestamp to `chrono`
pub fn opt_utc(timestamp: Option<&SdkDateTime>) -> Option<DateTime<Utc>> {
    timestamp.and_then(to_utc)
}
