//! Domain identifier types.
//!
//! Row ids are SQLite integers; the newtypes keep a booking id from being
//! passed where a property id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw row id.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The raw row id.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

row_id!(
    /// Property identifier.
    PropertyId
);

row_id!(
    /// Rental booking identifier.
    BookingId
);

row_id!(
    /// Sale/viewing inquiry identifier.
    InquiryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_id_roundtrips_raw_value() {
        let id = PropertyId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(PropertyId::from(42), id);
    }

    #[test]
    fn ids_display_as_plain_integers() {
        assert_eq!(BookingId::new(7).to_string(), "7");
        assert_eq!(format!("{}", InquiryId::new(9)), "9");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&PropertyId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
