//! Opaque field element containers.
//!
//! The decoder never interprets element bytes: widths come from the
//! configuration and values are copied verbatim. Numeric interpretation is
//! left to downstream consumers such as [`crate::circuit`].

use core::fmt;
use serde::{Deserialize, Serialize};

/// Fixed-width opaque element that can be cut out of a transcript.
pub trait Element: Sized {
    /// Copies the element out of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Self;

    /// Returns the raw element bytes.
    fn as_bytes(&self) -> &[u8];

    /// Returns the element width in bytes.
    fn width(&self) -> usize {
        self.as_bytes().len()
    }
}

macro_rules! opaque_element {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(with = "crate::utils::serialization::hex_bytes")] Vec<u8>);

        impl $name {
            /// Wraps raw element bytes.
            pub fn new(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Consumes the element and returns its bytes.
            pub fn into_bytes(self) -> Vec<u8> {
                self.0
            }
        }

        impl Element for $name {
            fn from_bytes(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }

            fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{})", stringify!($name), hex::encode(&self.0))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }
        }
    };
}

opaque_element!(
    /// Base-field element, `field_size` bytes.
    FieldElement
);

opaque_element!(
    /// Extension-field element, `ext_field_size` bytes.
    ExtFieldElement
);
