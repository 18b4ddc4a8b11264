//! Strongly typed identifier wrappers.
//!
//! Graph documents name their nodes with opaque strings (usually OSM ids
//! such as `"25175791"`), so identifiers wrap a `String` rather than an
//! integer index.  All IDs are `Clone + Ord + Hash` and implement
//! `Borrow<str>` so maps keyed by ID can be queried with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identity of a road-graph node, unique within one loaded graph.
    pub struct NodeId;
}

string_id! {
    /// Identity of a delivery inside a request.
    ///
    /// Never read from a document: assigned from the delivery's position,
    /// see [`DeliveryId::for_index`].
    pub struct DeliveryId;
}

impl DeliveryId {
    /// The id of the delivery at zero-based position `index`.
    pub fn for_index(index: usize) -> Self {
        Self(format!("delivery-{index}"))
    }
}
