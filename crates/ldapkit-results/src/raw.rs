//! Raw wire shape of a directory search result.
//!
//! LDAP client libraries hand back search results in a self-describing,
//! count-prefixed representation: every level declares how many elements it
//! holds, attribute names appear as string slots, and the values for an
//! attribute sit in their own count-prefixed block whose last slot is a
//! redundant dn sentinel. Instead of probing that convention by index, this
//! module models it as an explicit recursive type the normalizer can
//! pattern-match.

use serde::{Deserialize, Serialize};

/// The count-prefixed value block for one attribute, kept exactly as the
/// client produced it.
///
/// On multi-valued attributes the client appends a trailing sentinel slot
/// that is not a real value; it is carried here untouched and only stripped
/// during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValues {
    slots: Vec<String>,
}

impl RawValues {
    /// Wrap a value block as the client produced it, sentinel included.
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    /// A single-slot block, the shape a single-valued attribute arrives in.
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            slots: vec![value.into()],
        }
    }

    /// Declared slot count of this block.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// The slot at `index`, if present.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// All slots in wire order, sentinel included.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }
}

/// One element of a raw entry, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawElement {
    /// A slot the client left empty.
    Null,
    /// An attribute name together with its value block.
    Attribute { name: String, values: RawValues },
    /// A nested sub-entry, e.g. one per-entry block inside a full
    /// fetch-all-entries response.
    Entry(RawEntry),
}

/// One level of the raw result tree.
///
/// `elements` preserves wire order; the wire's per-level element count is the
/// vector length. The distinguished name travels beside the elements, the way
/// the client reports it, and is not itself an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    dn: Option<String>,
    elements: Vec<RawElement>,
}

impl RawEntry {
    /// An empty raw entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distinguished name of this entry.
    pub fn with_dn(mut self, dn: impl Into<String>) -> Self {
        self.dn = Some(dn.into());
        self
    }

    /// Append an attribute element.
    pub fn with_attribute(mut self, name: impl Into<String>, values: RawValues) -> Self {
        self.elements.push(RawElement::Attribute {
            name: name.into(),
            values,
        });
        self
    }

    /// Append a nested sub-entry element.
    pub fn with_child(mut self, child: RawEntry) -> Self {
        self.elements.push(RawElement::Entry(child));
        self
    }

    /// Append an empty slot.
    pub fn with_null(mut self) -> Self {
        self.elements.push(RawElement::Null);
        self
    }

    /// Distinguished name of this entry, if the client reported one.
    pub fn dn(&self) -> Option<&str> {
        self.dn.as_deref()
    }

    /// Elements of this level in wire order.
    pub fn elements(&self) -> &[RawElement] {
        &self.elements
    }

    /// Number of elements at this level.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether this level carries no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
