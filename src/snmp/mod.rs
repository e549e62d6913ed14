//! The SNMP collaborator seam.
//!
//! Probes do not speak SNMP themselves. They depend on a [`Session`] that can
//! walk a MIB subtree and hand back rows of `(OID suffix, value string)` in
//! agent order. The production implementation is [`Snmp2cSession`] over
//! `csnmp`; tests substitute a canned mock.

mod v2c;

pub use v2c::Snmp2cSession;

use std::future::Future;

use crate::error::Result;

/// One varbind from a table walk: the OID suffix below the walked base plus
/// the agent's value rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRow {
    /// OID with `<base>.` stripped, e.g. `1.4.10.0.0.1` or `3`.
    pub suffix: String,
    /// Value rendered as a string: integers in decimal, octet strings as
    /// lossy UTF-8, addresses in dotted form.
    pub value: String,
}

impl WalkRow {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(suffix: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            value: value.into(),
        }
    }
}

/// A connection to an SNMP agent capable of walking subtrees.
pub trait Session {
    /// Walk the subtree under `base` (dotted notation), returning rows in
    /// agent (OID lexicographic) order.
    ///
    /// Transport and agent failures surface as [`crate::Error::Snmp`].
    fn walk(&self, base: &str) -> impl Future<Output = Result<Vec<WalkRow>>> + Send;
}
