//! Per-protocol probe logic.
//!
//! Each probe performs one or two table walks through a [`crate::Session`],
//! classifies the per-entity state codes, and returns a [`crate::Report`].
//! Failures of the probe itself (transport errors, missing entities,
//! malformed values) are returned as errors and rendered as UNKNOWN by the
//! binaries.

pub mod bgp;
pub mod ospf;
pub mod ospfv3;
