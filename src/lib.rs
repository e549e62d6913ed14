//! # routewatch
//!
//! SNMP routing-protocol health probes for Nagios-compatible monitoring.
//!
//! Three binaries query a router's SNMP agent and reduce routing-protocol
//! state to a one-line verdict and exit code:
//!
//! - `check-bgp -H <host> -C <community> -a <local AS>` - every iBGP session
//! - `check-ospf -H <host> -C <community> -p <peer>` - one OSPFv2 adjacency
//! - `check-ospfv3 -H <host> -C <community> -i <interface>` - all OSPFv3
//!   neighbours on an interface
//!
//! Exit codes follow the plugin convention: 0 OK, 1 WARNING, 2 CRITICAL,
//! 3 UNKNOWN. Any failure of the check itself (unreachable agent, missing
//! peer, malformed value) is UNKNOWN, never a health verdict.
//!
//! The library half is the pipeline the binaries share: walk one or two MIB
//! tables through a [`Session`], regroup rows into per-entity records
//! ([`table`]), decode addresses out of OID indexes ([`oid`]), and map
//! numeric state codes to a [`Report`] ([`probe`]).
//!
//! ```rust,no_run
//! use routewatch::{Snmp2cSession, probe};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), routewatch::Error> {
//!     let session = Snmp2cSession::connect(
//!         "192.0.2.1:161".parse().unwrap(),
//!         "public",
//!         Duration::from_secs(10),
//!     )
//!     .await?;
//!
//!     let report = probe::ospf::check(&session, "10.0.0.1").await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod oid;
pub mod probe;
pub mod snmp;
pub mod status;
pub mod table;

pub use error::{Error, Result};
pub use snmp::{Session, Snmp2cSession, WalkRow};
pub use status::{Report, Review, Status};
pub use table::{Column, Record, Table};
