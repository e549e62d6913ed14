//! OSPFv3 interface probe (IF-MIB + OSPFV3-MIB, RFC 5643).
//!
//! Two walks: `ifDescr` to translate the interface name into an ifIndex,
//! then `ospfv3NbrState` restricted to that interface. Every neighbour on
//! the interface is reviewed; the worst state wins.

use crate::error::{Error, Result};
use crate::probe::ospf;
use crate::snmp::Session;
use crate::status::{Report, Review, Status};

/// `IF-MIB::ifDescr` column base.
pub const IF_DESCR: &str = "1.3.6.1.2.1.2.2.1.2";

/// `OSPFV3-MIB::ospfv3NbrState` column base. The first index component is
/// `ospfv3NbrIfIndex`, so appending an ifIndex restricts the walk to one
/// interface.
pub const NBR_STATE: &str = "1.3.6.1.2.1.191.1.9.1.8";

/// Check all OSPFv3 neighbours on `interface` (an ifDescr name).
pub async fn check<S: Session>(session: &S, interface: &str) -> Result<Report> {
    let if_index = find_if_index(session, interface).await?;

    let rows = session.walk(&format!("{NBR_STATE}.{if_index}")).await?;
    if rows.is_empty() {
        return Ok(Report::critical(format!(
            "no OSPFv3 neighbours found on interface {interface}"
        )));
    }

    let mut review = Review::new();
    for (ordinal, row) in rows.iter().enumerate() {
        let state = ospf::parse_state("ospfv3NbrState", &row.value)?;
        let label = neighbour_label(&row.suffix, ordinal + 1);
        match state.verdict() {
            Status::Ok => {}
            Status::Warning => review.escalate(
                Status::Warning,
                format!(
                    "neighbour {label} on interface {interface} still {}",
                    state.name()
                ),
            ),
            _ => review.escalate(
                Status::Critical,
                format!("neighbour {label} on interface {interface} down"),
            ),
        }
    }

    let count = rows.len();
    Ok(review.finish(format!(
        "All ({count}) neighbours on interface {interface} are up"
    )))
}

/// Resolve an ifDescr name to its ifIndex (the OID suffix of the matching
/// `ifDescr` row).
async fn find_if_index<S: Session>(session: &S, interface: &str) -> Result<String> {
    let rows = session.walk(IF_DESCR).await?;
    rows.into_iter()
        .find(|row| row.value == interface)
        .map(|row| row.suffix)
        .ok_or_else(|| Error::NotFound(format!("interface {interface}")))
}

/// Label a neighbour by its router ID when the remaining index is the usual
/// `ospfv3NbrIfInstId.ospfv3NbrRtrId` pair, falling back to its ordinal.
fn neighbour_label(suffix: &str, ordinal: usize) -> String {
    match suffix.split('.').collect::<Vec<_>>().as_slice() {
        [_inst_id, rtr_id] => format!("rtrid {rtr_id}"),
        _ => ordinal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_by_router_id_when_index_matches() {
        assert_eq!(neighbour_label("0.167772161", 1), "rtrid 167772161");
    }

    #[test]
    fn labels_by_ordinal_otherwise() {
        assert_eq!(neighbour_label("0.1.2.3", 4), "4");
    }
}
