//! Text rendering of the cargo bay as an array literal.
//!
//! Shared by the terminal screens and the headless demo.

use cargo_bay_store::{Container, SearchTrace};

/// Label shown for an empty slot.
pub const EMPTY_SLOT: &str = "empty";

/// Renders the bay as `[ Index 0: Fuel, Index 1: empty ]`.
///
/// Indices are zero-based positions, not container ids.
pub fn array_literal(containers: &[Container]) -> String {
    if containers.is_empty() {
        return "[ ]".to_string();
    }
    let slots = containers
        .iter()
        .enumerate()
        .map(|(index, c)| match c.item() {
            Some(item) => format!("Index {}: {}", index, item),
            None => format!("Index {}: {}", index, EMPTY_SLOT),
        })
        .collect::<Vec<_>>();
    format!("[ {} ]", slots.join(", "))
}

/// Renders the length line shown under the literal.
pub fn length_line(containers: &[Container]) -> String {
    format!("Length: {}", containers.len())
}

/// Literal and length line, one per line.
pub fn array_block(containers: &[Container]) -> String {
    format!("{}\n{}", array_literal(containers), length_line(containers))
}

/// Describes a search trace, e.g.
/// `search_item(Fuel): probed 1, 2, 3 -> found in container 3 (3 comparisons)`.
pub fn trace_line(trace: &SearchTrace) -> String {
    let probed = trace
        .probed
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let result = match trace.found {
        Some(id) => format!("found in container {}", id),
        None => "not found".to_string(),
    };
    format!(
        "search_item({}): probed {} -> {} ({} comparisons)",
        trace.item,
        if probed.is_empty() { "nothing" } else { probed.as_str() },
        result,
        trace.comparisons()
    )
}
