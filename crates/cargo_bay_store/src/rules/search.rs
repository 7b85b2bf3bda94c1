//! Linear search over the cargo bay.

use crate::types::{Container, GameItem};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Finds the first container holding `item`, scanning in id order.
///
/// Returns the container id, or `None` when the item is not loaded.
/// The scan is deliberately sequential: it is the operation the game teaches.
#[instrument(skip(containers), fields(len = containers.len()))]
pub fn linear_search(containers: &[Container], item: GameItem) -> Option<u32> {
    for container in containers {
        if container.item() == Some(item) {
            return Some(container.id());
        }
    }
    None
}

/// Record of every slot a linear search looked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrace {
    /// Item that was searched for.
    pub item: GameItem,
    /// Container ids in the order they were probed.
    pub probed: Vec<u32>,
    /// Id of the matching container, if any.
    pub found: Option<u32>,
}

impl SearchTrace {
    /// Number of comparisons the scan performed.
    pub fn comparisons(&self) -> usize {
        self.probed.len()
    }
}

/// Same scan as [`linear_search`], also recording each probe.
#[instrument(skip(containers), fields(len = containers.len()))]
pub fn linear_search_trace(containers: &[Container], item: GameItem) -> SearchTrace {
    let mut probed = Vec::new();
    for container in containers {
        probed.push(container.id());
        if container.item() == Some(item) {
            return SearchTrace {
                item,
                probed,
                found: Some(container.id()),
            };
        }
    }
    SearchTrace {
        item,
        probed,
        found: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bay() -> Vec<Container> {
        vec![
            Container::new(1),
            Container::with_item(2, GameItem::Water),
            Container::new(3),
            Container::with_item(4, GameItem::Fuel),
        ]
    }

    #[test]
    fn test_finds_item() {
        assert_eq!(linear_search(&bay(), GameItem::Fuel), Some(4));
        assert_eq!(linear_search(&bay(), GameItem::Water), Some(2));
    }

    #[test]
    fn test_missing_item() {
        assert_eq!(linear_search(&bay(), GameItem::MedicalSupplies), None);
        assert_eq!(linear_search(&[], GameItem::Fuel), None);
    }

    #[test]
    fn test_first_match_wins() {
        let containers = vec![
            Container::with_item(1, GameItem::Fuel),
            Container::with_item(2, GameItem::Fuel),
        ];
        assert_eq!(linear_search(&containers, GameItem::Fuel), Some(1));
    }

    #[test]
    fn test_trace_stops_at_match() {
        let trace = linear_search_trace(&bay(), GameItem::Water);
        assert_eq!(trace.probed, vec![1, 2]);
        assert_eq!(trace.found, Some(2));
        assert_eq!(trace.comparisons(), 2);
    }

    #[test]
    fn test_trace_exhausts_on_miss() {
        let trace = linear_search_trace(&bay(), GameItem::ToolsAndEquipment);
        assert_eq!(trace.probed, vec![1, 2, 3, 4]);
        assert_eq!(trace.found, None);
    }
}
