//! Random auto-fill of the cargo bay.

use crate::types::{Container, GameItem};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Returns the item set in a uniformly random order (Fisher-Yates).
#[instrument(skip(rng))]
pub fn shuffled_items<R: Rng + ?Sized>(rng: &mut R) -> Vec<GameItem> {
    let mut items = GameItem::ALL.to_vec();
    items.shuffle(rng);
    items
}

/// Loads every unplaced item into a random empty container.
///
/// Items are visited in shuffled order. For each one the current set of
/// empty containers is recomputed and one is picked uniformly, so each
/// item lands in a distinct slot. Items already stored somewhere are
/// skipped; when the bay runs out of empty slots the remaining items are
/// dropped.
#[instrument(skip(containers, rng), fields(len = containers.len()))]
pub fn random_fill<R: Rng + ?Sized>(containers: &[Container], rng: &mut R) -> Vec<Container> {
    let mut filled = containers.to_vec();

    for item in shuffled_items(rng) {
        if filled.iter().any(|c| c.item() == Some(item)) {
            debug!(%item, "Item already loaded, skipping");
            continue;
        }

        let empty: Vec<usize> = filled
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(idx, _)| idx)
            .collect();

        if empty.is_empty() {
            debug!(%item, "No empty container left, dropping item");
            continue;
        }

        let idx = empty[rng.gen_range(0..empty.len())];
        debug!(%item, container = filled[idx].id(), "Item placed");
        filled[idx] = filled[idx].filled(item);
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn empty_bay(n: u32) -> Vec<Container> {
        (1..=n).map(Container::new).collect()
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items = shuffled_items(&mut rng);
        items.sort();
        assert_eq!(items, GameItem::ALL.to_vec());
    }

    #[test]
    fn test_fill_places_every_item_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let filled = random_fill(&empty_bay(8), &mut rng);

        for item in GameItem::ALL {
            let count = filled.iter().filter(|c| c.item() == Some(item)).count();
            assert_eq!(count, 1, "{item} should appear exactly once");
        }
        assert_eq!(filled.iter().filter(|c| c.is_empty()).count(), 3);
    }

    #[test]
    fn test_fill_keeps_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let filled = random_fill(&empty_bay(6), &mut rng);
        let ids: Vec<u32> = filled.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_fill_drops_excess_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let filled = random_fill(&empty_bay(2), &mut rng);
        assert!(filled.iter().all(|c| !c.is_empty()));
        assert_ne!(filled[0].item(), filled[1].item());
    }

    #[test]
    fn test_fill_leaves_existing_items() {
        let mut bay = empty_bay(5);
        bay[2] = Container::with_item(3, GameItem::Fuel);

        let mut rng = StdRng::seed_from_u64(11);
        let filled = random_fill(&bay, &mut rng);

        assert_eq!(filled[2].item(), Some(GameItem::Fuel));
        assert!(filled.iter().all(|c| !c.is_empty()));
    }
}
