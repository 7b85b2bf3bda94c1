//! Tests for the store's public operations across a whole session.

use cargo_bay_store::{
    Action, Container, GameItem, GameState, GameStore, MISSION_POINTS, Phase, StoreError,
};

fn in_mission1() -> GameStore {
    let mut store = GameStore::with_seed(21);
    store.dispatch(Action::StartGame).unwrap();
    store
}

#[test]
fn test_fuel_scenario() {
    let mut store = in_mission1();
    store.dispatch(Action::InitializeContainers { count: 5 }).unwrap();
    store
        .dispatch(Action::PlaceItem {
            container_id: 3,
            item: GameItem::Fuel,
        })
        .unwrap();
    assert_eq!(store.search_for_item(GameItem::Fuel), Some(3));

    store.dispatch(Action::RemoveItem { container_id: 3 }).unwrap();
    assert_eq!(store.search_for_item(GameItem::Fuel), None);
}

#[test]
fn test_initialize_produces_dense_ids() {
    for count in 5..=20 {
        let mut store = in_mission1();
        store.dispatch(Action::InitializeContainers { count }).unwrap();

        let ids: Vec<u32> = store.state().containers().iter().map(Container::id).collect();
        let expected: Vec<u32> = (1..=count as u32).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.state().container_count(), count as usize);
        assert!(store.state().containers().iter().all(Container::is_empty));
    }
}

#[test]
fn test_initialize_below_minimum_leaves_state() {
    for count in [-5, 0, 1, 4] {
        let mut store = in_mission1();
        let before = store.state().clone();
        let err = store
            .dispatch(Action::InitializeContainers { count })
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidContainerCount { requested, minimum: 5 } if requested == count
        ));
        assert_eq!(store.state(), &before);
    }
}

#[test]
fn test_place_remove_touches_one_container() {
    let mut store = in_mission1();
    store.dispatch(Action::InitializeContainers { count: 8 }).unwrap();
    store
        .dispatch(Action::PlaceItem {
            container_id: 2,
            item: GameItem::Water,
        })
        .unwrap();
    let before = store.state().clone();

    store
        .dispatch(Action::PlaceItem {
            container_id: 6,
            item: GameItem::MedicalSupplies,
        })
        .unwrap();
    store.dispatch(Action::RemoveItem { container_id: 6 }).unwrap();
    assert_eq!(store.state(), &before);
}

#[test]
fn test_search_reports_first_match_only_when_placed() {
    let mut store = in_mission1();
    store.dispatch(Action::InitializeContainers { count: 6 }).unwrap();
    for item in GameItem::ALL {
        assert_eq!(store.search_for_item(item), None);
    }

    store
        .dispatch(Action::PlaceItem {
            container_id: 5,
            item: GameItem::ToolsAndEquipment,
        })
        .unwrap();
    let trace = store.search_trace(GameItem::ToolsAndEquipment);
    assert_eq!(trace.found, Some(5));
    assert_eq!(trace.probed, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_missions_score_and_advance() {
    let mut store = in_mission1();
    store.dispatch(Action::InitializeContainers { count: 5 }).unwrap();
    store.dispatch(Action::RandomlyPlaceItems).unwrap();

    store.dispatch(Action::CompleteMission { mission: 1 }).unwrap();
    assert_eq!(store.state().phase(), Phase::Mission2);
    assert_eq!(store.state().score(), MISSION_POINTS);
    assert_eq!(store.state().current_mission(), 2);

    store.dispatch(Action::CompleteMission { mission: 2 }).unwrap();
    assert_eq!(store.state().phase(), Phase::Complete);
    assert_eq!(store.state().score(), 2 * MISSION_POINTS);
    assert_eq!(store.state().completed_missions(), &[1, 2]);
}

#[test]
fn test_reset_from_every_phase() {
    let script = [
        Action::StartGame,
        Action::InitializeContainers { count: 7 },
        Action::RandomlyPlaceItems,
        Action::CompleteMission { mission: 1 },
        Action::CompleteMission { mission: 2 },
    ];
    for prefix in 0..=script.len() {
        let mut store = GameStore::replay(&script[..prefix], 3).unwrap();
        store.dispatch(Action::Reset).unwrap();
        assert_eq!(store.state(), &GameState::new());
    }
}

#[test]
fn test_action_log_replays_to_same_state() {
    let mut store = GameStore::with_seed(77);
    store.dispatch(Action::StartGame).unwrap();
    store.dispatch(Action::InitializeContainers { count: 10 }).unwrap();
    store
        .dispatch(Action::PlaceItem {
            container_id: 10,
            item: GameItem::Fuel,
        })
        .unwrap();
    store.dispatch(Action::RandomlyPlaceItems).unwrap();

    let log = serde_json::to_string(store.applied()).unwrap();
    let actions: Vec<Action> = serde_json::from_str(&log).unwrap();
    let replayed = GameStore::replay(&actions, 77).unwrap();
    assert_eq!(replayed.state(), store.state());
}
