//! End-to-end turn scenarios against a scripted battlefield.

use algo_core::config::DEFAULT_LANES;
use algo_core::prelude::*;
use algo_test_utils::fixtures::{
    standard_catalog, with_hostile_block, with_hostile_row, ScriptedField,
};

fn orchestrator() -> TurnOrchestrator {
    TurnOrchestrator::new(AlgoConfig::default(), &standard_catalog(), 1)
}

fn static_len() -> usize {
    DefenseLayout::default().requests().len()
}

/// Every default lane covered by one attacker except `safe`.
fn field_with_safe_lane(turn: u32, safe: Coordinate) -> ScriptedField {
    coords(DEFAULT_LANES)
        .into_iter()
        .filter(|&lane| lane != safe)
        .fold(ScriptedField::new(turn), |field, lane| {
            field.with_attackers(lane, 1)
        })
}

#[test]
fn test_early_game_turn() {
    let safe = Coordinate::new(22, 8);
    let mut field = field_with_safe_lane(2, safe)
        .with_affordable(UnitKind::Scout, 8)
        .with_affordable(UnitKind::Interceptor, 8);

    let plan = orchestrator().on_turn(&mut field);

    assert_eq!(plan[..static_len()], DefenseLayout::default().requests()[..]);
    let offense = &plan[static_len()..];
    assert_eq!(
        offense,
        &[
            PlacementRequest::spawn_many(UnitKind::Scout, safe, 7),
            PlacementRequest::spawn(UnitKind::Interceptor, vec![Coordinate::new(7, 6)]),
            PlacementRequest::spawn(UnitKind::Interceptor, vec![Coordinate::new(20, 6)]),
        ]
    );
    assert_eq!(field.last_submission(), Some(plan.as_slice()));
}

#[test]
fn test_bombard_with_crowded_front() {
    let safe = Coordinate::new(13, 0);
    let context = with_hostile_row(TurnContext::new(5, Resources::default()), 14, 12);
    let mut field = field_with_safe_lane(5, safe)
        .with_context(context)
        .with_affordable(UnitKind::Scout, 6);

    let mut orchestrator = orchestrator();
    assert!(orchestrator
        .offense()
        .states(field.context())
        .contains(&OffenseState::Bombard));

    let plan = orchestrator.on_turn(&mut field);
    let demolishers: Vec<_> = plan
        .iter()
        .filter(|r| r.kind == UnitKind::Demolisher)
        .collect();
    assert_eq!(demolishers.len(), 1);
    assert_eq!(demolishers[0].locations, vec![safe]);
    assert_eq!(demolishers[0].quantity, 5);

    let formation = &plan[static_len()];
    assert_eq!(formation.kind, UnitKind::Wall);
    assert_eq!(formation.locations.first(), Some(&Coordinate::new(27, 11)));
    assert_eq!(formation.locations.last(), Some(&Coordinate::new(6, 11)));
}

#[test]
fn test_quiet_front_only_static_and_support() {
    let context = with_hostile_row(TurnContext::new(5, Resources::default()), 14, 3);
    let mut field = ScriptedField::new(5)
        .with_context(context)
        .with_affordable(UnitKind::Scout, 6);

    let plan = orchestrator().on_turn(&mut field);

    assert_eq!(plan.len(), static_len() + 1);
    let support = &plan[static_len()];
    assert_eq!(support.kind, UnitKind::Support);
    assert_eq!(
        support.locations,
        coords(&[(8, 9), (20, 9), (10, 7), (17, 7)])
    );
}

#[test]
fn test_swarm_only_on_odd_turns() {
    let rear = Zone::new(Span::new(17, 22), Span::new(16, 19));
    for (turn, expect_swarm) in [(7, true), (8, false)] {
        let context = with_hostile_block(TurnContext::new(turn, Resources::default()), rear, 11);
        let mut field = ScriptedField::new(turn).with_context(context);

        let plan = orchestrator().on_turn(&mut field);
        let swarm = plan
            .iter()
            .any(|r| r.kind == UnitKind::Scout && r.quantity == AS_MANY_AS_AFFORDABLE);
        assert_eq!(swarm, expect_swarm, "turn {turn}");
    }
}

#[test]
fn test_duplicate_breaches_replayed() {
    let mut orchestrator = orchestrator();
    for (x, y) in [(5, 0), (22, 0), (5, 0)] {
        orchestrator.record_breach(Coordinate::new(x, y));
    }

    let plan = orchestrator.plan_turn(&ScriptedField::new(6));
    let reactive = &plan[static_len()..static_len() + 3];
    let at_5_1 = PlacementRequest::spawn(UnitKind::Turret, vec![Coordinate::new(5, 1)]);
    assert_eq!(reactive[0], at_5_1);
    assert_eq!(
        reactive[1],
        PlacementRequest::spawn(UnitKind::Turret, vec![Coordinate::new(22, 1)])
    );
    assert_eq!(reactive[2], at_5_1);
}

#[test]
fn test_breaches_from_frames_feed_next_turn() {
    let mut orchestrator = orchestrator();
    orchestrator.plan_turn(&ScriptedField::new(3));
    orchestrator.on_action_frame(
        r#"{"turnInfo": [1, 3, 40], "events": {"breach": [[[24, 10], 2, 3, "81", 2]]}}"#,
    );

    let plan = orchestrator.plan_turn(&ScriptedField::new(4));
    assert_eq!(
        plan[static_len()],
        PlacementRequest::spawn(UnitKind::Turret, vec![Coordinate::new(24, 11)])
    );
}

#[test]
fn test_breach_far_off_board_still_plans() {
    let mut orchestrator = orchestrator();
    orchestrator.on_action_frame(
        r#"{"turnInfo": [1, 3, 4], "events": {"breach": [[[5, 2147483647], 1, 3, "1", 2]]}}"#,
    );
    orchestrator.on_action_frame(
        r#"{"turnInfo": null, "events": {"breach": [[[5, 0], 1, 3, "1", 2]]}}"#,
    );
    assert_eq!(orchestrator.ledger().len(), 2);

    let mut field = ScriptedField::new(4);
    let plan = orchestrator.on_turn(&mut field);
    assert_eq!(field.submissions.len(), 1);
    assert_eq!(
        plan[static_len()..static_len() + 2],
        [
            PlacementRequest::spawn(UnitKind::Turret, vec![Coordinate::new(5, i32::MAX)]),
            PlacementRequest::spawn(UnitKind::Turret, vec![Coordinate::new(5, 1)]),
        ]
    );
}

#[test]
fn test_config_from_file_changes_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("algo.ron");
    std::fs::write(
        &path,
        "(offense: (early_game_turns: 1, lanes: [(14, 0)]), defense: (compact_reactive: true))",
    )
    .unwrap();

    let config = AlgoConfig::load(&path).unwrap();
    let mut orchestrator = TurnOrchestrator::new(config, &standard_catalog(), 0);
    orchestrator.record_breach(Coordinate::new(5, 0));
    orchestrator.record_breach(Coordinate::new(5, 0));

    let plan = orchestrator.plan_turn(&ScriptedField::new(2));
    let turrets_at_breach = plan
        .iter()
        .filter(|r| r.locations == vec![Coordinate::new(5, 1)])
        .count();
    assert_eq!(turrets_at_breach, 1);
    assert_eq!(plan.last().map(|r| r.kind), Some(UnitKind::Support));
}
