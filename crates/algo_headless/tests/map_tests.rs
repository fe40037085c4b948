//! Board model tests: queries and placement bookkeeping.

use algo_core::prelude::*;
use algo_headless::map::GameMap;
use algo_test_utils::fixtures::{fixed, fixed_f, standard_catalog};

fn map_with(context: TurnContext) -> GameMap {
    GameMap::new(standard_catalog(), context)
}

fn rich(turn: u32) -> TurnContext {
    TurnContext::new(turn, Resources::new(fixed(40), fixed(10)))
}

#[test]
fn test_attackers_within_range() {
    // Turret range 2.5: distance squared up to 6.25.
    let context = rich(1)
        .with_unit(UnitKind::Turret, Coordinate::new(10, 16), Player::Them)
        .with_unit(UnitKind::Turret, Coordinate::new(12, 16), Player::Them)
        .with_unit(UnitKind::Wall, Coordinate::new(10, 15), Player::Them)
        .with_unit(UnitKind::Turret, Coordinate::new(10, 13), Player::Us);
    let map = map_with(context);

    // (10, 14): 4 from the first turret, 8 from the second, walls never count.
    assert_eq!(map.attackers_of(Coordinate::new(10, 14), Player::Us), 1);
    assert_eq!(map.attackers_of(Coordinate::new(11, 15), Player::Us), 2);
    assert_eq!(map.attackers_of(Coordinate::new(10, 11), Player::Us), 0);
    // Our own turret covers (10, 12) against their units.
    assert_eq!(map.attackers_of(Coordinate::new(10, 12), Player::Them), 1);
}

#[test]
fn test_upgraded_turret_reaches_further() {
    let mut context = rich(1).with_unit(UnitKind::Turret, Coordinate::new(10, 17), Player::Them);
    let target = Coordinate::new(10, 14);
    assert_eq!(map_with(context.clone()).attackers_of(target, Player::Us), 0);

    context.stationary[0].upgraded = true;
    assert_eq!(map_with(context).attackers_of(target, Player::Us), 1);
}

#[test]
fn test_affordable_count() {
    let map = map_with(TurnContext::new(0, Resources::new(fixed(7), fixed_f(5.5))));
    assert_eq!(map.affordable_count(UnitKind::Turret), 3);
    assert_eq!(map.affordable_count(UnitKind::Scout), 5);
    assert_eq!(map.affordable_count(UnitKind::Demolisher), 1);
}

#[test]
fn test_path_follows_open_board() {
    let map = map_with(rich(0));
    let path = map.path_to_edge(Coordinate::new(3, 10));
    assert_eq!(path.first(), Some(&Coordinate::new(3, 10)));
    let end = *path.last().unwrap();
    assert_eq!(end.x + end.y, 41, "ended at {end}");
}

#[test]
fn test_structures_spend_and_block() {
    let mut map = map_with(TurnContext::new(0, Resources::new(fixed(5), fixed(0))));
    map.submit_placements(&[
        PlacementRequest::spawn(UnitKind::Turret, coords(&[(3, 12), (3, 12), (24, 12)])),
        PlacementRequest::spawn(UnitKind::Wall, coords(&[(3, 14), (0, 0), (4, 13), (5, 13)])),
    ]);

    let build = &map.submission().build;
    assert_eq!(
        build,
        &vec![
            ("DF".to_string(), 3, 12),
            ("DF".to_string(), 24, 12),
            ("FF".to_string(), 4, 13),
        ]
    );
    assert_eq!(map.context().resources.structure, fixed(0));
    assert!(map.context().is_blocked(Coordinate::new(24, 12)));
}

#[test]
fn test_upgrades_need_our_structure() {
    let context = TurnContext::new(0, Resources::new(fixed(10), fixed(0)))
        .with_unit(UnitKind::Turret, Coordinate::new(3, 12), Player::Us)
        .with_unit(UnitKind::Wall, Coordinate::new(4, 13), Player::Us);
    let mut map = map_with(context);
    map.submit_placements(&[
        PlacementRequest::upgrade(UnitKind::Turret, coords(&[(3, 12), (3, 12), (9, 9)])),
        PlacementRequest::upgrade(UnitKind::Wall, coords(&[(4, 13)])),
    ]);

    // One upgrade for the turret; walls have no upgrade in the standard table.
    assert_eq!(map.submission().build, vec![("UP".to_string(), 3, 12)]);
    assert_eq!(map.context().resources.structure, fixed(6));
}

#[test]
fn test_mobile_quantity_is_clamped() {
    let mut map = map_with(TurnContext::new(0, Resources::new(fixed(0), fixed(4))));
    map.submit_placements(&[
        PlacementRequest::spawn_many(UnitKind::Scout, Coordinate::new(13, 0), 3),
        PlacementRequest::spawn_many(UnitKind::Scout, Coordinate::new(14, 0), AS_MANY_AS_AFFORDABLE),
        PlacementRequest::spawn_many(UnitKind::Scout, Coordinate::new(5, 8), 2),
    ]);

    let deploy = &map.submission().deploy;
    assert_eq!(deploy.len(), 4);
    assert_eq!(deploy.iter().filter(|o| o.1 == 13).count(), 3);
    assert_eq!(deploy.iter().filter(|o| o.1 == 14).count(), 1);
    assert_eq!(map.affordable_count(UnitKind::Scout), 0);
}

#[test]
fn test_mobile_units_only_on_friendly_edges() {
    let mut map = map_with(rich(0).with_unit(UnitKind::Wall, Coordinate::new(13, 0), Player::Us));
    map.submit_placements(&[
        PlacementRequest::spawn(UnitKind::Interceptor, coords(&[(13, 0), (13, 5), (13, 27), (7, 6)])),
    ]);
    assert_eq!(map.submission().deploy, vec![("SI".to_string(), 7, 6)]);
}

#[test]
fn test_full_turn_through_orchestrator() {
    let mut map = map_with(rich(0));
    let mut orchestrator = TurnOrchestrator::new(AlgoConfig::default(), &standard_catalog(), 5);
    orchestrator.on_turn(&mut map);

    let submission = map.take_submission();
    assert_eq!(submission.build.first(), Some(&("DF".to_string(), 3, 12)));
    // 10 MP: nine scouts, then one interceptor fits.
    let scouts = submission.deploy.iter().filter(|o| o.0 == "PI").count();
    let interceptors = submission.deploy.iter().filter(|o| o.0 == "SI").count();
    assert_eq!(scouts, 9);
    assert_eq!(interceptors, 1);
    assert!(map.submission().build.is_empty());
}
