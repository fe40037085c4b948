//! Property tests for lane selection, the breach ledger and reactive defense.

use algo_core::prelude::*;
use algo_test_utils::fixtures::{fixed, ScriptedField};
use algo_test_utils::strategies::{breach_history, lanes_and_field};
use proptest::prelude::*;

fn estimator() -> PathRiskEstimator {
    PathRiskEstimator::new(fixed(5))
}

proptest! {
    #[test]
    fn prop_minimize_picks_lowest_risk_first_index((field, lanes) in lanes_and_field()) {
        let estimator = estimator();
        let chosen = estimator.select_lane(&field, &lanes, RiskMode::Minimize);
        prop_assert!(chosen.is_some());

        let risks: Vec<Fixed> = lanes
            .iter()
            .map(|&lane| estimator.estimate_risk(&field, lane, RiskMode::Minimize))
            .collect();
        let lowest = risks.iter().copied().min().unwrap_or(Fixed::ZERO);
        let first_lowest = risks.iter().position(|&r| r == lowest).unwrap();

        prop_assert_eq!(chosen, Some(lanes[first_lowest]));
    }

    #[test]
    fn prop_maximize_picks_highest_risk_first_index((field, lanes) in lanes_and_field()) {
        let estimator = estimator();
        let chosen = estimator.select_lane(&field, &lanes, RiskMode::Maximize);

        let risks: Vec<Fixed> = lanes
            .iter()
            .map(|&lane| estimator.estimate_risk(&field, lane, RiskMode::Maximize))
            .collect();
        let highest = risks.iter().copied().max().unwrap_or(Fixed::ZERO);
        let first_highest = risks.iter().position(|&r| r == highest).unwrap();

        prop_assert_eq!(chosen, Some(lanes[first_highest]));
    }

    #[test]
    fn prop_clean_paths_have_zero_risk((mut field, lanes) in lanes_and_field()) {
        field.attackers.clear();
        for lane in lanes {
            prop_assert_eq!(estimator().estimate_risk(&field, lane, RiskMode::Minimize), Fixed::ZERO);
            prop_assert_eq!(estimator().estimate_risk(&field, lane, RiskMode::Maximize), Fixed::ZERO);
        }
    }

    #[test]
    fn prop_ledger_only_grows(history in breach_history()) {
        let mut ledger = BreachLedger::new();
        let mut previous = 0;
        for (turn, breach) in (0u32..).zip(&history) {
            ledger.record_breach(*breach, turn);
            let len = ledger.all_breaches().len();
            prop_assert!(len > previous);
            previous = len;
        }
        prop_assert_eq!(ledger.all_breaches(), history);
    }

    #[test]
    fn prop_reactive_one_request_per_breach(history in breach_history()) {
        let mut ledger = BreachLedger::new();
        for breach in &history {
            ledger.record_breach(*breach, 0);
        }

        let requests = DefensePlanner::default().reactive_layout(&ledger);
        prop_assert_eq!(requests.len(), history.len());
        for (request, breach) in requests.iter().zip(&history) {
            prop_assert_eq!(request.kind, UnitKind::Turret);
            prop_assert!(request.is_spawn());
            prop_assert_eq!(&request.locations, &vec![Coordinate::new(breach.x, breach.y + 1)]);
        }
    }

    #[test]
    fn prop_planning_never_panics(turn in 0u32..40, scouts in 0u32..50, breaches in breach_history()) {
        let mut orchestrator = TurnOrchestrator::new(
            AlgoConfig::default(),
            &algo_test_utils::fixtures::standard_catalog(),
            u64::from(turn),
        );
        for breach in breaches {
            orchestrator.record_breach(breach);
        }
        let mut field = ScriptedField::new(turn).with_affordable(UnitKind::Scout, scouts);
        let plan = orchestrator.on_turn(&mut field);
        prop_assert!(!plan.is_empty());
        prop_assert_eq!(field.submissions.len(), 1);
    }
}
