use pitboss_ai::{StrategyParams, create_strategy, registry};
use pitboss_engine::player::Player;
use pitboss_engine::shoe::Shoe;
use pitboss_engine::table::{NoopObserver, RoundReport, Table, TableRules};

fn session(ids: &[&str], decks: u32, seed: u64, rounds: u32) -> (Vec<RoundReport>, Vec<f64>) {
    let mut table = Table::new(
        Box::new(Shoe::new(decks, true, seed)),
        TableRules::default(),
    )
    .unwrap();
    for (i, id) in ids.iter().enumerate() {
        let params = StrategyParams {
            decks,
            seed: seed + i as u64,
        };
        let strategy = create_strategy(id, params).unwrap();
        table.seat(Player::new(format!("{id}-{i}"), 200.0, strategy));
    }
    let mut reports = Vec::new();
    for _ in 0..rounds {
        if !table.has_solvent_player() {
            break;
        }
        reports.push(table.play_round(&mut NoopObserver).expect("round completes"));
    }
    let balances = table.players().iter().map(|p| p.balance()).collect();
    (reports, balances)
}

#[test]
fn every_registered_strategy_survives_a_long_session() {
    for decks in [1, 2, 6] {
        let ids: Vec<&str> = registry().iter().map(|e| e.id).collect();
        let (reports, balances) = session(&ids, decks, 2024, 60);
        assert!(!reports.is_empty());
        for b in balances {
            assert!(b >= 0.0);
            assert_eq!((b * 2.0).fract(), 0.0, "balances stay on half coins");
        }
    }
}

#[test]
fn balances_match_buy_ins_and_payouts() {
    let (reports, balances) = session(&["basic"], 6, 77, 25);
    let mut expected = 200.0;
    for report in &reports {
        // every hand, split or not, staked one buy-in; a double staked another
        let staked: f64 = report
            .results
            .iter()
            .map(|r| (if r.hand.doubled { 2.0 } else { 1.0 }) * report.buy_in)
            .sum();
        let won: f64 = report.results.iter().map(|r| r.payout).sum();
        expected += won - staked;
        assert_eq!(report.balances[0].balance, expected);
    }
    assert_eq!(balances, vec![expected]);
}

#[test]
fn seeded_sessions_replay_identically() {
    let a = session(&["hilo", "basic"], 6, 9, 30);
    let b = session(&["hilo", "basic"], 6, 9, 30);
    assert_eq!(a, b);
}
