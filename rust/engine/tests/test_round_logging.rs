use std::fs;

use pitboss_engine::logger::{RoundLogger, RoundRecord};
use pitboss_engine::player::Player;
use pitboss_engine::shoe::Shoe;
use pitboss_engine::strategy::{FixedStrategy, Move};
use pitboss_engine::table::{NoopObserver, RoundReport, Table, TableRules};

fn one_report(seed: u64) -> RoundReport {
    let mut table = Table::new(Box::new(Shoe::new(6, true, seed)), TableRules::default()).unwrap();
    table.seat(Player::new("ann", 200.0, Box::new(FixedStrategy::new(Move::Stand))));
    table.play_round(&mut NoopObserver).unwrap()
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.log_report(Some(1), &one_report(1)).expect("write");
    logger.log_report(Some(1), &one_report(2)).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let content = String::from_utf8(bytes).unwrap();
    assert_eq!(content.lines().count(), 2);
    for line in content.lines() {
        let rec: RoundRecord = serde_json::from_str(line).expect("valid record");
        assert_eq!(rec.seed, Some(1));
        assert_eq!(rec.results.len(), 1);
        assert!(rec.ts.is_some());
    }
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.log_report(None, &one_report(3)).unwrap();
    assert!(path.exists());
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let rec = RoundRecord::from_report("20250102-000010".to_string(), Some(7), &one_report(7));
    logger.write(&rec).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn hole_card_is_face_up_in_the_record() {
    let rec = RoundRecord::from_report("x".to_string(), None, &one_report(9));
    assert!(rec.dealer.len() >= 2);
    assert!(rec.dealer.iter().all(|c| !c.face_down));
    assert_eq!(rec.dealer_score, pitboss_engine::hand::score_cards(&rec.dealer));
}
