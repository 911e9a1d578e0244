use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::player::Coins;
use crate::table::{HandResult, PlayerBalance, RoundReport};

/// One line of the round log.
/// Serialized to JSONL so a session can be inspected or replayed offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed the shoe was shuffled with, if the session was seeded
    pub seed: Option<u64>,
    /// Round number within the session, starting at 1
    pub round: u32,
    /// Buy-in charged this round
    pub buy_in: Coins,
    /// Dealer's final cards
    pub dealer: Vec<Card>,
    pub dealer_score: u32,
    /// Settlement of every active hand
    pub results: Vec<HandResult>,
    #[serde(default)]
    pub sat_out: Vec<String>,
    /// Balances after settlement
    pub balances: Vec<PlayerBalance>,
    /// Timestamp when the round was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_report(round_id: String, seed: Option<u64>, report: &RoundReport) -> Self {
        Self {
            round_id,
            seed,
            round: report.round,
            buy_in: report.buy_in,
            dealer: report.dealer.cards.clone(),
            dealer_score: report.dealer.score(),
            results: report.results.clone(),
            sat_out: report.sat_out.clone(),
            balances: report.balances.clone(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only hands out ids; nothing is written.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Assigns the next id to `report` and writes it.
    pub fn log_report(&mut self, seed: Option<u64>, report: &RoundReport) -> std::io::Result<String> {
        let id = self.next_id();
        self.write(&RoundRecord::from_report(id.clone(), seed, report))?;
        Ok(id)
    }
}
