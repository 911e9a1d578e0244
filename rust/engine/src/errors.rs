use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Hand cannot be split: it must hold exactly two cards of equal rank")]
    InvalidSplit,
    #[error("Card source is empty even after replenishing")]
    ShoeEmpty,
    #[error("No players seated at the table")]
    NoPlayers,
    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: f64, required: f64 },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}
