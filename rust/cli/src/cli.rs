//! Command-line surface of `pitboss`.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "pitboss",
    version,
    about = "Blackjack table: play interactively or simulate bots"
)]
pub struct PitbossCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sit at an interactive table with humans and bots
    Play {
        /// Seats played from the keyboard
        #[arg(long, default_value_t = 1)]
        humans: u32,
        /// Seats played by the configured bot strategy
        #[arg(long, default_value_t = 0)]
        bots: u32,
        /// Comma-separated seat names, humans first
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,
        /// Stop after this many rounds (default: until everyone is broke or quits)
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        decks: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a bots-only table and report final balances
    Sim {
        /// Number of bots (default: one per strategy given)
        #[arg(long)]
        bots: Option<u32>,
        /// Comma-separated strategy ids, assigned to bots in turn
        #[arg(long, value_delimiter = ',')]
        strategy: Vec<String>,
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        #[arg(long)]
        decks: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSON line per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// List the available bot strategies
    Strategies,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Strategies => "strategies",
            Commands::Cfg => "cfg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        PitbossCli::command().debug_assert();
    }

    #[test]
    fn play_defaults() {
        let cli = PitbossCli::try_parse_from(["pitboss", "play"]).unwrap();
        match cli.cmd {
            Commands::Play {
                humans,
                bots,
                names,
                rounds,
                ..
            } => {
                assert_eq!(humans, 1);
                assert_eq!(bots, 0);
                assert!(names.is_empty());
                assert_eq!(rounds, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn names_and_strategies_split_on_commas() {
        let cli =
            PitbossCli::try_parse_from(["pitboss", "play", "--names", "ann,bob", "--bots", "1"])
                .unwrap();
        assert!(matches!(cli.cmd, Commands::Play { ref names, .. } if names == &["ann", "bob"]));

        let cli = PitbossCli::try_parse_from(["pitboss", "sim", "--strategy", "basic,hilo"])
            .unwrap();
        assert!(
            matches!(cli.cmd, Commands::Sim { ref strategy, rounds: 100, .. } if strategy == &["basic", "hilo"])
        );
    }
}
