use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{Phase, Round};
use crate::hand::Hand;
use crate::player::{Coins, Player};
use crate::rules::{dealer_should_draw, settle_hand, Outcome};
use crate::shoe::{draw_replenishing, CardSource};
use crate::strategy::{Move, TableView};

/// Consecutive split requests on an unsplittable hand before the hand is stood.
pub const MAX_IGNORED_SPLITS: u32 = 16;

/// Buy-in schedule for a session.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRules {
    /// Cost of the first round.
    pub buy_in: Coins,
    /// Added to the buy-in after every round.
    pub buy_in_step: Coins,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            buy_in: 5.0,
            buy_in_step: 1.0,
        }
    }
}

/// What the presentation layer sees while a player is deciding.
#[derive(Debug)]
pub struct TurnSnapshot<'t, 'a> {
    pub players: &'t [Player<'a>],
    /// Seat indices of the players in this round.
    pub active: &'t [usize],
    pub dealer: &'t Hand,
    /// Seat of the acting player.
    pub seat: usize,
    pub hand_index: usize,
    pub buy_in: Coins,
}

/// Presentation hook. Every method defaults to doing nothing.
pub trait RoundObserver {
    fn on_phase(&mut self, _phase: Phase) {}
    fn on_turn(&mut self, _turn: &TurnSnapshot<'_, '_>) {}
    fn on_settled(&mut self, _report: &RoundReport) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Settlement of one hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub player: String,
    pub hand_index: usize,
    pub hand: Hand,
    pub score: u32,
    pub outcome: Outcome,
    pub payout: Coins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBalance {
    pub name: String,
    pub balance: Coins,
}

/// Summary of a finished round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    /// Buy-in charged this round.
    pub buy_in: Coins,
    /// Buy-in the next round will charge.
    pub next_buy_in: Coins,
    pub dealer: Hand,
    pub results: Vec<HandResult>,
    /// Names of players who could not afford the buy-in.
    pub sat_out: Vec<String>,
    pub balances: Vec<PlayerBalance>,
}

/// The round engine: seated players, the shared shoe and the buy-in schedule.
///
/// # Examples
///
/// ```
/// use pitboss_engine::player::Player;
/// use pitboss_engine::shoe::Shoe;
/// use pitboss_engine::strategy::{FixedStrategy, Move};
/// use pitboss_engine::table::{NoopObserver, Table, TableRules};
///
/// let mut table = Table::new(Box::new(Shoe::new(6, true, 42)), TableRules::default()).unwrap();
/// table.seat(Player::new("ann", 200.0, Box::new(FixedStrategy::new(Move::Stand))));
///
/// let report = table.play_round(&mut NoopObserver).unwrap();
/// assert_eq!(report.buy_in, 5.0);
/// assert_eq!(table.buy_in(), 6.0);
/// ```
pub struct Table<'a> {
    players: Vec<Player<'a>>,
    shoe: Box<dyn CardSource + 'a>,
    buy_in: Coins,
    buy_in_step: Coins,
    rounds_played: u32,
}

impl<'a> Table<'a> {
    pub fn new(shoe: Box<dyn CardSource + 'a>, rules: TableRules) -> Result<Self, GameError> {
        if !(rules.buy_in.is_finite() && rules.buy_in > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "buy-in must be positive, got {}",
                rules.buy_in
            )));
        }
        if !(rules.buy_in_step.is_finite() && rules.buy_in_step >= 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "buy-in step must not be negative, got {}",
                rules.buy_in_step
            )));
        }
        if shoe.decks() == 0 {
            return Err(GameError::InvalidConfig(
                "shoe needs at least one deck".to_string(),
            ));
        }
        Ok(Self {
            players: Vec::new(),
            shoe,
            buy_in: rules.buy_in,
            buy_in_step: rules.buy_in_step,
            rounds_played: 0,
        })
    }

    pub fn seat(&mut self, player: Player<'a>) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player<'a>] {
        &self.players
    }

    pub fn buy_in(&self) -> Coins {
        self.buy_in
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// True when at least one seated player can pay the next buy-in.
    pub fn has_solvent_player(&self) -> bool {
        self.players.iter().any(|p| p.can_afford(self.buy_in))
    }

    /// Plays one full round: buy-in, deal, player turns, dealer, settlement.
    ///
    /// The buy-in rises by the step even when nobody could afford to play.
    pub fn play_round(
        &mut self,
        observer: &mut dyn RoundObserver,
    ) -> Result<RoundReport, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let mut round = Round::new(self.rounds_played + 1, self.buy_in);
        let mut results = Vec::new();
        let opening: Vec<Coins> = self.players.iter().map(Player::balance).collect();

        loop {
            let phase = round.phase();
            observer.on_phase(phase);
            let step = match phase {
                Phase::BuyIn => {
                    self.collect_buy_ins(&mut round);
                    Ok(())
                }
                Phase::InitialDeal => self.initial_deal(&mut round),
                Phase::PlayerTurns => self.play_turns(&round, observer),
                Phase::DealerTurn => self.play_dealer(&mut round),
                Phase::Settlement => {
                    results = self.settle(&round);
                    self.buy_in += self.buy_in_step;
                    Ok(())
                }
                Phase::Done => break,
            };
            if let Err(err) = step {
                self.abandon_round(&round, &opening, &err);
                return Err(err);
            }
            round.advance();
        }

        self.rounds_played = round.number;
        let report = RoundReport {
            round: round.number,
            buy_in: round.buy_in,
            next_buy_in: self.buy_in,
            dealer: round.dealer,
            results,
            sat_out: self
                .players
                .iter()
                .filter(|p| !p.is_active())
                .map(|p| p.name().to_string())
                .collect(),
            balances: self
                .players
                .iter()
                .map(|p| PlayerBalance {
                    name: p.name().to_string(),
                    balance: p.balance(),
                })
                .collect(),
        };
        info!(
            round = report.round,
            buy_in = report.buy_in,
            hands = report.results.len(),
            dealer = %report.dealer,
            "round settled"
        );
        observer.on_settled(&report);
        Ok(report)
    }

    /// Puts every balance back where it stood before the buy-in and clears
    /// the hands. The round counter and buy-in do not move.
    fn abandon_round(&mut self, round: &Round, opening: &[Coins], err: &GameError) {
        for (player, &balance) in self.players.iter_mut().zip(opening) {
            player.credit(balance - player.balance());
            player.sit_out();
        }
        warn!(round = round.number, error = %err, "round abandoned, stakes refunded");
    }

    fn collect_buy_ins(&mut self, round: &mut Round) {
        for (seat, player) in self.players.iter_mut().enumerate() {
            if player.pay(round.buy_in).is_ok() {
                player.join_table();
                round.active.push(seat);
            } else {
                debug!(player = player.name(), balance = player.balance(), "sits out");
                player.sit_out();
            }
        }
    }

    fn initial_deal(&mut self, round: &mut Round) -> Result<(), GameError> {
        if round.active.is_empty() {
            return Ok(());
        }
        for pass in 0..2 {
            for &seat in &round.active {
                let card = self.draw(false)?;
                self.give_card(seat, 0, card);
            }
            let card = self.draw(pass == 0)?;
            round.dealer.add_card(card);
        }
        Ok(())
    }

    fn play_turns(
        &mut self,
        round: &Round,
        observer: &mut dyn RoundObserver,
    ) -> Result<(), GameError> {
        for &seat in &round.active {
            self.play_seat(round, seat, observer)?;
        }
        Ok(())
    }

    fn play_seat(
        &mut self,
        round: &Round,
        seat: usize,
        observer: &mut dyn RoundObserver,
    ) -> Result<(), GameError> {
        let mut hand_index = 0;
        while hand_index < self.players[seat].hands().len() {
            self.play_hand(round, seat, hand_index, observer)?;
            hand_index += 1;
        }
        self.players[seat].finish_turn();
        Ok(())
    }

    fn play_hand(
        &mut self,
        round: &Round,
        seat: usize,
        hand_index: usize,
        observer: &mut dyn RoundObserver,
    ) -> Result<(), GameError> {
        let mut ignored_splits = 0;
        loop {
            let hand = &self.players[seat].hands()[hand_index];
            if hand.is_bust() || hand.is_blackjack() {
                return Ok(());
            }
            let (two_cards, splittable) = (hand.len() == 2, hand.can_split());

            observer.on_turn(&TurnSnapshot {
                players: &self.players,
                active: &round.active,
                dealer: &round.dealer,
                seat,
                hand_index,
                buy_in: round.buy_in,
            });
            let view = TableView {
                dealer_up: round.dealer.up_card(),
                buy_in: round.buy_in,
                balance: self.players[seat].balance(),
                decks: self.shoe.decks(),
                hand_index,
            };
            let mv = self.players[seat].request_move(hand_index, &view);
            debug!(player = self.players[seat].name(), hand = hand_index, ?mv, "move");

            let affordable = self.players[seat].can_afford(round.buy_in);
            match mv {
                Move::Stand => return Ok(()),
                Move::Hit => self.hit(seat, hand_index)?,
                Move::Surrender => {
                    if let Some(hand) = self.players[seat].hand_mut(hand_index) {
                        hand.surrender();
                    }
                    return Ok(());
                }
                Move::DoubleDown if !two_cards => self.hit(seat, hand_index)?,
                Move::DoubleDown if !affordable => {
                    self.hit(seat, hand_index)?;
                    return Ok(());
                }
                Move::DoubleDown => {
                    self.players[seat].pay(round.buy_in)?;
                    let card = self.draw(false)?;
                    if let Some(hand) = self.players[seat].hand_mut(hand_index) {
                        hand.double_down(card);
                    }
                    return Ok(());
                }
                Move::Split if !splittable => {
                    ignored_splits += 1;
                    warn!(
                        player = self.players[seat].name(),
                        hand = hand_index,
                        ignored_splits,
                        "split requested on a hand that cannot be split"
                    );
                    if ignored_splits >= MAX_IGNORED_SPLITS {
                        warn!(
                            player = self.players[seat].name(),
                            hand = hand_index,
                            "too many impossible splits, standing"
                        );
                        return Ok(());
                    }
                    continue;
                }
                Move::Split if !affordable => self.hit(seat, hand_index)?,
                Move::Split => {
                    self.players[seat].pay(round.buy_in)?;
                    if self.players[seat].split_hand(hand_index) {
                        let new_index = self.players[seat].hands().len() - 1;
                        self.hit(seat, hand_index)?;
                        self.hit(seat, new_index)?;
                    }
                }
            }
            ignored_splits = 0;
        }
    }

    fn play_dealer(&mut self, round: &mut Round) -> Result<(), GameError> {
        if round.active.is_empty() {
            return Ok(());
        }
        round.dealer.reveal();
        while dealer_should_draw(&round.dealer) {
            let card = self.draw(false)?;
            round.dealer.add_card(card);
        }
        debug!(dealer = %round.dealer, score = round.dealer.score(), "dealer stands");
        Ok(())
    }

    fn settle(&mut self, round: &Round) -> Vec<HandResult> {
        let mut results = Vec::new();
        for &seat in &round.active {
            let player = &mut self.players[seat];
            let mut payout_total = 0.0;
            for (hand_index, hand) in player.hands().iter().enumerate() {
                let settlement = settle_hand(hand, &round.dealer, round.buy_in);
                payout_total += settlement.payout;
                results.push(HandResult {
                    player: player.name().to_string(),
                    hand_index,
                    hand: hand.clone(),
                    score: hand.score(),
                    outcome: settlement.outcome,
                    payout: settlement.payout,
                });
            }
            player.credit(payout_total);
        }
        results
    }

    fn hit(&mut self, seat: usize, hand_index: usize) -> Result<(), GameError> {
        let card = self.draw(false)?;
        self.give_card(seat, hand_index, card);
        Ok(())
    }

    fn give_card(&mut self, seat: usize, hand_index: usize, card: Card) {
        if let Some(hand) = self.players[seat].hand_mut(hand_index) {
            hand.add_card(card);
        }
    }

    /// Draws the next card and shows it to every seated player.
    fn draw(&mut self, face_down: bool) -> Result<Card, GameError> {
        let mut card = draw_replenishing(self.shoe.as_mut()).ok_or(GameError::ShoeEmpty)?;
        if face_down {
            card = card.turned_down();
        }
        for player in &mut self.players {
            player.notify_card(&card);
        }
        Ok(card)
    }
}

impl std::fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("players", &self.players)
            .field("shoe_remaining", &self.shoe.remaining())
            .field("buy_in", &self.buy_in)
            .field("buy_in_step", &self.buy_in_step)
            .field("rounds_played", &self.rounds_played)
            .finish()
    }
}
