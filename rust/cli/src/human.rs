//! Console seats: a human decision policy and the table renderer.
//!
//! Both share one [`Console`] so prompts and table views interleave on the
//! same output stream in the order the engine produces them.

use crate::formatters::{render_report, render_table};
use crate::io_utils::prompt_line;
use crate::validation::{ParseResult, parse_move};
use pitboss_engine::hand::Hand;
use pitboss_engine::strategy::{Move, Strategy, TableView};
use pitboss_engine::table::{RoundObserver, RoundReport, TurnSnapshot};
use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Strategy name reported by [`HumanStrategy`].
pub const HUMAN: &str = "human";

/// Why a human left the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leave {
    /// Typed `q` at a prompt
    Quit,
    /// Input ended
    InputClosed,
}

/// Set by a human seat when the player wants out; read by the session loop
/// after each round.
pub type LeaveFlag = Rc<Cell<Option<Leave>>>;

/// Interactive input and output. Write failures are kept and surfaced after
/// the round, since engine callbacks cannot return errors.
pub struct Console<'io> {
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
    failed: Option<io::Error>,
}

pub type SharedConsole<'io> = Rc<RefCell<Console<'io>>>;

impl<'io> Console<'io> {
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self {
            input,
            output,
            failed: None,
        }
    }

    pub fn shared(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> SharedConsole<'io> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    pub fn write_text(&mut self, text: &str) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = self.output.write_all(text.as_bytes()) {
            self.failed = Some(e);
        }
    }

    /// Prompts and reads one line. `None` when input is closed or the prompt
    /// could not be written.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.failed.is_some() {
            return None;
        }
        match prompt_line(&mut *self.output, &mut *self.input, prompt) {
            Ok(line) => line,
            Err(e) => {
                self.failed = Some(e);
                None
            }
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.failed.take()
    }
}

/// A seat played from the keyboard.
///
/// Invalid input re-prompts. Once the player quits, or input ends, every
/// remaining decision is a stand and the leave flag is set.
pub struct HumanStrategy<'io> {
    name: String,
    console: SharedConsole<'io>,
    leave: LeaveFlag,
}

impl<'io> HumanStrategy<'io> {
    pub fn new(name: impl Into<String>, console: SharedConsole<'io>, leave: LeaveFlag) -> Self {
        Self {
            name: name.into(),
            console,
            leave,
        }
    }
}

impl Strategy for HumanStrategy<'_> {
    fn play_move(&mut self, hand: &Hand, view: &TableView) -> Move {
        if self.leave.get().is_some() {
            return Move::Stand;
        }
        let prompt = format!(
            "{}, hand {}: [h]it [s]tand [d]ouble s[p]lit su[r]render [q]uit > ",
            self.name,
            view.hand_index + 1
        );
        let mut console = self.console.borrow_mut();
        loop {
            let Some(line) = console.ask(&prompt) else {
                self.leave.set(Some(Leave::InputClosed));
                return Move::Stand;
            };
            match parse_move(&line) {
                ParseResult::Move(Move::Split) if !hand.can_split() => console
                    .write_text("Error: Only a pair of equal ranks can be split\n"),
                ParseResult::Move(mv) => return mv,
                ParseResult::Quit => {
                    self.leave.set(Some(Leave::Quit));
                    return Move::Stand;
                }
                ParseResult::Invalid(msg) => console.write_text(&format!("Error: {}\n", msg)),
            }
        }
    }

    fn name(&self) -> &str {
        HUMAN
    }
}

/// Draws the table before each human decision and the settlement after
/// every round. Bot turns are not drawn.
pub struct ConsoleRenderer<'io> {
    console: SharedConsole<'io>,
}

impl<'io> ConsoleRenderer<'io> {
    pub fn new(console: SharedConsole<'io>) -> Self {
        Self { console }
    }
}

impl RoundObserver for ConsoleRenderer<'_> {
    fn on_turn(&mut self, turn: &TurnSnapshot<'_, '_>) {
        let human = turn
            .players
            .get(turn.seat)
            .is_some_and(|p| p.strategy_name() == HUMAN);
        if human {
            let text = format!("\n{}", render_table(turn));
            self.console.borrow_mut().write_text(&text);
        }
    }

    fn on_settled(&mut self, report: &RoundReport) {
        self.console.borrow_mut().write_text(&render_report(report));
    }
}
