//! Input parsing for interactive commands.
//!
//! Human players answer each prompt with a move letter or word. Parsing
//! returns a [`ParseResult`] so the caller can re-prompt with the message on
//! bad input.

use pitboss_engine::strategy::Move;

/// Outcome of parsing one line typed at the move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Move(Move),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`Move`] or the quit command.
///
/// Accepted (case-insensitive):
/// - `h` / `hit`
/// - `s` / `stand`
/// - `d` / `double`
/// - `p` / `split`
/// - `r` / `surrender`
/// - `q` / `quit`
///
/// # Example
///
/// ```rust
/// # use pitboss_cli::validation::{parse_move, ParseResult};
/// use pitboss_engine::strategy::Move;
///
/// assert_eq!(parse_move("H"), ParseResult::Move(Move::Hit));
/// assert_eq!(parse_move("double"), ParseResult::Move(Move::DoubleDown));
/// assert_eq!(parse_move("q"), ParseResult::Quit);
///
/// match parse_move("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hit" => ParseResult::Move(Move::Hit),
        "s" | "stand" => ParseResult::Move(Move::Stand),
        "d" | "double" => ParseResult::Move(Move::DoubleDown),
        "p" | "split" => ParseResult::Move(Move::Split),
        "r" | "surrender" => ParseResult::Move(Move::Surrender),
        other => ParseResult::Invalid(format!(
            "Unrecognized move: {}. Valid moves: h(it), s(tand), d(ouble), (s)p(lit), (su)r(render), q(uit)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_words() {
        for (input, mv) in [
            ("h", Move::Hit),
            ("hit", Move::Hit),
            ("s", Move::Stand),
            ("Stand", Move::Stand),
            ("d", Move::DoubleDown),
            ("p", Move::Split),
            ("split", Move::Split),
            ("r", Move::Surrender),
            ("SURRENDER", Move::Surrender),
        ] {
            assert_eq!(parse_move(input), ParseResult::Move(mv), "input {input:?}");
        }
    }

    #[test]
    fn quit_and_padding() {
        assert_eq!(parse_move("  quit \n"), ParseResult::Quit);
        assert_eq!(parse_move(" h "), ParseResult::Move(Move::Hit));
    }

    #[test]
    fn empty_and_unknown_are_invalid() {
        assert_eq!(parse_move("   "), ParseResult::Invalid("Empty input".into()));
        assert!(matches!(parse_move("x"), ParseResult::Invalid(m) if m.contains("x")));
    }
}
