//! Game Session
//!
//! One round per process: commit, menu, resolve, reveal.
//!
//! The computer's move is drawn and bound under a fresh session key before
//! the menu is ever shown. The loop is an explicit state machine over the
//! parsed input line; help requests and invalid input re-show the menu
//! without touching the key, the digest, or the computer's choice.

use std::io::{BufRead, Write};

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::cli::table;
use crate::core::moves::{MoveIndex, MoveSet};
use crate::core::outcome::{determine, Verdict};
use crate::proof::commitment::{CommitmentError, MoveCommitment, SessionKey};

/// Horizontal rule around result blocks.
const RULE: &str = "--------------------";

/// Menu loop states. `Resolved` and `Quit` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuState {
    /// Show the menu and wait for a line.
    AwaitingInput,
    /// Render the help table, then return to the menu.
    ShowHelp,
    /// The human picked a move; resolve and reveal.
    Resolved(MoveIndex),
    /// End the session with no verdict.
    Quit,
}

/// One parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Help,
    Quit,
    Move(MoveIndex),
    Invalid,
}

fn parse_command(line: &str, moves: &MoveSet) -> Command {
    match line.trim() {
        "?" => Command::Help,
        "0" => Command::Quit,
        other => moves
            .parse_selection(other)
            .map(Command::Move)
            .unwrap_or(Command::Invalid),
    }
}

/// A single game session: one key, one committed computer move, one verdict.
pub struct Session<'a> {
    moves: &'a MoveSet,
    key: SessionKey,
    commitment: MoveCommitment,
    computer: MoveIndex,
}

impl<'a> Session<'a> {
    /// Start a session with a randomly drawn computer move.
    pub fn start(moves: &'a MoveSet) -> Result<Self, CommitmentError> {
        let computer = pick_move(moves)?;
        Self::open(moves, computer)
    }

    /// Start a session with a fixed computer move. Used by tests; live
    /// play goes through [`Session::start`].
    pub fn open(moves: &'a MoveSet, computer: MoveIndex) -> Result<Self, CommitmentError> {
        let key = SessionKey::generate()?;
        let commitment = MoveCommitment::bind(&key, moves.name(computer));
        debug!(n = moves.len(), digest = %commitment.digest, "session opened");
        Ok(Self {
            moves,
            key,
            commitment,
            computer,
        })
    }

    /// The published commitment for this session.
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// Run the menu loop until the round resolves or the human quits.
    ///
    /// Returns the verdict from the human's perspective, or `None` on
    /// quit. Generic over reader and writer so tests can drive it with
    /// in-memory buffers.
    pub fn play<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<Option<Verdict>> {
        let mut state = MenuState::AwaitingInput;
        loop {
            state = match state {
                MenuState::AwaitingInput => {
                    self.show_menu(&mut output)?;
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        // EOF on stdin ends the session like an explicit quit.
                        MenuState::Quit
                    } else {
                        match parse_command(&line, self.moves) {
                            Command::Help => MenuState::ShowHelp,
                            Command::Quit => MenuState::Quit,
                            Command::Move(index) => MenuState::Resolved(index),
                            Command::Invalid => {
                                writeln!(output, "{RULE}\nInvalid input. Please try again.\n{RULE}")?;
                                MenuState::AwaitingInput
                            }
                        }
                    }
                }
                MenuState::ShowHelp => {
                    writeln!(output, "{RULE}\n{}\n{RULE}", table::render(self.moves))?;
                    MenuState::AwaitingInput
                }
                MenuState::Resolved(human) => {
                    let verdict = self.resolve(human, &mut output)?;
                    return Ok(Some(verdict));
                }
                MenuState::Quit => {
                    writeln!(output, "{RULE}\nGoodbye!\n{RULE}")?;
                    return Ok(None);
                }
            };
        }
    }

    /// Print the commitment digest and the numbered move menu.
    fn show_menu<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "HMAC: {}", self.commitment.digest)?;
        writeln!(output, "Available moves:")?;
        for (i, name) in self.moves.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, name)?;
        }
        writeln!(output, "? - help")?;
        writeln!(output, "0. Quit")?;
        write!(output, "Enter your move: ")?;
        output.flush()
    }

    /// Resolve the round and disclose the key. The only code path that
    /// reveals the key, reached strictly after the human's selection.
    fn resolve<W: Write>(&self, human: MoveIndex, output: &mut W) -> std::io::Result<Verdict> {
        let verdict = determine(human.get(), self.computer.get(), self.moves.len());
        debug!(human = %human, computer = %self.computer, %verdict, "round resolved");
        writeln!(
            output,
            "{RULE}\nYour move: {}\nComputer move: {}\nYou {}\nHMAC key: {}\n{RULE}",
            self.moves.name(human),
            self.moves.name(self.computer),
            verdict,
            self.key.to_hex(),
        )?;
        Ok(verdict)
    }
}

/// Draw a uniform move index from the OS CSPRNG.
///
/// The same security-grade source as the session key: a predictable
/// computer move would defeat the fairness story even with a sound
/// commitment. Modulo bias over a small odd N is negligible (< 2⁻⁶⁰).
fn pick_move(moves: &MoveSet) -> Result<MoveIndex, CommitmentError> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(CommitmentError::RandomnessUnavailable)?;
    let raw = (u64::from_le_bytes(bytes) % moves.len() as u64) as usize + 1;
    Ok(moves.index(raw).expect("modulo keeps the index in range"))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn classic() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    fn open_with_computer(moves: &MoveSet, raw: usize) -> Session<'_> {
        Session::open(moves, moves.index(raw).unwrap()).unwrap()
    }

    fn play(session: &Session<'_>, input: &str) -> (Option<Verdict>, String) {
        let mut output = Vec::new();
        let verdict = session
            .play(Cursor::new(input.as_bytes()), &mut output)
            .unwrap();
        (verdict, String::from_utf8(output).unwrap())
    }

    /// Digest hex from the first menu line.
    fn shown_digest(output: &str) -> String {
        let line = output.lines().find(|l| l.starts_with("HMAC: ")).unwrap();
        line.trim_start_matches("HMAC: ").to_string()
    }

    fn revealed_key(output: &str) -> String {
        let line = output.lines().find(|l| l.starts_with("HMAC key: ")).unwrap();
        line.trim_start_matches("HMAC key: ").to_string()
    }

    #[test]
    fn test_winning_round_end_to_end() {
        let moves = classic();
        // Computer pre-selects Rock; the human answers with Paper.
        let session = open_with_computer(&moves, 1);
        let (verdict, output) = play(&session, "2\n");

        assert_eq!(verdict, Some(Verdict::Win));
        assert!(output.contains("Your move: Paper"));
        assert!(output.contains("Computer move: Rock"));
        assert!(output.contains("You Win"));

        // The disclosed key must reproduce the digest shown before the
        // human's choice, for the move the computer actually played.
        let digest = crate::proof::commitment::Digest::from_hex(&shown_digest(&output)).unwrap();
        assert_eq!(digest, session.commitment().digest);
        let key_bytes: [u8; 32] = hex::decode(revealed_key(&output))
            .unwrap()
            .try_into()
            .unwrap();
        let key = SessionKey::from_bytes(key_bytes);
        let reconstructed = MoveCommitment { digest };
        assert!(reconstructed.verify(&key, "Rock"));
        assert!(!reconstructed.verify(&key, "Paper"));
    }

    #[test]
    fn test_losing_and_drawn_rounds() {
        let moves = classic();
        let session = open_with_computer(&moves, 2);
        let (verdict, output) = play(&session, "1\n");
        assert_eq!(verdict, Some(Verdict::Lose));
        assert!(output.contains("You Lose"));

        let session = open_with_computer(&moves, 2);
        let (verdict, output) = play(&session, "2\n");
        assert_eq!(verdict, Some(Verdict::Draw));
        assert!(output.contains("You Draw"));
    }

    #[test]
    fn test_quit_reveals_nothing() {
        let moves = classic();
        let session = open_with_computer(&moves, 3);
        let (verdict, output) = play(&session, "0\n");
        assert_eq!(verdict, None);
        assert!(output.contains("Goodbye!"));
        assert!(!output.contains("HMAC key:"));
        assert!(!output.contains(&session.key.to_hex()));
    }

    #[test]
    fn test_eof_acts_as_quit() {
        let moves = classic();
        let session = open_with_computer(&moves, 1);
        let (verdict, output) = play(&session, "");
        assert_eq!(verdict, None);
        assert!(output.contains("Goodbye!"));
        assert!(!output.contains("HMAC key:"));
    }

    #[test]
    fn test_help_shows_table_without_reveal() {
        let moves = classic();
        let session = open_with_computer(&moves, 1);
        let (verdict, output) = play(&session, "?\n0\n");
        assert_eq!(verdict, None);
        assert!(output.contains(r"pc \ you"));
        assert!(output.contains("Draw"));
        assert!(!output.contains("HMAC key:"));

        // The menu was shown twice with an identical digest: `?` must not
        // recompute or re-roll anything.
        let digests: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("HMAC: "))
            .collect();
        assert_eq!(digests.len(), 2);
        assert_eq!(digests[0], digests[1]);
    }

    #[test]
    fn test_invalid_input_reprompts_without_state_change() {
        let moves = classic();
        let session = open_with_computer(&moves, 1);
        let (verdict, output) = play(&session, "abc\n9\n\n2\n");
        assert_eq!(verdict, Some(Verdict::Win));
        assert_eq!(
            output.matches("Invalid input. Please try again.").count(),
            3
        );

        // Every re-shown menu carries the same digest.
        let digests: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("HMAC: "))
            .collect();
        assert_eq!(digests.len(), 4);
        assert!(digests.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_menu_layout() {
        let moves = classic();
        let session = open_with_computer(&moves, 1);
        let (_, output) = play(&session, "0\n");
        assert!(output.contains("Available moves:\n1. Rock\n2. Paper\n3. Scissors\n? - help\n0. Quit\n"));
        assert!(output.contains("Enter your move: "));
    }

    #[test]
    fn test_start_draws_in_range_move() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        for _ in 0..50 {
            let session = Session::start(&moves).unwrap();
            let raw = session.computer.get();
            assert!((1..=7).contains(&raw));
        }
    }

    #[test]
    fn test_parse_command() {
        let moves = classic();
        assert_eq!(parse_command("?", &moves), Command::Help);
        assert_eq!(parse_command(" ? \n", &moves), Command::Help);
        assert_eq!(parse_command("0", &moves), Command::Quit);
        assert_eq!(
            parse_command("2\n", &moves),
            Command::Move(moves.index(2).unwrap())
        );
        assert_eq!(parse_command("4", &moves), Command::Invalid);
        assert_eq!(parse_command("rock", &moves), Command::Invalid);
        assert_eq!(parse_command("", &moves), Command::Invalid);
    }
}
