//! Interactive session loop over terminal-style collaborators.
//!
//! The session owns the [`ChipPurse`] and repeats rounds over fresh decks
//! until the player declines to continue or runs out of chips. It reads from
//! any [`BufRead`] and writes to any [`Write`], which keeps the loop fully
//! scriptable in tests.

use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::chips::ChipPurse;
use crate::deck::Deck;
use crate::error::{InputError, SessionError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::round::{Outcome, Round, RoundState};

/// The player's hit-or-stand choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Draw another card.
    Hit,
    /// Stop drawing and end the turn.
    Stand,
}

/// Parses a bet line into a chip amount.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] when the trimmed text is not a
/// non-negative whole number.
pub fn parse_bet(input: &str) -> Result<u32, InputError> {
    input.trim().parse().map_err(|_| InputError::NotANumber)
}

/// Parses a hit-or-stand line.
///
/// # Errors
///
/// Returns [`InputError::UnknownChoice`] when the trimmed text is neither
/// `h` nor `s`.
pub fn parse_choice(input: &str) -> Result<Choice, InputError> {
    match input.trim() {
        "h" => Ok(Choice::Hit),
        "s" => Ok(Choice::Stand),
        _ => Err(InputError::UnknownChoice),
    }
}

/// An interactive blackjack session.
///
/// # Example
///
/// ```no_run
/// use std::io;
///
/// use twentyone::{GameOptions, Session};
///
/// let stdin = io::stdin();
/// let stdout = io::stdout();
/// let mut session = Session::new(GameOptions::default(), 42, stdin.lock(), stdout.lock());
/// session.run().expect("session failed");
/// ```
pub struct Session<R, W> {
    reader: R,
    writer: W,
    purse: ChipPurse,
    options: GameOptions,
    rng: ChaCha8Rng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with the given options and shuffle seed.
    pub fn new(options: GameOptions, seed: u64, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            purse: ChipPurse::new(options.starting_chips),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the session's purse.
    #[must_use]
    pub const fn purse(&self) -> &ChipPurse {
        &self.purse
    }

    /// Runs rounds until the player declines to continue or is out of chips.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O fails or a round aborts because the
    /// deck ran out of cards.
    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(self.writer, "Welcome to Blackjack!")?;

        loop {
            if self.purse.balance() == 0 {
                writeln!(self.writer, "You are out of chips. Game over.")?;
                return Ok(());
            }

            writeln!(
                self.writer,
                "\nNew round! You have {} chips.",
                self.purse.balance()
            )?;

            let mut deck = Deck::new();
            deck.shuffle(&mut self.rng);
            let mut round = Round::new(deck, self.options);

            self.prompt_bet()?;
            round.deal()?;
            self.show_partial(&round)?;

            while round.state() == RoundState::PlayerTurn {
                match self.prompt_choice()? {
                    Choice::Hit => {
                        round.player_hit()?;
                        self.show_partial(&round)?;
                    }
                    Choice::Stand => {
                        writeln!(self.writer, "You stand. Dealer's turn.")?;
                        round.player_stand()?;
                    }
                }
            }

            if round.state() == RoundState::DealerTurn {
                round.dealer_play()?;
                self.show_all(&round)?;
            }

            let outcome = round.settle(&mut self.purse)?;
            self.report_outcome(outcome)?;
            writeln!(self.writer, "Your chips: {}", self.purse.balance())?;

            if !self.prompt_continue()? {
                writeln!(self.writer, "Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    /// Reads one line, returning `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts for a bet until the purse accepts one.
    fn prompt_bet(&mut self) -> Result<(), SessionError> {
        loop {
            write!(self.writer, "Bet amount: ")?;
            let Some(line) = self.read_line()? else {
                return Err(SessionError::Io(io::ErrorKind::UnexpectedEof.into()));
            };

            let amount = match parse_bet(&line) {
                Ok(amount) => amount,
                Err(err) => {
                    writeln!(self.writer, "{err}")?;
                    continue;
                }
            };

            match self.purse.place_bet(amount) {
                Ok(()) => return Ok(()),
                Err(err) => writeln!(self.writer, "{err}")?,
            }
        }
    }

    /// Prompts for hit-or-stand until a valid token arrives.
    fn prompt_choice(&mut self) -> Result<Choice, SessionError> {
        loop {
            write!(self.writer, "Hit or stand? [h/s]: ")?;
            let Some(line) = self.read_line()? else {
                return Err(SessionError::Io(io::ErrorKind::UnexpectedEof.into()));
            };

            match parse_choice(&line) {
                Ok(choice) => return Ok(choice),
                Err(err) => writeln!(self.writer, "{err}")?,
            }
        }
    }

    /// Asks whether to play another round. Anything but `y` means no.
    fn prompt_continue(&mut self) -> Result<bool, SessionError> {
        write!(self.writer, "Play another round? [y/n]: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        Ok(line.trim() == "y")
    }

    /// Shows the table with the dealer's first card hidden.
    fn show_partial(&mut self, round: &Round) -> Result<(), SessionError> {
        writeln!(self.writer, "\nDealer's hand: {}", format_partial(round.dealer()))?;
        writeln!(
            self.writer,
            "Your hand: {} (total {})",
            format_hand(round.player()),
            round.player().total()
        )?;
        Ok(())
    }

    /// Shows both hands in full with their totals.
    fn show_all(&mut self, round: &Round) -> Result<(), SessionError> {
        writeln!(
            self.writer,
            "\nDealer's hand: {} (total {})",
            format_hand(round.dealer()),
            round.dealer().total()
        )?;
        writeln!(
            self.writer,
            "Your hand: {} (total {})",
            format_hand(round.player()),
            round.player().total()
        )?;
        Ok(())
    }

    /// Reports the settled outcome.
    fn report_outcome(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        let message = match outcome {
            Outcome::PlayerBust => "You busted. Dealer wins.",
            Outcome::DealerBust => "Dealer busts! You win!",
            Outcome::DealerWin => "Dealer wins.",
            Outcome::PlayerWin => "You win!",
            Outcome::Push => "Push. Nobody wins.",
        };
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

/// Formats a hand as a comma-separated card list.
fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the dealer's hand with the hole card hidden.
fn format_partial(dealer: &Hand) -> String {
    let mut parts = vec!["<hidden>".to_string()];
    parts.extend(dealer.cards().iter().skip(1).map(ToString::to_string));
    parts.join(", ")
}
