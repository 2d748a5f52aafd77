//! Interactive round loop: reads the player's choices line by line and
//! prints the table after every action.

use crate::view;
use crate::BoxErr;
use blackjack::{Dealer, PlayerChoice, Round};
use std::io::{BufRead, Write};

/// How a round's player turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnEnd {
    Finished,
    InputClosed,
}

pub struct Session<I: BufRead, O: Write> {
    dealer: Dealer,
    input: I,
    output: O,
    max_rounds: Option<u32>,
    rounds_played: u32,
}

impl<I: BufRead, O: Write> Session<I, O> {
    /// `max_rounds` of `None` asks the player after each round instead
    pub fn new(dealer: Dealer, input: I, output: O, max_rounds: Option<u32>) -> Self {
        Self {
            dealer,
            input,
            output,
            max_rounds,
            rounds_played: 0,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn run(&mut self) -> Result<(), BoxErr> {
        loop {
            if self.max_rounds.is_some_and(|max| self.rounds_played >= max) {
                break;
            }

            writeln!(self.output, "{}", view::welcome())?;
            self.dealer.start_round()?;
            log::info!("Round {} started", self.rounds_played + 1);

            if self.play_round()? == TurnEnd::InputClosed {
                log::info!("Input closed, leaving the table");
                break;
            }
            self.rounds_played += 1;

            if self.max_rounds.is_none() && !self.ask_play_again()? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn play_round(&mut self) -> Result<TurnEnd, BoxErr> {
        loop {
            let round = self.current_round()?;
            if !round.is_live() {
                return self.finish_round();
            }

            let table = view::round(round, false);
            writeln!(self.output, "{table}")?;
            writeln!(self.output, "{}", view::prompt())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(TurnEnd::InputClosed);
            };
            let choice = match line.parse::<PlayerChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    log::warn!("Rejected player input: {e}");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            log::debug!("Player chose {choice:?}");
            self.dealer.play(choice)?;
            if choice == PlayerChoice::Stick {
                return self.finish_round();
            }
        }
    }

    fn finish_round(&mut self) -> Result<TurnEnd, BoxErr> {
        let round = self.current_round()?;
        let table = view::final_round(round);
        let result = round.result();
        writeln!(self.output, "{table}")?;
        log::info!("Round {} result: {result}", self.rounds_played + 1);
        Ok(TurnEnd::Finished)
    }

    fn ask_play_again(&mut self) -> Result<bool, BoxErr> {
        loop {
            writeln!(self.output, "{}", view::play_again_prompt())?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => writeln!(self.output, "'{other}' is not an option, answer y or n")?,
            }
        }
    }

    fn current_round(&self) -> Result<&Round, BoxErr> {
        Ok(self.dealer.round().ok_or(blackjack::Error::RoundNotStarted)?)
    }

    /// Next input line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, BoxErr> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
