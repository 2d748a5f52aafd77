use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the player does on their turn. The numbers are the menu keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerChoice {
    Stick = 1,
    Hit = 2,
}

impl TryFrom<u8> for PlayerChoice {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(PlayerChoice::Stick),
            2 => Ok(PlayerChoice::Hit),
            other => Err(Error::InvalidChoice(format!(
                "{other} is not an option, expected 1 (stick) or 2 (hit)"
            ))),
        }
    }
}

impl FromStr for PlayerChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        s.parse::<u8>()
            .map_err(|_| {
                Error::InvalidChoice(format!("'{s}' is not an option, expected 1 (stick) or 2 (hit)"))
            })
            .and_then(PlayerChoice::try_from)
    }
}
