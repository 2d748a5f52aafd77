use crate::error::{Error, Result};

/// Highest hand value that is not bust
pub const MAX_HAND_VALUE: u32 = 21;

/// The house stops drawing once its hand reaches this value
pub const HOUSE_STANDS_ON: u32 = 17;

/// Cards in one standard deck
pub const STANDARD_DECK_SIZE: usize = 52;

/// Check that a deck multiple asks for at least one standard deck
pub fn validate_deck_multiple(multiple: u32) -> Result<u32> {
    if multiple == 0 {
        return Err(Error::Validation(
            "Deck multiple must be greater than zero".to_string(),
        ));
    }
    Ok(multiple)
}
