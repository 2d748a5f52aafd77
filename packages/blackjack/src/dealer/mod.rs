use crate::error::{Error, Result};
use crate::rules::{validate_deck_multiple, HOUSE_STANDS_ON, MAX_HAND_VALUE};
use crate::{Card, Deck, Hand, PlayerChoice, Round, RoundStatus, Side};
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Owns the deck and the round in play for one game session.
pub struct Dealer<R: Rng = ChaCha8Rng> {
    multiple: u32,
    deck: Deck,
    round: Option<Round>,
    rng: R,
}

impl Dealer<ChaCha8Rng> {
    /// Dealer shuffling `multiple` standard decks with an entropy-seeded RNG
    pub fn new(multiple: u32) -> Result<Self> {
        Self::with_rng(multiple, ChaCha8Rng::from_entropy())
    }

    /// Dealer whose shuffles are reproducible from `seed`
    pub fn seeded(multiple: u32, seed: u64) -> Result<Self> {
        Self::with_rng(multiple, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dealer<R> {
    pub fn with_rng(multiple: u32, mut rng: R) -> Result<Self> {
        let multiple = validate_deck_multiple(multiple)?;
        let mut deck = Deck::build(multiple)?;
        deck.shuffle(&mut rng);

        Ok(Self {
            multiple,
            deck,
            round: None,
            rng,
        })
    }

    pub fn multiple(&self) -> u32 {
        self.multiple
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The round in play, `None` until the first [`Dealer::start_round`]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Throw away the old round and deck, shuffle a full deck and deal two
    /// cards each, player first.
    pub fn start_round(&mut self) -> Result<&Round> {
        let mut deck = Deck::build(self.multiple)?;
        deck.shuffle(&mut self.rng);
        self.deck = deck;

        let mut player_hand = Hand::default();
        let mut house_hand = Hand::default();
        for _ in 0..2 {
            player_hand.add(self.deck.draw()?);
            house_hand.add(self.deck.draw()?);
        }
        log::debug!(
            "Dealt round: player {:?}, house {:?}, {} cards left",
            player_hand.cards().iter().map(Card::short_name).collect::<Vec<_>>(),
            house_hand.cards().iter().map(Card::short_name).collect::<Vec<_>>(),
            self.deck.len()
        );

        Ok(&*self.round.insert(Round::new(player_hand, house_hand)))
    }

    pub fn hit_player(&mut self) -> Result<Card> {
        self.hit(Side::Player)
    }

    pub fn hit_house(&mut self) -> Result<Card> {
        self.hit(Side::House)
    }

    /// Deal one card to `side` of the current round
    pub fn hit(&mut self, side: Side) -> Result<Card> {
        let round = self.round.as_mut().ok_or(Error::RoundNotStarted)?;
        let card = self.deck.draw()?;
        round.hand_mut(side).add(card);
        log::debug!("Dealt {card} to {side:?}, {} cards left", self.deck.len());
        Ok(card)
    }

    /// Play the house hand out and return how many cards it drew.
    ///
    /// The house draws while its best total is under 17. If that total then
    /// overflows 21 without the hand being bust, it keeps drawing while the
    /// hard total is under 17.
    pub fn play_house(&mut self) -> Result<usize> {
        let mut drawn = 0;
        while self.house_hand()?.max_value() < HOUSE_STANDS_ON {
            self.hit_house()?;
            drawn += 1;
        }

        // max_value falls back to the hard total past 21, so this only runs
        // if hand valuation stops doing that
        let house = self.house_hand()?;
        if house.max_value() > MAX_HAND_VALUE && !house.is_bust() {
            while self.house_hand()?.min_value() < HOUSE_STANDS_ON {
                self.hit_house()?;
                drawn += 1;
            }
        }

        let house = self.house_hand()?;
        log::debug!(
            "House stands on {} after drawing {drawn}{}",
            house.max_value(),
            if house.is_bust() { " (bust)" } else { "" }
        );
        Ok(drawn)
    }

    /// Apply the player's choice for this turn and return the round status.
    ///
    /// `Hit` deals the player a card. `Stick` ends the player's turn and
    /// plays the house out.
    pub fn play(&mut self, choice: PlayerChoice) -> Result<RoundStatus> {
        match choice {
            PlayerChoice::Hit => {
                self.hit_player()?;
            }
            PlayerChoice::Stick => {
                self.play_house()?;
            }
        }
        Ok(self.current_round()?.status())
    }

    fn current_round(&self) -> Result<&Round> {
        self.round.as_ref().ok_or(Error::RoundNotStarted)
    }

    fn house_hand(&self) -> Result<&Hand> {
        Ok(self.current_round()?.house_hand())
    }
}
