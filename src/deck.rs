//! A standard 52-card deck with shuffle, draw, and peek operations.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::{DrawError, DrawManyError};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck.
///
/// The top of the deck is the last element of the internal order; draws
/// consume from that end. A freshly created or reset deck holds every
/// (suit, rank) combination exactly once.
///
/// The shuffle uses a seedable [`ChaCha8Rng`], which is reproducible given a
/// seed but is not suitable where cryptographically secure randomness is
/// required. A `Deck` is not internally synchronized: it belongs to a single
/// game session, and sharing one across threads requires external locking.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top of the deck last.
    cards: Vec<Card>,
    /// Random number generator used by [`Deck::shuffle`].
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new full deck seeded from the thread-local generator.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new(true);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new(shuffle: bool) -> Self {
        Self::with_seed(shuffle, rand::random())
    }

    /// Creates a new full deck with the given RNG seed.
    ///
    /// Two decks built from the same seed shuffle identically, which makes
    /// game flows reproducible in tests.
    #[must_use]
    pub fn with_seed(shuffle: bool, seed: u64) -> Self {
        let mut deck = Self {
            cards: Self::full_deck(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        if shuffle {
            deck.shuffle();
        }
        deck
    }

    /// Builds the 52-card cross product in canonical order: suits ascending,
    /// ranks ascending within each suit.
    fn full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Uses an unbiased Fisher-Yates shuffle over the current contents, so a
    /// partially drawn deck is permuted without adding or losing cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws the top card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Draws `count` cards from the top of the deck.
    ///
    /// The returned cards are in draw order: the first element is what a
    /// single [`Deck::draw`] would have returned, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`DrawManyError::InsufficientCards`] if `count` exceeds the
    /// remaining cards. The deck is left unchanged on failure.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DrawManyError> {
        if count > self.cards.len() {
            return Err(DrawManyError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        let mut drawn = self.cards.split_off(self.cards.len() - count);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns the top `count` cards without removing them.
    ///
    /// The result is in draw order, so `peek(n)` followed by `draw_many(n)`
    /// yields identical sequences.
    ///
    /// # Errors
    ///
    /// Returns [`DrawManyError::InsufficientCards`] if `count` exceeds the
    /// remaining cards.
    pub fn peek(&self, count: usize) -> Result<Vec<Card>, DrawManyError> {
        if count > self.cards.len() {
            return Err(DrawManyError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards[self.cards.len() - count..]
            .iter()
            .rev()
            .copied()
            .collect())
    }

    /// Restores the deck to the full 52 cards, shuffling if requested.
    ///
    /// The generator keeps its state across resets; it is not reseeded.
    pub fn reset(&mut self, shuffle: bool) {
        self.cards = Self::full_deck();
        if shuffle {
            self.shuffle();
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in internal order, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the remaining cards without removing them.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Default for Deck {
    /// Equivalent to `Deck::new(true)`.
    fn default() -> Self {
        Self::new(true)
    }
}
