//! Error types for card and deck operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is too short to hold a rank token and a suit code.
    #[error("card notation must have a rank and a suit")]
    InvalidFormat,
    /// Trailing character is not a recognized suit code.
    #[error("invalid suit code: {0:?}")]
    InvalidSuit(char),
    /// Prefix is not a recognized rank token.
    #[error("invalid rank token")]
    InvalidRank,
}

/// Errors that can occur when drawing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// Errors that can occur when drawing or peeking at multiple cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawManyError {
    /// More cards were requested than remain in the deck.
    #[error("cannot take {requested} cards, only {remaining} remaining")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards remaining in the deck.
        remaining: usize,
    },
}
