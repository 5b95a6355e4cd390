//! Card and deck primitives for poker-style games, with optional `no_std`
//! support.
//!
//! The crate provides ordered, hashable [`Card`], [`Suit`], and [`Rank`]
//! value types and a [`Deck`] that supports shuffle, draw, peek, and reset
//! over a standard 52-card deck. Suits rank Club < Heart < Diamond < Spade,
//! and cards compare by rank first with suit as the tiebreaker.
//!
//! # Example
//!
//! ```
//! use pokerdeck::{Card, Deck};
//!
//! let mut deck = Deck::with_seed(true, 42);
//! let hand = deck.draw_many(5)?;
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.remaining(), 47);
//!
//! let card: Card = "AS".parse()?;
//! assert_eq!(card.to_string(), "A♠");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::{DrawError, DrawManyError, ParseCardError};
