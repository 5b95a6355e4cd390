//! Card value types: suits, ranks, and the card itself.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::error::ParseCardError;

/// Card suit, ordered by Seven Poker ranking.
///
/// Ranking (low to high): Club < Heart < Diamond < Spade. This is the order
/// used to break ties between cards of equal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs (♣).
    Club = 1,
    /// Hearts (♥).
    Heart = 2,
    /// Diamonds (♦).
    Diamond = 3,
    /// Spades (♠).
    Spade = 4,
}

impl Suit {
    /// All suits in ascending ranking order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Heart, Self::Diamond, Self::Spade];

    /// Returns the one-letter code used in textual card notation.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Club => 'C',
            Self::Heart => 'H',
            Self::Diamond => 'D',
            Self::Spade => 'S',
        }
    }

    /// Returns the Unicode symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Club => '\u{2663}',
            Self::Heart => '\u{2665}',
            Self::Diamond => '\u{2666}',
            Self::Spade => '\u{2660}',
        }
    }

    /// Returns the display name for this suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Club => "Clubs",
            Self::Heart => "Hearts",
            Self::Diamond => "Diamonds",
            Self::Spade => "Spades",
        }
    }

    /// Looks up a suit from its notation code (case-insensitive).
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'C' => Some(Self::Club),
            'H' => Some(Self::Heart),
            'D' => Some(Self::Diamond),
            'S' => Some(Self::Spade),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank from Two to Ace.
///
/// Ace is highest (14). This crate has no ace-low representation; games that
/// need one (e.g. for straights) handle it in their own evaluation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace (high).
    Ace = 14,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value of this rank (2 through 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the token used in textual card notation.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Looks up a rank from its notation token (case-insensitive).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| token.eq_ignore_ascii_case(rank.token()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A playing card with suit and rank.
///
/// Cards compare by rank first, then by suit as a tiebreaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the notation token for this card, e.g. `"AS"` or `"10H"`.
    ///
    /// This is the form accepted by parsing, unlike the glyph form produced
    /// by `Display`.
    #[must_use]
    pub fn code(&self) -> String {
        alloc::format!("{}{}", self.rank.token(), self.suit.code())
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses notation like `AS` (Ace of Spades) or `10h` (Ten of Hearts).
    ///
    /// Input is trimmed and matched case-insensitively. The final character
    /// selects the suit; the remaining prefix selects the rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let Some(suit_char) = chars.next_back() else {
            return Err(ParseCardError::InvalidFormat);
        };
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(ParseCardError::InvalidFormat);
        }

        let suit = Suit::from_code(suit_char).ok_or(ParseCardError::InvalidSuit(suit_char))?;
        let rank = Rank::from_token(rank_str).ok_or(ParseCardError::InvalidRank)?;

        Ok(Self::new(suit, rank))
    }
}
