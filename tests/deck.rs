//! Deck behavior tests.

use std::collections::HashSet;

use pokerdeck::{Card, DECK_SIZE, Deck, DrawError, DrawManyError, Rank, Suit};

fn full_cross_product() -> HashSet<Card> {
    let mut cards = HashSet::new();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.insert(Card::new(suit, rank));
        }
    }
    cards
}

#[test]
fn fresh_deck_holds_all_52_cards_in_canonical_order() {
    let deck = Deck::with_seed(false, 0);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique, full_cross_product());

    // Canonical order: suits ascending, ranks ascending within each suit,
    // so the bottom is 2 of Clubs and the top is the Ace of Spades.
    assert_eq!(deck.cards()[0], Card::new(Suit::Club, Rank::Two));
    assert_eq!(deck.cards()[12], Card::new(Suit::Club, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Heart, Rank::Two));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spade, Rank::Ace));
}

#[test]
fn draw_removes_the_top_card() {
    let mut deck = Deck::with_seed(false, 0);

    let card = deck.draw().unwrap();
    assert_eq!(card, Card::new(Suit::Spade, Rank::Ace));
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
    assert!(!deck.iter().any(|&c| c == card));
}

#[test]
fn drawing_past_empty_fails() {
    let mut deck = Deck::with_seed(true, 5);
    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn draw_many_matches_sequential_draws() {
    let mut many = Deck::with_seed(true, 7);
    let mut single = Deck::with_seed(true, 7);

    let drawn = many.draw_many(5).unwrap();
    assert_eq!(drawn.len(), 5);
    assert_eq!(many.remaining(), DECK_SIZE - 5);

    for card in &drawn {
        assert_eq!(*card, single.draw().unwrap());
    }

    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    for card in &drawn {
        assert!(!many.iter().any(|c| c == card));
    }
}

#[test]
fn draw_many_zero_is_a_no_op() {
    let mut deck = Deck::with_seed(true, 1);
    let before: Vec<Card> = deck.iter().copied().collect();

    assert_eq!(deck.draw_many(0).unwrap(), Vec::new());
    assert_eq!(deck.cards(), before.as_slice());
}

#[test]
fn draw_many_overflow_reports_counts_and_leaves_deck_unchanged() {
    let mut deck = Deck::with_seed(false, 0);
    let before: Vec<Card> = deck.iter().copied().collect();

    assert_eq!(
        deck.draw_many(53).unwrap_err(),
        DrawManyError::InsufficientCards {
            requested: 53,
            remaining: 52,
        }
    );
    assert_eq!(deck.cards(), before.as_slice());

    deck.draw_many(50).unwrap();
    let err = deck.draw_many(5).unwrap_err();
    assert_eq!(
        err,
        DrawManyError::InsufficientCards {
            requested: 5,
            remaining: 2,
        }
    );
    assert!(err.to_string().contains('5'));
    assert!(err.to_string().contains('2'));
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn peek_matches_draw_many_without_mutating() {
    let mut deck = Deck::with_seed(true, 11);

    let peeked = deck.peek(3).unwrap();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let drawn = deck.draw_many(3).unwrap();
    assert_eq!(peeked, drawn);
    assert_eq!(deck.remaining(), DECK_SIZE - 3);
}

#[test]
fn peek_overflow_fails_like_draw_many() {
    let deck = Deck::with_seed(false, 0);
    assert_eq!(
        deck.peek(53).unwrap_err(),
        DrawManyError::InsufficientCards {
            requested: 53,
            remaining: 52,
        }
    );
    assert_eq!(deck.peek(0).unwrap(), Vec::new());
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let mut deck = Deck::with_seed(false, 3);
    let before: HashSet<Card> = deck.iter().copied().collect();

    deck.shuffle();

    let after: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(before, after);
}

#[test]
fn shuffle_of_partial_deck_keeps_remaining_cards() {
    let mut deck = Deck::with_seed(true, 13);
    deck.draw_many(10).unwrap();
    let before: HashSet<Card> = deck.iter().copied().collect();

    deck.shuffle();

    let after: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(deck.remaining(), DECK_SIZE - 10);
    assert_eq!(before, after);
}

#[test]
fn same_seed_shuffles_identically() {
    let a = Deck::with_seed(true, 42);
    let b = Deck::with_seed(true, 42);
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn fresh_shuffled_decks_produce_distinct_orderings() {
    let orderings: HashSet<Vec<Card>> = (0..10)
        .map(|_| Deck::new(true).iter().copied().collect())
        .collect();
    assert!(orderings.len() > 1);
}

#[test]
fn reset_restores_full_coverage_after_draining() {
    let mut deck = Deck::with_seed(true, 9);
    deck.draw_many(20).unwrap();
    assert_eq!(deck.remaining(), DECK_SIZE - 20);

    deck.reset(false);

    assert_eq!(deck.remaining(), DECK_SIZE);
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique, full_cross_product());
    // Unshuffled reset returns to canonical order.
    assert_eq!(deck.cards()[51], Card::new(Suit::Spade, Rank::Ace));
}

#[test]
fn reset_with_shuffle_refills_to_52() {
    let mut deck = Deck::with_seed(false, 2);
    while deck.draw().is_ok() {}

    deck.reset(true);

    assert_eq!(deck.remaining(), DECK_SIZE);
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn iteration_reflects_current_state() {
    let mut deck = Deck::with_seed(true, 4);
    assert_eq!(deck.iter().count(), DECK_SIZE);
    assert_eq!((&deck).into_iter().count(), DECK_SIZE);

    deck.draw_many(2).unwrap();
    assert_eq!(deck.iter().count(), DECK_SIZE - 2);

    let snapshot: Vec<Card> = deck.iter().copied().collect();
    assert_eq!(snapshot.as_slice(), deck.cards());
}

#[test]
fn default_deck_is_full() {
    let deck = Deck::default();
    assert_eq!(deck.remaining(), DECK_SIZE);
}
