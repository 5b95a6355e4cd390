//! Deals a Seven Poker hand and prints it.

use pokerdeck::Deck;

fn main() {
    let mut deck = Deck::new(true);

    let mut hand = deck.draw_many(7).expect("a fresh deck has 52 cards");
    hand.sort();

    println!("Your hand ({} cards left in the deck):", deck.remaining());
    for card in &hand {
        println!("  {card}  [{}]", card.code());
    }
}
