//! Game integration tests.

use std::collections::HashSet;

use blackjack_tui::game::BANNER_SLIDE;
use blackjack_tui::{
    Card, CardView, DECK_SIZE, EventError, Game, Hand, InputEvent, RoundStatus, Screen, Shoe, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn set_shoe_from_draws(game: &mut Game, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    game.shoe = Shoe::from_cards(deck);
}

fn game_at_table() -> Game {
    let mut game = Game::new(1);
    game.screen = Screen::Table;
    game
}

#[test]
fn fresh_shoe_has_52_unique_cards() {
    let game = Game::new(7);
    assert_eq!(game.shoe.len(), DECK_SIZE);

    let distinct: HashSet<(Suit, u8)> = game
        .shoe
        .cards()
        .iter()
        .map(|c| (c.suit, c.rank))
        .collect();
    assert_eq!(distinct.len(), DECK_SIZE);

    let ranks: HashSet<u8> = game.shoe.cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks.len(), 13);
}

#[test]
fn shuffle_is_a_permutation() {
    let a = Game::new(1);
    let b = Game::new(2);

    let set_a: HashSet<(Suit, u8)> = a.shoe.cards().iter().map(|c| (c.suit, c.rank)).collect();
    let set_b: HashSet<(Suit, u8)> = b.shoe.cards().iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(set_a, set_b);

    // Different seeds produce different orderings of the same 52 cards.
    assert_ne!(a.shoe.cards(), b.shoe.cards());
}

#[test]
fn hand_value_fixtures() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 13));
    let value = hand.value();
    assert_eq!((value.low, value.high, value.aces), (11, 21, 1));
    assert!(hand.is_blackjack());

    let mut pair_of_aces = Hand::new();
    pair_of_aces.add_card(card(Suit::Hearts, 1));
    pair_of_aces.add_card(card(Suit::Clubs, 1));
    let value = pair_of_aces.value();
    assert_eq!((value.low, value.high, value.aces), (2, 12, 2));

    let mut no_ace = Hand::new();
    no_ace.add_card(card(Suit::Hearts, 10));
    no_ace.add_card(card(Suit::Diamonds, 7));
    let value = no_ace.value();
    assert_eq!((value.low, value.high, value.aces), (17, 17, 0));
    assert_eq!(value.best_valid(), 17);
}

#[test]
fn blackjack_on_opening_deal() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 13),  // player
            card(Suit::Diamonds, 9), // dealer hole
        ],
    );

    game.deal_initial();
    assert_eq!(game.status, RoundStatus::Blackjack);

    // The blackjack counts as a win on the next tick.
    game.update();
    assert_eq!(game.wins, 1);
}

#[test]
fn hit_busts_over_21() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Spades, 5),   // player
            card(Suit::Diamonds, 3), // dealer hole
            card(Suit::Hearts, 10),  // player hit
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Hit).unwrap();
    game.update();

    assert_eq!(game.status, RoundStatus::Busted);
    assert_eq!(game.player_hand.len(), 3);
    assert_eq!(game.wins, 0);
}

#[test]
fn dealer_draws_to_seventeen_and_stops() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Spades, 8),   // player
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 5),   // dealer draw: 12 -> 17, stop
            card(Suit::Clubs, 4),    // never drawn
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Stand).unwrap();
    game.update();

    // Dealer 17 vs player 18.
    assert_eq!(game.status, RoundStatus::Win);
    assert_eq!(game.dealer_hand.len(), 3);
    assert_eq!(game.shoe.len(), 1);
}

#[test]
fn dealer_hits_soft_seventeen() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 1),    // dealer up (ace)
            card(Suit::Spades, 8),   // player
            card(Suit::Diamonds, 6), // dealer hole: soft 17
            card(Suit::Hearts, 10),  // dealer draw: hard 17, stop
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Stand).unwrap();
    game.update();

    assert_eq!(game.dealer_hand.len(), 3);
    assert_eq!(game.status, RoundStatus::Win);
}

#[test]
fn dealer_stands_on_hard_seventeen() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 8),   // player
            card(Suit::Diamonds, 7), // dealer hole: hard 17
            card(Suit::Hearts, 4),   // never drawn
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Stand).unwrap();
    game.update();

    assert_eq!(game.dealer_hand.len(), 2);
    assert_eq!(game.status, RoundStatus::Win);
}

#[test]
fn stand_comparison_reaches_each_outcome() {
    // Player 19, dealer 15 draws to 18: player wins.
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 3),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Win);
    assert_eq!(game.wins, 1);

    // Player 17, dealer 19: player loses.
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 7),
            card(Suit::Diamonds, 9),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Loss);
    assert_eq!(game.wins, 0);

    // Player 18, dealer 18: draw.
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 9),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Draw);
}

#[test]
fn dealer_bust_wins_for_player() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 8),   // player
            card(Suit::Diamonds, 6), // dealer hole: 16
            card(Suit::Hearts, 10),  // dealer draw: 26, bust
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Stand).unwrap();
    game.update();

    assert_eq!(game.status, RoundStatus::Win);
}

#[test]
fn win_counter_is_edge_triggered() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 10),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Win);
    assert_eq!(game.wins, 1);
    assert_eq!(game.banner_offset, BANNER_SLIDE);

    // Further ticks in the same status must not count again; the banner
    // keeps sliding instead.
    for _ in 0..5 {
        game.update();
    }
    assert_eq!(game.wins, 1);
    assert_eq!(game.banner_offset, BANNER_SLIDE - 5);
}

#[test]
fn play_again_below_redeal_threshold() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 8),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Win);
    assert_eq!(game.shoe.len(), 0);

    let held = game.player_hand.cards().to_vec();

    game.apply(InputEvent::PlayAgain).unwrap();
    game.update();

    // Too few cards to redeal: hands stay, the shoe is rebuilt on the same
    // tick, and the status freezes input until the next redeal.
    assert_eq!(game.status, RoundStatus::EmptyShoe);
    assert_eq!(game.player_hand.cards(), held.as_slice());
    assert_eq!(game.shoe.len(), DECK_SIZE);

    game.apply(InputEvent::PlayAgain).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Playing);
    assert_eq!(game.player_hand.len(), 2);
    assert_eq!(game.dealer_hand.len(), 2);
}

#[test]
fn empty_shoe_during_dealer_play() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 6),   // player
            card(Suit::Diamonds, 6), // dealer hole: 16, must draw
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Stand).unwrap();
    game.update();

    assert_eq!(game.status, RoundStatus::EmptyShoe);
    assert_eq!(game.shoe.len(), DECK_SIZE);
}

#[test]
fn empty_shoe_on_hit() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 6),
            card(Suit::Diamonds, 6),
        ],
    );
    game.deal_initial();

    game.apply(InputEvent::Hit).unwrap();
    game.update();

    assert_eq!(game.status, RoundStatus::EmptyShoe);
    assert_eq!(game.player_hand.len(), 2);
}

#[test]
fn redeal_does_not_check_blackjack() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            // First round: player 19 beats dealer 18.
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 8),
            // Redeal: a natural 21 for the player.
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 5),
            card(Suit::Spades, 13),
            card(Suit::Diamonds, 9),
            // Padding so the redeal threshold is met.
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 2),
            card(Suit::Diamonds, 2),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Win);

    game.apply(InputEvent::PlayAgain).unwrap();
    game.update();

    // The dealt 21 is a blackjack by shape, but the play-again path never
    // promotes it: the round stays live.
    assert!(game.player_hand.is_blackjack());
    assert_eq!(game.status, RoundStatus::Playing);
}

#[test]
fn input_frozen_after_round_over() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 5),
            card(Suit::Diamonds, 3),
            card(Suit::Hearts, 10),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Hit).unwrap();
    game.update();
    assert_eq!(game.status, RoundStatus::Busted);

    assert_eq!(game.apply(InputEvent::Hit).unwrap_err(), EventError::RoundOver);
    assert_eq!(
        game.apply(InputEvent::Stand).unwrap_err(),
        EventError::RoundOver
    );
}

#[test]
fn event_guards_reject_wrong_screen_and_phase() {
    let mut game = Game::new(3);
    assert_eq!(game.apply(InputEvent::Hit).unwrap_err(), EventError::NotAtTable);
    assert_eq!(
        game.apply(InputEvent::ReturnToTitle).unwrap_err(),
        EventError::NotAtTable
    );

    game.apply(InputEvent::Start).unwrap();
    assert_eq!(
        game.apply(InputEvent::Start).unwrap_err(),
        EventError::NotOnTitle
    );
    if game.status == RoundStatus::Playing {
        assert_eq!(
            game.apply(InputEvent::PlayAgain).unwrap_err(),
            EventError::RoundInProgress
        );
    }
}

#[test]
fn view_hides_hole_card_until_stand() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 7),
        ],
    );
    game.deal_initial();

    let view = game.view();
    assert!(matches!(view.dealer[0], CardView::FaceUp(_)));
    assert_eq!(view.dealer[1], CardView::FaceDown);
    assert!(view.player.iter().all(|c| matches!(c, CardView::FaceUp(_))));

    game.apply(InputEvent::Stand).unwrap();
    game.update();

    let view = game.view();
    assert!(view.dealer.iter().all(|c| matches!(c, CardView::FaceUp(_))));
}

#[test]
fn return_to_title_resets_session() {
    let mut game = game_at_table();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 10),
        ],
    );
    game.deal_initial();
    game.apply(InputEvent::Stand).unwrap();
    game.update();
    assert_eq!(game.wins, 1);

    game.apply(InputEvent::ReturnToTitle).unwrap();
    assert_eq!(game.screen, Screen::Title);
    assert_eq!(game.status, RoundStatus::Playing);
    assert_eq!(game.wins, 0);
    assert_eq!(game.banner_offset, 0);
}

#[test]
fn quit_sets_flag() {
    let mut game = Game::new(5);
    assert!(!game.should_quit());
    game.apply(InputEvent::Quit).unwrap();
    assert!(game.should_quit());
}

#[test]
fn start_deals_fresh_shoe_each_round() {
    let mut game = Game::new(9);
    game.apply(InputEvent::Start).unwrap();
    assert_eq!(game.screen, Screen::Table);
    assert_eq!(game.player_hand.len(), 2);
    assert_eq!(game.dealer_hand.len(), 2);
    assert_eq!(game.shoe.len(), DECK_SIZE - 4);
}
