//! Table integration tests.

#![allow(clippy::float_cmp)]

use eqrs::{
    Card, Combination, DECK_SIZE, DealError, Favorite, MAX_PLAYERS, Rank, Street, Suit, Table,
    TableOptions, binomial,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn table_from_draws(options: TableOptions, draws: &[Card]) -> Table {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    Table::with_deck(options, deck)
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_players(6)
        .with_burn_cards(false)
        .with_parallel(true);

    assert_eq!(options.players, 6);
    assert!(!options.burn_cards);
    assert!(options.parallel);

    let defaults = TableOptions::default();
    assert_eq!(defaults.players, 3);
    assert!(defaults.burn_cards);
}

#[test]
fn full_hand_flow() {
    let table = Table::new(TableOptions::default(), 42);
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(table.street(), None);

    let ids = table.deal_hole_cards().unwrap();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(table.cards_remaining(), 46);
    assert_eq!(table.street(), Some(Street::Preflop));
    let names: Vec<String> = table.players().iter().map(|p| p.name().to_string()).collect();
    assert_eq!(names, ["1", "2", "3"]);

    assert_eq!(table.analyze().unwrap_err(), DealError::InvalidState);

    let flop = table.advance().unwrap();
    assert_eq!(flop.len(), 3);
    assert_eq!(table.burned().len(), 1);
    assert_eq!(table.cards_remaining(), 42);

    let report = table.analyze().unwrap();
    assert_eq!(report.street, Street::Flop);
    assert_eq!(report.board, flop);
    for equity in &report.players {
        assert_eq!(equity.stats.possibilities, binomial(42, 2));
        assert_eq!(equity.stats.categories.total(), equity.stats.possibilities);
        assert!(equity.win + equity.draw <= 1.0);
    }
    assert!(report.to_string().contains("Flop"));

    let turn = table.advance().unwrap();
    assert_eq!(turn.len(), 1);
    assert_eq!(table.board().len(), 4);
    assert_eq!(table.cards_remaining(), 40);
    let report = table.analyze().unwrap();
    assert!(report.players.iter().all(|p| p.stats.possibilities == 40));

    table.advance().unwrap();
    assert_eq!(table.street(), Some(Street::River));
    assert_eq!(table.burned().len(), 3);
    assert_eq!(table.cards_remaining(), 38);
    let report = table.analyze().unwrap();
    assert!(report.players.iter().all(|p| p.stats.possibilities == 1));
    assert!(report.favorite().is_some());

    assert_eq!(table.advance().unwrap_err(), DealError::InvalidState);
}

#[test]
fn replayed_hand_draws_on_category() {
    let options = TableOptions::default()
        .with_players(2)
        .with_burn_cards(false);
    let table = table_from_draws(
        options,
        &[
            card(Rank::Ace, Suit::Clubs),   // player 1
            card(Rank::King, Suit::Clubs),  // player 2
            card(Rank::Ace, Suit::Diamonds), // player 1
            card(Rank::King, Suit::Diamonds), // player 2
            card(Rank::Ace, Suit::Hearts),  // flop
            card(Rank::King, Suit::Hearts), // flop
            card(Rank::Two, Suit::Clubs),   // flop
            card(Rank::Two, Suit::Diamonds), // turn
            card(Rank::Two, Suit::Hearts),  // river
        ],
    );

    table.deal_hole_cards().unwrap();
    let players = table.players();
    assert_eq!(
        players[0].hole(),
        [card(Rank::Ace, Suit::Clubs), card(Rank::Ace, Suit::Diamonds)]
    );
    assert_eq!(
        players[1].hole(),
        [card(Rank::King, Suit::Clubs), card(Rank::King, Suit::Diamonds)]
    );

    // two cards left, so the flop has a single completion
    table.advance().unwrap();
    let report = table.analyze().unwrap();
    for equity in &report.players {
        assert_eq!(equity.stats.possibilities, 1);
        assert_eq!(equity.stats.draws, 1);
        assert_eq!(equity.best, Some(Combination::FullHouse));
        assert_eq!(equity.most_likely, Some(Combination::FullHouse));
    }
    assert_eq!(report.favorite(), Some(Favorite::Draw(vec![0, 1])));

    table.advance().unwrap();
    table.advance().unwrap();
    let report = table.analyze().unwrap();
    assert_eq!(report.board.len(), 5);
    assert!(report.burned.is_empty());
    assert_eq!(report.favorite(), Some(Favorite::Draw(vec![0, 1])));
}

#[test]
fn replayed_hand_with_outright_winner() {
    let options = TableOptions::default()
        .with_players(2)
        .with_burn_cards(false);
    let table = table_from_draws(
        options,
        &[
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Seven, Suit::Spades),
            card(Rank::King, Suit::Spades),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Jack, Suit::Diamonds),
        ],
    );

    table.deal_hole_cards().unwrap();
    table.advance().unwrap();
    table.advance().unwrap();
    table.advance().unwrap();
    let report = table.analyze().unwrap();

    assert_eq!(report.favorite(), Some(Favorite::Winner(0)));
    assert_eq!(report.players[0].win, 1.0);
    assert_eq!(report.players[1].stats.wins, 0);
}

#[test]
fn deal_errors() {
    let table = Table::new(TableOptions::default().with_players(0), 1);
    assert_eq!(table.deal_hole_cards().unwrap_err(), DealError::NoPlayers);

    let table = Table::new(TableOptions::default().with_players(MAX_PLAYERS + 1), 1);
    assert_eq!(
        table.deal_hole_cards().unwrap_err(),
        DealError::TooManyPlayers
    );

    let table = Table::new(TableOptions::default(), 1);
    assert_eq!(table.advance().unwrap_err(), DealError::InvalidState);
    table.deal_hole_cards().unwrap();
    assert_eq!(table.deal_hole_cards().unwrap_err(), DealError::InvalidState);

    let short = table_from_draws(
        TableOptions::default().with_players(2),
        &[card(Rank::Ace, Suit::Clubs), card(Rank::King, Suit::Clubs)],
    );
    assert_eq!(
        short.deal_hole_cards().unwrap_err(),
        DealError::NotEnoughCards
    );
}

#[test]
fn advance_with_short_deck() {
    let table = table_from_draws(
        TableOptions::default().with_players(1),
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
        ],
    );
    table.deal_hole_cards().unwrap();
    assert_eq!(table.advance().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(table.street(), Some(Street::Preflop));
    assert_eq!(table.cards_remaining(), 2);
}

#[test]
fn full_table_reaches_the_river() {
    let table = Table::new(TableOptions::default().with_players(MAX_PLAYERS), 5);
    table.deal_hole_cards().unwrap();
    for _ in 0..3 {
        table.advance().unwrap();
    }
    assert_eq!(table.cards_remaining(), 0);

    let report = table.analyze().unwrap();
    assert_eq!(report.players.len(), usize::from(MAX_PLAYERS));
    let decided: u64 = report
        .players
        .iter()
        .map(|p| p.stats.wins + p.stats.draws)
        .sum();
    assert!(decided >= 1);
}

#[test]
fn clear_stats_and_clear_hand() {
    let table = Table::new(TableOptions::default(), 9);
    table.deal_hole_cards().unwrap();
    table.advance().unwrap();
    table.advance().unwrap();
    table.analyze().unwrap();
    assert!(table.players().iter().all(|p| p.stats().is_analyzed()));

    table.clear_stats();
    let once = table.players();
    table.clear_stats();
    assert_eq!(table.players(), once);
    assert!(once.iter().all(|p| !p.stats().is_analyzed()));

    table.clear_hand();
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(table.street(), None);
    assert!(table.players().is_empty());
    assert!(table.board().is_empty());
    assert!(table.burned().is_empty());

    let ids = table.deal_hole_cards().unwrap();
    assert_eq!(ids, vec![3, 4, 5]);
    assert!(table.get_player(3).is_some());
    assert!(table.get_player(0).is_none());
}

#[test]
fn same_seed_deals_same_hand() {
    let first = Table::new(TableOptions::default(), 1234);
    let second = Table::new(TableOptions::default(), 1234);
    first.deal_hole_cards().unwrap();
    second.deal_hole_cards().unwrap();
    assert_eq!(first.players(), second.players());
    assert_eq!(first.advance().unwrap(), second.advance().unwrap());
}

#[test]
fn player_ids_keep_increasing_across_many_hands() {
    let table = Table::new(TableOptions::default().with_players(MAX_PLAYERS), 3);
    let mut last = None;

    for hand in 0..13 {
        let ids = table.deal_hole_cards().unwrap();
        for id in ids {
            if let Some(previous) = last {
                assert!(id > previous, "hand {hand}: id {id} after {previous}");
            }
            last = Some(id);
        }
        table.clear_hand();
    }

    assert_eq!(last, Some(13 * u32::from(MAX_PLAYERS) - 1));
    let ids = table.deal_hole_cards().unwrap();
    assert_eq!(ids[0], 286);
    assert_eq!(table.get_player(286).unwrap().name(), "1");
    assert!(table.get_player(30).is_none());
}
