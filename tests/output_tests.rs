//! Output contract tests.
//!
//! The rendered text is consumed by an Alloy model, so the spellings here
//! are asserted character-for-character, including the join tokens and the
//! trailing space on the declaration line.

use deal_worlds::{
    enumerate_worlds, holds_line, sig_declaration, world_atom, DealConfig, Deck,
};

#[test]
fn test_single_card_scenario() {
    let config = DealConfig::new().with_quota("A", 1);
    let worlds = enumerate_worlds(&Deck::sequential(1), &config).unwrap();

    assert_eq!(worlds.len(), 1);
    assert_eq!(world_atom(&worlds[0]), "World_1");
    assert_eq!(holds_line(&worlds[0]), "World_1.holds = A-holds-Card1");
    assert_eq!(sig_declaration(&worlds), "one sig World_1 extends World ");
}

#[test]
fn test_two_card_scenario_order() {
    let config = DealConfig::new().with_quota("A", 1).with_quota("B", 1);
    let worlds = enumerate_worlds(&Deck::sequential(2), &config).unwrap();

    let atoms: Vec<_> = worlds.iter().map(world_atom).collect();
    assert_eq!(atoms, ["World_1_2", "World_2_1"]);

    assert_eq!(
        holds_line(&worlds[0]),
        "World_1_2.holds = A-holds-Card1 + B-holds-Card2"
    );
    assert_eq!(
        holds_line(&worlds[1]),
        "World_2_1.holds = A-holds-Card2 + B-holds-Card1"
    );
}

#[test]
fn test_reference_first_world() {
    let worlds = enumerate_worlds(&Deck::sequential(7), &DealConfig::reference()).unwrap();

    // A draws first from the full pool, so the first world gives A card 1,
    // B the next three, C the rest.
    assert_eq!(world_atom(&worlds[0]), "World_1_234_567");
    assert_eq!(
        holds_line(&worlds[0]),
        "World_1_234_567.holds = A-holds-Card1 + \
         B-holds-Card2+B-holds-Card3+B-holds-Card4 + \
         C-holds-Card5+C-holds-Card6+C-holds-Card7"
    );
}

#[test]
fn test_reference_last_world() {
    let worlds = enumerate_worlds(&Deck::sequential(7), &DealConfig::reference()).unwrap();

    assert_eq!(world_atom(worlds.last().unwrap()), "World_7_456_123");
}

#[test]
fn test_reference_declaration_shape() {
    let worlds = enumerate_worlds(&Deck::sequential(7), &DealConfig::reference()).unwrap();
    let declaration = sig_declaration(&worlds);

    assert!(declaration.starts_with("one sig World_1_234_567,World_1_235_467,"));
    assert!(declaration.ends_with(",World_7_456_123 extends World "));
    assert_eq!(declaration.matches("World_").count(), 140);
}
