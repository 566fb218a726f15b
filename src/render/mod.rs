//! Alloy partial-instance rendering.
//!
//! Pure, stateless string builders over enumerated worlds. The spellings
//! here are a contract with the downstream Alloy model, down to the join
//! tokens: card labels inside an atom segment are concatenated bare,
//! segments join on `_`, one participant's holds tokens join on `+`, and
//! participants' groups join on ` + `.
//!
//! Every function walks a world's holdings in stored (quota-list) order,
//! so rendering never reorders or looks anything up.

use crate::deal::World;

/// The atom naming one world, e.g. `World_1_234_567`.
#[must_use]
pub fn world_atom(world: &World) -> String {
    let segments: Vec<String> = world
        .holdings()
        .iter()
        .map(|h| h.cards.iter().map(|c| c.label()).collect())
        .collect();
    format!("World_{}", segments.join("_"))
}

/// The right-hand side of one world's holds constraint,
/// e.g. `A-holds-Card1 + B-holds-Card2+B-holds-Card3`.
#[must_use]
pub fn holds_fact(world: &World) -> String {
    let groups: Vec<String> = world
        .holdings()
        .iter()
        .map(|h| {
            h.cards
                .iter()
                .map(|c| format!("{}-holds-Card{}", h.participant, c.raw()))
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect();
    groups.join(" + ")
}

/// One complete holds line: `<atom>.holds = <fact>`.
#[must_use]
pub fn holds_line(world: &World) -> String {
    format!("{}.holds = {}", world_atom(world), holds_fact(world))
}

/// The declaration naming every world as a member of the `World` sig.
///
/// The trailing space after `extends World` is part of the consumer's
/// expected spelling.
#[must_use]
pub fn sig_declaration(worlds: &[World]) -> String {
    let atoms: Vec<String> = worlds.iter().map(world_atom).collect();
    format!("one sig {} extends World ", atoms.join(","))
}
