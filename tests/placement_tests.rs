//! Placement rule tests.
//!
//! These tests exercise the rule engine against the real slot tables:
//! - Base rule (character, generation, unit)
//! - Generic free/friend slots
//! - Each named exception, including the first-match-decides ordering

use rhythm_deck::cards::{Card, CardId, Rarity};
use rhythm_deck::roster::{Generation, Unit};
use rhythm_deck::rules::{
    ExceptionRule, GroupMatch, PlacementCondition, PlacementRuleEngine, PlacementRules,
    RuleTrigger, STANDARD_RULES,
};
use rhythm_deck::topology::{DeckType, SlotAssignment, SlotId, SlotRole};

fn card(name: &str, rarity: Rarity) -> Card {
    Card::new(CardId::new(1), name, rarity)
}

fn reason(engine: &PlacementRuleEngine, card: &Card, slot: u16, deck_type: DeckType) -> String {
    let placement = engine.can_place(card, SlotId::new(slot), deck_type);
    assert!(!placement.allowed, "{} unexpectedly allowed in slot {slot}", card.character_name);
    placement.reason.unwrap_or_default()
}

/// Every character slot accepts a card of its own character.
#[test]
fn test_own_character_always_allowed() {
    let engine = PlacementRuleEngine::new();

    for deck_type in DeckType::ALL {
        for entry in deck_type.topology() {
            if let SlotAssignment::Character(name) = entry.assignment {
                for rarity in [Rarity::Rare, Rarity::SuperRare, Rarity::UltraRare, Rarity::Legend] {
                    let placement = engine.can_place(&card(name, rarity), entry.id, deck_type);
                    assert!(placement.allowed, "{deck_type} {}: {name} {rarity}", entry.id);
                }
            }
        }
    }
}

/// Free and friend slots accept anything, even unknown characters.
#[test]
fn test_generic_slots_accept_any_card() {
    let engine = PlacementRuleEngine::new();
    let cards = [
        card("Aiko Hoshino", Rarity::Rare),
        card("Izumi Katsuragi", Rarity::Legend),
        card("Nana Fujii & Ayane Sakaki", Rarity::SuperRare),
        card("Somebody Else", Rarity::UltraRare),
    ];

    for deck_type in DeckType::ALL {
        for entry in deck_type.topology().iter().filter(|e| e.assignment.is_generic()) {
            for c in &cards {
                assert!(engine.can_place(c, entry.id, deck_type).allowed);
            }
        }
    }
}

/// Year1: slot 0 is Aiko's main, slot 1 Aiko's side.
#[test]
fn test_base_rule_scenario() {
    let engine = PlacementRuleEngine::new();

    assert!(engine
        .can_place(&card("Aiko Hoshino", Rarity::Rare), SlotId::new(1), DeckType::Year1)
        .allowed);

    let why = reason(&engine, &card("Yui Amano", Rarity::Rare), 0, DeckType::Year1);
    assert!(why.contains("Aiko Hoshino"), "{why}");
}

/// 2nd generation LR cards reach side slots of adjacent generations.
///
/// Year2 slots: Nana Fujii (3rd, Nocturne) main 12, side 13.
/// Year3 slots: Emi Sakuraba (4th, Aurora) side 13.
#[test]
fn test_second_gen_legend_exception() {
    let engine = PlacementRuleEngine::new();
    let legend = card("Yui Amano", Rarity::Legend);

    assert!(engine.can_place(&legend, SlotId::new(13), DeckType::Year2).allowed);

    let main = reason(&engine, &legend, 12, DeckType::Year2);
    assert_eq!(main, STANDARD_RULES[0].reason);

    let fourth = reason(&engine, &legend, 13, DeckType::Year3);
    assert_eq!(fourth, STANDARD_RULES[0].reason);

    // Below top rarity there is no exception
    let ultra = card("Yui Amano", Rarity::UltraRare);
    let why = reason(&engine, &ultra, 13, DeckType::Year2);
    assert!(why.contains("Nana Fujii"), "{why}");
}

/// The guest only fits side slots of the 3rd and 4th generation.
#[test]
fn test_guest_exception() {
    let engine = PlacementRuleEngine::new();
    let izumi = card("Izumi Katsuragi", Rarity::SuperRare);

    // Year3: Kokoro (3rd) main 0, side 1; Emi (4th) side 14
    assert!(engine.can_place(&izumi, SlotId::new(1), DeckType::Year3).allowed);
    assert!(engine.can_place(&izumi, SlotId::new(14), DeckType::Year3).allowed);
    assert_eq!(reason(&engine, &izumi, 0, DeckType::Year3), STANDARD_RULES[1].reason);

    // Year2: Hana (2nd) side 1
    assert_eq!(reason(&engine, &izumi, 1, DeckType::Year2), STANDARD_RULES[1].reason);

    // Her own slots in the featuring deck (main 9) follow the base rule
    assert!(engine.can_place(&izumi, SlotId::new(9), DeckType::Year3FeatIzumi).allowed);
}

/// 3rd generation duo cards reach side slots of the 2nd to 4th generation.
#[test]
fn test_third_gen_duo_exception() {
    let engine = PlacementRuleEngine::new();
    let duo = card("Kokoro Ishida & Tsubaki Mori", Rarity::UltraRare);

    // Year2: Hana (2nd, Aurora) main 0, side 1
    assert!(engine.can_place(&duo, SlotId::new(1), DeckType::Year2).allowed);
    assert_eq!(reason(&engine, &duo, 0, DeckType::Year2), STANDARD_RULES[2].reason);

    // Year3: Emi (4th) side 13
    assert!(engine.can_place(&duo, SlotId::new(13), DeckType::Year3).allowed);

    // Year1: Aiko (1st) side 1
    assert_eq!(reason(&engine, &duo, 1, DeckType::Year1), STANDARD_RULES[2].reason);

    // Own generation, main included, via the base rule
    assert!(engine.can_place(&duo, SlotId::new(9), DeckType::Year2).allowed);
}

/// Nocturne duo cards spanning generations stay within Nocturne.
#[test]
fn test_nocturne_duo_exception() {
    let engine = PlacementRuleEngine::new();
    let duo = card("Mei Tachibana & Ran Oda", Rarity::SuperRare);

    // Year1: Sora (2nd, Nocturne) main 12 and side 13 via the unit match
    assert!(engine.can_place(&duo, SlotId::new(12), DeckType::Year1).allowed);
    assert!(engine.can_place(&duo, SlotId::new(13), DeckType::Year1).allowed);

    // Year1: Aiko (1st, Aurora) side 1
    assert_eq!(reason(&engine, &duo, 1, DeckType::Year1), STANDARD_RULES[3].reason);
}

/// A card matching several exceptions is decided by the first one only.
///
/// "Nana Fujii & Ayane Sakaki" is both a 3rd generation duo and a Nocturne
/// duo. The 3rd generation rule comes first, so its verdict and reason win.
#[test]
fn test_first_matching_exception_is_decisive() {
    let engine = PlacementRuleEngine::new();
    let duo = card("Nana Fujii & Ayane Sakaki", Rarity::SuperRare);

    let why = reason(&engine, &duo, 1, DeckType::Year1);
    assert_eq!(why, STANDARD_RULES[2].reason);
    assert_ne!(why, STANDARD_RULES[3].reason);
}

/// A later rule that would admit the card is never consulted.
#[test]
fn test_short_circuit_blocks_later_admitting_rule() {
    const NARROW: ExceptionRule = ExceptionRule {
        name: "third-gen-duo-narrow",
        trigger: RuleTrigger::Composite(GroupMatch::Generation(Generation::Third)),
        placement: PlacementCondition {
            roles: &[SlotRole::Side],
            generations: &[Generation::Second],
            units: &[],
        },
        reason: "narrow",
    };
    const WIDE: ExceptionRule = ExceptionRule {
        name: "nocturne-duo-wide",
        trigger: RuleTrigger::Composite(GroupMatch::Unit(Unit::Nocturne)),
        placement: PlacementCondition {
            roles: &[SlotRole::Side],
            generations: &[],
            units: &[Unit::Aurora],
        },
        reason: "wide",
    };
    static RULES: &[ExceptionRule] = &[NARROW, WIDE];
    static FLIPPED: &[ExceptionRule] = &[WIDE, NARROW];

    let engine = PlacementRuleEngine::with_rules(RULES);
    let duo = card("Nana Fujii & Ayane Sakaki", Rarity::SuperRare);

    // Year1 slot 1 is an Aurora side slot: "wide" would admit it
    assert_eq!(reason(&engine, &duo, 1, DeckType::Year1), "narrow");

    // With the order flipped the same card is admitted
    let flipped = PlacementRuleEngine::with_rules(FLIPPED);
    assert!(flipped.can_place(&duo, SlotId::new(1), DeckType::Year1).allowed);
}

/// Unknown slots are never allowed.
#[test]
fn test_invalid_slot_rejected() {
    let engine = PlacementRuleEngine::new();
    let why = reason(&engine, &card("Aiko Hoshino", Rarity::Rare), 1000, DeckType::Year1);
    assert!(why.contains("invalid slot"));
}

/// Eligible slots list exactly where a card may go.
#[test]
fn test_eligible_slots_for_guest() {
    let engine = PlacementRuleEngine::new();
    let izumi = card("Izumi Katsuragi", Rarity::Rare);

    let slots = engine.eligible_slots(&izumi, DeckType::Year3);

    // 7 character clusters x 2 sides, 3 free slots, 1 friend slot
    assert_eq!(slots.len(), 18);
    for slot in &slots {
        let entry = DeckType::Year3.entry(*slot).unwrap();
        assert!(entry.role == SlotRole::Side || entry.assignment.is_generic());
    }
}

/// Candidate filtering applies the rules to catalog search results.
#[test]
fn test_filter_candidates() {
    let engine = PlacementRuleEngine::new();
    let candidates = vec![
        Card::new(CardId::new(1), "Aiko Hoshino", Rarity::Rare),
        Card::new(CardId::new(2), "Rin Kasuga", Rarity::Rare),
        Card::new(CardId::new(3), "Sora Takeda", Rarity::Rare),
        Card::new(CardId::new(4), "Hana Mizuki", Rarity::Rare),
    ];

    // Year1 slot 0: Aiko (1st, Aurora)
    let fits = engine.filter_candidates(&candidates, SlotId::new(0), DeckType::Year1);
    let ids: Vec<_> = fits.iter().map(|c| c.id.raw()).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}
