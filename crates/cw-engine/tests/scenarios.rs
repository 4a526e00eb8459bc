//! End-to-end turn scenarios against the built-in world content.

use std::collections::BTreeSet;

use cw_core::content;
use cw_engine::{GameSession, NarrationRequest, SessionSeed, Vocabulary};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fresh_session() -> GameSession {
    GameSession::new(
        SessionSeed::fresh(),
        Vocabulary::standard(),
        StdRng::seed_from_u64(7),
    )
    .expect("session constructs")
}

fn seeded_session(seed: SessionSeed) -> GameSession {
    GameSession::new(seed, Vocabulary::standard(), StdRng::seed_from_u64(7))
        .expect("session constructs")
}

#[test]
fn fresh_look_shows_starting_room_and_tool() {
    let mut session = fresh_session();
    let outcome = session.process_turn("look");
    assert!(outcome.message.contains("Cave Entrance"));
    assert!(outcome.message.contains("pickaxe"));
    assert!(outcome.narration.is_none());
}

#[test]
fn gated_exit_blocks_until_cleared_whatever_the_alias() {
    for input in ["go east", "east", "e"] {
        let mut session = fresh_session();
        let outcome = session.process_turn(input);
        assert!(
            outcome.message.contains("blocked by a pile of rubble"),
            "input {input:?} was not gated: {}",
            outcome.message
        );
        assert_eq!(session.character().current_location_id, "entry_cave");
    }
}

#[test]
fn gate_hint_changes_once_the_tool_is_held() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    let outcome = session.process_turn("go east");
    assert!(outcome.message.contains("Perhaps you could use it"));
    assert_eq!(session.character().current_location_id, "entry_cave");
}

#[test]
fn clearing_the_blockage_records_one_modification() {
    let mut session = fresh_session();

    let outcome = session.process_turn("get pickaxe");
    assert!(outcome.message.contains("You take the pickaxe."));
    // Picking up the tool also completes the tutorial quest.
    assert!(outcome.message.contains("Quest Completed: Retrieve the Tool! (+25 XP)"));
    assert!(session.tutorial().pickaxe_taken);
    // Drain the pickup's own persistence record.
    session.take_pending_modifications();

    let outcome = session.process_turn("use pickaxe on rubble");
    assert!(outcome.message.contains("the rubble blocking the exit crumbles"));
    assert!(session.tutorial().pickaxe_taken);
    assert!(session.tutorial().blockage_cleared);

    let records = session.take_pending_modifications();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location_id, "entry_cave");
    assert_eq!(records[0].kind, "replace_description");
    assert!(records[0].payload.contains(content::BLOCKAGE_CLEARED_SENTENCE));
}

#[test]
fn clearing_twice_is_idempotent() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    session.process_turn("use pickaxe on rubble");
    session.take_pending_modifications();

    let outcome = session.process_turn("use pickaxe on rubble");
    assert!(outcome.message.contains("already cleared"));
    assert!(session.take_pending_modifications().is_empty());
}

#[test]
fn cleared_gate_allows_movement() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    session.process_turn("use pickaxe on rubble");

    let outcome = session.process_turn("go east");
    assert!(outcome.message.contains("Narrow Corridor"));
    assert_eq!(session.character().current_location_id, "narrow_corridor");
}

#[test]
fn look_description_tracks_tutorial_stage() {
    let mut session = fresh_session();

    let before = session.process_turn("look").message;
    assert!(before.contains("is blocked by a pile of rubble"));

    session.process_turn("get pickaxe");
    let hinted = session.process_turn("look").message;
    assert!(hinted.contains("Maybe the pickaxe could clear the rubble?"));

    session.process_turn("use pickaxe on rubble");
    let cleared = session.process_turn("look").message;
    assert!(cleared.contains(content::BLOCKAGE_CLEARED_SENTENCE));
    assert!(!cleared.contains("Maybe the pickaxe"));
}

#[test]
fn wrong_tutorial_target_gets_specific_feedback() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    let outcome = session.process_turn("use pickaxe on wall");
    assert!(
        outcome
            .message
            .contains("Using the pickaxe on the wall doesn't seem to do anything useful here.")
    );
    assert!(!session.tutorial().blockage_cleared);
}

#[test]
fn flavor_verb_narrates_and_is_tracked_separately() {
    let mut session = fresh_session();
    let outcome = session.process_turn("xyzzy");
    assert!(outcome.message.contains("You attempt to xyzzy..."));
    assert!(matches!(
        outcome.narration,
        Some(NarrationRequest::Flavor { ref command, .. }) if command == "xyzzy"
    ));
    // Flavor verbs never raise the turn-level discovery flag.
    assert!(!outcome.newly_discovered);
    assert!(session.discovered_flavor_verbs().contains("xyzzy"));
    assert!(session.discovered_actions().is_empty());
}

#[test]
fn has_item_quest_completes_on_a_neutral_trigger() {
    let mut character = content::starting_character();
    character.add_item("shiny button");
    let xp_before = character.xp;
    let mut session = seeded_session(SessionSeed {
        character: Some(character),
        ..SessionSeed::fresh()
    });

    // "look" is on the exemption list and must not complete the quest.
    let outcome = session.process_turn("look");
    assert!(!outcome.message.contains("Quest Completed"));

    // "wave" is not exempt; the pending completion fires now.
    let outcome = session.process_turn("wave");
    assert!(outcome.message.contains("Quest Completed: A Glimmer in the Filth! (+20 XP)"));
    assert_eq!(session.character().xp, xp_before + 20);
    assert!(!session.character().has_quest("find_button"));
}

#[test]
fn at_most_one_quest_completes_per_turn() {
    let mut character = content::starting_character();
    character.add_item("shiny button");
    character.add_item("iron key");
    let mut session = seeded_session(SessionSeed {
        character: Some(character),
        ..SessionSeed::fresh()
    });

    let first = session.process_turn("wave");
    assert!(first.message.contains("A Glimmer in the Filth"));
    assert!(!first.message.contains("The Chieftain's Key"));

    let second = session.process_turn("wave");
    assert!(second.message.contains("The Chieftain's Key"));
}

#[test]
fn discovery_flag_fires_exactly_once_per_verb() {
    let mut session = fresh_session();

    let first = session.process_turn("look");
    assert!(first.newly_discovered);
    assert_eq!(first.discovered_verb.as_deref(), Some("look"));

    let again = session.process_turn("look");
    assert!(!again.newly_discovered);
    assert_eq!(again.discovered_verb, None);

    // Aliases discover their canonical verb.
    let inv = session.process_turn("i");
    assert!(inv.newly_discovered);
    assert_eq!(inv.discovered_verb.as_deref(), Some("inventory"));

    let persisted: BTreeSet<String> = session.discovered_actions().clone();
    assert!(persisted.contains("look"));
    assert!(persisted.contains("inventory"));
}

#[test]
fn resumed_sessions_do_not_rediscover() {
    let discovered: BTreeSet<String> = ["look".to_string()].into();
    let mut session = seeded_session(SessionSeed {
        discovered_actions: discovered,
        ..SessionSeed::fresh()
    });
    let outcome = session.process_turn("look");
    assert!(!outcome.newly_discovered);
}

#[test]
fn get_and_drop_round_trip_with_persistence_records() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    let records = session.take_pending_modifications();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, "remove_item");
    assert_eq!(records[0].payload, "pickaxe");

    let outcome = session.process_turn("drop pickaxe");
    assert!(outcome.message.contains("You drop the pickaxe."));
    let records = session.take_pending_modifications();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, "add_item");
    assert!(records[0].payload.contains("lying on the ground"));
    assert!(session.current_location().expect("room").find_item("pickaxe").is_some());
}

#[test]
fn ungettable_items_are_refused() {
    let mut session = fresh_session();
    let outcome = session.process_turn("get rubble");
    assert!(outcome.message.contains("You can't take the"));
    assert!(session.character().inventory.is_empty());
}

#[test]
fn talk_carries_dialogue_in_the_narration_request() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    session.process_turn("use pickaxe on rubble");
    session.process_turn("go east");
    session.process_turn("go east");
    assert_eq!(session.character().current_location_id, "goblin_chamber");

    let outcome = session.process_turn("talk goblin");
    assert!(outcome.message.contains("You approach the goblin..."));
    assert!(matches!(
        outcome.narration,
        Some(NarrationRequest::Talk { ref dialogue, .. }) if dialogue.contains("This my cave!")
    ));
}

#[test]
fn attack_rolls_a_stateless_outcome() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    session.process_turn("use pickaxe on rubble");
    session.process_turn("go east");
    session.process_turn("go east");

    let outcome = session.process_turn("attack goblin");
    assert!(outcome.message.contains("You attempt to attack the"));
    match outcome.narration {
        Some(NarrationRequest::Attack { hit, damage, .. }) => {
            assert_eq!(damage, if hit { 5 } else { 0 });
        }
        other => panic!("expected attack narration, got {other:?}"),
    }
    // No NPC state is tracked; the goblin is still there.
    assert!(
        session
            .current_location()
            .expect("room")
            .find_npc("goblin")
            .is_some()
    );
}

#[test]
fn skill_check_packages_the_arithmetic() {
    let mut session = fresh_session();
    let outcome = session.process_turn("check perception");
    assert!(outcome.message.contains("You focus, attempting a perception check..."));
    match outcome.narration {
        Some(NarrationRequest::SkillCheck {
            roll,
            value,
            dc,
            success,
            ..
        }) => {
            assert!((1..=10).contains(&roll));
            assert_eq!(value, 1);
            assert_eq!(dc, 7);
            assert_eq!(success, roll + value >= dc);
        }
        other => panic!("expected skill check narration, got {other:?}"),
    }
}

#[test]
fn use_without_target_prompts_with_the_item_name() {
    let mut session = fresh_session();
    session.process_turn("get pickaxe");
    let outcome = session.process_turn("use pickaxe");
    assert_eq!(outcome.message, "Use pickaxe on what?");
}

#[test]
fn modifications_replay_onto_fresh_content() {
    let mut first = fresh_session();
    first.process_turn("get pickaxe");
    first.process_turn("use pickaxe on rubble");
    let records = first.take_pending_modifications();

    let mut resumed = seeded_session(SessionSeed {
        character: Some(first.character().clone()),
        pickaxe_taken: true,
        blockage_cleared: true,
        ..SessionSeed::fresh()
    });
    resumed.apply_modifications(&records);

    let room = &resumed.locations()["entry_cave"];
    assert!(room.find_item("pickaxe").is_none(), "pickup was replayed");
    assert!(room.description.contains(content::BLOCKAGE_CLEARED_SENTENCE));

    // Unknown kinds are skipped, not fatal.
    let odd = cw_core::ModificationRecord::new("entry_cave", "repaint_walls", "teal");
    resumed.apply_modifications(&[odd]);
}

#[test]
fn missing_exits_never_move_the_character() {
    let mut session = fresh_session();
    let outcome = session.process_turn("go north");
    assert!(outcome.message.contains("You can't go north from here."));
    assert_eq!(session.character().current_location_id, "entry_cave");

    let outcome = session.process_turn("go");
    assert!(outcome.message.contains("Go where?"));
    assert_eq!(session.character().current_location_id, "entry_cave");
}

#[test]
fn read_only_verbs_report_without_side_effects() {
    let mut session = fresh_session();

    let status = session.process_turn("status").message;
    assert!(status.contains("Name: Hero"));
    assert!(status.contains("Level: 1"));
    assert!(status.contains("HP: 20 / 20"));
    assert!(status.contains("Location: Cave Entrance"));

    let quests = session.process_turn("quests").message;
    assert!(quests.contains("Retrieve the Tool"));
    assert!(quests.contains("Hazardous Reconnaissance"));

    let inventory = session.process_turn("inventory").message;
    assert_eq!(inventory, "Your inventory is empty.");
}

#[test]
fn open_sesame_is_a_narrate_only_incantation() {
    let mut session = fresh_session();
    let outcome = session.process_turn("open sesame");
    assert!(outcome.message.contains("You attempt to sesame..."));
    assert!(session.discovered_flavor_verbs().contains("sesame"));
}
