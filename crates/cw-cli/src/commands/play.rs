//! The interactive play loop: one session, one turn per input line, saved
//! after every turn.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use cw_engine::{
    GameSession, NarrationContext, NarrationRequest, Narrator, TemplateNarrator, Vocabulary,
};
use cw_store::{SaveStore, SavedSession};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run the play loop until the player quits or input ends.
pub fn run(data_dir: &Path, character_id: &str, seed_value: Option<u64>) -> Result<(), String> {
    let (store, seed) = super::load_seed(data_dir, character_id)?;
    let rng = match seed_value {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_os_rng(),
    };
    let mut session =
        GameSession::new(seed, Vocabulary::standard(), rng).map_err(|e| e.to_string())?;
    let modifications = store
        .load_location_modifications(character_id)
        .map_err(|e| e.to_string())?;
    session.apply_modifications(&modifications);

    let narrator = TemplateNarrator::new();

    println!("{}", "Caveward".bold());
    println!("Type 'look' to get your bearings, 'quit' to leave.\n");

    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let outcome = session.process_turn(input);

        // A first-time discovery overrides whatever the handler wanted
        // narrated; the narrator celebrates the new verb instead.
        let request = if outcome.newly_discovered {
            outcome.discovered_verb.as_deref().map(NarrationRequest::discovery)
        } else {
            outcome.narration.clone()
        };

        println!("{}", outcome.message);
        if let Some(request) = request {
            let context = NarrationContext::assemble(&session, request, input);
            println!("{}", narrator.narrate(&context).italic());
        }
        println!();

        store
            .save(character_id, &saved_state(&session))
            .map_err(|e| e.to_string())?;
        for record in session.take_pending_modifications() {
            store
                .record_location_modification(character_id, &record)
                .map_err(|e| e.to_string())?;
        }

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
    }

    println!("Goodbye!");
    Ok(())
}

fn saved_state(session: &GameSession) -> SavedSession {
    SavedSession {
        character: session.character().clone(),
        discovered_actions: session.discovered_actions().clone(),
        discovered_flavor_verbs: session.discovered_flavor_verbs().clone(),
        pickaxe_taken: session.tutorial().pickaxe_taken,
        blockage_cleared: session.tutorial().blockage_cleared,
    }
}
