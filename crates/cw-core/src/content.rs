//! Built-in world content: the goblin warren, its quests, and the starting
//! character. This is static data, not a subsystem; the engine interprets
//! player commands against it.

use std::collections::HashMap;

use crate::character::Character;
use crate::error::{CoreError, CoreResult};
use crate::location::{Item, Location, LocationBuilder, Npc};
use crate::quest::{Quest, QuestCriteria};

/// Id of the tutorial room.
pub const TUTORIAL_ROOM: &str = "entry_cave";
/// Name of the tutorial tool.
pub const TUTORIAL_TOOL: &str = "pickaxe";
/// Name of the obstruction the tool clears.
pub const TUTORIAL_TARGET: &str = "rubble";

/// The sentence in the tutorial room's description that describes the
/// obstruction. Replaced once the blockage is cleared; the wording here
/// must match the description text below exactly.
pub const BLOCKAGE_SENTENCE: &str =
    "A narrow passage leading east is blocked by a pile of rubble.";
/// The replacement sentence once the blockage is cleared.
pub const BLOCKAGE_CLEARED_SENTENCE: &str =
    "The narrow passage leading east is now clear of rubble.";

/// The starting character: full health, one skill, all four quests active.
pub fn starting_character() -> Character {
    let mut character = Character::new("Hero", 20, TUTORIAL_ROOM);
    character.skills.insert("perception".to_string(), 1);
    character.add_quest("get_pickaxe");
    character.add_quest("find_button");
    character.add_quest("get_chieftains_key");
    character.add_quest("scout_trash_pit");
    character
}

/// The full location table, keyed by location id.
pub fn locations() -> HashMap<String, Location> {
    let all = vec![
        LocationBuilder::new(
            "entry_cave",
            "Cave Entrance",
            "You stand just inside the mouth of a dark, damp cave. Water drips steadily \
             from the ceiling. The air smells earthy and cold. A narrow passage leading \
             east is blocked by a pile of rubble. A rusty pickaxe lies discarded in a \
             corner near the entrance.",
        )
        .exit("east", "narrow_corridor")
        .item(Item::new(
            "pickaxe",
            "a rusty pickaxe leaning against the wall",
            true,
        ))
        .item(Item::new(
            "rubble",
            "a pile of rubble blocking the east passage",
            false,
        ))
        .build(),
        LocationBuilder::new(
            "narrow_corridor",
            "Narrow Corridor",
            "The passage is tight, forcing you to squeeze through. The rough stone walls \
             are slick with moisture. You can hear faint scratching sounds coming from \
             the east. The cave entrance is back to the west.",
        )
        .exit("east", "goblin_chamber")
        .exit("west", "entry_cave")
        .build(),
        LocationBuilder::new(
            "goblin_chamber",
            "Small Chamber",
            "This small chamber opens up slightly. Filthy rags form a makeshift bed in \
             one corner. A single, mean-looking goblin glares at you, wielding a crude \
             spear! The only way out seems to be back west. A rough opening leads \
             further east.",
        )
        .exit("west", "narrow_corridor")
        .exit("east", "guard_room")
        .npc(Npc::new(
            "goblin",
            "a mean-looking goblin",
            "\"Get out! This my cave!\"",
        ))
        .item(Item::new("rags", "filthy rags", false))
        .item(Item::new("bone", "a discarded bone", false))
        .build(),
        LocationBuilder::new(
            "guard_room",
            "Guard Room",
            "This rough-hewn chamber was clearly used as a guard post. A crude wooden \
             table sits overturned against one wall, and the floor is littered with \
             gnawed bones. Passages lead north, south, and east. The way back west \
             leads to the first goblin chamber.",
        )
        .exit("north", "sleeping_quarters")
        .exit("south", "mess_hall")
        .exit("east", "trash_pit")
        .exit("west", "goblin_chamber")
        .npc(Npc::new(
            "sleepy goblin",
            "a goblin guard dozing lightly by the north passage",
            "\"Zzz... huh? Wha? Go 'way...\"",
        ))
        .item(Item::new(
            "club",
            "a crude wooden club lying near the overturned table",
            true,
        ))
        .item(Item::new(
            "helmet",
            "a dented goblin helmet on the floor",
            true,
        ))
        .build(),
        LocationBuilder::new(
            "mess_hall",
            "Mess Hall",
            "The smell of stale food and unwashed goblin hangs heavy in the air. Greasy, \
             makeshift tables and benches are scattered haphazardly. A large, unpleasant \
             cooking pot sits cold in a hearth.",
        )
        .exit("north", "guard_room")
        .npc(Npc::new(
            "cook",
            "a fat goblin stirring the empty cooking pot",
            "\"No food for you! Only for goblins!\"",
        ))
        .item(Item::new(
            "dirty plate",
            "a greasy wooden plate with scraps",
            false,
        ))
        .item(Item::new("ladle", "a bent ladle resting against the pot", true))
        .build(),
        LocationBuilder::new(
            "trash_pit",
            "Trash Pit",
            "This area serves as a dumping ground. Piles of refuse, broken pottery, and \
             more bones are scattered around a dark, foul-smelling pit in the center. It \
             looks hazardous. A passage leads back west.",
        )
        .exit("west", "guard_room")
        .item(Item::new(
            "broken bottle",
            "shards of a broken bottle",
            false,
        ))
        .item(Item::new(
            "shiny button",
            "a small, shiny button half-buried in the muck",
            true,
        ))
        .build(),
        LocationBuilder::new(
            "sleeping_quarters",
            "Sleeping Quarters",
            "Several disgusting piles of furs and dirty straw serve as communal beds. \
             The air is thick with the stench of sleeping goblins (though none are here \
             now). An exit leads south, and another passage continues east.",
        )
        .exit("south", "guard_room")
        .exit("east", "chieftains_room")
        .item(Item::new("straw pile", "a pile of dirty straw", false))
        .item(Item::new(
            "torn pouch",
            "a small, torn pouch tucked under some straw",
            true,
        ))
        .build(),
        LocationBuilder::new(
            "chieftains_room",
            "Chieftain's Room",
            "This chamber is slightly larger and marginally cleaner than the others. A \
             large, crude throne made of wood and skulls sits against the far wall. A \
             thick, flea-ridden fur pelt lies on the floor. The only exit is back to \
             the west.",
        )
        .exit("west", "sleeping_quarters")
        .npc(Npc::new(
            "chieftain",
            "a particularly large and ugly goblin wearing a necklace of teeth, sitting \
             on the throne",
            "\"WHO DARES ENTER MY CHAMBER?!\"",
        ))
        .item(Item::new("throne", "a crude throne of wood and skulls", false))
        .item(Item::new("fur pelt", "a thick, flea-ridden fur pelt", false))
        .item(Item::new(
            "iron key",
            "a heavy iron key hanging on a hook behind the throne",
            true,
        ))
        .build(),
    ];

    all.into_iter().map(|loc| (loc.id.clone(), loc)).collect()
}

/// The quest table, keyed by quest id.
pub fn quests() -> HashMap<String, Quest> {
    let all = vec![
        Quest {
            id: "get_pickaxe".to_string(),
            name: "Retrieve the Tool".to_string(),
            description: "Find and retrieve the rusty pickaxe near the cave entrance."
                .to_string(),
            criteria: QuestCriteria::HasItem {
                item_name: "pickaxe".to_string(),
            },
            xp_reward: 25,
        },
        Quest {
            id: "find_button".to_string(),
            name: "A Glimmer in the Filth".to_string(),
            description: "Something shiny was lost in the trash pit. Maybe it's valuable?"
                .to_string(),
            criteria: QuestCriteria::HasItem {
                item_name: "shiny button".to_string(),
            },
            xp_reward: 20,
        },
        Quest {
            id: "get_chieftains_key".to_string(),
            name: "The Chieftain's Key".to_string(),
            description: "That large goblin chieftain likely keeps valuables locked away. \
                          Secure the key from his chamber."
                .to_string(),
            criteria: QuestCriteria::HasItem {
                item_name: "iron key".to_string(),
            },
            xp_reward: 35,
        },
        Quest {
            id: "scout_trash_pit".to_string(),
            name: "Hazardous Reconnaissance".to_string(),
            description: "Find out what lies in the trash pit area of the goblin warren."
                .to_string(),
            criteria: QuestCriteria::ReachLocation {
                location_id: "trash_pit".to_string(),
            },
            xp_reward: 20,
        },
    ];

    all.into_iter().map(|q| (q.id.clone(), q)).collect()
}

/// Validate a content set: every exit and every location-targeting quest
/// must resolve to a known location id.
pub fn validate(
    locations: &HashMap<String, Location>,
    quests: &HashMap<String, Quest>,
) -> CoreResult<()> {
    for location in locations.values() {
        for (direction, target) in &location.exits {
            if !locations.contains_key(target) {
                return Err(CoreError::DanglingExit {
                    location: location.id.clone(),
                    direction: direction.clone(),
                    target: target.clone(),
                });
            }
        }
    }
    for quest in quests.values() {
        if let QuestCriteria::ReachLocation { location_id } = &quest.criteria {
            if !locations.contains_key(location_id) {
                return Err(CoreError::UnknownQuestLocation {
                    quest: quest.id.clone(),
                    target: location_id.clone(),
                });
            }
        }
    }
    Ok(())
}
