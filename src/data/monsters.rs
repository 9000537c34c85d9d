use serde::{Deserialize, Serialize};

/// Base stats for one adversary type. Spawned monsters copy these
/// values; the template itself never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub glyph: char,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl MonsterTemplate {
    fn new(name: &str, glyph: char, health: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.to_string(),
            glyph,
            health,
            attack,
            defense,
        }
    }
}

pub fn builtin_monsters() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate::new("Goblin", 'g', 20, 5, 2),
        MonsterTemplate::new("Orc", 'o', 40, 15, 5),
        MonsterTemplate::new("Troll", 'T', 60, 20, 10),
        MonsterTemplate::new("Dragon", 'D', 100, 30, 20),
        MonsterTemplate::new("Skeleton", 's', 25, 8, 3),
    ]
}
