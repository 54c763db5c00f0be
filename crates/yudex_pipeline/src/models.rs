//! JSON deserialization structures for the Yudu data files.

use serde::{Deserialize, Serialize};

/// One per-Pokémon source file. Only the three name fields are consumed;
/// anything else in the file is ignored.
#[derive(Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_jp: String,
}

/// One entry of the persisted yudex index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PokedexEntry {
    pub yudex_id: String,
    pub name: String,
    pub name_en: String,
    pub name_jp: String,
    pub world_gen: String,
}
