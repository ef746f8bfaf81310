use serde::{Deserialize, Serialize};

/// Sentinel for collector numbers that are not plain integers ("GG05", "SWSH001").
pub const UNPARSED_NUMBER: u32 = u32::MAX;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Supertype {
    #[serde(rename = "Pokémon")]
    Pokemon,
    Trainer,
    Energy,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSet {
    pub id: String,
    pub name: String,
    #[serde(rename = "ptcgoCode")]
    pub ptcgo_code: Option<String>,
    #[serde(rename = "printedTotal")]
    pub printed_total: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiImages {
    pub small: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiAttack {
    pub name: String,
}

/// A card exactly as the provider returns it.
#[derive(Deserialize, Clone, Debug)]
pub struct ApiCard {
    pub id: String,
    pub name: String,
    pub supertype: Supertype,
    #[serde(default)]
    pub subtypes: Vec<String>,
    pub rarity: Option<String>,
    #[serde(rename = "regulationMark")]
    pub regulation_mark: Option<String>,
    pub number: String,
    pub set: ApiSet,
    pub images: ApiImages,
    pub types: Option<Vec<String>>,
    #[serde(rename = "nationalPokedexNumbers")]
    pub national_pokedex_numbers: Option<Vec<u32>>,
    #[serde(default)]
    pub attacks: Vec<ApiAttack>,
}

#[derive(Deserialize, Debug)]
pub struct CardPage {
    pub data: Vec<ApiCard>,
    pub page: u32,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
}

/// A derived card entry as written to the client database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardRecord {
    pub id: String,
    pub raw_name: String,
    pub name: String,
    pub name_without_prefix: String,
    pub name_without_prefix_and_postfix: String,
    pub supertype: Supertype,
    pub subtypes: Vec<String>,
    pub rarity: Option<String>,
    pub visual_rarity: String,
    pub set_id: String,
    pub set_code: Option<String>,
    pub set_name: String,
    pub regulation_mark: Option<String>,
    pub number: String,
    pub set_printed_total: u32,
    pub secret_rare: bool,
    pub small_image_url: String,
    pub types: Option<Vec<String>>,
    pub national_pokedex_numbers: Option<Vec<u32>>,
    pub attack_names: Vec<String>,
    pub keywords: Vec<String>,
    pub similar_card_ids: Vec<String>,
}

impl CardRecord {
    pub fn number_value(&self) -> u32 {
        parse_card_number(&self.number)
    }

    pub fn is_secret_rare(&self) -> bool {
        let number = self.number_value();
        number != UNPARSED_NUMBER
            && self.set_printed_total > 1
            && number > self.set_printed_total
    }

    /// Attack names joined in print order; empty for cards without attacks.
    pub fn attack_signature(&self) -> String {
        self.attack_names.join("|")
    }
}

pub fn parse_card_number(number: &str) -> u32 {
    number.trim().parse().unwrap_or(UNPARSED_NUMBER)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(id: &str, name: &str, supertype: Supertype) -> CardRecord {
        CardRecord {
            id: id.to_string(),
            raw_name: name.to_string(),
            name: name.to_string(),
            name_without_prefix: name.to_string(),
            name_without_prefix_and_postfix: name.to_string(),
            supertype,
            subtypes: Vec::new(),
            rarity: Some("Common".to_string()),
            visual_rarity: "Common".to_string(),
            set_id: "sv1".to_string(),
            set_code: Some("SVI".to_string()),
            set_name: "Scarlet & Violet".to_string(),
            regulation_mark: Some("G".to_string()),
            number: "1".to_string(),
            set_printed_total: 198,
            secret_rare: false,
            small_image_url: format!("https://images.pokemontcg.io/sv1/{}.png", id),
            types: None,
            national_pokedex_numbers: None,
            attack_names: Vec::new(),
            keywords: Vec::new(),
            similar_card_ids: Vec::new(),
        }
    }
}
