use crate::card::{ApiCard, CardRecord};
use crate::error::Result;
use crate::expansions;
use crate::keywords;
use crate::names;
use crate::rarity;
use crate::similarity;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Per-card derivation: everything that only needs the card itself.
pub fn derive_record(card: ApiCard) -> CardRecord {
    let names = names::normalize(&card.name, card.supertype);
    let stated_rarity = card
        .rarity
        .as_deref()
        .unwrap_or(rarity::DEFAULT_RARITY)
        .to_string();
    let mut record = CardRecord {
        set_code: expansions::set_code(&card.set),
        id: card.id,
        raw_name: card.name,
        name: names.name,
        name_without_prefix: names.name_without_prefix,
        name_without_prefix_and_postfix: names.name_without_prefix_and_postfix,
        supertype: card.supertype,
        subtypes: card.subtypes,
        rarity: card.rarity,
        visual_rarity: stated_rarity,
        set_id: card.set.id,
        set_name: card.set.name,
        regulation_mark: card.regulation_mark,
        number: card.number,
        set_printed_total: card.set.printed_total,
        secret_rare: false,
        small_image_url: card.images.small,
        types: card.types,
        national_pokedex_numbers: card.national_pokedex_numbers,
        attack_names: card.attacks.into_iter().map(|a| a.name).collect(),
        keywords: Vec::new(),
        similar_card_ids: Vec::new(),
    };
    rarity::correct_rarity(&mut record);
    record.secret_rare = record.is_secret_rare();
    record
}

/// The client lookup database, keyed by card id.
#[derive(Debug, Default)]
pub struct CardDatabase {
    cards: BTreeMap<String, CardRecord>,
}

impl CardDatabase {
    pub fn from_api_cards(cards: Vec<ApiCard>) -> Self {
        let mut records: BTreeMap<String, CardRecord> = cards
            .into_iter()
            .map(derive_record)
            .map(|record| (record.id.clone(), record))
            .collect();

        let keywords = keywords::keywords_by_name(records.values().map(|r| r.name.as_str()));
        let mut similar = similarity::similar_card_ids(records.values());
        info!(
            "Derived {} cards: {} distinct names, {} cards with look-alikes",
            records.len(),
            keywords.len(),
            similarity::group_count(&similar)
        );

        for record in records.values_mut() {
            if let Some(found) = keywords.get(&record.name) {
                record.keywords = found.clone();
            }
            if let Some(ids) = similar.remove(&record.id) {
                record.similar_card_ids = ids;
            }
        }

        CardDatabase { cards: records }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.cards.get(id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.values()
    }

    /// Ids present here but not in `previous`.
    pub fn new_card_ids<'a>(&'a self, previous: &CardDatabase) -> Vec<&'a str> {
        self.cards
            .keys()
            .filter(|id| previous.get(id).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Ids grouped by base name, the way the scanner resolves a detected name.
    pub fn ids_by_base_name(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for card in self.cards.values() {
            grouped
                .entry(card.name_without_prefix_and_postfix.clone())
                .or_insert_with(Vec::new)
                .push(card.id.clone());
        }
        grouped
    }

    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &self.cards)?;
        info!("Wrote {} cards to {}", self.cards.len(), path.display());
        Ok(())
    }

    pub fn load_from_json(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let cards: BTreeMap<String, CardRecord> = serde_json::from_reader(reader)?;
        Ok(CardDatabase { cards })
    }
}
