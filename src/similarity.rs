use crate::card::CardRecord;
use std::collections::{BTreeMap, HashMap};

/// Cards are look-alikes when these three agree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimilarityKey {
    pub name: String,
    pub visual_rarity: String,
    pub attack_signature: String,
}

impl SimilarityKey {
    pub fn of(card: &CardRecord) -> Self {
        SimilarityKey {
            name: card.name.clone(),
            visual_rarity: card.visual_rarity.clone(),
            attack_signature: card.attack_signature(),
        }
    }
}

/// Ids of each card's look-alikes, sorted, never including the card itself.
pub fn similar_card_ids<'a, I>(cards: I) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a CardRecord>,
{
    let mut groups: BTreeMap<SimilarityKey, Vec<String>> = BTreeMap::new();
    for card in cards {
        groups
            .entry(SimilarityKey::of(card))
            .or_insert_with(Vec::new)
            .push(card.id.clone());
    }

    let mut similar = HashMap::new();
    for (_, mut ids) in groups {
        ids.sort();
        ids.dedup();
        for id in &ids {
            let others: Vec<String> = ids.iter().filter(|other| *other != id).cloned().collect();
            similar.insert(id.clone(), others);
        }
    }
    similar
}

pub fn group_count(similar: &HashMap<String, Vec<String>>) -> usize {
    similar.values().filter(|ids| !ids.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fixtures::record;
    use crate::card::Supertype;

    fn pokemon(id: &str, name: &str, rarity: &str, attacks: &[&str]) -> CardRecord {
        let mut card = record(id, name, Supertype::Pokemon);
        card.visual_rarity = rarity.to_string();
        card.attack_names = attacks.iter().map(|a| a.to_string()).collect();
        card
    }

    #[test]
    fn reprints_with_same_attacks_are_grouped() {
        let cards = vec![
            pokemon("sv1-1", "Pikachu", "Common", &["Gnaw", "Thunder Jolt"]),
            pokemon("sv4-2", "Pikachu", "Common", &["Gnaw", "Thunder Jolt"]),
            pokemon("sv5-3", "Pikachu", "Common", &["Quick Attack"]),
            pokemon("svp-4", "Pikachu", "Illustration Rare", &["Gnaw", "Thunder Jolt"]),
        ];
        let similar = similar_card_ids(&cards);
        assert_eq!(similar["sv1-1"], vec!["sv4-2"]);
        assert_eq!(similar["sv4-2"], vec!["sv1-1"]);
        assert!(similar["sv5-3"].is_empty());
        assert!(similar["svp-4"].is_empty());
        assert_eq!(group_count(&similar), 2);
    }

    #[test]
    fn grouping_is_symmetric_and_excludes_self() {
        let cards = vec![
            pokemon("a", "Ralts", "Common", &["Memory Skip"]),
            pokemon("b", "Ralts", "Common", &["Memory Skip"]),
            pokemon("c", "Ralts", "Common", &["Memory Skip"]),
            pokemon("d", "Kirlia", "Common", &["Psyshot"]),
        ];
        let similar = similar_card_ids(&cards);
        for (id, others) in &similar {
            assert!(!others.contains(id));
            for other in others {
                assert!(similar[other].contains(id), "{} -> {} not mirrored", id, other);
            }
        }
        assert_eq!(similar["a"], vec!["b", "c"]);
    }

    #[test]
    fn attack_order_matters() {
        let cards = vec![
            pokemon("a", "Mew", "Rare", &["Psychic", "Barrier"]),
            pokemon("b", "Mew", "Rare", &["Barrier", "Psychic"]),
        ];
        let similar = similar_card_ids(&cards);
        assert!(similar["a"].is_empty());
        assert!(similar["b"].is_empty());
    }
}
