use crate::card::CardRecord;

pub const PROMO: &str = "Promo";
pub const DEFAULT_RARITY: &str = "Common";

/// Promos whose print layout matches another rarity tier.
pub const PROMO_VISUAL_RARITY_OVERRIDES: &[(&str, &str)] = &[
    ("swshp-SWSH020", "Rare Holo V"),
    ("swshp-SWSH050", "Rare Holo V"),
    ("swshp-SWSH204", "Rare Holo VSTAR"),
    ("swshp-SWSH262", "Rare Ultra"),
    ("svp-29", "Double Rare"),
    ("svp-50", "Illustration Rare"),
    ("svp-66", "Illustration Rare"),
    ("svp-85", "Illustration Rare"),
    ("svp-88", "Illustration Rare"),
    ("svp-101", "Special Illustration Rare"),
];

pub fn promo_override(card_id: &str) -> Option<&'static str> {
    PROMO_VISUAL_RARITY_OVERRIDES
        .iter()
        .find(|(id, _)| *id == card_id)
        .map(|(_, rarity)| *rarity)
}

/// Rarity class the card looks like when printed. Only cards listed as "Promo"
/// are corrected; everything else keeps its stated rarity.
pub fn visual_rarity(card_id: &str, rarity: Option<&str>) -> String {
    let stated = rarity.unwrap_or(DEFAULT_RARITY);
    if stated.eq_ignore_ascii_case(PROMO) {
        if let Some(corrected) = promo_override(card_id) {
            return corrected.to_string();
        }
    }
    stated.to_string()
}

pub fn correct_rarity(card: &mut CardRecord) {
    card.visual_rarity = visual_rarity(&card.id, Some(card.visual_rarity.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fixtures::record;
    use crate::card::Supertype;

    #[test]
    fn listed_promo_gets_corrected() {
        assert_eq!(visual_rarity("svp-85", Some("Promo")), "Illustration Rare");
        assert_eq!(
            visual_rarity("swshp-SWSH204", Some("Promo")),
            "Rare Holo VSTAR"
        );
    }

    #[test]
    fn unlisted_or_non_promo_cards_are_untouched() {
        assert_eq!(visual_rarity("svp-1", Some("Promo")), "Promo");
        assert_eq!(visual_rarity("svp-85", Some("Rare")), "Rare");
        assert_eq!(visual_rarity("sv1-81", Some("Double Rare")), "Double Rare");
        assert_eq!(visual_rarity("sve-1", None), "Common");
    }

    #[test]
    fn correction_is_idempotent() {
        let mut card = record("svp-50", "Mewtwo", Supertype::Pokemon);
        card.rarity = Some("Promo".to_string());
        card.visual_rarity = "Promo".to_string();

        correct_rarity(&mut card);
        let once = card.clone();
        correct_rarity(&mut card);
        assert_eq!(card, once);
        assert_eq!(card.visual_rarity, "Illustration Rare");
        assert_eq!(card.rarity.as_deref(), Some("Promo"));

        for (id, _) in PROMO_VISUAL_RARITY_OVERRIDES {
            let once = visual_rarity(id, Some(PROMO));
            assert_eq!(visual_rarity(id, Some(once.as_str())), once);
        }
    }

    #[test]
    fn override_ids_are_unique() {
        for (i, (id, _)) in PROMO_VISUAL_RARITY_OVERRIDES.iter().enumerate() {
            assert!(PROMO_VISUAL_RARITY_OVERRIDES[i + 1..]
                .iter()
                .all(|(other, _)| other != id));
        }
    }
}
