//! Card name normalization.
//!
//! Every card gets three names: the processed name (parametrized names collapsed
//! to their base label), the name without region/form/owner prefixes, and the
//! name without prefixes and without the trailing card-type suffix. The steps run
//! in a fixed order and each runs exactly once:
//!
//! 1. canonicalize parametrized names
//! 2. strip region/form prefixes (repeatable)
//! 3. strip an owner prefix, Pokémon only
//! 4. strip a trailing suffix token

use crate::card::Supertype;
use lazy_static::lazy_static;
use regex::Regex;

/// Region and form prefixes. Matched case-insensitively, each followed by a space,
/// any number of times at the start of a name.
pub const FORM_PREFIXES: &[&str] = &[
    "special delivery",
    "radiant",
    "origin forme",
    "hisuian",
    "galarian",
    "alolan",
    "paldean",
    "teal mask",
    "hearthflame mask",
    "wellspring mask",
    "cornerstone mask",
    "bloodmoon",
    "lance's",
    "dark",
    "single strike",
    "rapid strike",
    "ice rider",
    "shadow rider",
    "flying",
    "surfing",
    "heat",
    "mow",
    "wash",
    "fan",
    "frost",
];

/// Possessive trainer names printed in front of a Pokémon's name. Disjoint from
/// [`FORM_PREFIXES`].
pub const OWNER_PREFIXES: &[&str] = &[
    "team rocket's",
    "ethan's",
    "misty's",
    "cynthia's",
    "arven's",
    "lillie's",
    "iono's",
    "hop's",
    "marnie's",
    "steven's",
    "larry's",
    "erika's",
    "brock's",
    "sabrina's",
    "giovanni's",
    "n's",
];

/// Trailing card-type and form tokens, stripped once and only at the end.
pub const POSTFIXES: &[&str] = &[
    "ex",
    "v",
    "vstar",
    "vmax",
    "v-union",
    "sunny form",
    "rainy form",
    "snowy form",
    "with grey felt hat",
];

pub const PROFESSORS_RESEARCH: &str = "Professor's Research";
pub const BOSS_ORDERS: &str = "Boss's Orders";

lazy_static! {
    static ref PROFESSORS_RESEARCH_NAMED: Regex =
        Regex::new(r"(?i)^professor['’]s research \(.*\)$").unwrap();
    static ref BOSS_ORDERS_NAMED: Regex = Regex::new(r"(?i)^boss['’]s orders \(.*\)$").unwrap();
    static ref BASIC_ENERGY: Regex = Regex::new(r"(?i)^basic .* energy$").unwrap();
    static ref BASIC_ENERGY_PREFIX: Regex = Regex::new(r"(?i)^basic ").unwrap();
    static ref FORM_PREFIX_RUN: Regex =
        Regex::new(&format!(r"(?i)^(?:(?:{}) )*", alternation(FORM_PREFIXES))).unwrap();
    static ref OWNER_PREFIX: Regex =
        Regex::new(&format!(r"(?i)^(?:{}) ", alternation(OWNER_PREFIXES))).unwrap();
    static ref POSTFIX: Regex =
        Regex::new(&format!(r"(?i) (?:{})$", alternation(POSTFIXES))).unwrap();
    static ref SPRITE_PUNCTUATION: Regex = Regex::new(r"['.]").unwrap();
}

/// Builds a regex alternation with longer tokens first so the leftmost-first
/// engine always takes the longest match.
fn alternation(tokens: &[&str]) -> String {
    let mut sorted: Vec<&str> = tokens.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    pub name: String,
    pub name_without_prefix: String,
    pub name_without_prefix_and_postfix: String,
}

pub fn normalize(raw_name: &str, supertype: Supertype) -> NameVariants {
    let name = processed_name(raw_name);
    let name_without_prefix = strip_owner_prefix(&strip_form_prefixes(&name), supertype);
    let name_without_prefix_and_postfix = strip_postfix(&name_without_prefix);
    NameVariants {
        name,
        name_without_prefix,
        name_without_prefix_and_postfix,
    }
}

/// Collapses names that carry a parameter to their base label:
/// "Professor's Research (Professor Sada)" and "Basic Grass Energy" become
/// "Professor's Research" and "Grass Energy".
pub fn processed_name(raw_name: &str) -> String {
    if PROFESSORS_RESEARCH_NAMED.is_match(raw_name) {
        return PROFESSORS_RESEARCH.to_string();
    }
    if BOSS_ORDERS_NAMED.is_match(raw_name) {
        return BOSS_ORDERS.to_string();
    }
    if BASIC_ENERGY.is_match(raw_name) {
        return BASIC_ENERGY_PREFIX.replace(raw_name, "").into_owned();
    }
    raw_name.to_string()
}

pub fn strip_form_prefixes(name: &str) -> String {
    FORM_PREFIX_RUN.replace(name, "").into_owned()
}

pub fn strip_owner_prefix(name: &str, supertype: Supertype) -> String {
    if supertype != Supertype::Pokemon {
        return name.to_string();
    }
    OWNER_PREFIX.replace(name, "").into_owned()
}

pub fn strip_postfix(name: &str) -> String {
    POSTFIX.replace(name, "").into_owned()
}

/// File name of the gen9 sprite for a Pokémon's base name, e.g.
/// "Mr. Mime" -> "mr-mime.png".
pub fn sprite_file_name(base_name: &str) -> String {
    let slug = base_name
        .to_lowercase()
        .replace(' ', "-")
        .replace('é', "e")
        .replace('♀', "f")
        .replace('♂', "m");
    format!("{}.png", SPRITE_PUNCTUATION.replace_all(&slug, ""))
}
