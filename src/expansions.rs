use crate::card::ApiSet;

/// Provider set ids whose official tournament code differs from `ptcgoCode`.
pub const SET_CODE_OVERRIDES: &[(&str, &str)] = &[
    ("swshp", "PR"), // sword and shield promos
    ("svp", "SVP"),  // scarlet and violet promos
    ("sv1", "SVI"),
    ("sv2", "PAL"),
    ("sv3", "OBF"),
    ("sv3pt5", "MEW"),
    ("sv4", "PAR"),
    ("sv4pt5", "PAF"),
    ("sv5", "TEF"),
    ("sv6", "TWM"),
    ("sv6pt5", "SFA"),
    ("sv7", "SCR"),
];

pub fn set_code(set: &ApiSet) -> Option<String> {
    SET_CODE_OVERRIDES
        .iter()
        .find(|(id, _)| *id == set.id)
        .map(|(_, code)| code.to_string())
        .or_else(|| set.ptcgo_code.clone())
}
