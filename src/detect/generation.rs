use crate::profile::Generation;

/// Model-code prefixes, checked in order against the upper-cased model.
const PREFIXES: &[(&str, Generation)] = &[
    ("S4", Generation::Gen4),
    ("S3", Generation::Gen3),
    ("SN", Generation::Gen2),
    ("SH", Generation::Gen1),
];

/// Guess the generation from a model code's prefix.
///
/// This follows the vendor's SKU naming and is only a heuristic: anything
/// without a known prefix (Pro `SP…` codes, BLU, Wave) is `Unknown`.
pub fn detect_generation(model: &str) -> Generation {
    let upper = model.trim().to_ascii_uppercase();
    PREFIXES
        .iter()
        .find(|(prefix, _)| upper.starts_with(prefix))
        .map_or(Generation::Unknown, |(_, generation)| *generation)
}
