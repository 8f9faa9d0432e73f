//! Structures dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "defstruct" => Macro,
    "copy-structure" => Function,
];
