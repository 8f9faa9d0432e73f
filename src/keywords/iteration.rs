//! Iteration dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "do" => Macro,
    "do*" => Macro,
    "dotimes" => Macro,
    "dolist" => Macro,
    "loop" => Macro,
    "loop-finish" => LocalMacro,
];
