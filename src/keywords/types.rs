//! Types and classes dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "coerce" => Function,
    "subtypep" => Function,
    "type-of" => Function,
    "typep" => Function,
    "type-error-datum" => Function,
    "type-error-expected-type" => Function,
    "deftype" => Macro,
    "type-error" => Other,
    "simple-type-error" => Other,
    "boolean" => Other,
    "standard-char" => Other,
    "keyword" => Other,
    "atom" => Other,
];
