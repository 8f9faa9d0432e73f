//! Symbols dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "symbolp" => Function,
    "keywordp" => Function,
    "make-symbol" => Function,
    "copy-symbol" => Function,
    "gensym" => Function,
    "gentemp" => Function,
    "symbol-name" => Function,
    "symbol-package" => Function,
    "remprop" => Function,
    "boundp" => Function,
    "makunbound" => Function,
    "set" => Function,
    "symbol-function" => Accessor,
    "symbol-plist" => Accessor,
    "symbol-value" => Accessor,
    "get" => Accessor,
    "symbol" => Other,
    "*gensym-counter*" => Other,
    "unbound-variable" => Other,
];
