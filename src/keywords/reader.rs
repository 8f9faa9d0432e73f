//! Reader dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "copy-readtable" => Function,
    "make-dispatch-macro-character" => Function,
    "read" => Function,
    "read-preserving-whitespace" => Function,
    "read-delimited-list" => Function,
    "read-from-string" => Function,
    "readtable-case" => Function,
    "readtablep" => Function,
    "set-dispatch-macro-character" => Function,
    "get-dispatch-macro-character" => Function,
    "set-macro-character" => Function,
    "get-macro-character" => Function,
    "set-syntax-from-char" => Function,
    "with-standard-io-syntax" => Macro,
    "readtable" => Other,
    "*read-base*" => Other,
    "*read-default-float-format*" => Other,
    "*read-eval*" => Other,
    "*read-suppress*" => Other,
    "*readtable*" => Other,
    "reader-error" => Other,
];
