//! Printer dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "copy-pprint-dispatch" => Function,
    "pprint-dispatch" => Function,
    "pprint-fill" => Function,
    "pprint-linear" => Function,
    "pprint-tabular" => Function,
    "pprint-indent" => Function,
    "pprint-newline" => Function,
    "pprint-tab" => Function,
    "print-object" => Function,
    "set-pprint-dispatch" => Function,
    "write" => Function,
    "prin1" => Function,
    "print" => Function,
    "pprint" => Function,
    "princ" => Function,
    "write-to-string" => Function,
    "prin1-to-string" => Function,
    "princ-to-string" => Function,
    "print-not-readable-object" => Function,
    "format" => Function,
    "formatter" => Macro,
    "pprint-logical-block" => Macro,
    "print-unreadable-object" => Macro,
    "pprint-exit-if-list-exhausted" => LocalMacro,
    "pprint-pop" => LocalMacro,
    "*print-array*" => Other,
    "*print-base*" => Other,
    "*print-radix*" => Other,
    "*print-case*" => Other,
    "*print-circle*" => Other,
    "*print-escape*" => Other,
    "*print-gensym*" => Other,
    "*print-level*" => Other,
    "*print-length*" => Other,
    "*print-lines*" => Other,
    "*print-miser-width*" => Other,
    "*print-pprint-dispatch*" => Other,
    "*print-pretty*" => Other,
    "*print-readably*" => Other,
    "*print-right-margin*" => Other,
    "print-not-readable" => Other,
];
