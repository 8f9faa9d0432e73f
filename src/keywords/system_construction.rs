//! System construction dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "compile-file" => Function,
    "compile-file-pathname" => Function,
    "load" => Function,
    "provide" => Function,
    "require" => Function,
    "with-compilation-unit" => Macro,
    "*features*" => Other,
    "*compile-file-pathname*" => Other,
    "*compile-file-truename*" => Other,
    "*load-pathname*" => Other,
    "*load-truename*" => Other,
    "*compile-print*" => Other,
    "*compile-verbose*" => Other,
    "*load-print*" => Other,
    "*load-verbose*" => Other,
    "*modules*" => Other,
];
