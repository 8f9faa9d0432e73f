//! Strings dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "simple-string-p" => Function,
    "string" => Function,
    "string-upcase" => Function,
    "string-downcase" => Function,
    "string-capitalize" => Function,
    "nstring-upcase" => Function,
    "nstring-downcase" => Function,
    "nstring-capitalize" => Function,
    "string-trim" => Function,
    "string-left-trim" => Function,
    "string-right-trim" => Function,
    "string=" => Function,
    "string/=" => Function,
    "string<" => Function,
    "string>" => Function,
    "string<=" => Function,
    "string>=" => Function,
    "string-equal" => Function,
    "string-not-equal" => Function,
    "string-lessp" => Function,
    "string-greaterp" => Function,
    "string-not-greaterp" => Function,
    "string-not-lessp" => Function,
    "stringp" => Function,
    "make-string" => Function,
    "char" => Accessor,
    "schar" => Accessor,
    "base-string" => Other,
    "simple-string" => Other,
    "simple-base-string" => Other,
];
