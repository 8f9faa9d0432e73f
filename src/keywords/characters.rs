//! Characters dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "char=" => Function,
    "char/=" => Function,
    "char<" => Function,
    "char>" => Function,
    "char<=" => Function,
    "char>=" => Function,
    "char-equal" => Function,
    "char-not-equal" => Function,
    "char-lessp" => Function,
    "char-greaterp" => Function,
    "char-not-greaterp" => Function,
    "char-not-lessp" => Function,
    "character" => Function,
    "characterp" => Function,
    "alpha-char-p" => Function,
    "alphanumericp" => Function,
    "digit-char" => Function,
    "digit-char-p" => Function,
    "graphic-char-p" => Function,
    "standard-char-p" => Function,
    "char-upcase" => Function,
    "char-downcase" => Function,
    "upper-case-p" => Function,
    "lower-case-p" => Function,
    "both-case-p" => Function,
    "char-code" => Function,
    "char-int" => Function,
    "code-char" => Function,
    "char-name" => Function,
    "name-char" => Function,
    "base-char" => Other,
    "standard-char" => Other,
    "extended-char" => Other,
    "char-code-limit" => Other,
];
