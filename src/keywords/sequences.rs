//! Sequences dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "copy-seq" => Function,
    "fill" => Function,
    "make-sequence" => Function,
    "map" => Function,
    "map-into" => Function,
    "reduce" => Function,
    "count" => Function,
    "count-if" => Function,
    "count-if-not" => Function,
    "length" => Function,
    "reverse" => Function,
    "nreverse" => Function,
    "sort" => Function,
    "stable-sort" => Function,
    "find" => Function,
    "find-if" => Function,
    "find-if-not" => Function,
    "position" => Function,
    "position-if" => Function,
    "position-if-not" => Function,
    "search" => Function,
    "mismatch" => Function,
    "replace" => Function,
    "substitute" => Function,
    "substitute-if" => Function,
    "substitute-if-not" => Function,
    "nsubstitute" => Function,
    "nsubstitute-if" => Function,
    "nsubstitute-if-not" => Function,
    "concatenate" => Function,
    "merge" => Function,
    "remove" => Function,
    "remove-if" => Function,
    "remove-if-not" => Function,
    "delete" => Function,
    "delete-if" => Function,
    "delete-if-not" => Function,
    "remove-duplicates" => Function,
    "delete-duplicates" => Function,
    "elt" => Accessor,
    "subseq" => Accessor,
    "sequence" => Other,
];
