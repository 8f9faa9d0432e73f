//! Hash tables dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "make-hash-table" => Function,
    "hash-table-p" => Function,
    "hash-table-count" => Function,
    "hash-table-rehash-size" => Function,
    "hash-table-rehash-threshold" => Function,
    "hash-table-size" => Function,
    "hash-table-test" => Function,
    "remhash" => Function,
    "maphash" => Function,
    "clrhash" => Function,
    "sxhash" => Function,
    "gethash" => Accessor,
    "with-hash-table-iterator" => Macro,
    "hash-table" => Other,
];
