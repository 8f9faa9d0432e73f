//! Files dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "directory" => Function,
    "probe-file" => Function,
    "ensure-directories-exist" => Function,
    "truename" => Function,
    "file-author" => Function,
    "file-write-date" => Function,
    "rename-file" => Function,
    "delete-file" => Function,
    "file-error-pathname" => Function,
    "file-error" => Other,
];
