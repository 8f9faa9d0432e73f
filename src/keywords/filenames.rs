//! Filenames dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "pathname" => Function,
    "make-pathname" => Function,
    "pathnamep" => Function,
    "pathname-host" => Function,
    "pathname-device" => Function,
    "pathname-directory" => Function,
    "pathname-name" => Function,
    "pathname-type" => Function,
    "pathname-version" => Function,
    "load-logical-pathname-translations" => Function,
    "logical-pathname" => Function,
    "namestring" => Function,
    "file-namestring" => Function,
    "directory-namestring" => Function,
    "host-namestring" => Function,
    "enough-namestring" => Function,
    "parse-namestring" => Function,
    "wild-pathname-p" => Function,
    "pathname-match-p" => Function,
    "translate-logical-pathname" => Function,
    "translate-pathname" => Function,
    "merge-pathnames" => Function,
    "logical-pathname-translations" => Accessor,
    "*default-pathname-defaults*" => Other,
];
