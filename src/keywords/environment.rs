//! Environment dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "decode-universal-time" => Function,
    "encode-universal-time" => Function,
    "get-universal-time" => Function,
    "get-decoded-time" => Function,
    "sleep" => Function,
    "apropos" => Function,
    "apropos-list" => Function,
    "describe" => Function,
    "describe-object" => Function,
    "get-internal-real-time" => Function,
    "get-internal-run-time" => Function,
    "disassemble" => Function,
    "room" => Function,
    "ed" => Function,
    "inspect" => Function,
    "dribble" => Function,
    "lisp-implementation-type" => Function,
    "lisp-implementation-version" => Function,
    "short-site-name" => Function,
    "long-site-name" => Function,
    "machine-instance" => Function,
    "machine-type" => Function,
    "machine-version" => Function,
    "software-type" => Function,
    "software-version" => Function,
    "user-homedir-pathname" => Function,
    "documentation" => Accessor,
    "trace" => Macro,
    "untrace" => Macro,
    "step" => Macro,
    "time" => Macro,
    "internal-time-units-per-second" => Other,
];
