//! Conditions dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "error" => Function,
    "cerror" => Function,
    "invalid-method-error" => Function,
    "signal" => Function,
    "warn" => Function,
    "invoke-debugger" => Function,
    "break" => Function,
    "make-condition" => Function,
    "compute-restarts" => Function,
    "find-restart" => Function,
    "invoke-restart" => Function,
    "invoke-restart-interactively" => Function,
    "restart-name" => Function,
    "abort" => Function,
    "continue" => Function,
    "muffle-warning" => Function,
    "store-value" => Function,
    "use-value" => Function,
    "simple-condition-format-control" => Function,
    "simple-condition-format-arguments" => Function,
    "assert" => Macro,
    "check-type" => Macro,
    "define-condition" => Macro,
    "handler-bind" => Macro,
    "handler-case" => Macro,
    "ignore-errors" => Macro,
    "restart-bind" => Macro,
    "restart-case" => Macro,
    "with-condition-restarts" => Macro,
    "with-simple-restart" => Macro,
    "condition" => Other,
    "warning" => Other,
    "style-warning" => Other,
    "serious-condition" => Other,
    "simple-error" => Other,
    "simple-condition" => Other,
    "simple-warning" => Other,
    "storage-condition" => Other,
    "restart" => Other,
    "*break-on-signals*" => Other,
    "*debugger-hook*" => Other,
];
