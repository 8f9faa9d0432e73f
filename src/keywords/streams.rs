//! Streams dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "input-stream-p" => Function,
    "output-stream-p" => Function,
    "interactive-stream-p" => Function,
    "open-stream-p" => Function,
    "stream-element-type" => Function,
    "streamp" => Function,
    "read-byte" => Function,
    "write-byte" => Function,
    "peek-char" => Function,
    "read-char" => Function,
    "read-char-no-hang" => Function,
    "terpri" => Function,
    "fresh-line" => Function,
    "unread-char" => Function,
    "write-char" => Function,
    "read-line" => Function,
    "write-string" => Function,
    "write-line" => Function,
    "read-sequence" => Function,
    "write-sequence" => Function,
    "file-length" => Function,
    "file-position" => Function,
    "file-string-length" => Function,
    "open" => Function,
    "stream-external-format" => Function,
    "close" => Function,
    "listen" => Function,
    "clear-input" => Function,
    "finish-output" => Function,
    "force-output" => Function,
    "clear-output" => Function,
    "y-or-n-p" => Function,
    "yes-or-no-p" => Function,
    "make-synonym-stream" => Function,
    "synonym-stream-symbol" => Function,
    "broadcast-stream-streams" => Function,
    "make-broadcast-stream" => Function,
    "make-two-way-stream" => Function,
    "two-way-stream-input-stream" => Function,
    "two-way-stream-output-stream" => Function,
    "echo-stream-input-stream" => Function,
    "echo-stream-output-stream" => Function,
    "make-echo-stream" => Function,
    "concatenated-stream-streams" => Function,
    "make-concatenated-stream" => Function,
    "get-output-stream-string" => Function,
    "make-string-input-stream" => Function,
    "make-string-output-stream" => Function,
    "stream-error-stream" => Function,
    "with-open-file" => Macro,
    "with-open-stream" => Macro,
    "with-input-from-string" => Macro,
    "with-output-to-string" => Macro,
    "stream" => Other,
    "broadcast-stream" => Other,
    "concatenated-stream" => Other,
    "echo-stream" => Other,
    "file-stream" => Other,
    "string-stream" => Other,
    "synonym-stream" => Other,
    "two-way-stream" => Other,
    "*debug-io*" => Other,
    "*error-output*" => Other,
    "*query-io*" => Other,
    "*standard-input*" => Other,
    "*standard-output*" => Other,
    "*trace-output*" => Other,
    "*terminal-io*" => Other,
    "stream-error" => Other,
    "end-of-file" => Other,
];
