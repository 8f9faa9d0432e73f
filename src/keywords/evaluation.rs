//! Evaluation and compilation dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "compile" => Function,
    "eval" => Function,
    "macroexpand" => Function,
    "macroexpand-1" => Function,
    "proclaim" => Function,
    "special-operator-p" => Function,
    "constantp" => Function,
    "compiler-macro-function" => Accessor,
    "macro-function" => Accessor,
    "lambda" => Macro,
    "define-compiler-macro" => Macro,
    "defmacro" => Macro,
    "define-symbol-macro" => Macro,
    "declaim" => Macro,
    "eval-when" => SpecialOperator,
    "load-time-value" => SpecialOperator,
    "quote" => SpecialOperator,
    "symbol-macrolet" => SpecialOperator,
    "locally" => SpecialOperator,
    "the" => SpecialOperator,
    "declare" => Other,
    "ignore" => Other,
    "ignorable" => Other,
    "dynamic-extent" => Other,
    "type" => Other,
    "inline" => Other,
    "notinline" => Other,
    "ftype" => Other,
    "optimize" => Other,
    "special" => Other,
    "compilation-speed" => Other,
    "debug" => Other,
    "safety" => Other,
    "space" => Other,
    "speed" => Other,
    "*macroexpand-hook*" => Other,
];
