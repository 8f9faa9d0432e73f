//! Data and control flow dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "apply" => Function,
    "fboundp" => Function,
    "fmakunbound" => Function,
    "funcall" => Function,
    "function-lambda-expression" => Function,
    "functionp" => Function,
    "compiled-function-p" => Function,
    "not" => Function,
    "eq" => Function,
    "eql" => Function,
    "equal" => Function,
    "equalp" => Function,
    "identity" => Function,
    "complement" => Function,
    "constantly" => Function,
    "every" => Function,
    "some" => Function,
    "notevery" => Function,
    "notany" => Function,
    "values-list" => Function,
    "get-setf-expansion" => Function,
    "fdefinition" => Accessor,
    "values" => Accessor,
    "defun" => Macro,
    "defconstant" => Macro,
    "defparameter" => Macro,
    "defvar" => Macro,
    "destructuring-bind" => Macro,
    "psetq" => Macro,
    "return" => Macro,
    "and" => Macro,
    "cond" => Macro,
    "or" => Macro,
    "when" => Macro,
    "unless" => Macro,
    "case" => Macro,
    "ccase" => Macro,
    "ecase" => Macro,
    "typecase" => Macro,
    "ctypecase" => Macro,
    "etypecase" => Macro,
    "multiple-value-bind" => Macro,
    "multiple-value-list" => Macro,
    "multiple-value-setq" => Macro,
    "nth-value" => Macro,
    "prog" => Macro,
    "prog*" => Macro,
    "prog1" => Macro,
    "prog2" => Macro,
    "define-modify-macro" => Macro,
    "defsetf" => Macro,
    "define-setf-expander" => Macro,
    "setf" => Macro,
    "psetf" => Macro,
    "shiftf" => Macro,
    "rotatef" => Macro,
    "block" => SpecialOperator,
    "catch" => SpecialOperator,
    "go" => SpecialOperator,
    "flet" => SpecialOperator,
    "labels" => SpecialOperator,
    "macrolet" => SpecialOperator,
    "function" => SpecialOperator,
    "let" => SpecialOperator,
    "let*" => SpecialOperator,
    "progv" => SpecialOperator,
    "setq" => SpecialOperator,
    "return-from" => SpecialOperator,
    "tagbody" => SpecialOperator,
    "throw" => SpecialOperator,
    "unwind-protect" => SpecialOperator,
    "if" => SpecialOperator,
    "multiple-value-call" => SpecialOperator,
    "multiple-value-prog1" => SpecialOperator,
    "progn" => SpecialOperator,
    "call-arguments-limit" => Other,
    "lambda-list-keywords" => Other,
    "lambda-parameters-limit" => Other,
    "multiple-values-limit" => Other,
    "nil" => Other,
    "t" => Other,
    "control-error" => Other,
    "program-error" => Other,
    "undefined-function" => Other,
];
