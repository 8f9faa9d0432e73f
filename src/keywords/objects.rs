//! Objects dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "ensure-generic-function" => Function,
    "allocate-instance" => Function,
    "reinitialize-instance" => Function,
    "shared-initialize" => Function,
    "update-instance-for-different-class" => Function,
    "update-instance-for-redefined-class" => Function,
    "change-class" => Function,
    "slot-boundp" => Function,
    "slot-exists-p" => Function,
    "slot-makunbound" => Function,
    "slot-missing" => Function,
    "slot-unbound" => Function,
    "make-instance" => Function,
    "initialize-instance" => Function,
    "class-name" => Function,
    "make-instances-obsolete" => Function,
    "make-load-form" => Function,
    "make-load-form-saving-slots" => Function,
    "method-qualifiers" => Function,
    "no-applicable-method" => Function,
    "no-next-method" => Function,
    "remove-method" => Function,
    "add-method" => Function,
    "find-method" => Function,
    "compute-applicable-methods" => Function,
    "function-keywords" => Function,
    "invalid-method-error" => Function,
    "method-combination-error" => Function,
    "unbound-slot-instance" => Function,
    "class-of" => Function,
    "slot-value" => Accessor,
    "find-class" => Accessor,
    "call-next-method" => LocalFunction,
    "next-method-p" => LocalFunction,
    "with-accessors" => Macro,
    "with-slots" => Macro,
    "defclass" => Macro,
    "defgeneric" => Macro,
    "defmethod" => Macro,
    "define-method-combination" => Macro,
    "call-method" => LocalMacro,
    "make-method" => LocalMacro,
    "standard-object" => Other,
    "standard-class" => Other,
    "standard-generic-function" => Other,
    "standard-method" => Other,
    "structure-object" => Other,
    "built-in-class" => Other,
    "unbound-slot" => Other,
];
