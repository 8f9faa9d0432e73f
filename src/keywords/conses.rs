//! Conses dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "cons" => Function,
    "consp" => Function,
    "atom" => Function,
    "rplaca" => Function,
    "rplacd" => Function,
    "copy-tree" => Function,
    "sublis" => Function,
    "nsublis" => Function,
    "subst" => Function,
    "subst-if" => Function,
    "subst-if-not" => Function,
    "nsubst" => Function,
    "nsubst-if" => Function,
    "nsubst-if-not" => Function,
    "tree-equal" => Function,
    "copy-list" => Function,
    "list" => Function,
    "list*" => Function,
    "list-length" => Function,
    "listp" => Function,
    "make-list" => Function,
    "endp" => Function,
    "null" => Function,
    "nconc" => Function,
    "append" => Function,
    "revappend" => Function,
    "nreconc" => Function,
    "butlast" => Function,
    "nbutlast" => Function,
    "last" => Function,
    "ldiff" => Function,
    "tailp" => Function,
    "nthcdr" => Function,
    "member" => Function,
    "member-if" => Function,
    "member-if-not" => Function,
    "mapc" => Function,
    "mapcar" => Function,
    "mapcan" => Function,
    "mapl" => Function,
    "maplist" => Function,
    "mapcon" => Function,
    "acons" => Function,
    "assoc" => Function,
    "assoc-if" => Function,
    "assoc-if-not" => Function,
    "copy-alist" => Function,
    "pairlis" => Function,
    "rassoc" => Function,
    "rassoc-if" => Function,
    "rassoc-if-not" => Function,
    "get-properties" => Function,
    "intersection" => Function,
    "nintersection" => Function,
    "adjoin" => Function,
    "set-difference" => Function,
    "nset-difference" => Function,
    "set-exclusive-or" => Function,
    "nset-exclusive-or" => Function,
    "subsetp" => Function,
    "union" => Function,
    "nunion" => Function,
    "car" => Accessor,
    "cdr" => Accessor,
    "caar" => Accessor,
    "cadr" => Accessor,
    "cdar" => Accessor,
    "cddr" => Accessor,
    "caddr" => Accessor,
    "cdddr" => Accessor,
    "cadddr" => Accessor,
    "first" => Accessor,
    "second" => Accessor,
    "third" => Accessor,
    "fourth" => Accessor,
    "fifth" => Accessor,
    "sixth" => Accessor,
    "seventh" => Accessor,
    "eighth" => Accessor,
    "ninth" => Accessor,
    "tenth" => Accessor,
    "nth" => Accessor,
    "rest" => Accessor,
    "getf" => Accessor,
    "push" => Macro,
    "pop" => Macro,
    "pushnew" => Macro,
    "remf" => Macro,
    "list" => Other,
    "cons" => Other,
    "null" => Other,
];
