//! Arrays dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "array" => Other,
    "simple-array" => Other,
    "vector" => Other,
    "simple-vector" => Other,
    "bit-vector" => Other,
    "simple-bit-vector" => Other,
    "array-dimension-limit" => Other,
    "array-rank-limit" => Other,
    "array-total-size-limit" => Other,
    "make-array" => Function,
    "adjust-array" => Function,
    "adjustable-array-p" => Function,
    "array-dimension" => Function,
    "array-dimensions" => Function,
    "array-element-type" => Function,
    "array-has-fill-pointer-p" => Function,
    "array-displacement" => Function,
    "array-in-bounds-p" => Function,
    "array-rank" => Function,
    "array-row-major-index" => Function,
    "array-total-size" => Function,
    "arrayp" => Function,
    "upgraded-array-element-type" => Function,
    "simple-vector-p" => Function,
    "vector-pop" => Function,
    "vector-push" => Function,
    "vector-push-extend" => Function,
    "vectorp" => Function,
    "bit-and" => Function,
    "bit-andc1" => Function,
    "bit-andc2" => Function,
    "bit-eqv" => Function,
    "bit-ior" => Function,
    "bit-nand" => Function,
    "bit-nor" => Function,
    "bit-not" => Function,
    "bit-orc1" => Function,
    "bit-orc2" => Function,
    "bit-xor" => Function,
    "bit-vector-p" => Function,
    "simple-bit-vector-p" => Function,
    "aref" => Accessor,
    "fill-pointer" => Accessor,
    "row-major-aref" => Accessor,
    "svref" => Accessor,
    "bit" => Accessor,
    "sbit" => Accessor,
];
