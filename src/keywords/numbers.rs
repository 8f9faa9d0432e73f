//! Numbers dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "=" => Function,
    "/=" => Function,
    "<" => Function,
    ">" => Function,
    "<=" => Function,
    ">=" => Function,
    "max" => Function,
    "min" => Function,
    "minusp" => Function,
    "plusp" => Function,
    "zerop" => Function,
    "floor" => Function,
    "ffloor" => Function,
    "ceiling" => Function,
    "fceiling" => Function,
    "truncate" => Function,
    "ftruncate" => Function,
    "round" => Function,
    "fround" => Function,
    "sin" => Function,
    "cos" => Function,
    "tan" => Function,
    "asin" => Function,
    "acos" => Function,
    "atan" => Function,
    "sinh" => Function,
    "cosh" => Function,
    "tanh" => Function,
    "asinh" => Function,
    "acosh" => Function,
    "atanh" => Function,
    "*" => Function,
    "+" => Function,
    "-" => Function,
    "/" => Function,
    "1+" => Function,
    "1-" => Function,
    "abs" => Function,
    "evenp" => Function,
    "oddp" => Function,
    "exp" => Function,
    "expt" => Function,
    "gcd" => Function,
    "lcm" => Function,
    "log" => Function,
    "mod" => Function,
    "rem" => Function,
    "signum" => Function,
    "sqrt" => Function,
    "isqrt" => Function,
    "make-random-state" => Function,
    "random" => Function,
    "random-state-p" => Function,
    "numberp" => Function,
    "cis" => Function,
    "complex" => Function,
    "complexp" => Function,
    "conjugate" => Function,
    "phase" => Function,
    "realpart" => Function,
    "imagpart" => Function,
    "upgraded-complex-part-type" => Function,
    "realp" => Function,
    "numerator" => Function,
    "denominator" => Function,
    "rational" => Function,
    "rationalize" => Function,
    "rationalp" => Function,
    "ash" => Function,
    "integer-length" => Function,
    "integerp" => Function,
    "parse-integer" => Function,
    "boole" => Function,
    "logand" => Function,
    "logandc1" => Function,
    "logandc2" => Function,
    "logeqv" => Function,
    "logior" => Function,
    "lognand" => Function,
    "lognor" => Function,
    "lognot" => Function,
    "logorc1" => Function,
    "logorc2" => Function,
    "logxor" => Function,
    "logbitp" => Function,
    "logcount" => Function,
    "logtest" => Function,
    "byte" => Function,
    "byte-size" => Function,
    "byte-position" => Function,
    "deposit-field" => Function,
    "dpb" => Function,
    "mask-field" => Function,
    "decode-float" => Function,
    "scale-float" => Function,
    "float-radix" => Function,
    "float-sign" => Function,
    "float-digits" => Function,
    "float-precision" => Function,
    "integer-decode-float" => Function,
    "float" => Function,
    "floatp" => Function,
    "arithmetic-error-operands" => Function,
    "arithmetic-error-operation" => Function,
    "ldb" => Accessor,
    "incf" => Macro,
    "decf" => Macro,
    "number" => Other,
    "complex" => Other,
    "real" => Other,
    "float" => Other,
    "short-float" => Other,
    "single-float" => Other,
    "double-float" => Other,
    "long-float" => Other,
    "rational" => Other,
    "ratio" => Other,
    "integer" => Other,
    "fixnum" => Other,
    "bignum" => Other,
    "signed-byte" => Other,
    "unsigned-byte" => Other,
    "mod" => Other,
    "bit" => Other,
    "pi" => Other,
    "most-positive-fixnum" => Other,
    "most-negative-fixnum" => Other,
    "*random-state*" => Other,
    "arithmetic-error" => Other,
    "division-by-zero" => Other,
    "floating-point-invalid-operation" => Other,
    "floating-point-overflow" => Other,
    "floating-point-underflow" => Other,
];
