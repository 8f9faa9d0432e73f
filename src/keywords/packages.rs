//! Packages dictionary

use super::KeywordEntry;

pub(super) const ENTRIES: &[KeywordEntry] = entries![
    "export" => Function,
    "find-symbol" => Function,
    "find-package" => Function,
    "find-all-symbols" => Function,
    "import" => Function,
    "list-all-packages" => Function,
    "rename-package" => Function,
    "shadow" => Function,
    "shadowing-import" => Function,
    "delete-package" => Function,
    "make-package" => Function,
    "unexport" => Function,
    "unintern" => Function,
    "unuse-package" => Function,
    "use-package" => Function,
    "intern" => Function,
    "package-name" => Function,
    "package-nicknames" => Function,
    "package-shadowing-symbols" => Function,
    "package-use-list" => Function,
    "package-used-by-list" => Function,
    "packagep" => Function,
    "package-error-package" => Function,
    "defpackage" => Macro,
    "do-symbols" => Macro,
    "do-external-symbols" => Macro,
    "do-all-symbols" => Macro,
    "in-package" => Macro,
    "with-package-iterator" => Macro,
    "package" => Other,
    "*package*" => Other,
    "package-error" => Other,
];
