//! Keyword classification table
//!
//! Maps upper-cased vocabulary labels to the token category the scanner
//! assigns them. The vocabulary is grouped into batches that follow the
//! chapters of the language standard; each batch carries a default category
//! that per-entry kinds may override.

use crate::lexer::TokenCategory;
use std::collections::HashMap;

/// Builds a `&[KeywordEntry]` from `"label" => Kind` pairs
macro_rules! entries {
    ($($label:literal => $kind:ident),* $(,)?) => {
        &[$($crate::keywords::KeywordEntry::new($label, $crate::keywords::EntryKind::$kind)),*]
    };
}

mod arrays;
mod characters;
mod conditions;
mod conses;
mod control;
mod environment;
mod evaluation;
mod filenames;
mod files;
mod hash_tables;
mod iteration;
mod numbers;
mod objects;
mod packages;
mod printer;
mod reader;
mod sequences;
mod streams;
mod strings;
mod structures;
mod symbols;
mod system_construction;
mod types;

/// Declared kind of a vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Ordinary function
    Function,
    /// Function only defined inside another form (e.g. `call-next-method`)
    LocalFunction,
    /// Function usable as a `setf` place
    Accessor,
    /// Macro
    Macro,
    /// Macro only defined inside another form (e.g. `loop-finish`)
    LocalMacro,
    /// Special operator
    SpecialOperator,
    /// Variables, constants, types, classes, declarations and the rest
    Other,
}

impl EntryKind {
    /// Kind named by a dictionary label such as `"Local Macro"`
    ///
    /// Labels that name no callable kind map to [`EntryKind::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Function" => EntryKind::Function,
            "Local Function" => EntryKind::LocalFunction,
            "Accessor" => EntryKind::Accessor,
            "Macro" => EntryKind::Macro,
            "Local Macro" => EntryKind::LocalMacro,
            "Special Operator" => EntryKind::SpecialOperator,
            _ => EntryKind::Other,
        }
    }

    /// Category an entry of this kind receives in a batch with `default`
    pub fn classify(self, default: TokenCategory) -> TokenCategory {
        match self {
            EntryKind::Macro | EntryKind::LocalMacro => TokenCategory::Macro,
            EntryKind::SpecialOperator => TokenCategory::SpecialOperator,
            EntryKind::Function | EntryKind::LocalFunction | EntryKind::Accessor => default,
            EntryKind::Other => default,
        }
    }
}

/// A single vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Symbol name as written in the dictionary (any case)
    pub label: &'static str,
    /// Declared kind
    pub kind: EntryKind,
}

impl KeywordEntry {
    /// Creates an entry
    pub const fn new(label: &'static str, kind: EntryKind) -> Self {
        KeywordEntry { label, kind }
    }
}

/// A named group of entries sharing a default category
#[derive(Debug, Clone, Copy)]
pub struct Batch {
    /// Batch name
    pub name: &'static str,
    /// Category for entries whose kind does not override it
    pub default: TokenCategory,
    /// Entries in the batch
    pub entries: &'static [KeywordEntry],
}

impl Batch {
    /// Creates a batch
    pub const fn new(
        name: &'static str,
        default: TokenCategory,
        entries: &'static [KeywordEntry],
    ) -> Self {
        Batch {
            name,
            default,
            entries,
        }
    }
}

/// Standard vocabulary, in registration order
pub const BATCHES: &[Batch] = &[
    Batch::new("arrays", TokenCategory::Keyword, arrays::ENTRIES),
    Batch::new("control", TokenCategory::Control, control::ENTRIES),
    Batch::new("types", TokenCategory::Keyword, types::ENTRIES),
    Batch::new("iteration", TokenCategory::Keyword, iteration::ENTRIES),
    Batch::new("objects", TokenCategory::Keyword, objects::ENTRIES),
    Batch::new("structures", TokenCategory::Keyword, structures::ENTRIES),
    Batch::new("conditions", TokenCategory::Keyword, conditions::ENTRIES),
    Batch::new("symbols", TokenCategory::Keyword, symbols::ENTRIES),
    Batch::new("packages", TokenCategory::PackageKeyword, packages::ENTRIES),
    Batch::new("numbers", TokenCategory::Keyword, numbers::ENTRIES),
    Batch::new("characters", TokenCategory::Keyword, characters::ENTRIES),
    Batch::new("conses", TokenCategory::Keyword, conses::ENTRIES),
    Batch::new("strings", TokenCategory::Keyword, strings::ENTRIES),
    Batch::new("sequences", TokenCategory::Keyword, sequences::ENTRIES),
    Batch::new("hash-tables", TokenCategory::Keyword, hash_tables::ENTRIES),
    Batch::new("filenames", TokenCategory::Keyword, filenames::ENTRIES),
    Batch::new("files", TokenCategory::Keyword, files::ENTRIES),
    Batch::new("streams", TokenCategory::Keyword, streams::ENTRIES),
    Batch::new("printer", TokenCategory::Keyword, printer::ENTRIES),
    Batch::new("reader", TokenCategory::Keyword, reader::ENTRIES),
    Batch::new("system-construction", TokenCategory::Keyword, system_construction::ENTRIES),
    Batch::new("environment", TokenCategory::Keyword, environment::ENTRIES),
    Batch::new("evaluation", TokenCategory::Keyword, evaluation::ENTRIES),
];

lazy_static::lazy_static! {
    static ref STANDARD: KeywordTable = KeywordTable::from_batches(BATCHES);
}

/// Flat label → category table
///
/// Labels are stored upper-cased. Lookups do no normalization, so callers
/// upper-case the candidate first.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    keywords: HashMap<String, TokenCategory>,
}

impl KeywordTable {
    /// Create an empty table
    pub fn new() -> Self {
        KeywordTable {
            keywords: HashMap::new(),
        }
    }

    /// Table holding the standard vocabulary
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn standard() -> &'static KeywordTable {
        &STANDARD
    }

    /// Build a table from batches; later batches win on duplicate labels
    pub fn from_batches(batches: &[Batch]) -> Self {
        let mut table = KeywordTable::new();
        for batch in batches {
            table.register_batch(batch.entries, batch.default);
        }
        tracing::debug!(
            batches = batches.len(),
            entries = table.len(),
            "keyword table built"
        );
        table
    }

    /// Register one label
    pub fn register(&mut self, label: &str, kind: EntryKind, default: TokenCategory) {
        self.keywords
            .insert(label.to_uppercase(), kind.classify(default));
    }

    /// Register every entry of a batch
    pub fn register_batch(&mut self, entries: &[KeywordEntry], default: TokenCategory) {
        for entry in entries {
            self.register(entry.label, entry.kind, default);
        }
    }

    /// Category for an already upper-cased label
    pub fn lookup(&self, label: &str) -> Option<TokenCategory> {
        self.keywords.get(label).copied()
    }

    /// Lower-cased labels starting with `prefix`, sorted
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_uppercase();
        let mut labels: Vec<String> = self
            .keywords
            .keys()
            .filter(|label| label.starts_with(&prefix))
            .map(|label| label.to_lowercase())
            .collect();
        labels.sort();
        labels
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the table has no labels
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_overrides_batch_default() {
        let mut table = KeywordTable::new();
        table.register_batch(
            entries![
                "when" => Macro,
                "loop-finish" => LocalMacro,
                "if" => SpecialOperator,
                "funcall" => Function,
                "call-next-method" => LocalFunction,
                "values" => Accessor,
                "t" => Other,
            ],
            TokenCategory::Control,
        );

        assert_eq!(table.lookup("WHEN"), Some(TokenCategory::Macro));
        assert_eq!(table.lookup("LOOP-FINISH"), Some(TokenCategory::Macro));
        assert_eq!(table.lookup("IF"), Some(TokenCategory::SpecialOperator));
        assert_eq!(table.lookup("FUNCALL"), Some(TokenCategory::Control));
        assert_eq!(table.lookup("CALL-NEXT-METHOD"), Some(TokenCategory::Control));
        assert_eq!(table.lookup("VALUES"), Some(TokenCategory::Control));
        assert_eq!(table.lookup("T"), Some(TokenCategory::Control));
    }

    #[test]
    fn test_lookup_does_not_normalize() {
        let mut table = KeywordTable::new();
        table.register("car", EntryKind::Accessor, TokenCategory::Keyword);

        assert_eq!(table.lookup("CAR"), Some(TokenCategory::Keyword));
        assert_eq!(table.lookup("car"), None);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut table = KeywordTable::new();
        table.register("dual", EntryKind::Function, TokenCategory::Keyword);
        table.register("dual", EntryKind::Function, TokenCategory::PackageKeyword);

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("DUAL"), Some(TokenCategory::PackageKeyword));
    }

    #[test]
    fn test_entry_kind_labels() {
        assert_eq!(EntryKind::from_label("Local Function"), EntryKind::LocalFunction);
        assert_eq!(EntryKind::from_label("Special Operator"), EntryKind::SpecialOperator);
        assert_eq!(EntryKind::from_label("Constant Variable"), EntryKind::Other);
        assert_eq!(EntryKind::from_label(""), EntryKind::Other);
    }

    #[test]
    fn test_standard_table() {
        let table = KeywordTable::standard();

        assert!(!table.is_empty());
        assert_eq!(BATCHES.len(), 23);
        assert_eq!(table.lookup("DEFUN"), Some(TokenCategory::Macro));
        assert_eq!(table.lookup("LET"), Some(TokenCategory::SpecialOperator));
        assert_eq!(table.lookup("FUNCALL"), Some(TokenCategory::Control));
        assert_eq!(table.lookup("NIL"), Some(TokenCategory::Control));
        assert_eq!(table.lookup("FIND-PACKAGE"), Some(TokenCategory::PackageKeyword));
        assert_eq!(table.lookup("IN-PACKAGE"), Some(TokenCategory::Macro));
        assert_eq!(table.lookup("*PACKAGE*"), Some(TokenCategory::PackageKeyword));
        assert_eq!(table.lookup("MAKE-ARRAY"), Some(TokenCategory::Keyword));
        assert_eq!(table.lookup("LOOP-FINISH"), Some(TokenCategory::Macro));
        assert_eq!(table.lookup("QUOTE"), Some(TokenCategory::SpecialOperator));
        assert_eq!(table.lookup("NOT-A-STANDARD-SYMBOL"), None);
    }

    #[test]
    fn test_standard_labels_are_upper_case() {
        let table = KeywordTable::standard();
        for batch in BATCHES {
            for entry in batch.entries {
                assert!(
                    table.lookup(&entry.label.to_uppercase()).is_some(),
                    "{} missing from {}",
                    entry.label,
                    batch.name
                );
            }
        }
    }

    #[test]
    fn test_completions() {
        let completions = KeywordTable::standard().completions("defp");

        assert_eq!(completions, vec!["defpackage", "defparameter"]);
        assert!(KeywordTable::new().completions("def").is_empty());
    }
}
