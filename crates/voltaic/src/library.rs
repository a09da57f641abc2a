//! The symbol library: symbol name to ordered terminal names.
//!
//! A library is a flat TOML table. Every entry lists at least one terminal;
//! the order matters because unnamed wire ends default to terminal 0 or 1.
//!
//! ```toml
//! [R]
//! terminals = ["1", "2"]
//!
//! [U]
//! terminals = ["inp", "inn", "out"]
//! boxed = true
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_SYMBOLS: &str = include_str!("../assets/symbols.toml");

/// Errors raised while loading a symbol library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Invalid symbol library: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Symbol `{0}` must be named in uppercase")]
    InvalidName(String),

    #[error("Symbol `{0}` declares no terminals")]
    NoTerminals(String),

    #[error("Symbol `{symbol}` declares terminal `{terminal}` more than once")]
    DuplicateTerminal { symbol: String, terminal: String },
}

/// Terminal information for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolInfo {
    terminals: Vec<String>,

    /// Drawn as a rectangle sized from its content instead of skin artwork.
    #[serde(default)]
    boxed: bool,
}

impl SymbolInfo {
    /// Creates symbol information from terminal names.
    pub fn new(terminals: Vec<String>, boxed: bool) -> Self {
        Self { terminals, boxed }
    }

    /// Terminal names in declaration order.
    pub fn terminals(&self) -> &[String] {
        &self.terminals
    }

    /// Returns `true` if the symbol's shape is computed from its content.
    pub fn is_boxed(&self) -> bool {
        self.boxed
    }

    /// Returns `true` if the symbol declares `terminal`.
    pub fn has_terminal(&self, terminal: &str) -> bool {
        self.terminals.iter().any(|t| t == terminal)
    }
}

/// A table of known symbols, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SymbolLibrary {
    symbols: IndexMap<String, SymbolInfo>,
}

impl SymbolLibrary {
    /// Parses and validates a library from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a [`LibraryError`] if the text is not valid TOML, or if a
    /// symbol name is not uppercase, has no terminals, or repeats a terminal.
    pub fn from_toml(text: &str) -> Result<Self, LibraryError> {
        let symbols: IndexMap<String, SymbolInfo> = toml::from_str(text)?;
        let library = Self { symbols };
        library.validate()?;
        debug!(symbols_len = library.symbols.len(); "Loaded symbol library");
        Ok(library)
    }

    /// The library shipped with Voltaic.
    pub fn builtin() -> Self {
        Self::from_toml(BUILTIN_SYMBOLS).expect("built-in symbol library is valid")
    }

    /// Looks up a symbol by name.
    pub fn get(&self, name: &str) -> Option<&SymbolInfo> {
        self.symbols.get(name)
    }

    /// Adds or replaces a symbol.
    ///
    /// # Errors
    ///
    /// Returns a [`LibraryError`] if the entry breaks library invariants.
    pub fn insert(&mut self, name: impl Into<String>, info: SymbolInfo) -> Result<(), LibraryError> {
        let name = name.into();
        Self::validate_entry(&name, &info)?;
        self.symbols.insert(name, info);
        Ok(())
    }

    /// Merges `other` into this library; entries of `other` win.
    pub fn extend(&mut self, other: SymbolLibrary) {
        self.symbols.extend(other.symbols);
    }

    /// Symbol names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    fn validate(&self) -> Result<(), LibraryError> {
        self.symbols
            .iter()
            .try_for_each(|(name, info)| Self::validate_entry(name, info))
    }

    fn validate_entry(name: &str, info: &SymbolInfo) -> Result<(), LibraryError> {
        if name.is_empty() || name.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(LibraryError::InvalidName(name.to_string()));
        }
        if info.terminals.is_empty() {
            return Err(LibraryError::NoTerminals(name.to_string()));
        }
        let mut seen = HashSet::new();
        for terminal in &info.terminals {
            if !seen.insert(terminal.as_str()) {
                return Err(LibraryError::DuplicateTerminal {
                    symbol: name.to_string(),
                    terminal: terminal.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library() {
        let library = SymbolLibrary::builtin();
        let resistor = library.get("R").unwrap();
        assert_eq!(resistor.terminals(), ["1", "2"]);
        assert!(!resistor.is_boxed());
        assert!(library.get("U").unwrap().is_boxed());
        assert!(library.get("GND").is_some());
        assert_eq!(library.names().next(), Some("R"));
    }

    #[test]
    fn test_from_toml_preserves_order() {
        let library = SymbolLibrary::from_toml(
            r#"
            [Z]
            terminals = ["b", "a"]
            [A]
            terminals = ["x"]
            "#,
        )
        .unwrap();
        assert_eq!(library.names().collect::<Vec<_>>(), vec!["Z", "A"]);
        assert_eq!(library.get("Z").unwrap().terminals(), ["b", "a"]);
    }

    #[test]
    fn test_rejects_empty_terminals() {
        let err = SymbolLibrary::from_toml("[R]\nterminals = []\n").unwrap_err();
        assert!(matches!(err, LibraryError::NoTerminals(name) if name == "R"));
    }

    #[test]
    fn test_rejects_lowercase_name() {
        let err = SymbolLibrary::from_toml("[r]\nterminals = [\"1\"]\n").unwrap_err();
        assert!(matches!(err, LibraryError::InvalidName(_)));
    }

    #[test]
    fn test_rejects_duplicate_terminal() {
        let mut library = SymbolLibrary::default();
        let err = library
            .insert("X", SymbolInfo::new(vec!["1".into(), "1".into()], false))
            .unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateTerminal { .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            SymbolLibrary::from_toml("[R\n"),
            Err(LibraryError::Toml(_))
        ));
    }

    #[test]
    fn test_extend_overrides() {
        let mut library = SymbolLibrary::builtin();
        let custom = SymbolLibrary::from_toml("[R]\nterminals = [\"a\", \"b\"]\n").unwrap();
        library.extend(custom);
        assert_eq!(library.get("R").unwrap().terminals(), ["a", "b"]);
    }
}
