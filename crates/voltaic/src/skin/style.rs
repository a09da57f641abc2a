//! Style deduplication.
//!
//! Inline `style` declarations are normalized (declarations sorted by
//! property) and mapped to short class names. Identical styles share one
//! class across every symbol of a skin.

use indexmap::IndexMap;

/// Normalized style text to class name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleClasses {
    classes: IndexMap<String, String>,
}

impl StyleClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a style declaration: `stroke: red; fill:none` becomes
    /// `fill:none;stroke:red`. Returns `None` for empty declarations.
    pub fn normalize(style: &str) -> Option<String> {
        let mut declarations: Vec<(String, &str)> = style
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .map(|(property, value)| (property.trim().to_ascii_lowercase(), value.trim()))
            .filter(|(property, value)| !property.is_empty() && !value.is_empty())
            .collect();
        if declarations.is_empty() {
            return None;
        }
        declarations.sort_by(|a, b| a.0.cmp(&b.0));
        Some(
            declarations
                .iter()
                .map(|(property, value)| format!("{property}:{value}"))
                .collect::<Vec<_>>()
                .join(";"),
        )
    }

    /// Returns the class for `style`, registering it on first use.
    pub fn class_for(&mut self, style: &str) -> Option<String> {
        let normalized = Self::normalize(style)?;
        let next = self.classes.len();
        Some(
            self.classes
                .entry(normalized)
                .or_insert_with(|| format!("s{next}"))
                .clone(),
        )
    }

    /// `(class, normalized style)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes
            .iter()
            .map(|(style, class)| (class.as_str(), style.as_str()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_declarations() {
        assert_eq!(
            StyleClasses::normalize(" stroke: #000 ; fill:none;").as_deref(),
            Some("fill:none;stroke:#000")
        );
        assert_eq!(StyleClasses::normalize(" ; "), None);
    }

    #[test]
    fn test_identical_styles_share_a_class() {
        let mut classes = StyleClasses::new();
        let first = classes.class_for("fill:none;stroke:#000").unwrap();
        let second = classes.class_for("stroke:#000; fill:none").unwrap();
        let third = classes.class_for("fill:#000").unwrap();
        assert_eq!(first, "s0");
        assert_eq!(second, first);
        assert_eq!(third, "s1");
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut classes = StyleClasses::new();
        classes.class_for("stroke:red");
        classes.class_for("fill:blue");
        let pairs: Vec<_> = classes.iter().collect();
        assert_eq!(pairs, vec![("s0", "stroke:red"), ("s1", "fill:blue")]);
    }
}
