use thiserror::Error;

use crate::Section;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("section [{section}] not found")]
    SectionNotFound { section: String },

    #[error("key '{key}' not found in section [{section}]")]
    KeyNotFound { section: String, key: String },
}

/// The in-memory form of an INI file: a set of uniquely named sections.
///
/// Sections keep insertion order, so a document written back out lists its
/// sections the way they were read. Section and key names are compared
/// case-sensitively.
///
/// The derived `PartialEq` is order-sensitive; use `same_content` to compare
/// two documents regardless of section or key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self { sections: vec![] }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name() == name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Add `section`, replacing (not merging) any section with the same name.
    /// A replaced section keeps its position. Returns the replaced section.
    pub fn insert_section(&mut self, section: Section) -> Option<Section> {
        match self.section_mut(section.name()) {
            Some(existing) => Some(std::mem::replace(existing, section)),
            None => {
                self.sections.push(section);
                None
            }
        }
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.name() == name)?;
        Some(self.sections.remove(index))
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Look up `section`/`key`, telling apart a missing section from a missing key.
    pub fn lookup(&self, section: &str, key: &str) -> Result<&str, LookupError> {
        let found = self
            .section(section)
            .ok_or_else(|| LookupError::SectionNotFound {
                section: section.to_string(),
            })?;
        found.get(key).ok_or_else(|| LookupError::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Overwrite the value of an existing key. Never creates sections or keys.
    /// Returns the previous value.
    pub fn set_existing(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<String>,
    ) -> Result<String, LookupError> {
        let Some(found) = self.section_mut(section) else {
            return Err(LookupError::SectionNotFound {
                section: section.to_string(),
            });
        };
        if !found.contains_key(key) {
            return Err(LookupError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            });
        }
        Ok(found.insert(key, value).unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Same sections with the same entries, ignoring section and key order.
    pub fn same_content(&self, other: &Document) -> bool {
        self.len() == other.len()
            && self.sections.iter().all(|s| {
                other
                    .section(s.name())
                    .is_some_and(|o| s.same_content(o))
            })
    }
}

impl FromIterator<Section> for Document {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut doc = Document::new();
        for section in iter {
            doc.insert_section(section);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_doc() -> Document {
        let mut db = Section::new("DB");
        db.insert("host", "localhost");
        db.insert("port", "5432");
        Document::from_iter([db])
    }

    #[test]
    fn test_lookup_found() {
        let doc = db_doc();
        assert_eq!(doc.lookup("DB", "port"), Ok("5432"));
        assert_eq!(doc.get("DB", "host"), Some("localhost"));
    }

    #[test]
    fn test_lookup_missing_section() {
        let doc = db_doc();
        assert_eq!(
            doc.lookup("Ghost", "x"),
            Err(LookupError::SectionNotFound {
                section: "Ghost".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_missing_key() {
        let doc = db_doc();
        assert_eq!(
            doc.lookup("DB", "missing"),
            Err(LookupError::KeyNotFound {
                section: "DB".to_string(),
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_set_existing_never_creates() {
        let mut doc = db_doc();
        assert_eq!(doc.set_existing("DB", "port", "5433"), Ok("5432".to_string()));
        assert_eq!(doc.get("DB", "port"), Some("5433"));

        assert!(doc.set_existing("DB", "user", "admin").is_err());
        assert!(doc.set_existing("Cache", "ttl", "60").is_err());
        assert_eq!(doc, {
            let mut expected = db_doc();
            expected.section_mut("DB").unwrap().insert("port", "5433");
            expected
        });
    }

    #[test]
    fn test_insert_section_replaces_in_place() {
        let mut doc = db_doc();
        doc.insert_section(Section::new("Cache"));

        let mut replacement = Section::new("DB");
        replacement.insert("host", "remote");
        let old = doc.insert_section(replacement).unwrap();

        assert_eq!(old.get("port"), Some("5432"));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sections()[0].name(), "DB");
        assert_eq!(doc.get("DB", "port"), None);
        assert_eq!(doc.get("DB", "host"), Some("remote"));
    }

    #[test]
    fn test_remove_section() {
        let mut doc = db_doc();
        assert!(doc.remove_section("DB").is_some());
        assert!(doc.remove_section("DB").is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_same_content_ignores_section_order() {
        let a = Document::from_iter([Section::new("A"), Section::new("B")]);
        let b = Document::from_iter([Section::new("B"), Section::new("A")]);
        assert_ne!(a, b);
        assert!(a.same_content(&b));
        assert!(!a.same_content(&Document::from_iter([Section::new("A")])));
    }
}
