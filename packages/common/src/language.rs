use std::fmt;

/// A programming language accepted by the external judge.
///
/// The judge addresses languages by numeric id; the platform passes those
/// ids through unchanged. Submitting an id outside this table is rejected
/// client-side before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Language {
    id: i32,
    name: &'static str,
    extension: &'static str,
}

/// Languages the judge currently executes, keyed by its id table.
pub const LANGUAGES: &[Language] = &[
    Language { id: 50, name: "C", extension: "c" },
    Language { id: 54, name: "C++", extension: "cpp" },
    Language { id: 60, name: "Go", extension: "go" },
    Language { id: 62, name: "Java", extension: "java" },
    Language { id: 63, name: "JavaScript", extension: "js" },
    Language { id: 71, name: "Python", extension: "py" },
    Language { id: 73, name: "Rust", extension: "rs" },
];

impl Language {
    /// Look up a language by its judge id.
    pub fn from_id(id: i32) -> Option<Language> {
        LANGUAGES.iter().find(|l| l.id == id).copied()
    }

    /// Look up a language by source file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.trim_start_matches('.');
        LANGUAGES
            .iter()
            .find(|l| l.extension.eq_ignore_ascii_case(ext))
            .copied()
    }

    /// Look up a language by display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Language> {
        LANGUAGES
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    /// The judge's numeric id for this language.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical source file extension.
    pub fn extension(&self) -> &'static str {
        self.extension
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Language::from_id(71).unwrap().name(), "Python");
        assert!(Language::from_id(999).is_none());
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs").unwrap().id(), 73);
        assert_eq!(Language::from_extension(".CPP").unwrap().name(), "C++");
        assert!(Language::from_extension("txt").is_none());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("java").unwrap().id(), 62);
        assert_eq!(Language::from_name(" c++ ").unwrap().id(), 54);
        assert!(Language::from_name("COBOL").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.extension(), b.extension());
            }
        }
    }
}
