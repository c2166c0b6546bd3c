//! The closed set of navigable sections.

use std::fmt;

/// One of the fixed sections a visitor can navigate to.
///
/// The string form (`home`, `education`, ...) is used everywhere the page leaves
/// Rust: element ids, `data-page` attributes, the URL fragment and the history
/// payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    Education,
    Skills,
    Experience,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [PageId; 4] = [
        PageId::Home,
        PageId::Education,
        PageId::Skills,
        PageId::Experience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Education => "education",
            PageId::Skills => "skills",
            PageId::Experience => "experience",
        }
    }

    /// Exact match against the wire names; no trimming or case folding.
    pub fn parse(raw: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|page| page.as_str() == raw)
    }

    /// Like [`PageId::parse`] but anything unrecognised becomes `Home`.
    pub fn normalize(raw: &str) -> PageId {
        PageId::parse(raw).unwrap_or_default()
    }

    /// `#skills` style fragment for this page.
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for page in PageId::ALL {
            assert_eq!(PageId::parse(page.as_str()), Some(page));
        }
    }

    #[test]
    fn unknown_and_empty_normalize_to_home() {
        for raw in ["", "Home", " skills", "about", "#skills", "experience/"] {
            assert_eq!(PageId::normalize(raw), PageId::Home, "{raw:?}");
        }
        assert_eq!(PageId::normalize("skills"), PageId::Skills);
    }

    #[test]
    fn fragment_has_hash_prefix() {
        assert_eq!(PageId::Education.fragment(), "#education");
        assert_eq!(PageId::Experience.to_string(), "experience");
    }
}
