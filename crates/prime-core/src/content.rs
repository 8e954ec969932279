//! Bilingual site content.
//!
//! The page copy is kept in a TOML file so both languages sit side by side.
//! Every user-facing string is a [`Localized`] pair resolved against the
//! active [`Locale`].

use serde::Deserialize;

use crate::error::ContentError;
use crate::locale::Locale;

/// A string in both site languages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Localized {
    pub en: String,
    pub ar: String,
}

impl Localized {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

/// Entry in the navigation bar and mobile menu.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: Localized,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub title: Localized,
    pub subtitle: Localized,
    pub cta_label: Localized,
    pub cta_href: String,
}

/// One carousel slide.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Slide {
    /// Image URL, relative to the site root.
    pub image: String,
    pub title: Localized,
    pub caption: Localized,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Gallery {
    pub heading: Localized,
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct About {
    pub heading: Localized,
    pub paragraphs: Vec<Localized>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub title: Localized,
    pub description: Localized,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Services {
    pub heading: Localized,
    pub items: Vec<Service>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub heading: Localized,
    pub intro: Localized,
    pub phone: String,
    pub email: String,
    pub location: Localized,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Footer {
    pub text: Localized,
}

/// All page copy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub brand: Localized,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub gallery: Gallery,
    pub about: About,
    pub services: Services,
    pub contact: Contact,
    pub footer: Footer,
}

impl SiteContent {
    /// Parses and validates a TOML content document.
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        if content.gallery.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }
        Ok(content)
    }

    /// Number of gallery slides.
    pub fn slide_count(&self) -> usize {
        self.gallery.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SLIDE_COUNT;

    const SITE_TOML: &str = include_str!("../../../assets/content/site.toml");

    #[test]
    fn test_bundled_content_parses() {
        let content = SiteContent::parse(SITE_TOML).unwrap();
        assert_eq!(content.slide_count(), DEFAULT_SLIDE_COUNT);
        assert!(!content.nav.is_empty());
    }

    #[test]
    fn test_bundled_nav_links_are_anchors() {
        let content = SiteContent::parse(SITE_TOML).unwrap();
        for link in &content.nav {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn test_localized_get() {
        let text = Localized {
            en: "Menu".to_string(),
            ar: "القائمة".to_string(),
        };
        assert_eq!(text.get(Locale::En), "Menu");
        assert_eq!(text.get(Locale::Ar), "القائمة");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = SiteContent::parse("brand = ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = SiteContent::parse("[brand]\nen = \"PRIME\"\nar = \"برايم\"\n").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let mut doc: toml::Table = toml::from_str(SITE_TOML).unwrap();
        doc.get_mut("gallery")
            .and_then(|v| v.as_table_mut())
            .unwrap()
            .insert("slides".to_string(), toml::Value::Array(Vec::new()));
        let source = toml::to_string(&doc).unwrap();
        assert_eq!(SiteContent::parse(&source), Err(ContentError::NoSlides));
    }
}
