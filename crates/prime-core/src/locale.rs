//! Site locale and reading direction.
//!
//! The site ships in exactly two languages. Each [`Locale`] carries a
//! reading [`Direction`], a storage token, and a document title.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// Text direction of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Active page language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, left-to-right (default)
    #[default]
    En,
    /// Arabic, right-to-left
    Ar,
}

impl Locale {
    /// The other supported locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    /// Token used for the `lang` attribute and the stored preference.
    pub fn token(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Document title shown while this locale is active.
    pub fn title(self) -> &'static str {
        match self {
            Locale::En => "PRIME by Asma - Catering & Food Services",
            Locale::Ar => "برايم - خدمات الطعام والضيافة",
        }
    }

    /// Label for the language toggle: names the locale a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::En => "العربية",
            Locale::Ar => "English",
        }
    }

    /// Resolve a stored preference. Missing or unrecognized values fall back
    /// to the default locale.
    pub fn from_preference(stored: Option<&str>) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(LocaleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english_ltr() {
        let locale = Locale::default();
        assert_eq!(locale, Locale::En);
        assert_eq!(locale.direction(), Direction::Ltr);
        assert_eq!(locale.direction().as_attr(), "ltr");
    }

    #[test]
    fn test_toggle_to_arabic() {
        let locale = Locale::En.toggled();
        assert_eq!(locale, Locale::Ar);
        assert_eq!(locale.direction().as_attr(), "rtl");
        assert_eq!(locale.token(), "ar");
        assert_eq!(locale.title(), "برايم - خدمات الطعام والضيافة");
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for locale in [Locale::En, Locale::Ar] {
            let back = locale.toggled().toggled();
            assert_eq!(back, locale);
            assert_eq!(back.direction(), locale.direction());
            assert_eq!(back.title(), locale.title());
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ar".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(LocaleError::Unknown("fr".to_string()))
        );
        assert!("AR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_from_preference() {
        assert_eq!(Locale::from_preference(None), Locale::En);
        assert_eq!(Locale::from_preference(Some("ar")), Locale::Ar);
        assert_eq!(Locale::from_preference(Some("en")), Locale::En);
        assert_eq!(Locale::from_preference(Some("")), Locale::En);
        assert_eq!(Locale::from_preference(Some("arabic")), Locale::En);
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(Locale::Ar.to_string(), "ar");
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
