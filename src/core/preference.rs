//! Language preference persistence using localStorage.
//!
//! A single key holds the locale token. Anything other than a known token
//! is treated as "no preference".

use prime_core::Locale;

use crate::config::LANGUAGE_PREFERENCE_KEY;
use crate::core::error::PreferenceError;
use crate::utils::dom;

/// Read the stored locale, falling back to the default.
pub fn load_locale() -> Locale {
    let stored = dom::local_storage()
        .and_then(|s| s.get_item(LANGUAGE_PREFERENCE_KEY).ok().flatten());
    Locale::from_preference(stored.as_deref())
}

/// Persist `locale` as the visitor's preference.
pub fn save_locale(locale: Locale) -> Result<(), PreferenceError> {
    let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
    storage
        .set_item(LANGUAGE_PREFERENCE_KEY, locale.token())
        .map_err(|_| PreferenceError::SaveFailed)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(LANGUAGE_PREFERENCE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_missing_preference_is_english() {
        clear();
        assert_eq!(load_locale(), Locale::En);
    }

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        clear();
        save_locale(Locale::Ar).unwrap();
        assert_eq!(load_locale(), Locale::Ar);
        let stored = dom::local_storage()
            .and_then(|s| s.get_item(LANGUAGE_PREFERENCE_KEY).ok().flatten());
        assert_eq!(stored.as_deref(), Some("ar"));
        clear();
    }

    #[wasm_bindgen_test]
    fn test_unknown_token_is_english() {
        let storage = dom::local_storage().unwrap();
        storage.set_item(LANGUAGE_PREFERENCE_KEY, "klingon").unwrap();
        assert_eq!(load_locale(), Locale::En);
        clear();
    }
}
