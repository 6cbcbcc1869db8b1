//! Bundled translations and the languages they describe.
//!
//! Each bundle names its own language under `language.name` and
//! `language.flag`, so adding a language means adding a JSON file and a line
//! to [`BUNDLES`].

use serde::Deserialize;
use std::collections::HashMap;

/// Language used until the visitor picks another one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Translation bundles by language code.
const BUNDLES: [(&str, &str); 4] = [
    ("en", include_str!("../translations/en.json")),
    ("es", include_str!("../translations/es.json")),
    ("fr", include_str!("../translations/fr.json")),
    ("de", include_str!("../translations/de.json")),
];

/// A language offered in the selector.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub native_name: String,
    pub flag: String,
}

#[derive(Deserialize)]
struct BundleHeader {
    language: LanguageHeader,
}

#[derive(Deserialize)]
struct LanguageHeader {
    name: String,
    flag: String,
}

impl LanguageInfo {
    /// Read the language header of a bundle. `None` if the bundle has none.
    fn from_bundle(code: &'static str, bundle: &str) -> Option<Self> {
        let BundleHeader { language } = serde_json::from_str(bundle).ok()?;
        Some(Self {
            code,
            native_name: language.name,
            flag: language.flag,
        })
    }
}

/// Bundles keyed by language code, as the i18n provider expects them.
pub fn translations() -> HashMap<&'static str, &'static str> {
    BUNDLES.into_iter().collect()
}

/// Languages with a readable bundle, sorted by native name.
pub fn supported_languages() -> Vec<LanguageInfo> {
    let mut languages: Vec<_> = BUNDLES
        .iter()
        .filter_map(|&(code, bundle)| LanguageInfo::from_bundle(code, bundle))
        .collect();
    languages.sort_by(|a, b| a.native_name.cmp(&b.native_name));
    languages
}

pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages()
        .into_iter()
        .find(|info| info.code == code)
}
