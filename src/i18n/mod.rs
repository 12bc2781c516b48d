//! Locale handling for operator-facing notices
//!
//! Every blocking notice (validation failures, backend rejections, CLI
//! output) goes through the `t!` catalogs in `locales/`. English is the
//! fallback; a Korean catalog ships alongside it. The `rust_i18n::i18n!`
//! macro itself is declared at the crate root.
//!
//! `BALHAENG_LANG` selects the locale at startup; values like `ko-KR` or
//! `korean` collapse to the catalog code.

/// Activate a locale, collapsing region variants to a catalog code
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(normalize_locale(locale));
}

/// Catalog code currently in effect
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Pick the locale from `BALHAENG_LANG`, defaulting to English
pub fn init_from_env() {
    match std::env::var("BALHAENG_LANG") {
        Ok(lang) => set_locale(&lang),
        Err(_) => set_locale("en"),
    }
}

fn normalize_locale(locale: &str) -> &'static str {
    let lower = locale.to_lowercase();
    match lower.as_str() {
        s if s.starts_with("ko") || s == "korean" => "ko",
        _ => "en",
    }
}

/// Translate a key with optional parameters
///
/// This is a re-export of rust_i18n::t! for convenience.
#[doc(inline)]
pub use rust_i18n::t;
