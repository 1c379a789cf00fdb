use chrono::{Locale, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Map a config locale string to a chrono locale. Unknown values fall
/// back to English rather than failing the render.
pub fn resolve_locale(name: &str) -> Locale {
    match name {
        "de_DE" | "de" => Locale::de_DE,
        "it_IT" | "it" => Locale::it_IT,
        "fr_FR" | "fr" => Locale::fr_FR,
        "en_GB" => Locale::en_GB,
        _ => Locale::en_US,
    }
}

/// Long localized date used for day headings and the document header,
/// e.g. "Samstag, 12. Juli 2026" under `de_DE`.
pub fn format_day_date(date: NaiveDate, locale: Locale) -> String {
    let pattern = match locale {
        Locale::en_US | Locale::en_GB => "%A, %B %-d, %Y",
        _ => "%A, %-d. %B %Y",
    };
    date.format_localized(pattern, locale).to_string()
}
