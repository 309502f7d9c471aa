//! Built-in country list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub iso: &'static str,
    pub dial_code: &'static str,
    pub flag: &'static str,
}

impl Country {
    pub const fn new(
        name: &'static str,
        iso: &'static str,
        dial_code: &'static str,
        flag: &'static str,
    ) -> Self {
        Self {
            name,
            iso,
            dial_code,
            flag,
        }
    }

    /// Image source of the country's flag.
    pub fn icon_path(&self) -> String {
        format!("/static/flags/{}.png", self.iso.to_ascii_lowercase())
    }
}

const COUNTRIES: &[Country] = &[
    Country::new("United States", "US", "+1", "🇺🇸"),
    Country::new("United Kingdom", "GB", "+44", "🇬🇧"),
    Country::new("India", "IN", "+91", "🇮🇳"),
    Country::new("Germany", "DE", "+49", "🇩🇪"),
    Country::new("France", "FR", "+33", "🇫🇷"),
    Country::new("Japan", "JP", "+81", "🇯🇵"),
    Country::new("Brazil", "BR", "+55", "🇧🇷"),
    Country::new("Australia", "AU", "+61", "🇦🇺"),
    Country::new("Nigeria", "NG", "+234", "🇳🇬"),
    Country::new("United Arab Emirates", "AE", "+971", "🇦🇪"),
];

pub fn countries() -> &'static [Country] {
    COUNTRIES
}

/// Look a country up by ISO code, ignoring case.
pub fn find_by_iso(iso: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.iso.eq_ignore_ascii_case(iso))
}
