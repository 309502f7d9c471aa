use std::collections::HashSet;

use country_picker::catalog::{self, Country};

#[test]
fn test_icon_path_uses_lowercase_iso() {
    let country = Country::new("Testland", "TL", "+999", "🏳");
    assert_eq!(country.icon_path(), "/static/flags/tl.png");
}

#[test]
fn test_find_by_iso_ignores_case() {
    let us = catalog::find_by_iso("us").unwrap();
    assert_eq!(us.dial_code, "+1");
    assert_eq!(catalog::find_by_iso("US"), Some(us));
    assert_eq!(catalog::find_by_iso("XX"), None);
}

#[test]
fn test_catalog_entries_are_well_formed() {
    let countries = catalog::countries();
    assert!(!countries.is_empty());

    let mut seen = HashSet::new();
    for country in countries {
        assert!(seen.insert(country.iso), "duplicate ISO code {}", country.iso);
        assert_eq!(country.iso.len(), 2, "{}", country.name);
        assert!(country.dial_code.starts_with('+'), "{}", country.name);
        assert!(!country.flag.is_empty(), "{}", country.name);
    }
}
