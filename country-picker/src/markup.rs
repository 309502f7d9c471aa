//! Builds the page the dropdown lives on.

use pagedom::{Display, Document, Element, TextStyle};

use crate::catalog::Country;
use crate::config::{ACTIVATOR_ID, CODE_DATA, CODE_ID, ICON_DATA, ICON_ID, LIST_ID, ROOT_CLASS};

pub const PAGE_ID: &str = "page";

/// The dropdown subtree: activator showing `initial`, then the hidden list.
pub fn dropdown(countries: &[Country], initial: &Country) -> Element {
    let activator = Element::row()
        .id(ACTIVATOR_ID)
        .child(Element::image(initial.icon_path(), initial.flag).id(ICON_ID))
        .child(
            Element::text(initial.dial_code)
                .id(CODE_ID)
                .style(TextStyle::new().bold()),
        )
        .child(Element::text("▾").style(TextStyle::new().dim()));

    let list = Element::col()
        .id(LIST_ID)
        .display(Display::None)
        .children(countries.iter().map(option));

    Element::col()
        .id("country-dropdown")
        .class(ROOT_CLASS)
        .child(activator)
        .child(list)
}

/// One selectable row. Its data attributes are the literals it commits.
pub fn option(country: &Country) -> Element {
    let icon = country.icon_path();

    Element::row()
        .id(format!("option-{}", country.iso.to_ascii_lowercase()))
        .data(ICON_DATA, icon.clone())
        .data(CODE_DATA, country.dial_code)
        .child(Element::image(icon, country.flag))
        .child(Element::text(country.dial_code))
        .child(Element::text(country.name).style(TextStyle::new().dim()))
}

/// A sign-up page with the dropdown next to surrounding content.
///
/// Every country's flag is registered as the glyph for its icon path.
pub fn page(countries: &[Country], initial: &Country) -> Document {
    let root = Element::col()
        .id(PAGE_ID)
        .child(
            Element::text("Create your account")
                .id("heading")
                .style(TextStyle::new().bold().underline()),
        )
        .child(Element::text(" ").id("spacer"))
        .child(Element::text("Phone number").id("phone-label"))
        .child(dropdown(countries, initial))
        .child(Element::text(" ").id("spacer-bottom"))
        .child(
            Element::text("Click the code to pick a country. Press q to quit.")
                .id("footer")
                .style(TextStyle::new().dim()),
        );

    let mut doc = Document::new(root);
    for country in countries.iter().chain(std::iter::once(initial)) {
        doc.register_image(country.icon_path(), country.flag);
    }
    doc
}
