use country_picker::catalog;
use country_picker::config::{ACTIVATOR_ID, CODE_DATA, ICON_DATA, LIST_ID};
use country_picker::markup;
use country_picker::{DropdownConfig, DropdownRefs};
use pagedom::element::Content;
use pagedom::layout::layout;
use pagedom::render::render_to_buffer;
use pagedom::{Buffer, Display, Rect};

#[test]
fn test_page_satisfies_default_config() {
    let us = catalog::find_by_iso("US").unwrap();
    let doc = markup::page(catalog::countries(), us);

    let refs = DropdownRefs::resolve(&doc, &DropdownConfig::default()).unwrap();

    assert!(doc.contains(refs.root.id(), refs.activator.id()));
    assert!(doc.contains(refs.root.id(), refs.list.id()));
    assert!(doc.contains(refs.activator.id(), refs.icon_display.id()));
    assert!(doc.contains(refs.activator.id(), refs.text_display.id()));
}

#[test]
fn test_list_starts_hidden_with_one_option_per_country() {
    let countries = catalog::countries();
    let element = markup::dropdown(countries, &countries[0]);

    let Content::Children(parts) = &element.content else {
        panic!("dropdown has no children");
    };
    let list = parts.iter().find(|part| part.id == LIST_ID).unwrap();
    assert_eq!(list.display, Display::None);

    let Content::Children(options) = &list.content else {
        panic!("list has no options");
    };
    assert_eq!(options.len(), countries.len());

    for (option, country) in options.iter().zip(countries) {
        assert_eq!(option.get_data(ICON_DATA), Some(&country.icon_path()));
        assert_eq!(option.get_data(CODE_DATA).map(String::as_str), Some(country.dial_code));
    }
}

#[test]
fn test_page_renders_flag_glyph_and_code() {
    let gb = catalog::find_by_iso("GB").unwrap();
    let doc = markup::page(catalog::countries(), gb);

    let result = layout(&doc, Rect::new(0, 0, 60, 20));
    let mut buf = Buffer::new(60, 20);
    render_to_buffer(&doc, &result, &mut buf);

    let activator = result.get(ACTIVATOR_ID).unwrap();
    let line = buf.line(activator.y);
    assert_eq!(
        buf.get(activator.x, activator.y).map(|cell| cell.char),
        gb.flag.chars().next()
    );
    assert!(line.contains("+44"), "{line:?}");

    // Hidden list renders nothing
    assert!(result.get(LIST_ID).is_none());
}
