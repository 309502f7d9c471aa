use pagedom::layout::{layout, measure};
use pagedom::{Display, Document, Element, Rect};

#[test]
fn test_column_stacks_children_at_full_width() {
    let doc = Document::new(
        Element::col()
            .id("root")
            .child(Element::text("a").id("a"))
            .child(Element::text("bb").id("b")),
    );

    let result = layout(&doc, Rect::new(0, 0, 20, 5));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 20, 5)));
    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(0, 1, 20, 1)));
}

#[test]
fn test_row_places_children_side_by_side() {
    let doc = Document::new(
        Element::col().id("root").child(
            Element::row()
                .id("row")
                .child(Element::text("+1").id("code"))
                .child(Element::text("abc").id("name")),
        ),
    );

    let result = layout(&doc, Rect::new(0, 0, 20, 5));

    assert_eq!(result.get("row"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(result.get("code"), Some(&Rect::new(0, 0, 2, 1)));
    // One cell of gap after "+1"
    assert_eq!(result.get("name"), Some(&Rect::new(3, 0, 3, 1)));
}

#[test]
fn test_hidden_elements_take_no_space() {
    let doc = Document::new(
        Element::col()
            .id("root")
            .child(Element::text("above").id("above"))
            .child(
                Element::col()
                    .id("list")
                    .display(Display::None)
                    .child(Element::text("option").id("option")),
            )
            .child(Element::text("below").id("below")),
    );

    let result = layout(&doc, Rect::new(0, 0, 20, 5));

    assert!(result.get("list").is_none());
    assert!(result.get("option").is_none());
    assert_eq!(result.get("below"), Some(&Rect::new(0, 1, 20, 1)));
}

#[test]
fn test_shown_list_pushes_following_content_down() {
    let mut doc = Document::new(
        Element::col()
            .id("root")
            .child(Element::text("above").id("above"))
            .child(
                Element::col()
                    .id("list")
                    .display(Display::None)
                    .child(Element::text("one").id("one"))
                    .child(Element::text("two").id("two")),
            )
            .child(Element::text("below").id("below")),
    );

    doc.set_display("list", Display::Block);
    let result = layout(&doc, Rect::new(0, 0, 20, 5));

    assert_eq!(result.get("list"), Some(&Rect::new(0, 1, 20, 2)));
    assert_eq!(result.get("below"), Some(&Rect::new(0, 3, 20, 1)));
}

#[test]
fn test_overflowing_children_are_clipped() {
    let doc = Document::new(
        Element::col()
            .id("root")
            .child(Element::text("a").id("a"))
            .child(Element::text("b").id("b"))
            .child(Element::text("c").id("c")),
    );

    let result = layout(&doc, Rect::new(0, 0, 10, 2));

    assert_eq!(result.get("b"), Some(&Rect::new(0, 1, 10, 1)));
    assert!(result.get("c").unwrap().is_empty());
}

#[test]
fn test_measure_image_uses_registered_glyph() {
    let doc = Document::new(Element::box_().id("root")).with_image("/flags/us.png", "[US]");

    assert_eq!(measure(&doc, &Element::image("/flags/us.png", "US")), (4, 1));
    assert_eq!(measure(&doc, &Element::image("/flags/gb.png", "GB")), (2, 1));
}

#[test]
fn test_measure_row_and_column() {
    let doc = Document::new(Element::box_().id("root"));

    let row = Element::row()
        .child(Element::text("ab"))
        .child(Element::text("cde"))
        .child(Element::text("hidden").display(Display::None));
    assert_eq!(measure(&doc, &row), (6, 1));

    let col = Element::col()
        .child(Element::text("ab"))
        .child(Element::text("cdef"));
    assert_eq!(measure(&doc, &col), (4, 2));

    assert_eq!(measure(&doc, &Element::box_()), (0, 0));
}

#[test]
fn test_rect_intersection() {
    let a = Rect::new(0, 0, 10, 10);
    assert_eq!(a.intersection(Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
    assert!(a.intersection(Rect::new(20, 20, 5, 5)).is_empty());
}
