use pagedom::layout::layout;
use pagedom::render::render_to_buffer;
use pagedom::{Buffer, Display, Document, Element, Rect, TextStyle};

fn render(doc: &Document, width: u16, height: u16) -> Buffer {
    let layout = layout(doc, Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(doc, &layout, &mut buf);
    buf
}

#[test]
fn test_text_and_rows_render() {
    let doc = Document::new(
        Element::col()
            .id("root")
            .child(Element::text("Hello"))
            .child(
                Element::row()
                    .child(Element::image("/flags/us.png", "US"))
                    .child(Element::text("+1")),
            ),
    )
    .with_image("/flags/us.png", "[US]");

    let buf = render(&doc, 20, 3);

    assert_eq!(buf.line(0), "Hello");
    assert_eq!(buf.line(1), "[US] +1");
    assert_eq!(buf.line(2), "");
}

#[test]
fn test_hidden_elements_do_not_render() {
    let doc = Document::new(
        Element::col()
            .id("root")
            .child(Element::text("visible"))
            .child(Element::text("secret").display(Display::None)),
    );

    let buf = render(&doc, 20, 3);

    assert_eq!(buf.line(0), "visible");
    assert_eq!(buf.line(1), "");
}

#[test]
fn test_image_falls_back_to_alt() {
    let doc = Document::new(Element::col().id("root").child(Element::image("/x.png", "X")));
    assert_eq!(render(&doc, 10, 1).line(0), "X");
}

#[test]
fn test_wide_characters_take_two_cells() {
    let doc = Document::new(Element::col().id("root").child(Element::text("日本")));

    let buf = render(&doc, 10, 1);

    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, '本');
    assert_eq!(buf.line(0), "日本");
}

#[test]
fn test_long_text_is_truncated() {
    let doc = Document::new(Element::col().id("root").child(Element::text("Hello world")));
    assert_eq!(render(&doc, 5, 1).line(0), "Hell…");
}

#[test]
fn test_style_is_inherited() {
    let doc = Document::new(
        Element::col()
            .id("root")
            .style(TextStyle::new().bold())
            .child(Element::text("x").style(TextStyle::new().dim())),
    );

    let buf = render(&doc, 5, 1);
    let style = buf.get(0, 0).unwrap().style;

    assert!(style.bold);
    assert!(style.dim);
    assert!(!style.underline);
}
