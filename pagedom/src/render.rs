use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::TextStyle;

pub fn render_to_buffer(doc: &Document, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(doc, doc.root(), layout, buf, TextStyle::new());
}

fn render_element(
    doc: &Document,
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: TextStyle,
) {
    if !element.is_visible() {
        return;
    }

    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let style = inherited.merge(element.style);

    match &element.content {
        Content::None => {}
        Content::Text(text) => draw_text(buf, *rect, text, style),
        Content::Image { src, alt } => draw_text(buf, *rect, doc.image_label(src, alt), style),
        Content::Children(children) => {
            for child in children {
                render_element(doc, child, layout, buf, style);
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, rect: Rect, text: &str, style: TextStyle) {
    if rect.is_empty() {
        return;
    }

    let text = if display_width(text) > rect.width as usize {
        truncate_to_width(text, rect.width as usize)
    } else {
        text.to_string()
    };

    let mut x = rect.x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > rect.right() {
            break;
        }

        buf.set(x, rect.y, Cell::new(ch).with_style(style));
        if width == 2 {
            buf.set(x + 1, rect.y, Cell::continuation().with_style(style));
        }
        x += width;
    }
}
