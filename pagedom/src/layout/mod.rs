//! Block layout.
//!
//! Columns stack their children top to bottom at full width. Rows place
//! children side by side at their natural width with a one-cell gap. Text and
//! images are a single line. Hidden elements take no space and get no rect.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::document::Document;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::Direction;

/// Gap between children of a row, in cells.
pub const ROW_GAP: u16 = 1;

#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

pub fn layout(doc: &Document, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(doc, doc.root(), available, &mut result);
    result
}

/// Natural (width, height) of an element.
pub fn measure(doc: &Document, element: &Element) -> (u16, u16) {
    if !element.is_visible() {
        return (0, 0);
    }

    match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (clamp(display_width(text)), 1),
        Content::Image { src, alt } => (clamp(display_width(doc.image_label(src, alt))), 1),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|child| child.is_visible())
                .map(|child| measure(doc, child))
                .collect();

            match element.direction {
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes.iter().fold(0u16, |acc, (_, h)| acc.saturating_add(*h)),
                ),
                Direction::Row => {
                    let gaps = ROW_GAP.saturating_mul(sizes.len().saturating_sub(1) as u16);
                    (
                        sizes
                            .iter()
                            .fold(gaps, |acc, (w, _)| acc.saturating_add(*w)),
                        sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                    )
                }
            }
        }
    }
}

fn clamp(width: usize) -> u16 {
    width.min(u16::MAX as usize) as u16
}

fn place(doc: &Document, element: &Element, area: Rect, result: &mut LayoutResult) {
    if !element.is_visible() {
        return;
    }

    result.insert(element.id.clone(), area);

    let Content::Children(children) = &element.content else {
        return;
    };

    let mut cursor_x = area.x;
    let mut cursor_y = area.y;

    for child in children.iter().filter(|child| child.is_visible()) {
        let (width, height) = measure(doc, child);
        let rect = match element.direction {
            Direction::Column => Rect::new(area.x, cursor_y, area.width, height),
            Direction::Row => Rect::new(cursor_x, area.y, width, area.height),
        };

        place(doc, child, rect.intersection(area), result);

        match element.direction {
            Direction::Column => cursor_y = cursor_y.saturating_add(height),
            Direction::Row => cursor_x = cursor_x.saturating_add(width).saturating_add(ROW_GAP),
        }
    }
}
