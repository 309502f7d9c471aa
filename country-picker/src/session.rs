//! One dropdown on one page, fed raw terminal events.

use crossterm::event::Event as CtEvent;
use pagedom::layout::layout;
use pagedom::{Document, Event, Key, LayoutResult, Rect};

use crate::config::DropdownConfig;
use crate::dropdown::{CountryDropdown, EventResult, Selection};
use crate::error::DropdownError;

/// Whether the host should keep reading events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Session {
    doc: Document,
    dropdown: CountryDropdown,
    area: Rect,
    layout: LayoutResult,
}

impl Session {
    /// Mount a dropdown on `doc` and lay the page out in `area`.
    pub fn new(
        mut doc: Document,
        config: &DropdownConfig,
        area: Rect,
    ) -> Result<Self, DropdownError> {
        let dropdown = CountryDropdown::mount(&mut doc, config)?;
        let layout = layout(&doc, area);
        Ok(Self {
            doc,
            dropdown,
            area,
            layout,
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn dropdown(&self) -> &CountryDropdown {
        &self.dropdown
    }

    /// Layout the next click is hit tested against.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Handle one raw event.
    ///
    /// Every click may move things on the page (the list opening pushes the
    /// footer down), so the page is laid out again before the next event is
    /// hit tested, even when several arrive in one batch.
    pub fn handle(&mut self, raw: &CtEvent) -> Result<Flow, DropdownError> {
        match Event::from_crossterm(raw, &self.doc, &self.layout) {
            Some(Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            }) => return Ok(Flow::Quit),
            Some(Event::Click { target, .. }) => {
                let dispatch = self.doc.dispatch_click(target.as_deref());
                let result = self.dropdown.handle_click(&mut self.doc, &dispatch)?;
                if result == EventResult::Ignored {
                    log::trace!("[session] Click on {} not handled", dispatch.target);
                }
                self.relayout();
            }
            Some(Event::Resize { width, height }) => {
                self.area = Rect::from_size(width, height);
                self.relayout();
            }
            _ => {}
        }

        Ok(Flow::Continue)
    }

    /// Release the dropdown, returning its last selection.
    pub fn finish(self) -> Option<Selection> {
        self.dropdown.unmount()
    }

    fn relayout(&mut self) {
        self.layout = layout(&self.doc, self.area);
    }
}
