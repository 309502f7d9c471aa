#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// An image reference. Terminals cannot draw `src`, so the renderer shows
    /// the glyph the document registered for it, falling back to `alt`.
    Image {
        src: String,
        alt: String,
    },
    Children(Vec<super::Element>),
}
