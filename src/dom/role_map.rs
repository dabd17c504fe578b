//! Maps HTML elements to semantic roles.
//!
//! This module defines the mapping from HTML element names to the `NodeRole`
//! values the extractor dispatches on. Pure mapping, no text processing.

/// Semantic role of a content element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Heading with level 1-6.
    Heading(u8),
    Paragraph,
    /// `ul` or `ol`.
    ListContainer,
    ListItem,
    /// Preformatted block (`pre`).
    CodeBlock,
    Blockquote,
    /// Bold inline run (`strong`/`b`).
    InlineBold,
    /// Anything else; the extractor ignores these or recurses through them.
    Other,
}

/// Map an HTML element name to its semantic role.
pub fn element_role(local_name: &str) -> NodeRole {
    match local_name {
        "h1" => NodeRole::Heading(1),
        "h2" => NodeRole::Heading(2),
        "h3" => NodeRole::Heading(3),
        "h4" => NodeRole::Heading(4),
        "h5" => NodeRole::Heading(5),
        "h6" => NodeRole::Heading(6),

        "p" => NodeRole::Paragraph,

        "ul" | "ol" => NodeRole::ListContainer,
        "li" => NodeRole::ListItem,

        "pre" => NodeRole::CodeBlock,

        "blockquote" => NodeRole::Blockquote,

        "strong" | "b" => NodeRole::InlineBold,

        _ => NodeRole::Other,
    }
}
