use serde::{Deserialize, Serialize};

/// The closed set of element tags the publishing API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    P,
    Br,
    Strong,
    Em,
    U,
    S,
    Code,
    Pre,
    A,
    H3,
    H4,
    Blockquote,
    Figure,
    Img,
    Video,
    Iframe,
    Figcaption,
    Ul,
    Ol,
    Li,
}

impl Tag {
    /// The wire name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::Br => "br",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::U => "u",
            Tag::S => "s",
            Tag::Code => "code",
            Tag::Pre => "pre",
            Tag::A => "a",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::Blockquote => "blockquote",
            Tag::Figure => "figure",
            Tag::Img => "img",
            Tag::Video => "video",
            Tag::Iframe => "iframe",
            Tag::Figcaption => "figcaption",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
        }
    }

    /// Maps an HTML element name onto the supported vocabulary.
    ///
    /// Headings collapse onto the two levels the API renders: `h1`-`h3` become
    /// [`Tag::H3`] and `h4`-`h6` become [`Tag::H4`]. Returns `None` for
    /// elements with no counterpart (`div`, `span`, `table`, ...).
    pub fn from_html_name(name: &str) -> Option<Tag> {
        let tag = match name.to_ascii_lowercase().as_str() {
            "p" => Tag::P,
            "br" => Tag::Br,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Em,
            "u" => Tag::U,
            "s" | "del" | "strike" => Tag::S,
            "code" => Tag::Code,
            "pre" => Tag::Pre,
            "a" => Tag::A,
            "h1" | "h2" | "h3" => Tag::H3,
            "h4" | "h5" | "h6" => Tag::H4,
            "blockquote" => Tag::Blockquote,
            "figure" => Tag::Figure,
            "img" => Tag::Img,
            "video" => Tag::Video,
            "iframe" => Tag::Iframe,
            "figcaption" => Tag::Figcaption,
            "ul" => Tag::Ul,
            "ol" => Tag::Ol,
            "li" => Tag::Li,
            _ => return None,
        };
        Some(tag)
    }

    /// Tags rendered without children.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Br | Tag::Img)
    }

    /// Maps a markdown heading level onto a heading tag.
    pub fn for_heading_level(level: usize) -> Tag {
        if level <= 2 { Tag::H3 } else { Tag::H4 }
    }
}
