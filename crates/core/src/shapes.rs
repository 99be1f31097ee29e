//! Known input shapes of ambiguous CMS fields.
//!
//! Each field that has appeared in more than one shape across schema
//! versions gets an enum here, built by an explicit runtime shape check.
//! The normalizer then maps each variant with its own rule. Nothing in
//! this module fails: unrecognized input classifies as `Invalid`.

use serde_json::{Map, Value};

/// An entry of a label list (`categories`, `outcomes`).
#[derive(Debug, Clone, PartialEq)]
pub enum LabelEntry<'a> {
    /// `"Fintech"`
    Plain(&'a str),
    /// `{ "name": "Fintech" }` or `{ "text": "25K DAU" }`; inner value may be absent.
    Keyed(Option<&'a str>),
    Invalid,
}

impl<'a> LabelEntry<'a> {
    /// Classify one list entry. `key` is the property holding the label
    /// in the object shape.
    pub fn classify(value: &'a Value, key: &str) -> Self {
        match value {
            Value::String(s) => LabelEntry::Plain(s),
            Value::Object(map) => LabelEntry::Keyed(map.get(key).and_then(Value::as_str)),
            _ => LabelEntry::Invalid,
        }
    }

    /// The trimmed, non-empty label, if this entry carries one.
    pub fn label(&self) -> Option<&'a str> {
        let raw = match self {
            LabelEntry::Plain(s) => Some(*s),
            LabelEntry::Keyed(inner) => *inner,
            LabelEntry::Invalid => None,
        }?;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// An entry of an image list, or a single upload field.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageEntry<'a> {
    /// Array row wrapping a populated upload: `{ "image": { "url": ... } }`.
    Nested(&'a Map<String, Value>),
    /// A populated media document or an already-normalized image:
    /// `{ "url": ..., "alt": ... }`.
    Flat(&'a Map<String, Value>),
    /// An upload that was not populated (bare media id, or `{ "image": 12 }`).
    Unpopulated,
    Invalid,
}

impl<'a> ImageEntry<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => match map.get("image") {
                Some(Value::Object(inner)) => ImageEntry::Nested(inner),
                Some(Value::Null) | None if map.contains_key("url") => ImageEntry::Flat(map),
                Some(Value::Number(_)) | Some(Value::String(_)) => ImageEntry::Unpopulated,
                Some(_) => ImageEntry::Invalid,
                None => ImageEntry::Invalid,
            },
            Value::Number(_) | Value::String(_) => ImageEntry::Unpopulated,
            _ => ImageEntry::Invalid,
        }
    }

    /// The media fields of this entry, when populated.
    pub fn media(&self) -> Option<&'a Map<String, Value>> {
        match self {
            ImageEntry::Nested(map) | ImageEntry::Flat(map) => Some(map),
            ImageEntry::Unpopulated | ImageEntry::Invalid => None,
        }
    }
}

/// An entry of the social links list.
#[derive(Debug, Clone, PartialEq)]
pub enum SocialLinkEntry<'a> {
    /// A bare string. Usable only if it is itself an absolute URL.
    Bare(&'a str),
    Structured {
        platform: Option<&'a str>,
        url: Option<&'a str>,
        label: Option<&'a str>,
    },
    Invalid,
}

impl<'a> SocialLinkEntry<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) => SocialLinkEntry::Bare(s),
            Value::Object(map) => SocialLinkEntry::Structured {
                platform: map.get("platform").and_then(Value::as_str),
                url: map.get("url").and_then(Value::as_str),
                label: map.get("label").and_then(Value::as_str),
            },
            _ => SocialLinkEntry::Invalid,
        }
    }
}

/// Bio text of the about section across both schema versions.
#[derive(Debug, Clone, PartialEq)]
pub enum BioInput<'a> {
    /// Current schema: `bioLeft` / `bioRight` plain text.
    Split {
        left: Option<&'a str>,
        right: Option<&'a str>,
    },
    /// Older schema: a single rich-text `bio`, alongside whatever split
    /// fields happen to be present.
    Legacy {
        left: Option<&'a str>,
        right: Option<&'a str>,
        bio: &'a Value,
    },
}

impl<'a> BioInput<'a> {
    pub fn classify(doc: &'a Value) -> Self {
        let left = doc.get("bioLeft").and_then(Value::as_str);
        let right = doc.get("bioRight").and_then(Value::as_str);
        match doc.get("bio") {
            Some(bio) if !bio.is_null() => BioInput::Legacy { left, right, bio },
            _ => BioInput::Split { left, right },
        }
    }
}

/// Extract plain-text paragraphs from a rich-text value.
///
/// Accepts a plain string (paragraphs separated by blank lines), the
/// Lexical editor state (`{ root: { children: [...] } }`), or a bare array
/// of block nodes. Each top-level block becomes one paragraph; empty
/// paragraphs are skipped.
pub fn rich_text_paragraphs(value: &Value) -> Vec<String> {
    let blocks: &[Value] = match value {
        Value::String(s) => {
            return s
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }
        Value::Array(items) => items,
        Value::Object(map) => match map
            .get("root")
            .and_then(|root| root.get("children"))
            .and_then(Value::as_array)
        {
            Some(children) => children,
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    blocks
        .iter()
        .map(|block| {
            let mut text = String::new();
            collect_text(block, &mut text);
            text.trim().to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
    }
    if let Some(children) = node.get("children").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}
