//! Markup serialization of an element tree.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Serialize an element and its subtree.
pub fn to_html(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

/// Serialize only the children of an element, like the DOM's `innerHTML`.
pub fn inner_html(el: &Element) -> String {
    let mut out = String::new();
    write_content(&mut out, &el.content);
    out
}

fn write_element(out: &mut String, el: &Element) {
    let tag = el.tag.as_str();
    out.push('<');
    out.push_str(tag);
    if let Some(class) = &el.class_name {
        let _ = write!(out, " class=\"{}\"", escape(class));
    }
    if let Some(span) = el.row_span {
        let _ = write!(out, " rowspan=\"{span}\"");
    }
    if let Some(span) = el.col_span {
        let _ = write!(out, " colspan=\"{span}\"");
    }
    let css = el.style.to_css();
    if !css.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&css));
    }
    out.push('>');
    write_content(out, &el.content);
    let _ = write!(out, "</{tag}>");
}

fn write_content(out: &mut String, content: &Content) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
