use pulldown_cmark::{html, CowStr, Event, Parser, Tag};

use super::bullets::format_bullets_for_markdown;

pub const LIST_CLASS: &str = "list-container";
pub const LIST_ITEM_CLASS: &str = "list-item";
pub const PARAGRAPH_CLASS: &str = "message-paragraph";

/// Open block, as seen by the renderer
enum Frame {
    ListItem,
    /// Paragraph directly inside a list item, rendered without `<p>`
    UnwrappedParagraph,
    Other,
}

/// Render Markdown to HTML for a chat bubble.
///
/// - `<ul>`/`<ol>` carry [`LIST_CLASS`], `<li>` carries [`LIST_ITEM_CLASS`]
/// - `<p>` carries [`PARAGRAPH_CLASS`], except a paragraph whose parent is a
///   list item, which is emitted without the `<p>` wrapper
/// - raw HTML in the source is escaped, never passed through
pub fn render_markdown(markdown: &str) -> String {
    let mut frames: Vec<Frame> = Vec::new();

    let events = Parser::new(markdown).filter_map(|event| match event {
        Event::Start(tag) => {
            let parent_is_item = matches!(frames.last(), Some(Frame::ListItem));
            match tag {
                Tag::Paragraph if parent_is_item => {
                    frames.push(Frame::UnwrappedParagraph);
                    None
                }
                Tag::Paragraph => {
                    frames.push(Frame::Other);
                    Some(html_event(format!("<p class=\"{}\">", PARAGRAPH_CLASS)))
                }
                Tag::Item => {
                    frames.push(Frame::ListItem);
                    Some(html_event(format!("<li class=\"{}\">", LIST_ITEM_CLASS)))
                }
                Tag::List(Some(start)) => {
                    frames.push(Frame::Other);
                    let start_attr = if start == 1 {
                        String::new()
                    } else {
                        format!(" start=\"{}\"", start)
                    };
                    Some(html_event(format!(
                        "<ol class=\"{}\"{}>\n",
                        LIST_CLASS, start_attr
                    )))
                }
                Tag::List(None) => {
                    frames.push(Frame::Other);
                    Some(html_event(format!("<ul class=\"{}\">\n", LIST_CLASS)))
                }
                other => {
                    frames.push(Frame::Other);
                    Some(Event::Start(other))
                }
            }
        }
        Event::End(tag) => {
            let frame = frames.pop();
            match (tag, frame) {
                (Tag::Paragraph, Some(Frame::UnwrappedParagraph)) => None,
                (Tag::Paragraph, _) => Some(Event::Html("</p>\n".into())),
                (Tag::Item, _) => Some(Event::Html("</li>\n".into())),
                (Tag::List(Some(_)), _) => Some(Event::Html("</ol>\n".into())),
                (Tag::List(None), _) => Some(Event::Html("</ul>\n".into())),
                (other, _) => Some(Event::End(other)),
            }
        }
        Event::Html(raw) => Some(Event::Text(raw)),
        other => Some(other),
    });

    let mut output = String::new();
    html::push_html(&mut output, events);
    output
}

/// Format bullets, then render. This is what a reply bubble displays.
pub fn render_message_markdown(text: &str) -> String {
    render_markdown(&format_bullets_for_markdown(text))
}

fn html_event<'a>(markup: String) -> Event<'a> {
    Event::Html(CowStr::from(markup))
}
