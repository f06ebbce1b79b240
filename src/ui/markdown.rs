//! Markdown rendering for AI tutor replies
//!
//! Replies are rendered through pulldown-cmark into a small, fixed set of
//! tags. Raw HTML in a reply is shown as text and only http(s) links are
//! kept, so model output can never inject markup into the page.

use leptos::prelude::*;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: String,
) -> impl IntoView {
    let html = parse_markdown(&content);

    view! { <div class="markdown-content text-sm leading-relaxed" inner_html=html /> }
}

fn heading_class(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 | HeadingLevel::H2 => "text-base font-bold mt-3 mb-1",
        _ => "text-sm font-semibold mt-2 mb-1",
    }
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Parse markdown string to HTML
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut html = String::new();
    // Whether each open link was emitted as <a>, so its end tag matches
    let mut links: Vec<bool> = Vec::new();
    let mut in_code_block = false;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html.push_str("<p class=\"mb-2 last:mb-0\">"),
                Tag::Heading { level, .. } => {
                    html.push_str(&format!("<p class=\"{}\">", heading_class(level)));
                }
                Tag::BlockQuote(_) => html.push_str(
                    "<blockquote class=\"border-l-4 border-indigo-300 pl-3 my-2 italic text-slate-600\">",
                ),
                Tag::CodeBlock(kind) => {
                    in_code_block = true;
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            format!(" data-lang=\"{}\"", escape_html(&lang))
                        }
                        _ => String::new(),
                    };
                    html.push_str(&format!(
                        "<pre class=\"bg-slate-900 text-slate-100 rounded-lg p-3 my-2 overflow-x-auto text-xs\"{}><code>",
                        lang
                    ));
                }
                Tag::List(Some(_)) => html.push_str("<ol class=\"list-decimal pl-5 mb-2 space-y-1\">"),
                Tag::List(None) => html.push_str("<ul class=\"list-disc pl-5 mb-2 space-y-1\">"),
                Tag::Item => html.push_str("<li>"),
                Tag::Emphasis => html.push_str("<em>"),
                Tag::Strong => html.push_str("<strong class=\"font-semibold\">"),
                Tag::Strikethrough => html.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    let safe = is_safe_url(&dest_url);
                    if safe {
                        html.push_str(&format!(
                            "<a href=\"{}\" class=\"text-indigo-600 underline\" target=\"_blank\" rel=\"noopener noreferrer\">",
                            escape_html(&dest_url)
                        ));
                    }
                    links.push(safe);
                }
                // Images are reduced to their alt text
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph | TagEnd::Heading(_) => html.push_str("</p>"),
                TagEnd::BlockQuote(_) => html.push_str("</blockquote>"),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    html.push_str("</code></pre>");
                }
                TagEnd::List(true) => html.push_str("</ol>"),
                TagEnd::List(false) => html.push_str("</ul>"),
                TagEnd::Item => html.push_str("</li>"),
                TagEnd::Emphasis => html.push_str("</em>"),
                TagEnd::Strong => html.push_str("</strong>"),
                TagEnd::Strikethrough => html.push_str("</del>"),
                TagEnd::Link => {
                    if links.pop().unwrap_or(false) {
                        html.push_str("</a>");
                    }
                }
                _ => {}
            },
            Event::Text(text) => html.push_str(&escape_html(&text)),
            Event::Code(code) => html.push_str(&format!(
                "<code class=\"bg-slate-100 px-1 rounded text-xs\">{}</code>",
                escape_html(&code)
            )),
            Event::Html(raw) | Event::InlineHtml(raw) => html.push_str(&escape_html(&raw)),
            Event::SoftBreak => {
                html.push(if in_code_block { '\n' } else { ' ' });
            }
            Event::HardBreak => html.push_str("<br/>"),
            Event::Rule => html.push_str("<hr class=\"my-3 border-slate-200\"/>"),
            _ => {}
        }
    }

    html
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_takeaways() {
        let html = parse_markdown("1. Kinematics\n2. **Forces**\n3. Energy");
        assert!(html.starts_with("<ol"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<strong class=\"font-semibold\">Forces</strong>"));
    }

    #[test]
    fn test_headings_render_as_paragraphs() {
        let html = parse_markdown("## Key idea");
        assert!(html.contains("font-bold"));
        assert!(html.contains("Key idea</p>"));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("Try <script>alert(1)</script> now");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unsafe_link_keeps_text_only() {
        let html = parse_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("<a "));
        assert!(html.contains("click"));

        let html = parse_markdown("[NCERT](https://ncert.nic.in)");
        assert!(html.contains("href=\"https://ncert.nic.in\""));
        assert!(html.contains("</a>"));
    }

    #[test]
    fn test_code_block_keeps_lines() {
        let html = parse_markdown("```python\nv = u + a*t\ns = u*t\n```");
        assert!(html.contains("data-lang=\"python\""));
        assert!(html.contains("v = u + a*t\ns = u*t"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
