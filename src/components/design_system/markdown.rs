use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// CSS styles for rendered event descriptions. Link and accent colors follow
/// the event theme via `--accent`.
const MARKDOWN_STYLES: &str = r#"
    .markdown-content h1 { font-size: 1.5em; font-weight: bold; margin-top: 1em; margin-bottom: 0.5em; color: #f4f4f5; }
    .markdown-content h2 { font-size: 1.25em; font-weight: bold; margin-top: 1em; margin-bottom: 0.5em; color: #e4e4e7; }
    .markdown-content h3 { font-size: 1.1em; font-weight: bold; margin-top: 1em; margin-bottom: 0.5em; color: #e4e4e7; }
    .markdown-content p { margin-bottom: 0.8em; line-height: 1.7; }
    .markdown-content ul { list-style-type: disc; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content ol { list-style-type: decimal; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content li { margin-bottom: 0.25em; }
    .markdown-content blockquote { border-left: 4px solid var(--accent, #a78bfa); padding-left: 1em; color: #a1a1aa; margin-left: 0; margin-right: 0; font-style: italic; }
    .markdown-content a { color: var(--accent, #a78bfa); text-decoration: underline; }
    .markdown-content strong { font-weight: bold; color: #fafafa; }
    .markdown-content em { font-style: italic; }
    .markdown-content hr { border-color: #3f3f46; margin: 1.5em 0; }
"#;

/// Render markdown content to HTML using pulldown-cmark
fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// A markdown renderer component using pulldown-cmark
#[component]
pub fn Markdown(
    /// The markdown content to render
    #[prop(into)]
    content: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);
    let full_class = format!("markdown-content text-zinc-300 {class}");

    view! {
        <style>{MARKDOWN_STYLES}</style>
        <div class=full_class inner_html=html_content />
    }
}
