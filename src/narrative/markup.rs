use pulldown_cmark::{Options, Parser, html};

/// Converts a step's markdown source into rendered markup.
///
/// The engine treats the output as an opaque string: whatever the renderer
/// produces is placed verbatim inside the step's blurb node. Hosts with their
/// own text pipeline implement this trait; [`MarkdownMarkup`] is the built-in
/// default.
pub trait MarkupRenderer {
    /// Render one markdown source string to markup.
    fn render(&self, source: &str) -> String;
}

/// Built-in markdown-to-HTML renderer backed by pulldown-cmark.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownMarkup;

impl MarkupRenderer for MarkdownMarkup {
    fn render(&self, source: &str) -> String {
        let options =
            Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;
        let parser = Parser::new_ext(source, options);
        let mut out = String::with_capacity(source.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}
