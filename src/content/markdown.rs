//! MDX body rendering with syntax highlighting

use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

lazy_static! {
    /// First line of an MDX `import`/`export` block
    static ref ESM_START: Regex = Regex::new(r"^(import|export)\s").unwrap();
    /// Opening or closing code fence
    static ref FENCE: Regex = Regex::new(r"^\s{0,3}(```|~~~)").unwrap();
}

/// Renders post bodies to HTML
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::with_options(&config.theme, config.line_number)
    }

    /// Render an MDX body to HTML.
    ///
    /// ESM blocks are dropped; JSX elements pass through as raw HTML.
    pub fn render(&self, source: &str) -> String {
        let markdown = strip_esm(source);

        // Front-matter is split off by the loader, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(&markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // (language, source) of the code block being collected
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_string)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, buf)) = code_block.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, buf)) = code_block.take() {
                        let highlighted = self.highlight_code(&buf, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let lang_class = html_escape(lang);

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted = theme
            .and_then(|theme| highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok());

        match highlighted {
            Some(html) if self.line_numbers => {
                add_line_numbers(&html, code.lines().count(), &lang_class)
            }
            Some(html) => format!(r#"<figure class="highlight {}">{}</figure>"#, lang_class, html),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang_class,
                html_escape(code)
            ),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop MDX `import`/`export` blocks (each runs until a blank line).
/// Lines inside code fences are left alone.
fn strip_esm(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_fence = false;
    let mut in_esm = false;

    for line in source.lines() {
        if in_esm {
            if line.trim().is_empty() {
                in_esm = false;
                out.push('\n');
            }
            continue;
        }

        if FENCE.is_match(line) {
            in_fence = !in_fence;
        } else if !in_fence && ESM_START.is_match(line) {
            in_esm = true;
            continue;
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}

/// Wrap highlighted code in a gutter/code table
fn add_line_numbers(code: &str, line_count: usize, lang: &str) -> String {
    let gutter = (1..=line_count.max(1))
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang, gutter, code
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
