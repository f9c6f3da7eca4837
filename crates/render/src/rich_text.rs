use html_escape::{encode_double_quoted_attribute, encode_text};
use journal_core::model::{Annotations, Color, Mention, RichText, RichTextContent};

const CODE_CLASS: &str = "font-mono rounded p-[2px] bg-gray-200";
const EQUATION_CODE_CLASS: &str = "font-mono drop-shadow-lg rounded p-4";
const MENTION_CLASS: &str = "font-semibold";

/// Render a sequence of runs, in order.
pub fn render_rich_text(spans: &[RichText]) -> String {
    spans.iter().map(render_span).collect()
}

/// Render one run. Unknown variants render as nothing.
pub fn render_span(span: &RichText) -> String {
    match &span.content {
        RichTextContent::Text { text } => {
            let content = if span.plain_text.is_empty() {
                &text.content
            } else {
                &span.plain_text
            };
            let href = span
                .href
                .as_deref()
                .or_else(|| text.link.as_ref().map(|link| link.url.as_str()));
            let mut classes = annotation_classes(&span.annotations, CODE_CLASS);

            match href {
                Some(href) => {
                    if !span.annotations.underline {
                        classes.push("underline");
                    }
                    anchor(href, &classes, content)
                }
                None => styled(&classes, content),
            }
        }
        RichTextContent::Equation { equation } => styled(
            &annotation_classes(&span.annotations, EQUATION_CODE_CLASS),
            &equation.expression,
        ),
        RichTextContent::Mention { mention } => render_mention(span, mention),
        RichTextContent::Unsupported => String::new(),
    }
}

fn render_mention(span: &RichText, mention: &Mention) -> String {
    match mention {
        Mention::Date { .. } | Mention::User { .. } => styled(&[MENTION_CLASS], &span.plain_text),
        Mention::Page { .. } | Mention::Database { .. } | Mention::LinkPreview { .. } => {
            match mention.link_target(span.href.as_deref()) {
                Some(target) => anchor(&target, &[MENTION_CLASS], &span.plain_text),
                None => styled(&[MENTION_CLASS], &span.plain_text),
            }
        }
        Mention::Unsupported => String::new(),
    }
}

fn annotation_classes(annotations: &Annotations, code_class: &'static str) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if annotations.bold {
        classes.push("font-bold");
    }
    if annotations.code {
        classes.push(code_class);
    }
    if annotations.italic {
        classes.push("italic");
    }
    if annotations.strikethrough {
        classes.push("line-through");
    }
    if annotations.underline {
        classes.push("underline");
    }
    if let Some(color) = color_class(annotations.color) {
        classes.push(color);
    }
    classes
}

fn color_class(color: Color) -> Option<&'static str> {
    let class = match color {
        Color::Default | Color::Unknown => return None,
        Color::Gray => "text-gray-600",
        Color::Brown => "text-amber-800",
        Color::Orange => "text-orange-600",
        Color::Yellow => "text-yellow-600",
        Color::Green => "text-green-600",
        Color::Blue => "text-blue-600",
        Color::Purple => "text-purple-600",
        Color::Pink => "text-pink-600",
        Color::Red => "text-red-600",
        Color::GrayBackground => "bg-gray-100",
        Color::BrownBackground => "bg-amber-100",
        Color::OrangeBackground => "bg-orange-100",
        Color::YellowBackground => "bg-yellow-100",
        Color::GreenBackground => "bg-green-100",
        Color::BlueBackground => "bg-blue-100",
        Color::PurpleBackground => "bg-purple-100",
        Color::PinkBackground => "bg-pink-100",
        Color::RedBackground => "bg-red-100",
    };
    Some(class)
}

/// Bare escaped text when there is no styling, a `<span>` otherwise.
fn styled(classes: &[&str], text: &str) -> String {
    if classes.is_empty() {
        return encode_text(text).into_owned();
    }
    format!(
        r#"<span class="{}">{}</span>"#,
        classes.join(" "),
        encode_text(text)
    )
}

fn anchor(href: &str, classes: &[&str], text: &str) -> String {
    format!(
        r#"<a class="{}" href="{}">{}</a>"#,
        classes.join(" "),
        encode_double_quoted_attribute(href),
        encode_text(text)
    )
}
