//! Page chrome around rendered content.

use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset};
use html_escape::{encode_double_quoted_attribute, encode_text};
use journal_core::Item;
use journal_render::render_rich_text;

use crate::config::AppConfig;

const COLUMN: &str = "mx-4 sm:mx-10 p-4 md:mx-auto md:w-5/6 lg:w-2/3 xl:w-1/2";

/// Full HTML document with the site header and footer.
pub fn layout(config: &AppConfig, page_title: Option<&str>, content: &str) -> String {
    let site_title = encode_text(&config.site_title);
    let document_title = match page_title {
        Some(title) => format!("{} | {}", encode_text(title), site_title),
        None => site_title.to_string(),
    };
    let footer = config
        .footer
        .as_deref()
        .map(|footer| format!(r#"<footer class="{COLUMN}">{}</footer>"#, encode_text(footer)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<meta name="description" content="{description}" />
<title>{document_title}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="w-screen min-h-screen bg-orange-50 flex flex-col">
<header class="{COLUMN}"><a href="/"><h1 class="text-5xl text-sky-700 font-bold">{site_title}</h1></a></header>
<div class="grow">{content}</div>
{footer}
</body>
</html>"#,
        description = encode_double_quoted_attribute(&config.site_description),
    )
}

/// The index: one line per item, linking to its page.
pub fn listing_page(config: &AppConfig, items: &[Item]) -> String {
    let mut list = String::new();
    for item in items {
        let date = item
            .date
            .map(|date| format!(" - {}", short_date(&date)))
            .unwrap_or_default();
        list.push_str(&format!(
            r#"<li class="my-1 font-semibold text-orange-700"><a href="/{}">{}{}</a></li>"#,
            encode_double_quoted_attribute(&item.id),
            encode_text(item.display_title()),
            date
        ));
    }

    layout(config, None, &format!(r#"<main class="{COLUMN}"><ol>{list}</ol></main>"#))
}

/// A single entry with its rendered blocks.
pub fn item_page(config: &AppConfig, item: &Item, blocks_html: &str) -> String {
    let mut main = format!(
        r#"<h1 class="font-black text-3xl">{}</h1>"#,
        encode_text(item.display_title())
    );
    if let Some(date) = &item.date {
        main.push_str(&format!("<h2>{}</h2><h2>{}</h2>", long_date(date), time_of_day(date)));
    }
    if let Some(location) = &item.location {
        main.push_str(&format!(
            r#"<h3 class="text-gray-500">{}</h3>"#,
            render_rich_text(location)
        ));
    }
    main.push_str(blocks_html);

    let content = format!(
        r#"<a href="/"><div class="pl-4 {COLUMN} text-blue-400 hover:text-blue-600 font-bold text-lg">Back</div></a><main class="{COLUMN}">{main}</main>"#
    );
    layout(config, Some(item.display_title()), &content)
}

/// Bare page for error responses, which have no access to the site config.
pub fn error_page(status: StatusCode) -> String {
    let heading = if status == StatusCode::NOT_FOUND {
        "This page could not be found."
    } else {
        "Something went wrong."
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8" /><title>{code}</title></head>
<body><main><h1>{code}</h1><p>{heading}</p><p><a href="/">Back to the journal</a></p></main></body>
</html>"#,
        code = status.as_u16(),
    )
}

/// `6/1/2023`
fn short_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `June 1, 2023`
fn long_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `14:30`
fn time_of_day(date: &DateTime<FixedOffset>) -> String {
    date.format("%H:%M").to_string()
}
