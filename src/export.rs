//! HTML rendering of tasks for [`Task::export`](crate::models::Task::export).
//!
//! The page is self-contained: inline styles, no scripts, no external assets.
//! Every value coming from the API is escaped except the task description,
//! which Wrike already stores as HTML.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::models::{timestamp, Attachment, Comment, Task, User};

const STYLE: &str = "body{font-family:sans-serif;max-width:48em;margin:2em auto}\
dt{font-weight:bold}table{border-collapse:collapse}\
td,th{border:1px solid #ccc;padding:.25em .5em;text-align:left}";

/// Escape text for use in HTML element content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn text(value: Option<&str>) -> String {
    escape(value.unwrap_or_default())
}

fn date(value: Option<DateTime<Utc>>) -> String {
    value.map(|d| timestamp::format(&d)).unwrap_or_default()
}

/// Render a task with its author, attachments and comments.
pub(crate) fn render_task(
    task: &Task,
    author: Option<&User>,
    attachments: &[Attachment],
    comments: &[Comment],
) -> String {
    let title = text(task.title.as_deref());
    let mut html = String::new();

    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n<dl>\n"
    );

    let mut field = |name: &str, value: String| {
        if !value.is_empty() {
            let _ = writeln!(html, "<dt>{name}</dt><dd>{value}</dd>");
        }
    };
    field("ID", text(task.id.as_deref()));
    field("Author", author.map(|a| escape(&a.to_string())).unwrap_or_default());
    field("Status", task.status.map(|s| format!("{s:?}")).unwrap_or_default());
    field("Importance", task.importance.map(|i| format!("{i:?}")).unwrap_or_default());
    field("Created", date(task.created_date));
    field("Updated", date(task.updated_date));
    field("Completed", date(task.completed_date));
    if let Some(dates) = &task.dates {
        field("Start", text(dates.start.as_deref()));
        field("Due", text(dates.due.as_deref()));
    }
    field(
        "Link",
        task.permalink
            .as_deref()
            .map(|link| format!("<a href=\"{0}\">{0}</a>", escape(link)))
            .unwrap_or_default(),
    );
    html.push_str("</dl>\n");

    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(html, "<h2>Description</h2>\n<div>{description}</div>\n");
    }

    if !attachments.is_empty() {
        html.push_str("<h2>Attachments</h2>\n<table>\n<tr><th>Name</th><th>Type</th><th>Size</th><th>Uploaded</th></tr>\n");
        for attachment in attachments {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                text(attachment.name.as_deref()),
                text(attachment.content_type.as_deref()),
                attachment
                    .size
                    .filter(|size| *size >= 0)
                    .map(|size| size.to_string())
                    .unwrap_or_default(),
                date(attachment.created_date),
            );
        }
        html.push_str("</table>\n");
    }

    if !comments.is_empty() {
        html.push_str("<h2>Comments</h2>\n");
        for comment in comments {
            let _ = writeln!(
                html,
                "<div class=\"comment\"><p><small>{}</small></p><div>{}</div></div>",
                date(comment.created_date),
                text(comment.text.as_deref()),
            );
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
