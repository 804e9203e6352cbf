use std::fmt::Write;

use axum::extract::State;
use axum::response::Html;

use crate::display_mode::DisplayMode;
use crate::error::AppError;
use crate::models::{Criteria, Todo};
use crate::routes::ROUTES;
use crate::store::{lock, TodoStore};
use crate::AppState;

pub async fn view(
    State(state): State<AppState>,
    mode: DisplayMode,
) -> Result<Html<String>, AppError> {
    let store = lock(&state.store)?;
    let todos: Vec<&Todo> = store.find(mode.criteria()).collect();
    let remaining = store.count(Criteria::finished(false));
    Ok(Html(render_view(&todos, remaining, mode, &state.base_path)))
}

pub fn render_view(todos: &[&Todo], remaining: usize, mode: DisplayMode, base_path: &str) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>Tasks</title>\n</head>\n",
    );
    let _ = writeln!(html, "<body data-display-mode=\"{mode}\">");
    html.push_str("<h1>Tasks</h1>\n<ul class=\"todo-list\">\n");

    for todo in todos {
        let class = if todo.finished { "finished" } else { "unfinished" };
        let checked = if todo.finished { " checked" } else { "" };
        let _ = writeln!(
            html,
            "    <li class=\"{class}\" data-id=\"{}\"><input type=\"checkbox\" disabled{checked}> {}</li>",
            todo.id,
            escape_html(&todo.label)
        );
    }
    html.push_str("</ul>\n");

    let noun = if remaining == 1 { "item" } else { "items" };
    let _ = writeln!(html, "<p class=\"todo-count\">{remaining} {noun} left</p>");

    html.push_str("<nav class=\"filters\">\n");
    for route in &ROUTES {
        let selected = if route.display_mode == mode { " class=\"selected\"" } else { "" };
        let _ = writeln!(
            html,
            "    <a href=\"{}\"{selected}>{}</a>",
            link(base_path, route.path),
            route.name
        );
    }
    html.push_str("</nav>\n</body>\n</html>\n");
    html
}

fn link(base_path: &str, path: &str) -> String {
    match (base_path.is_empty(), path) {
        (true, _) => path.to_string(),
        (false, "/") => base_path.to_string(),
        (false, _) => format!("{base_path}{path}"),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
