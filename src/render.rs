use std::fmt::Write;

use anyhow::Result;
use html2text::from_read;

use crate::component::SearchView;
use crate::data_models::PostMatch;

const SNIPPET_CHARS: usize = 200;
const TEXT_WIDTH: usize = 100;

/// Renders a view snapshot for the terminal.
pub fn render_view(view: &SearchView) -> String {
    let mut out = String::new();

    if view.typewriter && !view.suggestions.is_empty() {
        let _ = writeln!(out, "Try asking:");
        for suggestion in &view.suggestions {
            let _ = writeln!(out, "  - {suggestion}");
        }
    }
    if view.is_loading {
        let _ = writeln!(out, "searching...");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "error: {error}");
    }
    if let Some(result) = &view.result {
        let _ = writeln!(
            out,
            "{} matches for {:?} ({} ms)",
            result.num_matches, view.search_term, result.latency
        );
        for (rank, post_match) in result.matches.iter().enumerate() {
            out.push_str(&render_match(rank + 1, post_match));
        }
    }
    out
}

fn render_match(rank: usize, post_match: &PostMatch) -> String {
    let post = &post_match.post;
    let body = plain_text(&post.body).unwrap_or_else(|e| {
        log::warn!("could not convert body of post {}: {:#}", post_match.id, e);
        post.body.clone()
    });
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{rank:>3}. [{}] {} (distance {:.3})",
        post_match.id, post.title, post_match.distance
    );
    if !post.tags.is_empty() {
        let _ = writeln!(out, "     tags: {}", post.tags.join(", "));
    }
    let _ = writeln!(out, "     {}", snippet(&body));
    out
}

/// Post bodies come back as HTML.
pub fn plain_text(html: &str) -> Result<String> {
    let text = from_read(html.as_bytes(), TEXT_WIDTH)?;
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

pub fn snippet(text: &str) -> String {
    if text.chars().count() > SNIPPET_CHARS {
        let cut: String = text.chars().take(SNIPPET_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
