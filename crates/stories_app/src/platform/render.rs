use std::fmt::Write;

use stories_core::{AppViewModel, SortKey};

const TITLE_WIDTH: usize = 48;
const AUTHOR_WIDTH: usize = 24;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== My Hacker Stories ==");
    let _ = writeln!(out, "search: {}", view.search_term);

    if !view.recent_searches.is_empty() {
        let recent = view
            .recent_searches
            .iter()
            .enumerate()
            .map(|(index, term)| format!("[{}] {}", index + 1, term))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "recent: {recent}");
    }

    if view.sort.key != SortKey::None || view.sort.reversed {
        let direction = if view.sort.reversed { " (reversed)" } else { "" };
        let _ = writeln!(out, "sorted by {:?}{}", view.sort.key, direction);
    }

    if view.is_error {
        let _ = writeln!(out, "Something went wrong ...");
    }

    let _ = writeln!(
        out,
        "{:>10}  {:<TITLE_WIDTH$}  {:<AUTHOR_WIDTH$}  {:>8}  {:>6}",
        "id", "title", "author", "comments", "points"
    );
    for item in &view.items {
        let _ = writeln!(
            out,
            "{:>10}  {:<TITLE_WIDTH$}  {:<AUTHOR_WIDTH$}  {:>8}  {:>6}",
            item.id,
            truncate(&item.title, TITLE_WIDTH),
            truncate(&item.author, AUTHOR_WIDTH),
            item.num_comments,
            item.points
        );
    }

    if view.is_loading {
        let _ = writeln!(out, "Loading ...");
    } else if view.show_more {
        let _ = writeln!(
            out,
            "{} items, page {} (`more` for the next page)",
            view.items.len(),
            view.current_page
        );
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
