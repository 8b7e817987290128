//! Human-readable rendering of extracted search results.

use legis_core::ExtractedItem;

/// Maximum number of characters of an excerpt shown in text output.
const EXCERPT_MAX_LEN: usize = 300;

/// Renders items the way `legis` prints them on stdout.
pub fn render_items(items: &[ExtractedItem]) -> String {
    if items.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("\nResult {}: {}\n", i + 1, item.title));
        out.push_str(&format!("   Nature: {}\n", item.nature));
        out.push_str(&format!("   Date:   {}\n", item.date));
        if let Some(id) = &item.id {
            out.push_str(&format!("   Id:     {}\n", id));
        }

        for excerpt in &item.excerpts {
            out.push_str(&format!("   Article {}:\n", excerpt.article_number));
            out.push_str(&format!(
                "      {}\n",
                truncate_text(&excerpt.text, EXCERPT_MAX_LEN)
            ));
        }
    }
    out
}

/// Collapses whitespace and truncates to `max_len` characters, adding an ellipsis.
fn truncate_text(text: &str, max_len: usize) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.chars().count() <= max_len {
        cleaned
    } else {
        let head: String = cleaned.chars().take(max_len).collect();
        format!("{}...", head)
    }
}
