//! Prompt construction for blurb generation.

/// Build the editor prompt for a blurb style, truncating the article text
/// to `max_article_chars` characters first.
pub fn build_prompt(article_text: &str, blurb_type: &str, max_article_chars: usize) -> String {
    let article_text = truncate_chars(article_text, max_article_chars);

    format!(
        "You are a Wikipedia editor. Create a single {} style blurb \
         from the following article text. Keep it short, fact-focused, and \
         formatted in a way that could go directly on the Wikipedia main page.\n\n\
         Article:\n{}\n\nBlurb:",
        blurb_type, article_text
    )
}

/// Truncate to at most `max_chars` characters, on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
