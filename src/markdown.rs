//! Filtering and markdown serialization of fetched memos.

use crate::memo::Memo;

/// Keeps the memos whose content contains `query` as a literal,
/// case-sensitive substring. An empty query keeps everything, in the
/// original order. A leading `#` tag is matched like any other text.
pub fn filter(memos: Vec<Memo>, query: &str) -> Vec<Memo> {
    if query.is_empty() {
        return memos;
    }
    memos
        .into_iter()
        .filter(|memo| memo.content.contains(query))
        .collect()
}

/// Serializes memos into one markdown document: a title, a line naming
/// the active query (or the absence of one), a count line, then a
/// level-2 section per memo in input order. The fetch already requests
/// ascending creation time, so no re-sorting happens here.
pub fn render(memos: &[Memo], query: &str) -> String {
    let mut markdown = String::from("# Memos\n\n");
    if query.is_empty() {
        markdown.push_str("All memos included\n\n");
    } else {
        markdown.push_str(&format!("Filtered by '{}'\n\n", query));
    }
    markdown.push_str(&format!("Memos found: {}\n\n", memos.len()));
    for memo in memos {
        markdown.push_str(&format!("## {}\n\n", memo.create_time));
        markdown.push_str(&format!("{}\n\n", memo.content.trim()));
    }
    markdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Memo> {
        vec![
            Memo::new("2024-01-01T00:00:00Z", "buy milk"),
            Memo::new("2024-01-02T00:00:00Z", "buy #eggs"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let memos = sample();
        assert_eq!(filter(memos.clone(), ""), memos);
    }

    #[test]
    fn query_matches_literal_substring() {
        let filtered = filter(sample(), "#eggs");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "buy #eggs");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(filter(sample(), "Milk").is_empty());
    }

    #[test]
    fn empty_content_never_matches() {
        let memos = vec![Memo::new("2024-01-01T00:00:00Z", "")];
        assert!(filter(memos, "milk").is_empty());
    }

    #[test]
    fn render_is_deterministic() {
        let memos = sample();
        assert_eq!(render(&memos, "buy"), render(&memos, "buy"));
    }

    #[test]
    fn render_counts_zero_memos() {
        let doc = render(&[], "");
        assert!(doc.contains("Memos found: 0\n"));
        assert!(doc.contains("All memos included\n"));
    }

    #[test]
    fn render_names_the_active_query() {
        let doc = render(&sample(), "#eggs");
        assert!(doc.contains("Filtered by '#eggs'\n"));
        assert!(doc.contains("Memos found: 2\n"));
    }

    #[test]
    fn sections_keep_input_order_and_trim_content() {
        let memos = vec![
            Memo::new("2024-01-02T00:00:00Z", "  later  \n"),
            Memo::new("2024-01-01T00:00:00Z", "earlier"),
        ];
        let doc = render(&memos, "");
        let later = doc.find("## 2024-01-02T00:00:00Z").unwrap();
        let earlier = doc.find("## 2024-01-01T00:00:00Z").unwrap();
        assert!(later < earlier);
        assert!(doc.contains("## 2024-01-02T00:00:00Z\n\nlater\n\n"));
    }
}
