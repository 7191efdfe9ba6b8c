// src/scrape/html_text.rs
use scraper::{Html, Selector};

/// Extracts the text of every `<li>` in an HTML fragment, trimmed, with
/// blank items dropped. Used for the snippet blurbs on listing cards.
pub fn list_item_texts(fragment: &str) -> Vec<String> {
    let document = Html::parse_fragment(fragment);
    let items = Selector::parse("li").expect("static selector");

    document
        .select(&items)
        .map(|element| {
            element
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_items_are_dropped() {
        let bullets =
            list_item_texts("<ul><li>5 years exp</li><li></li><li>Python</li></ul>");
        assert_eq!(bullets, vec!["5 years exp", "Python"]);
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        let bullets = list_item_texts("<ul><li>Strong <b>SQL</b>\n skills</li></ul>");
        assert_eq!(bullets, vec!["Strong SQL skills"]);
    }

    #[test]
    fn test_no_list_items() {
        assert!(list_item_texts("<p>plain snippet</p>").is_empty());
        assert!(list_item_texts("").is_empty());
    }
}
