use scraper::{ElementRef, Node, Selector};

use super::collapse_whitespace;

/// Visible text of `element` with `<br>` read as a line break, normalised by
/// [`collapse_whitespace`].
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(element, None, &mut raw);
    collapse_whitespace(&raw)
}

/// Like [`element_text`], but leaves out every descendant carrying the class
/// `skip_class`.
pub fn element_text_without(element: ElementRef<'_>, skip_class: &str) -> String {
    let mut raw = String::new();
    push_text(element, Some(skip_class), &mut raw);
    collapse_whitespace(&raw)
}

fn push_text(element: ElementRef<'_>, skip_class: Option<&str>, raw: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(el) if el.name().eq_ignore_ascii_case("br") => raw.push('\n'),
            Node::Element(el) => {
                if skip_class.is_some_and(|class| el.classes().any(|c| c == class)) {
                    // keep the words on either side apart
                    raw.push(' ');
                    continue;
                }
                if let Some(child) = ElementRef::wrap(child) {
                    push_text(child, skip_class, raw);
                }
            }
            _ => {}
        }
    }
}

/// Text of the first match of `selector` below `element`, `None` when nothing
/// matches or the match is blank.
pub fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_element_text_handles_nested_tags_and_breaks() {
        let html = Html::parse_fragment(
            "<div><strong>Gulasch</strong><br/>mit   <em>Nudeln</em>&nbsp;und Salat</div>",
        );
        let div = html
            .select(&Selector::parse("div").unwrap())
            .next()
            .unwrap();
        assert_eq!(element_text(div), "Gulasch mit Nudeln und Salat");
    }

    #[test]
    fn test_element_text_without_skips_class_subtree() {
        let html = Html::parse_fragment(
            r#"<table><tr><th>Zentralmensa<div class="sp_date">Montag, <b>02.02.2026</b></div>Nord</th></tr></table>"#,
        );
        let th = html
            .select(&Selector::parse("th").unwrap())
            .next()
            .unwrap();
        assert_eq!(element_text_without(th, "sp_date"), "Zentralmensa Nord");
        assert_eq!(element_text(th), "ZentralmensaMontag, 02.02.2026Nord");
    }

    #[test]
    fn test_text_from_selection_blank_is_none() {
        let html = Html::parse_fragment("<div><span>  </span><p>x</p></div>");
        let div = html
            .select(&Selector::parse("div").unwrap())
            .next()
            .unwrap();
        assert_eq!(
            text_from_selection(&Selector::parse("span").unwrap(), div),
            None
        );
        assert_eq!(
            text_from_selection(&Selector::parse("p").unwrap(), div),
            Some("x".to_string())
        );
    }
}
