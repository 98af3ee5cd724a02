use crate::parsers::ScriptReference;
use scraper::{Html, Selector};

/// Parses an HTML document and returns its script elements in document order
pub fn parse_scripts(html: &str) -> Vec<ScriptReference> {
    let doc = Html::parse_document(html);

    let script_selector = Selector::parse("script").expect("static selector is valid");
    let scripts = doc
        .select(&script_selector)
        .enumerate()
        .map(|(index, element)| {
            let body = element.text().collect::<String>();
            let src = element.value().attr("src").map(|s| s.to_string());
            ScriptReference::new(index, body, src)
        })
        .collect::<Vec<_>>();

    ::log::debug!(
        "HTML parser found {} scripts ({} external)",
        scripts.len(),
        scripts.iter().filter(|s| s.is_external()).count()
    );

    scripts
}

/// Parses raw page bytes, replacing invalid UTF-8
pub fn parse_scripts_from_bytes(bytes: &[u8]) -> Vec<ScriptReference> {
    parse_scripts(&super::decode_page(bytes))
}
