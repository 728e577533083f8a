use scraper::{Html, Selector};

const ARCHIVE_SUFFIXES: [&str; 2] = [".zip", "tar.gz"];

/// Archive names linked from a catalog page, in document order.
///
/// Only anchors carrying an `href` count, and their visible text is what gets returned, not the
/// link target. The `tar.gz` check has no leading dot, so `foo-tar.gz` is accepted as well.
pub fn parse_options(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("static selector is valid");

    document
        .select(&anchors)
        .map(|anchor| anchor.text().collect::<String>())
        .filter(|text| is_archive_name(text))
        .collect()
}

pub fn is_archive_name(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
