use scraper::ElementRef;

/// Collapses runs of whitespace into single spaces and trims the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text content of an element and all of its descendants, whitespace-normalized
///
/// Text nodes are joined with a space so that `<b>PHP</b><i>Dev</i>` reads as
/// "PHP Dev" rather than "PHPDev".
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}
