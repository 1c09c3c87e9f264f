/// Phrases that mark menu, account and promo text rather than a headline.
const NAVIGATION_PHRASES: &[&str] = &[
    "sign in",
    "log in",
    "login",
    "register",
    "subscribe",
    "menu",
    "search",
    "share",
    "follow us",
    "contact",
    "privacy",
    "terms",
    "newsletter",
    "my account",
    "advertisement",
    "sponsored",
];

/// True when `text`, lowercased, equals or starts with a navigation phrase.
pub fn is_navigation_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    NAVIGATION_PHRASES
        .iter()
        .any(|phrase| lower == *phrase || lower.starts_with(phrase))
}
