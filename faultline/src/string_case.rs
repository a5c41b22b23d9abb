//! Conversion of identifier-style kind strings into readable phrases.

/// Convert a camelCase identifier into a lowercase space-separated phrase.
///
/// Words split on lower-to-upper transitions, on digit-to-upper transitions,
/// and before the last capital of an uppercase run when a lowercase letter
/// follows, which keeps abbreviations intact:
///
/// - `alreadyExistsError` becomes `already exists error`
/// - `APINotAvailableError` becomes `api not available error`
/// - `v2RouteNotReachable` becomes `v2 route not reachable`
///
/// Digits never start a word, so `statusCode200` becomes `status code200`.
pub fn to_phrase(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut phrase = String::with_capacity(ident.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                phrase.push(' ');
            }
        }
        phrase.extend(c.to_lowercase());
    }

    phrase
}
