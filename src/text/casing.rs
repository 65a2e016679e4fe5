/// Transfer the casing convention of `source` onto `target`.
///
/// An all-uppercase source (more than one cased letter) uppercases the whole
/// target. Otherwise only the first letter's case is transferred. Uncased
/// sources leave the target untouched.
pub fn match_case(source: &str, target: &str) -> String {
    let mut cased = source.chars().filter(|c| c.is_lowercase() || c.is_uppercase());
    let first = match cased.next() {
        Some(c) => c,
        None => return target.to_string(),
    };

    let rest_upper = cased.clone().all(|c| c.is_uppercase());
    if first.is_uppercase() && rest_upper && cased.next().is_some() {
        return target.to_uppercase();
    }

    let mut chars = target.chars();
    match chars.next() {
        Some(head) if first.is_uppercase() => head.to_uppercase().chain(chars).collect(),
        Some(head) => head.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
