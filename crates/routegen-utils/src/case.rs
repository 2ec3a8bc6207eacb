pub use convert_case::{Case, Casing};

/// Lower-case the first character of `s` and keep the remainder verbatim.
///
/// Unlike `Case::Camel` this never touches later characters, so acronyms and
/// digits survive (`"URLService"` becomes `"uRLService"`). A first character
/// whose lower case is more than one character is kept as-is.
#[must_use]
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut lower = first.to_lowercase();
    let head = match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => first,
    };

    std::iter::once(head).chain(chars).collect()
}

/// Render a camel or pascal case name as a snake case Rust identifier.
#[must_use]
pub fn to_snake_ident(s: &str) -> String {
    s.to_case(Case::Snake)
}
