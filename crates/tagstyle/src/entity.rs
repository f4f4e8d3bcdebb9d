//! Fixed character entity table.
//!
//! Only three entities are recognized, enough to write the markup delimiters
//! as literal text:
//!
//! | Entity  | Replacement |
//! |---------|-------------|
//! | `&lt;`  | `<`         |
//! | `&gt;`  | `>`         |
//! | `&amp;` | `&`         |

use once_cell::sync::Lazy;
use std::collections::HashMap;

static ENTITIES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("lt", "<"), ("gt", ">"), ("amp", "&")]));

/// Returns the replacement text for an entity name, without `&` and `;`.
///
/// ```rust
/// assert_eq!(tagstyle::entity::resolve("amp"), Some("&"));
/// assert_eq!(tagstyle::entity::resolve("nbsp"), None);
/// ```
pub fn resolve(name: &str) -> Option<&'static str> {
    ENTITIES.get(name).copied()
}

/// Escapes `&`, `<` and `>` so that `text` reads back unchanged as markup.
///
/// ```rust
/// assert_eq!(tagstyle::escape("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
