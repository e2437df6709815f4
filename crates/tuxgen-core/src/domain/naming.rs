//! Identifier derivation for entity and behavior names.
//!
//! Everything here is pure and total: empty input gives empty output and no
//! function can fail. Templates rely on these forms being recomputed from the
//! raw name every time, so nothing in this module is settable.
//!
//! | Input          | camel         | capital       | behavior name         |
//! |----------------|---------------|---------------|-----------------------|
//! | `tux-panel`    | `tuxPanel`    | `TuxPanel`    | `panel-behavior`      |
//! | `x-foo`        | `xFoo`        | `XFoo`        | `x-foo-behavior`      |
//! | `my-behavior`  | `myBehavior`  | `MyBehavior`  | `my-behavior`         |

/// Prefix dropped from entity names when deriving a behavior name.
pub const BEHAVIOR_PREFIX: &str = "tux-";

/// Suffix every derived behavior name carries.
pub const BEHAVIOR_SUFFIX: &str = "-behavior";

/// Camel-case and capitalized forms of one name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameForms {
    pub camel: String,
    pub capital: String,
}

impl NameForms {
    /// Derive both forms from a raw name.
    ///
    /// `capital` is always `capitalize(camel)`, never computed separately.
    pub fn derive(name: &str) -> Self {
        let camel = camel_case(name);
        let capital = capitalize(&camel);
        Self { camel, capital }
    }
}

/// Convert a name to camelCase.
///
/// Word boundaries are any non-alphanumeric character (`-`, `_`, whitespace,
/// punctuation), a lower→upper transition, and the end of an acronym. The
/// first word is lower-cased; each later word is lower-cased with its first
/// character upper-cased.
///
/// | Input            | Output          |
/// |------------------|-----------------|
/// | `tux-panel`      | `tuxPanel`      |
/// | `Foo Bar_baz`    | `fooBarBaz`     |
/// | `XMLHttpRequest` | `xmlHttpRequest`|
/// | `--x--`          | `x`             |
pub fn camel_case(name: &str) -> String {
    split_words(name)
        .into_iter()
        .enumerate()
        .map(|(idx, word)| if idx == 0 { word } else { capitalize(&word) })
        .collect()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Derive the behavior name for an entity.
///
/// 1. A leading `tux-` (any case) is dropped.
/// 2. `-behavior` is appended unless the remainder already contains it.
///
/// A name that *starts* with `-behavior` counts as containing it, so
/// `-behavior` maps to itself rather than `-behavior-behavior`.
pub fn derive_behavior_name(entity_name: &str) -> String {
    let stripped = strip_behavior_prefix(entity_name);

    match stripped.find(BEHAVIOR_SUFFIX) {
        Some(_) => stripped.to_string(),
        None => format!("{stripped}{BEHAVIOR_SUFFIX}"),
    }
}

fn strip_behavior_prefix(name: &str) -> &str {
    match name.get(..BEHAVIOR_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(BEHAVIOR_PREFIX) => &name[BEHAVIOR_PREFIX.len()..],
        _ => name,
    }
}

/// Split a string into lower-cased words based on casing and separators.
///
/// 1. **Separators:** any non-alphanumeric character ends the current word
/// 2. **camelCase transition:** `aB` splits between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` splits between `P` and `R`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            // "myApp" → "my" + "App"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
