use super::{ValidationFailure, ValidationResult};
use crate::store::{StoreError, UserStore};
use once_cell::sync::Lazy;
use regex::Regex;

const EMAIL_RULES: [&str; 2] = ["is a valid email address", "is available"];
const VALID_ADDRESS: usize = 0;
const AVAILABLE: usize = 1;

const ATEXT: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{80}-\x{10FFFF}]";
const QUOTED: &str = r#""(?:[^"\\\r\n]|\\[^\r\n])+""#;
/// Optional trailing `(comment)`, without nesting.
const COMMENT: &str = r"(?:\s*\((?:[^()\\\r\n]|\\[^\r\n])*\))?";

/// `local@domain` with named groups.
static ADDR_SPEC: Lazy<String> = Lazy::new(|| {
    let dot_atom = format!(r"{a}+(?:\.{a}+)*", a = ATEXT);
    format!(
        r"(?P<local>{dot}|{q})@(?P<domain>{dot})",
        dot = dot_atom,
        q = QUOTED
    )
});

static BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*{}{}\s*$", *ADDR_SPEC, COMMENT)).unwrap());

static ANGLE_RE: Lazy<Regex> = Lazy::new(|| {
    let word = format!(r"(?:(?:{a}|\.)+|{q})", a = ATEXT, q = QUOTED);
    let phrase = format!(r"{w}(?:\s+{w})*", w = word);
    Regex::new(&format!(
        r"^\s*(?:{}\s*)?<\s*{}\s*>{}\s*$",
        phrase, *ADDR_SPEC, COMMENT
    ))
    .unwrap()
});

/// Parse a mail address in `local@domain`, `<local@domain>` or
/// `Display Name <local@domain>` form. Returns the bare address, with a quoted
/// local part unquoted, or `None` if the candidate does not parse.
///
pub fn parse_address(candidate: &str) -> Option<String> {
    let caps = BARE_RE
        .captures(candidate)
        .or_else(|| ANGLE_RE.captures(candidate))?;
    let local = caps.name("local")?.as_str();
    let domain = caps.name("domain")?.as_str();
    Some(format!("{}@{}", unquote(local), domain))
}

fn unquote(local: &str) -> String {
    match local.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => {
            let mut out = String::with_capacity(inner.len());
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => out.extend(chars.next()),
                    _ => out.push(c),
                }
            }
            out
        }
        None => local.to_string(),
    }
}

/// Validate a candidate email address, returning the normalized address.
///
/// An address that does not parse only fails the format rule; availability
/// is checked against the store only once the address parses.
///
pub fn validate_email(candidate: &str, store: &dyn UserStore) -> Result<String, ValidationFailure> {
    let mut result = ValidationResult::new(&EMAIL_RULES);

    let address = match parse_address(candidate) {
        Some(address) => address,
        None => {
            result.set_failed(VALID_ADDRESS, true);
            return result.into_result(String::new());
        }
    };

    match store.find(&address) {
        Err(StoreError::NotFound { .. }) => (),
        Ok(_) | Err(StoreError::AlreadyExists { .. }) => result.set_failed(AVAILABLE, true),
    }

    result.into_result(address)
}
