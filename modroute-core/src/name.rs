// Module and action name formatting and grammar

use once_cell::sync::Lazy;
use regex::Regex;

/// Name substituted for a missing or empty module or action.
pub const DEFAULT_NAME: &str = "index";

// Letters, digits, underscore and hyphen; empty allowed
static MODULE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]*$").unwrap());

// Leading letter or underscore, then letters, digits and underscore
static ACTION_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// Normalize one raw path segment into a route name.
///
/// Trims surrounding ASCII whitespace and NUL, lower-cases ASCII letters and keeps only
/// the last `/`-separated component, so `"  ../HoGe  "` becomes `"hoge"`.
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use modroute_core::format_name;
///
/// assert_eq!(format_name(" HoGe "), "hoge");
/// assert_eq!(format_name("../hoge"), "hoge");
/// ```
pub fn format_name(raw: &str) -> String {
    escape_name(raw).to_ascii_lowercase()
}

/// [`format_name`] without the case folding.
pub fn escape_name(raw: &str) -> &str {
    trim_padding(last_component(trim_padding(raw)))
}

// Only ASCII padding; other Unicode spaces stay part of the name
fn trim_padding(value: &str) -> &str {
    value.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

fn last_component(value: &str) -> &str {
    let value = value.trim_end_matches('/');
    value.rsplit('/').next().unwrap_or(value)
}

/// Check a module name against its grammar
pub fn is_valid_module_name(name: &str) -> bool {
    MODULE_NAME_REGEX.is_match(name)
}

/// Check an action name against its grammar
pub fn is_valid_action_name(name: &str) -> bool {
    ACTION_NAME_REGEX.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name() {
        assert_eq!(format_name(" hoge "), "hoge");
        assert_eq!(format_name("HoGe"), "hoge");
        assert_eq!(format_name("../hoge"), "hoge");
        assert_eq!(format_name("  ../HoGe  "), "hoge");
    }

    #[test]
    fn test_format_name_structure() {
        assert_eq!(format_name("a/b/c"), "c");
        assert_eq!(format_name("hoge/"), "hoge");
        assert_eq!(format_name("/"), "");
        assert_eq!(format_name(""), "");
        assert_eq!(format_name(".."), "..");
        assert_eq!(format_name("../ x "), "x");
    }

    #[test]
    fn test_format_name_idempotent() {
        for raw in [" A/ B ", "../HoGe", "  ", "x/..", "モジュール", "Mod-Ule_1", "a//", " / "] {
            let once = format_name(raw);
            assert_eq!(format_name(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_format_name_keeps_non_ascii() {
        assert_eq!(format_name("モジュール"), "モジュール");
        assert_eq!(format_name("ÄBC"), "Äbc");
    }

    #[test]
    fn test_format_name_trims_ascii_padding_only() {
        assert_eq!(format_name("\t\r\n\0\x0Bhoge \x0B"), "hoge");
        assert_eq!(format_name("\u{3000}hoge"), "\u{3000}hoge");
        assert_eq!(format_name("hoge\u{00A0}"), "hoge\u{00A0}");
        assert!(!is_valid_module_name(&format_name("\u{3000}module\u{00A0}")));
    }

    #[test]
    fn test_escape_name_keeps_case() {
        assert_eq!(escape_name("  ../HoGe  "), "HoGe");
    }

    #[test]
    fn test_valid_module_names() {
        assert!(is_valid_module_name("module"));
        assert!(is_valid_module_name("_-module"));
        assert!(is_valid_module_name("Module123"));
        assert!(is_valid_module_name(""));
    }

    #[test]
    fn test_invalid_module_names() {
        assert!(!is_valid_module_name("あああ"));
        assert!(!is_valid_module_name("%module"));
        assert!(!is_valid_module_name("  module  "));
        assert!(!is_valid_module_name(".."));
        assert!(!is_valid_module_name("module\n"));
    }

    #[test]
    fn test_valid_action_names() {
        assert!(is_valid_action_name("action"));
        assert!(is_valid_action_name("_action"));
        assert!(is_valid_action_name("action_"));
        assert!(is_valid_action_name("action123"));
        assert!(is_valid_action_name("Action"));
    }

    #[test]
    fn test_invalid_action_names() {
        assert!(!is_valid_action_name("あああ"));
        assert!(!is_valid_action_name("123action"));
        assert!(!is_valid_action_name("%action"));
        assert!(!is_valid_action_name("-action"));
        assert!(!is_valid_action_name("action%"));
        assert!(!is_valid_action_name("action-"));
        assert!(!is_valid_action_name("  action  "));
        assert!(!is_valid_action_name(""));
    }
}
