// String helpers

use std::collections::HashMap;

/// Replace named placeholders of the form `%{key}` in `template`.
///
/// Each placeholder is looked up in `replacements` in order; the first map
/// that contains the key wins. Placeholders whose key appears in no map are
/// left untouched. Substituted values are not scanned again.
///
/// # Examples
///
/// ```
/// use modroute_core::strings::format;
/// use std::collections::HashMap;
///
/// let names = HashMap::from([("name", "blog")]);
/// assert_eq!(format("module '%{name}'", &[&names]), "module 'blog'");
/// assert_eq!(format("%{missing}", &[&names]), "%{missing}");
/// ```
pub fn format(template: &str, replacements: &[&HashMap<&str, &str>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            // Unterminated placeholder, nothing left to substitute
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match replacements.iter().find_map(|map| map.get(key)) {
            Some(value) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                // Keep the opener and rescan, so `%{a%{b}` still substitutes `b`
                out.push_str("%{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_single_map() {
        let text = "%{ph1} are among the most comprehensive accounts of %{ph2} to survive from antiquity.";
        let map = HashMap::from([("ph1", "Plato's dialogues"), ("ph2", "Socrates")]);

        assert_eq!(
            format(text, &[&map]),
            "Plato's dialogues are among the most comprehensive accounts of Socrates to survive from antiquity."
        );
    }

    #[test]
    fn test_format_split_across_maps() {
        let text = "approach to areas of %{ph3} including %{ph4} and ethics, by %{ph1}";
        let first = HashMap::from([("ph1", "Plato")]);
        let second = HashMap::from([("ph3", "philosophy"), ("ph4", "rationalism")]);

        assert_eq!(
            format(text, &[&first, &second]),
            "approach to areas of philosophy including rationalism and ethics, by Plato"
        );
    }

    #[test]
    fn test_format_first_map_wins() {
        let first = HashMap::from([("name", "first")]);
        let second = HashMap::from([("name", "second")]);

        assert_eq!(format("%{name}", &[&first, &second]), "first");
        assert_eq!(format("%{name}", &[&second, &first]), "second");
    }

    #[test]
    fn test_format_missing_key_left_verbatim() {
        let map = HashMap::from([("known", "yes")]);
        assert_eq!(format("%{known} %{unknown}", &[&map]), "yes %{unknown}");
        assert_eq!(format("%{known}", &[]), "%{known}");
    }

    #[test]
    fn test_format_value_not_rescanned() {
        let map = HashMap::from([("a", "%{b}"), ("b", "nope")]);
        assert_eq!(format("%{a}", &[&map]), "%{b}");
    }

    #[test]
    fn test_format_nested_opener() {
        let map = HashMap::from([("b", "B")]);
        assert_eq!(format("%{a%{b}", &[&map]), "%{aB");
    }

    #[test]
    fn test_format_unterminated() {
        let map = HashMap::from([("name", "x")]);
        assert_eq!(format("tail %{name", &[&map]), "tail %{name");
        assert_eq!(format("", &[&map]), "");
        assert_eq!(format("no placeholders", &[&map]), "no placeholders");
    }

    #[test]
    fn test_format_multibyte() {
        let map = HashMap::from([("name", "モジュール")]);
        assert_eq!(format("'%{name}'", &[&map]), "'モジュール'");
    }
}
