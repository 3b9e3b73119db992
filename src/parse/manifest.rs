// Parser for the restricted manifest format used by package definitions.
// A line-oriented subset of TOML: sectioned key/value pairs, quoted strings,
// and flat string lists. Malformed lines are skipped, never an error, and no
// type coercion happens: numbers and booleans stay strings.

use std::collections::BTreeMap;

/// A nested table of parsed values.
pub type Table = BTreeMap<String, Value>;

/// A parsed manifest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    List(Vec<String>),
    Table(Table),
}

impl Value {
    /// The value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The value as a table, if it is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Parse manifest text into a nested table.
///
/// Recognized lines:
/// - blank or `#`-comment: ignored
/// - `[a.b.c]`: selects (creating as needed) the nested table at that path;
///   later assignments land there
/// - `key = value`: a quoted string (delimiters stripped), a bracketed list,
///   or the raw trimmed text
///
/// Anything else is silently skipped. There is no escape handling, no
/// multi-line values, and no inline comments.
pub fn parse_manifest(input: &str) -> Table {
    let mut root = Table::new();
    // Path of the current section; keys always write into this table.
    let mut section: Vec<String> = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1]
                .split('.')
                .map(|part| part.to_string())
                .collect();
            // Materialize the path so empty sections still appear.
            section_mut(&mut root, &section);
            continue;
        }

        let Some(eq) = trimmed.find('=') else {
            continue;
        };
        if eq == 0 {
            continue;
        }

        let key = trimmed[..eq].trim().to_string();
        let value = parse_value(trimmed[eq + 1..].trim());
        section_mut(&mut root, &section).insert(key, value);
    }

    root
}

/// Walk to the table at `path`, creating levels as needed.
/// A non-table value already sitting at a path component is replaced.
fn section_mut<'a>(root: &'a mut Table, path: &[String]) -> &'a mut Table {
    let mut target = root;
    for part in path {
        let slot = target
            .entry(part.clone())
            .or_insert_with(|| Value::Table(Table::new()));
        if !matches!(slot, Value::Table(_)) {
            *slot = Value::Table(Table::new());
        }
        target = match slot {
            Value::Table(table) => table,
            _ => unreachable!(),
        };
    }
    target
}

/// Parse a raw value: quoted string, bracketed list, or plain text.
fn parse_value(raw: &str) -> Value {
    if let Some(unquoted) = strip_quotes(raw) {
        return Value::Str(unquoted.to_string());
    }

    if raw.starts_with('[') && raw.ends_with(']') {
        let items = raw[1..raw.len() - 1]
            .split(',')
            .map(|item| {
                let item = item.trim();
                strip_quotes(item).unwrap_or(item).to_string()
            })
            .filter(|item| !item.is_empty())
            .collect();
        return Value::List(items);
    }

    Value::Str(raw.to_string())
}

/// Strip a matching pair of single or double quotes, if present.
fn strip_quotes(raw: &str) -> Option<&str> {
    let stripped = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            raw.strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        })?;
    Some(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_value(table: &Table, key: &str) -> String {
        table.get(key).and_then(Value::as_str).unwrap().to_string()
    }

    #[test]
    fn test_bare_value_stays_string() {
        let table = parse_manifest("version = 1.2\nenabled = true\n");
        assert_eq!(str_value(&table, "version"), "1.2");
        assert_eq!(str_value(&table, "enabled"), "true");
    }

    #[test]
    fn test_quotes_stripped() {
        let table = parse_manifest("name = \"Foo\"\nother = 'Bar'\n");
        assert_eq!(str_value(&table, "name"), "Foo");
        assert_eq!(str_value(&table, "other"), "Bar");
    }

    #[test]
    fn test_section_nesting() {
        let table = parse_manifest("[a.b]\nx = 1\n");
        let a = table.get("a").and_then(Value::as_table).unwrap();
        let b = a.get("b").and_then(Value::as_table).unwrap();
        assert_eq!(b.get("x"), Some(&Value::Str("1".to_string())));
    }

    #[test]
    fn test_list_values() {
        let table = parse_manifest("tags = [a, \"b\", c]\n");
        let tags = table.get("tags").and_then(Value::as_list).unwrap();
        assert_eq!(tags, ["a", "b", "c"]);
    }

    #[test]
    fn test_list_drops_empty_elements() {
        let table = parse_manifest("tags = [a, , b, \"\"]\n");
        let tags = table.get("tags").and_then(Value::as_list).unwrap();
        assert_eq!(tags, ["a", "b"]);
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let table = parse_manifest("# heading\n\nname = pkg\n  # indented comment\n");
        assert_eq!(table.len(), 1);
        assert_eq!(str_value(&table, "name"), "pkg");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let table = parse_manifest("not-a-kv-pair\n= no key\nname = ok\n");
        assert_eq!(table.len(), 1);
        assert_eq!(str_value(&table, "name"), "ok");
    }

    #[test]
    fn test_keys_before_section_land_at_root() {
        let table = parse_manifest("top = 1\n[sub]\ninner = 2\n");
        assert_eq!(str_value(&table, "top"), "1");
        let sub = table.get("sub").and_then(Value::as_table).unwrap();
        assert_eq!(sub.get("inner"), Some(&Value::Str("2".to_string())));
    }

    #[test]
    fn test_section_replaces_non_table_value() {
        let table = parse_manifest("a = plain\n[a.b]\nx = 1\n");
        let a = table.get("a").and_then(Value::as_table).unwrap();
        assert!(a.contains_key("b"));
    }

    #[test]
    fn test_empty_section_materialized() {
        let table = parse_manifest("[meta]\n");
        assert!(table.get("meta").and_then(Value::as_table).is_some());
    }

    #[test]
    fn test_later_key_overwrites() {
        let table = parse_manifest("name = first\nname = second\n");
        assert_eq!(str_value(&table, "name"), "second");
    }

    #[test]
    fn test_equals_in_value_kept() {
        let table = parse_manifest("expr = a=b\n");
        assert_eq!(str_value(&table, "expr"), "a=b");
    }

    #[test]
    fn test_no_escape_handling() {
        let table = parse_manifest(r#"name = "a\"b""#);
        // The outer quotes are stripped verbatim; the backslash survives.
        assert_eq!(str_value(&table, "name"), r#"a\"b"#);
    }
}
