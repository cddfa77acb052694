//! Edits on the literal text of a bracketed string array.
//!
//! Items are matched with both quotes included, so `io.h` never matches
//! inside `"stdio.h"`.

fn quoted(item: &str) -> String {
    format!("\"{}\"", item)
}

pub fn contains_item(list: &str, item: &str) -> bool {
    list.contains(&quoted(item))
}

/// Appends `item` before the closing bracket unless it is already present.
pub fn add_item(list: &str, item: &str) -> String {
    if contains_item(list, item) {
        return list.to_string();
    }
    let Some(close) = list.rfind(']') else {
        return list.to_string();
    };

    let head = list[..close].trim_end();
    let has_items = !head.strip_prefix('[').unwrap_or(head).trim().is_empty();
    let insert_at = head.len();

    let mut out = String::with_capacity(list.len() + item.len() + 4);
    out.push_str(&list[..insert_at]);
    if has_items {
        out.push_str(", ");
    }
    out.push_str(&quoted(item));
    out.push_str(&list[insert_at..]);
    out
}

/// Removes `item` and exactly one neighbouring separator.
pub fn remove_item(list: &str, item: &str) -> String {
    let needle = quoted(item);
    let Some(start) = list.find(&needle) else {
        return list.to_string();
    };
    let end = start + needle.len();

    let rest = &list[end..];
    let rest_trimmed = rest.trim_start();
    if let Some(after_comma) = rest_trimmed.strip_prefix(',') {
        // Trailing separator: drop the comma and the whitespace after it
        let consumed = rest.len() - after_comma.trim_start().len();
        return format!("{}{}", &list[..start], &list[end + consumed..]);
    }

    let before = list[..start].trim_end();
    if before.ends_with(',') {
        let comma = before.len() - 1;
        return format!("{}{}", &list[..comma], rest);
    }

    format!("{}{}", &list[..start], rest)
}

/// Splits the array text into its unquoted entries.
pub fn items(list: &str) -> Vec<String> {
    let inner = list.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
