//! Small pure helpers shared by the loader: list deduplication and
//! resource-directory prefixing.

/// Remove repeated entries from a file list, keeping first-occurrence order.
pub fn dedup_files(files: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    files
        .iter()
        .filter(|f| seen.insert(f.as_str()))
        .cloned()
        .collect()
}

/// Join an optional resource directory onto a file name.
///
/// An empty or absent directory leaves the name untouched. A trailing
/// separator on the directory is not doubled.
pub fn prefixed(resource_dir: Option<&str>, name: &str) -> String {
    match resource_dir {
        Some(dir) if !dir.is_empty() => {
            if dir.ends_with('/') {
                format!("{}{}", dir, name)
            } else {
                format!("{}/{}", dir, name)
            }
        }
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        assert_eq!(
            dedup_files(&strings(&["a.js", "b.js", "a.js"])),
            strings(&["a.js", "b.js"])
        );
        assert_eq!(
            dedup_files(&strings(&["x.css", "x.css", "x.css"])),
            strings(&["x.css"])
        );
        assert_eq!(dedup_files(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_prefixed_joins_with_separator() {
        assert_eq!(
            prefixed(Some("resource/pkg"), "x.js"),
            "resource/pkg/x.js"
        );
        assert_eq!(prefixed(Some("resource/"), "x.js"), "resource/x.js");
        // No directory - name passes through
        assert_eq!(prefixed(None, "x.js"), "x.js");
        assert_eq!(prefixed(Some(""), "x.js"), "x.js");
    }
}
