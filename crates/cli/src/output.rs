//! Rendering of command results.

use std::collections::BTreeMap;

use cxx_fhir_urls::{Namespace, NamespaceEntry};

use crate::config::OutputFormat;

/// Renders a flat list of URLs.
pub fn render_list(urls: &[&str], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => lines(urls.iter().copied()),
        OutputFormat::Json => serde_json::to_string_pretty(urls)?,
        OutputFormat::Yaml => serde_yaml::to_string(urls)?,
    })
}

/// Renders a short name map, sorted by key.
pub fn render_map(map: &BTreeMap<&str, &str>, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => lines(map.iter().map(|(key, url)| format!("{key}\t{url}"))),
        OutputFormat::Json => serde_json::to_string_pretty(map)?,
        OutputFormat::Yaml => serde_yaml::to_string(map)?,
    })
}

/// Renders export entries. Text output falls back to JSON.
pub fn render_entries(entries: &[NamespaceEntry], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text | OutputFormat::Json => serde_json::to_string_pretty(entries)?,
        OutputFormat::Yaml => serde_yaml::to_string(entries)?,
    })
}

/// Indented outline of a namespace and its descendants with their domain counts.
pub fn render_tree(node: &Namespace, label: &str) -> String {
    let mut out = Vec::new();
    out.push(format!("{label} ({})", node.all_domains().len()));
    for (path, child) in node.walk() {
        let depth = path.matches('.').count() + 1;
        let marker = if child.has_sub_extensions() { " *" } else { "" };
        out.push(format!(
            "{}{} ({}){marker}",
            "  ".repeat(depth),
            child.name(),
            child.all_domains().len()
        ));
    }
    lines(out)
}

fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for item in items {
        out.push_str(item.as_ref());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxx_fhir_urls::{extension, find};

    #[test]
    fn test_render_list_text() {
        let out = render_list(&["https://x/a", "https://x/b"], OutputFormat::Text).unwrap();
        assert_eq!(out, "https://x/a\nhttps://x/b\n");
    }

    #[test]
    fn test_render_list_json() {
        let out = render_list(&["https://x/a"], OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, ["https://x/a"]);
    }

    #[test]
    fn test_render_map_yaml() {
        let map = BTreeMap::from([("b", "https://x/a/b"), ("a", "https://x/a/a")]);
        let out = render_map(&map, OutputFormat::Yaml).unwrap();
        assert_eq!(out, "a: https://x/a/a\nb: https://x/a/b\n");
    }

    #[test]
    fn test_render_tree_marks_curated_nodes() {
        let study = find("extension.study").unwrap();
        let out = render_tree(study, "extension.study");
        let first = out.lines().next().unwrap();
        assert_eq!(first, format!("extension.study ({})", extension::study::all_domains().len()));
        assert!(out.contains("\n    visit (2)\n"));
        assert!(out.contains("  schedule (4) *\n"));
    }

    #[test]
    fn test_render_entries_yaml() {
        let entries = cxx_fhir_urls::entries("extension.sprec").unwrap();
        let out = render_entries(&entries, OutputFormat::Yaml).unwrap();
        assert!(out.starts_with("- path: extension.sprec\n"));
        let line = format!("warmIschTime: {}\n", extension::sprec::WARM_ISCH_TIME);
        assert!(out.contains(&line));
    }
}
