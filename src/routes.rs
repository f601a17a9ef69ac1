//! The fixture's simulated site graph.
//!
//! A static path -> HTML fragment table plus the two registered asset
//! paths. The table is compile-time data and is never mutated; lookups
//! are exact string equality, with no trailing-slash normalization and
//! no case folding.

/// Fragments served for known pages. `/secret2` and `/403` are linked
/// from fragments but deliberately absent from this table, so a scanner
/// following those links hits the default not-found response.
pub const PAGES: &[(&str, &str)] = &[
    (
        "/secret",
        concat!(
            "<a href=\"/\">Home</a>\n",
            "<a href=\"/secret2\">Click Me</a><br/>\n",
        ),
    ),
    (
        "/404",
        concat!(
            "<a href=\"/\">Home</a>\n",
            "<a href=\"/403\">Click Me</a><br/>\n",
        ),
    ),
    (
        "/",
        concat!(
            "<h1>Home</h1>\n",
            "<a href=\"/test\"> Click Me </a><br/>\n",
        ),
    ),
    (
        "/test",
        concat!(
            "<h1>Test</h1>\n",
            "<a href=\"/secret\"> Click Me </a><br/>\n",
            "<a href=\"/test.png\"> Click Me </a><br/>\n",
            "<a href=\"test.png\"> Click Me </a><br/>\n",
            "<a href=\"/x/test.png\"> Click Me </a><br/>\n",
            "<a href=\"/test/scanonlythis/test1\"> Click Me </a>\n",
        ),
    ),
    (
        "/test/scanonlythis/test1",
        concat!(
            "<h1>Test</h1>\n",
            "<a href=\"/secret\"> Click Me </a><br/>\n",
            "<a href=\"/test/scanonlythis/test2/secret\"> Click Me </a>\n",
        ),
    ),
    (
        "/test/scanonlythis/test2/secret",
        concat!(
            "<h1>Test</h1>\n",
            "<a href=\"/\"> Home </a><br/>\n",
            "<a href=\"/secret\"> Click Me </a><br/>\n",
            "Current page: <a href=\"/test/scanonlythis/test2/secret\"> Click Me </a>\n",
        ),
    ),
];

/// Paths the static asset fallback is registered for. Both spellings
/// resolve to the same file on disk. The relative `x/test.png` entry is
/// kept as registered in the original fixture even though real request
/// paths always start with `/`, leaving it unreachable from the wire.
pub const ASSET_PATHS: &[&str] = &["/test.png", "x/test.png"];

/// Exact-match lookup of a request path in the page table.
pub fn lookup(path: &str) -> Option<&'static str> {
    PAGES
        .iter()
        .find(|&&(route, _)| route == path)
        .map(|&(_, fragment)| fragment)
}

/// Whether `path` is one of the two registered asset spellings.
pub fn is_asset_path(path: &str) -> bool {
    ASSET_PATHS.contains(&path)
}

/// Wrap a fragment in the fixed document shell. The fragment is
/// inserted verbatim; fragments carry their own markup.
pub fn render_page(fragment: &str) -> String {
    format!("<html><head><title>Test</title></head><body>{fragment}</body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect href attribute values in document order.
    fn hrefs(html: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = html;
        while let Some(start) = rest.find("href=\"") {
            let value = &rest[start + 6..];
            let end = value.find('"').expect("unterminated href");
            out.push(&value[..end]);
            rest = &value[end..];
        }
        out
    }

    #[test]
    fn test_table_paths() {
        let paths: Vec<&str> = PAGES.iter().map(|(p, _)| *p).collect();
        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/test"));
        assert!(paths.contains(&"/secret"));
        assert!(paths.contains(&"/404"));
        assert!(paths.contains(&"/test/scanonlythis/test1"));
        assert!(paths.contains(&"/test/scanonlythis/test2/secret"));
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(lookup("/test").is_some());
        assert!(lookup("/test/").is_none());
        assert!(lookup("/TEST").is_none());
        assert!(lookup("/tes").is_none());
    }

    #[test]
    fn test_dead_links_absent_from_table() {
        // Linked from /secret and /404 fragments, intentionally missing.
        assert!(lookup("/secret2").is_none());
        assert!(lookup("/403").is_none());
    }

    #[test]
    fn test_home_links_only_to_test() {
        let fragment = lookup("/").unwrap();
        assert_eq!(hrefs(fragment), vec!["/test"]);
    }

    #[test]
    fn test_test_page_anchor_order() {
        let fragment = lookup("/test").unwrap();
        assert_eq!(
            hrefs(fragment),
            vec![
                "/secret",
                "/test.png",
                "test.png",
                "/x/test.png",
                "/test/scanonlythis/test1",
            ]
        );
    }

    #[test]
    fn test_chain_reaches_self_referential_page() {
        let test1 = lookup("/test/scanonlythis/test1").unwrap();
        assert!(hrefs(test1).contains(&"/test/scanonlythis/test2/secret"));

        let test2 = lookup("/test/scanonlythis/test2/secret").unwrap();
        // The page links back to itself, so a crawler must detect the cycle.
        assert!(hrefs(test2).contains(&"/test/scanonlythis/test2/secret"));
        assert!(hrefs(test2).contains(&"/"));
        assert!(hrefs(test2).contains(&"/secret"));
    }

    #[test]
    fn test_render_is_deterministic() {
        for (path, fragment) in PAGES {
            let first = render_page(fragment);
            let second = render_page(fragment);
            assert_eq!(first, second, "non-deterministic render for {path}");
        }
    }

    #[test]
    fn test_render_wraps_fragment_verbatim() {
        let doc = render_page("<p>hi</p>");
        assert_eq!(
            doc,
            "<html><head><title>Test</title></head><body><p>hi</p></body></html>"
        );
    }

    #[test]
    fn test_asset_paths() {
        assert!(is_asset_path("/test.png"));
        assert!(is_asset_path("x/test.png"));
        // The /test fragment links to /x/test.png, but only the relative
        // spelling is registered, so the absolute form is a dead link.
        assert!(!is_asset_path("/x/test.png"));
    }
}
