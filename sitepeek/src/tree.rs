use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Directory-like view of resource paths: segment -> file URL or sub-tree.
pub type PathTree = BTreeMap<String, PathNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathNode {
    File(String),
    Dir(PathTree),
}

/// Build a [`PathTree`] from absolute URLs.
///
/// URLs with an empty path or that fail to parse are skipped. When two URLs
/// disagree about whether a segment is a file or a directory, the later one
/// wins.
pub fn build_tree<I, S>(urls: I) -> PathTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = PathTree::new();

    for raw in urls {
        let raw = raw.as_ref();
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                debug!("Leaving {} out of the tree: {}", raw, e);
                continue;
            }
        };

        let path = url.path().trim_matches('/');
        if path.is_empty() {
            continue;
        }

        let segments: Vec<&str> = path.split('/').collect();
        if let Some((file, dirs)) = segments.split_last() {
            insert(&mut root, dirs, file, raw);
        }
    }

    root
}

fn insert(node: &mut PathTree, dirs: &[&str], file: &str, url: &str) {
    match dirs.split_first() {
        None => {
            node.insert(file.to_string(), PathNode::File(url.to_string()));
        }
        Some((dir, rest)) => {
            let child = node
                .entry(dir.to_string())
                .or_insert_with(|| PathNode::Dir(PathTree::new()));
            if let PathNode::File(_) = child {
                *child = PathNode::Dir(PathTree::new());
            }
            if let PathNode::Dir(subtree) = child {
                insert(subtree, rest, file, url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_groups_by_directory() {
        let tree = build_tree([
            "https://x.com/css/a.css",
            "https://x.com/css/b.css",
            "https://x.com/img/c.png",
        ]);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "css": {
                    "a.css": "https://x.com/css/a.css",
                    "b.css": "https://x.com/css/b.css"
                },
                "img": { "c.png": "https://x.com/img/c.png" }
            })
        );
    }

    #[test]
    fn test_skips_root_and_unparseable() {
        let tree = build_tree(["https://x.com/", "https://x.com", "not a url", "https://x.com/a.js"]);
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.get("a.js"),
            Some(&PathNode::File("https://x.com/a.js".to_string()))
        );
    }

    #[test]
    fn test_trailing_slash_and_query_ignored_in_path() {
        let tree = build_tree(["https://x.com/docs/guide/?v=1"]);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({ "docs": { "guide": "https://x.com/docs/guide/?v=1" } })
        );
    }

    #[test]
    fn test_later_directory_replaces_leaf() {
        let tree = build_tree(["https://x.com/assets", "https://x.com/assets/app.js"]);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({ "assets": { "app.js": "https://x.com/assets/app.js" } })
        );
    }

    #[test]
    fn test_later_leaf_replaces_directory() {
        let tree = build_tree(["https://x.com/assets/app.js", "https://x.com/assets"]);
        assert_eq!(
            tree.get("assets"),
            Some(&PathNode::File("https://x.com/assets".to_string()))
        );
    }
}
