// src/report.rs
// =============================================================================
// Turns a finished crawl tree into something a person (or a script) can read.
//
// Three shapes:
// - an indented tree, one URL per line, errors in parentheses
// - a flat list of every URL in the tree (handy for piping or copying)
// - a short summary with counts
//
// Everything here returns Strings; main.rs decides where they are printed.
// =============================================================================

use crate::crawl::CrawlNode;

// Counts over the whole tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrawlSummary {
    /// Every node, including repeats and frontier leaves
    pub nodes: usize,
    /// Nodes that have children of their own
    pub expanded: usize,
    /// Nodes whose fetch failed
    pub errors: usize,
}

impl CrawlSummary {
    pub fn of(tree: &CrawlNode) -> Self {
        tree.walk()
            .into_iter()
            .fold(Self::default(), |mut summary, (_, node)| {
                summary.nodes += 1;
                if !node.is_leaf() {
                    summary.expanded += 1;
                }
                if node.error.is_some() {
                    summary.errors += 1;
                }
                summary
            })
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

// Renders the tree with two spaces of indentation per level
//
// Example:
//   https://example.com/
//     https://example.com/a
//     https://example.com/b  (HTTP 404)
pub fn render_tree(tree: &CrawlNode) -> String {
    let mut out = String::new();
    for (depth, node) in tree.walk() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.url);
        if let Some(error) = &node.error {
            out.push_str(&format!("  ({})", error));
        }
        out.push('\n');
    }
    out
}

// Every URL in the tree, pre-order, one per line
pub fn flatten_urls(tree: &CrawlNode) -> String {
    tree.walk()
        .into_iter()
        .map(|(_, node)| node.url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_summary(summary: &CrawlSummary) -> String {
    format!(
        "📊 Summary:\n   🔗 Nodes: {}\n   📄 Pages with links: {}\n   ❌ Errors: {}",
        summary.nodes, summary.expanded, summary.errors
    )
}
