// src/crawl/node.rs
// =============================================================================
// The crawl result tree and the shared visited set.
//
// A CrawlNode mirrors how links were discovered: the root is the seed URL,
// its children are the links found on the seed page, and so on. On the wire
// (JSON) the children are called `links`, which is what the HTTP endpoint
// and `--json` output use.
// =============================================================================

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One URL in the crawl tree.
///
/// A node with `error` set never has children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlNode {
    pub url: String,
    #[serde(rename = "links", default)]
    pub children: Vec<CrawlNode>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl CrawlNode {
    /// A node with no children and no error: skipped, timed out, frontier,
    /// or a page without links.
    pub fn leaf(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            children: Vec::new(),
            error: None,
        }
    }

    /// A fetched page and the nodes for the links found on it.
    pub fn branch(url: impl Into<String>, children: Vec<CrawlNode>) -> Self {
        Self {
            url: url.into(),
            children,
            error: None,
        }
    }

    /// A page whose fetch failed. Always childless.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            children: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order walk over the whole tree, paired with each node's depth.
    pub fn walk(&self) -> Vec<(usize, &CrawlNode)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            // Reverse so the first child is popped first
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

// URLs already claimed by some branch of the current crawl.
//
// One VisitedSet is created per crawl and dropped with it. Sibling branches
// run concurrently and all share it by reference.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Check and insert under one lock, so two siblings racing for the same
    // URL cannot both win. Returns true for the caller that claimed it.
    pub fn try_claim(&self, url: &str) -> bool {
        let mut urls = self.urls.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.lock().len()
    }
}
