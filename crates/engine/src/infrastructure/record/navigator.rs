//! Node navigation over a character record.
//!
//! The pipeline only needs a handful of operations from the record tree:
//! tag names, ordered element children, text and inner markup. Everything
//! else (path selection, concatenated text) is built on top of those here so
//! any tree backend gets the same lookup semantics.

use std::collections::HashSet;

/// A node of a character record tree.
///
/// `children` must return element children in document order; several
/// sections rely on it.
pub trait RecordNode: Clone + PartialEq {
    /// Element tag name.
    fn tag_name(&self) -> &str;

    /// Identity of the node, unique within its document and increasing in
    /// document order.
    fn node_id(&self) -> usize;

    /// Element children, in document order.
    fn children(&self) -> Vec<Self>;

    /// All descendant text, concatenated, with entities resolved.
    fn text(&self) -> String;

    /// The source markup between the element's start and end tags, verbatim.
    fn inner_markup(&self) -> String;

    /// Select nodes by tag path.
    ///
    /// Path segments are whitespace separated tag names. Each segment matches
    /// any descendant of the previous matches; a `>` before a segment limits
    /// it to direct children (`"abilities > strength"`, `"> name"`). Results
    /// are in document order without duplicates. An empty path selects `self`.
    fn select(&self, path: &str) -> Vec<Self> {
        let mut current = vec![self.clone()];
        let mut children_only = false;

        for token in path_tokens(path) {
            if token == ">" {
                children_only = true;
                continue;
            }

            let mut next = Vec::new();
            if children_only {
                // Matches are distinct, so their children are too.
                for node in &current {
                    next.extend(
                        node.children()
                            .into_iter()
                            .filter(|child| child.tag_name() == token),
                    );
                }
                // Nested matches would otherwise list inner children last.
                if current.len() > 1 {
                    next.sort_by_key(Self::node_id);
                }
            } else {
                // A match nested inside an earlier one was already walked.
                let mut walked = HashSet::new();
                for node in &current {
                    if !walked.contains(&node.node_id()) {
                        collect_descendants(node, token, &mut walked, &mut next);
                    }
                }
            }
            current = next;
            children_only = false;
        }

        current
    }

    /// Concatenated text of every node matching `path`; empty when nothing matches.
    fn select_text(&self, path: &str) -> String {
        self.select(path).iter().map(RecordNode::text).collect()
    }

    /// Inner markup of the first node matching `path`; empty when nothing matches.
    fn select_markup(&self, path: &str) -> String {
        self.select(path)
            .first()
            .map(RecordNode::inner_markup)
            .unwrap_or_default()
    }

    /// Text of the direct children named `tag`.
    fn child_text(&self, tag: &str) -> String {
        self.select_text(&format!("> {tag}"))
    }

    /// Element children of every node matching `path`, in order.
    fn select_children(&self, path: &str) -> Vec<Self> {
        self.select(path)
            .iter()
            .flat_map(RecordNode::children)
            .collect()
    }
}

/// Split a path into tag names and `>` markers. `">name"` and `"a>b"` are
/// accepted as well as the spaced forms.
fn path_tokens(path: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in path.split_whitespace() {
        let mut rest = word;
        while let Some(index) = rest.find('>') {
            if index > 0 {
                tokens.push(&rest[..index]);
            }
            tokens.push(">");
            rest = &rest[index + 1..];
        }
        if !rest.is_empty() {
            tokens.push(rest);
        }
    }
    tokens
}

/// Pre-order walk so matches come out in document order. Every visited node
/// is recorded in `walked`.
fn collect_descendants<N: RecordNode>(
    node: &N,
    tag: &str,
    walked: &mut HashSet<usize>,
    out: &mut Vec<N>,
) {
    for child in node.children() {
        walked.insert(child.node_id());
        if child.tag_name() == tag {
            out.push(child.clone());
        }
        collect_descendants(&child, tag, walked, out);
    }
}
