//! Ordered course catalog backed by an arena-based binary search tree.
//!
//! Nodes are keyed by the raw course number; ties (duplicate numbers) are
//! routed into the right subtree, so duplicates are kept as distinct nodes.
//! The tree is unbalanced: its shape is purely a function of insertion order
//! and may degenerate to a list under sorted input.

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::course::Course;

/// Tree node owning exactly one course and optional child links.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    left: Option<Index>,
    right: Option<Index>,
}

/// Arena-backed binary search tree of courses.
///
/// Insertion orders on the literal course number while search normalizes
/// both sides to uppercase. With uniformly cased numbers in the source file
/// search is an exact case-insensitive lookup; storing mixed-case variants
/// of the same number can make the normalized descent miss a node that the
/// raw ordering placed elsewhere. This mirrors the historical behavior of
/// the catalog and is documented rather than papered over.
#[derive(Debug)]
pub struct Catalog {
    arena: Arena<CourseNode>,
    root: Option<Index>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of stored courses (duplicates counted).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Insert a course, descending on raw lexicographic comparison.
    ///
    /// Current node greater than the candidate goes left, everything else
    /// (including an equal number) goes right. Always succeeds.
    #[instrument(level = "trace", skip(self, course), fields(number = %course.number))]
    pub fn insert(&mut self, course: Course) {
        let node = CourseNode {
            course,
            left: None,
            right: None,
        };

        let Some(root) = self.root else {
            self.root = Some(self.arena.insert(node));
            return;
        };

        let mut current = root;
        loop {
            let go_left = self.arena[current].course.number > node.course.number;
            let child = if go_left {
                self.arena[current].left
            } else {
                self.arena[current].right
            };
            match child {
                Some(next) => current = next,
                None => {
                    let idx = self.arena.insert(node);
                    if go_left {
                        self.arena[current].left = Some(idx);
                    } else {
                        self.arena[current].right = Some(idx);
                    }
                    return;
                }
            }
        }
    }

    /// Case-insensitive lookup by course number.
    ///
    /// Returns the first match encountered on the descent path, or `None`
    /// when the descent reaches an absent child. Not finding a course is
    /// not an error.
    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, number: &str) -> Option<&Course> {
        let query = number.to_uppercase();
        let mut current = self.root;

        while let Some(idx) = current {
            let node = &self.arena[idx];
            let stored = node.course.number.to_uppercase();
            if stored == query {
                return Some(&node.course);
            }
            current = if stored > query { node.left } else { node.right };
        }
        None
    }

    /// Lazy in-order iterator over all stored courses.
    ///
    /// Yields courses in ascending raw-lexicographic number order. The
    /// iterator borrows the catalog; calling `iter_inorder` again restarts
    /// the traversal.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_inorder(&self) -> InOrderIterator {
        InOrderIterator::new(self)
    }

    /// Visit every course in order with a caller-supplied visitor.
    pub fn for_each_inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&Course),
    {
        for course in self.iter_inorder() {
            visit(course);
        }
    }

    /// Render the tree shape for display, one labelled node per line.
    #[instrument(level = "debug", skip(self))]
    pub fn render_tree(&self) -> Option<Tree<String>> {
        self.root.map(|root| self.build_display_tree(root, "root"))
    }

    fn build_display_tree(&self, idx: Index, side: &str) -> Tree<String> {
        let node = &self.arena[idx];
        let mut tree = Tree::new(format!("{} ({})", node.course.number, side));
        if let Some(left) = node.left {
            tree.push(self.build_display_tree(left, "left"));
        }
        if let Some(right) = node.right {
            tree.push(self.build_display_tree(right, "right"));
        }
        tree
    }
}

pub struct InOrderIterator<'a> {
    catalog: &'a Catalog,
    // (node, expanded): expanded nodes have had their left subtree pushed
    stack: Vec<(Index, bool)>,
}

impl<'a> InOrderIterator<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = catalog.root {
            stack.push((root, false));
        }
        Self { catalog, stack }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, expanded)) = self.stack.pop() {
            let node = &self.catalog.arena[current_idx];
            if !expanded {
                if let Some(right) = node.right {
                    self.stack.push((right, false));
                }
                self.stack.push((current_idx, true));
                if let Some(left) = node.left {
                    self.stack.push((left, false));
                }
            } else {
                return Some(&node.course);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str) -> Course {
        Course::new(number, format!("Title {number}"), vec![])
    }

    #[test]
    fn insert_routes_duplicates_right_and_keeps_them() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI200"));
        catalog.insert(course("CSCI200"));
        catalog.insert(course("CSCI100"));

        assert_eq!(catalog.len(), 3);
        let numbers: Vec<_> = catalog.iter_inorder().map(|c| c.number.clone()).collect();
        assert_eq!(numbers, ["CSCI100", "CSCI200", "CSCI200"]);
    }

    #[test]
    fn search_is_case_insensitive_for_uniformly_cased_keys() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI200"));
        catalog.insert(course("MATH201"));

        let found = catalog.search("csci200").expect("should find course");
        assert_eq!(found.number, "CSCI200");
        assert_eq!(found.title, "Title CSCI200");
        assert!(catalog.search("CSCI999").is_none());
    }

    #[test]
    fn traversal_restarts_cleanly() {
        let mut catalog = Catalog::new();
        catalog.insert(course("B"));
        catalog.insert(course("A"));

        assert_eq!(catalog.iter_inorder().count(), 2);
        assert_eq!(catalog.iter_inorder().count(), 2);
    }
}
