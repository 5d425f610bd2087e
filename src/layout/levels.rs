//! Level assignment — breadth-first from the first root.
//!
//! A node reachable along paths of different lengths lands on the level of
//! the shortest one; this is not a longest-path layering.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use tracing::debug;

use super::graph::GraphIR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelAssignment {
    /// The node the traversal started from. None for an empty graph.
    pub root: Option<String>,
    /// Exactly one level per declared node.
    pub levels: HashMap<String, usize>,
    /// (parent, child) for every node first reached from `parent`.
    pub tree_edges: Vec<(String, String)>,
}

impl LevelAssignment {
    pub fn assign(gir: &GraphIR) -> Self {
        let mut levels: HashMap<String, usize> = HashMap::new();
        let mut tree_edges: Vec<(String, String)> = Vec::new();

        let root = gir.roots().first().map(|r| r.to_string());

        if let Some(root_id) = &root {
            let mut visited: HashSet<&str> = HashSet::new();
            let mut queue: VecDeque<&str> = VecDeque::new();
            visited.insert(root_id);
            levels.insert(root_id.clone(), 0);
            queue.push_back(root_id);

            while let Some(current) = queue.pop_front() {
                let level = levels[current];
                for child in gir.successors(current) {
                    if visited.insert(child) {
                        levels.insert(child.to_string(), level + 1);
                        tree_edges.push((current.to_string(), child.to_string()));
                        queue.push_back(child);
                    }
                }
            }
        }

        let reached = levels.len();
        for id in gir.node_index.keys() {
            levels.entry(id.clone()).or_insert(0);
        }
        debug!(
            root = root.as_deref().unwrap_or(""),
            reached,
            unreached = levels.len() - reached,
            "assigned levels"
        );

        Self {
            root,
            levels,
            tree_edges,
        }
    }

    pub fn level(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    /// Number of distinct levels (0 for an empty graph).
    pub fn level_count(&self) -> usize {
        self.levels.values().max().map_or(0, |max| max + 1)
    }

    /// Node ids grouped by level, each group sorted lexically.
    pub fn groups(&self) -> BTreeMap<usize, Vec<String>> {
        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for (id, &level) in &self.levels {
            groups.entry(level).or_default().push(id.clone());
        }
        for ids in groups.values_mut() {
            ids.sort_unstable();
        }
        groups
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_levels.rs"]
mod tests;
