use std::collections::HashMap;
use std::hash::Hash;

/// Parent index of a root node.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node<S> {
    state: S,
    parent: usize,
}

/// Deduplication set keyed by canonical state key, with one parent link
/// per recorded state.
///
/// Nodes live in an arena and refer to their parent by index. The first
/// insertion of a key fixes its node for the rest of the search; later
/// arrivals never overwrite it.
pub(crate) struct Visited<K, S> {
    index: HashMap<K, usize>,
    nodes: Vec<Node<S>>,
}

impl<K: Eq + Hash, S: Clone> Visited<K, S> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Record `state` under `key` with the given parent and return its node
    /// index. If the key is already present the existing index is returned
    /// and nothing changes.
    pub(crate) fn insert(&mut self, key: K, state: S, parent: usize) -> usize {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node { state, parent });
        self.index.insert(key, idx);
        idx
    }

    #[inline]
    pub(crate) fn state(&self, idx: usize) -> &S {
        &self.nodes[idx].state
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Follow parent links from `idx` back to the root and return the
    /// states root-first.
    pub(crate) fn path(&self, idx: usize) -> Vec<S> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            let node = &self.nodes[ci];
            path.push(node.state.clone());
            ci = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let mut v: Visited<&str, &str> = Visited::new();
        let root = v.insert("a", "a", NO_PARENT);
        let b = v.insert("b", "b-first", root);
        let again = v.insert("b", "b-second", NO_PARENT);
        assert_eq!(b, again);
        assert_eq!(*v.state(b), "b-first");
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn path_is_root_first() {
        let mut v = Visited::new();
        let a = v.insert(1, 'a', NO_PARENT);
        let b = v.insert(2, 'b', a);
        let c = v.insert(3, 'c', b);
        assert_eq!(v.path(c), vec!['a', 'b', 'c']);
        assert_eq!(v.path(a), vec!['a']);
        assert!(v.contains(&2));
        assert!(!v.contains(&4));
    }
}
