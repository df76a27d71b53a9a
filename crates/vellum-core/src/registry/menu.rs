use serde::Serialize;
use std::collections::BTreeMap;
use vellum_schema::node::MenuDef;

///
/// MenuEntry
///
/// One compiled navigation node. Parent and action links are resolved
/// (or rejected) by the registry build before any entry lands here.
///

#[derive(Clone, Debug, Serialize)]
pub struct MenuEntry {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
    pub action: Option<String>,
    pub sequence: u32,

    /// Position in the source document; the tie-break for equal sequences.
    pub declaration_order: usize,
}

impl MenuEntry {
    pub(crate) fn compile(def: &MenuDef, declaration_order: usize) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            parent: def.parent.clone(),
            action: def.action.clone(),
            sequence: def.sequence,
            declaration_order,
        }
    }
}

///
/// MenuTree
///
/// Navigation forest with `(sequence, declaration_order)` sibling
/// ordering. Acyclic by construction: the build rejects cycles before a
/// tree is ever assembled.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
    by_id: BTreeMap<String, usize>,
}

impl MenuTree {
    pub(crate) fn push(&mut self, entry: MenuEntry) {
        self.by_id.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter()
    }

    /// Parentless entries, sequence-ordered.
    #[must_use]
    pub fn roots(&self) -> Vec<&MenuEntry> {
        self.ordered(|e| e.parent.is_none())
    }

    /// Direct children of `id`, ordered by `(sequence, declaration_order)`.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&MenuEntry> {
        self.ordered(|e| e.parent.as_deref() == Some(id))
    }

    /// Lazy `(depth, entry)` walk: roots first, each subtree fully emitted
    /// before the next sibling, siblings in sequence order. Restartable by
    /// calling `traverse` again.
    #[must_use]
    pub fn traverse(&self) -> Traverse<'_> {
        let mut stack: Vec<(usize, &MenuEntry)> =
            self.roots().into_iter().map(|e| (0, e)).collect();
        stack.reverse();

        Traverse { tree: self, stack }
    }

    // Entries are stored in declaration order, so a stable sort on
    // sequence alone yields the two-key order.
    fn ordered(&self, pred: impl Fn(&MenuEntry) -> bool) -> Vec<&MenuEntry> {
        let mut picked: Vec<&MenuEntry> = self.entries.iter().filter(|e| pred(e)).collect();
        picked.sort_by_key(|e| e.sequence);

        picked
    }
}

///
/// Traverse
///
/// Depth-first menu walk. Holds only a stack of borrowed entries; each
/// call to `MenuTree::traverse` starts a fresh walk.
///

pub struct Traverse<'a> {
    tree: &'a MenuTree,
    stack: Vec<(usize, &'a MenuEntry)>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (usize, &'a MenuEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;

        let children = self.tree.children_of(&entry.id);
        for child in children.into_iter().rev() {
            self.stack.push((depth + 1, child));
        }

        Some((depth, entry))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, parent: Option<&str>, sequence: u32, order: usize) -> MenuEntry {
        MenuEntry {
            id: id.to_string(),
            name: id.to_string(),
            parent: parent.map(str::to_string),
            action: None,
            sequence,
            declaration_order: order,
        }
    }

    fn sample() -> MenuTree {
        let mut tree = MenuTree::default();
        tree.push(entry("root", None, 0, 0));
        tree.push(entry("net", Some("root"), 99, 1));
        tree.push(entry("mi1", Some("root"), 10, 2));
        tree.push(entry("leaf", Some("net"), 5, 3));
        tree
    }

    #[test]
    fn children_order_by_sequence_first() {
        let tree = sample();
        let ids: Vec<&str> = tree
            .children_of("root")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["mi1", "net"]);
    }

    #[test]
    fn equal_sequences_fall_back_to_declaration_order() {
        let mut tree = MenuTree::default();
        tree.push(entry("root", None, 0, 0));
        tree.push(entry("b", Some("root"), 99, 1));
        tree.push(entry("a", Some("root"), 99, 2));

        let ids: Vec<&str> = tree
            .children_of("root")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"], "insertion order breaks the tie");
    }

    #[test]
    fn traverse_is_depth_first_and_sequence_ordered() {
        let tree = sample();
        let walk: Vec<(usize, &str)> = tree
            .traverse()
            .map(|(depth, e)| (depth, e.id.as_str()))
            .collect();

        assert_eq!(
            walk,
            vec![(0, "root"), (1, "mi1"), (1, "net"), (2, "leaf")]
        );
    }

    #[test]
    fn traverse_restarts_from_scratch() {
        let tree = sample();
        let first: Vec<&str> = tree.traverse().map(|(_, e)| e.id.as_str()).collect();
        let second: Vec<&str> = tree.traverse().map(|(_, e)| e.id.as_str()).collect();
        assert_eq!(first, second);
    }
}
