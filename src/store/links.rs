//! links.rs
//! Name-to-index linking of declared dependencies.
//! Dense layout: CSR parents plus a linked list of children per entry.

use super::error::{RegistryError, RegistryResult};
use super::types::EntryId;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyLinks {
    // Dense Topology (dependencies in declared order)
    pub parents_flat: Vec<EntryId>,
    pub parents_ranges: Vec<(u32, u32)>,

    // Adjacency List (dependents)
    pub first_child: Vec<u32>,
    pub child_targets: Vec<EntryId>,
    pub next_child: Vec<u32>,
}

impl DependencyLinks {
    /// Resolves every dependency name to an entry id.
    ///
    /// Fails on the first name (in declaration order) that is not in `index`.
    pub fn build(
        names: &[String],
        depends_on: &[SmallVec<[String; 4]>],
        index: &HashMap<String, EntryId>,
    ) -> RegistryResult<Self> {
        let count = names.len();
        let mut links = Self {
            parents_flat: Vec::with_capacity(depends_on.iter().map(|d| d.len()).sum()),
            parents_ranges: Vec::with_capacity(count),
            first_child: vec![u32::MAX; count],
            child_targets: Vec::new(),
            next_child: Vec::new(),
        };

        for (i, deps) in depends_on.iter().enumerate() {
            let id = EntryId::new(i);
            let start = links.parents_flat.len() as u32;

            for dep in deps {
                let parent = *index.get(dep).ok_or_else(|| RegistryError::UnknownDependency {
                    constant: names[i].clone(),
                    dependency: dep.clone(),
                })?;
                links.parents_flat.push(parent);
                links.push_child(parent, id);
            }

            links.parents_ranges.push((start, deps.len() as u32));
        }

        Ok(links)
    }

    fn push_child(&mut self, parent: EntryId, child: EntryId) {
        let p_idx = parent.index();
        let head = self.first_child[p_idx];
        let new_edge = self.child_targets.len() as u32;
        self.child_targets.push(child);
        self.next_child.push(head);
        self.first_child[p_idx] = new_edge;
    }

    pub fn count(&self) -> usize { self.parents_ranges.len() }

    #[inline(always)]
    pub fn get_parents(&self, id: EntryId) -> &[EntryId] {
        let (start, count) = self.parents_ranges[id.index()];
        &self.parents_flat[start as usize..(start + count) as usize]
    }

    /// Direct dependents of `id`, most recently linked first.
    pub fn children(&self, id: EntryId) -> Children<'_> {
        Children { links: self, edge: self.first_child[id.index()] }
    }
}

pub struct Children<'a> {
    links: &'a DependencyLinks,
    edge: u32,
}

impl Iterator for Children<'_> {
    type Item = EntryId;

    fn next(&mut self) -> Option<EntryId> {
        if self.edge == u32::MAX {
            return None;
        }
        let child = self.links.child_targets[self.edge as usize];
        self.edge = self.links.next_child[self.edge as usize];
        Some(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn index_of(names: &[String]) -> HashMap<String, EntryId> {
        names.iter().enumerate().map(|(i, n)| (n.clone(), EntryId::new(i))).collect()
    }

    #[test]
    fn test_links_parents_and_children() {
        let names: Vec<String> = vec!["h".into(), "e".into(), "G0".into(), "R".into()];
        let deps: Vec<SmallVec<[String; 4]>> = vec![
            smallvec![],
            smallvec![],
            smallvec!["e".into(), "h".into()],
            smallvec!["G0".into()],
        ];
        let links = DependencyLinks::build(&names, &deps, &index_of(&names)).unwrap();

        assert_eq!(links.get_parents(EntryId(2)), &[EntryId(1), EntryId(0)]);
        assert_eq!(links.get_parents(EntryId(0)), &[] as &[EntryId]);
        assert_eq!(links.children(EntryId(0)).collect::<Vec<_>>(), vec![EntryId(2)]);
        assert_eq!(links.children(EntryId(2)).collect::<Vec<_>>(), vec![EntryId(3)]);
        assert_eq!(links.children(EntryId(3)).count(), 0);
    }

    #[test]
    fn test_forward_reference_is_linked() {
        let names: Vec<String> = vec!["A".into(), "B".into()];
        let deps: Vec<SmallVec<[String; 4]>> = vec![smallvec!["B".into()], smallvec![]];
        let links = DependencyLinks::build(&names, &deps, &index_of(&names)).unwrap();
        assert_eq!(links.get_parents(EntryId(0)), &[EntryId(1)]);
    }

    #[test]
    fn test_missing_dependency_is_reported() {
        let names: Vec<String> = vec!["A".into()];
        let deps: Vec<SmallVec<[String; 4]>> = vec![smallvec!["Ghost".into()]];
        let err = DependencyLinks::build(&names, &deps, &index_of(&names)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownDependency { constant: "A".into(), dependency: "Ghost".into() }
        );
    }
}
