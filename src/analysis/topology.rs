use crate::store::{DependencyLinks, EntryId};
use std::collections::VecDeque;

/// The entries forming a dependency cycle, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle(pub Vec<EntryId>);

/// Performs a Topological Sort using Depth-First Search (DFS).
///
/// Returns a list of EntryIds where every dependency appears before its consumer.
///
/// The order is the DFS post-order obtained by starting from each entry in
/// declaration order and descending into dependencies in their declared order.
/// Entries unrelated to each other keep declaration order, but an entry pulled in
/// as a dependency is emitted before every later root: with `X(Z)`, `Y(B)`, `Z(B)`
/// the order is `B, Z, X, Y`, not the "earliest ready first" order `B, Y, Z, X`.
pub fn sort(links: &DependencyLinks) -> Result<Vec<EntryId>, Cycle> {
    let count = links.count();
    let mut order = Vec::with_capacity(count);
    let mut state = vec![VisitState::None; count];
    let mut path = Vec::new();

    // Edges point Dependent -> Dependency; post-order puts dependencies first.
    for i in 0..count {
        if state[i] == VisitState::None {
            visit(EntryId::new(i), links, &mut state, &mut path, &mut order)?;
        }
    }

    Ok(order)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    None,
    Visiting, // on the current DFS path
    Visited,
}

fn visit(
    node: EntryId,
    links: &DependencyLinks,
    state: &mut [VisitState],
    path: &mut Vec<EntryId>,
    order: &mut Vec<EntryId>,
) -> Result<(), Cycle> {
    let idx = node.index();

    match state[idx] {
        VisitState::Visited => return Ok(()),
        VisitState::Visiting => {
            // The cycle is the tail of the current path starting at `node`.
            let start = path.iter().position(|&n| n == node).unwrap_or(0);
            return Err(Cycle(path[start..].to_vec()));
        }
        VisitState::None => state[idx] = VisitState::Visiting,
    }

    path.push(node);
    for &parent in links.get_parents(node) {
        visit(parent, links, state, path, order)?;
    }
    path.pop();

    state[idx] = VisitState::Visited;
    order.push(node);
    Ok(())
}

/// Every entry reachable downstream (dependents, transitively), excluding the start.
/// Sorted by id, i.e. declaration order.
pub fn downstream_from(links: &DependencyLinks, start: EntryId) -> Vec<EntryId> {
    let mut visited = vec![false; links.count()];
    let mut queue: VecDeque<EntryId> = links.children(start).collect();

    while let Some(node) = queue.pop_front() {
        if !visited[node.index()] {
            visited[node.index()] = true;
            queue.extend(links.children(node));
        }
    }
    collect_marked(&visited, start)
}

/// Every entry reachable upstream (dependencies, transitively), excluding the start.
pub fn upstream_from(links: &DependencyLinks, start: EntryId) -> Vec<EntryId> {
    let mut visited = vec![false; links.count()];
    let mut queue: VecDeque<EntryId> = links.get_parents(start).iter().copied().collect();

    while let Some(node) = queue.pop_front() {
        if !visited[node.index()] {
            visited[node.index()] = true;
            queue.extend(links.get_parents(node).iter().copied());
        }
    }
    collect_marked(&visited, start)
}

fn collect_marked(visited: &[bool], exclude: EntryId) -> Vec<EntryId> {
    visited
        .iter()
        .enumerate()
        .filter(|&(i, &seen)| seen && i != exclude.index())
        .map(|(i, _)| EntryId::new(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;
    use std::collections::HashMap;

    /// Builds links from `(name, deps)` pairs.
    fn make_links(entries: &[(&str, &[&str])]) -> DependencyLinks {
        let names: Vec<String> = entries.iter().map(|(n, _)| n.to_string()).collect();
        let deps: Vec<SmallVec<[String; 4]>> = entries
            .iter()
            .map(|(_, d)| d.iter().map(|s| s.to_string()).collect())
            .collect();
        let index: HashMap<String, EntryId> =
            names.iter().enumerate().map(|(i, n)| (n.clone(), EntryId::new(i))).collect();
        DependencyLinks::build(&names, &deps, &index).expect("links")
    }

    #[test]
    fn test_sort_diamond_dependency() {
        // Shape: A -> B, A -> C, B+C -> D
        let links = make_links(&[("A", &[]), ("B", &["A"]), ("C", &["A"]), ("D", &["B", "C"])]);
        let res = sort(&links).expect("Sort failed");
        assert_eq!(res, vec![EntryId(0), EntryId(1), EntryId(2), EntryId(3)]);
    }

    #[test]
    fn test_sort_puts_forward_dependencies_first() {
        // D is declared first but depends on later entries.
        let links = make_links(&[("D", &["B", "C"]), ("B", &["A"]), ("C", &[]), ("A", &[])]);
        let res = sort(&links).expect("Sort failed");
        let pos = |id: u32| res.iter().position(|&x| x == EntryId(id)).unwrap();
        assert!(pos(3) < pos(1));
        assert!(pos(1) < pos(0));
        assert!(pos(2) < pos(0));
        assert_eq!(res.len(), 4);
    }

    #[test]
    fn test_independent_entries_keep_declaration_order() {
        let links = make_links(&[("X", &[]), ("P", &["X"]), ("Q", &["X"]), ("R", &["X"])]);
        assert_eq!(sort(&links).unwrap(), vec![EntryId(0), EntryId(1), EntryId(2), EntryId(3)]);
    }

    #[test]
    fn test_dependency_is_emitted_before_later_roots() {
        // B is declared last; Z is reached through X before the root Y.
        let links = make_links(&[("X", &["Z"]), ("Y", &["B"]), ("Z", &["B"]), ("B", &[])]);
        assert_eq!(sort(&links).unwrap(), vec![EntryId(3), EntryId(2), EntryId(0), EntryId(1)]);
    }

    #[test]
    fn test_cycle_detection_two_nodes() {
        let links = make_links(&[("A", &["B"]), ("B", &["A"])]);
        let Cycle(path) = sort(&links).unwrap_err();
        assert_eq!(path, vec![EntryId(0), EntryId(1)]);
    }

    #[test]
    fn test_cycle_path_excludes_acyclic_prefix() {
        // Root -> A -> B -> C -> A
        let links = make_links(&[("Root", &["A"]), ("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
        let Cycle(path) = sort(&links).unwrap_err();
        assert_eq!(path, vec![EntryId(1), EntryId(2), EntryId(3)]);
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let links = make_links(&[("A", &["A"])]);
        assert_eq!(sort(&links).unwrap_err(), Cycle(vec![EntryId(0)]));
    }

    #[test]
    fn test_upstream_and_downstream() {
        let links = make_links(&[("A", &[]), ("B", &["A"]), ("C", &["B"]), ("D", &[])]);
        assert_eq!(upstream_from(&links, EntryId(2)), vec![EntryId(0), EntryId(1)]);
        assert_eq!(downstream_from(&links, EntryId(0)), vec![EntryId(1), EntryId(2)]);
        assert!(downstream_from(&links, EntryId(3)).is_empty());
        assert!(upstream_from(&links, EntryId(0)).is_empty());
    }
}
