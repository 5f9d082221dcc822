//! Modifier tests: inserting, replacing, merging and erasing.

use gdwg::{EdgeCursor, Graph, GraphError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn four_edges() -> Graph<i32, i32> {
    let mut g = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &2, 5).unwrap();
    g.insert_edge(&1, &2, 3).unwrap();
    g.insert_edge(&1, &3, 2).unwrap();
    g.insert_edge(&1, &1, 2).unwrap();
    g
}

fn triples(g: &Graph<i32, i32>) -> Vec<(i32, i32, i32)> {
    g.iter().map(|t| t.into_tuple()).collect()
}

// ==================== Insert Tests ====================

#[test]
fn test_insert_node() {
    let mut g: Graph<i32, i32> = Graph::new();
    assert!(g.insert_node(1));
    assert!(g.insert_node(2));
    assert!(g.insert_node(3));
    assert!(!g.insert_node(1));
    assert!(!g.insert_node(3));
    assert!(g.is_node(&1));
    assert_eq!(g.node_count(), 3);
}

#[test]
fn test_insert_edge() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    assert!(g.insert_edge(&1, &1, 2).unwrap());
    assert!(g.insert_edge(&1, &2, 3).unwrap());
    assert!(g.insert_edge(&1, &2, 4).unwrap());
    assert!(g.insert_edge(&2, &3, 5).unwrap());

    assert!(!g.insert_edge(&1, &1, 2).unwrap());
    assert!(!g.insert_edge(&2, &3, 5).unwrap());
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn test_insert_edge_missing_node_leaves_graph_unchanged() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 3).unwrap();
    let before = g.clone();

    for (src, dst) in [(10, 2), (1, 20), (10, 11), (1, 3)] {
        let err = g.insert_edge(&src, &dst, 3).unwrap_err();
        assert_eq!(err, GraphError::InsertEdgeMissingNode);
        assert_eq!(
            err.to_string(),
            "Cannot call Graph::insert_edge when either src or dst node does not exist"
        );
    }

    assert_eq!(g, before);
    assert!(!g.is_node(&3));
    assert_eq!(g.weights(&1, &2).unwrap(), vec![3]);
}

// ==================== Replace Tests ====================

#[test]
fn test_replace_node_missing_old() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 3).unwrap();

    assert_eq!(g.replace_node(&4, 2), Err(GraphError::ReplaceMissingNode));
    assert_eq!(
        g.replace_node(&5, 6).unwrap_err().to_string(),
        "Cannot call Graph::replace_node on a node that doesn't exist"
    );
}

#[test]
fn test_replace_node_onto_existing_is_refused() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 3).unwrap();
    let before = g.clone();

    assert_eq!(g.replace_node(&1, 2), Ok(false));
    assert_eq!(g, before);
}

#[test]
fn test_replace_node_keeps_edges() {
    init_logger();
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &1, 2).unwrap();
    g.insert_edge(&1, &2, 3).unwrap();
    g.insert_edge(&1, &2, 4).unwrap();
    g.insert_edge(&1, &3, 4).unwrap();
    g.insert_edge(&2, &3, 5).unwrap();
    g.insert_edge(&3, &1, 6).unwrap();

    assert_eq!(g.replace_node(&1, 10), Ok(true));

    assert!(!g.is_node(&1));
    assert!(g.is_node(&10));
    assert_eq!(g.weights(&10, &10).unwrap(), vec![2]);
    assert_eq!(g.weights(&10, &2).unwrap(), vec![3, 4]);
    assert_eq!(g.weights(&10, &3).unwrap(), vec![4]);
    assert_eq!(g.weights(&3, &10).unwrap(), vec![6]);
    assert_eq!(g.weights(&2, &3).unwrap(), vec![5]);
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn test_replace_node_reorders_edges() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 1).unwrap();
    g.insert_edge(&2, &2, 1).unwrap();

    g.replace_node(&1, 3).unwrap();
    assert_eq!(triples(&g), vec![(2, 2, 1), (3, 2, 1)]);
}

// ==================== Merge Tests ====================

#[test]
fn test_merge_missing_nodes() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 3).unwrap();
    let before = g.clone();

    for (old, new) in [(4, 2), (5, 6), (1, 6)] {
        assert_eq!(
            g.merge_replace_node(&old, &new),
            Err(GraphError::MergeReplaceMissingNode)
        );
    }
    assert_eq!(
        g.merge_replace_node(&1, &6).unwrap_err().to_string(),
        "Cannot call Graph::merge_replace_node on old or new data if they don't exist in the graph"
    );
    assert_eq!(g, before);
}

#[test]
fn test_merge_without_duplicates() {
    init_logger();
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3, 4]);
    g.insert_edge(&1, &2, 1).unwrap();
    g.insert_edge(&1, &3, 2).unwrap();
    g.insert_edge(&1, &4, 3).unwrap();

    g.merge_replace_node(&1, &2).unwrap();

    assert!(!g.is_node(&1));
    assert_eq!(g.weights(&2, &2).unwrap(), vec![1]);
    assert_eq!(g.weights(&2, &3).unwrap(), vec![2]);
    assert_eq!(g.weights(&2, &4).unwrap(), vec![3]);
}

#[test]
fn test_merge_collapses_duplicates() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3, 4]);
    g.insert_edge(&1, &2, 1).unwrap();
    g.insert_edge(&1, &3, 2).unwrap();
    g.insert_edge(&1, &4, 3).unwrap();
    g.insert_edge(&2, &2, 1).unwrap();

    g.merge_replace_node(&1, &2).unwrap();

    assert!(!g.is_node(&1));
    assert_eq!(g.weights(&2, &2).unwrap(), vec![1]);
    assert_eq!(g.weights(&2, &3).unwrap(), vec![2]);
    assert_eq!(g.weights(&2, &4).unwrap(), vec![3]);
    assert_eq!(g.to_string(), "2 (\n  2 | 1\n  3 | 2\n  4 | 3\n)\n3 (\n)\n4 (\n)\n");
}

#[test]
fn test_merge_incoming_and_self_loops() {
    let mut g: Graph<char, i32> = Graph::from(['a', 'b', 'c']);
    g.insert_edge(&'a', &'a', 1).unwrap();
    g.insert_edge(&'a', &'b', 1).unwrap();
    g.insert_edge(&'b', &'a', 1).unwrap();
    g.insert_edge(&'c', &'a', 2).unwrap();
    g.insert_edge(&'b', &'b', 1).unwrap();

    g.merge_replace_node(&'a', &'b').unwrap();

    let edges: Vec<_> = g.iter().map(|t| t.into_tuple()).collect();
    // a->a, a->b, b->a and b->b all become b->b weight 1
    assert_eq!(edges, vec![('b', 'b', 1), ('c', 'b', 2)]);
    assert_eq!(g.nodes(), vec!['b', 'c']);
}

#[test]
fn test_merge_into_itself_is_noop() {
    let mut g = four_edges();
    let before = g.clone();
    g.merge_replace_node(&1, &1).unwrap();
    assert_eq!(g, before);
}

#[test]
fn test_merge_leaves_other_edges() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3, 4]);
    g.insert_edge(&3, &4, 9).unwrap();
    g.insert_edge(&1, &3, 1).unwrap();

    g.merge_replace_node(&1, &2).unwrap();
    assert_eq!(triples(&g), vec![(2, 3, 1), (3, 4, 9)]);
}

// ==================== Erase Node Tests ====================

#[test]
fn test_erase_node_simple() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    assert!(!g.erase_node(&4));
    assert!(g.erase_node(&3));
    assert!(!g.is_node(&3));
    assert!(!g.erase_node(&3));
}

#[test]
fn test_erase_node_cascades() {
    init_logger();
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &1, 2).unwrap();
    g.insert_edge(&1, &2, 3).unwrap();
    g.insert_edge(&1, &2, 4).unwrap();
    g.insert_edge(&1, &3, 4).unwrap();
    g.insert_edge(&2, &3, 5).unwrap();
    g.insert_edge(&3, &1, 5).unwrap();

    assert!(g.erase_node(&1));

    assert_ne!(g.find(&2, &3, &5), g.end());
    assert_eq!(g.find(&1, &1, &2), g.end());
    assert_eq!(g.find(&1, &2, &3), g.end());
    assert_eq!(g.find(&3, &1, &5), g.end());
    assert_eq!(triples(&g), vec![(2, 3, 5)]);
}

#[test]
fn test_erase_node_two_way() {
    let mut g: Graph<&str, i32> = Graph::from(["a", "b"]);
    g.insert_edge(&"a", &"b", 1).unwrap();
    g.insert_edge(&"b", &"a", 1).unwrap();

    assert!(g.erase_node(&"a"));
    assert_eq!(g.nodes(), vec!["b"]);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.to_string(), "b (\n)\n");
}

// ==================== Erase Edge By Value Tests ====================

#[test]
fn test_erase_edge_missing_nodes() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &2, 10).unwrap();

    for (src, dst) in [(10, 11), (1, 11), (10, 2)] {
        let err = g.erase_edge(&src, &dst, &3).unwrap_err();
        assert_eq!(err, GraphError::EraseEdgeMissingNode);
    }
    assert_eq!(
        g.erase_edge(&10, &2, &3).unwrap_err().to_string(),
        "Cannot call Graph::erase_edge on src or dst if they don't exist in the graph"
    );
    assert_eq!(g.erase_edge(&1, &2, &5), Ok(false));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_erase_edge_by_value() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &1, 2).unwrap();
    g.insert_edge(&1, &2, 3).unwrap();
    g.insert_edge(&1, &2, 4).unwrap();
    g.insert_edge(&2, &3, 5).unwrap();

    assert_eq!(g.erase_edge(&1, &2, &3), Ok(true));
    assert_eq!(g.find(&1, &2, &3), g.end());
    assert_ne!(g.find(&1, &2, &4), g.end());
    assert_ne!(g.find(&1, &1, &2), g.end());
    assert_ne!(g.find(&2, &3, &5), g.end());
    assert_eq!(g.erase_edge(&1, &2, &3), Ok(false));
}

// ==================== Erase Edge By Cursor Tests ====================

#[test]
fn test_erase_edge_at_returns_next() {
    let mut g = four_edges();

    let next = g.erase_edge_at(g.find(&1, &2, &3));
    assert_eq!(next, g.find(&1, &2, &5));
    assert_eq!(g.find(&1, &2, &3), g.end());
    assert_ne!(g.find(&1, &3, &2), g.end());
    assert_ne!(g.find(&1, &1, &2), g.end());

    // last edge yields end
    assert_eq!(g.erase_edge_at(g.find(&1, &3, &2)), g.end());
    assert_eq!(triples(&g), vec![(1, 1, 2), (1, 2, 5)]);
}

#[test]
fn test_erase_edge_at_bounds() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    assert_eq!(g.erase_edge_at(g.begin()), g.end());
    assert_eq!(g.erase_edge_at(g.end()), g.end());
    assert_eq!(g.erase_edge_at(EdgeCursor::new()), g.end());

    g.insert_edge(&1, &2, 5).unwrap();
    assert_eq!(g.erase_edge_at(EdgeCursor::default()), g.end());
    assert_eq!(g.edge_count(), 1);

    assert_eq!(g.erase_edge_at(g.begin()), g.end());
    assert_eq!(g.find(&1, &2, &5), g.end());
}

#[test]
fn test_erase_then_reinsert_restores_graph() {
    let mut g = four_edges();
    let before = g.clone();

    g.erase_edge_at(g.find(&1, &3, &2));
    assert_ne!(g, before);
    assert!(g.insert_edge(&1, &3, 2).unwrap());
    assert_eq!(g, before);
}

// ==================== Erase Edge Range Tests ====================

#[test]
fn test_erase_edges_everything() {
    init_logger();
    let mut g = four_edges();
    assert_eq!(g.erase_edges(g.begin(), g.end()), g.end());
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.to_string(), "1 (\n)\n2 (\n)\n3 (\n)\n");
}

#[test]
fn test_erase_edges_partial() {
    let mut g = four_edges();

    let next = g.erase_edges(g.find(&1, &2, &3), g.find(&1, &2, &5));
    assert_eq!(next, g.find(&1, &2, &5));
    assert_eq!(g.find(&1, &2, &3), g.end());

    let next = g.erase_edges(g.find(&1, &1, &2), g.find(&1, &3, &2));
    assert_eq!(next, g.find(&1, &3, &2));
    assert_eq!(g.find(&1, &1, &2), g.end());
    assert_eq!(g.find(&1, &2, &5), g.end());
    assert_ne!(g.find(&1, &3, &2), g.end());

    g.insert_edge(&1, &3, 3).unwrap();
    // an absent end point is the end cursor: everything from 1->3 (2) goes
    let next = g.erase_edges(g.find(&1, &3, &2), g.find(&10, &30, &20));
    assert_eq!(next, g.end());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_erase_edges_empty_and_odd_ranges() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    assert_eq!(g.erase_edges(g.begin(), g.end()), g.end());

    g.insert_edge(&1, &2, 5).unwrap();
    g.insert_edge(&2, &3, 5).unwrap();

    // empty range
    let first = g.find(&2, &3, &5);
    assert_eq!(g.erase_edges(first.clone(), first.clone()), first);
    assert_eq!(g.edge_count(), 2);

    // reversed range removes nothing
    g.erase_edges(g.find(&2, &3, &5), g.find(&1, &2, &5));
    assert_eq!(g.edge_count(), 2);

    // detached start removes nothing
    assert_eq!(g.erase_edges(EdgeCursor::new(), g.end()), g.end());
    assert_eq!(g.edge_count(), 2);

    // detached end behaves as end
    assert_eq!(g.erase_edges(g.begin(), EdgeCursor::new()), g.end());
    assert_eq!(g.edge_count(), 0);
}

// ==================== Clear Tests ====================

#[test]
fn test_clear() {
    let mut empty: Graph<i32, i32> = Graph::new();
    empty.clear();
    assert!(empty.is_empty());

    let mut g = four_edges();
    assert!(!g.is_empty());
    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
    assert_eq!(
        g.is_connected(&1, &2),
        Err(GraphError::IsConnectedMissingNode)
    );
}
