//! Build a small graph, walk it, merge two nodes and print the result.

use gdwg::{GraphBuilder, GraphResult};

fn main() -> GraphResult<()> {
    let mut builder = GraphBuilder::new();
    builder
        .add_nodes(["how", "you", "are", "?", "hello"])
        .link("how", "you", 5)
        .link("how", "?", 1)
        .link("you", "are", 4)
        .link("are", "?", 2)
        .link("hello", "how", 3)
        .link("hello", "are", 7);
    let mut graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Ascending (from, to, weight) order
    for edge in &graph {
        println!("  {} -> {} ({})", edge.from, edge.to, edge.weight);
    }

    // Walk backwards with a cursor
    let mut cursor = graph.end();
    cursor.move_prev(&graph);
    while let Some(edge) = cursor.get() {
        println!("  <- {} -> {} ({})", edge.from, edge.to, edge.weight);
        cursor.move_prev(&graph);
    }

    println!("Connections from 'hello': {:?}", graph.connections(&"hello")?);

    graph.merge_replace_node(&"are", &"you")?;
    println!("After merging 'are' into 'you':\n{}", graph);

    Ok(())
}
