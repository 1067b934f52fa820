use serde_json::{Value, json};
use tracegraph::{EdgeSpec, GraphError, GraphSource, TraceGraph};

fn graph_with_nodes(ids: &[&'static str]) -> TraceGraph<&'static str, Value> {
    let mut graph = TraceGraph::new();
    for &id in ids {
        graph.add_node(id).expect("node");
    }
    graph
}

#[test]
fn test_duplicate_node_rejected_and_store_unchanged() {
    let mut graph = graph_with_nodes(&["a", "b"]);
    graph.add_edge(&"a", &"b", json!({})).expect("edge");

    let err = graph.add_node("a").unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode(_)));

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(&"a").unwrap(), vec!["b"]);
}

#[test]
fn test_edge_requires_existing_endpoints() {
    let mut graph = graph_with_nodes(&["a"]);

    let err = graph.add_edge(&"a", &"missing", json!({})).unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode(_)));
    let err = graph.add_edge(&"missing", &"a", json!({})).unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode(_)));

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_ordered_pair_rejected() {
    let mut graph = graph_with_nodes(&["a", "b"]);
    graph.add_edge(&"a", &"b", json!({"n": 1})).expect("edge");

    let err = graph.add_edge(&"a", &"b", json!({"n": 2})).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateEdge(_)));
    assert_eq!(graph.edge_count(), 1);

    // The original payload survives a rejected duplicate.
    let payloads = graph.load_edges(&["a", "b"]).expect("payloads");
    assert_eq!(*payloads[0], json!({"n": 1}));
}

#[test]
fn test_reverse_pair_and_self_loop_are_distinct_edges() {
    let mut graph = graph_with_nodes(&["a", "b"]);
    graph.add_edge(&"a", &"b", json!("forward")).expect("edge");
    graph.add_edge(&"b", &"a", json!("backward")).expect("edge");
    graph.add_edge(&"a", &"a", json!("loop")).expect("edge");

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.neighbors(&"a").unwrap(), vec!["b", "a"]);
    assert_eq!(graph.neighbors(&"b").unwrap(), vec!["a"]);
}

#[test]
fn test_edge_directionality() {
    let mut graph = graph_with_nodes(&["a", "b"]);
    graph.add_edge(&"a", &"b", json!({})).expect("edge");

    assert!(graph.neighbors(&"b").unwrap().is_empty());
    let err = graph.trace(&"b", &"a").unwrap_err();
    assert!(matches!(err, GraphError::NoPathFound(_)));
    let err = graph.load_edges(&["b", "a"]).unwrap_err();
    assert!(matches!(err, GraphError::InvalidPath(_)));
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let mut graph = graph_with_nodes(&["a", "f", "d", "b"]);
    graph.add_edge(&"a", &"f", json!({})).expect("edge");
    graph.add_edge(&"a", &"d", json!({})).expect("edge");
    graph.add_edge(&"a", &"b", json!({})).expect("edge");

    assert_eq!(graph.neighbors(&"a").unwrap(), vec!["f", "d", "b"]);
}

#[test]
fn test_build_from_applies_nodes_then_edges_in_order() {
    let mut graph: TraceGraph<&str, Value> = TraceGraph::new();
    let source = GraphSource {
        nodes: vec!["a", "b", "c"],
        edges: vec![
            EdgeSpec { from: "a", to: "b", data: json!(1) },
            EdgeSpec { from: "b", to: "c", data: json!(2) },
        ],
    };
    graph.build_from(source).expect("build");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.trace(&"a", &"c").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_build_from_is_not_transactional() {
    let mut graph: TraceGraph<&str, Value> = TraceGraph::new();
    let source = GraphSource {
        nodes: vec!["a", "b"],
        edges: vec![
            EdgeSpec { from: "a", to: "b", data: json!(1) },
            EdgeSpec { from: "a", to: "missing", data: json!(2) },
            EdgeSpec { from: "b", to: "a", data: json!(3) },
        ],
    };

    let err = graph.build_from(source).unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode(_)));

    // Everything before the failing entry stays in place; nothing after it ran.
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(&"a").unwrap(), vec!["b"]);
    assert!(graph.neighbors(&"b").unwrap().is_empty());
}

#[test]
fn test_build_from_duplicate_node_aborts() {
    let mut graph: TraceGraph<&str, Value> = TraceGraph::new();
    let source = GraphSource {
        nodes: vec!["a", "a"],
        edges: vec![],
    };

    let err = graph.build_from(source).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode(_)));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_contains_node() {
    let graph = graph_with_nodes(&["a"]);
    assert!(graph.contains_node(&"a"));
    assert!(!graph.contains_node(&"z"));
}

#[test]
fn test_graph_source_round_trips_through_serde() {
    let source = GraphSource {
        nodes: vec!["a".to_string(), "b".to_string()],
        edges: vec![EdgeSpec {
            from: "a".to_string(),
            to: "b".to_string(),
            data: json!({"weighted": false}),
        }],
    };
    let text = serde_json::to_string(&source).expect("serialize");
    let parsed: GraphSource<String, Value> = serde_json::from_str(&text).expect("parse");
    assert_eq!(parsed, source);

    let mut graph = TraceGraph::new();
    graph.build_from(parsed).expect("build");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}
