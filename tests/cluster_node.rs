use colocate::node::{ClusterNode, Container, Node};

fn sample_node() -> ClusterNode {
    ClusterNode::new("worker-1")
        .with_container(Container::new("4f2a9c8e11").with_name("/web"))
        .with_container(Container::new("4f2b00aa77").with_name("/db"))
        .with_container(Container::new("9e9e9e").with_name("cache"))
}

#[test]
fn lookup_by_exact_id() {
    let node = sample_node();
    assert_eq!(node.container("9e9e9e").map(|c| c.id.as_str()), Some("9e9e9e"));
}

#[test]
fn lookup_by_name_ignores_leading_slash() {
    let node = sample_node();
    assert_eq!(node.container("web").map(|c| c.id.as_str()), Some("4f2a9c8e11"));
    assert_eq!(node.container("/db").map(|c| c.id.as_str()), Some("4f2b00aa77"));
    assert_eq!(node.container("/cache").map(|c| c.id.as_str()), Some("9e9e9e"));
}

#[test]
fn lookup_by_unique_id_prefix() {
    let node = sample_node();
    assert_eq!(node.container("4f2a").map(|c| c.id.as_str()), Some("4f2a9c8e11"));
    assert!(node.has_container("9e"));
}

#[test]
fn ambiguous_prefix_matches_nothing() {
    let node = sample_node();
    assert!(node.container("4f2").is_none());
}

#[test]
fn empty_and_unknown_identifiers_are_absent() {
    let node = sample_node();
    assert!(!node.has_container(""));
    assert!(!node.has_container("missing"));
}

#[test]
fn exact_id_wins_over_name() {
    let node = ClusterNode::new("n")
        .with_container(Container::new("other").with_name("/db"))
        .with_container(Container::new("db"));
    assert_eq!(node.container("db").map(|c| c.id.as_str()), Some("db"));
}

#[test]
fn node_reports_its_name_and_containers() {
    let node = sample_node();
    assert_eq!(node.name(), "worker-1");
    assert_eq!(node.containers().len(), 3);
}
