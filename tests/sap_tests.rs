use rand::prelude::*;
use sap_graph::boundary;
use sap_graph::graph::generators::{generate_hierarchy, generate_random_dag, generate_random_digraph};
use sap_graph::graph::{Digraph, Graph, MutableGraph};
use sap_graph::{Error, Sap};
use std::collections::VecDeque;

fn graph(vertices: usize, edges: &[(usize, usize)]) -> Digraph {
    Digraph::from_edges(vertices, edges).unwrap()
}

// Plain single-source BFS, independent of the library, for cross-checks
fn reference_distances(graph: &Digraph, source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for &v in graph.adjacent(u) {
            if dist[v].is_none() {
                dist[v] = Some(dist[u].unwrap() + 1);
                queue.push_back(v);
            }
        }
    }
    dist
}

fn reference_set_distances(graph: &Digraph, set: &[usize]) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.vertex_count()];
    for &member in set {
        for (i, d) in reference_distances(graph, member).into_iter().enumerate() {
            if let Some(d) = d {
                dist[i] = Some(dist[i].map_or(d, |current: usize| current.min(d)));
            }
        }
    }
    dist
}

// Checks that `ancestor` achieves `length` and that no lower ID achieves it too
fn assert_lowest_optimal_ancestor(graph: &Digraph, v: &[usize], w: &[usize], ancestor: usize, length: usize) {
    let dv = reference_set_distances(graph, v);
    let dw = reference_set_distances(graph, w);
    let combined = |i: usize| Some(dv[i]? + dw[i]?);

    assert_eq!(combined(ancestor), Some(length), "v={:?} w={:?}", v, w);
    for i in 0..ancestor {
        assert!(
            combined(i).map_or(true, |c| c > length),
            "vertex {} ties or beats ancestor {} for v={:?} w={:?}",
            i,
            ancestor,
            v,
            w
        );
    }
}

fn reference_length(graph: &Digraph, v: usize, w: usize) -> Option<usize> {
    let dv = reference_distances(graph, v);
    let dw = reference_distances(graph, w);
    (0..graph.vertex_count())
        .filter_map(|i| Some(dv[i]? + dw[i]?))
        .min()
}

#[test]
fn test_two_children_of_one_root() {
    let sap = Sap::new(&graph(3, &[(1, 0), (2, 0)]));

    assert_eq!(sap.length(1, 2).unwrap(), Some(2));
    assert_eq!(sap.ancestor(1, 2).unwrap(), Some(0));
}

#[test]
fn test_uneven_legs() {
    let sap = Sap::new(&graph(4, &[(3, 1), (1, 0), (2, 0)]));

    assert_eq!(sap.length(3, 2).unwrap(), Some(3));
    assert_eq!(sap.ancestor(3, 2).unwrap(), Some(0));

    let found = sap.query(3, 2).unwrap().unwrap();
    assert_eq!(found.path, vec![3, 1, 0, 2]);
    assert_eq!(found.from, 3);
    assert_eq!(found.to, 2);
}

#[test]
fn test_no_common_ancestor() {
    let sap = Sap::new(&graph(7, &[(1, 0), (2, 0)]));

    assert_eq!(sap.length(5, 6).unwrap(), None);
    assert_eq!(sap.ancestor(5, 6).unwrap(), None);
    assert_eq!(boundary::to_sentinel(sap.length(5, 6).unwrap()), -1);
    assert_eq!(boundary::to_sentinel(sap.ancestor(5, 6).unwrap()), -1);
}

#[test]
fn test_vertex_is_its_own_ancestor() {
    let g = graph(4, &[(3, 1), (1, 0), (2, 0)]);
    let sap = Sap::new(&g);

    for v in 0..g.vertex_count() {
        assert_eq!(sap.length(v, v).unwrap(), Some(0));
        assert_eq!(sap.ancestor(v, v).unwrap(), Some(v));
    }
}

#[test]
fn test_endpoint_can_be_the_ancestor() {
    let sap = Sap::new(&graph(3, &[(2, 1), (1, 0)]));

    assert_eq!(sap.length(2, 0).unwrap(), Some(2));
    assert_eq!(sap.ancestor(2, 0).unwrap(), Some(0));
    assert_eq!(sap.length(1, 2).unwrap(), Some(1));
    assert_eq!(sap.ancestor(1, 2).unwrap(), Some(1));
}

#[test]
fn test_ties_go_to_lowest_vertex_id() {
    // 0 and 1 both reach 2 and 3 in one step each
    let sap = Sap::new(&graph(4, &[(0, 3), (0, 2), (1, 3), (1, 2)]));

    assert_eq!(sap.length(0, 1).unwrap(), Some(2));
    assert_eq!(sap.ancestor(0, 1).unwrap(), Some(2));
}

#[test]
fn test_cycles_are_tolerated() {
    let sap = Sap::new(&graph(3, &[(0, 1), (1, 2), (2, 0)]));

    assert_eq!(sap.length(0, 2).unwrap(), Some(1));
    assert_eq!(sap.ancestor(0, 2).unwrap(), Some(0));
}

#[test]
fn test_set_query_picks_closer_ancestor() {
    // 0,2 -> 4 in one step each; 1,3 reach 9 in two and one steps
    let g = graph(10, &[(0, 4), (2, 4), (1, 5), (5, 9), (3, 9)]);
    let sap = Sap::new(&g);

    assert_eq!(sap.length_sets([0, 1], [2, 3]).unwrap(), Some(2));
    assert_eq!(sap.ancestor_sets([0, 1], [2, 3]).unwrap(), Some(4));

    let found = sap.query_sets(vec![0, 1], vec![2, 3]).unwrap().unwrap();
    assert_eq!(found.from, 0);
    assert_eq!(found.to, 2);
    assert_eq!(found.path, vec![0, 4, 2]);
}

#[test]
fn test_set_query_tie_between_ancestors() {
    let g = graph(10, &[(0, 4), (2, 4), (1, 9), (3, 9)]);
    let sap = Sap::new(&g);

    assert_eq!(sap.length_sets([0, 1], [2, 3]).unwrap(), Some(2));
    assert_eq!(sap.ancestor_sets([1, 0], [3, 2]).unwrap(), Some(4));
}

#[test]
fn test_set_query_with_overlapping_sets() {
    let sap = Sap::new(&graph(3, &[(1, 0), (2, 0)]));

    assert_eq!(sap.length_sets([1, 2], [2]).unwrap(), Some(0));
    assert_eq!(sap.ancestor_sets([1, 2], [2]).unwrap(), Some(2));
}

#[test]
fn test_invalid_vertices_are_rejected() {
    let g = graph(3, &[(1, 0), (2, 0)]);
    let sap = Sap::new(&g);

    assert!(matches!(
        sap.length(3, 0),
        Err(Error::InvalidVertex { vertex: 3, vertex_count: 3 })
    ));
    assert!(matches!(sap.ancestor(0, 3), Err(Error::InvalidVertex { .. })));

    // Signed IDs from outer callers
    assert!(matches!(
        boundary::vertex(-1, g.vertex_count()),
        Err(Error::InvalidVertex { vertex: -1, .. })
    ));
    assert!(matches!(boundary::vertex(3, g.vertex_count()), Err(Error::InvalidVertex { .. })));
    assert_eq!(boundary::vertex(2, g.vertex_count()).unwrap(), 2);
}

#[test]
fn test_invalid_sets_are_rejected() {
    let sap = Sap::new(&graph(3, &[(1, 0), (2, 0)]));

    assert!(matches!(sap.length_sets(Vec::new(), vec![1]), Err(Error::InvalidArgument(_))));
    assert!(matches!(sap.ancestor_sets(vec![1], Vec::new()), Err(Error::InvalidArgument(_))));
    assert!(matches!(sap.length_sets(vec![1, 7], vec![2]), Err(Error::InvalidArgument(_))));

    assert!(matches!(boundary::vertex_set(vec![Some(1), None], 3), Err(Error::InvalidArgument(_))));
    assert!(matches!(boundary::vertex_set(vec![Some(-1)], 3), Err(Error::InvalidArgument(_))));
    assert!(matches!(boundary::vertex_set(Vec::new(), 3), Err(Error::InvalidArgument(_))));
    assert_eq!(boundary::vertex_set(vec![Some(2), Some(0)], 3).unwrap(), vec![2, 0]);
}

#[test]
fn test_later_changes_to_the_input_graph_are_ignored() {
    let mut g = graph(3, &[(1, 0)]);
    let sap = Sap::new(&g);

    g.add_edge(2, 0);
    g.add_vertex();

    assert_eq!(sap.length(1, 2).unwrap(), None);
    assert_eq!(sap.graph().vertex_count(), 3);
    assert!(matches!(sap.length(3, 0), Err(Error::InvalidVertex { .. })));
}

#[test]
fn test_against_reference_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);

    for round in 0..20 {
        let g = if round % 2 == 0 {
            generate_random_dag(40, 1.5, &mut rng)
        } else {
            generate_random_digraph(40, 60, &mut rng)
        };
        let sap = Sap::new(&g);

        for _ in 0..30 {
            let v = rng.gen_range(0..40);
            let w = rng.gen_range(0..40);
            let expected = reference_length(&g, v, w);

            assert_eq!(sap.length(v, w).unwrap(), expected);
            assert_eq!(sap.length(w, v).unwrap(), expected);

            match sap.query(v, w).unwrap() {
                Some(found) => {
                    let dv = reference_distances(&g, v)[found.ancestor].unwrap();
                    let dw = reference_distances(&g, w)[found.ancestor].unwrap();
                    assert_eq!(dv + dw, found.length);
                    assert_eq!(found.path.len(), found.length + 1);
                    assert_eq!(found.path.first(), Some(&v));
                    assert_eq!(found.path.last(), Some(&w));
                    for step in found.path.windows(2) {
                        assert!(g.has_edge(step[0], step[1]) || g.has_edge(step[1], step[0]));
                    }
                }
                None => assert_eq!(sap.ancestor(v, w).unwrap(), None),
            }
        }
    }
}

#[test]
fn test_set_query_equals_min_over_pairs() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let g = generate_random_dag(50, 1.2, &mut rng);
        let sap = Sap::new(&g);

        let v: Vec<usize> = (0..rng.gen_range(1..5)).map(|_| rng.gen_range(0..50)).collect();
        let w: Vec<usize> = (0..rng.gen_range(1..5)).map(|_| rng.gen_range(0..50)).collect();

        let pairwise = v
            .iter()
            .flat_map(|&a| w.iter().map(move |&b| (a, b)))
            .filter_map(|(a, b)| sap.length(a, b).unwrap())
            .min();

        assert_eq!(sap.length_sets(v.clone(), w.clone()).unwrap(), pairwise);
        match (pairwise, sap.ancestor_sets(v.clone(), w.clone()).unwrap()) {
            (Some(length), Some(ancestor)) => assert_lowest_optimal_ancestor(&g, &v, &w, ancestor, length),
            (None, ancestor) => assert_eq!(ancestor, None),
            (Some(_), None) => panic!("missing ancestor for v={:?} w={:?}", v, w),
        }
    }
}

#[test]
fn test_set_ancestor_is_lowest_optimal_vertex_on_hierarchies() {
    let mut rng = StdRng::seed_from_u64(23);

    // Shallow, wide hierarchies produce many ties between candidate ancestors
    for _ in 0..20 {
        let g = generate_hierarchy(60, 4, &mut rng);
        let sap = Sap::new(&g);

        let v: Vec<usize> = (0..rng.gen_range(1..6)).map(|_| rng.gen_range(0..60)).collect();
        let w: Vec<usize> = (0..rng.gen_range(1..6)).map(|_| rng.gen_range(0..60)).collect();

        let found = sap.query_sets(v.clone(), w.clone()).unwrap().unwrap();
        assert_lowest_optimal_ancestor(&g, &v, &w, found.ancestor, found.length);
        assert!(v.contains(&found.from));
        assert!(w.contains(&found.to));
        assert_eq!(found.path.len(), found.length + 1);
    }
}

#[test]
fn test_hierarchy_always_has_an_ancestor() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = generate_hierarchy(200, 3, &mut rng);
    let sap = Sap::new(&g);

    assert_eq!(g.roots(), vec![0]);
    for _ in 0..50 {
        let v = rng.gen_range(0..200);
        let w = rng.gen_range(0..200);
        assert!(sap.ancestor(v, w).unwrap().is_some());
    }
}

#[test]
fn test_batch_queries_match_single_queries() {
    let mut rng = StdRng::seed_from_u64(5);
    let g = generate_random_digraph(60, 90, &mut rng);
    let sap = Sap::new(&g);

    let mut pairs: Vec<(usize, usize)> = (0..100)
        .map(|_| (rng.gen_range(0..60), rng.gen_range(0..60)))
        .collect();
    pairs.push((0, 60));

    let batch = sap.query_many(&pairs);
    assert_eq!(batch.len(), pairs.len());
    for (&(v, w), result) in pairs.iter().zip(&batch) {
        match result {
            Ok(found) => assert_eq!(found, &sap.query(v, w).unwrap()),
            Err(err) => assert!(matches!(err, Error::InvalidVertex { vertex: 60, .. })),
        }
    }
}

#[test]
fn test_concurrent_queries_share_one_instance() {
    let mut rng = StdRng::seed_from_u64(9);
    let g = generate_hierarchy(500, 2, &mut rng);
    let sap = Sap::new(&g);

    let pairs: Vec<(usize, usize)> = (0..64)
        .map(|_| (rng.gen_range(0..500), rng.gen_range(0..500)))
        .collect();
    let expected: Vec<_> = pairs.iter().map(|&(v, w)| sap.query(v, w).unwrap()).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (&(v, w), want) in pairs.iter().zip(&expected) {
                    assert_eq!(&sap.query(v, w).unwrap(), want);
                }
            });
        }
    });
}
