//! Unit tests for er-routing.

#[cfg(test)]
mod helpers {
    use er_core::{NodeId, Position, QueryParams, SimRng, TrafficFactor};
    use er_network::{Capacity, NodeAttributes, RoadGraph, RoadType};

    use crate::effective_weight;

    pub fn n(i: u32) -> NodeId {
        NodeId(i)
    }

    /// The reference scenario:
    ///
    /// ```text
    ///   0 ──5── 1 ──5── 2 ──1── 3
    ///   └────────20─────┘
    /// ```
    ///
    /// Critical 0→3 is `[0,1,2,3]` at cost 11; with 1-2 closed it is
    /// `[0,2,3]` at cost 21.
    pub fn scenario() -> RoadGraph {
        let mut g = RoadGraph::new(4);
        g.add_edge(n(0), n(1), 5.0, RoadType::Arterial).unwrap();
        g.add_edge(n(1), n(2), 5.0, RoadType::Arterial).unwrap();
        g.add_edge(n(0), n(2), 20.0, RoadType::Highway).unwrap();
        g.add_edge(n(2), n(3), 1.0, RoadType::Local).unwrap();
        g
    }

    pub fn mark_hospital(g: &mut RoadGraph, id: NodeId, capacity: Capacity) {
        let attrs = NodeAttributes::hospital(Position::ORIGIN, format!("Hospital {}", id.0), capacity);
        g.set_node_attributes(id, attrs).unwrap();
    }

    /// Random graph with 2..=8 nodes, integer weights in [1, 20), and about
    /// a fifth of roads closed.
    pub fn random_graph(rng: &mut SimRng) -> RoadGraph {
        let size = rng.gen_range(2u32..=8);
        let mut g = RoadGraph::new(size as usize);
        for u in 0..size {
            for v in (u + 1)..size {
                if rng.gen_bool(0.4) {
                    let w = rng.gen_range(1u32..20) as f64;
                    let road = g.add_edge(n(u), n(v), w, RoadType::Local).unwrap();
                    if rng.gen_bool(0.2) {
                        g.close_road(road).unwrap();
                    }
                }
            }
        }
        g
    }

    pub fn random_params(rng: &mut SimRng) -> QueryParams {
        let factors = [0.5, 1.0, 1.5, 2.0, 3.0];
        let traffic = TrafficFactor::new(*rng.choose(&factors).unwrap()).unwrap();
        if rng.gen_bool(0.5) {
            QueryParams::critical().with_traffic(traffic)
        } else {
            QueryParams::non_critical(traffic)
        }
    }

    /// Minimum effective cost over all simple paths `from → to`, by
    /// exhaustive depth-first enumeration.  Infinite if none is passable.
    pub fn brute_force(g: &RoadGraph, from: NodeId, to: NodeId, params: &QueryParams) -> f64 {
        fn dfs(
            g: &RoadGraph,
            at: NodeId,
            to: NodeId,
            params: &QueryParams,
            visited: &mut Vec<bool>,
            acc: f64,
            best: &mut f64,
        ) {
            if at == to {
                *best = best.min(acc);
                return;
            }
            for e in g.out_edges(at) {
                if visited[e.to.index()] {
                    continue;
                }
                visited[e.to.index()] = true;
                dfs(g, e.to, to, params, visited, acc + effective_weight(e.weight, params), best);
                visited[e.to.index()] = false;
            }
        }

        let mut visited = vec![false; g.node_count()];
        visited[from.index()] = true;
        let mut best = f64::INFINITY;
        dfs(g, from, to, params, &mut visited, 0.0, &mut best);
        best
    }

    /// Sum of effective weights along `path`, using the cheapest parallel
    /// road for each hop.
    pub fn path_cost(g: &RoadGraph, path: &[NodeId], params: &QueryParams) -> f64 {
        path.windows(2)
            .map(|w| {
                g.out_edges(w[0])
                    .filter(|e| e.to == w[1])
                    .map(|e| effective_weight(e.weight, params))
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }

    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a.is_infinite() && b.is_infinite() && a.signum() == b.signum()) || (a - b).abs() < 1e-9
    }
}

// ── Priority queue ────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use crate::{MinQueue, RoutingError};

    #[test]
    fn pops_in_ascending_key_order() {
        let mut q = MinQueue::new();
        for (k, p) in [(5.0, 'e'), (1.0, 'a'), (3.5, 'c'), (2.0, 'b'), (9.0, 'z')] {
            q.push(k, p);
        }
        assert_eq!(q.peek_key(), Some(1.0));
        let keys: Vec<f64> = std::iter::from_fn(|| q.pop_min().ok()).map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1.0, 2.0, 3.5, 5.0, 9.0]);
        assert!(q.is_empty());
    }

    #[test]
    fn duplicate_payloads_coexist() {
        let mut q = MinQueue::new();
        q.push(10.0, 7u32);
        q.push(4.0, 7u32);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop_min().unwrap(), (4.0, 7));
        assert_eq!(q.pop_min().unwrap(), (10.0, 7));
    }

    #[test]
    fn empty_pop_is_error() {
        let mut q: MinQueue<u32> = MinQueue::default();
        assert_eq!(q.pop_min(), Err(RoutingError::EmptyQueue));
        assert_eq!(q.peek_key(), None);
    }

    #[test]
    fn clear_empties() {
        let mut q = MinQueue::with_capacity(4);
        q.push(1.0, ());
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn zero_and_large_keys() {
        let mut q = MinQueue::new();
        q.push(1e12, 1);
        q.push(0.0, 0);
        assert_eq!(q.pop_min().unwrap(), (0.0, 0));
    }
}

// ── Cost policy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use er_core::{EdgeId, QueryParams, TrafficFactor};
    use er_network::CLOSED;

    use crate::{CongestionLevel, MAX_COST, effective_weight, extend_cost};

    #[test]
    fn critical_ignores_traffic() {
        let p = QueryParams::critical().rush_hour();
        assert_eq!(effective_weight(7.0, &p), 7.0);
    }

    #[test]
    fn non_critical_scales() {
        let p = QueryParams::non_critical(TrafficFactor::new(1.5).unwrap());
        assert_eq!(effective_weight(8.0, &p), 12.0);
    }

    #[test]
    fn closed_is_never_scaled() {
        for p in [
            QueryParams::critical(),
            QueryParams::non_critical(TrafficFactor::MIN),
            QueryParams::non_critical(TrafficFactor::MAX),
        ] {
            assert_eq!(effective_weight(CLOSED, &p), CLOSED);
        }
    }

    #[test]
    fn overflow_saturates_instead_of_closing() {
        let p = QueryParams::non_critical(TrafficFactor::MAX);
        assert_eq!(effective_weight(1e308, &p), MAX_COST);
        assert_eq!(extend_cost(MAX_COST, 1e308), MAX_COST);
        assert_eq!(extend_cost(1.0, CLOSED), CLOSED);
        assert_eq!(extend_cost(CLOSED, 1.0), CLOSED);
        assert_eq!(CongestionLevel::classify(MAX_COST), CongestionLevel::Heavy);
    }

    #[test]
    fn congestion_buckets() {
        assert_eq!(CongestionLevel::classify(5.0), CongestionLevel::Free);
        assert_eq!(CongestionLevel::classify(10.0), CongestionLevel::Free);
        assert_eq!(CongestionLevel::classify(12.0), CongestionLevel::Moderate);
        assert_eq!(CongestionLevel::classify(16.0), CongestionLevel::Heavy);
        assert_eq!(CongestionLevel::classify(CLOSED), CongestionLevel::Closed);
    }

    #[test]
    fn congestion_follows_severity() {
        let g = super::helpers::scenario();
        // Road 0-1 weighs 5; traffic applies only to non-critical queries.
        let road = EdgeId(0);
        let crit = QueryParams::critical().rush_hour();
        let non = QueryParams::non_critical(TrafficFactor::new(2.5).unwrap());
        assert_eq!(CongestionLevel::of_road(&g, road, &crit).unwrap(), CongestionLevel::Free);
        assert_eq!(CongestionLevel::of_road(&g, road, &non).unwrap(), CongestionLevel::Moderate);
    }
}

// ── Single-pair routing ───────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use er_core::{QueryParams, TrafficFactor};
    use er_network::{NetworkError, RoadGraph};

    use super::helpers::{n, scenario};
    use crate::{DijkstraRouter, RouteOutcome, Router, RoutingError};

    #[test]
    fn reference_scenario() {
        let mut g = scenario();
        let p = QueryParams::critical();

        let route = DijkstraRouter.route(&g, n(0), n(3), &p).unwrap().into_route().unwrap();
        assert_eq!(route.path, vec![n(0), n(1), n(2), n(3)]);
        assert_eq!(route.total_cost, 11.0);
        assert_eq!(route.hops(), 3);

        g.close_edge(n(1), n(2)).unwrap();
        let route = DijkstraRouter.route(&g, n(0), n(3), &p).unwrap().into_route().unwrap();
        assert_eq!(route.path, vec![n(0), n(2), n(3)]);
        assert_eq!(route.total_cost, 21.0);
    }

    #[test]
    fn trivial_same_node() {
        let g = scenario();
        let route = DijkstraRouter
            .route(&g, n(2), n(2), &QueryParams::critical())
            .unwrap()
            .into_route()
            .unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.path, vec![n(2)]);
        assert_eq!(route.total_cost, 0.0);
    }

    #[test]
    fn isolated_destination_is_no_path() {
        let mut g = scenario();
        g.close_edge(n(2), n(3)).unwrap();
        let outcome = DijkstraRouter.route(&g, n(0), n(3), &QueryParams::critical()).unwrap();
        assert_eq!(outcome, RouteOutcome::NoPath { from: n(0), to: n(3) });
        assert!(outcome.route().is_none());
    }

    #[test]
    fn disconnected_is_no_path() {
        let g = RoadGraph::new(2);
        let outcome = DijkstraRouter.route(&g, n(0), n(1), &QueryParams::critical()).unwrap();
        assert!(!outcome.is_found());
    }

    #[test]
    fn invalid_node_is_error() {
        let g = scenario();
        let err = DijkstraRouter.route(&g, n(0), n(9), &QueryParams::critical()).unwrap_err();
        assert_eq!(
            err,
            RoutingError::Network(NetworkError::InvalidNodeId { id: n(9), node_count: 4 })
        );
        assert!(DijkstraRouter.shortest_paths(&g, n(4), &QueryParams::critical()).is_err());
    }

    #[test]
    fn rush_hour_scales_cost_uniformly() {
        // 0─1 costs 10 direct and 12 via 2.  Traffic scales both alike, so
        // the direct road still wins at twice the cost.
        let mut g = RoadGraph::new(3);
        g.add_edge(n(0), n(1), 10.0, Default::default()).unwrap();
        g.add_edge(n(0), n(2), 6.0, Default::default()).unwrap();
        g.add_edge(n(2), n(1), 6.0, Default::default()).unwrap();
        let rush = QueryParams::non_critical(TrafficFactor::RUSH_HOUR);
        let route = DijkstraRouter.route(&g, n(0), n(1), &rush).unwrap().into_route().unwrap();
        assert_eq!(route.path, vec![n(0), n(1)]);
        assert_eq!(route.total_cost, 20.0);
    }

    #[test]
    fn huge_open_roads_stay_routable() {
        let mut g = RoadGraph::new(3);
        g.add_edge(n(0), n(1), 1e308, Default::default()).unwrap();
        g.add_edge(n(1), n(2), 1e308, Default::default()).unwrap();

        let heavy = QueryParams::non_critical(TrafficFactor::MAX);
        let route = DijkstraRouter.route(&g, n(0), n(1), &heavy).unwrap().into_route().unwrap();
        assert_eq!(route.path, vec![n(0), n(1)]);
        assert_eq!(route.total_cost, crate::MAX_COST);

        // Two finite roads whose sum overflows.
        let route = DijkstraRouter
            .route(&g, n(0), n(2), &QueryParams::critical())
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.path, vec![n(0), n(1), n(2)]);
        assert!(route.total_cost.is_finite());

        g.close_edge(n(1), n(2)).unwrap();
        let outcome = DijkstraRouter.route(&g, n(0), n(2), &heavy).unwrap();
        assert_eq!(outcome, RouteOutcome::NoPath { from: n(0), to: n(2) });
    }

    #[test]
    fn parallel_road_cheapest_wins() {
        let mut g = RoadGraph::new(2);
        g.add_edge(n(0), n(1), 9.0, Default::default()).unwrap();
        g.add_edge(n(0), n(1), 4.0, Default::default()).unwrap();
        let p = QueryParams::critical();
        let route = DijkstraRouter.route(&g, n(1), n(0), &p).unwrap().into_route().unwrap();
        assert_eq!(route.total_cost, 4.0);

        // Closing (0,1) affects only the first road inserted.
        g.close_edge(n(0), n(1)).unwrap();
        let route = DijkstraRouter.route(&g, n(0), n(1), &p).unwrap().into_route().unwrap();
        assert_eq!(route.total_cost, 4.0);
    }

    #[test]
    fn one_to_all_distances() {
        let g = scenario();
        let tree = DijkstraRouter.shortest_paths(&g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(tree.source(), n(0));
        assert_eq!(tree.distances(), &[0.0, 5.0, 10.0, 11.0]);
        assert_eq!(tree.predecessor(n(3)), Some(n(2)));
        assert_eq!(tree.predecessor(n(0)), None);
        assert_eq!(tree.path_to(n(2)), Some(vec![n(0), n(1), n(2)]));
    }

    #[test]
    fn one_to_all_unreachable_is_infinite() {
        let mut g = scenario();
        g.close_edge(n(2), n(3)).unwrap();
        let tree = DijkstraRouter.shortest_paths(&g, n(0), &QueryParams::critical()).unwrap();
        assert!(tree.distance(n(3)).is_infinite());
        assert!(!tree.is_reachable(n(3)));
        assert_eq!(tree.path_to(n(3)), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn outcomes_are_serde() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<crate::Route>();
        assert_serde::<RouteOutcome>();
        assert_serde::<crate::HospitalOutcome>();
        assert_serde::<crate::CongestionLevel>();
    }

    #[test]
    fn router_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DijkstraRouter>();
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use er_core::{QueryParams, SeverityMode, SimRng, TrafficFactor};
    use er_network::CLOSED;

    use super::helpers::{approx_eq, brute_force, n, path_cost, random_graph, random_params, scenario};
    use crate::{DijkstraRouter, RouteOutcome, Router};

    const TRIALS: u64 = 300;

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let mut rng = SimRng::new(2024);
        for trial in 0..TRIALS {
            let g = random_graph(&mut rng);
            let params = random_params(&mut rng);
            let source = n(rng.gen_range(0..g.node_count() as u32));
            let tree = DijkstraRouter.shortest_paths(&g, source, &params).unwrap();

            for target in g.node_ids() {
                let expected = brute_force(&g, source, target, &params);
                let got = tree.distance(target);
                assert!(
                    approx_eq(got, expected),
                    "trial {trial}: {source}→{target} got {got}, brute force {expected}"
                );
                if let Some(path) = tree.path_to(target) {
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&target));
                    assert!(approx_eq(path_cost(&g, &path, &params), got));
                }
            }
        }
    }

    #[test]
    fn early_exit_agrees_with_one_to_all() {
        let mut rng = SimRng::new(77);
        for _ in 0..TRIALS {
            let g = random_graph(&mut rng);
            let params = random_params(&mut rng);
            let source = n(rng.gen_range(0..g.node_count() as u32));
            let target = n(rng.gen_range(0..g.node_count() as u32));
            let tree = DijkstraRouter.shortest_paths(&g, source, &params).unwrap();
            match DijkstraRouter.route(&g, source, target, &params).unwrap() {
                RouteOutcome::Found(r) => assert!(approx_eq(r.total_cost, tree.distance(target))),
                RouteOutcome::NoPath { .. } => assert!(!tree.is_reachable(target)),
            }
        }
    }

    #[test]
    fn closed_roads_never_used() {
        let mut rng = SimRng::new(5);
        for _ in 0..TRIALS {
            let g = random_graph(&mut rng);
            let params = random_params(&mut rng);
            let source = n(rng.gen_range(0..g.node_count() as u32));
            let tree = DijkstraRouter.shortest_paths(&g, source, &params).unwrap();
            for target in g.node_ids() {
                let Some(path) = tree.path_to(target) else { continue };
                for hop in path.windows(2) {
                    // Some open road must join every consecutive pair.
                    assert!(
                        g.out_edges(hop[0]).any(|e| e.to == hop[1] && e.weight != CLOSED),
                        "path {path:?} crosses a closed road"
                    );
                }
            }
        }
    }

    #[test]
    fn closure_observed_from_both_directions() {
        let mut g = scenario();
        g.close_edge(n(2), n(1)).unwrap();
        let p = QueryParams::critical();
        let fwd = DijkstraRouter.route(&g, n(0), n(3), &p).unwrap().into_route().unwrap();
        let rev = DijkstraRouter.route(&g, n(3), n(0), &p).unwrap().into_route().unwrap();
        assert_eq!(fwd.path, vec![n(0), n(2), n(3)]);
        assert_eq!(rev.path, vec![n(3), n(2), n(0)]);
        assert_eq!(fwd.total_cost, rev.total_cost);
    }

    #[test]
    fn close_then_reopen_restores_routes() {
        let mut g = scenario();
        let p = QueryParams::critical();
        let before = DijkstraRouter.route(&g, n(0), n(3), &p).unwrap();
        g.close_edge(n(1), n(2)).unwrap();
        g.reopen_edge(n(1), n(2)).unwrap();
        let after = DijkstraRouter.route(&g, n(0), n(3), &p).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn severity_invariant_at_neutral_traffic() {
        let mut rng = SimRng::new(11);
        for _ in 0..TRIALS {
            let g = random_graph(&mut rng);
            let source = n(rng.gen_range(0..g.node_count() as u32));
            let target = n(rng.gen_range(0..g.node_count() as u32));
            let crit = QueryParams::new(SeverityMode::Critical, TrafficFactor::NEUTRAL);
            let non = QueryParams::new(SeverityMode::NonCritical, TrafficFactor::NEUTRAL);
            assert_eq!(
                DijkstraRouter.route(&g, source, target, &crit).unwrap(),
                DijkstraRouter.route(&g, source, target, &non).unwrap()
            );
        }
    }

    #[test]
    fn traffic_is_monotonic_and_never_beats_critical() {
        let mut rng = SimRng::new(99);
        let factors = [1.0, 1.25, 2.0, 3.0];
        for _ in 0..TRIALS {
            let g = random_graph(&mut rng);
            let source = n(rng.gen_range(0..g.node_count() as u32));
            let target = n(rng.gen_range(0..g.node_count() as u32));

            let crit = DijkstraRouter.route(&g, source, target, &QueryParams::critical().rush_hour()).unwrap();
            let Some(crit) = crit.into_route() else { continue };

            let mut last = crit.total_cost;
            for f in factors {
                let params = QueryParams::non_critical(TrafficFactor::new(f).unwrap());
                let route = DijkstraRouter.route(&g, source, target, &params).unwrap().into_route().unwrap();
                assert!(route.total_cost + 1e-9 >= last, "cost fell as traffic rose");
                assert!(route.total_cost + 1e-9 >= crit.total_cost, "non-critical beat critical");
                // Previously optimal edges only get dearer.
                assert!(path_cost(&g, &crit.path, &params) + 1e-9 >= crit.total_cost);
                last = route.total_cost;
            }
        }
    }
}

// ── Nearest hospital ──────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use er_core::{QueryParams, TrafficFactor};
    use er_network::{Capacity, NetworkError, RoadGraph};

    use super::helpers::{mark_hospital, n, scenario};
    use crate::{DijkstraRouter, HospitalOutcome, RoutingError, nearest_available_hospital};

    #[test]
    fn skips_saturated_closer_hospital() {
        // Node 3 is a full hospital; node 2 has one ICU bed.  Move node 3
        // next to the source so it is strictly closer.
        let mut g = scenario();
        g.add_edge(n(0), n(3), 1.0, Default::default()).unwrap();
        mark_hospital(&mut g, n(3), Capacity::new(0, 0));
        mark_hospital(&mut g, n(2), Capacity::new(1, 0));

        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome.hospital(), Some(n(2)));
        // 0→3→2 = 1 + 1 beats 0→1→2 = 10.
        assert_eq!(outcome.distance(), Some(2.0));
        match outcome {
            HospitalOutcome::Found { capacity, route, .. } => {
                assert_eq!(capacity, Capacity::new(1, 0));
                assert_eq!(route.path, vec![n(0), n(3), n(2)]);
            }
            other => panic!("expected a hospital, got {other:?}"),
        }
    }

    #[test]
    fn picks_the_closest_available() {
        let mut g = scenario();
        mark_hospital(&mut g, n(1), Capacity::new(0, 2));
        mark_hospital(&mut g, n(3), Capacity::new(3, 3));
        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome.hospital(), Some(n(1)));
        assert_eq!(outcome.distance(), Some(5.0));
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let mut g = RoadGraph::new(3);
        g.add_edge(n(0), n(1), 4.0, Default::default()).unwrap();
        g.add_edge(n(0), n(2), 4.0, Default::default()).unwrap();
        mark_hospital(&mut g, n(2), Capacity::new(1, 1));
        mark_hospital(&mut g, n(1), Capacity::new(1, 1));
        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome.hospital(), Some(n(1)));
    }

    #[test]
    fn source_hospital_selects_itself() {
        let mut g = scenario();
        mark_hospital(&mut g, n(0), Capacity::new(0, 1));
        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome.hospital(), Some(n(0)));
        assert_eq!(outcome.distance(), Some(0.0));
    }

    #[test]
    fn all_saturated_is_no_capacity() {
        let mut g = scenario();
        mark_hospital(&mut g, n(3), Capacity::ZERO);
        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome, HospitalOutcome::NoCapacity);

        let bare = scenario();
        let outcome = nearest_available_hospital(&DijkstraRouter, &bare, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome, HospitalOutcome::NoCapacity);
    }

    #[test]
    fn cut_off_hospital_is_unreachable() {
        let mut g = scenario();
        mark_hospital(&mut g, n(3), Capacity::new(2, 0));
        g.close_edge(n(2), n(3)).unwrap();
        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &QueryParams::critical()).unwrap();
        assert_eq!(outcome, HospitalOutcome::Unreachable);
        assert_eq!(outcome.distance(), None);
    }

    #[test]
    fn traffic_scales_reported_distance() {
        let mut g = scenario();
        mark_hospital(&mut g, n(3), Capacity::new(1, 0));
        let params = QueryParams::non_critical(TrafficFactor::RUSH_HOUR);
        let outcome = nearest_available_hospital(&DijkstraRouter, &g, n(0), &params).unwrap();
        assert_eq!(outcome.distance(), Some(22.0));
    }

    #[test]
    fn invalid_source_is_error() {
        let g = scenario();
        let err = nearest_available_hospital(&DijkstraRouter, &g, n(40), &QueryParams::critical()).unwrap_err();
        assert!(matches!(err, RoutingError::Network(NetworkError::InvalidNodeId { .. })));
    }
}
