use std::{collections::HashMap, net::SocketAddr};

use topopath::{
    dijkstra::dijkstra,
    edge::{Edge, Weight},
    graph::Graph,
    path::{enumerate_min_hop_paths, path_cost},
};

// A mock node implementation, has an address and stores peers with the latency to each.
struct Node {
    addr: SocketAddr,
    peers: HashMap<SocketAddr, Weight>,
}

impl Node {
    fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            peers: HashMap::new(),
        }
    }

    fn addr(&self) -> &SocketAddr {
        &self.addr
    }

    fn peers(&self) -> &HashMap<SocketAddr, Weight> {
        &self.peers
    }

    fn connect(&mut self, peer: &mut Node, latency_ms: Weight) {
        self.peers.insert(*peer.addr(), latency_ms);
        peer.peers.insert(*self.addr(), latency_ms);
    }
}

fn crawl(nodes: &[Node]) -> Graph<SocketAddr> {
    let mut graph = Graph::new();
    for node in nodes {
        for (peer, latency) in node.peers() {
            graph
                .insert(Edge::new(*node.addr(), *peer, *latency))
                .expect("latencies are positive");
        }
    }

    graph
}

fn main() {
    const N: usize = 6;
    let mut nodes: Vec<Node> = (0..N)
        .map(|i| Node::new(format!("127.0.0.1:100{i}").parse().unwrap()))
        .collect();

    // A ring where every link is slow, with a fast detour around the far side.
    for i in 0..N {
        let (left, right) = nodes.split_at_mut(i + 1);
        let current = &mut left[i];
        if let Some(next) = right.first_mut() {
            current.connect(next, if i < 2 { 50 } else { 5 });
        }
    }
    let (first, rest) = nodes.split_at_mut(1);
    first[0].connect(rest.last_mut().expect("vec has no last item"), 5);

    println!("\nCrawling network with {} nodes...", N);
    let graph = crawl(&nodes);
    println!(
        "Total connection count: {}, vertex count: {}",
        graph.edge_count(),
        graph.vertex_count()
    );

    let (source, destination) = (*nodes[0].addr(), *nodes[2].addr());

    // Lowest latency route.
    let fastest = dijkstra(&graph, source).expect("source was crawled");
    let path = fastest.path_to(&destination).expect("ring is connected");
    println!(
        "Fastest route: {:?} ({} ms, {} hops)",
        path,
        fastest.distance(&destination).unwrap_or_default(),
        path.len() - 1
    );

    // Fewest hops, priced by latency.
    let unit = graph.to_unit_weight();
    let hops = dijkstra(&unit, source).expect("source was crawled");
    for path in enumerate_min_hop_paths(&hops, &destination).expect("ring is connected") {
        let latency = path_cost(&graph, &path).expect("path follows crawled links");
        println!("Min-hop route: {:?} ({} ms)", path, latency);
    }
}
