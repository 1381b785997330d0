//! Static undirected networks in compressed adjacency form.
//!
//! A [`Network`] stores every node's neighbour list in one flat array
//! indexed by an offsets table (CSR layout). It is built once and then
//! shared read-only by every percolation trial.
//!
//! # Input formats
//!
//! - **Native**: `N M`, then `N` degrees (one per node), then `M` edges
//!   `j k` with 0-based indices. Tokens are whitespace separated; line
//!   breaks carry no meaning.
//! - **Edge list**: one edge per line as two labels of arbitrary text.
//!   Labels are numbered in order of first appearance, `#` starts a
//!   comment, and repeated edges are collapsed.
//!
//! Neighbour order matters for reproducibility: for an edge `j k`, `j` is
//! appended to `k`'s list before `k` is appended to `j`'s.

use std::collections::{HashMap, HashSet};
use std::io::Read;

/// Error type for network construction and parsing.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("failed to read network: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected}, found {found:?}")]
    InvalidToken {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("node index {node} out of range for a network of {count} nodes")]
    NodeOutOfRange { node: usize, count: usize },

    #[error("node {node}: declared degree {declared} but the edge list gives {actual}")]
    DegreeTooSmall {
        node: usize,
        declared: usize,
        actual: usize,
    },

    #[error("line {line}: an edge needs two node labels")]
    MalformedEdge { line: usize },

    #[error("{count} nodes exceed the 32-bit sampling range")]
    TooManyNodes { count: usize },
}

/// Undirected network with a fixed node set and CSR adjacency.
///
/// # Examples
/// ```
/// use u_percolation::network::Network;
///
/// let ring = Network::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// assert_eq!(ring.node_count(), 4);
/// assert_eq!(ring.edge_count(), 4);
/// assert_eq!(ring.neighbors(0), &[1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    edges: usize,
}

impl Network {
    /// Builds a network of `n` nodes from an edge list.
    ///
    /// Self-loops and repeated edges are kept as given.
    ///
    /// # Errors
    /// Returns `Err` if an endpoint is `>= n` or `n` exceeds `u32::MAX`.
    ///
    /// # Complexity
    /// Time: O(n + m), Space: O(n + m)
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, NetworkError> {
        if u32::try_from(n).is_err() {
            return Err(NetworkError::TooManyNodes { count: n });
        }

        let mut degree = vec![0_usize; n];
        for &(j, k) in edges {
            for node in [j, k] {
                if node >= n {
                    return Err(NetworkError::NodeOutOfRange { node, count: n });
                }
            }
            degree[j] += 1;
            degree[k] += 1;
        }

        let mut offsets = Vec::with_capacity(n + 1);
        let mut total = 0;
        offsets.push(total);
        for d in &degree {
            total += d;
            offsets.push(total);
        }

        let mut cursor = offsets[..n].to_vec();
        let mut targets = vec![0; 2 * edges.len()];
        for &(j, k) in edges {
            targets[cursor[k]] = j;
            cursor[k] += 1;
            targets[cursor[j]] = k;
            cursor[j] += 1;
        }

        Ok(Self {
            offsets,
            targets,
            edges: edges.len(),
        })
    }

    /// Parses the native degree-list format.
    ///
    /// A declared degree is a capacity hint: it may exceed the number of
    /// edge endpoints at that node but not fall short of it. Tokens after
    /// the last edge are ignored.
    ///
    /// # Examples
    /// ```
    /// use u_percolation::network::Network;
    ///
    /// let net = Network::parse_native("3 2\n1\n2\n1\n0 1\n1 2\n").unwrap();
    /// assert_eq!(net.neighbors(1), &[0, 2]);
    /// ```
    pub fn parse_native(input: &str) -> Result<Self, NetworkError> {
        let mut tokens = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));

        let n = next_index(&mut tokens, "node count")?;
        let m = next_index(&mut tokens, "edge count")?;

        let mut declared = Vec::with_capacity(n);
        for _ in 0..n {
            declared.push(next_index(&mut tokens, "node degree")?);
        }

        let mut edges = Vec::with_capacity(m);
        for _ in 0..m {
            let j = next_index(&mut tokens, "edge endpoint")?;
            let k = next_index(&mut tokens, "edge endpoint")?;
            edges.push((j, k));
        }

        let network = Self::from_edges(n, &edges)?;
        for (node, &declared) in declared.iter().enumerate() {
            let actual = network.degree(node);
            if actual > declared {
                return Err(NetworkError::DegreeTooSmall {
                    node,
                    declared,
                    actual,
                });
            }
        }
        Ok(network)
    }

    /// Parses a whitespace-separated edge list with arbitrary node labels.
    ///
    /// Extra columns after the two labels (e.g. weights) are ignored.
    ///
    /// # Examples
    /// ```
    /// use u_percolation::network::Network;
    ///
    /// let net = Network::parse_edge_list("# ring\na b\nb c\nc a\nb a\n").unwrap();
    /// assert_eq!(net.node_count(), 3);
    /// assert_eq!(net.edge_count(), 3);
    /// ```
    pub fn parse_edge_list(input: &str) -> Result<Self, NetworkError> {
        let mut labels: HashMap<&str, usize> = HashMap::new();
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();

        for (i, raw) in input.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let Some(a) = fields.next() else {
                continue;
            };
            let Some(b) = fields.next() else {
                return Err(NetworkError::MalformedEdge { line: i + 1 });
            };

            let mut label = |name| {
                let next = labels.len();
                *labels.entry(name).or_insert(next)
            };
            let (j, k) = (label(a), label(b));
            if seen.insert((j.min(k), j.max(k))) {
                edges.push((j, k));
            }
        }

        Self::from_edges(labels.len(), &edges)
    }

    /// Reads the native format from `reader`.
    pub fn read_native<R: Read>(mut reader: R) -> Result<Self, NetworkError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse_native(&input)
    }

    /// Reads an edge list from `reader`.
    pub fn read_edge_list<R: Read>(mut reader: R) -> Result<Self, NetworkError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse_edge_list(&input)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of edges (self-loops and repeats included).
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Degree of `node`.
    ///
    /// # Panics
    /// Panics if `node >= node_count()`.
    pub fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Neighbours of `node` in edge-record order.
    ///
    /// # Panics
    /// Panics if `node >= node_count()`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }
}

fn next_index<'a, I>(tokens: &mut I, expected: &'static str) -> Result<usize, NetworkError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let (line, token) = tokens
        .next()
        .ok_or(NetworkError::UnexpectedEof { expected })?;
    token.parse().map_err(|_| NetworkError::InvalidToken {
        line,
        expected,
        found: token.to_owned(),
    })
}
