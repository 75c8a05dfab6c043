use std::io::BufRead;

use crate::errors::SapError;

pub type VertexId = usize;

/// Immutable directed graph over dense vertex ids `0..V`.
///
/// Neighbor lists keep insertion order. Build one through [`DigraphBuilder`],
/// [`Digraph::from_edges`] or [`Digraph::from_reader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Digraph {
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, SapError> {
        let mut builder = DigraphBuilder::new(vertex_count);
        for &(from, to) in edges {
            builder.add_edge(from, to)?;
        }
        Ok(builder.build())
    }

    /// Reads the plain-text digraph format: vertex count, edge count, then
    /// one `from to` pair per edge. Tokens may be split across lines freely.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SapError> {
        let mut tokens = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            for token in line.split_whitespace() {
                tokens.push((idx + 1, token.to_string()));
            }
        }
        let mut iter = tokens.into_iter();
        let vertex_count = next_number(&mut iter, "vertex count")?;
        let edge_count = next_number(&mut iter, "edge count")?;
        let mut builder = DigraphBuilder::new(vertex_count);
        for _ in 0..edge_count {
            let (line, from) = next_number_at(&mut iter, "edge source")?;
            let (_, to) = next_number_at(&mut iter, "edge target")?;
            builder
                .add_edge(from, to)
                .map_err(|e| SapError::parse(line, e.to_string()))?;
        }
        if let Some((line, extra)) = iter.next() {
            return Err(SapError::parse(
                line,
                format!("unexpected trailing token {extra:?}"),
            ));
        }
        Ok(builder.build())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.adjacency.len()
    }

    /// Outgoing neighbors of `v`. Panics if `v` is out of range; callers
    /// validate ids first.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    pub fn outdegree(&self, v: VertexId) -> usize {
        self.adjacency[v].len()
    }

    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }
}

#[derive(Debug, Clone)]
pub struct DigraphBuilder {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl DigraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<&mut Self, SapError> {
        let count = self.adjacency.len();
        if from >= count || to >= count {
            return Err(SapError::invalid_input(format!(
                "edge {from}->{to} outside vertex range 0..{count}"
            )));
        }
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(self)
    }

    pub fn build(self) -> Digraph {
        Digraph {
            adjacency: self.adjacency,
            edge_count: self.edge_count,
        }
    }
}

fn next_number(
    iter: &mut impl Iterator<Item = (usize, String)>,
    what: &str,
) -> Result<usize, SapError> {
    next_number_at(iter, what).map(|(_, value)| value)
}

fn next_number_at(
    iter: &mut impl Iterator<Item = (usize, String)>,
    what: &str,
) -> Result<(usize, usize), SapError> {
    let (line, token) = iter
        .next()
        .ok_or_else(|| SapError::parse(0, format!("missing {what}")))?;
    let value = token
        .parse::<usize>()
        .map_err(|_| SapError::parse(line, format!("invalid {what} {token:?}")))?;
    Ok((line, value))
}
