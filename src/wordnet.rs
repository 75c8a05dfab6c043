//! WordNet noun hierarchy: synsets, hypernym edges and noun lookups on top of
//! [`Sap`].

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use ahash::AHashMap;
use tracing::debug;

use crate::{
    algo::validate_rooted_dag,
    config::SapConfig,
    errors::SapError,
    graph::{Digraph, DigraphBuilder, VertexId},
    sap::Sap,
};

pub struct WordNet {
    synsets: Vec<String>,
    noun_index: AHashMap<String, Vec<VertexId>>,
    root: VertexId,
    sap: Sap,
}

impl WordNet {
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        synsets: P,
        hypernyms: Q,
    ) -> Result<Self, SapError> {
        Self::from_files_with_config(synsets, hypernyms, &SapConfig::default())
    }

    pub fn from_files_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
        synsets: P,
        hypernyms: Q,
        config: &SapConfig,
    ) -> Result<Self, SapError> {
        let synsets = BufReader::new(File::open(synsets)?);
        let hypernyms = BufReader::new(File::open(hypernyms)?);
        Self::with_config(synsets, hypernyms, config)
    }

    pub fn from_readers<R: BufRead, S: BufRead>(synsets: R, hypernyms: S) -> Result<Self, SapError> {
        Self::with_config(synsets, hypernyms, &SapConfig::default())
    }

    pub fn with_config<R: BufRead, S: BufRead>(
        synsets: R,
        hypernyms: S,
        config: &SapConfig,
    ) -> Result<Self, SapError> {
        let synsets = parse_synsets(synsets)?;
        let graph = parse_hypernyms(hypernyms, synsets.len())?;
        let root = validate_rooted_dag(&graph)?;
        let noun_index = build_noun_index(&synsets);
        debug!(
            synsets = synsets.len(),
            nouns = noun_index.len(),
            edges = graph.edge_count(),
            root,
            "wordnet.loaded"
        );
        Ok(Self {
            synsets,
            noun_index,
            root,
            sap: Sap::with_config(Arc::new(graph), config),
        })
    }

    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.noun_index.keys().map(String::as_str)
    }

    pub fn noun_count(&self) -> usize {
        self.noun_index.len()
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.noun_index.contains_key(word)
    }

    pub fn synset(&self, id: VertexId) -> Option<&str> {
        self.synsets.get(id).map(String::as_str)
    }

    pub fn synset_ids(&self, noun: &str) -> Option<&[VertexId]> {
        self.noun_index.get(noun).map(Vec::as_slice)
    }

    pub fn root(&self) -> VertexId {
        self.root
    }

    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// Length of the shortest ancestral path between any synset of `noun_a`
    /// and any synset of `noun_b`.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<Option<usize>, SapError> {
        let a = self.lookup(noun_a)?;
        let b = self.lookup(noun_b)?;
        self.sap.length_between(a.iter().copied(), b.iter().copied())
    }

    /// Synset text of a common ancestor on a shortest ancestral path.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<Option<&str>, SapError> {
        let a = self.lookup(noun_a)?;
        let b = self.lookup(noun_b)?;
        let ancestor = self
            .sap
            .ancestor_between(a.iter().copied(), b.iter().copied())?;
        Ok(ancestor.and_then(|id| self.synset(id)))
    }

    fn lookup(&self, noun: &str) -> Result<&[VertexId], SapError> {
        self.synset_ids(noun)
            .ok_or_else(|| SapError::invalid_input(format!("{noun:?} is not a WordNet noun")))
    }
}

fn parse_synsets<R: BufRead>(reader: R) -> Result<Vec<String>, SapError> {
    let mut rows: Vec<(usize, VertexId, String)> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, ',');
        let id = parse_id(fields.next(), line_no, "synset id")?;
        let nouns = fields
            .next()
            .map(str::trim)
            .filter(|nouns| !nouns.is_empty())
            .ok_or_else(|| SapError::parse(line_no, "synset has no nouns"))?;
        rows.push((line_no, id, nouns.to_string()));
    }
    let count = rows.len();
    let mut synsets: Vec<Option<String>> = vec![None; count];
    for (line_no, id, nouns) in rows {
        let slot = synsets.get_mut(id).ok_or_else(|| {
            SapError::parse(line_no, format!("synset id {id} outside 0..{count}"))
        })?;
        if slot.is_some() {
            return Err(SapError::parse(line_no, format!("duplicate synset id {id}")));
        }
        *slot = Some(nouns);
    }
    // every slot is filled: `count` distinct ids below `count`
    Ok(synsets.into_iter().flatten().collect())
}

fn parse_hypernyms<R: BufRead>(reader: R, vertex_count: usize) -> Result<Digraph, SapError> {
    let mut builder = DigraphBuilder::new(vertex_count);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let from = parse_id(fields.next(), line_no, "synset id")?;
        for field in fields {
            let to = parse_id(Some(field), line_no, "hypernym id")?;
            builder
                .add_edge(from, to)
                .map_err(|e| SapError::parse(line_no, e.to_string()))?;
        }
    }
    Ok(builder.build())
}

fn parse_id(field: Option<&str>, line_no: usize, what: &str) -> Result<VertexId, SapError> {
    let raw = field
        .map(str::trim)
        .ok_or_else(|| SapError::parse(line_no, format!("missing {what}")))?;
    raw.parse::<VertexId>()
        .map_err(|_| SapError::parse(line_no, format!("invalid {what} {raw:?}")))
}

fn build_noun_index(synsets: &[String]) -> AHashMap<String, Vec<VertexId>> {
    let mut index: AHashMap<String, Vec<VertexId>> = AHashMap::new();
    for (id, nouns) in synsets.iter().enumerate() {
        for noun in nouns.split_whitespace() {
            index.entry(noun.to_string()).or_default().push(id);
        }
    }
    index
}
