use std::{fs::File, io::BufReader, sync::Arc};

use serde_json::{Map, Value, json};

use crate::{
    algo::roots,
    client::CommandLineConfig,
    errors::SapError,
    graph::{Digraph, VertexId},
    outcast::Outcast,
    sap::Sap,
    wordnet::WordNet,
};

pub enum Dataset {
    WordNet(WordNet),
    Digraph(Sap),
}

impl Dataset {
    pub fn open(config: &CommandLineConfig) -> Result<Self, SapError> {
        let sap_config = config.sap_config()?;
        match (&config.synsets, &config.hypernyms, &config.digraph) {
            (Some(synsets), Some(hypernyms), _) => Ok(Dataset::WordNet(
                WordNet::from_files_with_config(synsets, hypernyms, &sap_config)?,
            )),
            (_, _, Some(path)) => {
                let graph = Digraph::from_reader(BufReader::new(File::open(path)?))?;
                Ok(Dataset::Digraph(Sap::with_config(Arc::new(graph), &sap_config)))
            }
            _ => Err(SapError::invalid_input(
                "either --digraph or --synsets with --hypernyms is required",
            )),
        }
    }

    pub fn sap(&self) -> &Sap {
        match self {
            Dataset::WordNet(wordnet) => wordnet.sap_engine(),
            Dataset::Digraph(sap) => sap,
        }
    }

    fn wordnet(&self, command: &str) -> Result<&WordNet, SapError> {
        match self {
            Dataset::WordNet(wordnet) => Ok(wordnet),
            Dataset::Digraph(_) => Err(SapError::invalid_input(format!(
                "{command} requires --synsets and --hypernyms"
            ))),
        }
    }
}

pub fn handle_command(
    dataset: &Dataset,
    command: &str,
    args: &[String],
) -> Result<String, SapError> {
    match command {
        "stats" => run_stats(dataset),
        "length" | "ancestor" => run_vertex_query(dataset, command, args),
        "distance" | "sap" => run_noun_query(dataset, command, args),
        "outcast" => run_outcast(dataset, args),
        "nouns" => run_nouns(dataset),
        other => Err(SapError::invalid_input(format!("unknown command {other}"))),
    }
}

fn run_stats(dataset: &Dataset) -> Result<String, SapError> {
    let sap = dataset.sap();
    let graph = sap.graph();
    let mut object = command_object("stats");
    object.insert("vertices".into(), json!(graph.vertex_count()));
    object.insert("edges".into(), json!(graph.edge_count()));
    object.insert("roots".into(), json!(roots(graph)));
    object.insert("cache_capacity".into(), json!(sap.cache_capacity()));
    if let Dataset::WordNet(wordnet) = dataset {
        object.insert("nouns".into(), json!(wordnet.noun_count()));
    }
    encode(object)
}

fn run_vertex_query(dataset: &Dataset, command: &str, args: &[String]) -> Result<String, SapError> {
    let [sources, targets] = two_args(command, args)?;
    let sources = parse_vertex_set(sources)?;
    let targets = parse_vertex_set(targets)?;
    let result = dataset
        .sap()
        .query(sources.iter().copied(), targets.iter().copied())?;
    let mut object = command_object(command);
    object.insert("sources".into(), json!(sources));
    object.insert("targets".into(), json!(targets));
    object.insert("length".into(), json!(result.length_or_sentinel()));
    object.insert("ancestor".into(), json!(result.ancestor_or_sentinel()));
    encode(object)
}

fn run_noun_query(dataset: &Dataset, command: &str, args: &[String]) -> Result<String, SapError> {
    let wordnet = dataset.wordnet(command)?;
    let [noun_a, noun_b] = two_args(command, args)?;
    let mut object = command_object(command);
    object.insert("nouns".into(), json!([noun_a, noun_b]));
    if command == "distance" {
        let distance = wordnet.distance(noun_a, noun_b)?;
        object.insert("distance".into(), json!(distance.map_or(-1, |d| d as i64)));
    } else {
        let ancestor = wordnet.sap(noun_a, noun_b)?;
        object.insert("ancestor".into(), json!(ancestor));
    }
    encode(object)
}

fn run_outcast(dataset: &Dataset, args: &[String]) -> Result<String, SapError> {
    let wordnet = dataset.wordnet("outcast")?;
    let nouns: Vec<&str> = args.iter().map(String::as_str).collect();
    let outcast = Outcast::new(wordnet).outcast(&nouns)?;
    let mut object = command_object("outcast");
    object.insert("nouns".into(), json!(nouns));
    object.insert("outcast".into(), json!(outcast));
    encode(object)
}

fn run_nouns(dataset: &Dataset) -> Result<String, SapError> {
    let wordnet = dataset.wordnet("nouns")?;
    let mut object = command_object("nouns");
    object.insert("count".into(), json!(wordnet.noun_count()));
    encode(object)
}

fn two_args<'a>(command: &str, args: &'a [String]) -> Result<[&'a str; 2], SapError> {
    match args {
        [a, b] => Ok([a.as_str(), b.as_str()]),
        _ => Err(SapError::invalid_input(format!(
            "{command} expects exactly two arguments, got {}",
            args.len()
        ))),
    }
}

/// Parses `"3,7,9"` into ids. An empty string is the empty set.
pub fn parse_vertex_set(raw: &str) -> Result<Vec<VertexId>, SapError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<VertexId>()
                .map_err(|_| SapError::invalid_input(format!("invalid vertex id {part:?}")))
        })
        .collect()
}

fn command_object(command: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("command".into(), Value::String(command.into()));
    object
}

fn encode(object: Map<String, Value>) -> Result<String, SapError> {
    serde_json::to_string(&Value::Object(object))
        .map_err(|e| SapError::invalid_input(e.to_string()))
}
