use crate::{config::SapConfig, errors::SapError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub synsets: Option<String>,
    pub hypernyms: Option<String>,
    pub digraph: Option<String>,
    pub config: Option<String>,
    pub cache_capacity: Option<usize>,
    pub command: String,
    pub args: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = CommandLineConfig {
            command: String::from("stats"),
            ..Default::default()
        };
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--synsets" => config.synsets = Some(flag_value(&mut iter, "--synsets")?),
                "--hypernyms" => config.hypernyms = Some(flag_value(&mut iter, "--hypernyms")?),
                "--digraph" => config.digraph = Some(flag_value(&mut iter, "--digraph")?),
                "--config" => config.config = Some(flag_value(&mut iter, "--config")?),
                "--command" => config.command = flag_value(&mut iter, "--command")?,
                "--cache-capacity" => {
                    let raw = flag_value(&mut iter, "--cache-capacity")?;
                    let capacity = raw
                        .parse::<usize>()
                        .map_err(|_| format!("--cache-capacity expects a number, got {raw}"))?;
                    config.cache_capacity = Some(capacity);
                }
                other if other.starts_with("--") => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => config.args.push(arg.to_string()),
            }
        }
        match (&config.synsets, &config.hypernyms, &config.digraph) {
            (Some(_), Some(_), None) | (None, None, _) => Ok(config),
            (_, _, Some(_)) => Err("--digraph cannot be combined with --synsets/--hypernyms".into()),
            _ => Err("--synsets and --hypernyms must be given together".into()),
        }
    }

    /// Defaults, then the `--config` file, then `--cache-capacity`.
    pub fn sap_config(&self) -> Result<SapConfig, SapError> {
        let mut config = match &self.config {
            Some(path) => SapConfig::from_path(path)?,
            None => SapConfig::default(),
        };
        if let Some(capacity) = self.cache_capacity {
            config.cache_capacity = capacity;
        }
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: sapgraph (--synsets PATH --hypernyms PATH | --digraph PATH) \
         [--config PATH] [--cache-capacity N] [--command CMD] [ARGS...]\n\
         Commands:\n  \
         stats                    graph summary\n  \
         length A B / ancestor A B  vertex sets as comma-separated ids\n  \
         distance N M / sap N M   WordNet nouns\n  \
         outcast N...             WordNet nouns\n  \
         nouns                    WordNet noun count\n"
    }
}

fn flag_value<'a, 'b: 'a>(
    iter: &mut impl Iterator<Item = &'a &'b str>,
    flag: &str,
) -> Result<String, String> {
    iter.next()
        .map(|value| value.to_string())
        .ok_or_else(|| format!("{flag} requires a value"))
}
