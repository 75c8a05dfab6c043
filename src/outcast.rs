use crate::{engine::NO_PATH_SENTINEL, errors::SapError, wordnet::WordNet};

pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The noun least related to the others: the one whose summed distance to
    /// every other entry is largest. The first noun wins ties.
    pub fn outcast<'n>(&self, nouns: &[&'n str]) -> Result<&'n str, SapError> {
        let mut best: Option<(i64, &'n str)> = None;
        for &noun in nouns {
            if !self.wordnet.is_noun(noun) {
                return Err(SapError::invalid_input(format!(
                    "{noun:?} is not a WordNet noun"
                )));
            }
            let total = self.distance_sum(noun, nouns)?;
            if best.is_none_or(|(max, _)| total > max) {
                best = Some((total, noun));
            }
        }
        best.map(|(_, noun)| noun)
            .ok_or_else(|| SapError::invalid_input("outcast needs at least one noun"))
    }

    /// Sum of distances from `noun` to each entry of `nouns` other than
    /// itself; a missing path counts as the `-1` sentinel.
    pub fn distance_sum(&self, noun: &str, nouns: &[&str]) -> Result<i64, SapError> {
        let mut total = 0i64;
        for &other in nouns {
            if other == noun {
                continue;
            }
            total += self
                .wordnet
                .distance(noun, other)?
                .map_or(NO_PATH_SENTINEL, |d| d as i64);
        }
        Ok(total)
    }
}
