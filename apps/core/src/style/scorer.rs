//! Lexicon scoring, axis percentages and label derivation.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::lexicon::{Axis, Lexicon, Trait};

/// Raw lexicon hit counts per trait letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleScores {
    counts: [usize; 8],
}

impl StyleScores {
    pub fn get(&self, t: Trait) -> usize {
        self.counts[t as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (letter, count) pairs in fixed E, I, S, N, T, F, J, P order
    pub fn iter(&self) -> impl Iterator<Item = (Trait, usize)> + '_ {
        Trait::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

impl Serialize for StyleScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Trait::ALL.len()))?;
        for (t, count) in self.iter() {
            map.serialize_entry(&t, &count)?;
        }
        map.end()
    }
}

/// Percentage split of one axis, first letter then second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSplit {
    pub axis: Axis,
    pub first: f64,
    pub second: f64,
}

impl AxisSplit {
    /// The winning letter. Ties go to the first letter of the pair.
    pub fn winner(&self) -> Trait {
        let (a, b) = self.axis.pair();
        if self.first >= self.second {
            a
        } else {
            b
        }
    }

    pub fn percent(&self, t: Trait) -> Option<f64> {
        let (a, b) = self.axis.pair();
        if t == a {
            Some(self.first)
        } else if t == b {
            Some(self.second)
        } else {
            None
        }
    }
}

impl Serialize for AxisSplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (a, b) = self.axis.pair();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&a, &self.first)?;
        map.serialize_entry(&b, &self.second)?;
        map.end()
    }
}

/// Per-axis percentages in label order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPercent {
    splits: [AxisSplit; 4],
}

impl AxisPercent {
    pub fn get(&self, axis: Axis) -> &AxisSplit {
        // splits are stored in Axis::ALL order
        &self.splits[axis as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisSplit> {
        self.splits.iter()
    }
}

impl Serialize for AxisPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.splits.len()))?;
        for split in &self.splits {
            map.serialize_entry(split.axis.name(), split)?;
        }
        map.end()
    }
}

/// Round to `digits` decimals, ties to even on the exact binary value.
///
/// Goes through exact decimal formatting so that values such as 6.25 land on
/// 6.2 and 0.35 (stored slightly below the tie) lands on 0.3.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Count lexicon hits per letter. Tokens must equal a trigger word exactly.
pub fn compute_scores(tokens: &[String], lexicon: &Lexicon) -> StyleScores {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut scores = StyleScores::default();
    for t in Trait::ALL {
        scores.counts[t as usize] = lexicon
            .words(t)
            .iter()
            .map(|w| freq.get(w.as_str()).copied().unwrap_or(0))
            .sum();
    }
    scores
}

/// Convert raw counts into a per-axis percentage split.
///
/// A pair with no hits on either side is 50/50. Otherwise each side is rounded
/// to one decimal independently, so the two values may not sum to exactly 100.
pub fn to_axis_percent(scores: &StyleScores) -> AxisPercent {
    let splits = Axis::ALL.map(|axis| {
        let (a, b) = axis.pair();
        let a_score = scores.get(a) as f64;
        let b_score = scores.get(b) as f64;
        let total = a_score + b_score;

        if total == 0.0 {
            AxisSplit {
                axis,
                first: 50.0,
                second: 50.0,
            }
        } else {
            AxisSplit {
                axis,
                first: round_to(a_score / total * 100.0, 1),
                second: round_to(b_score / total * 100.0, 1),
            }
        }
    });

    AxisPercent { splits }
}

/// Four-letter label, one winner per axis in E/I, S/N, T/F, J/P order
pub fn derive_label(axis_percent: &AxisPercent) -> String {
    axis_percent.iter().map(|s| s.winner().letter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compute_scores_counts_repeats() {
        let scores = compute_scores(&tokens("ㅋㅋ 같이 ㅋㅋ 혼자 계획 ㅋㅋ"), Lexicon::standard());

        assert_eq!(scores.get(Trait::E), 4);
        assert_eq!(scores.get(Trait::I), 1);
        assert_eq!(scores.get(Trait::J), 1);
        assert_eq!(scores.get(Trait::P), 0);
        assert_eq!(scores.total(), 6);
    }

    #[test]
    fn test_compute_scores_whole_token_only() {
        let scores = compute_scores(&tokens("같이있었어 계획적인 ㅋㅋㅋ"), Lexicon::standard());
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn test_compute_scores_case_sensitive() {
        let lexicon = Lexicon::from_table([&["Party"], &[], &[], &[], &[], &[], &[], &[]]);

        assert_eq!(compute_scores(&tokens("party PARTY"), &lexicon).get(Trait::E), 0);
        assert_eq!(compute_scores(&tokens("Party"), &lexicon).get(Trait::E), 1);
    }

    #[test]
    fn test_axis_percent_zero_total_is_even() {
        let percent = to_axis_percent(&StyleScores::default());

        for split in percent.iter() {
            assert_eq!(split.first, 50.0);
            assert_eq!(split.second, 50.0);
        }
    }

    #[test]
    fn test_axis_percent_rounding() {
        let scores = compute_scores(&tokens("같이 혼자 혼자"), Lexicon::standard());
        let split = *to_axis_percent(&scores).get(Axis::EI);

        assert_eq!(split.first, 33.3);
        assert_eq!(split.second, 66.7);
        assert_eq!(split.percent(Trait::I), Some(66.7));
        assert_eq!(split.percent(Trait::S), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333333, 1), 33.3);
        assert_eq!(round_to(66.666666, 1), 66.7);
        assert_eq!(round_to(100.0, 1), 100.0);
        assert_eq!(round_to(2.3333333, 2), 2.33);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_derive_label_ties_go_first() {
        let percent = to_axis_percent(&StyleScores::default());
        assert_eq!(derive_label(&percent), "ESTJ");
    }

    #[test]
    fn test_derive_label_second_letters() {
        let scores = compute_scores(
            &tokens("혼자 상상 마음 자유"),
            Lexicon::standard(),
        );
        assert_eq!(derive_label(&to_axis_percent(&scores)), "INFP");
    }

    #[test]
    fn test_serialized_shapes() {
        let scores = compute_scores(&tokens("같이 논리"), Lexicon::standard());
        let scores_json = serde_json::to_value(scores).unwrap();
        assert_eq!(scores_json["E"], 1);
        assert_eq!(scores_json["T"], 1);
        assert_eq!(scores_json["P"], 0);

        let percent_json = serde_json::to_value(to_axis_percent(&scores)).unwrap();
        assert_eq!(percent_json["EI"]["E"], 100.0);
        assert_eq!(percent_json["EI"]["I"], 0.0);
        assert_eq!(percent_json["SN"]["S"], 50.0);
    }
}
