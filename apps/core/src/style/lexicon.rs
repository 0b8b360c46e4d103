//! Trait letters, axis pairs and the trigger-word lexicon.
//!
//! The lexicon is a fixed table compiled into the binary. It is built once on
//! first use and only ever read afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// One of the eight trait letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Trait {
    /// All letters in fixed order: E, I, S, N, T, F, J, P
    pub const ALL: [Trait; 8] = [
        Trait::E,
        Trait::I,
        Trait::S,
        Trait::N,
        Trait::T,
        Trait::F,
        Trait::J,
        Trait::P,
    ];

    pub fn letter(&self) -> char {
        match self {
            Trait::E => 'E',
            Trait::I => 'I',
            Trait::S => 'S',
            Trait::N => 'N',
            Trait::T => 'T',
            Trait::F => 'F',
            Trait::J => 'J',
            Trait::P => 'P',
        }
    }

    /// The axis this letter belongs to
    pub fn axis(&self) -> Axis {
        match self {
            Trait::E | Trait::I => Axis::EI,
            Trait::S | Trait::N => Axis::SN,
            Trait::T | Trait::F => Axis::TF,
            Trait::J | Trait::P => Axis::JP,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the four opposing pairs. The first letter of each pair wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    EI,
    SN,
    TF,
    JP,
}

impl Axis {
    /// Axes in label order
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// (first, second) letters of the pair
    pub fn pair(&self) -> (Trait, Trait) {
        match self {
            Axis::EI => (Trait::E, Trait::I),
            Axis::SN => (Trait::S, Trait::N),
            Axis::TF => (Trait::T, Trait::F),
            Axis::JP => (Trait::J, Trait::P),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axis::EI => "EI",
            Axis::SN => "SN",
            Axis::TF => "TF",
            Axis::JP => "JP",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extraversion markers: company, laughter, going out
const WORDS_E: &[&str] = &["같이", "여러분", "ㅋㅋ", "ㅎㅎ", "재밌", "만나", "축구", "술", "사람들"];
/// Introversion markers: solitude, home, reflection
const WORDS_I: &[&str] = &["혼자", "집", "조용", "생각", "책", "내향", "혼밥", "방구석"];
const WORDS_S: &[&str] = &["사실", "구체", "현실", "데이터", "수치", "경험적으로"];
const WORDS_N: &[&str] = &["아이디어", "영감", "가능성", "미래", "상상", "컨셉"];
const WORDS_T: &[&str] = &["논리", "효율", "합리", "분석", "객관", "결론"];
const WORDS_F: &[&str] = &["감정", "공감", "기분", "따뜻", "기억", "마음", "사랑"];
const WORDS_J: &[&str] = &["계획", "마감", "정리", "목표", "루틴", "체계", "일정"];
const WORDS_P: &[&str] = &["즉흥", "대충", "나중에", "유연", "자유", "그때그때"];

static STANDARD_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_table([
        WORDS_E, WORDS_I, WORDS_S, WORDS_N, WORDS_T, WORDS_F, WORDS_J, WORDS_P,
    ])
});

/// Immutable mapping from trait letter to trigger words
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Indexed by `Trait` discriminant
    words: [Vec<String>; 8],
}

impl Lexicon {
    /// The built-in Korean lexicon shared by every analysis
    pub fn standard() -> &'static Lexicon {
        &STANDARD_LEXICON
    }

    /// Build a lexicon from per-letter word lists in `Trait::ALL` order
    pub fn from_table(table: [&[&str]; 8]) -> Self {
        Self {
            words: table.map(|list| list.iter().map(|w| w.to_string()).collect()),
        }
    }

    /// Trigger words for one letter
    pub fn words(&self, t: Trait) -> &[String] {
        &self.words[t.index()]
    }

    /// Letters that list `word` as an exact trigger
    pub fn traits_of(&self, word: &str) -> Vec<Trait> {
        Trait::ALL
            .into_iter()
            .filter(|t| self.words(*t).iter().any(|w| w == word))
            .collect()
    }

    /// Total number of entries across all letters
    pub fn len(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_order_and_letters() {
        let letters: String = Trait::ALL.iter().map(|t| t.letter()).collect();
        assert_eq!(letters, "EISNTFJP");
    }

    #[test]
    fn test_axis_pairs() {
        for axis in Axis::ALL {
            let (a, b) = axis.pair();
            assert_eq!(a.axis(), axis);
            assert_eq!(b.axis(), axis);
            assert_eq!(format!("{}{}", a, b), axis.name());
        }
    }

    #[test]
    fn test_standard_lexicon_contents() {
        let lexicon = Lexicon::standard();

        assert_eq!(lexicon.words(Trait::E).len(), 9);
        assert_eq!(lexicon.words(Trait::F).len(), 7);
        assert!(lexicon.words(Trait::E).iter().any(|w| w == "ㅋㅋ"));
        assert!(lexicon.words(Trait::P).iter().any(|w| w == "그때그때"));
        assert_eq!(lexicon.len(), 55);
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn test_traits_of_exact_match() {
        let lexicon = Lexicon::standard();

        assert_eq!(lexicon.traits_of("계획"), vec![Trait::J]);
        assert_eq!(lexicon.traits_of("혼자"), vec![Trait::I]);
        assert!(lexicon.traits_of("계획적").is_empty());
        assert!(lexicon.traits_of("").is_empty());
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_table([
            &["party"],
            &["alone"],
            &[],
            &[],
            &[],
            &[],
            &[],
            &[],
        ]);

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.traits_of("party"), vec![Trait::E]);
        assert!(lexicon.words(Trait::S).is_empty());
    }
}
