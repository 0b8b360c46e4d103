//! Preset sample texts offered by the dashboard sidebar.

use serde::Serialize;

/// A preset the user can load into the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub key: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        key: "extraverted",
        title: "외향적인 말투",
        text: "오늘 진짜 사람들 만나서 수다 떨고 맛있는 거 먹고, 완전 신나게 놀았어 ㅋㅋ 다음에 또 같이 가자!",
    },
    Sample {
        key: "introverted",
        title: "내향적인 말투",
        text: "요즘에는 집에서 혼자 책 읽고 생각 정리하는 시간이 제일 편한 것 같아. 사람 많은 곳은 조금 힘들어.",
    },
    Sample {
        key: "emotional",
        title: "감정 폭발형",
        text: "솔직히 오늘 일 너무 상처였어. 나름 열심히 했는데 그런 말을 들으니까 마음이 좀 무너지는 느낌이야.",
    },
    Sample {
        key: "planner",
        title: "계획적인 스타일",
        text: "이번 주는 월요일에 계획 세우고, 화요일까지 자료 정리 끝내고, 수요일에는 발표 연습까지 마무리할 생각이야.",
    },
];

pub fn find(key: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.key == key)
}
