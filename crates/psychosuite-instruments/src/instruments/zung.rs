use crate::Instrument;
use crate::scoring::{Ladder, Question, Scale, band};

const FREQUENCY_OPTIONS: [&str; 4] = [
    "Never or rarely",
    "Sometimes",
    "Often",
    "Almost always or constantly",
];

/// Item prompts with their keying direction. Reverse-keyed items are the
/// positively worded ones; their options score 4 down to 1 instead of
/// 1 up to 4.
const ITEMS: [(&str, bool); 20] = [
    ("I feel down-hearted, sad and blue", false),
    ("Morning is when I feel the best", true),
    ("I have crying spells or feel like crying", false),
    ("I have trouble sleeping at night", false),
    ("I eat as much as I used to", true),
    ("I still enjoy the company of attractive people", true),
    ("I notice that I am losing weight", false),
    ("I have trouble with constipation", false),
    ("My heart beats faster than usual", false),
    ("I get tired for no reason", false),
    ("My mind is as clear as it used to be", true),
    ("I find it easy to do the things I used to do", true),
    ("I am restless and can't keep still", false),
    ("I feel hopeful about the future", true),
    ("I am more irritable than usual", false),
    ("I find it easy to make decisions", true),
    ("I feel that I am useful and needed", true),
    ("My life is pretty full", true),
    ("I feel that others would be better off if I were dead", false),
    ("I still enjoy the things I used to do", true),
];

/// Zung SDS: Self-Rating Depression Scale. 20 self-report items rated on a
/// four-step frequency scale; raw totals (20–80) are normalized to a
/// 0–100 depression index before classification.
pub struct Zung;

impl Instrument for Zung {
    fn id(&self) -> &str {
        "zung"
    }

    fn name(&self) -> &str {
        "Zung SDS"
    }

    fn description(&self) -> &str {
        "Zung Self-Rating Depression Scale"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            ITEMS
                .iter()
                .map(|(prompt, reverse)| {
                    let options: Vec<(&str, u32)> = FREQUENCY_OPTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, text)| {
                            let score = if *reverse { 4 - i as u32 } else { i as u32 + 1 };
                            (*text, score)
                        })
                        .collect();
                    Question::new(prompt, &options)
                })
                .collect()
        });
        &QUESTIONS
    }

    fn ladder(&self) -> &Ladder {
        static LADDER: std::sync::LazyLock<Ladder> = std::sync::LazyLock::new(|| Ladder {
            scale: Scale::Index { raw_max: 80 },
            domain_max: 100,
            bands: vec![
                band(0, 49, "Within normal range"),
                band(50, 59, "Mild depression"),
                band(60, 69, "Moderate depression"),
                band(70, 100, "Severe depression"),
            ],
        });
        &LADDER
    }
}
