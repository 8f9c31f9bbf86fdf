use crate::Instrument;
use crate::scoring::{Ladder, Question, Scale, band};

/// HADS: Hospital Anxiety and Depression Scale, short screening form.
/// 5 self-report items scored 0–3. Positively worded items are
/// reverse-keyed; their options carry the pre-computed scores, so the
/// total is a plain sum.
pub struct Hads;

impl Instrument for Hads {
    fn id(&self) -> &str {
        "hads"
    }

    fn name(&self) -> &str {
        "HADS"
    }

    fn description(&self) -> &str {
        "Hospital Anxiety and Depression Scale"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                Question::new(
                    "I feel tense or wound up",
                    &[
                        ("All of the time", 3),
                        ("A lot of the time", 2),
                        ("From time to time", 1),
                        ("Not at all", 0),
                    ],
                ),
                Question::new(
                    "I still enjoy the things I used to enjoy",
                    &[
                        ("Definitely as much", 0),
                        ("Not quite so much", 1),
                        ("Only a little", 2),
                        ("Hardly at all", 3),
                    ],
                ),
                Question::new(
                    "I get a sort of frightened feeling as if something awful is about to happen",
                    &[
                        ("Very definitely and quite badly", 3),
                        ("Yes, but not too badly", 2),
                        ("A little, but it doesn't worry me", 1),
                        ("Not at all", 0),
                    ],
                ),
                Question::new(
                    "I can laugh and see the funny side of things",
                    &[
                        ("As much as I always could", 0),
                        ("Not quite so much now", 1),
                        ("Definitely not so much now", 2),
                        ("Not at all", 3),
                    ],
                ),
                Question::new(
                    "Worrying thoughts go through my mind",
                    &[
                        ("A great deal of the time", 3),
                        ("A lot of the time", 2),
                        ("From time to time", 1),
                        ("Only occasionally", 0),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }

    fn ladder(&self) -> &Ladder {
        static LADDER: std::sync::LazyLock<Ladder> = std::sync::LazyLock::new(|| Ladder {
            scale: Scale::Raw,
            domain_max: 15,
            bands: vec![
                band(
                    0,
                    7,
                    "Normal (0-7 points): no clinically significant anxiety or depression",
                ),
                band(8, 10, "Subclinical anxiety/depression (8-10 points)"),
                band(11, 15, "Clinical anxiety/depression (11+ points)"),
            ],
        });
        &LADDER
    }
}
