use crate::Instrument;
use crate::scoring::{Ladder, Question, Scale, band};

/// MMSE: Mini-Mental State Examination, orientation screening form.
/// 5 items rated correct (1) / incorrect (0) by the examiner. The ladder
/// spans the full 0–30 clinical MMSE scale; every total reachable from the
/// screening form falls in its lowest band.
pub struct Mmse;

impl Instrument for Mmse {
    fn id(&self) -> &str {
        "mmse"
    }

    fn name(&self) -> &str {
        "MMSE"
    }

    fn description(&self) -> &str {
        "Mini-Mental State Examination: brief cognitive status screening"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let scored = [("Correct answer", 1), ("Incorrect answer", 0)];

            [
                "What year is it?",
                "What season is it?",
                "What is today's date?",
                "What day of the week is it?",
                "What month is it?",
            ]
            .iter()
            .map(|prompt| Question::new(prompt, &scored))
            .collect()
        });
        &QUESTIONS
    }

    fn ladder(&self) -> &Ladder {
        static LADDER: std::sync::LazyLock<Ladder> = std::sync::LazyLock::new(|| Ladder {
            scale: Scale::Raw,
            domain_max: 30,
            bands: vec![
                band(0, 10, "Severe dementia (0-10 points)"),
                band(11, 19, "Moderate dementia (11-19 points)"),
                band(20, 23, "Mild dementia (20-23 points)"),
                band(24, 27, "Pre-dementia cognitive impairment (24-27 points)"),
                band(
                    28,
                    30,
                    "Normal (28-30 points): cognitive function within normal limits",
                ),
            ],
        });
        &LADDER
    }
}
