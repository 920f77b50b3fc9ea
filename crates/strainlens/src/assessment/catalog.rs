use serde::{Deserialize, Serialize};

/// Upper bound of the normalized per-question score range.
pub const SCORE_SCALE: f64 = 10.0;

/// Lifestyle factor category aggregating several questions into one sub-score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Metabolic,
    Inflammatory,
    Cardiovascular,
    Hormonal,
    Stability,
}

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::Metabolic,
        Pillar::Inflammatory,
        Pillar::Cardiovascular,
        Pillar::Hormonal,
        Pillar::Stability,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::Metabolic => "Metabolic & Blood Sugar Load",
            Pillar::Inflammatory => "Inflammation & Cancer-Linked Habits",
            Pillar::Cardiovascular => "Cardiovascular Strain",
            Pillar::Hormonal => "Hormonal & Stress Load",
            Pillar::Stability => "Lifestyle Stability",
        }
    }
}

/// Identifier wrapper for catalog questions.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One selectable answer for a multiple-choice question. The value doubles as
/// the pre-scored 0-10 risk contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: f64,
    pub label: String,
}

/// How the question is presented and which raw values it accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionInput {
    Slider {
        min: f64,
        max: f64,
        step: f64,
        min_label: String,
        max_label: String,
    },
    Choice { options: Vec<ChoiceOption> },
}

/// Scoring transform expressed as data rather than per-question code, so
/// catalogs stay serializable and testable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreTransform {
    /// Linear scale from `min..=max` onto 0-10. `invert` marks questions where
    /// a higher raw value means healthier behavior.
    Linear { min: f64, max: f64, invert: bool },
    /// Choice options are pre-scored; the raw value is the score.
    Discrete,
}

impl ScoreTransform {
    /// Normalize one raw answer onto the 0-10 scale. Out-of-range and
    /// non-finite inputs are clamped rather than rejected; upstream UI
    /// constrains ranges but the engine must stay total.
    pub fn apply(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return 0.0;
        }
        let score = match self {
            ScoreTransform::Linear { min, max, invert } => {
                let scaled = (raw - min) / (max - min) * SCORE_SCALE;
                if *invert {
                    SCORE_SCALE - scaled
                } else {
                    scaled
                }
            }
            ScoreTransform::Discrete => raw,
        };
        score.clamp(0.0, SCORE_SCALE)
    }
}

/// A single assessment question: identity, pillar membership, presentation,
/// and its scoring transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub pillar: Pillar,
    pub text: String,
    pub input: QuestionInput,
    pub transform: ScoreTransform,
}

/// Ordered, immutable set of questions covering every pillar. Built once and
/// passed into the engine; tests inject synthetic catalogs the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The production 24-question catalog.
    pub fn standard() -> Self {
        let mut questions = Vec::new();

        // A. Metabolic & Blood Sugar Load
        questions.push(choice(
            "q1",
            Pillar::Metabolic,
            "How often do you consume sugary drinks (soda, sweetened teas, fruit juices)?",
            &[
                (0.0, "Never or rarely"),
                (3.0, "A few times a month"),
                (7.0, "A few times a week"),
                (10.0, "Daily or more"),
            ],
        ));
        questions.push(choice(
            "q2",
            Pillar::Metabolic,
            "How much of your diet consists of ultra-processed foods (e.g., packaged snacks, fast food, ready-to-eat meals)?",
            &[
                (0.0, "Less than 10%"),
                (4.0, "10-30%"),
                (7.0, "30-50%"),
                (10.0, "More than 50%"),
            ],
        ));
        questions.push(slider(
            "q3",
            Pillar::Metabolic,
            "How consistent is your meal timing from day to day?",
            0.0,
            10.0,
            1.0,
            "Very inconsistent",
            "Very consistent",
            true,
        ));
        questions.push(choice(
            "q4",
            Pillar::Metabolic,
            "How often do you experience significant energy crashes or \"afternoon slumps\"?",
            &[
                (0.0, "Rarely or never"),
                (4.0, "Once or twice a week"),
                (8.0, "Most days"),
                (10.0, "Multiple times a day"),
            ],
        ));
        questions.push(slider(
            "q5",
            Pillar::Metabolic,
            "On average, how many hours a day are you sedentary (sitting at a desk, watching TV)?",
            0.0,
            16.0,
            1.0,
            "0 hours",
            "16+ hours",
            false,
        ));

        // B. Inflammation & Cancer-Linked Habits
        questions.push(choice(
            "q6",
            Pillar::Inflammatory,
            "How frequently are you exposed to smoking or vaping (first or second-hand)?",
            &[(0.0, "Never"), (5.0, "Occasionally"), (10.0, "Daily")],
        ));
        questions.push(choice(
            "q7",
            Pillar::Inflammatory,
            "How many alcoholic drinks do you have in a typical week?",
            &[
                (0.0, "0"),
                (3.0, "1-3"),
                (7.0, "4-7"),
                (10.0, "More than 7"),
            ],
        ));
        questions.push(choice(
            "q8",
            Pillar::Inflammatory,
            "How many servings of red or processed meat (e.g., bacon, sausage, deli meats) do you eat per week?",
            &[
                (0.0, "0-1"),
                (4.0, "2-3"),
                (8.0, "4-6"),
                (10.0, "7 or more"),
            ],
        ));
        questions.push(slider(
            "q9",
            Pillar::Inflammatory,
            "How would you rate your daily fiber intake (from fruits, vegetables, whole grains)?",
            0.0,
            10.0,
            1.0,
            "Very low",
            "Very high",
            true,
        ));
        questions.push(slider(
            "q10",
            Pillar::Inflammatory,
            "How would you rate your level of chronic stress (ongoing pressure from work, relationships, etc.)?",
            0.0,
            10.0,
            1.0,
            "Very low",
            "Very high",
            false,
        ));

        // C. Cardiovascular Strain
        questions.push(choice(
            "q11",
            Pillar::Cardiovascular,
            "How many days a week do you get at least 30 minutes of moderate physical activity (e.g., brisk walking, cycling)?",
            &[
                (10.0, "0-1 days"),
                (7.0, "2-3 days"),
                (3.0, "4-5 days"),
                (0.0, "6-7 days"),
            ],
        ));
        questions.push(choice(
            "q12",
            Pillar::Cardiovascular,
            "How often do you feel fatigued or tired even after a full night's sleep?",
            &[
                (0.0, "Rarely or never"),
                (4.0, "Sometimes"),
                (8.0, "Often"),
                (10.0, "Almost always"),
            ],
        ));
        questions.push(choice(
            "q13",
            Pillar::Cardiovascular,
            "Do you experience breathlessness during light physical activity (e.g., walking up a single flight of stairs)?",
            &[(0.0, "Never"), (5.0, "Sometimes"), (10.0, "Frequently")],
        ));
        questions.push(choice(
            "q14",
            Pillar::Cardiovascular,
            "How often do you add salt to your food or eat high-sodium processed foods?",
            &[
                (0.0, "Rarely"),
                (4.0, "Sometimes"),
                (8.0, "Often"),
                (10.0, "Almost every meal"),
            ],
        ));
        // Lightly weighted on purpose: not knowing is a mild risk, not a habit.
        questions.push(choice(
            "q15",
            Pillar::Cardiovascular,
            "Are you aware of your family history regarding cardiovascular diseases (e.g., heart attack, stroke)?",
            &[
                (0.0, "Yes, and there is no significant history."),
                (1.0, "Yes, and there is a history."),
                (2.0, "No, I am not aware."),
            ],
        ));

        // D. Hormonal & Stress Load
        questions.push(slider(
            "q16",
            Pillar::Hormonal,
            "On a scale of 1 to 10, how would you rate your overall sleep quality?",
            1.0,
            10.0,
            1.0,
            "Very poor",
            "Excellent",
            true,
        ));
        questions.push(choice(
            "q17",
            Pillar::Hormonal,
            "How often do you feel restless, anxious, or \"on edge\" without a clear reason?",
            &[
                (0.0, "Rarely or never"),
                (4.0, "A few times a month"),
                (8.0, "A few times a week"),
                (10.0, "Most days"),
            ],
        ));
        questions.push(slider(
            "q18",
            Pillar::Hormonal,
            "How dependent do you feel on caffeine to get through the day?",
            0.0,
            10.0,
            1.0,
            "Not at all",
            "Completely dependent",
            false,
        ));
        questions.push(slider(
            "q19",
            Pillar::Hormonal,
            "How many hours of screen time (phone, computer, TV) do you have in the last 2 hours before bed?",
            0.0,
            4.0,
            0.5,
            "0 hours",
            "4+ hours",
            false,
        ));

        // E. Lifestyle Stability
        questions.push(slider(
            "q20",
            Pillar::Stability,
            "How consistent is your daily routine (wake-up time, work schedule, etc.)?",
            0.0,
            10.0,
            1.0,
            "Very chaotic",
            "Very consistent",
            true,
        ));
        questions.push(slider(
            "q21",
            Pillar::Stability,
            "How would you rate your current level of financial stress?",
            0.0,
            10.0,
            1.0,
            "No stress",
            "Extreme stress",
            false,
        ));
        questions.push(choice(
            "q22",
            Pillar::Stability,
            "How often do you feel rushed or under time pressure?",
            &[
                (0.0, "Rarely"),
                (4.0, "Sometimes"),
                (8.0, "Often"),
                (10.0, "Constantly"),
            ],
        ));
        questions.push(slider(
            "q23",
            Pillar::Stability,
            "How effectively can you regulate your emotions when faced with a setback?",
            0.0,
            10.0,
            1.0,
            "Not at all",
            "Very effectively",
            true,
        ));
        questions.push(slider(
            "q24",
            Pillar::Stability,
            "How strong is your social support network (friends, family you can confide in)?",
            0.0,
            10.0,
            1.0,
            "Very weak",
            "Very strong",
            true,
        ));

        Self { questions }
    }
}

fn choice(id: &str, pillar: Pillar, text: &str, options: &[(f64, &str)]) -> Question {
    Question {
        id: QuestionId::new(id),
        pillar,
        text: text.to_string(),
        input: QuestionInput::Choice {
            options: options
                .iter()
                .map(|(value, label)| ChoiceOption {
                    value: *value,
                    label: label.to_string(),
                })
                .collect(),
        },
        transform: ScoreTransform::Discrete,
    }
}

#[allow(clippy::too_many_arguments)]
fn slider(
    id: &str,
    pillar: Pillar,
    text: &str,
    min: f64,
    max: f64,
    step: f64,
    min_label: &str,
    max_label: &str,
    invert: bool,
) -> Question {
    Question {
        id: QuestionId::new(id),
        pillar,
        text: text.to_string(),
        input: QuestionInput::Slider {
            min,
            max,
            step,
            min_label: min_label.to_string(),
            max_label: max_label.to_string(),
        },
        transform: ScoreTransform::Linear { min, max, invert },
    }
}
