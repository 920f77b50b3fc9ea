//! End-to-end specifications for the assessment scoring engine.
//!
//! Scenarios exercise the public engine surface only: catalog plus rubric in,
//! result data out. Fixtures derive extreme and mixed answer sets from the
//! standard catalog instead of hard-coding raw values per question.

mod common {
    use strainlens::assessment::{
        AnswerSet, ChoiceOption, QuestionCatalog, QuestionInput, ScoreTransform,
    };

    fn lowest_risk_option(options: &[ChoiceOption]) -> f64 {
        options
            .iter()
            .map(|option| option.value)
            .fold(f64::INFINITY, f64::min)
    }

    fn highest_risk_option(options: &[ChoiceOption]) -> f64 {
        options
            .iter()
            .map(|option| option.value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Every slider at its healthiest extreme, every choice at its
    /// lowest-risk option.
    pub(super) fn healthiest_answers(catalog: &QuestionCatalog) -> AnswerSet {
        catalog
            .questions()
            .iter()
            .map(|question| {
                let raw = match (&question.input, &question.transform) {
                    (QuestionInput::Choice { options }, _) => lowest_risk_option(options),
                    (
                        QuestionInput::Slider { min, max, .. },
                        ScoreTransform::Linear { invert, .. },
                    ) => {
                        if *invert {
                            *max
                        } else {
                            *min
                        }
                    }
                    (QuestionInput::Slider { min, .. }, ScoreTransform::Discrete) => *min,
                };
                (question.id.clone(), raw)
            })
            .collect()
    }

    /// Every answer at its riskiest extreme.
    pub(super) fn riskiest_answers(catalog: &QuestionCatalog) -> AnswerSet {
        catalog
            .questions()
            .iter()
            .map(|question| {
                let raw = match (&question.input, &question.transform) {
                    (QuestionInput::Choice { options }, _) => highest_risk_option(options),
                    (
                        QuestionInput::Slider { min, max, .. },
                        ScoreTransform::Linear { invert, .. },
                    ) => {
                        if *invert {
                            *min
                        } else {
                            *max
                        }
                    }
                    (QuestionInput::Slider { max, .. }, ScoreTransform::Discrete) => *max,
                };
                (question.id.clone(), raw)
            })
            .collect()
    }
}

use strainlens::assessment::{AnswerSet, Pillar, QuestionId, RiskFlag, ScoringEngine};

#[test]
fn healthiest_extreme_scores_at_the_bottom() {
    let engine = ScoringEngine::standard();
    let answers = common::healthiest_answers(engine.catalog());

    let result = engine.calculate_scores(&answers);

    assert_eq!(result.strain_index, 0);
    assert_eq!(result.tier.name, "Low Strain");
    assert!(result.risk_flags.is_empty());
    for pillar in Pillar::ALL {
        assert_eq!(result.pillar_scores.get(&pillar), Some(&0.0));
    }
}

#[test]
fn riskiest_extreme_reaches_the_top_band_and_the_flag_cap() {
    let engine = ScoringEngine::standard();
    let answers = common::riskiest_answers(engine.catalog());

    let result = engine.calculate_scores(&answers);

    // The family-history choice tops out at 2 of 10 points, so the composite
    // sits just under 100.
    assert!(result.strain_index >= 90);
    assert!(result.strain_index <= 100);
    assert_eq!(result.tier.name, "Critical Load");
    assert_eq!(
        result.risk_flags,
        vec![
            RiskFlag::SystemicStrain,
            RiskFlag::CardiovascularStrain,
            RiskFlag::InflammatoryRisk,
        ]
    );
}

#[test]
fn strain_index_stays_in_range_for_assorted_answer_sets() {
    let engine = ScoringEngine::standard();
    let catalog = engine.catalog().clone();

    for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|question| (question.id.clone(), 10.0 * fraction))
            .collect();
        let result = engine.calculate_scores(&answers);
        assert!(result.strain_index <= 100);
        assert!(result.risk_flags.len() <= 3);
        let mut unique = result.risk_flags.clone();
        unique.dedup();
        assert_eq!(unique, result.risk_flags);
    }
}

#[test]
fn identical_answers_produce_identical_results() {
    let engine = ScoringEngine::standard();
    let answers = common::riskiest_answers(engine.catalog());

    let first = engine.calculate_scores(&answers);
    let second = engine.calculate_scores(&answers);

    assert_eq!(first, second);
}

#[test]
fn unanswered_questions_are_omitted_not_penalized() {
    let engine = ScoringEngine::standard();

    // Only two metabolic answers, both maximal.
    let mut answers = AnswerSet::new();
    answers.insert(QuestionId::new("q1"), 10.0);
    answers.insert(QuestionId::new("q2"), 10.0);

    let result = engine.calculate_scores(&answers);

    assert_eq!(result.pillar_scores.get(&Pillar::Metabolic), Some(&100.0));
    assert_eq!(result.pillar_scores.get(&Pillar::Stability), Some(&0.0));
    // One pillar at 100 out of five equal weights.
    assert_eq!(result.strain_index, 20);
    assert_eq!(result.tier.name, "Low Strain");
}

#[test]
fn primary_drivers_rank_by_score_with_catalog_order_ties() {
    let engine = ScoringEngine::standard();

    let mut answers = AnswerSet::new();
    answers.insert(QuestionId::new("q1"), 10.0);
    answers.insert(QuestionId::new("q2"), 10.0);
    answers.insert(QuestionId::new("q5"), 8.0); // linear 0..16 -> 5.0
    answers.insert(QuestionId::new("q7"), 3.0);

    let result = engine.calculate_scores(&answers);
    let drivers = &result.primary_risk_drivers;

    assert_eq!(drivers.len(), 3);
    // q1 and q2 tie at 10; catalog order breaks the tie.
    assert_eq!(drivers[0].question_id, QuestionId::new("q1"));
    assert_eq!(drivers[1].question_id, QuestionId::new("q2"));
    assert_eq!(drivers[2].question_id, QuestionId::new("q5"));
    assert!(drivers[0].answer_value >= drivers[1].answer_value);
    assert!(drivers[1].answer_value >= drivers[2].answer_value);
    assert!(!drivers[0].question_text.is_empty());
}

#[test]
fn answer_token_round_trip_feeds_the_engine_unchanged() {
    let engine = ScoringEngine::standard();
    let answers = common::riskiest_answers(engine.catalog());

    let token = answers.encode_token().expect("token encodes");
    let decoded = AnswerSet::decode_token(&token).expect("token decodes");

    assert_eq!(decoded, answers);
    assert_eq!(
        engine.calculate_scores(&decoded),
        engine.calculate_scores(&answers)
    );
}

#[test]
fn out_of_range_answers_are_clamped_not_rejected() {
    let engine = ScoringEngine::standard();

    let mut answers = AnswerSet::new();
    answers.insert(QuestionId::new("q5"), 500.0);
    answers.insert(QuestionId::new("q3"), -42.0);

    let result = engine.calculate_scores(&answers);

    // q5 clamps to 10, q3 (reverse scored) clamps to 10 as well.
    assert_eq!(result.pillar_scores.get(&Pillar::Metabolic), Some(&100.0));
    assert!(result.strain_index <= 100);
}
