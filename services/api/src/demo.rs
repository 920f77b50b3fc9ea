use std::fs;
use std::path::PathBuf;

use clap::Args;
use strainlens::assessment::{
    AnswerSet, AnswerTokenError, Pillar, QuestionCatalog, QuestionId, ResultData, ScoringEngine,
};
use strainlens::config::AppConfig;
use strainlens::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an answer set ({"q1": 7.0, ...})
    #[arg(long, conflicts_with = "token")]
    pub(crate) answers: Option<PathBuf>,
    /// Base64 answer token as produced by the quiz step
    #[arg(long)]
    pub(crate) token: Option<String>,
    /// Emit the raw result as JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the raw result as JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        token,
        json,
    } = args;

    let answer_set = match (answers, token) {
        (_, Some(token)) => AnswerSet::decode_token(&token)?,
        (Some(path), None) => {
            let raw = fs::read_to_string(path)?;
            serde_json::from_str(&raw).map_err(AnswerTokenError::from)?
        }
        (None, None) => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "provide --answers <file> or --token <token>",
            )
            .into());
        }
    };

    let engine = load_engine()?;
    let result = engine.calculate_scores(&answer_set);
    render_result(&result, json)?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = load_engine()?;
    let answers = synthetic_answers();

    if !args.json {
        println!("Lifestyle strain assessment demo");
        println!(
            "Scoring a synthetic answer set covering all {} questions\n",
            engine.catalog().len()
        );
    }

    let result = engine.calculate_scores(&answers);
    render_result(&result, args.json)?;

    if !args.json {
        let token = answers.encode_token()?;
        println!("\nShare token (results URL `?data=` parameter):\n{token}");
    }
    Ok(())
}

fn load_engine() -> Result<ScoringEngine, AppError> {
    let config = AppConfig::load()?;
    let rubric = config.assessment.load_rubric()?;
    Ok(ScoringEngine::new(QuestionCatalog::standard(), rubric))
}

fn render_result(result: &ResultData, json: bool) -> Result<(), AppError> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(result).map_err(AnswerTokenError::from)?
        );
        return Ok(());
    }

    println!(
        "Lifestyle Strain Index: {} ({})",
        result.strain_index, result.tier.name
    );
    println!("  {}", result.tier.description);

    println!("\nPillar breakdown:");
    for pillar in Pillar::ALL {
        let score = result.pillar_scores.get(&pillar).copied().unwrap_or(0.0);
        println!("  {:<38} {:>5.1}", pillar.display_name(), score);
    }

    println!("\nRisk flags:");
    if result.risk_flags.is_empty() {
        println!("  none raised");
    }
    for flag in &result.risk_flags {
        println!("  - {}", flag.label());
    }

    println!("\nPrimary risk drivers:");
    for (rank, driver) in result.primary_risk_drivers.iter().enumerate() {
        println!(
            "  {}. {} (score {:.1})",
            rank + 1,
            driver.question_text,
            driver.answer_value
        );
    }

    Ok(())
}

fn synthetic_answers() -> AnswerSet {
    // A plausibly strained office worker: heavy processed food, sedentary,
    // poor sleep, steady time pressure.
    [
        ("q1", 7.0),
        ("q2", 7.0),
        ("q3", 3.0),
        ("q4", 8.0),
        ("q5", 11.0),
        ("q6", 0.0),
        ("q7", 3.0),
        ("q8", 8.0),
        ("q9", 4.0),
        ("q10", 7.0),
        ("q11", 7.0),
        ("q12", 8.0),
        ("q13", 0.0),
        ("q14", 8.0),
        ("q15", 2.0),
        ("q16", 4.0),
        ("q17", 8.0),
        ("q18", 8.0),
        ("q19", 3.0),
        ("q20", 4.0),
        ("q21", 6.0),
        ("q22", 8.0),
        ("q23", 5.0),
        ("q24", 6.0),
    ]
    .into_iter()
    .map(|(id, value)| (QuestionId::new(id), value))
    .collect()
}
