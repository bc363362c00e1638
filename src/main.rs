//! SIP Planner CLI
//!
//! Command-line interface for SIP projections, the risk quiz and batch runs

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use sip_planner::{
    batch::{load_cases, write_series, write_summary, BatchRunner},
    format::{format_amount, format_currency, projection_headline},
    learn::{learning_path, HUB_TAGLINE, HUB_TITLE, LEARNING_PATHS},
    ProjectionEngine, ProjectionInput, RiskQuiz, CalculatorSettings,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sip-planner", version, about = "SIP return projections and investor tools")]
struct Cli {
    /// JSON file overriding the calculator ranges and defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a monthly SIP and print the yearly breakdown
    Project {
        /// Monthly investment in rupees
        #[arg(long)]
        monthly: Option<f64>,

        /// Expected annual return in percent
        #[arg(long)]
        rate: Option<f64>,

        /// Investment period in years
        #[arg(long)]
        years: Option<u32>,

        /// Also write the yearly series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score the risk-tolerance quiz (omit answers to list the questions)
    Quiz {
        /// Option values in question order, e.g. 1,2,3
        #[arg(long, value_delimiter = ',')]
        answers: Vec<u32>,
    },

    /// Read the learning hub (omit the topic to list topics)
    Learn {
        /// Topic id, e.g. investing-101
        topic: Option<String>,
    },

    /// Project every case in a CSV file
    Batch {
        /// Input CSV (CaseId,MonthlyContribution,AnnualReturnPct,HorizonYears)
        #[arg(long)]
        input: PathBuf,

        /// Per-case totals output
        #[arg(long)]
        summary: PathBuf,

        /// Optional per-year output
        #[arg(long)]
        series: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => CalculatorSettings::from_json_path(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => CalculatorSettings::default(),
    };

    match cli.command {
        Command::Project { monthly, rate, years, csv, json } => {
            let input = ProjectionInput::new(
                monthly.unwrap_or(settings.monthly_contribution.default),
                rate.unwrap_or(settings.return_rate_percent.default),
                years.unwrap_or(settings.horizon_years.default.round() as u32),
            )?;
            run_projection(&settings, &input, csv.as_deref(), json)
        }
        Command::Quiz { answers } => run_quiz(&answers),
        Command::Learn { topic } => run_learn(topic.as_deref()),
        Command::Batch { input, summary, series } => {
            run_batch(settings, &input, &summary, series.as_deref())
        }
    }
}

fn run_projection(
    settings: &CalculatorSettings,
    input: &ProjectionInput,
    csv_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    for issue in settings.out_of_range(input) {
        warn!("{} (calculator range)", issue);
    }

    let result = ProjectionEngine::new(input).project();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("SIP Projection");
        println!("==============\n");
        println!("  Monthly investment: {}", format_currency(input.monthly_contribution()));
        println!("  Expected return:    {}% p.a.", input.annual_return_rate_percent());
        println!("  Time period:        {} years", input.horizon_years());
        println!();

        println!("{:>4} {:>18} {:>18} {:>20}", "Year", "Invested", "Returns", "Total");
        println!("{}", "-".repeat(63));
        for s in &result.yearly_series {
            println!(
                "{:>4} {:>18} {:>18} {:>20}",
                s.year,
                format_amount(s.invested_to_date),
                format_amount(s.returns_to_date),
                format_amount(s.total_to_date),
            );
        }

        println!("\nSummary:");
        println!("  Invested:    {}", format_amount(result.total_invested));
        println!("  Returns:     {}", format_amount(result.total_returns));
        println!("  Total Value: {}", format_amount(result.total_value));
        println!("\n{}", projection_headline(&result));
    }

    if let Some(path) = csv_path {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        for snapshot in &result.yearly_series {
            writer.serialize(snapshot)?;
        }
        writer.flush()?;
        eprintln!("Yearly series written to: {}", path.display());
    }

    Ok(())
}

fn run_quiz(answers: &[u32]) -> Result<()> {
    let quiz = RiskQuiz::standard();

    if answers.is_empty() {
        for question in quiz.questions() {
            println!("{}. {}", question.id, question.text);
            for option in &question.options {
                println!("   [{}] {}", option.value, option.text);
            }
        }
        return Ok(());
    }

    let assessment = quiz.assess_in_order(answers)?;
    println!("Your Risk Profile is: {}", assessment.profile);
    println!("Score: {} / {}", assessment.score, assessment.max_score);
    println!("{}", assessment.profile.description());
    Ok(())
}

fn run_learn(topic: Option<&str>) -> Result<()> {
    let Some(topic) = topic else {
        println!("{}", HUB_TITLE);
        println!("{}\n", HUB_TAGLINE);
        for path in LEARNING_PATHS {
            println!("  {:<18} {}", path.id, path.title);
        }
        return Ok(());
    };

    let Some(path) = learning_path(topic) else {
        let known: Vec<&str> = LEARNING_PATHS.iter().map(|p| p.id).collect();
        bail!("unknown topic '{}' (expected one of: {})", topic, known.join(", "));
    };
    println!("{}\n", path.title);
    println!("{}", path.plain_text());
    Ok(())
}

fn run_batch(
    settings: CalculatorSettings,
    input: &Path,
    summary: &Path,
    series: Option<&Path>,
) -> Result<()> {
    let cases = load_cases(input).with_context(|| format!("loading cases from {}", input.display()))?;
    println!("Loaded {} cases from {}", cases.len(), input.display());

    let outcomes = BatchRunner::with_settings(settings).run(&cases);

    let file = File::create(summary).with_context(|| format!("creating {}", summary.display()))?;
    write_summary(file, &outcomes)?;
    println!("Summary written to: {}", summary.display());

    if let Some(path) = series {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_series(file, &outcomes)?;
        println!("Yearly series written to: {}", path.display());
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        println!("{} of {} cases had invalid inputs (see Error column)", failed, outcomes.len());
    }
    Ok(())
}
