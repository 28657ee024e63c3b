//! Dividend Life CLI
//!
//! Command-line interface for the dividend calculators and snowball projections

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use dividend_life::calculator::{plan_for_goal, quote_for_amount, years_to_double};
use dividend_life::etf::{self, DEFAULT_DATA_PATH, DEFAULT_EXCHANGE_RATE};
use dividend_life::goals::{find_goal, LIFE_GOALS};
use dividend_life::projection::{PriceGrowth, ProjectionConfig, ProjectionEngine};
use dividend_life::report;
use dividend_life::scenario::ScenarioRunner;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dividend-life", version, about = "Dividend ETF calculators and snowball projections")]
struct Cli {
    /// ETF data document (falls back to the built-in list if unreadable)
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the ETF catalog
    Etfs,
    /// List the life goals
    Goals,
    /// Capital needed so dividends cover a life goal
    Goal {
        /// Goal id (see `goals`)
        #[arg(long, default_value_t = 1)]
        goal: u32,
        /// ETF ticker (defaults to the first in the catalog)
        #[arg(long)]
        ticker: Option<String>,
    },
    /// Monthly dividend for an investment amount
    Dividend {
        /// Amount invested in KRW
        #[arg(long, default_value_t = 10_000_000.0)]
        amount: f64,
        #[arg(long)]
        ticker: Option<String>,
    },
    /// Year-by-year snowball projection for one ETF
    Project {
        #[arg(long, default_value_t = 10_000_000.0)]
        initial: f64,
        #[arg(long, default_value_t = 500_000.0)]
        monthly: f64,
        #[arg(long, default_value_t = 10)]
        years: u32,
        #[arg(long)]
        ticker: Option<String>,
        /// Price growth policy: default, none, fixed:<pct>, offset:<ceiling>:<floor>
        #[arg(long, default_value = "default", value_parser = parse_growth)]
        growth: PriceGrowth,
        /// Also write the chart rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Project the same plan into every ETF and compare
    Compare {
        #[arg(long, default_value_t = 10_000_000.0)]
        initial: f64,
        #[arg(long, default_value_t = 500_000.0)]
        monthly: f64,
        #[arg(long, default_value_t = 10)]
        years: u32,
        #[arg(long, default_value = "default", value_parser = parse_growth)]
        growth: PriceGrowth,
    },
    /// Build the ETF data document from a quotes CSV
    BuildData {
        /// CSV with ticker,name,risk,sector,price_usd,dividend_yield
        #[arg(long)]
        quotes: PathBuf,
        /// KRW per USD
        #[arg(long, default_value_t = DEFAULT_EXCHANGE_RATE)]
        rate: f64,
        #[arg(long, default_value = DEFAULT_DATA_PATH)]
        out: PathBuf,
    },
    /// Rule of 72: years for money to double at a rate
    Double {
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
    },
}

fn parse_growth(s: &str) -> Result<PriceGrowth, String> {
    s.parse()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Etfs => {
            let catalog = etf::load_or_fallback(&cli.data);
            print!("{}", report::etf_table(&catalog));
        }

        Command::Goals => {
            print!("{}", report::goals_table(&LIFE_GOALS));
        }

        Command::Goal { goal, ticker } => {
            let catalog = etf::load_or_fallback(&cli.data);
            let goal = find_goal(goal).ok_or_else(|| anyhow!("unknown goal id {}", goal))?;
            let plan = plan_for_goal(goal, &catalog, ticker.as_deref())?;
            print!("{}", report::goal_plan_text(&plan));
        }

        Command::Dividend { amount, ticker } => {
            let catalog = etf::load_or_fallback(&cli.data);
            let quote = quote_for_amount(amount, &catalog, ticker.as_deref())?;
            print!("{}", report::dividend_quote_text(&quote));
        }

        Command::Project { initial, monthly, years, ticker, growth, csv } => {
            let catalog = etf::load_or_fallback(&cli.data);
            let etf = catalog.select(ticker.as_deref())?;
            let engine = ProjectionEngine::new(ProjectionConfig { horizon_years: years, growth });
            let result = engine.project_etf(etf, initial, monthly)?;

            print!("{}", report::projection_table(&result));

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                result.write_csv(BufWriter::new(file))?;
                println!("\nChart rows written to: {}", path.display());
            }
        }

        Command::Compare { initial, monthly, years, growth } => {
            let catalog = etf::load_or_fallback(&cli.data);
            let runner = ScenarioRunner::new(ProjectionConfig { horizon_years: years, growth });
            let results = runner.run_catalog(&catalog, initial, monthly)?;
            println!(
                "{} KRW now, {} KRW a month, {} years",
                report::format_krw(initial),
                report::format_krw(monthly),
                years
            );
            print!("{}", report::comparison_table(&results));
        }

        Command::BuildData { quotes, rate, out } => {
            let raw = etf::read_quotes_from_path(&quotes)
                .with_context(|| format!("reading quotes from {}", quotes.display()))?;
            let today = chrono::Local::now().date_naive();
            let document = etf::build_document(&raw, rate, today);
            if document.etfs.is_empty() {
                return Err(anyhow!("no usable quotes in {}", quotes.display()));
            }
            etf::write_document(&document, &out)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {} ETFs to {}", document.etfs.len(), out.display());
        }

        Command::Double { rate } => {
            let years = years_to_double(rate)?;
            println!("At {}% a year, money doubles in about {:.1} years", rate, years);
        }
    }

    Ok(())
}
