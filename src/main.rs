//! Mortgage payoff CLI
//!
//! Compare a standard schedule with an accelerated one from the command line.
//!
//! ```bash
//! mortgage-payoff compute --principal 300000 --rate 6.5 --term 30 --extra 10000 --mode one-time
//! mortgage-payoff compute --extra 500 --format csv --all-months --output schedule.csv
//! mortgage-payoff sweep --principal 350000 --amounts 0,250,500,1000
//! mortgage-payoff batch --input loans.csv --output summary.csv
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use mortgage_payoff::{
    amortization::{AmortizationConfig, AmortizationEngine, AmortizationResult},
    currency::{format_currency, DEFAULT_CURRENCY},
    insight::{InsightAdvisor, StaticInsightProvider},
    loan::{load_loans, ExtraPaymentMode, LoanInputs},
    savings::{payoff_date, PeriodicSavings, TimeSaved},
    ScenarioRunner,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mortgage-payoff", version, about = "Compare standard and accelerated mortgage payoff")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute one standard vs accelerated comparison
    Compute(ComputeArgs),
    /// Vary the extra payment amount for one loan
    Sweep(SweepArgs),
    /// Run every loan in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Clone)]
struct LoanArgs {
    /// Outstanding loan balance
    #[arg(long, default_value_t = 350_000.0)]
    principal: f64,

    /// Annual interest rate in percent (6.5 = 6.5%)
    #[arg(long, default_value_t = 6.5)]
    rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    term: u32,

    /// Extra payment amount
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// How the extra payment is applied
    #[arg(long, value_enum, default_value_t = ModeArg::Monthly)]
    mode: ModeArg,
}

impl LoanArgs {
    fn to_inputs(&self) -> Result<LoanInputs> {
        let inputs = LoanInputs::new(self.principal, self.rate, self.term, self.extra, self.mode.into());
        inputs.validate().context("invalid loan inputs")?;
        Ok(inputs)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeArg {
    OneTime,
    Monthly,
}

impl From<ModeArg> for ExtraPaymentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::OneTime => ExtraPaymentMode::OneTime,
            ModeArg::Monthly => ExtraPaymentMode::Monthly,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
struct ComputeArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// ISO currency code used for display
    #[arg(long, env = "MORTGAGE_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// First payment date (YYYY-MM-DD); the debt-free date shown is the month of the last payment
    #[arg(long)]
    start_date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show every month instead of yearly samples (text and csv output)
    #[arg(long)]
    all_months: bool,

    /// Write to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// Comma-separated extra payment amounts
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 100.0, 250.0, 500.0, 1000.0])]
    amounts: Vec<f64>,

    #[arg(long, env = "MORTGAGE_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV with LoanID,Principal,AnnualRate,TermYears,ExtraPayment,Mode
    #[arg(short, long)]
    input: PathBuf,

    /// Summary CSV (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// JSON output for a single comparison
#[derive(Serialize)]
struct ComputeOutput<'a> {
    inputs: &'a LoanInputs,
    result: &'a AmortizationResult,
    periodic_savings: PeriodicSavings,
    time_saved: TimeSaved,
    #[serde(skip_serializing_if = "Option::is_none")]
    payoff_date: Option<NaiveDate>,
    insight: String,
}

/// One line of the batch summary CSV
#[derive(Serialize)]
struct BatchRow {
    #[serde(rename = "LoanID")]
    loan_id: String,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: f64,
    #[serde(rename = "InterestStandard")]
    interest_standard: f64,
    #[serde(rename = "InterestAccelerated")]
    interest_accelerated: f64,
    #[serde(rename = "TotalSavings")]
    total_savings: f64,
    #[serde(rename = "MonthsSaved")]
    months_saved: u32,
    #[serde(rename = "YearsToPayoff")]
    years_to_payoff: f64,
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(
            File::create(p).with_context(|| format!("creating output file {}", p.display()))?,
        ),
        None => Box::new(io::stdout()),
    })
}

/// Yearly samples: balances and cumulative interest of both legs
fn write_sample_table(out: &mut dyn Write, result: &AmortizationResult) -> io::Result<()> {
    writeln!(out, "{:>5} {:>4} {:>14} {:>14} {:>14} {:>14}",
        "Month", "Year", "Std Balance", "Acc Balance", "Std Interest", "Acc Interest")?;
    writeln!(out, "{}", "-".repeat(70))?;
    for s in &result.samples {
        writeln!(out, "{:>5} {:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            s.month, s.year, s.standard_balance, s.accelerated_balance,
            s.standard_interest_paid, s.accelerated_interest_paid)?;
    }
    Ok(())
}

/// Every month: the interest/principal split of each payment on both legs
fn write_monthly_table(out: &mut dyn Write, result: &AmortizationResult) -> io::Result<()> {
    writeln!(out, "{:>5} {:>4} {:>11} {:>11} {:>13} {:>11} {:>11} {:>10} {:>13}",
        "Month", "Year", "Std Int", "Std Prin", "Std Balance",
        "Acc Int", "Acc Prin", "Acc Extra", "Acc Balance")?;
    writeln!(out, "{}", "-".repeat(105))?;
    for r in &result.monthly {
        writeln!(out, "{:>5} {:>4} {:>11.2} {:>11.2} {:>13.2} {:>11.2} {:>11.2} {:>10.2} {:>13.2}",
            r.month, r.year, r.standard_interest, r.standard_principal, r.standard_balance,
            r.accelerated_interest, r.accelerated_principal, r.accelerated_extra,
            r.accelerated_balance)?;
    }
    Ok(())
}

fn cmd_compute(args: ComputeArgs) -> Result<()> {
    let inputs = args.loan.to_inputs()?;
    let engine = AmortizationEngine::new(AmortizationConfig {
        record_all_months: args.all_months,
        ..Default::default()
    });
    let result = engine.compute(&inputs);
    let savings = PeriodicSavings::from_result(&result, inputs.term_years);
    let time_saved = TimeSaved::from_months(result.months_saved);
    let payoff = args.start_date.and_then(|d| payoff_date(d, &result));
    let insight = InsightAdvisor::new(StaticInsightProvider).advise(&inputs, &result);

    let mut out = open_output(args.output.as_ref())?;

    match args.format {
        OutputFormat::Json => {
            let output = ComputeOutput {
                inputs: &inputs,
                result: &result,
                periodic_savings: savings,
                time_saved,
                payoff_date: payoff,
                insight,
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            if args.all_months {
                for row in &result.monthly {
                    writer.serialize(row)?;
                }
            } else {
                for sample in &result.samples {
                    writer.serialize(sample)?;
                }
            }
            writer.flush()?;
        }
        OutputFormat::Text => {
            let cur = args.currency.as_str();
            writeln!(out, "Mortgage Payoff Comparison")?;
            writeln!(out, "==========================\n")?;
            writeln!(out, "  Balance:            {}", format_currency(inputs.principal, cur, 0))?;
            writeln!(out, "  Interest rate:      {}%", inputs.annual_rate_percent)?;
            writeln!(out, "  Term:               {} years", inputs.term_years)?;
            writeln!(
                out,
                "  Extra payment:      {} ({})",
                format_currency(inputs.extra_payment_amount, cur, 0),
                inputs.extra_payment_mode
            )?;
            writeln!(out)?;
            writeln!(out, "  Base payment:       {}", format_currency(result.standard_monthly_payment, cur, 2))?;
            writeln!(out, "  Interest (std):     {}", format_currency(result.total_interest_standard, cur, 0))?;
            writeln!(out, "  Interest (acc):     {}", format_currency(result.total_interest_accelerated, cur, 0))?;
            writeln!(out, "  Interest saved:     {}", format_currency(result.total_savings, cur, 0))?;
            writeln!(out, "  Time saved:         {}", time_saved)?;
            writeln!(out, "  Years to payoff:    {:.2}", result.years_to_payoff)?;
            if let Some(date) = payoff {
                writeln!(out, "  Debt-free date:     {}", date.format("%B %Y"))?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "  Saved per day {} / week {} / month {} / year {}",
                format_currency(savings.day, cur, 2),
                format_currency(savings.week, cur, 2),
                format_currency(savings.month, cur, 2),
                format_currency(savings.year, cur, 0),
            )?;
            writeln!(out)?;

            if args.all_months {
                write_monthly_table(&mut out, &result)?;
            } else {
                write_sample_table(&mut out, &result)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", insight)?;
        }
    }

    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> Result<()> {
    let base = args.loan.to_inputs()?;
    for &amount in &args.amounts {
        base.with_extra_payment(amount)
            .validate()
            .with_context(|| format!("invalid sweep amount {}", amount))?;
    }

    let runner = ScenarioRunner::new();
    let points = runner.sweep_extra_payments(&base, &args.amounts);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&points)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for point in &points {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        OutputFormat::Text => {
            let cur = args.currency.as_str();
            println!("{:>12} {:>16} {:>8} {:>8}", "Extra", "Interest Saved", "Saved", "Years");
            println!("{}", "-".repeat(48));
            for p in &points {
                println!("{:>12} {:>16} {:>8} {:>8.2}",
                    format_currency(p.extra_payment_amount, cur, 0),
                    format_currency(p.total_savings, cur, 0),
                    format!("{}m", p.months_saved),
                    p.years_to_payoff);
            }
        }
    }

    Ok(())
}

fn cmd_batch(args: BatchArgs) -> Result<()> {
    let records = load_loans(&args.input)
        .with_context(|| format!("loading loans from {}", args.input.display()))?;

    let runner = ScenarioRunner::new();
    let results = runner.run_records(&records);

    let mut writer = csv::Writer::from_writer(open_output(args.output.as_ref())?);
    for (loan_id, result) in results {
        writer.serialize(BatchRow {
            loan_id,
            monthly_payment: result.standard_monthly_payment,
            interest_standard: result.total_interest_standard,
            interest_accelerated: result.total_interest_accelerated,
            total_savings: result.total_savings,
            months_saved: result.months_saved,
            years_to_payoff: result.years_to_payoff,
        })?;
    }
    writer.flush()?;

    log::info!("Processed {} loans from {}", records.len(), args.input.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compute(args) => cmd_compute(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_loan_result(record_all_months: bool) -> AmortizationResult {
        let inputs = LoanInputs::new(24_000.0, 0.0, 2, 1_000.0, ExtraPaymentMode::Monthly);
        AmortizationEngine::new(AmortizationConfig {
            record_all_months,
            ..Default::default()
        })
        .compute(&inputs)
    }

    #[test]
    fn test_monthly_table_lists_every_month() {
        let result = short_loan_result(true);
        let mut out = Vec::new();
        write_monthly_table(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Header, rule, then one line per simulated month
        assert_eq!(text.lines().count(), 2 + 24);
        assert!(text.lines().next().unwrap().contains("Acc Extra"));
        assert!(text.contains("1000.00"));
    }

    #[test]
    fn test_sample_table_is_sparse() {
        let result = short_loan_result(false);
        let mut out = Vec::new();
        write_sample_table(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Months 1, 12 and 24
        assert_eq!(result.samples.len(), 3);
        assert_eq!(text.lines().count(), 2 + 3);
    }

    #[test]
    fn test_all_months_flag_parses() {
        let cli = Cli::try_parse_from(["mortgage-payoff", "compute", "--all-months", "--term", "2"]).unwrap();
        match cli.command {
            Command::Compute(args) => {
                assert!(args.all_months);
                assert_eq!(args.loan.term, 2);
            }
            _ => panic!("expected compute subcommand"),
        }
    }
}
