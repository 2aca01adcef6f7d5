//! Load batches of loans from CSV
//!
//! Expected columns: `LoanID,Principal,AnnualRate,TermYears,ExtraPayment,Mode`.
//! `ExtraPayment` and `Mode` may be left blank (0 and monthly).

use super::{ExtraPaymentMode, LoanInputs};
use crate::error::{LoanError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the loan batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
    #[serde(rename = "ExtraPayment", default)]
    extra_payment: Option<f64>,
    #[serde(rename = "Mode", default)]
    mode: Option<String>,
}

impl CsvRow {
    fn to_loan(self) -> Result<LoanRecord> {
        let mode = match self.mode.as_deref().map(str::trim) {
            None | Some("") => ExtraPaymentMode::Monthly,
            Some(s) => s.parse()?,
        };

        let inputs = LoanInputs::new(
            self.principal,
            self.annual_rate,
            self.term_years,
            self.extra_payment.unwrap_or(0.0),
            mode,
        );
        inputs.validate()?;

        Ok(LoanRecord {
            loan_id: self.loan_id,
            inputs,
        })
    }
}

/// A loan read from a batch file, keyed by its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRecord {
    pub loan_id: String,
    pub inputs: LoanInputs,
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<LoanRecord>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanRecord>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LoanRecord>> {
    let mut loans = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Header is line 1, so data rows start at 2
        let loan = row.to_loan().map_err(|e| LoanError::Row {
            row: idx + 2,
            source: Box::new(e),
        })?;
        loans.push(loan);
    }

    log::debug!("Loaded {} loans", loans.len());
    Ok(loans)
}
