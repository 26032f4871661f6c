use crate::phred;
use crate::record::Record;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Aggregate quality statistics of a record.
///
/// The average Phred score is taken in the probability domain: every quality score is converted
/// to an error probability, the probabilities are averaged, and the average is converted back
/// to a Phred score. This is lower than the arithmetic mean of the scores whenever the scores
/// vary, and is the convention used for Nanopore reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub sequence_length: usize,   // number of bases
    pub average_phred_score: f64, // Phred score of the average error probability
    pub expected_errors: f64,     // sum of the error probabilities
    pub most_probable_errors: u64, // floor of the expected errors
    pub average_probability: f64, // mean error probability per base
}

impl Summary {
    /// Computes the summary of a quality string.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::EmptyQuality` if `qual` has no characters, as no average exists.
    pub fn from_qual(qual: &str) -> Result<Self, StatsError> {
        let (count, expected_errors) = qual
            .chars()
            .map(|c| phred::error_probability(phred::score(c) as f64))
            .fold((0usize, 0.0f64), |(n, total), p| (n + 1, total + p));

        if count == 0 {
            return Err(StatsError::EmptyQuality);
        }

        let average_probability = expected_errors / (count as f64);

        Ok(Self {
            sequence_length: count,
            average_phred_score: phred::phred_from_probability(average_probability),
            expected_errors,
            most_probable_errors: expected_errors.floor() as u64,
            average_probability,
        })
    }

    pub fn from_record(rec: &Record) -> Result<Self, StatsError> {
        Self::from_qual(&rec.qual)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Average Phred Quality Score: {:.9}",
            self.average_phred_score
        )?;
        writeln!(f, "Expected number of errors: {:.9}", self.expected_errors)?;
        write!(
            f,
            "Most probable number of errors: {}",
            self.most_probable_errors
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot summarise an empty quality string")]
    EmptyQuality,
}
