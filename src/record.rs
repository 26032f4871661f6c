use crate::phred;
use thiserror::Error;

/// The character every separator (third) line must start with.
pub const SEPARATOR: char = '+';

/// A single FASTQ record: identifier, sequence, separator and quality lines, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: String,
    pub separator: String,
    pub qual: String,
}

/// The quality information for one base of a record.
///
/// # Fields
///
/// * `position` - 1-indexed position of the base in the sequence
/// * `base` - the base call itself
/// * `qual` - the raw quality character
/// * `score` - the decoded Phred score of `qual`, which may be negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseQuality {
    pub position: usize,
    pub base: char,
    pub qual: char,
    pub score: i32,
}

impl Record {
    /// Parses the complete contents of a file which must hold exactly one four-line record.
    ///
    /// Trailing line terminators (`\n`, `\r\n` or a bare `\r`) are removed from every line.
    /// Neither the bases nor the quality characters are checked against an alphabet.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The content does not have exactly 4 lines.
    /// * The third line does not start with `+`.
    /// * The sequence and quality lines differ in length.
    /// * The sequence and quality lines are both empty.
    pub fn parse(content: &str) -> Result<Self, FormatError> {
        let lines = content
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect::<Vec<_>>();

        let &[id, seq, separator, qual] = lines.as_slice() else {
            return Err(FormatError::NotSingleRecord { lines: lines.len() });
        };

        if !separator.starts_with(SEPARATOR) {
            return Err(FormatError::MalformedSeparator {
                line: separator.to_string(),
            });
        }

        let seq_len = seq.chars().count();
        let qual_len = qual.chars().count();
        if seq_len != qual_len {
            return Err(FormatError::LengthMismatch { seq_len, qual_len });
        }
        if seq_len == 0 {
            return Err(FormatError::EmptyRecord);
        }

        Ok(Self {
            id: id.to_string(),
            seq: seq.to_string(),
            separator: separator.to_string(),
            qual: qual.to_string(),
        })
    }

    /// Number of bases in the record.
    pub fn len(&self) -> usize {
        self.seq.chars().count()
    }

    /// Iterates over the quality of each base, starting at position 1. The iterator borrows the
    /// record, so it can be cloned or recreated as often as needed.
    pub fn bases(&self) -> impl Iterator<Item = BaseQuality> + Clone + '_ {
        self.seq
            .chars()
            .zip(self.qual.chars())
            .enumerate()
            .map(|(i, (base, qual))| BaseQuality {
                position: i + 1,
                base,
                qual,
                score: phred::score(qual),
            })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error(
        "Input file not single DNA sequence fastq format: \
expected exactly 4 lines, found {lines}"
    )]
    NotSingleRecord { lines: usize },

    #[error(
        "Input file not single DNA sequence fastq format: \
the third line should start with `+`, got `{line}`"
    )]
    MalformedSeparator { line: String },

    #[error(
        "Sequence and quality records of different length - unable to process this fastq file - \
consider stripping gaps
sequence length: {seq_len}
quality length:  {qual_len}"
    )]
    LengthMismatch { seq_len: usize, qual_len: usize },

    #[error("Input file not single DNA sequence fastq format: the record has no bases")]
    EmptyRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "@read_1 consensus\nACGT\n+\n!\"#$\n";

    #[test]
    fn parse_valid() {
        let rec = Record::parse(VALID).unwrap();
        assert_eq!(rec.id, "@read_1 consensus");
        assert_eq!(rec.seq, "ACGT");
        assert_eq!(rec.separator, "+");
        assert_eq!(rec.qual, "!\"#$");
        assert_eq!(rec.len(), 4);
    }

    #[test]
    fn parse_without_final_newline() {
        let rec = Record::parse("@r\nAC\n+r\nII").unwrap();
        assert_eq!(rec.seq, "AC");
        assert_eq!(rec.separator, "+r");
        assert_eq!(rec.qual, "II");
    }

    #[test]
    fn parse_crlf() {
        let rec = Record::parse("@r\r\nACG\r\n+\r\n+++\r\n").unwrap();
        assert_eq!(rec.id, "@r");
        assert_eq!(rec.seq, "ACG");
        assert_eq!(rec.qual, "+++");
    }

    #[test]
    fn parse_trailing_carriage_return() {
        let rec = Record::parse("@r\r\nACG\r\n+\r\n+++\r").unwrap();
        assert_eq!(rec.id, "@r");
        assert_eq!(rec.separator, "+");
        assert_eq!(rec.qual, "+++");
        assert_eq!(rec.len(), 3);
    }

    #[test]
    fn permissive_alphabet() {
        // neither bases nor quality characters are range checked
        let rec = Record::parse("@r\nXN-z\n+\n ~!!\n").unwrap();
        assert_eq!(rec.seq, "XN-z");
        assert_eq!(rec.bases().next().unwrap().score, -1);
    }

    #[test]
    fn wrong_line_counts() {
        for content in [
            "",
            "@r\n",
            "@r\nACGT\n+\n",
            "@r\nACGT\n+\n!!!!\n\n",
            "@r\nACGT\n+\n!!!!\n@s\nACGT\n+\n!!!!\n",
        ] {
            let lines = content.lines().count();
            assert_eq!(
                Record::parse(content),
                Err(FormatError::NotSingleRecord { lines }),
                "{content:?}"
            );
        }
    }

    #[test]
    fn malformed_separator() {
        assert_eq!(
            Record::parse("@r\nACGT\n-\n!!!!\n"),
            Err(FormatError::MalformedSeparator {
                line: "-".to_string()
            })
        );
        assert_eq!(
            Record::parse("@r\nACGT\n\n!!!!\n"),
            Err(FormatError::MalformedSeparator {
                line: String::new()
            })
        );
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            Record::parse("@r\nAC-GT\n+\n!!!!\n"),
            Err(FormatError::LengthMismatch {
                seq_len: 5,
                qual_len: 4
            })
        );
    }

    #[test]
    fn empty_record() {
        assert_eq!(Record::parse("@r\n\n+\n\n"), Err(FormatError::EmptyRecord));
    }

    #[test]
    fn bases() {
        let rec = Record::parse(VALID).unwrap();
        let bases = rec.bases().collect::<Vec<_>>();

        assert_eq!(bases.len(), 4);
        assert_eq!(
            bases.iter().map(|b| b.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            bases.iter().map(|b| b.base).collect::<String>(),
            "ACGT"
        );
        assert_eq!(
            bases.iter().map(|b| b.score).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(bases[1].qual, '"');
    }

    #[test]
    fn bases_restartable() {
        let rec = Record::parse(VALID).unwrap();
        let iter = rec.bases();

        let first = iter.clone().collect::<Vec<_>>();
        let second = iter.collect::<Vec<_>>();
        let third = rec.bases().collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(first, third);
    }
}
