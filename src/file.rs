use crate::stats::Summary;
use serde::Serialize;

/// Information about an analysed read file, as written by `--json`.
#[derive(Serialize, Debug)]
pub struct ReadFileMetadata {
    pub nanodq_version: String,
    pub file_path: String,
    pub sequence_id: String,
    #[serde(flatten)]
    pub summary: Summary,
}
