pub mod error;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use error::{Result, TrendError};
pub use heuristics::{NoiseList, StopWords};
pub use io::{parse_history_file, parse_history_json, HumanReport, KeywordReport};
pub use models::{AggregatedEntry, FrequencyTable, MergeLedger, MergePair, Ngram, RawRecord, Record};
pub use pipeline::{analyze_corpus, extract_trends, CorpusAnalysis, RunStats, TrendConfig, TrendReport};
