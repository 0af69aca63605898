//! Batch orchestration: file mode and tabular mode.
//!
//! Both modes share the same per-token path ([`WordRecordBuilder`]) and the
//! same error policy: tokens fail soft, operations fail fast. File mode
//! reads newline-delimited tokens and writes a pretty-printed JSON array;
//! tabular mode returns a copy of the input [`Table`] with three appended
//! columns.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::config::{AppConfig, ColumnsConfig, OutputConfig};
use crate::pipeline::record::{WordRecord, WordRecordBuilder};
use crate::pipeline::table::{Table, TableError};
use crate::script::is_telugu;
use crate::translit::Transliterator;

// ---------------------------------------------------------------------------
// BatchError
// ---------------------------------------------------------------------------

/// Operation-level failures. Any of these aborts the batch call entirely —
/// partial execution would be meaningless.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input file does not exist. Raised before any processing.
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output file or its parent directories could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// `process_column` was asked for a column the table does not have.
    #[error("column {0:?} not found in table")]
    MissingColumn(String),

    /// Serialising the accepted records to JSON failed.
    #[error("JSON serialisation failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Appending the derived columns failed (e.g. the input table already
    /// has a column with a configured output name).
    #[error(transparent)]
    Table(#[from] TableError),
}

// ---------------------------------------------------------------------------
// BatchResult
// ---------------------------------------------------------------------------

/// The outcome of a file-mode batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    /// One record per accepted line, in input order. A record may still
    /// carry `null` derived fields when the engine failed on a valid token.
    pub records: Vec<WordRecord>,
    /// Lines that failed the script gate, in input order. These are excluded
    /// from the JSON output.
    pub rejected: Vec<String>,
}

// ---------------------------------------------------------------------------
// BatchProcessor
// ---------------------------------------------------------------------------

/// Drives the per-token pipeline over files and tables.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use telugu_to_latin::pipeline::{BatchProcessor, Table};
/// use telugu_to_latin::translit::TeluguIastEngine;
///
/// let processor = BatchProcessor::new(Arc::new(TeluguIastEngine::new()));
/// let table = Table::from_strings("telugu_word", ["నమస్కారం", "xyz"]);
/// let out = processor.process_column(&table, "telugu_word").unwrap();
/// assert_eq!(out.n_cols(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    builder: WordRecordBuilder,
    columns: ColumnsConfig,
    output: OutputConfig,
}

impl BatchProcessor {
    /// Create a processor over `engine` with default column names and
    /// pretty JSON output.
    pub fn new(engine: Arc<dyn Transliterator>) -> Self {
        Self::with_config(engine, &AppConfig::default())
    }

    /// Create a processor with explicit configuration.
    pub fn with_config(engine: Arc<dyn Transliterator>, config: &AppConfig) -> Self {
        Self {
            builder: WordRecordBuilder::new(engine),
            columns: config.columns.clone(),
            output: config.output.clone(),
        }
    }

    /// The per-token builder, for one-off conversions outside a batch.
    pub fn builder(&self) -> &WordRecordBuilder {
        &self.builder
    }

    // -----------------------------------------------------------------------
    // File mode
    // -----------------------------------------------------------------------

    /// Read newline-delimited tokens from `input`, convert them, and write
    /// the accepted records to `output` as a JSON array.
    ///
    /// Lines failing the script gate are collected into
    /// [`BatchResult::rejected`] and excluded from the output file; a
    /// warning with the count and the list is logged when any were rejected.
    /// Missing parent directories of `output` are created.
    ///
    /// # Errors
    ///
    /// - [`BatchError::InputNotFound`] — `input` does not exist; nothing is
    ///   written.
    /// - [`BatchError::Read`] / [`BatchError::Write`] — I/O failures.
    pub fn process_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<BatchResult, BatchError> {
        let input = input.as_ref();
        let output = output.as_ref();

        if !input.exists() {
            return Err(BatchError::InputNotFound(input.to_path_buf()));
        }

        let content = std::fs::read_to_string(input).map_err(|source| BatchError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let mut records = Vec::new();
        let mut rejected = Vec::new();

        // str::lines strips both \n and \r\n terminators.
        for line in content.lines() {
            if !is_telugu(line) {
                rejected.push(line.to_string());
                continue;
            }
            records.push(self.builder.build(line));
        }

        let json = if self.output.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent).map_err(|source| BatchError::Write {
                path: output.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(output, json).map_err(|source| BatchError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        if !rejected.is_empty() {
            log::warn!(
                "rejected {} non-Telugu line(s): {rejected:?}",
                rejected.len()
            );
        }

        Ok(BatchResult { records, rejected })
    }

    // -----------------------------------------------------------------------
    // Tabular mode
    // -----------------------------------------------------------------------

    /// Return a copy of `table` with three appended columns: a validity
    /// boolean, a pronunciation column and an IAST column, row-aligned with
    /// `column`.
    ///
    /// The input table is never mutated. Cells that are not strings, or
    /// whose string fails the script gate, get `false`/null/null; a warning
    /// with the invalid count is logged when it is greater than zero.
    ///
    /// # Errors
    ///
    /// - [`BatchError::MissingColumn`] — `column` is not in the table.
    /// - [`BatchError::Table`] — the table already has a column named like
    ///   one of the three appended ones.
    pub fn process_column(&self, table: &Table, column: &str) -> Result<Table, BatchError> {
        let source = table
            .column(column)
            .ok_or_else(|| BatchError::MissingColumn(column.to_string()))?;

        let mut validity = Vec::with_capacity(source.len());
        let mut pronunciation = Vec::with_capacity(source.len());
        let mut latin = Vec::with_capacity(source.len());
        let mut invalid = 0usize;

        for cell in source {
            // Non-string cells count as invalid, same as non-Telugu text.
            let record = cell
                .as_str()
                .filter(|s| is_telugu(s))
                .map(|s| self.builder.build(s));

            match record {
                Some(record) => {
                    validity.push(Value::Bool(true));
                    pronunciation.push(option_to_value(record.pronunciation));
                    latin.push(option_to_value(record.latin));
                }
                None => {
                    invalid += 1;
                    validity.push(Value::Bool(false));
                    pronunciation.push(Value::Null);
                    latin.push(Value::Null);
                }
            }
        }

        let mut result = table.clone();
        result.push_column(self.columns.validity.clone(), validity)?;
        result.push_column(self.columns.pronunciation.clone(), pronunciation)?;
        result.push_column(self.columns.latin.clone(), latin)?;

        if invalid > 0 {
            log::warn!("found {invalid} invalid Telugu entries in column {column:?}");
        }

        Ok(result)
    }
}

fn option_to_value(value: Option<String>) -> Value {
    value.map_or(Value::Null, Value::String)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::{MockTransliterator, TeluguIastEngine, TranslitError};
    use serde_json::json;
    use tempfile::tempdir;

    fn processor() -> BatchProcessor {
        BatchProcessor::new(Arc::new(TeluguIastEngine::new()))
    }

    fn write_input(dir: &std::path::Path, lines: &str) -> PathBuf {
        let path = dir.join("words.txt");
        std::fs::write(&path, lines).expect("write input");
        path
    }

    // --- file mode -----------------------------------------------------------

    #[test]
    fn process_file_converts_and_partitions() {
        let dir = tempdir().expect("temp dir");
        let input = write_input(dir.path(), "తెలుగు\nhello\n\nనమస్కారం\n");
        let output = dir.path().join("out.json");

        let result = processor().process_file(&input, &output).expect("batch");

        assert_eq!(result.rejected, vec!["hello".to_string(), String::new()]);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].latin.as_deref(), Some("telugu"));
        assert_eq!(result.records[1].pronunciation.as_deref(), Some("namaskaaram"));

        // The output holds exactly the accepted records.
        let written: Vec<WordRecord> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, result.records);
    }

    #[test]
    fn output_json_is_pretty_and_unescaped() {
        let dir = tempdir().expect("temp dir");
        let input = write_input(dir.path(), "తెలుగు\n");
        let output = dir.path().join("out.json");

        processor().process_file(&input, &output).expect("batch");
        let text = std::fs::read_to_string(&output).unwrap();

        // Telugu characters are emitted literally, not as \u escapes.
        assert!(text.contains("తెలుగు"), "unicode was escaped: {text}");
        // serde_json pretty-printing uses a 2-space indent.
        assert!(text.contains("\n  {"), "output is not pretty-printed: {text}");
    }

    #[test]
    fn compact_output_when_pretty_disabled() {
        let dir = tempdir().expect("temp dir");
        let input = write_input(dir.path(), "తెలుగు\n");
        let output = dir.path().join("out.json");

        let mut config = AppConfig::default();
        config.output.pretty = false;
        let processor =
            BatchProcessor::with_config(Arc::new(TeluguIastEngine::new()), &config);

        processor.process_file(&input, &output).expect("batch");
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(!text.contains('\n'), "expected compact JSON: {text}");
    }

    #[test]
    fn missing_input_fails_fast_without_writing() {
        let dir = tempdir().expect("temp dir");
        let output = dir.path().join("out.json");

        let err = processor()
            .process_file(dir.path().join("nope.txt"), &output)
            .unwrap_err();

        assert!(matches!(err, BatchError::InputNotFound(_)));
        assert!(!output.exists(), "output must not be created");
    }

    #[test]
    fn output_parent_directories_are_created() {
        let dir = tempdir().expect("temp dir");
        let input = write_input(dir.path(), "తెలుగు\n");
        let output = dir.path().join("nested").join("deeper").join("out.json");

        processor().process_file(&input, &output).expect("batch");
        assert!(output.exists());
    }

    #[test]
    fn crlf_line_terminators_are_stripped() {
        let dir = tempdir().expect("temp dir");
        let input = write_input(dir.path(), "తెలుగు\r\nనమస్కారం\r\n");
        let output = dir.path().join("out.json");

        let result = processor().process_file(&input, &output).expect("batch");
        assert_eq!(result.records[0].telugu, "తెలుగు");
        assert_eq!(result.records[1].telugu, "నమస్కారం");
    }

    #[test]
    fn engine_failure_keeps_the_line_with_null_fields() {
        let dir = tempdir().expect("temp dir");
        let input = write_input(dir.path(), "తెలుగు\n");
        let output = dir.path().join("out.json");

        let failing = BatchProcessor::new(Arc::new(MockTransliterator::err(
            TranslitError::Engine("down".into()),
        )));
        let result = failing.process_file(&input, &output).expect("batch");

        // Valid territory: the line is accepted, with absent fields.
        assert!(result.rejected.is_empty());
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].latin, None);
    }

    // --- tabular mode --------------------------------------------------------

    #[test]
    fn process_column_appends_three_aligned_columns() {
        let table = Table::from_strings("telugu_word", ["నమస్కారం", "xyz"]);
        let out = processor().process_column(&table, "telugu_word").expect("batch");

        assert_eq!(out.n_cols(), 4);
        assert_eq!(out.n_rows(), 2);
        assert_eq!(
            out.column("is_valid_telugu").unwrap(),
            &[json!(true), json!(false)][..]
        );
        assert_eq!(
            out.column("pronunciation").unwrap(),
            &[json!("namaskaaram"), Value::Null][..]
        );
        assert_eq!(
            out.column("latin").unwrap(),
            &[json!("namaskāraṃ"), Value::Null][..]
        );
    }

    #[test]
    fn process_column_never_mutates_the_input() {
        let table = Table::from_strings("telugu_word", ["తెలుగు", "hello"]);
        let snapshot = table.clone();

        let _ = processor().process_column(&table, "telugu_word").expect("batch");
        assert_eq!(table, snapshot);
    }

    #[test]
    fn non_string_cells_are_invalid() {
        let mut table = Table::new();
        table
            .push_column(
                "telugu_word",
                vec![json!(42), Value::Null, json!("తెలుగు")],
            )
            .unwrap();

        let out = processor().process_column(&table, "telugu_word").expect("batch");
        assert_eq!(
            out.column("is_valid_telugu").unwrap(),
            &[json!(false), json!(false), json!(true)][..]
        );
    }

    #[test]
    fn missing_column_fails_fast() {
        let table = Table::from_strings("words", ["తెలుగు"]);
        let err = processor().process_column(&table, "telugu_word").unwrap_err();
        assert!(matches!(err, BatchError::MissingColumn(name) if name == "telugu_word"));
    }

    #[test]
    fn clashing_output_column_name_is_an_error() {
        // The input already has a "latin" column — appending would collide.
        let mut table = Table::from_strings("telugu_word", ["తెలుగు"]);
        table.push_column("latin", vec![json!("x")]).unwrap();

        let err = processor().process_column(&table, "telugu_word").unwrap_err();
        assert!(matches!(
            err,
            BatchError::Table(TableError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn custom_column_names_from_config() {
        let mut config = AppConfig::default();
        config.columns.validity = "valid".into();
        config.columns.pronunciation = "say".into();
        config.columns.latin = "iast".into();

        let processor =
            BatchProcessor::with_config(Arc::new(TeluguIastEngine::new()), &config);
        let table = Table::from_strings("telugu_word", ["తెలుగు"]);
        let out = processor.process_column(&table, "telugu_word").expect("batch");

        assert_eq!(out.column("valid").unwrap(), &[json!(true)][..]);
        assert_eq!(out.column("iast").unwrap(), &[json!("telugu")][..]);
        assert!(out.column("latin").is_none());
    }
}
