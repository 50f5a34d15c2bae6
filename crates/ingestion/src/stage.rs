//! Ingest Stage main loop
//!
//! Sources are drained strictly in configuration order; within a source,
//! line order is preserved. No global ordering exists until the optional
//! sort phase.

use contracts::{LineStore, StreamId, TeeError};
use observability::metrics::record_lines_ingested;
use observability::ProgressContext;
use tracing::{debug, instrument};

/// Read every configured source into the store
///
/// Returns the number of lines ingested across all sources. The throttle
/// policy is evaluated against the running total after each appended line.
///
/// # Errors
/// `TeeError::SourceOpen` / `TeeError::SourceRead` abort the stage; lines
/// ingested from earlier sources remain in the store.
#[instrument(name = "ingest_read_sources", skip_all, fields(sources = inputs.len()))]
pub async fn read_sources(
    inputs: &[StreamId],
    store: &mut LineStore,
    progress: &ProgressContext<'_>,
) -> Result<u64, TeeError> {
    let mut total: u64 = 0;

    for input in inputs {
        let mut source = crate::LineSource::open(input).await?;
        let mut from_source: u64 = 0;

        while let Some(line) = source.next_line().await? {
            store.push(line);
            total += 1;
            from_source += 1;
            progress.on_ingested(total);
        }

        debug!(source = %source.name(), lines = from_source, "source drained");
        record_lines_ingested(source.name(), from_source);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use observability::{ProgressTicker, StatusStream};
    use rand::Rng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with(content: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content).unwrap();
        f.flush().unwrap();
        f
    }

    fn id_for(f: &NamedTempFile) -> StreamId {
        StreamId::from(f.path().to_str().unwrap())
    }

    async fn run_ingest(inputs: &[StreamId], store: &mut LineStore) -> Result<u64, TeeError> {
        let ticker = ProgressTicker::start();
        let progress = ProgressContext::new(&ticker, StatusStream::new(true), false, false, 0);
        let result = read_sources(inputs, store, &progress).await;
        ticker.stop().await;
        result
    }

    #[tokio::test]
    async fn test_sources_concatenate_in_order() {
        let a = temp_with(b"x\n");
        let b = temp_with(b"y\n");
        let mut store = LineStore::new();

        let total = run_ingest(&[id_for(&a), id_for(&b)], &mut store).await.unwrap();

        assert_eq!(total, 2);
        assert_eq!(store.lines()[0].as_ref(), b"x");
        assert_eq!(store.lines()[1].as_ref(), b"y");
    }

    #[tokio::test]
    async fn test_count_matches_lines_across_sources() {
        // Split one generated corpus across three files at random points;
        // the ingested total and order must match the concatenation.
        let mut rng = rand::rng();
        let corpus: Vec<String> = (0..300).map(|i| format!("line-{i}-{}", rng.random::<u32>())).collect();

        let cut_a = rng.random_range(1..150);
        let cut_b = rng.random_range(cut_a..300);

        let render = |lines: &[String]| {
            let mut out = Vec::new();
            for l in lines {
                out.extend_from_slice(l.as_bytes());
                out.push(b'\n');
            }
            out
        };

        let f1 = temp_with(&render(&corpus[..cut_a]));
        let f2 = temp_with(&render(&corpus[cut_a..cut_b]));
        let f3 = temp_with(&render(&corpus[cut_b..]));

        let mut store = LineStore::new();
        let total = run_ingest(&[id_for(&f1), id_for(&f2), id_for(&f3)], &mut store)
            .await
            .unwrap();

        assert_eq!(total, corpus.len() as u64);
        for (stored, expected) in store.lines().iter().zip(&corpus) {
            assert_eq!(stored.as_ref(), expected.as_bytes());
        }
    }

    #[tokio::test]
    async fn test_empty_source_contributes_nothing() {
        let empty = temp_with(b"");
        let mut store = LineStore::new();
        let total = run_ingest(&[id_for(&empty)], &mut store).await.unwrap();
        assert_eq!(total, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_open_failure_keeps_earlier_lines() {
        let good = temp_with(b"kept\n");
        let missing = StreamId::from("/nonexistent/linetee-missing.txt");
        let mut store = LineStore::new();

        let result = run_ingest(&[id_for(&good), missing], &mut store).await;

        assert!(matches!(result, Err(TeeError::SourceOpen { .. })));
        assert_eq!(store.len(), 1);
        assert_eq!(store.lines()[0].as_ref(), b"kept");
    }
}
