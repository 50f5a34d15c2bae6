//! # Integration Tests
//!
//! End-to-end tests composing the library crates through the same
//! sequence the CLI driver runs: resolve -> ingest -> transform ->
//! fan-out write.

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::fs;
    use std::path::Path;

    use contracts::{LineStore, StreamId, TeeError, TeeFlags, TeePlan};
    use dispatcher::FanoutWriter;
    use observability::{ProgressContext, ProgressTicker, StatusStream};
    use tempfile::tempdir;

    fn id(path: &Path) -> StreamId {
        StreamId::from(path.to_str().unwrap())
    }

    /// Run the full stage sequence the orchestrator runs, quiet, and
    /// return (ingested, dropped, written).
    async fn run_pipeline(plan: &TeePlan) -> Result<(u64, u64, u64), TeeError> {
        let ticker = ProgressTicker::start();
        let progress = ProgressContext::new(
            &ticker,
            StatusStream::new(true),
            plan.flags.progress,
            plan.flags.cleanup,
            plan.redux_stride(),
        );

        let result = async {
            let mut store = LineStore::new();
            let ingested = ingestion::read_sources(&plan.inputs, &mut store, &progress).await?;

            if store.is_empty() {
                return Ok((ingested, 0, 0));
            }

            let mut dropped = 0;
            if plan.flags.sort {
                transform::sort_lines(&mut store);
                if plan.flags.unique {
                    dropped = transform::dedup_adjacent(&mut store).dropped;
                }
            }

            let mut writer = FanoutWriter::open(&plan.outputs, plan.flags.append)?;
            let written = writer.write_all(&store, &progress).await?;
            writer.close().await?;

            Ok((ingested, dropped, written))
        }
        .await;

        ticker.stop().await;
        result
    }

    /// Scenario: inputs b, a, b with sort+unique -> sink holds a, b and
    /// one line was dropped.
    #[tokio::test]
    async fn test_sort_unique_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "b\na\nb\n").unwrap();

        let plan = TeePlan {
            inputs: vec![id(&input)],
            outputs: vec![id(&output)],
            flags: TeeFlags {
                sort: true,
                unique: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let (ingested, dropped, written) = run_pipeline(&plan).await.unwrap();

        assert_eq!(ingested, 3);
        assert_eq!(dropped, 1);
        assert_eq!(written, 2);
        assert_eq!(fs::read(&output).unwrap(), b"a\nb\n");
    }

    /// Scenario: no sort, no unique -> output order equals concatenated
    /// input order exactly.
    #[tokio::test]
    async fn test_identity_transform_preserves_order() {
        let dir = tempdir().unwrap();
        let in_x = dir.path().join("x.txt");
        let in_y = dir.path().join("y.txt");
        let out_a = dir.path().join("a.txt");
        let out_b = dir.path().join("b.txt");
        fs::write(&in_x, "x\n").unwrap();
        fs::write(&in_y, "y\n").unwrap();

        let plan = TeePlan {
            inputs: vec![id(&in_x), id(&in_y)],
            outputs: vec![id(&out_a), id(&out_b)],
            ..Default::default()
        };

        let (ingested, _, written) = run_pipeline(&plan).await.unwrap();

        assert_eq!(ingested, 2);
        assert_eq!(written, 2);
        assert_eq!(fs::read(&out_a).unwrap(), b"x\ny\n");
        assert_eq!(fs::read(&out_b).unwrap(), b"x\ny\n");
    }

    /// Every configured sink receives the same final byte sequence, raw
    /// bytes included, regardless of cleanup.
    #[tokio::test]
    async fn test_fanout_is_byte_identical_across_sinks() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let out_a = dir.path().join("a.bin");
        let out_b = dir.path().join("b.bin");
        fs::write(&input, b"k\x01v\n\xFF\xFE\nplain\n").unwrap();

        let plan = TeePlan {
            inputs: vec![id(&input)],
            outputs: vec![id(&out_a), id(&out_b)],
            flags: TeeFlags {
                cleanup: true,
                ..Default::default()
            },
            ..Default::default()
        };

        run_pipeline(&plan).await.unwrap();

        let bytes_a = fs::read(&out_a).unwrap();
        let bytes_b = fs::read(&out_b).unwrap();
        assert_eq!(bytes_a, b"k\x01v\n\xFF\xFE\nplain\n");
        assert_eq!(bytes_a, bytes_b);
    }

    /// Empty input: the write stage never runs, sinks are never opened.
    #[tokio::test]
    async fn test_empty_input_skips_sink_acquisition() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "").unwrap();
        fs::write(&output, "untouched\n").unwrap();

        let plan = TeePlan {
            inputs: vec![id(&input)],
            outputs: vec![id(&output)],
            ..Default::default()
        };

        let (ingested, _, written) = run_pipeline(&plan).await.unwrap();

        assert_eq!(ingested, 0);
        assert_eq!(written, 0);
        assert_eq!(fs::read(&output).unwrap(), b"untouched\n");
    }

    /// Missing source: fatal before any sink is opened or truncated.
    #[tokio::test]
    async fn test_missing_source_aborts_before_sinks() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        fs::write(&output, "previous\n").unwrap();

        let plan = TeePlan {
            inputs: vec![StreamId::from("/nonexistent/linetee-e2e.txt")],
            outputs: vec![id(&output)],
            ..Default::default()
        };

        let result = run_pipeline(&plan).await;

        assert!(matches!(result, Err(TeeError::SourceOpen { .. })));
        assert_eq!(fs::read(&output).unwrap(), b"previous\n");
    }

    /// Resolved defaults plus sort: ingest order across three sources,
    /// then a single sorted, deduplicated fan-out.
    #[tokio::test]
    async fn test_multi_source_sorted_merge() {
        let dir = tempdir().unwrap();
        let inputs: Vec<_> = [("1.txt", "pear\napple\n"), ("2.txt", "apple\nmango\n"), ("3.txt", "pear\n")]
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                fs::write(&path, content).unwrap();
                id(&path)
            })
            .collect();
        let output = dir.path().join("merged.txt");

        let (plan, notices) = config_loader::resolve(TeePlan {
            inputs,
            outputs: vec![id(&output)],
            flags: TeeFlags {
                unique: true,
                ..Default::default()
            },
            ..Default::default()
        });

        assert!(notices.is_empty());
        assert!(plan.flags.sort, "unique must imply sort");

        let (ingested, dropped, written) = run_pipeline(&plan).await.unwrap();

        assert_eq!(ingested, 5);
        assert_eq!(dropped, 2);
        assert_eq!(written, 3);
        assert_eq!(fs::read(&output).unwrap(), b"apple\nmango\npear\n");
    }
}
