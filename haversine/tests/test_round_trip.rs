#[cfg(test)]
mod test_round_trip {
    use haversine::aggregate::{extract_numbers, summarize, Stop};
    use haversine::dataset::{generate, write_files};
    use haversine::source::ValueSource;
    use haversine::{answers, distance, earth};
    use json::buffer::SourceBuffer;
    use std::fs;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-10 * f64::max(expected.abs(), 1.0)
    }

    #[test]
    fn single_pair_seed_12345() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("hspairs.json");
        let answers_path = dir.path().join("hsdist.bin");

        let mut source = ValueSource::new(12345);
        assert_eq!(source.seed(), 12345);
        let data = generate(1, &mut source);
        let written = write_files(&data, earth::RADIUS, &json_path, &answers_path).unwrap();
        let expected = distance::naive(&data.pairs[0], earth::RADIUS);
        assert_eq!(written.count, 1);
        assert_eq!(written.mean(), Some(expected));

        let buffer = SourceBuffer::load(&json_path).unwrap();
        let summary = summarize(&buffer, earth::RADIUS);
        assert_eq!(summary.pairs(), 1);
        assert_eq!(summary.leftover, 0);
        assert_eq!(summary.stop, Stop::EndOfInput);
        let mean = summary.mean().unwrap();
        assert!(close(mean, expected), "parsed {mean}, generated {expected}");

        let reference = answers::read(&answers_path).unwrap();
        assert_eq!(reference, [expected]);
    }

    #[test]
    fn every_pair_matches_its_reference_record() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("pairs.json");
        let answers_path = dir.path().join("dist.bin");

        let data = generate(1000, &mut ValueSource::new(987654321));
        let written = write_files(&data, earth::RADIUS, &json_path, &answers_path).unwrap();

        let buffer = SourceBuffer::load(&json_path).unwrap();
        let extraction = extract_numbers(&buffer);
        assert_eq!(extraction.stop, Stop::EndOfInput);
        assert_eq!(extraction.values.len(), 4000);

        let reference = answers::read(&answers_path).unwrap();
        assert_eq!(reference.len(), 1000);
        assert_eq!(fs::metadata(&answers_path).unwrap().len(), 8000);

        for (i, (pair, expected)) in extraction.pairs().zip(reference.iter()).enumerate() {
            let actual = distance::naive(&pair, earth::RADIUS);
            assert!(
                close(actual, *expected),
                "pair {i}: parsed {actual}, reference {expected}"
            );
        }

        let summary = summarize(&buffer, earth::RADIUS);
        assert_eq!(summary.pairs(), 1000);
        assert!(close(summary.aggregate.sum, written.sum));
    }

    #[test]
    fn same_seed_same_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut outputs = Vec::new();
        for run in 0..2 {
            let json_path = dir.path().join(format!("pairs_{run}.json"));
            let answers_path = dir.path().join(format!("dist_{run}.bin"));
            let data = generate(64, &mut ValueSource::new(4242));
            write_files(&data, earth::RADIUS, &json_path, &answers_path).unwrap();
            outputs.push((
                fs::read(&json_path).unwrap(),
                fs::read(&answers_path).unwrap(),
            ));
        }
        assert_eq!(outputs[0], outputs[1]);
    }

    #[test]
    fn empty_file_has_no_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, b"").unwrap();

        let buffer = SourceBuffer::load(&path).unwrap();
        let summary = summarize(&buffer, earth::RADIUS);
        assert_eq!(summary.pairs(), 0);
        assert_eq!(summary.mean(), None);
    }
}
