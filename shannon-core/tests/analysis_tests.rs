use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use shannon_core::ShannonError;
use shannon_core::model::generator::{self, Distribution, SyntheticSpec};
use shannon_core::report::analyze_file;
use tempfile::tempdir;

#[test_log::test]
fn uniform_round_trip_is_close_to_log2_43() {
	let dir = tempdir().unwrap();
	let spec = SyntheticSpec { path: dir.path().join("uniform.txt"), ..SyntheticSpec::uniform() };
	generator::generate_file(&mut StdRng::seed_from_u64(2024), &spec).unwrap();

	let analysis = analyze_file(&spec.path, false).unwrap();
	assert_eq!(analysis.symbols, 15_000);
	assert!(!analysis.undersized);
	assert!((analysis.entropy_1 - 43f64.log2()).abs() < 0.05, "H1 = {}", analysis.entropy_1);
	assert!(analysis.entropy_1 <= 43f64.log2());
	// 1849 possible pairs over ~15000 windows: strongly underestimated
	assert!(analysis.entropy_2 < analysis.entropy_1);
	assert!(analysis.ratio > 0.0 && analysis.ratio < 1.0);
}

#[test_log::test]
fn skewed_round_trip_matches_distribution_entropy() {
	let dir = tempdir().unwrap();
	let spec = SyntheticSpec { path: dir.path().join("non_uniform.txt"), ..SyntheticSpec::skewed() };
	generator::generate_file(&mut StdRng::seed_from_u64(7), &spec).unwrap();

	let total: f64 = generator::SKEWED_WEIGHTS.iter().map(|w| *w as f64).sum();
	let expected: f64 = generator::SKEWED_WEIGHTS
		.iter()
		.filter(|w| **w > 0)
		.map(|w| {
			let p = *w as f64 / total;
			-p * p.log2()
		})
		.sum();

	let analysis = analyze_file(&spec.path, false).unwrap();
	assert_eq!(analysis.symbols, 12_000);
	assert!((analysis.entropy_1 - expected).abs() < 0.05, "H1 = {} expected {}", analysis.entropy_1, expected);
	assert!(!fs::read_to_string(&spec.path).unwrap().contains('й'));
}

#[test_log::test]
fn seeded_generation_is_reproducible() {
	let dir = tempdir().unwrap();
	let first = SyntheticSpec { path: dir.path().join("a.txt"), size: 1000, distribution: Distribution::skewed() };
	let second = SyntheticSpec { path: dir.path().join("b.txt"), ..first.clone() };
	generator::generate_file(&mut StdRng::seed_from_u64(11), &first).unwrap();
	generator::generate_file(&mut StdRng::seed_from_u64(11), &second).unwrap();

	assert_eq!(fs::read(&first.path).unwrap(), fs::read(&second.path).unwrap());
}

#[test_log::test]
fn missing_file_is_an_io_error() {
	let dir = tempdir().unwrap();
	let err = analyze_file(dir.path().join("literature.txt"), true).unwrap_err();
	assert!(matches!(err, ShannonError::Io { .. }));
}

#[test_log::test]
fn invalid_utf8_is_a_decode_error() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("broken.txt");
	fs::write(&path, [0xd0, 0xb0, 0xd0]).unwrap();
	let err = analyze_file(&path, false).unwrap_err();
	assert!(matches!(err, ShannonError::Decode { offset: 2, .. }));
}

#[test_log::test]
fn small_text_file_in_text_mode() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("literature.txt");
	fs::write(&path, "Ёж, ЁЖ! ёж? ЕЖ.").unwrap();

	let analysis = analyze_file(&path, true).unwrap();
	assert!(analysis.undersized);
	assert_eq!(analysis.size_kb(), 0);
	// normalizes to "еж. еж. еж. еж.": е, ж, '.' x4 each and ' ' x3
	let raw = analyze_file(&path, false).unwrap();
	assert!(analysis.entropy_1 < raw.entropy_1);
	let counts = [4.0, 4.0, 4.0, 3.0];
	let expected: f64 = counts.iter().map(|c: &f64| -(c / 15.0) * (c / 15.0).log2()).sum();
	assert!((analysis.entropy_1 - expected).abs() < 1e-12);
}

#[test_log::test]
fn failed_generation_leaves_previous_file_intact() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("uniform.txt");
	fs::write(&path, "previous").unwrap();

	let spec = SyntheticSpec {
		path: path.clone(),
		size: 10,
		distribution: Distribution::Weighted { symbols: "ab".to_owned(), weights: vec![0, 0] },
	};
	assert!(generator::generate_file(&mut StdRng::seed_from_u64(0), &spec).is_err());
	assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test_log::test]
fn unwritable_destination_leaves_nothing_behind() {
	let dir = tempdir().unwrap();
	let spec = SyntheticSpec { path: dir.path().join("missing").join("uniform.txt"), size: 10, ..SyntheticSpec::uniform() };
	let err = generator::generate_file(&mut StdRng::seed_from_u64(0), &spec).unwrap_err();
	assert!(matches!(err, ShannonError::Io { .. }));
	assert!(!spec.path.exists());
}
