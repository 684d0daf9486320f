// Integration tests for tunematch
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use tempfile::TempDir;
use tunematch::{
    load_catalog, load_liked_tracks, write_report, DiagnosticEvent, EmptyReason, Error,
    OutputFormat, RecommendConfig, Recommender, RecordingDiagnostics,
};

const CATALOG_HEADER: &str =
    "track_id,artists,album_name,track_name,popularity,duration_ms,danceability,energy,acousticness,valence,tempo,track_genre";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn catalog_csv(rows: &[&str]) -> String {
    let mut csv = String::from(CATALOG_HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// A/B/C catalog where A and B are identical pop tracks and C is their opposite
fn abc_catalog(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "dataset.csv",
        &catalog_csv(&[
            "1,Artist A,Album,A,1,1000,1,1,1,1,1,pop",
            "2,Artist B,Album,B,1,1000,1,1,1,1,1,pop",
            "3,Artist C,Album,C,-1,1000,-1,-1,-1,-1,-1,rock",
        ]),
    )
}

fn sample_catalog(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "dataset.csv",
        &catalog_csv(&[
            "1,Adele,25,Hello,82,295000,0.481,0.451,0.33,0.289,157.9,pop",
            "2,Adele,21,Someone Like You,80,285000,0.556,0.319,0.893,0.294,135.0,pop",
            "3,Adele,21,Rolling in the Deep,78,228000,0.730,0.769,0.131,0.507,104.9,pop",
            "4,Cover Band,Covers,hello,20,300000,0.470,0.460,0.35,0.280,150.0,pop",
            "5,Lionel Richie,Can't Slow Down,Hello,70,250000,0.520,0.290,0.600,0.330,124.0,soul",
            "6,Radiohead,Pablo Honey,Creep,79,238000,0.515,0.430,0.010,0.104,92.0,rock",
            "7,Radiohead,OK Computer,Karma Police,75,264000,0.360,0.505,0.064,0.317,74.8,rock",
            "8,Nirvana,Nevermind,Come as You Are,77,219000,0.500,0.824,0.00016,0.539,120.0,grunge",
            "9,Marvin Gaye,What's Going On,Inner City Blues,60,327000,0.650,0.420,0.250,0.700,96.0,soul",
            "10,Beyonce,Lemonade,Hold Up,70,221000,0.600,0.520,0.200,0.450,96.0,pop",
        ]),
    )
}

fn run(liked: &Path, catalog: &Path, config: RecommendConfig) -> tunematch::RecommendationReport {
    let liked = load_liked_tracks(liked).unwrap();
    let catalog = load_catalog(catalog).unwrap().normalize();
    Recommender::new(config).recommend(&liked, &catalog).unwrap()
}

#[test]
fn test_single_liked_track_end_to_end() {
    let dir = TempDir::new().unwrap();
    let catalog = abc_catalog(dir.path());
    let liked = write_file(dir.path(), "liked.csv", "Name,Artist\nA,\n");

    let report = run(&liked, &catalog, RecommendConfig::default());
    let results = report.recommendations();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].track_name, "B");
    assert!((results[0].similarity - 1.0).abs() < 1e-9);
    assert!((results[0].final_score - 1.2).abs() < 1e-9);
}

#[test]
fn test_results_respect_invariants() {
    let dir = TempDir::new().unwrap();
    let catalog = sample_catalog(dir.path());
    let liked = write_file(
        dir.path(),
        "liked.csv",
        "Name,Artist\nhello,adele\nCREEP,Radiohead\nUnknown Song,Nobody\n",
    );

    let config = RecommendConfig {
        top_n: 5,
        ..Default::default()
    };
    let report = run(&liked, &catalog, config);
    let results = report.recommendations();

    assert!(!results.is_empty());
    assert!(results.len() <= 5);
    for pair in results.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
    for rec in results {
        // Liked titles and covers of them never come back
        assert_ne!(rec.track_name.to_lowercase(), "hello");
        assert_ne!(rec.track_name.to_lowercase(), "creep");
        // Genre preferences come from Adele's "Hello" and Radiohead's "Creep" only
        assert!(rec.track_genre == "pop" || rec.track_genre == "rock", "{}", rec.track_genre);
        assert!(rec.genre_bonus == 0.0 || rec.genre_bonus == 0.2);
    }

    let mut names: Vec<&str> = results.iter().map(|r| r.track_name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), results.len());

    assert_eq!(report.stats.liked_count, 3);
    assert_eq!(report.stats.resolved_count, 2);
    assert_eq!(report.stats.unresolved, vec!["'Unknown Song' by Nobody".to_string()]);
    assert_eq!(report.stats.preferred_genres, vec!["pop", "rock"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let catalog = sample_catalog(dir.path());
    let liked = write_file(dir.path(), "liked.csv", "Name\nHello\nKarma Police\n");

    let first = run(&liked, &catalog, RecommendConfig::default());
    let second = run(&liked, &catalog, RecommendConfig::default());
    let parallel_config = RecommendConfig {
        parallel: true,
        ..Default::default()
    };
    let parallel = run(&liked, &catalog, parallel_config);
    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn test_unresolved_liked_tracks_yield_empty_outcome() {
    let dir = TempDir::new().unwrap();
    let catalog = abc_catalog(dir.path());
    let liked = load_liked_tracks(write_file(dir.path(), "liked.csv", "Name\nZ\n")).unwrap();
    let catalog = load_catalog(catalog).unwrap().normalize();

    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let report = Recommender::default()
        .with_diagnostics(diagnostics.clone())
        .recommend(&liked, &catalog)
        .unwrap();

    assert_eq!(report.outcome.empty_reason(), Some(EmptyReason::NoLikedItemResolved));
    assert_eq!(diagnostics.unresolved(), vec!["Z".to_string()]);
    assert!(diagnostics.events().contains(&DiagnosticEvent::NoGenrePreferences));
}

#[test]
fn test_missing_catalog_column() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "dataset.csv",
        "track_name,artists,track_genre,popularity,danceability,energy,acousticness,valence\nA,x,pop,1,1,1,1,1\n",
    );
    match load_catalog(&path) {
        Err(Error::MissingColumn { column, .. }) => assert_eq!(column, "tempo"),
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn test_liked_without_artist_column() {
    let dir = TempDir::new().unwrap();
    let catalog = sample_catalog(dir.path());
    let liked = write_file(dir.path(), "liked.csv", "Name\nHello\n");

    // Every "Hello" record resolves, covers included, so pop and soul are preferred
    let report = run(&liked, &catalog, RecommendConfig::default());
    assert_eq!(report.stats.resolved_count, 1);
    assert_eq!(report.stats.preferred_genres, vec!["pop", "soul"]);
}

#[test]
fn test_csv_output_file() {
    let dir = TempDir::new().unwrap();
    let catalog = abc_catalog(dir.path());
    let liked = write_file(dir.path(), "liked.csv", "Name\nA\n");
    let report = run(&liked, &catalog, RecommendConfig::default());

    let out_path = dir.path().join("out.csv");
    let file = fs::File::create(&out_path).unwrap();
    write_report(&report, OutputFormat::Csv, file).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("track_name,artists,track_genre,similarity,final_score"));
    assert!(lines.next().unwrap().starts_with("B,Artist B,pop,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_cli_json_output() {
    let dir = TempDir::new().unwrap();
    let catalog = abc_catalog(dir.path());
    let liked = write_file(dir.path(), "liked.csv", "Name\nA\n");

    let output = Command::new(env!("CARGO_BIN_EXE_tunematch"))
        .arg("--liked")
        .arg(&liked)
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "--log-level", "error"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"][0]["track_name"], "B");
    assert_eq!(value["stats"]["results_count"], 1);
}

#[test]
fn test_cli_empty_outcome_exit_code() {
    let dir = TempDir::new().unwrap();
    let catalog = abc_catalog(dir.path());
    let liked = write_file(dir.path(), "liked.csv", "Name\nNowhere\n");

    let output = Command::new(env!("CARGO_BIN_EXE_tunematch"))
        .arg("-l")
        .arg(&liked)
        .arg("-c")
        .arg(&catalog)
        .args(["--log-level", "error"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No recommendations found"));
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_tunematch"))
        .arg("--liked")
        .arg(dir.path().join("absent.csv"))
        .arg("--catalog")
        .arg(dir.path().join("absent_dataset.csv"))
        .args(["--log-level", "error"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
}
