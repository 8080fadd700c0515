mod support;

use support::{output::RecordingOutput, tracker_env::TrackerEnvGuard, wav::write_test_wav};

use natya_tracker::{
    catalog::PracticeCategory,
    config,
    egui_app::controller::TrackerController,
    practice_log::{LOG_HEADER, PracticeLog, format_date, today},
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TONE: [f32; 6] = [0.0, 0.2, -0.2, 0.4, -0.4, 0.0];

struct TrackerHarness {
    _env: TrackerEnvGuard,
    temp: TempDir,
    output: RecordingOutput,
    controller: TrackerController,
}

impl TrackerHarness {
    fn new(tracks: &[(&str, &str)]) -> Self {
        Self::with_config(tracks, None)
    }

    fn with_config(tracks: &[(&str, &str)], config_toml: Option<&str>) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let env = TrackerEnvGuard::set_home(temp.path().to_path_buf());
        if let Some(text) = config_toml {
            std::fs::write(temp.path().join(config::CONFIG_FILE_NAME), text)
                .expect("write config");
        }
        for (folder, name) in tracks {
            write_test_wav(&temp.path().join(folder).join(name), &TONE);
        }
        let settings = config::load_or_default().expect("load settings");
        let output = RecordingOutput::default();
        let controller = TrackerController::new(settings, Ok(output.boxed())).with_rng_seed(11);
        Self {
            _env: env,
            temp,
            output,
            controller,
        }
    }

    fn base(&self) -> &Path {
        self.temp.path()
    }
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open log");
    reader
        .records()
        .map(|record| {
            record
                .expect("read row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn settings_default_to_files_beside_the_base_dir() {
    let harness = TrackerHarness::new(&[]);
    let settings = harness.controller.settings();
    assert_eq!(settings.media_root, harness.base().join("music"));
    assert_eq!(settings.log_path, harness.base().join("practice_log.csv"));
}

#[test]
fn adavus_play_is_repeatable_for_unchanged_folder() {
    let mut harness = TrackerHarness::new(&[
        ("music/adavus", "tatta_adavu.wav"),
        ("music/adavus", "Tatta-Adavu (slow).wav"),
        ("music/adavus", "natta_adavu.wav"),
    ]);

    harness.controller.select_category(PracticeCategory::Adavus);
    harness.controller.select_movement("Tatta Adavu");
    harness.controller.play_selected();
    let first = harness.controller.ui.now_playing.clone();
    harness.controller.play_selected();

    assert!(first.starts_with("Now playing: "));
    assert_eq!(harness.controller.ui.now_playing, first);
    let started = harness.output.started();
    assert_eq!(started.len(), 2);
    assert_eq!(started[0], started[1]);
    assert!(harness.controller.ui.dialog.is_none());
}

#[test]
fn items_play_draws_from_every_variant() {
    let mut harness = TrackerHarness::new(&[
        ("music/items", "jathiswaram1.wav"),
        ("music/items", "JATHISWARAM-1 live.wav"),
        ("music/items", "jathiswaram 1 (practice).wav"),
        ("music/items", "jathiswaram2.wav"),
    ]);

    for _ in 0..40 {
        harness.controller.play(PracticeCategory::Items, "Jathiswaram 1");
    }

    let mut distinct: Vec<PathBuf> = harness.output.started();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 3);
    assert!(
        distinct
            .iter()
            .all(|path| !path.ends_with("jathiswaram2.wav"))
    );
}

#[test]
fn config_can_make_items_deterministic() {
    let mut harness = TrackerHarness::with_config(
        &[
            ("music/items", "varnam a.wav"),
            ("music/items", "varnam b.wav"),
        ],
        Some("[selection]\nitems = \"first\"\n"),
    );

    for _ in 0..10 {
        harness.controller.play(PracticeCategory::Items, "Varnam");
    }

    let started = harness.output.started();
    assert!(started.iter().all(|path| path == &started[0]));
}

#[test]
fn media_dir_from_config_is_searched() {
    let mut harness = TrackerHarness::with_config(
        &[("tracks/adavus", "sarikkal_adavu.wav")],
        Some("media_dir = \"tracks\"\n"),
    );

    harness.controller.play(PracticeCategory::Adavus, "Sarikkal Adavu");

    assert_eq!(
        harness.controller.ui.now_playing,
        "Now playing: sarikkal_adavu.wav"
    );
}

#[test]
fn undecodable_track_reports_path_and_stays_idle() {
    let mut harness = TrackerHarness::new(&[]);
    let folder = harness.base().join("music").join("items");
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("tillana.mp3"), b"definitely not mpeg").unwrap();

    harness.controller.play(PracticeCategory::Items, "Tillana");

    let dialog = harness.controller.ui.dialog.clone().expect("error dialog");
    assert!(dialog.message.starts_with("Could not play audio:"));
    assert!(dialog.message.contains("tillana.mp3"));
    assert!(harness.controller.ui.now_playing.is_empty());
    assert!(harness.output.active().is_none());
}

#[test]
fn items_not_found_lists_folder_and_naming_hint() {
    let mut harness = TrackerHarness::new(&[("music/items", "padam.txt.wav")]);
    std::fs::write(
        harness.base().join("music").join("items").join("tillana.txt"),
        b"",
    )
    .unwrap();

    harness.controller.play(PracticeCategory::Items, "Tillana");

    let dialog = harness.controller.ui.dialog.clone().expect("error dialog");
    let folder = harness.base().join("music").join("items");
    assert!(dialog.message.contains(&folder.display().to_string()));
    assert!(dialog.message.contains("'JATHISWARAM-1.wav'"));
    assert!(harness.output.started().is_empty());
}

#[test]
fn stop_before_any_play_leaves_nothing_playing() {
    let mut harness = TrackerHarness::new(&[]);
    harness.controller.stop();
    assert!(harness.controller.ui.now_playing.is_empty());
    assert!(harness.controller.ui.dialog.is_none());
}

#[test]
fn stop_clears_the_active_track() {
    let mut harness = TrackerHarness::new(&[("music/adavus", "visharu adavu.wav")]);
    harness.controller.play(PracticeCategory::Adavus, "Visharu Adavu");
    assert!(harness.output.active().is_some());

    harness.controller.stop();

    assert!(harness.output.active().is_none());
    assert!(harness.controller.ui.now_playing.is_empty());
}

#[test]
fn fresh_log_gets_header_and_single_row() {
    let harness = TrackerHarness::new(&[]);
    let log = PracticeLog::new(harness.controller.practice_log_path());
    assert!(!log.path().exists());

    log.log_practice("Adavus", "Tatta Adavu", "10", "")
        .expect("log practice");

    let day = format_date(today()).unwrap();
    assert_eq!(
        read_rows(log.path()),
        vec![
            LOG_HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            vec![day, "Adavus".into(), "Tatta Adavu".into(), "10".into(), String::new()],
        ]
    );
}

#[test]
fn non_numeric_duration_leaves_log_untouched() {
    let mut harness = TrackerHarness::new(&[]);
    harness.controller.select_movement("Natta Adavu");
    harness.controller.ui.duration = "20".into();
    harness.controller.save_practice();
    harness.controller.dismiss_dialog();
    let path = harness.controller.practice_log_path().to_path_buf();
    let before = std::fs::read(&path).unwrap();

    harness.controller.ui.duration = "abc".into();
    harness.controller.save_practice();

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(read_rows(&path).len(), 2);
    let dialog = harness.controller.ui.dialog.clone().expect("error dialog");
    assert_eq!(dialog.message, "Duration must be a number (minutes).");
}

#[test]
fn saving_from_the_form_logs_category_label() {
    let mut harness = TrackerHarness::new(&[]);
    harness.controller.select_category(PracticeCategory::Items);
    harness.controller.select_movement("Mishra Alarippu");
    harness.controller.ui.duration = " 25 ".into();
    harness.controller.ui.notes = "tempo, \"medium\"".into();

    harness.controller.save_practice();

    let rows = read_rows(harness.controller.practice_log_path());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "Items");
    assert_eq!(rows[1][2], "Mishra Alarippu");
    assert_eq!(rows[1][3], "25");
    assert_eq!(rows[1][4], "tempo, \"medium\"");
}
