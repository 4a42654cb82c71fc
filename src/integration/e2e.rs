//! End-to-end triage runs

use crate::error::TriageError;
use crate::integration::fixtures::{read_worklist, TestRow, TestWorkspace};
use crate::pipeline::{run, Summary};

fn paths(worklist: &[(String, String)]) -> Vec<&str> {
    worklist.iter().map(|(path, _)| path.as_str()).collect()
}

fn library() -> Vec<TestRow> {
    vec![
        TestRow::hevc10_dts(),
        TestRow::h264_truehd(),
        TestRow::hevc8_pgs(),
        TestRow::hevc10_pgs(),
        TestRow::h264_dca_dvd(),
        TestRow::h264_aac(),
        TestRow::awkward_path(),
    ]
}

#[test]
fn test_full_library_run() {
    let ws = TestWorkspace::with_rows(&library());

    let summary = run(&ws.config).unwrap();
    assert_eq!(
        summary,
        Summary {
            audio_only: 3,
            full_fix: 2,
        }
    );

    let audio = read_worklist(&ws.audio_output());
    assert_eq!(
        audio,
        vec![
            (
                "/media/movies/Alien (1979).mkv".to_string(),
                "audio_truehd".to_string()
            ),
            (
                "/media/tv/Old Show S02E03.mkv".to_string(),
                "audio_dca|subs_pgs/dvd".to_string()
            ),
            (
                "/media/movies/Me, \"Myself\" & Irene.mkv".to_string(),
                "audio_dts".to_string()
            ),
        ]
    );

    let full = read_worklist(&ws.full_fix_output());
    assert_eq!(
        full,
        vec![
            (
                "/media/movies/Dune (2021).mkv".to_string(),
                "hevc_10bit|audio_dts".to_string()
            ),
            (
                "/media/movies/Arrival (2016).mkv".to_string(),
                "hevc_10bit|subs_pgs/dvd".to_string()
            ),
        ]
    );
}

#[test]
fn test_partitions_disjoint() {
    let ws = TestWorkspace::with_rows(&library());
    run(&ws.config).unwrap();

    let audio = read_worklist(&ws.audio_output());
    let full = read_worklist(&ws.full_fix_output());
    let full_paths = paths(&full);
    assert!(paths(&audio).iter().all(|p| !full_paths.contains(p)));
}

#[test]
fn test_unflagged_rows_dropped() {
    let ws = TestWorkspace::with_rows(&[TestRow::hevc8_pgs(), TestRow::h264_aac()]);

    let summary = run(&ws.config).unwrap();
    assert_eq!(summary, Summary::default());
    assert!(read_worklist(&ws.audio_output()).is_empty());
    assert!(read_worklist(&ws.full_fix_output()).is_empty());
}

#[test]
fn test_output_preserves_original_fields() {
    let ws = TestWorkspace::with_rows(&[TestRow::h264_dca_dvd()]);
    run(&ws.config).unwrap();

    let content = std::fs::read_to_string(ws.audio_output()).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "path,container,size_bytes,vcodec,vprofile,pix_fmt,acodec,subtitle_codecs,reason",
            "/media/tv/Old Show S02E03.mkv,\"matroska,webm\",734003200,H264,Main,yuv420p,DCA,dvd_subtitle,audio_dca|subs_pgs/dvd",
        ]
    );
}

#[test]
fn test_run_is_idempotent() {
    let ws = TestWorkspace::with_rows(&library());

    run(&ws.config).unwrap();
    let audio_first = std::fs::read(ws.audio_output()).unwrap();
    let full_first = std::fs::read(ws.full_fix_output()).unwrap();

    run(&ws.config).unwrap();
    assert_eq!(std::fs::read(ws.audio_output()).unwrap(), audio_first);
    assert_eq!(std::fs::read(ws.full_fix_output()).unwrap(), full_first);
}

#[test]
fn test_missing_column_writes_nothing() {
    let ws = TestWorkspace::with_report(
        "path,container,size_bytes,vcodec,vprofile,pix_fmt,acodec\n/m/a.mkv,mkv,1,h264,,yuv420p,dts\n",
    );

    match run(&ws.config) {
        Err(TriageError::MissingColumn(column)) => assert_eq!(column, "subtitle_codecs"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
    assert!(!ws.audio_output().exists());
    assert!(!ws.full_fix_output().exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let mut ws = TestWorkspace::with_rows(&[]);
    ws.config.input_path = ws.dir.path().join("not-there.csv");

    assert!(matches!(
        run(&ws.config),
        Err(TriageError::InputNotFound(_))
    ));
    assert!(!ws.audio_output().exists());
}

#[test]
fn test_unwritable_full_fix_output() {
    let mut ws = TestWorkspace::with_rows(&library());
    ws.config.full_fix_output_path = ws.dir.path().join("missing-dir").join("full.csv");

    assert!(matches!(
        run(&ws.config),
        Err(TriageError::OutputWriteFailure { .. })
    ));
    // The audio worklist was already written and is left in place
    assert!(ws.audio_output().exists());
}

#[test]
fn test_short_row_classified_with_empty_fields() {
    let ws = TestWorkspace::with_report(
        "path,container,size_bytes,vcodec,vprofile,pix_fmt,acodec,subtitle_codecs\n/m/a.mkv,mkv,1,h264,,yuv420p,dts\n",
    );

    let summary = run(&ws.config).unwrap();
    assert_eq!(summary.audio_only, 1);
    assert_eq!(
        read_worklist(&ws.audio_output()),
        vec![("/m/a.mkv".to_string(), "audio_dts".to_string())]
    );

    let content = std::fs::read_to_string(ws.audio_output()).unwrap();
    assert!(content.contains("/m/a.mkv,mkv,1,h264,,yuv420p,dts,,audio_dts\r\n"));
}

#[test]
fn test_newline_in_path_survives_run() {
    let ws = TestWorkspace::with_report(
        "path,container,size_bytes,vcodec,vprofile,pix_fmt,acodec,subtitle_codecs\n\"/m/a\nb.mkv\",mkv,1,hevc,Main 10,yuv420p10le,truehd,\n",
    );

    run(&ws.config).unwrap();
    assert_eq!(
        read_worklist(&ws.full_fix_output()),
        vec![(
            "/m/a\nb.mkv".to_string(),
            "hevc_10bit|audio_truehd".to_string()
        )]
    );

    let content = std::fs::read_to_string(ws.full_fix_output()).unwrap();
    assert!(content.contains("\"/m/a\nb.mkv\",mkv,1,hevc"));
}
