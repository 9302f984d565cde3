//! Chronological ordering and smoke-level counting of derived series.
//!
//! Run with: cargo test --test series_test

mod common;

use chrono::FixedOffset;
use common::{at, dashboard, reading, FakeSurfaces};
use sensor_dashboard::backend::SmokeLevel;
use sensor_dashboard::dashboard::{
    ChartView, Dimension, SeriesSet, SmokeLevelCounts, TimeLabeler,
};

#[test]
fn newest_first_fetch_is_rendered_oldest_first() {
    let mut dash = dashboard(FakeSurfaces::all());
    dash.notify_surfaces_ready();
    dash.accept_fetch(Ok(vec![
        reading(120, Some("HIGH")),
        reading(60, Some("LOW")),
        reading(0, Some("MEDIUM")),
    ]));

    let times: Vec<_> = dash.readings().iter().map(|r| r.timestamp).collect();
    assert_eq!(times, vec![at(0), at(60), at(120)]);

    let temperature = &dash.renderer().created[0];
    assert_eq!(temperature.view, ChartView::Temperature);
    assert_eq!(temperature.data.labels, vec!["10:00:00", "10:01:00", "10:02:00"]);
    assert_eq!(temperature.data.datasets[0].data, vec![20.0, 80.0, 140.0]);

    let pie = &dash.renderer().created[4];
    assert_eq!(pie.view, ChartView::SmokeLevelPie);
    assert_eq!(pie.data.labels, vec!["LOW", "MEDIUM", "HIGH"]);
    assert_eq!(pie.data.datasets[0].data, vec![1.0, 1.0, 1.0]);
}

#[test]
fn unknown_level_is_counted_nowhere_but_still_plotted() {
    let readings = vec![
        reading(0, Some("LOW")),
        reading(60, Some("UNKNOWN")),
        reading(120, Some("HIGH")),
    ];
    let series = SeriesSet::build(&readings, &TimeLabeler::default());

    assert_eq!(
        series.smoke_levels,
        SmokeLevelCounts {
            low: 1,
            medium: 0,
            high: 1
        }
    );
    for dimension in Dimension::ALL {
        assert_eq!(series.series(dimension).len(), 3);
    }
    assert_eq!(series.smoke.values(), vec![100.0, 160.0, 220.0]);
}

#[test]
fn counts_never_exceed_readings() {
    let tags = [
        Some("LOW"),
        Some("MEDIUM"),
        Some("HIGH"),
        Some("low"),
        Some(""),
        Some("HIGH "),
        None,
    ];
    let readings: Vec<_> = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| reading(i as i64 * 10, *tag))
        .collect();

    let counts = SmokeLevelCounts::tally(&readings);
    assert_eq!(counts.total(), 3);
    assert!(counts.total() <= readings.len());

    let all_known: Vec<_> = readings.iter().take(3).cloned().collect();
    assert_eq!(SmokeLevelCounts::tally(&all_known).total(), all_known.len());
}

#[test]
fn smoke_level_parsing_is_exact() {
    assert_eq!(SmokeLevel::parse("MEDIUM"), Some(SmokeLevel::Medium));
    assert_eq!(SmokeLevel::parse("Medium"), None);
    assert_eq!(reading(0, None).smoke_level(), None);
}

#[test]
fn equal_timestamps_keep_fetch_order() {
    let mut first = reading(0, Some("LOW"));
    first.temperature = 1.0;
    let mut second = reading(0, Some("LOW"));
    second.temperature = 2.0;

    let mut dash = dashboard(FakeSurfaces::all());
    dash.accept_fetch(Ok(vec![reading(60, None), first, second]));

    let temps: Vec<_> = dash.readings().iter().map(|r| r.temperature).collect();
    assert_eq!(temps, vec![1.0, 2.0, 80.0]);
}

#[test]
fn labels_use_configured_offset_and_format() {
    let labeler = TimeLabeler::new(FixedOffset::east_opt(2 * 3600).unwrap(), "%H:%M");
    assert_eq!(labeler.label(at(90)), "12:01");

    let series = SeriesSet::build(&[reading(0, None)], &labeler);
    assert_eq!(series.labels, vec!["12:00"]);
    assert_eq!(series.light.points[0].label, "12:00");
}

#[test]
fn unusable_label_format_falls_back_to_clock_time() {
    let labeler = TimeLabeler::new(FixedOffset::east_opt(0).unwrap(), "%Q");
    assert_eq!(labeler.label(at(0)), "10:00:00");
    assert_eq!(labeler.label(at(3725)), "11:02:05");
}
