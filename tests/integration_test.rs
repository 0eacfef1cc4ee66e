use chrono::{Duration, NaiveDate, NaiveTime};
use seeyou_cup_wasm::cup_types::{CupDocument, Distance, Task, TaskDuration, TimeOfDay, Waypoint};
use seeyou_cup_wasm::document::{to_cup_string, write_document};
use seeyou_cup_wasm::error::{CupError, ErrorKind};
use seeyou_cup_wasm::options::TaskOptions;
use seeyou_cup_wasm::writer::Writer;

fn output(writer: &Writer<Vec<u8>>) -> Vec<String> {
    std::str::from_utf8(writer.get_ref())
        .unwrap()
        .split_terminator("\r\n")
        .map(str::to_string)
        .collect()
}

fn competition_writer() -> Writer<Vec<u8>> {
    let mut writer = Writer::new(Vec::new()).unwrap();
    writer
        .write_waypoint(&Waypoint::new(
            "MEIER",
            "",
            "DE",
            51.0 + 7.345 / 60.0,
            6.0 + 24.765 / 60.0,
        ))
        .unwrap();
    writer
        .write_waypoint(
            &Waypoint::new("BRILO", "BRI", "DE", 51.0 + 24.2 / 60.0, 8.0 + 31.6 / 60.0)
                .with_elevation((1020, "ft")),
        )
        .unwrap();
    writer
        .write_waypoint(&Waypoint::new(
            "AILER",
            "",
            "DE",
            50.0 + 20.883 / 60.0,
            6.0 + 55.617 / 60.0,
        ))
        .unwrap();
    writer
}

#[test]
fn test_meiersberg_end_to_end() {
    let mut writer = Writer::new(Vec::new()).unwrap();
    writer
        .write_waypoint(&Waypoint::new(
            "Meiersberg",
            "MEIER",
            "DE",
            51.0 + 7.345 / 60.0,
            6.0 + 24.765 / 60.0,
        ))
        .unwrap();

    assert_eq!(
        output(&writer),
        vec![
            "name,code,country,lat,lon,elev,style,rwdir,rwlen,freq,desc",
            "\"Meiersberg\",\"MEIER\",DE,5107.345N,00624.765E,,1,,,,",
        ]
    );
}

#[test]
fn test_fai_task_end_to_end() {
    let mut writer = competition_writer();
    writer
        .write_task("500 km FAI", &["MEIER", "BRILO", "AILER", "MEIER"])
        .unwrap();

    let lines = output(&writer);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[2], "\"BRILO\",\"BRI\",DE,5124.200N,00831.600E,1020ft,1,,,,");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "-----Related Tasks-----");
    assert_eq!(lines[6], "\"500 km FAI\",\"MEIER\",\"BRILO\",\"AILER\",\"MEIER\"");
}

#[test]
fn test_divider_written_once() {
    let mut writer = competition_writer();
    writer.write_task("One", &["MEIER", "BRILO"]).unwrap();
    writer.write_task("Two", &["AILER"]).unwrap();
    writer.write_task("Three", &["BRILO", "AILER"]).unwrap();

    let lines = output(&writer);
    let dividers = lines
        .iter()
        .filter(|l| l.as_str() == "-----Related Tasks-----")
        .count();
    assert_eq!(dividers, 1);
    assert_eq!(lines.last().unwrap(), "\"Three\",\"BRILO\",\"AILER\"");
}

#[test]
fn test_protocol_violations() {
    let mut writer = competition_writer();

    let err = writer
        .write_task_options(&TaskOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);

    writer.write_task("", &["MEIER"]).unwrap();

    let err = writer
        .write_waypoint(&Waypoint::new("Late", "", "", 0.0, 0.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);
    assert_eq!(err.to_string(), "Waypoints must be written before any tasks");
}

#[test]
fn test_data_errors() {
    let mut writer = competition_writer();

    let err = writer
        .write_waypoint(&Waypoint::new("", "X", "DE", 1.0, 1.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = writer
        .write_waypoint(&Waypoint::new("North", "", "", 90.5, 1.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = writer.write_task("Bad", &["UNKNOWN"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Reference);
    assert!(matches!(err, CupError::UnknownWaypoint(ref n) if n == "UNKNOWN"));

    // none of the failures touched the output
    assert_eq!(output(&writer).len(), 4);
}

#[test]
fn test_name_matching_is_exact() {
    let mut writer = competition_writer();
    assert!(writer.write_task("", &["meier"]).is_err());
    assert!(writer.write_task("", &["MEIER "]).is_err());
    assert!(writer.write_task("", &["MEIER"]).is_ok());
}

#[test]
fn test_task_options_from_datetime() {
    let mut writer = competition_writer();
    writer.write_task("", &["MEIER", "AILER"]).unwrap();

    let start = NaiveDate::from_ymd_opt(2024, 7, 14)
        .unwrap()
        .and_hms_opt(13, 5, 0)
        .unwrap();
    writer
        .write_task_options(&TaskOptions {
            start_time: Some(TimeOfDay::from(start)),
            task_time: Some(TaskDuration::from(Duration::minutes(150))),
            min_distance: Some(true),
            before_points: Some(1),
            after_points: Some(2),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        output(&writer).last().unwrap(),
        "Options,NoStart=13:05:00,TaskTime=02:30:00,MinDis=True,BeforePts=1,AfterPts=2"
    );
}

#[test]
fn test_document_round_trip_through_writer() {
    let doc = CupDocument {
        waypoints: vec![
            Waypoint::new("Start", "S", "AT", 47.0, 13.0).with_runway(90, 800),
            Waypoint::new("Finish", "F", "AT", 47.5, 13.5).with_style(2),
        ],
        tasks: vec![Task {
            description: "Triangle".to_string(),
            waypoints: vec!["Start".into(), "Finish".into(), "Start".into()],
            options: Some(TaskOptions {
                start_time: Some(TimeOfDay::from(NaiveTime::from_hms_opt(11, 0, 0).unwrap())),
                distance_tolerance: Some(Distance::from((2.5, "km"))),
                ..Default::default()
            }),
        }],
    };

    let text = to_cup_string(&doc).unwrap();
    let mut expected: Vec<u8> = Vec::new();
    write_document(&doc, &mut expected).unwrap();
    assert_eq!(text.as_bytes(), expected.as_slice());

    let lines: Vec<&str> = text.split_terminator("\r\n").collect();
    assert_eq!(lines[1], "\"Start\",\"S\",AT,4700.000N,01300.000E,,1,90,800m,,");
    assert_eq!(lines[2], "\"Finish\",\"F\",AT,4730.000N,01330.000E,,2,,,,");
    assert_eq!(lines[5], "\"Triangle\",\"Start\",\"Finish\",\"Start\"");
    assert_eq!(lines[6], "Options,NoStart=11:00:00,NearDis=2.5km");
}
