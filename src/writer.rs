use std::collections::HashSet;
use std::io::Write;

use crate::cup_types::Waypoint;
use crate::error::{CupError, Result};
use crate::format::{
    escape, format_bool, format_distance, format_latitude, format_longitude, format_time,
    format_timedelta,
};
use crate::options::TaskOptions;

pub const HEADER: &str = "name,code,country,lat,lon,elev,style,rwdir,rwlen,freq,desc";
pub const DIVIDER: &str = "-----Related Tasks-----";
const LINE_END: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Waypoints,
    Tasks,
}

/// Writer for SeeYou CUP files.
///
/// All waypoints have to be written before the first task. Every record is
/// assembled in full and handed to the sink with a single `write_all`, so a
/// failed call never leaves half a line behind.
///
/// ```
/// use seeyou_cup_wasm::cup_types::Waypoint;
/// use seeyou_cup_wasm::writer::Writer;
///
/// let mut writer = Writer::new(Vec::new()).unwrap();
/// let wp = Waypoint::new("Meiersberg", "MEIER", "DE", 51.0 + 7.345 / 60.0, 6.0 + 24.765 / 60.0);
/// writer.write_waypoint(&wp).unwrap();
/// let out = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(out.ends_with("\"Meiersberg\",\"MEIER\",DE,5107.345N,00624.765E,,1,,,,\r\n"));
/// ```
#[derive(Debug)]
pub struct Writer<W: Write> {
    sink: W,
    declared: HashSet<String>,
    section: Section,
}

impl<W: Write> Writer<W> {
    /// Create a writer and emit the header line.
    pub fn new(mut sink: W) -> Result<Self> {
        sink.write_all(line(HEADER).as_bytes())?;
        Ok(Self {
            sink,
            declared: HashSet::new(),
            section: Section::Waypoints,
        })
    }

    pub fn write_waypoint(&mut self, wp: &Waypoint) -> Result<()> {
        if self.section == Section::Tasks {
            return Err(CupError::WaypointAfterTask);
        }

        if wp.name.is_empty() {
            return Err(CupError::EmptyWaypointName);
        }

        let fields = [
            escape(&wp.name),
            escape(&wp.short_name),
            wp.country.clone(),
            format_latitude(wp.latitude)?,
            format_longitude(wp.longitude)?,
            format_distance(wp.elevation.as_ref()),
            wp.style.to_string(),
            wp.runway_direction.clone().unwrap_or_default(),
            format_distance(wp.runway_length.as_ref()),
            escape(&wp.frequency),
            escape(&wp.description),
        ];

        let record = line(&fields.join(","));
        log::trace!("waypoint: {}", record.trim_end());
        self.sink.write_all(record.as_bytes())?;

        self.declared.insert(wp.name.clone());
        Ok(())
    }

    /// Write a task referencing waypoints by their full names.
    ///
    /// The first task also writes the section divider; afterwards no more
    /// waypoints are accepted.
    pub fn write_task<S: AsRef<str>>(
        &mut self,
        description: &str,
        waypoints: &[S],
    ) -> Result<()> {
        let mut fields = Vec::with_capacity(waypoints.len() + 1);
        fields.push(escape(description));

        for name in waypoints {
            let name = name.as_ref();
            if !self.declared.contains(name) {
                return Err(CupError::UnknownWaypoint(name.to_string()));
            }
            fields.push(escape(name));
        }

        let mut out = String::new();
        let entering = self.section == Section::Waypoints;
        if entering {
            out.push_str(LINE_END);
            out.push_str(&line(DIVIDER));
        }
        let record = line(&fields.join(","));
        log::trace!("task: {}", record.trim_end());
        out.push_str(&record);

        self.sink.write_all(out.as_bytes())?;

        if entering {
            log::debug!(
                "entered task section after {} waypoints",
                self.declared.len()
            );
            self.section = Section::Tasks;
        }
        Ok(())
    }

    pub fn write_task_options(&mut self, options: &TaskOptions) -> Result<()> {
        if self.section != Section::Tasks {
            return Err(CupError::OptionsOutsideTaskSection);
        }

        let mut fields = vec!["Options".to_string()];

        if let Some(t) = &options.start_time {
            fields.push(format!("NoStart={}", format_time(t)));
        }
        if let Some(d) = &options.task_time {
            fields.push(format!("TaskTime={}", format_timedelta(d)));
        }
        if let Some(b) = options.waypoint_distance {
            fields.push(format!("WpDis={}", format_bool(b)));
        }
        if let Some(d) = &options.distance_tolerance {
            fields.push(format!("NearDis={}", format_distance(Some(d))));
        }
        if let Some(d) = &options.altitude_tolerance {
            fields.push(format!("NearAlt={}", format_distance(Some(d))));
        }
        if let Some(b) = options.min_distance {
            fields.push(format!("MinDis={}", format_bool(b)));
        }
        if let Some(b) = options.random_order {
            fields.push(format!("RandomOrder={}", format_bool(b)));
        }
        if let Some(n) = options.max_points {
            fields.push(format!("MaxPts={n}"));
        }
        if let Some(n) = options.before_points {
            fields.push(format!("BeforePts={n}"));
        }
        if let Some(n) = options.after_points {
            fields.push(format!("AfterPts={n}"));
        }
        if let Some(n) = options.bonus {
            fields.push(format!("Bonus={n}"));
        }

        let record = line(&fields.join(","));
        log::trace!("options: {}", record.trim_end());
        self.sink.write_all(record.as_bytes())?;
        Ok(())
    }

    pub fn in_task_section(&self) -> bool {
        self.section == Section::Tasks
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn line(content: &str) -> String {
    format!("{content}{LINE_END}")
}
