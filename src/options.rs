use serde::Deserialize;

use crate::cup_types::{Distance, TaskDuration, TimeOfDay};

/// Options line for the task section. Only fields that are set are written.
///
/// Keys not listed here are ignored when deserializing.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskOptions {
    /// Opening time of the start line (`NoStart`)
    pub start_time: Option<TimeOfDay>,

    /// Designated time for the task (`TaskTime`)
    pub task_time: Option<TaskDuration>,

    /// Task distance calculation: `false` uses fixes, `true` uses waypoints (`WpDis`)
    pub waypoint_distance: Option<bool>,

    /// Distance tolerance (`NearDis`)
    pub distance_tolerance: Option<Distance>,

    /// Altitude tolerance (`NearAlt`)
    pub altitude_tolerance: Option<Distance>,

    /// Uncompleted leg: `false` calculates the maximum distance from the
    /// last observation zone (`MinDis`)
    pub min_distance: Option<bool>,

    /// Check random order of waypoints (`RandomOrder`)
    pub random_order: Option<bool>,

    /// Maximum number of points (`MaxPts`)
    pub max_points: Option<u32>,

    /// Mandatory waypoints at the beginning; 1 is the start line only,
    /// 2 adds the first point of the task sequence (`BeforePts`)
    pub before_points: Option<u32>,

    /// Mandatory waypoints at the end; 1 is the finish line only,
    /// 2 adds the point before the finish (`AfterPts`)
    pub after_points: Option<u32>,

    /// Bonus for crossing the finish line (`Bonus`)
    pub bonus: Option<u32>,
}
