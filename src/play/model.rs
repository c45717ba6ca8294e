use std::collections::BTreeMap;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// JSON-facing play document, as produced by the extraction pipeline.
///
/// This is the raw boundary representation. It is validated and turned into an immutable
/// [`crate::Play`] before playback; nothing downstream reads the def directly.
pub struct PlayDef {
    /// Game identifier.
    pub game_id: u64,
    /// Play identifier (unique within a game).
    pub play_id: u64,
    /// Direction the offense is moving.
    pub play_direction: PlayDirection,
    /// Number of primary (pre-throw) tracking frames.
    pub max_frame: u32,
    /// Frame at which the ball leaves the thrower.
    pub throw_frame: u32,
    /// Ball position at release.
    pub ball_throw_x: f64,
    /// Ball position at release.
    pub ball_throw_y: f64,
    /// Ball position at landing.
    pub ball_land_x: f64,
    /// Ball position at landing.
    pub ball_land_y: f64,
    /// Line of scrimmage in absolute field coordinates (0..120), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_yardline: Option<f64>,
    /// Pre-throw tracking keyed by player id.
    #[serde(default)]
    pub players: BTreeMap<String, PlayerDef>,
    /// Post-throw tracking keyed by player id, frame ids relative to the throw.
    #[serde(default)]
    pub output_players: BTreeMap<String, OutputPlayerDef>,
    /// Situational metadata. Every field is optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplementary: Option<Supplementary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Direction of offensive travel on the field.
pub enum PlayDirection {
    /// Toward decreasing x.
    Left,
    /// Toward increasing x.
    Right,
}

impl std::fmt::Display for PlayDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
/// Which team a tracked player belongs to on this play.
pub enum Side {
    /// Team in possession.
    Offense,
    /// Team defending.
    Defense,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A rostered player with primary tracking.
pub struct PlayerDef {
    /// Display name.
    pub name: String,
    /// Role abbreviation (`QB`, `WR`, `CB`, ...).
    pub position: String,
    /// Offense or defense.
    pub side: Side,
    /// Tracking samples, one per frame.
    #[serde(default)]
    pub frames: Vec<FrameDef>,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// One primary tracking sample.
pub struct FrameDef {
    /// Frame id in `[1, max_frame]`.
    pub frame_id: u32,
    /// Field x in yards.
    pub x: f64,
    /// Field y in yards.
    pub y: f64,
    /// Heading in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<f64>,
    /// Speed in yards per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Post-throw tracking for one player.
pub struct OutputPlayerDef {
    /// Samples keyed by frame offset after the throw.
    #[serde(default)]
    pub frames: Vec<OutputFrameDef>,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// One continuation sample (position only).
pub struct OutputFrameDef {
    /// Frame offset after the throw, starting at 1.
    pub frame_id: u32,
    /// Field x in yards.
    pub x: f64,
    /// Field y in yards.
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Situational metadata attached to a play.
pub struct Supplementary {
    pub season: Option<u32>,
    pub week: Option<u32>,
    pub game_date: Option<String>,
    pub game_time_eastern: Option<String>,
    pub home_team_abbr: Option<String>,
    pub visitor_team_abbr: Option<String>,
    pub play_description: Option<String>,
    pub quarter: Option<u32>,
    pub game_clock: Option<String>,
    pub down: Option<u32>,
    pub yards_to_go: Option<u32>,
    pub possession_team: Option<String>,
    pub defensive_team: Option<String>,
    pub yardline_side: Option<String>,
    pub yardline_number: Option<u32>,
    pub pre_snap_home_score: Option<u32>,
    pub pre_snap_visitor_score: Option<u32>,
    pub pass_result: Option<String>,
    pub pass_length: Option<f64>,
    pub offense_formation: Option<String>,
    pub receiver_alignment: Option<String>,
    pub route_of_targeted_receiver: Option<String>,
    pub play_action: Option<bool>,
    pub dropback_type: Option<String>,
    pub dropback_distance: Option<f64>,
    pub pass_location_type: Option<String>,
    pub defenders_in_the_box: Option<u32>,
    pub team_coverage_man_zone: Option<String>,
    pub team_coverage_type: Option<String>,
    pub yards_gained: Option<i32>,
    pub expected_points: Option<f64>,
    pub expected_points_added: Option<f64>,
}
