//! MatchDay and MatchInfo: when and where the match is played.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Day of the week the match is played on.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    #[default]
    Saturday,
}

impl MatchDay {
    pub const ALL: [MatchDay; 7] = [
        MatchDay::Sunday,
        MatchDay::Monday,
        MatchDay::Tuesday,
        MatchDay::Wednesday,
        MatchDay::Thursday,
        MatchDay::Friday,
        MatchDay::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatchDay::Sunday => "Sunday",
            MatchDay::Monday => "Monday",
            MatchDay::Tuesday => "Tuesday",
            MatchDay::Wednesday => "Wednesday",
            MatchDay::Thursday => "Thursday",
            MatchDay::Friday => "Friday",
            MatchDay::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for MatchDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const TIME_FORMAT: &str = "%H:%M";

/// Day, kick-off time and ground shown at the top of the team listing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub day: MatchDay,
    /// Serialized as `HH:MM`.
    #[serde(serialize_with = "serialize_time", deserialize_with = "deserialize_time")]
    pub time: NaiveTime,
    pub ground: String,
}

impl Default for MatchInfo {
    fn default() -> Self {
        Self {
            day: MatchDay::Saturday,
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            ground: "Teenage Ground".to_string(),
        }
    }
}

impl MatchInfo {
    /// Kick-off time as `HH:MM`.
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
}

fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    // Browsers send `HH:MM`, but some include seconds.
    NaiveTime::parse_from_str(&s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
        .map_err(serde::de::Error::custom)
}
