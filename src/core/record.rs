use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TimeOfDay;
use crate::error::{PlotError, PlotResult};

/// One ranked ascent from the published cyclist dataset.
///
/// Field names on the wire follow the dataset (`Year`, `Time`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Seconds")]
    pub seconds: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Doping", default)]
    pub doping: String,
    #[serde(rename = "Place", default, skip_serializing_if = "Option::is_none")]
    pub place: Option<u32>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record {
    #[must_use]
    pub fn new(
        year: i32,
        time: impl Into<String>,
        seconds: i64,
        name: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            year,
            time: time.into(),
            seconds,
            name: name.into(),
            nationality: nationality.into(),
            doping: String::new(),
            place: None,
            url: None,
        }
    }

    #[must_use]
    pub fn with_doping(mut self, doping: impl Into<String>) -> Self {
        self.doping = doping.into();
        self
    }

    #[must_use]
    pub fn with_place(mut self, place: u32) -> Self {
        self.place = Some(place);
        self
    }

    #[must_use]
    pub fn has_doping_allegation(&self) -> bool {
        !self.doping.is_empty()
    }

    pub fn parsed_time(&self) -> PlotResult<TimeOfDay> {
        TimeOfDay::parse(&self.time)
    }

    /// `Seconds` rendered as an ISO-8601 UTC instant after the Unix epoch,
    /// e.g. `1970-01-01T00:36:50.000Z`.
    pub fn iso_timestamp(&self) -> PlotResult<String> {
        DateTime::<Utc>::from_timestamp(self.seconds, 0)
            .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            .ok_or_else(|| {
                PlotError::InvalidData(format!(
                    "seconds value {} is outside the supported timestamp range",
                    self.seconds
                ))
            })
    }

    /// Allegation fragment of the tooltip: a line break followed by the
    /// allegation when present, otherwise the (empty) field unchanged.
    #[must_use]
    pub fn allegation_text(&self) -> String {
        if self.has_doping_allegation() {
            format!("<br/>{}", self.doping)
        } else {
            self.doping.clone()
        }
    }
}

/// Decodes a JSON array of records.
pub fn parse_records_json(input: &str) -> PlotResult<Vec<Record>> {
    serde_json::from_str(input)
        .map_err(|e| PlotError::Decode(format!("failed to parse records json: {e}")))
}
