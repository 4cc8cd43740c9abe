use crate::utils::colors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single boat on the roster.
///
/// The colour is kept exactly as typed; it is only resolved to a display
/// colour when printed (see [`colors::lookup`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    #[serde(default)]
    pub number: String,
    #[serde(default, rename = "radioOperator", alias = "radiooperator", alias = "operator")]
    pub radio_operator: String,
    #[serde(
        default,
        rename = "colourString",
        alias = "colourstring",
        alias = "colourname"
    )]
    pub colour_name: String,
}

impl Boat {
    pub fn new(number: &str, radio_operator: &str, colour_name: &str) -> Self {
        Self {
            number: number.to_string(),
            radio_operator: radio_operator.to_string(),
            colour_name: colour_name.to_string(),
        }
    }

    pub fn has_known_colour(&self) -> bool {
        colors::is_known(&self.colour_name)
    }

    /// Boat number painted in the boat's colour.
    pub fn painted_number(&self) -> String {
        colors::paint(&self.colour_name, &self.number)
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colour = colors::lookup(&self.colour_name)
            .map(|c| c.name)
            .unwrap_or(self.colour_name.as_str());
        write!(
            f,
            "{}\nRadio Operator: {}\nColour: {}",
            self.number, self.radio_operator, colour
        )
    }
}

/// On-disk shape of a roster file: `{ "boats": [ ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub boats: Vec<Boat>,
}

impl RosterFile {
    /// Parse roster JSON. Field names are matched case-insensitively.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: Value = serde_json::from_str(json)?;
        serde_json::from_value(lowercase_keys(raw))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lowercase_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
