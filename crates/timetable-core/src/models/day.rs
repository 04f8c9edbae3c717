//! Weekday enumeration for class meetings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Teaching days. Sunday has no classes and is not representable.
///
/// Deserialization goes through [`FromStr`], so JSON accepts the same
/// case-insensitive English and Spanish names as the CLI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" | "lunes" => Ok(Day::Monday),
            "tuesday" | "tue" | "martes" => Ok(Day::Tuesday),
            "wednesday" | "wed" | "miércoles" | "miercoles" => Ok(Day::Wednesday),
            "thursday" | "thu" | "jueves" => Ok(Day::Thursday),
            "friday" | "fri" | "viernes" => Ok(Day::Friday),
            "saturday" | "sat" | "sábado" | "sabado" => Ok(Day::Saturday),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}

impl TryFrom<String> for Day {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
