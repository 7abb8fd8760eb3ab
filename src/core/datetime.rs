use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;

/*-------------------------------------------------------------------------------------------------
  DateTime Formats
-------------------------------------------------------------------------------------------------*/

/// Parse a publication time; an unrecognized format is logged and yields `None`.
fn parse_or_warn(s: &str, format: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, format)
        .map(|naive_date_time| naive_date_time.and_utc())
        .inspect_err(|error| warn!("Unrecognized publication time {:?}: {}", s, error))
        .ok()
}

/*--------------------------------------------------------------------------------------
  AWS `createDate` - 2024-01-01-12-00-00
--------------------------------------------------------------------------------------*/

pub mod aws {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const AWS_DATETIME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(super::parse_or_warn(&s, AWS_DATETIME_FORMAT))
    }
}

/*--------------------------------------------------------------------------------------
  Google `creationTime` - 2024-01-01T12:00:00.123456
--------------------------------------------------------------------------------------*/

pub mod google {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const GOOGLE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(super::parse_or_warn(&s, GOOGLE_DATETIME_FORMAT))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
