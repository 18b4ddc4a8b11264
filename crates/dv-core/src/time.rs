//! Warehouse departure time.
//!
//! Request documents carry the departure as `H:M:S` with unpadded fields
//! (`"8:0:0"`), while operators read and type `HH:MM:SS`.  Both parse to the
//! same [`DepartureTime`]; the document form is produced by
//! [`DepartureTime::to_document_string`] and the padded form by `Display`.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Time of day at which couriers leave the warehouse.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepartureTime {
    hour:   u8,
    minute: u8,
    second: u8,
}

impl DepartureTime {
    /// Build a departure time, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CoreError> {
        let value = || format!("{hour}:{minute}:{second}");
        let reason = if hour >= 24 {
            "hour must be below 24"
        } else if minute >= 60 {
            "minute must be below 60"
        } else if second >= 60 {
            "second must be below 60"
        } else {
            return Ok(Self { hour, minute, second });
        };
        Err(CoreError::InvalidTime { value: value(), reason })
    }

    pub fn hour(self) -> u8 { self.hour }
    pub fn minute(self) -> u8 { self.minute }
    pub fn second(self) -> u8 { self.second }

    pub fn seconds_since_midnight(self) -> u32 {
        self.hour as u32 * 3_600 + self.minute as u32 * 60 + self.second as u32
    }

    /// `H:M:S` without padding, as written into request documents.
    pub fn to_document_string(self) -> String {
        format!("{}:{}:{}", self.hour, self.minute, self.second)
    }
}

impl Default for DepartureTime {
    /// 08:00:00, the departure given to a warehouse placed by hand.
    fn default() -> Self {
        Self { hour: 8, minute: 0, second: 0 }
    }
}

impl FromStr for DepartureTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| CoreError::InvalidTime { value: s.to_owned(), reason };

        let mut fields = s.trim().split(':');
        let mut next = || -> Result<u8, CoreError> {
            let field = fields.next().ok_or_else(|| invalid("expected H:M:S"))?;
            if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("each field must be one or two digits"));
            }
            field.parse().map_err(|_| invalid("each field must be one or two digits"))
        };

        let (hour, minute, second) = (next()?, next()?, next()?);
        if fields.next().is_some() {
            return Err(invalid("expected H:M:S"));
        }
        DepartureTime::new(hour, minute, second).map_err(|e| match e {
            CoreError::InvalidTime { reason, .. } => invalid(reason),
        })
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
