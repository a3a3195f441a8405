//! Last-run watermark parsing and comparison

use crate::types::SyncError;
use chrono::{DateTime, Local, NaiveDateTime, SubsecRound, TimeDelta, TimeZone, Timelike};
use std::fmt;
use std::thread;
use std::time::{Duration, SystemTime};

/// On-disk format of `last_run_time`
pub const WATERMARK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Slack past the boundary so coarse filesystem clocks have ticked over too
const BOUNDARY_MARGIN: Duration = Duration::from_millis(20);

/// Local wall-clock instant below which files count as already synchronized
///
/// Stored with second resolution, matching the persisted string. File
/// modification times keep their sub-second part when compared, so a file
/// touched half a second after the watermark second is still copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(NaiveDateTime);

impl Watermark {
    /// Parse a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(value: &str) -> Result<Self, SyncError> {
        NaiveDateTime::parse_from_str(value, WATERMARK_FORMAT)
            .map(Self)
            .map_err(|_| SyncError::InvalidTimestamp {
                value: value.to_string(),
            })
    }

    /// The next whole second of local time, returned once it has passed.
    ///
    /// Blocks for up to one second. Anything modified after this returns has
    /// an mtime strictly greater than the result, and anything modified
    /// before it compares at or below it, so a watermark taken this way
    /// neither misses a later change nor re-copies an earlier one.
    pub fn next_second_boundary() -> Self {
        let now = Local::now().naive_local();
        let nanos_into_second = u64::from(now.nanosecond() % 1_000_000_000);
        let remaining = Duration::from_nanos(1_000_000_000 - nanos_into_second);
        thread::sleep(remaining + BOUNDARY_MARGIN);

        Self(now.trunc_subsecs(0) + TimeDelta::seconds(1))
    }

    /// True when `mtime` is strictly later than the watermark.
    pub fn is_exceeded_by(&self, mtime: SystemTime) -> bool {
        let local: DateTime<Local> = DateTime::from(mtime);
        local.naive_local() > self.0
    }

    /// Resolve the watermark to an absolute instant in the local timezone.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant;
    /// times that do not exist locally are rejected.
    pub fn to_system_time(&self) -> Result<SystemTime, SyncError> {
        Local
            .from_local_datetime(&self.0)
            .earliest()
            .map(SystemTime::from)
            .ok_or_else(|| SyncError::InvalidTimestamp {
                value: self.to_string(),
            })
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WATERMARK_FORMAT))
    }
}
