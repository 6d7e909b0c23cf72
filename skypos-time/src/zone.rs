use crate::{TimeError, TimeResult};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use log::warn;

/// Interprets a naive wall-clock reading in `tz`.
///
/// A reading that falls in a daylight-saving overlap resolves to the earlier
/// of the two instants. A reading inside a gap is an error.
pub fn attach_zone<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> TimeResult<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(zoned) => Ok(zoned),
        LocalResult::Ambiguous(a, b) => {
            let (earliest, latest) = if a <= b { (a, b) } else { (b, a) };
            warn!(
                "local time {} is ambiguous ({:?} or {:?}); using the earlier offset",
                local,
                earliest.offset(),
                latest.offset()
            );
            Ok(earliest)
        }
        LocalResult::None => Err(TimeError::NonexistentLocalTime { local }),
    }
}
