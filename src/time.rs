//! Server-time offset estimation

use chrono::DateTime;

/// Estimate the offset between the server clock and the local clock, in
/// milliseconds.
///
/// `header_date` is the response's HTTP `Date` header (RFC 2822);
/// `request_time` and `response_time` are local unix-millis instants
/// captured around the request. A missing or unparseable header yields 0.
pub fn time_offset_millis(
    header_date: Option<&str>,
    request_time: i64,
    response_time: i64,
) -> i64 {
    let Some(header_date) = header_date else {
        return 0;
    };
    let Ok(header) = DateTime::parse_from_rfc2822(header_date) else {
        return 0;
    };

    let round_trip_millis = request_time - response_time;
    // Roughly compensate for transit time
    let local_time = response_time - round_trip_millis / 2;
    header.timestamp_millis() - local_time
}
