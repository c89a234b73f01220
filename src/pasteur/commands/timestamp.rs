use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PasteurError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Convert between epoch timestamps and calendar dates.
///
/// Accepted inputs:
/// - `now` (the current instant)
/// - all-digit epochs: 13 digits are taken as milliseconds, anything else
///   as seconds
/// - RFC 3339 (`2023-11-14T22:13:20Z`), `YYYY-MM-DD HH:MM:SS`, or a bare
///   `YYYY-MM-DD`
pub fn run(input: &str) -> Result<CmdResult> {
    let input = input.trim();
    let instant = parse_instant(input)?;

    let output = format!(
        "Seconds: {}\nMillis:  {}\nUTC:     {}\nLocal:   {}",
        instant.timestamp(),
        instant.timestamp_millis(),
        instant.to_rfc3339(),
        instant.with_timezone(&Local).to_rfc3339(),
    );

    let mut result = CmdResult::default().with_output(output);
    if input.eq_ignore_ascii_case("now") {
        result.add_message(CmdMessage::info("Current time"));
    }
    Ok(result)
}

fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    if input.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        let value: i64 = input
            .parse()
            .map_err(|_| PasteurError::Api(format!("Epoch out of range: {input}")))?;
        let instant = if input.len() == 13 {
            Utc.timestamp_millis_opt(value).single()
        } else {
            Utc.timestamp_opt(value, 0).single()
        };
        return instant.ok_or_else(|| PasteurError::Api(format!("Epoch out of range: {input}")));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(PasteurError::Api(format!(
        "Not a timestamp or date: {input}"
    )))
}
