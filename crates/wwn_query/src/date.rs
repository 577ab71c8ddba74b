use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Lenient timestamp parsing. Upstream accepted anything its platform date
/// parser would take, so this tries the formats that actually occur in the
/// data and in client requests: RFC 3339, RFC 2822 (browsers send
/// `Wed, 02 Aug 2023 23:00:00 GMT` style bounds), zoneless ISO, and a bare
/// calendar date read as midnight UTC. Anything else is `None` and the
/// caller treats the value as absent.
pub(crate) fn parse_loose(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_loose("2023-07-11T14:00:00Z").unwrap();
        assert_eq!(parsed.hour(), 14);
    }

    #[test]
    fn parses_rfc2822_with_gmt() {
        let parsed = parse_loose("Wed, 02 Aug 2023 23:00:00 GMT").unwrap();
        assert_eq!(parsed, parse_loose("2023-08-02T23:00:00Z").unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let parsed = parse_loose("2023-07-01").unwrap();
        assert_eq!(parsed, parse_loose("2023-07-01T00:00:00Z").unwrap());
    }

    #[test]
    fn parses_zoneless_datetime_as_utc() {
        let parsed = parse_loose("2023-07-01 12:30:00").unwrap();
        assert_eq!(parsed, parse_loose("2023-07-01T12:30:00Z").unwrap());
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(parse_loose("not-a-date").is_none());
        assert!(parse_loose("").is_none());
        assert!(parse_loose("   ").is_none());
        assert!(parse_loose("2023-13-40").is_none());
    }
}
