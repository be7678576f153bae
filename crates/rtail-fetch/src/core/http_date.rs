use chrono::{DateTime, NaiveDateTime, Utc};

const SHORT_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LONG_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A date layout split into its leading weekday and the rest.
struct Layout {
    days: &'static [&'static str],
    separator: &'static str,
    rest: &'static str,
}

/// Accepted layouts, tried in this order: RFC 1123, RFC 850, ANSI C `asctime`.
///
/// Servers emit all three in practice. The weekday must be a valid name but
/// need not agree with the date. The zone is always GMT in HTTP, so the zone
/// token of the first two is skipped and the result is taken as UTC.
const LAYOUTS: [Layout; 3] = [
    Layout {
        days: &SHORT_DAYS,
        separator: ", ",
        rest: "%d %b %Y %H:%M:%S %Z",
    },
    Layout {
        days: &LONG_DAYS,
        separator: ", ",
        rest: "%d-%b-%y %H:%M:%S %Z",
    },
    Layout {
        days: &SHORT_DAYS,
        separator: " ",
        rest: "%b %e %H:%M:%S %Y",
    },
];

const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

impl Layout {
    fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let (day, rest) = value.split_once(self.separator)?;
        if !self.days.contains(&day) {
            return None;
        }
        NaiveDateTime::parse_from_str(rest, self.rest).ok()
    }
}

/// Parse an HTTP date header value such as `Last-Modified` or `Expires`.
///
/// Returns `None` when no accepted layout matches, e.g. for `Expires: 0`.
///
/// # Examples
///
/// ```
/// use rtail_fetch::core::parse_http_date;
///
/// let a = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT");
/// let b = parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT");
/// let c = parse_http_date("Sun Nov  6 08:49:37 1994");
/// assert!(a.is_some());
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// assert_eq!(parse_http_date("0"), None);
/// ```
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(value))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp for `If-Modified-Since` (IMF-fixdate).
pub fn format_http_date(time: DateTime<Utc>) -> String {
    time.format(IMF_FIXDATE).to_string()
}
