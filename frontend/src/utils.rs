use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

// Groups each x1000 step, the way ja-JP renders integers
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::with_capacity(num_str.len() + num_str.len() / 3);
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_locale_date(date: &str) -> String {
    format_date_in(date, &Local)
}

pub fn format_date_in<Tz: TimeZone>(date: &str, tz: &Tz) -> String {
    let date = date.trim();
    let naive = if let Ok(datetime) = DateTime::parse_from_rfc3339(date) {
        datetime.with_timezone(tz).date_naive()
    } else if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        day
    } else {
        return date.to_string();
    };
    format!("{}/{}/{}", naive.year(), naive.month(), naive.day())
}

pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}

pub fn video_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

// Quoted CSS `url()` value; characters that would end the string are percent-encoded.
pub fn css_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len() + 2);
    escaped.push('"');
    for c in url.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\\' => escaped.push_str("%5C"),
            '\n' => escaped.push_str("%0A"),
            '\r' => escaped.push_str("%0D"),
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    format!("url({escaped})")
}

pub fn alert_user(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("Could not show alert: {}", message);
            }
        }
        None => log::warn!("No window to alert on: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(100000), "100,000");
    }

    #[test]
    fn formats_rfc3339_in_given_zone() {
        assert_eq!(format_date_in("2024-01-05T10:00:00Z", &Utc), "2024/1/5");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date_in("2023-12-31T20:30:00Z", &tokyo), "2024/1/1");
    }

    #[test]
    fn formats_plain_dates_and_keeps_garbage() {
        assert_eq!(format_date_in("2021-11-30", &Utc), "2021/11/30");
        assert_eq!(format_date_in("yesterday", &Utc), "yesterday");
        assert_eq!(format_date_in("", &Utc), "");
    }

    #[test]
    fn css_url_quotes_and_escapes() {
        assert_eq!(css_url("https://img/b.jpg"), "url(\"https://img/b.jpg\")");
        assert_eq!(
            css_url("https://img/a'b).jpg"),
            "url(\"https://img/a'b).jpg\")"
        );
        assert_eq!(
            css_url("x\"); color: red; (\\\n"),
            "url(\"x%22); color: red; (%5C%0A\")"
        );
    }

    #[test]
    fn builds_youtube_links() {
        assert_eq!(channel_url("UC123"), "https://www.youtube.com/channel/UC123");
        assert_eq!(video_url("abc"), "https://www.youtube.com/watch?v=abc");
    }
}
