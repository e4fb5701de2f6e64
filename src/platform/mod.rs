//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Dates for leaderboard entries
//! - Storage (LocalStorage on web, files on native)
//! - The JS-facing session binding (web)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Today's date as the browser formats it (e.g. "10/19/2026")
#[cfg(target_arch = "wasm32")]
pub fn date_string() -> String {
    let date = js_sys::Date::new_0();
    String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

/// Today's date as month/day/year, in UTC
#[cfg(not(target_arch = "wasm32"))]
pub fn date_string() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (y, m, d) = civil_from_days((secs / 86_400) as i64);
    format!("{}/{}/{}", m, d, y)
}

/// Convert days since 1970-01-01 to (year, month, day), proleptic Gregorian
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_from_days() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(59), (1970, 3, 1));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(20_745), (2026, 10, 19));
    }

    #[test]
    fn test_date_string_shape() {
        let date = date_string();
        assert_eq!(date.split('/').count(), 3);
    }

    #[test]
    fn test_native_date_is_utc_calendar_day() {
        let days = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            / 86_400;
        let (y, m, d) = civil_from_days(days as i64);
        let date = date_string();
        // Tolerate the run straddling UTC midnight
        let (y2, m2, d2) = civil_from_days(days as i64 + 1);
        assert!(date == format!("{}/{}/{}", m, d, y) || date == format!("{}/{}/{}", m2, d2, y2));
    }
}
