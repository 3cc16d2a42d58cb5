use chrono::{Local, NaiveTime, Timelike};

/// Current local time for the fake status bar
pub fn current_time() -> String {
    format_time_of_day(Local::now().time())
}

/// 12-hour `h:MM AM/PM`, no leading zero on the hour
pub fn format_time_of_day(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> String {
        format_time_of_day(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn formats_twelve_hour_clock() {
        assert_eq!(at(15, 7), "3:07 PM");
        assert_eq!(at(0, 5), "12:05 AM");
        assert_eq!(at(12, 0), "12:00 PM");
        assert_eq!(at(9, 41), "9:41 AM");
    }
}
