use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc, Weekday};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("date must use the YYYY-MM-DD format")]
    InvalidDate,

    #[error("time must look like 9:30 AM or 14:30")]
    InvalidTime,

    #[error("Appointment date cannot be in the past")]
    PastDate,

    #[error("Appointment time has already passed for today")]
    TimeAlreadyPassed,

    #[error("The clinic is open from {open}:00 to {close}:00 on {day}")]
    OutsideClinicHours { day: Weekday, open: u32, close: u32 },
}

/// Opening hours per weekday, as `[open, close)` in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicHours {
    // indexed by days from Sunday
    windows: [(u32, u32); 7],
}

impl Default for ClinicHours {
    fn default() -> Self {
        Self {
            windows: [
                (8, 12), // Sun
                (8, 19),
                (8, 19),
                (8, 19),
                (8, 19),
                (8, 17), // Fri
                (8, 19), // Sat
            ],
        }
    }
}

impl ClinicHours {
    pub fn window(&self, day: Weekday) -> (u32, u32) {
        self.windows[day.num_days_from_sunday() as usize]
    }

    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        let (open, close) = self.window(day);
        let minutes = time.hour() * 60 + time.minute();
        minutes >= open * 60 && minutes < close * 60
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate)
}

/// Accepts `H:MM AM`, `HH:MM PM` (any spacing before the meridiem, including
/// the narrow no-break space some clients emit) and 24-hour `HH:MM`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ScheduleError> {
    let normalized: String = raw
        .trim()
        .chars()
        .map(|c| if c == '\u{202f}' || c == '\u{a0}' { ' ' } else { c })
        .collect();
    let upper = normalized.to_ascii_uppercase();

    let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let (hours, minutes) = clock.split_once(':').ok_or(ScheduleError::InvalidTime)?;
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if minutes.len() != 2 || hours.is_empty() || hours.len() > 2 {
        return Err(ScheduleError::InvalidTime);
    }
    // u32::from_str would take a leading '+'
    if !digits(hours) || !digits(minutes) {
        return Err(ScheduleError::InvalidTime);
    }
    let hours: u32 = hours.parse().map_err(|_| ScheduleError::InvalidTime)?;
    let minutes: u32 = minutes.parse().map_err(|_| ScheduleError::InvalidTime)?;

    let hours = match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hours) {
                return Err(ScheduleError::InvalidTime);
            }
            match (hours, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => hours,
    };

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or(ScheduleError::InvalidTime)
}

/// Booking rules evaluated in the clinic's local time.
#[derive(Debug, Clone, Copy)]
pub struct SchedulePolicy {
    hours: ClinicHours,
    offset: FixedOffset,
}

impl SchedulePolicy {
    pub fn new(hours: ClinicHours, offset: FixedOffset) -> Self {
        Self { hours, offset }
    }

    pub fn validate(&self, date: NaiveDate, time: NaiveTime) -> Result<(), ScheduleError> {
        self.validate_at(date, time, Utc::now())
    }

    pub fn validate_at(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        now: DateTime<Utc>,
    ) -> Result<(), ScheduleError> {
        let local_now = now.with_timezone(&self.offset);
        let today = local_now.date_naive();

        if date < today {
            return Err(ScheduleError::PastDate);
        }
        if date == today && time <= local_now.time() {
            return Err(ScheduleError::TimeAlreadyPassed);
        }

        let day = date.weekday();
        if !self.hours.is_open_at(day, time) {
            let (open, close) = self.hours.window(day);
            return Err(ScheduleError::OutsideClinicHours { day, open, close });
        }

        Ok(())
    }
}
