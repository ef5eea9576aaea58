//! Derived route figures: travel duration, arrival time, fuel and toll cost.
//!
//! Costs are computed in USD; conversion to rupees happens in
//! [`currency`](crate::services::currency).

use crate::config::PricingConfig;
use crate::models::TransportMode;
use std::fmt;
use std::str::FromStr;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        SystemClock { offset }
    }

    /// Use the host's local offset, or UTC when it cannot be determined
    /// (the lookup is refused once other threads are running on some platforms).
    pub fn local() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|e| {
            tracing::warn!("Could not determine local UTC offset ({}), using UTC", e);
            UtcOffset::UTC
        });
        SystemClock { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Travel time rounded to whole minutes. `None` when the distance was not
/// finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelDuration(Option<u32>);

impl TravelDuration {
    pub fn from_minutes(minutes: u32) -> Self {
        TravelDuration(Some(minutes))
    }

    pub fn total_minutes(&self) -> Option<u32> {
        self.0
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(total) = self.0 else {
            return write!(f, "N/A");
        };
        let (hours, minutes) = (total / 60, total % 60);
        match (hours, minutes) {
            (0, m) => write!(f, "{}m", m),
            (h, 0) => write!(f, "{}h", h),
            (h, m) => write!(f, "{}h {}m", h, m),
        }
    }
}

impl FromStr for TravelDuration {
    type Err = String;

    /// Accepts "2h 30m", "2h", "45m" and "2h30m".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hours: Option<u32> = None;
        let mut minutes: Option<u32> = None;
        let mut digits = String::new();

        for c in s.trim().chars() {
            match c {
                '0'..='9' => digits.push(c),
                'h' | 'm' if !digits.is_empty() => {
                    let value: u32 = digits
                        .parse()
                        .map_err(|_| format!("Invalid duration: '{}'", s))?;
                    let slot = if c == 'h' { &mut hours } else { &mut minutes };
                    if slot.replace(value).is_some() {
                        return Err(format!("Invalid duration: '{}'", s));
                    }
                    digits.clear();
                }
                c if c.is_whitespace() && digits.is_empty() => {}
                _ => return Err(format!("Invalid duration: '{}'", s)),
            }
        }

        if !digits.is_empty() || (hours.is_none() && minutes.is_none()) {
            return Err(format!("Invalid duration: '{}'", s));
        }

        hours
            .unwrap_or(0)
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes.unwrap_or(0)))
            .map(TravelDuration::from_minutes)
            .ok_or_else(|| format!("Duration out of range: '{}'", s))
    }
}

/// Display form of a distance, e.g. "86 km".
pub fn format_distance(distance_km: f64) -> String {
    if !distance_km.is_finite() {
        return "N/A".to_string();
    }
    format!("{} km", distance_km)
}

/// Travel time at the mode's average speed.
pub fn estimated_duration(distance_km: f64, mode: TransportMode) -> TravelDuration {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return TravelDuration(None);
    }
    let hours = distance_km / mode.average_speed_kmh();
    TravelDuration::from_minutes((hours * 60.0).round() as u32)
}

/// Arrival time as "hh:mm AM/PM" after travelling for `duration` from `now`.
/// An unparseable duration yields `now` itself. An arrival past the last
/// representable date yields "N/A".
pub fn eta(duration: &str, now: OffsetDateTime) -> Result<String, time::error::Format> {
    let minutes = match duration.parse::<TravelDuration>() {
        Ok(d) => d.total_minutes().unwrap_or(0),
        Err(e) => {
            tracing::debug!("{}; reporting current time as ETA", e);
            0
        }
    };

    let Some(arrival) = now.checked_add(Duration::minutes(i64::from(minutes))) else {
        tracing::warn!(minutes, "ETA beyond representable date range");
        return Ok("N/A".to_string());
    };
    arrival.format(format_description!("[hour repr:12]:[minute] [period]"))
}

/// Fuel cost in USD for driving `distance_km`.
pub fn fuel_cost_usd(distance_km: f64, price_per_km_usd: f64) -> f64 {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return 0.0;
    }
    distance_km * price_per_km_usd
}

/// Toll cost in USD. Only cars pay tolls: one plaza per full toll interval.
pub fn toll_cost_usd(distance_km: f64, mode: TransportMode, pricing: &PricingConfig) -> f64 {
    if mode != TransportMode::Car || !distance_km.is_finite() || distance_km < 0.0 {
        return 0.0;
    }
    let tolls = (distance_km / pricing.toll_interval_km).floor();
    tolls * pricing.toll_charge_usd
}
