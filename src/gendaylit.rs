//! Perez sky generation: `gendaylit [options] month day time[tz]` or
//! `gendaylit [options] -ang altitude azimuth`.
//!
//! The calendar form and the solar-angle form are mutually exclusive. Time
//! accepts decimal hours (`23.5` renders as `23:30`) or a preformatted
//! `HH:MM` string; the `solar_time` flag renders the month with a `+` sign,
//! which is how the tool spells "interpret the time as solar".

use crate::command::{CommandChain, RadianceCommand};
use crate::error::{RadianceError, RadianceResult};
use crate::options::OptionCollection;
use crate::options::gendaylit::GendaylitOptions;
use crate::paths::fmt_float;

#[derive(Default)]
pub struct Gendaylit {
    pub options: GendaylitOptions,
    month: Option<u8>,
    day: Option<u8>,
    time: Option<String>,
    time_zone: Option<String>,
    solar_time: bool,
    ang: Option<(f64, f64)>,
    chain: CommandChain,
}

impl Gendaylit {
    pub fn new(month: u8, day: u8, time: f64) -> Self {
        let mut cmd = Self::default();
        cmd.month = Some(month);
        cmd.day = Some(day);
        cmd.set_time(time);
        cmd
    }

    /// Sky from solar altitude and azimuth in degrees, bypassing the
    /// calendar input.
    pub fn from_ang(ang: (f64, f64)) -> Self {
        let mut cmd = Self::default();
        cmd.ang = Some(ang);
        cmd
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn set_month(&mut self, month: u8) {
        self.month = Some(month);
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn set_day(&mut self, day: u8) {
        self.day = Some(day);
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Time of day in decimal hours; `23.5` becomes `23:30`. Rounding works
    /// on total minutes so a time just below a whole hour carries over
    /// instead of producing a `:60` minute field.
    pub fn set_time(&mut self, time: f64) {
        let total_minutes = (time * 60.0).round() as u32;
        self.time = Some(format!("{}:{:02}", total_minutes / 60, total_minutes % 60));
    }

    /// Preformatted `HH:MM` time. The shape is checked eagerly, like every
    /// other typed assignment.
    pub fn set_time_str(&mut self, time: impl Into<String>) -> RadianceResult<()> {
        let time = time.into();
        let well_formed = time.split_once(':').is_some_and(|(hours, minutes)| {
            hours.parse::<u32>().is_ok()
                && minutes.len() == 2
                && minutes.parse::<u32>().is_ok_and(|m| m < 60)
        });
        if !well_formed {
            return Err(RadianceError::type_error("time", "an HH:MM time", time));
        }
        self.time = Some(time);
        Ok(())
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    /// Three-letter zone suffix appended to the time, e.g. `EST`.
    pub fn set_time_zone(&mut self, zone: impl Into<String>) {
        self.time_zone = Some(zone.into());
    }

    pub fn solar_time(&self) -> bool {
        self.solar_time
    }

    pub fn set_solar_time(&mut self, solar_time: bool) {
        self.solar_time = solar_time;
    }

    pub fn ang(&self) -> Option<(f64, f64)> {
        self.ang
    }

    pub fn set_ang(&mut self, ang: (f64, f64)) {
        self.ang = Some(ang);
    }

    /// The positional input: `-ang alt az`, or `[+]month day time[tz]`.
    pub fn input(&self) -> Option<String> {
        if let Some((altitude, azimuth)) = self.ang {
            return Some(format!(
                "-ang {} {}",
                fmt_float(altitude),
                fmt_float(azimuth)
            ));
        }
        match (self.month, self.day, &self.time) {
            (Some(month), Some(day), Some(time)) => {
                let sign = if self.solar_time { "+" } else { "" };
                let zone = self.time_zone.as_deref().unwrap_or("");
                Some(format!("{sign}{month} {day} {time}{zone}"))
            }
            _ => None,
        }
    }
}

impl RadianceCommand for Gendaylit {
    fn name(&self) -> &'static str {
        "gendaylit"
    }

    fn validate(&self, stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;
        if self.ang.is_some()
            && (self.month.is_some() || self.day.is_some() || self.time.is_some())
        {
            return Err(RadianceError::conflicting(
                self.name(),
                "month/day/time and -ang solar angles are mutually exclusive",
            ));
        }
        if !stdin_input && self.input().is_none() {
            return Err(RadianceError::missing_argument(
                self.name(),
                "month/day/time or ang",
            ));
        }
        Ok(())
    }

    fn body(&self, stdin_input: bool) -> String {
        let mut line = format!("{} {}", self.name(), self.options.to_radiance());
        // the upstream command supplies the input when piped
        if !stdin_input {
            if let Some(input) = self.input() {
                line = format!("{line} {input}");
            }
        }
        line
    }

    fn chain(&self) -> &CommandChain {
        &self.chain
    }

    fn chain_mut(&mut self) -> &mut CommandChain {
        &mut self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_input_with_zone_and_solar_time() {
        let mut gendaylit = Gendaylit::new(1, 21, 23.5);
        gendaylit.options.g.set(0.1).unwrap();
        gendaylit.options.O.set(2).unwrap();
        gendaylit.options.s.set(true).unwrap();
        assert_eq!(gendaylit.month(), Some(1));
        assert_eq!(gendaylit.day(), Some(21));
        assert_eq!(gendaylit.time(), Some("23:30"));

        gendaylit.set_time_zone("EST");
        gendaylit.set_solar_time(true);
        assert_eq!(gendaylit.input().as_deref(), Some("+1 21 23:30EST"));
        assert_eq!(
            gendaylit.to_radiance().unwrap(),
            "gendaylit -O 2 -g 0.1 -s +1 21 23:30EST"
        );

        gendaylit.chain_mut().set_output("test.sky");
        assert_eq!(
            gendaylit.to_radiance().unwrap(),
            "gendaylit -O 2 -g 0.1 -s +1 21 23:30EST > test.sky"
        );
    }

    #[test]
    fn solar_angle_input() {
        let mut gendaylit = Gendaylit::from_ang((23.33, 45.56));
        gendaylit.options.P.set(&[6.3, 0.12]).unwrap();
        assert_eq!(
            gendaylit.to_radiance().unwrap(),
            "gendaylit -P 6.3 0.12 -ang 23.33 45.56"
        );
    }

    #[test]
    fn calendar_and_angles_conflict() {
        let mut gendaylit = Gendaylit::from_ang((23.33, 45.56));
        gendaylit.set_month(1);
        gendaylit.set_day(21);
        gendaylit.set_time(12.0);
        assert!(matches!(
            gendaylit.validate(false),
            Err(RadianceError::ConflictingArguments { .. })
        ));
    }

    #[test]
    fn stdin_drops_the_positional_input() {
        let mut gendaylit = Gendaylit::new(1, 21, 23.55);
        gendaylit.set_time_zone("EST");
        gendaylit.chain_mut().set_output("test.sky");
        assert_eq!(
            gendaylit.to_radiance_stdin(true).unwrap(),
            "gendaylit > test.sky"
        );
    }

    #[test]
    fn preformatted_time_string() {
        let mut gendaylit = Gendaylit::default();
        gendaylit.set_month(6);
        gendaylit.set_day(21);
        gendaylit.set_time_str("12:15").unwrap();
        assert_eq!(gendaylit.input().as_deref(), Some("6 21 12:15"));
    }

    #[test]
    fn minute_rounding_carries_into_the_hour() {
        let mut gendaylit = Gendaylit::new(6, 21, 23.995);
        assert_eq!(gendaylit.time(), Some("24:00"));
        gendaylit.set_time(10.999);
        assert_eq!(gendaylit.time(), Some("11:00"));
        gendaylit.set_time(12.0);
        assert_eq!(gendaylit.time(), Some("12:00"));
    }

    #[test]
    fn malformed_time_string_is_rejected() {
        let mut gendaylit = Gendaylit::default();
        assert!(matches!(
            gendaylit.set_time_str("noon"),
            Err(RadianceError::Type { .. })
        ));
        assert!(matches!(
            gendaylit.set_time_str("12:75"),
            Err(RadianceError::Type { .. })
        ));
        assert!(matches!(
            gendaylit.set_time_str("12:5"),
            Err(RadianceError::Type { .. })
        ));
        assert!(gendaylit.time().is_none());
    }

    #[test]
    fn missing_input_is_reported() {
        let gendaylit = Gendaylit::default();
        assert!(gendaylit.month().is_none());
        assert!(matches!(
            gendaylit.validate(false),
            Err(RadianceError::MissingArgument { .. })
        ));
    }
}
