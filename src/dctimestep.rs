//! Daylight-coefficient time-step application: `dctimestep [options]
//! <matrices…> sky_vector`.
//!
//! The tool runs in exactly one of three shapes, selected by which matrix
//! fields are set:
//!
//! - daylight coefficient: `dctimestep dc.mtx sky.vec`
//! - direct sun: `dctimestep sun.mtx sky.vec`
//! - three phase: `dctimestep view.vmx t.xml d.dmx sky.vec`
//!
//! Mixing fields from different shapes is a conflict. The sky vector may
//! arrive from an upstream pipe (e.g. gendaylit), in which case the trailing
//! argument is omitted.

use crate::command::{CommandChain, RadianceCommand};
use crate::error::{RadianceError, RadianceResult};
use crate::options::OptionCollection;
use crate::options::dctimestep::DctimestepOptions;
use crate::paths::normpath;

#[derive(Default)]
pub struct Dctimestep {
    pub options: DctimestepOptions,
    day_coef_matrix: Option<String>,
    sun_coef_matrix: Option<String>,
    view_matrix: Option<String>,
    t_matrix: Option<String>,
    d_matrix: Option<String>,
    sky_vector: Option<String>,
    chain: CommandChain,
}

impl Dctimestep {
    pub fn for_daylight_coefficient(
        day_coef_matrix: impl Into<String>,
        sky_vector: impl Into<String>,
    ) -> Self {
        let mut cmd = Self::default();
        cmd.set_day_coef_matrix(day_coef_matrix);
        cmd.set_sky_vector(sky_vector);
        cmd
    }

    pub fn for_direct_sun(
        sun_coef_matrix: impl Into<String>,
        sky_vector: impl Into<String>,
    ) -> Self {
        let mut cmd = Self::default();
        cmd.set_sun_coef_matrix(sun_coef_matrix);
        cmd.set_sky_vector(sky_vector);
        cmd
    }

    pub fn for_three_phase(
        view_matrix: impl Into<String>,
        t_matrix: impl Into<String>,
        d_matrix: impl Into<String>,
        sky_vector: impl Into<String>,
    ) -> Self {
        let mut cmd = Self::default();
        cmd.set_view_matrix(view_matrix);
        cmd.set_t_matrix(t_matrix);
        cmd.set_d_matrix(d_matrix);
        cmd.set_sky_vector(sky_vector);
        cmd
    }

    pub fn day_coef_matrix(&self) -> Option<&str> {
        self.day_coef_matrix.as_deref()
    }

    pub fn set_day_coef_matrix(&mut self, path: impl Into<String>) {
        self.day_coef_matrix = Some(normpath(path.into()));
    }

    pub fn sun_coef_matrix(&self) -> Option<&str> {
        self.sun_coef_matrix.as_deref()
    }

    pub fn set_sun_coef_matrix(&mut self, path: impl Into<String>) {
        self.sun_coef_matrix = Some(normpath(path.into()));
    }

    pub fn view_matrix(&self) -> Option<&str> {
        self.view_matrix.as_deref()
    }

    pub fn set_view_matrix(&mut self, path: impl Into<String>) {
        self.view_matrix = Some(normpath(path.into()));
    }

    pub fn t_matrix(&self) -> Option<&str> {
        self.t_matrix.as_deref()
    }

    pub fn set_t_matrix(&mut self, path: impl Into<String>) {
        self.t_matrix = Some(normpath(path.into()));
    }

    pub fn d_matrix(&self) -> Option<&str> {
        self.d_matrix.as_deref()
    }

    pub fn set_d_matrix(&mut self, path: impl Into<String>) {
        self.d_matrix = Some(normpath(path.into()));
    }

    pub fn sky_vector(&self) -> Option<&str> {
        self.sky_vector.as_deref()
    }

    pub fn set_sky_vector(&mut self, path: impl Into<String>) {
        self.sky_vector = Some(normpath(path.into()));
    }

    fn three_phase_fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("view_matrix", self.view_matrix.as_deref()),
            ("t_matrix", self.t_matrix.as_deref()),
            ("d_matrix", self.d_matrix.as_deref()),
        ]
    }
}

impl RadianceCommand for Dctimestep {
    fn name(&self) -> &'static str {
        "dctimestep"
    }

    fn validate(&self, stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;

        let three_phase = self.three_phase_fields().iter().any(|(_, v)| v.is_some());
        let groups = [
            ("day_coef_matrix", self.day_coef_matrix.is_some()),
            ("sun_coef_matrix", self.sun_coef_matrix.is_some()),
            ("view/t/d matrices", three_phase),
        ];
        let active: Vec<&str> = groups
            .iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| *name)
            .collect();

        match active.len() {
            0 => {
                return Err(RadianceError::missing_argument(
                    self.name(),
                    "day_coef_matrix, sun_coef_matrix, or view/t/d matrices",
                ));
            }
            1 => {}
            _ => {
                return Err(RadianceError::conflicting(
                    self.name(),
                    format!("{} are mutually exclusive", active.join(" and ")),
                ));
            }
        }

        if three_phase {
            let missing: Vec<&str> = self
                .three_phase_fields()
                .iter()
                .filter(|(_, v)| v.is_none())
                .map(|(name, _)| *name)
                .collect();
            if !missing.is_empty() {
                return Err(RadianceError::missing_argument(
                    self.name(),
                    missing.join(", "),
                ));
            }
        }

        if !stdin_input && self.sky_vector.is_none() {
            return Err(RadianceError::missing_argument(self.name(), "sky_vector"));
        }
        Ok(())
    }

    fn body(&self, stdin_input: bool) -> String {
        let mut parts = vec![self.name().to_string(), self.options.to_radiance()];
        if let Some(matrix) = &self.day_coef_matrix {
            parts.push(matrix.clone());
        } else if let Some(matrix) = &self.sun_coef_matrix {
            parts.push(matrix.clone());
        } else {
            for (_, value) in self.three_phase_fields() {
                if let Some(matrix) = value {
                    parts.push(matrix.to_string());
                }
            }
        }
        // the sky vector comes from the pipe when chained
        if !stdin_input {
            if let Some(sky) = &self.sky_vector {
                parts.push(sky.clone());
            }
        }
        parts.join(" ")
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
    fn defaults_fail_validation() {
        let cmd = Dctimestep::default();
        assert_eq!(cmd.options.to_radiance(), "");
        assert!(matches!(
            cmd.to_radiance(),
            Err(RadianceError::MissingArgument { .. })
        ));
    }

    #[test]
    fn daylight_coefficient_calc() {
        let mut cmd = Dctimestep::default();
        cmd.set_day_coef_matrix("dc.mtx");
        // sky vector still missing
        assert!(cmd.validate(false).is_err());
        cmd.set_sky_vector("sky.vec");
        assert_eq!(cmd.to_radiance().unwrap(), "dctimestep dc.mtx sky.vec");

        cmd.chain_mut().set_output("illum.mtx");
        assert_eq!(
            cmd.to_radiance().unwrap(),
            "dctimestep dc.mtx sky.vec > illum.mtx"
        );
    }

    #[test]
    fn exclusive_input_groups() {
        let mut cmd = Dctimestep::for_daylight_coefficient("dc.mtx", "sky.vec");
        cmd.set_view_matrix("view.vmx");
        assert!(matches!(
            cmd.validate(false),
            Err(RadianceError::ConflictingArguments { .. })
        ));
    }

    #[test]
    fn adding_a_sun_matrix_breaks_a_valid_setup() {
        let mut cmd = Dctimestep::for_daylight_coefficient("dc.mtx", "sky.vec");
        cmd.validate(false).unwrap();
        cmd.set_sun_coef_matrix("sun.mtx");
        assert!(matches!(
            cmd.validate(false),
            Err(RadianceError::ConflictingArguments { .. })
        ));
    }

    #[test]
    fn three_phase_requires_all_three() {
        let mut cmd = Dctimestep::default();
        cmd.set_view_matrix("view.vmx");
        cmd.set_sky_vector("sky.vec");
        let err = cmd.validate(false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dctimestep: missing required argument 't_matrix, d_matrix'"
        );
    }

    #[test]
    fn three_phase_renders_in_order() {
        let cmd = Dctimestep::for_three_phase("view.vmx", "t.xml", "d.dmx", "sky.vec");
        assert_eq!(
            cmd.to_radiance().unwrap(),
            "dctimestep view.vmx t.xml d.dmx sky.vec"
        );
    }

    #[test]
    fn sky_vector_comes_from_the_pipe_when_chained() {
        let mut cmd = Dctimestep::default();
        cmd.set_day_coef_matrix("dc.mtx");
        assert_eq!(cmd.to_radiance_stdin(true).unwrap(), "dctimestep dc.mtx");
    }
}
