//! Flux-transfer matrix (`rfluxmtx`) flag surface and the receiver-header
//! control parameters.
//!
//! `rfluxmtx` rewrites several flags itself from the `#@rfluxmtx` control
//! line inside the receiver file. The corresponding options (`-f`, `-e`,
//! `-m`, `-M`) are therefore protected here: they are derived from the
//! receiver specification and direct assignment fails.

use std::path::Path;

use anyhow::Context as _;

use crate::error::{RadianceError, RadianceResult};
use crate::options::{
    BoolOption, IntegerOption, NumericOption, OptionCollection, RadianceOption, StringOption,
};

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct RfluxmtxOptions {
    /// Verbose progress reports.
    pub v: BoolOption,
    pub ab: IntegerOption,
    pub ad: IntegerOption,
    pub as_: IntegerOption,
    /// Sample count per surface patch.
    pub c: IntegerOption,
    pub aa: NumericOption,
    pub lw: NumericOption,
    /// Calculation file, derived from the receiver control line.
    pub f: StringOption,
    /// Bin expression, derived from the receiver control line.
    pub e: StringOption,
    /// Modifier name, derived from the receiver control line.
    pub m: StringOption,
    /// Modifier file, derived from the receiver control line.
    pub M: StringOption,
    additional: String,
}

impl Default for RfluxmtxOptions {
    fn default() -> Self {
        Self {
            v: BoolOption::new("v", "verbose reports"),
            ab: IntegerOption::new("ab", "ambient bounces").min_value(0),
            ad: IntegerOption::new("ad", "ambient divisions").min_value(0),
            as_: IntegerOption::new("as", "ambient supersamples").min_value(0),
            c: IntegerOption::new("c", "samples per patch").min_value(1),
            aa: NumericOption::new("aa", "ambient accuracy").min_value(0.0),
            lw: NumericOption::new("lw", "limit weight").min_value(0.0),
            f: StringOption::new("f", "calculation file").protect(),
            e: StringOption::new("e", "bin expression").protect(),
            m: StringOption::new("m", "modifier name").protect(),
            M: StringOption::new("M", "modifier file").protect(),
            additional: String::new(),
        }
    }
}

impl OptionCollection for RfluxmtxOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![
            &self.v, &self.ab, &self.ad, &self.as_, &self.c, &self.aa, &self.lw, &self.f, &self.e,
            &self.m, &self.M,
        ]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![
            &mut self.v,
            &mut self.ab,
            &mut self.ad,
            &mut self.as_,
            &mut self.c,
            &mut self.aa,
            &mut self.lw,
            &mut self.f,
            &mut self.e,
            &mut self.m,
            &mut self.M,
        ]
    }

    fn additional_args(&self) -> &str {
        &self.additional
    }

    fn push_additional(&mut self, raw: &str) {
        if !self.additional.is_empty() {
            self.additional.push(' ');
        }
        self.additional.push_str(raw);
    }
}

const SAMPLING_TYPES: &[&str] = &["u", "kf", "kd", "ks", "r1", "r2", "r4", "r6"];

/// The `#@rfluxmtx` control line embedded in a receiver file:
/// `#@rfluxmtx h=kf u=0,1,0 o=output.vmx`.
#[derive(Clone, Debug)]
pub struct RfluxmtxControlParameters {
    sampling_type: String,
    up_direction: String,
    output_spec: Option<String>,
}

impl Default for RfluxmtxControlParameters {
    fn default() -> Self {
        Self {
            sampling_type: "u".to_string(),
            up_direction: "Y".to_string(),
            output_spec: None,
        }
    }
}

impl RfluxmtxControlParameters {
    pub fn sampling_type(&self) -> &str {
        &self.sampling_type
    }

    pub fn up_direction(&self) -> &str {
        &self.up_direction
    }

    pub fn output_spec(&self) -> Option<&str> {
        self.output_spec.as_deref()
    }

    pub fn set_sampling_type(&mut self, value: impl Into<String>) -> RadianceResult<()> {
        let value = value.into();
        if !SAMPLING_TYPES.contains(&value.as_str()) {
            return Err(RadianceError::invalid_value(
                "sampling type (h)",
                value,
                SAMPLING_TYPES,
            ));
        }
        self.sampling_type = value;
        Ok(())
    }

    /// Accepts an axis letter (`Y`), a signed axis (`-X`, `+Z`), or a
    /// comma-separated direction vector (`0,1,0`).
    pub fn set_up_direction(&mut self, value: impl Into<String>) -> RadianceResult<()> {
        let value = value.into();
        let stripped = value.strip_prefix(['+', '-']).unwrap_or(&value);
        let is_axis = matches!(stripped, "X" | "Y" | "Z" | "x" | "y" | "z");
        let is_vector = stripped.split(',').count() == 3
            && stripped.split(',').all(|c| c.trim().parse::<f64>().is_ok());
        if !is_axis && !is_vector {
            return Err(RadianceError::invalid_value(
                "up direction (u)",
                value,
                &["X", "Y", "Z", "-X", "-Y", "-Z", "x,y,z vector"],
            ));
        }
        self.up_direction = value;
        Ok(())
    }

    pub fn set_output_spec(&mut self, value: impl Into<String>) {
        self.output_spec = Some(value.into());
    }

    pub fn to_radiance(&self) -> String {
        let mut line = format!(
            "#@rfluxmtx h={} u={}",
            self.sampling_type, self.up_direction
        );
        if let Some(output) = &self.output_spec {
            line.push_str(&format!(" o={output}"));
        }
        line
    }

    /// Parse a control line, with or without the `#@rfluxmtx` prefix.
    pub fn from_string(line: &str) -> RadianceResult<Self> {
        let body = line.trim().strip_prefix("#@rfluxmtx").unwrap_or(line).trim();
        let mut parameters = Self::default();
        for token in body.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                return Err(RadianceError::type_error(
                    "rfluxmtx control line",
                    "key=value tokens",
                    token,
                ));
            };
            match key {
                "h" => parameters.set_sampling_type(value)?,
                "u" => parameters.set_up_direction(value)?,
                "o" => parameters.set_output_spec(value),
                other => {
                    return Err(RadianceError::invalid_value(
                        "rfluxmtx control key",
                        other,
                        &["h", "u", "o"],
                    ));
                }
            }
        }
        Ok(parameters)
    }

    /// Scan a receiver file for its control line.
    pub fn from_file(path: impl AsRef<Path>) -> RadianceResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read receiver file '{}'", path.display()))?;
        let line = content
            .lines()
            .find(|l| l.trim_start().starts_with("#@rfluxmtx"))
            .ok_or_else(|| {
                RadianceError::missing_argument(
                    "rfluxmtx",
                    format!("#@rfluxmtx control line in '{}'", path.display()),
                )
            })?;
        Self::from_string(line)
    }
}
