//! Perez sky generator (`gendaylit`) flag surface.
//!
//! The sky luminance inputs `-P`, `-W`, and `-L` describe the same quantity
//! three different ways; `-W` and `-L` are mutually exclusive and checked by
//! the collection's validation hook.

use crate::error::{RadianceError, RadianceResult};
use crate::options::{
    BoolOption, IntegerOption, NumericOption, OptionCollection, RadianceOption, TupleOption,
};

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct GendaylitOptions {
    /// Output either radiance or irradiance quantities: 0 W/sr/m2 visible,
    /// 1 W/sr/m2 solar, 2 lm/sr/m2 luminance.
    pub O: IntegerOption,
    /// Ground plane reflectance.
    pub g: NumericOption,
    /// Perez parameters epsilon and delta.
    pub P: TupleOption,
    /// Direct-normal and diffuse-horizontal irradiance (W/m2).
    pub W: TupleOption,
    /// Direct-normal and diffuse-horizontal illuminance (lm/m2).
    pub L: TupleOption,
    /// Source description of the sun only, no skydome.
    pub s: BoolOption,
    /// Suppress warning messages.
    pub w: BoolOption,
    additional: String,
}

impl Default for GendaylitOptions {
    fn default() -> Self {
        Self {
            O: IntegerOption::new("O", "output quantity")
                .min_value(0)
                .max_value(2),
            g: NumericOption::new("g", "ground reflectance")
                .min_value(0.0)
                .max_value(1.0),
            P: TupleOption::new("P", "Perez epsilon and delta", 2),
            W: TupleOption::new("W", "direct-normal and diffuse-horizontal irradiance", 2),
            L: TupleOption::new("L", "direct-normal and diffuse-horizontal illuminance", 2),
            s: BoolOption::new("s", "sun source only"),
            w: BoolOption::new("w", "suppress warnings"),
            additional: String::new(),
        }
    }
}

impl OptionCollection for GendaylitOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![
            &self.O, &self.g, &self.P, &self.W, &self.L, &self.s, &self.w,
        ]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![
            &mut self.O,
            &mut self.g,
            &mut self.P,
            &mut self.W,
            &mut self.L,
            &mut self.s,
            &mut self.w,
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

    fn validate(&self) -> RadianceResult<()> {
        if self.W.is_set() && self.L.is_set() {
            return Err(RadianceError::conflicting(
                "gendaylit",
                "-W and -L describe the same sky input and cannot both be set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadianceError;

    #[test]
    fn output_spec_and_ground() {
        let mut options = GendaylitOptions::default();
        options.g.set(0.1).unwrap();
        options.O.set(2).unwrap();
        options.s.set(true).unwrap();
        assert_eq!(options.to_radiance(), "-O 2 -g 0.1 -s");
    }

    #[test]
    fn irradiance_and_illuminance_conflict() {
        let mut options = GendaylitOptions::default();
        options.W.set(&[840.0, 135.0]).unwrap();
        options.L.set(&[165.0, 200.0]).unwrap();
        assert!(matches!(
            options.validate(),
            Err(RadianceError::ConflictingArguments { .. })
        ));
    }
}
