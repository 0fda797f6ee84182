//! Image-interpolator (`pinterp`) flag surface.

use crate::options::{
    BoolOption, IntegerOption, NumericOption, OptionCollection, RadianceOption, StringOption,
};

#[derive(Clone, Debug)]
pub struct PinterpOptions {
    /// Target view, derived from the command's view field (or the stdin
    /// placeholder when piped). Never set directly.
    pub vf: StringOption,
    /// Output x resolution.
    pub x: IntegerOption,
    /// Output y resolution.
    pub y: IntegerOption,
    /// Exposure adjustment applied to the result.
    pub e: NumericOption,
    /// Fill unsampled pixels from the nearest neighbor.
    pub n: BoolOption,
    additional: String,
}

impl Default for PinterpOptions {
    fn default() -> Self {
        Self {
            vf: StringOption::new("vf", "target view").protect(),
            x: IntegerOption::new("x", "x resolution").min_value(1),
            y: IntegerOption::new("y", "y resolution").min_value(1),
            e: NumericOption::new("e", "exposure adjustment"),
            n: BoolOption::new("n", "nearest-neighbor fill"),
            additional: String::new(),
        }
    }
}

impl PinterpOptions {
    pub(crate) fn set_view(&mut self, view: &str) {
        self.vf.force_set(view);
    }
}

impl OptionCollection for PinterpOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![&self.vf, &self.x, &self.y, &self.e, &self.n]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![
            &mut self.vf,
            &mut self.x,
            &mut self.y,
            &mut self.e,
            &mut self.n,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadianceError;

    #[test]
    fn view_is_protected() {
        let mut options = PinterpOptions::default();
        assert!(matches!(
            options.vf.set("view.vf"),
            Err(RadianceError::ProtectedOption { .. })
        ));
        options.set_view("view.vf");
        assert_eq!(options.to_radiance(), "-vf view.vf");
    }
}
