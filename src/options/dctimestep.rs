//! Daylight-coefficient time-step (`dctimestep`) flag surface.

use crate::options::{
    IntegerOption, OptionCollection, RadianceOption, StringOption, UnknownFlagPolicy,
};

#[derive(Clone, Debug)]
pub struct DctimestepOptions {
    /// Number of time steps in the sky-vector series.
    pub n: IntegerOption,
    /// Output file template, one file per time step (`%04d` style).
    pub o: StringOption,
    /// Input data format of the matrix files.
    pub i: StringOption,
}

impl Default for DctimestepOptions {
    fn default() -> Self {
        Self {
            n: IntegerOption::new("n", "number of time steps").min_value(1),
            o: StringOption::new("o", "output file template"),
            i: StringOption::new("i", "input data format").valid_values(&["f", "d"]),
        }
    }
}

impl OptionCollection for DctimestepOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![&self.n, &self.o, &self.i]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![&mut self.n, &mut self.o, &mut self.i]
    }

    fn unknown_flag_policy(&self) -> UnknownFlagPolicy {
        UnknownFlagPolicy::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_empty() {
        assert_eq!(DctimestepOptions::default().to_radiance(), "");
    }

    #[test]
    fn timestep_count() {
        let mut options = DctimestepOptions::default();
        options.n.set(8760).unwrap();
        assert_eq!(options.to_radiance(), "-n 8760");
    }
}
