//! Scene-compiler (`oconv`) flag surface.

use crate::options::{
    BoolOption, IntegerOption, OptionCollection, RadianceOption, StringOption,
};

#[derive(Clone, Debug)]
pub struct OconvOptions {
    /// Produce a frozen octree containing all scene information.
    pub f: BoolOption,
    /// Suppress warnings about zero-area surfaces.
    pub w: BoolOption,
    /// Existing octree to add the scene description to.
    pub i: StringOption,
    /// Maximum surface set size for each voxel.
    pub n: IntegerOption,
    /// Maximum octree resolution.
    pub r: IntegerOption,
    additional: String,
}

impl Default for OconvOptions {
    fn default() -> Self {
        Self {
            f: BoolOption::new("f", "produce a frozen octree"),
            w: BoolOption::new("w", "suppress surface warnings"),
            i: StringOption::new("i", "input octree to build on"),
            n: IntegerOption::new("n", "maximum surface set size per voxel").min_value(1),
            r: IntegerOption::new("r", "maximum octree resolution").min_value(1),
            additional: String::new(),
        }
    }
}

impl OptionCollection for OconvOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![&self.f, &self.w, &self.i, &self.n, &self.r]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![
            &mut self.f,
            &mut self.w,
            &mut self.i,
            &mut self.n,
            &mut self.r,
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
