//! Ray-tracer (`rtrace`) flag surface.

use crate::options::{
    BoolOption, IntegerOption, NumericOption, OptionCollection, RadianceOption,
    StringOptionJoined,
};

/// Valid `-f[io]` format spellings: ascii, single float, double, or color,
/// for input and output independently.
const FORMAT_VALUES: &[&str] = &[
    "a", "f", "d", "c", "aa", "af", "ad", "ac", "fa", "ff", "fd", "fc", "da", "df", "dd", "dc",
    "ca", "cf", "cd", "cc",
];

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct RtraceOptions {
    /// Irradiance computation switch.
    pub I: BoolOption,
    /// Report irradiance rather than radiance.
    pub i: BoolOption,
    /// Uncorrelated Monte Carlo sampling.
    pub u: BoolOption,
    /// Limit ray distance to the maximum given by the octree.
    pub ld: BoolOption,
    /// Output header toggle.
    pub h: BoolOption,
    /// Warning messages toggle.
    pub w: BoolOption,
    pub ab: IntegerOption,
    pub ad: IntegerOption,
    pub as_: IntegerOption,
    pub ar: IntegerOption,
    pub lr: IntegerOption,
    pub aa: NumericOption,
    pub lw: NumericOption,
    pub dj: NumericOption,
    pub st: NumericOption,
    /// Input/output data format, e.g. `-faa`.
    pub f: StringOptionJoined,
    additional: String,
}

impl Default for RtraceOptions {
    fn default() -> Self {
        Self {
            I: BoolOption::new("I", "irradiance switch"),
            i: BoolOption::new("i", "irradiance output"),
            u: BoolOption::new("u", "uncorrelated sampling"),
            ld: BoolOption::new("ld", "limit ray distance"),
            h: BoolOption::new("h", "output header"),
            w: BoolOption::new("w", "warning messages"),
            ab: IntegerOption::new("ab", "ambient bounces").min_value(0),
            ad: IntegerOption::new("ad", "ambient divisions").min_value(0),
            as_: IntegerOption::new("as", "ambient supersamples").min_value(0),
            ar: IntegerOption::new("ar", "ambient resolution").min_value(0),
            lr: IntegerOption::new("lr", "limit reflections"),
            aa: NumericOption::new("aa", "ambient accuracy").min_value(0.0),
            lw: NumericOption::new("lw", "limit weight").min_value(0.0),
            dj: NumericOption::new("dj", "direct jitter").min_value(0.0).max_value(1.0),
            st: NumericOption::new("st", "specular threshold").min_value(0.0).max_value(1.0),
            f: StringOptionJoined::new("f", "input/output format").valid_values(FORMAT_VALUES),
            additional: String::new(),
        }
    }
}

impl OptionCollection for RtraceOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![
            &self.I, &self.i, &self.u, &self.ld, &self.h, &self.w, &self.ab, &self.ad, &self.as_,
            &self.ar, &self.lr, &self.aa, &self.lw, &self.dj, &self.st, &self.f,
        ]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![
            &mut self.I,
            &mut self.i,
            &mut self.u,
            &mut self.ld,
            &mut self.h,
            &mut self.w,
            &mut self.ab,
            &mut self.ad,
            &mut self.as_,
            &mut self.ar,
            &mut self.lr,
            &mut self.aa,
            &mut self.lw,
            &mut self.dj,
            &mut self.st,
            &mut self.f,
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
