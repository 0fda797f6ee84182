//! Contribution coefficient (`rcontrib`) flag surface.
//!
//! Shares the ray-tracer sampling flags but adds the modifier selection the
//! tool is actually for: at least one `-m` modifier or an `-M` modifier file
//! must be configured before the command validates.

use crate::options::{
    BoolOption, IntegerOption, NumericOption, OptionCollection, RadianceOption,
    RepeatedStringOption, StringOption,
};

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct RcontribOptions {
    /// Irradiance computation switch.
    pub I: BoolOption,
    /// Output header toggle.
    pub h: BoolOption,
    /// Warning messages toggle.
    pub w: BoolOption,
    pub ab: IntegerOption,
    pub ad: IntegerOption,
    pub as_: IntegerOption,
    pub lr: IntegerOption,
    /// Accumulate results over this many records before output.
    pub c: IntegerOption,
    pub aa: NumericOption,
    pub lw: NumericOption,
    /// Modifier names whose contributions are computed.
    pub m: RepeatedStringOption,
    /// File holding one modifier name per line.
    pub M: StringOption,
    /// Output file specification template.
    pub o: StringOption,
    /// Bin expression for grouping contributions.
    pub b: StringOption,
    /// Number of bins produced by the `-b` expression.
    pub bn: StringOption,
    additional: String,
}

impl Default for RcontribOptions {
    fn default() -> Self {
        Self {
            I: BoolOption::new("I", "irradiance switch"),
            h: BoolOption::new("h", "output header"),
            w: BoolOption::new("w", "warning messages"),
            ab: IntegerOption::new("ab", "ambient bounces").min_value(0),
            ad: IntegerOption::new("ad", "ambient divisions").min_value(0),
            as_: IntegerOption::new("as", "ambient supersamples").min_value(0),
            lr: IntegerOption::new("lr", "limit reflections"),
            c: IntegerOption::new("c", "accumulated records per output").min_value(1),
            aa: NumericOption::new("aa", "ambient accuracy").min_value(0.0),
            lw: NumericOption::new("lw", "limit weight").min_value(0.0),
            m: RepeatedStringOption::new("m", "modifier name"),
            M: StringOption::new("M", "modifier file"),
            o: StringOption::new("o", "output file specification"),
            b: StringOption::new("b", "bin expression"),
            bn: StringOption::new("bn", "bin count"),
            additional: String::new(),
        }
    }
}

impl OptionCollection for RcontribOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![
            &self.I, &self.h, &self.w, &self.ab, &self.ad, &self.as_, &self.lr, &self.c, &self.aa,
            &self.lw, &self.m, &self.M, &self.o, &self.b, &self.bn,
        ]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![
            &mut self.I,
            &mut self.h,
            &mut self.w,
            &mut self.ab,
            &mut self.ad,
            &mut self.as_,
            &mut self.lr,
            &mut self.c,
            &mut self.aa,
            &mut self.lw,
            &mut self.m,
            &mut self.M,
            &mut self.o,
            &mut self.b,
            &mut self.bn,
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
