//! Matrix-algebra (`rmtxop`) flag surface.

use crate::options::{
    BoolOption, OptionCollection, RadianceOption, StringOptionJoined, UnknownFlagPolicy,
};

#[derive(Clone, Debug)]
pub struct RmtxopOptions {
    /// Verbose reports on each operation.
    pub v: BoolOption,
    /// Output format: ascii, float, double, or RGBE color.
    pub f: StringOptionJoined,
}

impl Default for RmtxopOptions {
    fn default() -> Self {
        Self {
            v: BoolOption::new("v", "verbose reports"),
            f: StringOptionJoined::new("f", "output format")
                .valid_values(&["a", "f", "d", "c"]),
        }
    }
}

impl OptionCollection for RmtxopOptions {
    fn options(&self) -> Vec<&dyn RadianceOption> {
        vec![&self.v, &self.f]
    }

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption> {
        vec![&mut self.v, &mut self.f]
    }

    // The surface is small and closed; per-operand modifiers (-t, -c, -s)
    // belong to the command's matrix slots, not here.
    fn unknown_flag_policy(&self) -> UnknownFlagPolicy {
        UnknownFlagPolicy::Reject
    }
}
