//! Ray tracing over a sensor grid: `rtrace` and its contribution-computing
//! variant `rcontrib`.
//!
//! Both tools share the same argument surface (an octree plus a sensor file
//! fed through stdin redirection); what differs is the options schema and
//! its completeness rules. That shape is modeled as one generic body,
//! [`Trace`], parameterized by a [`TraceSchema`] rather than two copies of
//! the code.

use crate::command::{CommandChain, RadianceCommand};
use crate::error::{RadianceError, RadianceResult};
use crate::options::rcontrib::RcontribOptions;
use crate::options::rtrace::RtraceOptions;
use crate::options::{OptionCollection, RadianceOption as _};
use crate::paths::normpath;

/// Options schema plugged into the shared ray-tracer argument surface.
pub trait TraceSchema: OptionCollection + Default {
    const TOOL: &'static str;

    /// Schema-specific completeness checks beyond the shared surface.
    fn validate_schema(&self) -> RadianceResult<()> {
        Ok(())
    }
}

impl TraceSchema for RtraceOptions {
    const TOOL: &'static str = "rtrace";
}

impl TraceSchema for RcontribOptions {
    const TOOL: &'static str = "rcontrib";

    fn validate_schema(&self) -> RadianceResult<()> {
        if self.m.values().is_empty() && !self.M.is_set() {
            return Err(RadianceError::missing_argument(
                Self::TOOL,
                "at least one modifier (-m) or a modifier file (-M)",
            ));
        }
        Ok(())
    }
}

/// Shared ray-tracer argument surface with a pluggable options schema.
#[derive(Default)]
pub struct Trace<S: TraceSchema> {
    pub options: S,
    octree: Option<String>,
    sensors: Option<String>,
    chain: CommandChain,
}

pub type Rtrace = Trace<RtraceOptions>;
pub type Rcontrib = Trace<RcontribOptions>;

impl<S: TraceSchema> Trace<S> {
    pub fn new(octree: impl Into<String>) -> Self {
        let mut trace = Self::default();
        trace.set_octree(octree);
        trace
    }

    pub fn octree(&self) -> Option<&str> {
        self.octree.as_deref()
    }

    pub fn set_octree(&mut self, octree: impl Into<String>) {
        self.octree = Some(normpath(octree.into()));
    }

    pub fn sensors(&self) -> Option<&str> {
        self.sensors.as_deref()
    }

    pub fn set_sensors(&mut self, sensors: impl Into<String>) {
        self.sensors = Some(normpath(sensors.into()));
    }
}

impl<S: TraceSchema> RadianceCommand for Trace<S> {
    fn name(&self) -> &'static str {
        S::TOOL
    }

    fn validate(&self, stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;
        self.options.validate_schema()?;
        if self.octree.is_none() {
            return Err(RadianceError::missing_argument(S::TOOL, "octree"));
        }
        if !stdin_input && self.sensors.is_none() {
            return Err(RadianceError::missing_argument(S::TOOL, "sensors"));
        }
        Ok(())
    }

    fn body(&self, stdin_input: bool) -> String {
        let mut line = format!("{} {}", S::TOOL, self.options.to_radiance());
        if let Some(octree) = &self.octree {
            line = format!("{line} {octree}");
        }
        // sensors arrive from the pipe when chained
        if !stdin_input {
            if let Some(sensors) = &self.sensors {
                line = format!("{line} < {sensors}");
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
