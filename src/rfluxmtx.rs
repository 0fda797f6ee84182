//! Flux-transfer matrix computation: `rfluxmtx [options] sender receivers
//! [-i octree] [system] < sensors`.
//!
//! The sender slot takes `-` when the sampling rays come from a sensor file
//! (or from an upstream pipe) instead of a sender surface. The octree is
//! triple-quoted in the rendered line so a filename that is itself an
//! embedded `!`-command survives the shell.

use crate::command::{CommandChain, RadianceCommand};
use crate::error::{RadianceError, RadianceResult};
use crate::options::OptionCollection;
use crate::options::rfluxmtx::RfluxmtxOptions;
use crate::paths::normpath;

#[derive(Default)]
pub struct Rfluxmtx {
    pub options: RfluxmtxOptions,
    sensors: Option<String>,
    sender: Option<String>,
    receivers: Option<String>,
    octree: Option<String>,
    system: Option<String>,
    chain: CommandChain,
}

impl Rfluxmtx {
    pub fn new(receivers: impl Into<String>) -> Self {
        let mut rfluxmtx = Self::default();
        rfluxmtx.set_receivers(receivers);
        rfluxmtx
    }

    pub fn sensors(&self) -> Option<&str> {
        self.sensors.as_deref()
    }

    pub fn set_sensors(&mut self, sensors: impl Into<String>) {
        self.sensors = Some(normpath(sensors.into()));
    }

    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn set_sender(&mut self, sender: impl Into<String>) {
        self.sender = Some(normpath(sender.into()));
    }

    pub fn receivers(&self) -> Option<&str> {
        self.receivers.as_deref()
    }

    pub fn set_receivers(&mut self, receivers: impl Into<String>) {
        self.receivers = Some(normpath(receivers.into()));
    }

    pub fn octree(&self) -> Option<&str> {
        self.octree.as_deref()
    }

    pub fn set_octree(&mut self, octree: impl Into<String>) {
        self.octree = Some(normpath(octree.into()));
    }

    /// One additional system file of scene geometry. The tool accepts any
    /// number; a single slot keeps the surface simple.
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    pub fn set_system(&mut self, system: impl Into<String>) {
        self.system = Some(normpath(system.into()));
    }
}

impl RadianceCommand for Rfluxmtx {
    fn name(&self) -> &'static str {
        "rfluxmtx"
    }

    fn validate(&self, stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;
        if self.receivers.is_none() {
            return Err(RadianceError::missing_argument(self.name(), "receivers"));
        }
        if !stdin_input && self.sensors.is_none() && self.sender.is_none() {
            return Err(RadianceError::missing_argument(self.name(), "sensors"));
        }
        Ok(())
    }

    fn body(&self, stdin_input: bool) -> String {
        let mut parts = vec![self.name().to_string(), self.options.to_radiance()];
        parts.push(self.sender.clone().unwrap_or_else(|| "-".to_string()));
        if let Some(receivers) = &self.receivers {
            parts.push(receivers.clone());
        }
        if let Some(octree) = &self.octree {
            parts.push(format!("-i \"\"\"{octree}\"\"\""));
        }
        if let Some(system) = &self.system {
            parts.push(system.clone());
        }
        let mut line = parts.join(" ");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receivers_are_required() {
        let rfluxmtx = Rfluxmtx::default();
        assert!(matches!(
            rfluxmtx.validate(false),
            Err(RadianceError::MissingArgument { .. })
        ));
    }

    #[test]
    fn sensors_feed_through_redirection() {
        let mut rfluxmtx = Rfluxmtx::new("receivers.rad");
        rfluxmtx.set_sensors("grid.pts");
        assert_eq!(
            rfluxmtx.to_radiance().unwrap(),
            "rfluxmtx - receivers.rad < grid.pts"
        );
    }

    #[test]
    fn sender_replaces_the_placeholder() {
        let mut rfluxmtx = Rfluxmtx::new("receivers.rad");
        rfluxmtx.set_sender("window.rad");
        rfluxmtx.options.ab.set(5).unwrap();
        assert_eq!(
            rfluxmtx.to_radiance().unwrap(),
            "rfluxmtx -ab 5 window.rad receivers.rad"
        );
    }

    #[test]
    fn octree_is_triple_quoted() {
        let mut rfluxmtx = Rfluxmtx::new("receivers.rad");
        rfluxmtx.set_sender("window.rad");
        rfluxmtx.set_octree("scene.oct");
        rfluxmtx.set_system("room.rad");
        assert_eq!(
            rfluxmtx.to_radiance().unwrap(),
            "rfluxmtx window.rad receivers.rad -i \"\"\"scene.oct\"\"\" room.rad"
        );
    }

    #[test]
    fn sensors_requirement_is_relaxed_when_piped() {
        let rfluxmtx = Rfluxmtx::new("receivers.rad");
        assert_eq!(
            rfluxmtx.to_radiance_stdin(true).unwrap(),
            "rfluxmtx - receivers.rad"
        );
    }

    #[test]
    fn missing_sensors_and_sender_fails() {
        let rfluxmtx = Rfluxmtx::new("receivers.rad");
        let err = rfluxmtx.validate(false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rfluxmtx: missing required argument 'sensors'"
        );
    }
}
