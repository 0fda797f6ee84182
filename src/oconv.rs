//! Scene compiler: `oconv [options] scene.rad …`.
//!
//! Each input is a scene description file, or an embedded command produced
//! by [`RadianceCommand::enclose`]. Zero inputs is legal (the octree will be
//! empty) but triggers a warning.

use crate::command::{CommandChain, RadianceCommand};
use crate::error::RadianceResult;
use crate::options::OptionCollection;
use crate::options::oconv::OconvOptions;
use crate::paths::normpath;

#[derive(Default)]
pub struct Oconv {
    pub options: OconvOptions,
    inputs: Vec<String>,
    chain: CommandChain,
}

impl Oconv {
    pub fn new(inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut oconv = Self::default();
        oconv.set_inputs(inputs);
        oconv
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn set_inputs(&mut self, inputs: impl IntoIterator<Item = impl Into<String>>) {
        self.inputs = inputs.into_iter().map(|p| normpath(p.into())).collect();
    }

    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push(normpath(input.into()));
    }
}

impl RadianceCommand for Oconv {
    fn name(&self) -> &'static str {
        "oconv"
    }

    fn validate(&self, stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;
        if self.inputs.is_empty() && !stdin_input {
            tracing::warn!("oconv: no inputs; the scene will be empty");
        }
        Ok(())
    }

    fn body(&self, stdin_input: bool) -> String {
        let inputs = if stdin_input {
            "-".to_string()
        } else {
            self.inputs.join(" ")
        };
        format!("{} {} {}", self.name(), self.options.to_radiance(), inputs)
    }

    fn chain(&self) -> &CommandChain {
        &self.chain
    }

    fn chain_mut(&mut self) -> &mut CommandChain {
        &mut self.chain
    }
}
