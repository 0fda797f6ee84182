//! The render/pipe/run protocol shared by every Radiance command.
//!
//! A command couples an option collection, tool-specific positional
//! arguments, an optional output redirection target, and an optional
//! downstream piped command. Validation is lazy: it runs on pipe assignment
//! and on render/run entry, not on every field mutation, because cross-field
//! legality can only be judged once the full field set is known.
//!
//! ```
//! use radcmd::{Oconv, Rtrace, RadianceCommand};
//!
//! let mut oconv = Oconv::default();
//! oconv.set_inputs(["room.rad", "sky.rad"]);
//!
//! let mut rtrace = Rtrace::default();
//! rtrace.options.ab.set(3).unwrap();
//! rtrace.set_octree("scene.oct");
//! rtrace.chain_mut().set_output("results.res");
//!
//! oconv.pipe_into(Box::new(rtrace)).unwrap();
//! assert_eq!(
//!     oconv.to_radiance().unwrap(),
//!     "oconv room.rad sky.rad | rtrace -ab 3 scene.oct > results.res"
//! );
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::error::RadianceResult;
use crate::paths::{normpath, squash};
use crate::run::run_command;

/// Output redirection target plus the forward pipe link: each command pipes
/// to at most one successor, forming a singly-linked chain.
#[derive(Default)]
pub struct CommandChain {
    output: Option<String>,
    pipe_to: Option<Box<dyn RadianceCommand>>,
}

impl CommandChain {
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn set_output(&mut self, output: impl Into<String>) {
        self.output = Some(normpath(output.into()));
    }

    pub fn clear_output(&mut self) {
        self.output = None;
    }

    pub fn pipe_to(&self) -> Option<&dyn RadianceCommand> {
        self.pipe_to.as_deref()
    }
}

pub trait RadianceCommand {
    /// Tool name as it appears on the command line.
    fn name(&self) -> &'static str;

    /// Cross-field legality checks. `stdin_input` is true when this
    /// command's primary input arrives from an upstream pipe, which relaxes
    /// the corresponding file-argument requirement.
    fn validate(&self, stdin_input: bool) -> RadianceResult<()>;

    /// `name [options] [positional/file args]`, without the output
    /// redirection or the pipe tail. Assumes [`validate`] has passed.
    fn body(&self, stdin_input: bool) -> String;

    fn chain(&self) -> &CommandChain;

    fn chain_mut(&mut self) -> &mut CommandChain;

    fn output(&self) -> Option<&str> {
        self.chain().output()
    }

    /// Attach a downstream command, validating it as a pipe consumer before
    /// accepting it. Once a successor is attached, this command's own output
    /// path is ignored at render time (with a warning, not an error).
    fn pipe_into(&mut self, successor: Box<dyn RadianceCommand>) -> RadianceResult<()> {
        successor.validate(true)?;
        self.chain_mut().pipe_to = Some(successor);
        Ok(())
    }

    /// Advisory base check shared by every validator.
    fn warn_if_output_ignored(&self) {
        if self.chain().output.is_some() && self.chain().pipe_to.is_some() {
            tracing::warn!(
                command = self.name(),
                "both 'output' and 'pipe_to' are set; the output path will be ignored"
            );
        }
    }

    /// The full shell-executable line: `body [| successor…] [> output]`,
    /// whitespace-normalized, with forward-slash path separators.
    fn to_radiance(&self) -> RadianceResult<String> {
        self.to_radiance_stdin(false)
    }

    /// [`to_radiance`] with an explicit stdin marker, used when this command
    /// is the successor in a pipe.
    fn to_radiance_stdin(&self, stdin_input: bool) -> RadianceResult<String> {
        self.validate(stdin_input)?;
        let mut line = self.body(stdin_input);
        if let Some(successor) = self.chain().pipe_to.as_deref() {
            line = format!("{line} | {}", successor.to_radiance_stdin(true)?);
        } else if let Some(output) = self.chain().output() {
            line = format!("{line} > {output}");
        }
        Ok(squash(&line.replace('\\', "/")))
    }

    /// Render for embedding as another command's sub-invocation: the line is
    /// prefixed with `!` and enclosed in platform quoting (single quotes on
    /// POSIX, double quotes elsewhere).
    fn enclose(&self, stdin_input: bool) -> RadianceResult<String> {
        let line = self.to_radiance_stdin(stdin_input)?;
        if cfg!(windows) {
            Ok(format!("\"!{line}\""))
        } else {
            Ok(format!("'!{line}'"))
        }
    }

    /// Render and execute under the platform shell, returning the raw exit
    /// code. Exit codes are informational; interpreting non-zero codes is
    /// left to the caller.
    fn run(
        &self,
        env: Option<&HashMap<String, String>>,
        cwd: Option<&Path>,
    ) -> RadianceResult<i32> {
        let line = self.to_radiance()?;
        tracing::debug!(command = self.name(), line = %line, "running");
        let code = run_command(&line, env, cwd)?;
        self.after_run();
        Ok(code)
    }

    /// Hook invoked after a successful [`run`]. No-op by default.
    fn after_run(&self) {}
}
