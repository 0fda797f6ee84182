//! Image interpolation: `pinterp -vf view [options] picture zspec …`.
//!
//! Every input picture needs its own z specification (a z-buffer file or a
//! constant distance). The two lists must be pre-aligned by the caller;
//! mismatched lengths fail validation rather than silently dropping the
//! unmatched picture.

use crate::command::{CommandChain, RadianceCommand};
use crate::error::{RadianceError, RadianceResult};
use crate::options::OptionCollection;
use crate::options::pinterp::PinterpOptions;
use crate::paths::normpath;

#[derive(Default)]
pub struct Pinterp {
    pub options: PinterpOptions,
    view: Option<String>,
    images: Vec<String>,
    zspecs: Vec<String>,
    chain: CommandChain,
}

impl Pinterp {
    pub fn new(view: impl Into<String>) -> Self {
        let mut pinterp = Self::default();
        pinterp.set_view(view);
        pinterp
    }

    pub fn view(&self) -> Option<&str> {
        self.view.as_deref()
    }

    pub fn set_view(&mut self, view: impl Into<String>) {
        self.view = Some(normpath(view.into()));
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn zspecs(&self) -> &[String] {
        &self.zspecs
    }

    /// Add one picture together with its z specification.
    pub fn push_image(&mut self, image: impl Into<String>, zspec: impl Into<String>) {
        self.images.push(normpath(image.into()));
        self.zspecs.push(normpath(zspec.into()));
    }

    pub fn set_images(&mut self, images: impl IntoIterator<Item = impl Into<String>>) {
        self.images = images.into_iter().map(|p| normpath(p.into())).collect();
    }

    pub fn set_zspecs(&mut self, zspecs: impl IntoIterator<Item = impl Into<String>>) {
        self.zspecs = zspecs.into_iter().map(|z| normpath(z.into())).collect();
    }
}

impl RadianceCommand for Pinterp {
    fn name(&self) -> &'static str {
        "pinterp"
    }

    fn validate(&self, stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;
        if !stdin_input && self.view.is_none() {
            return Err(RadianceError::missing_argument(self.name(), "view"));
        }
        if self.images.is_empty() {
            return Err(RadianceError::missing_argument(self.name(), "image"));
        }
        if self.zspecs.is_empty() {
            return Err(RadianceError::missing_argument(self.name(), "zspec"));
        }
        if self.images.len() != self.zspecs.len() {
            return Err(RadianceError::conflicting(
                self.name(),
                format!(
                    "{} image(s) but {} z specification(s); each image needs exactly one",
                    self.images.len(),
                    self.zspecs.len()
                ),
            ));
        }
        Ok(())
    }

    fn body(&self, stdin_input: bool) -> String {
        // the view option is derived, never caller-set
        let mut options = self.options.clone();
        if stdin_input {
            options.set_view("-");
        } else if let Some(view) = &self.view {
            options.set_view(view);
        }

        let mut parts = vec![self.name().to_string(), options.to_radiance()];
        for (image, zspec) in self.images.iter().zip(&self.zspecs) {
            parts.push(image.clone());
            parts.push(zspec.clone());
        }
        parts.join(" ")
    }

    fn chain(&self) -> &CommandChain {
        &self.chain
    }

    fn chain_mut(&mut self) -> &mut CommandChain {
        &mut self.chain
    }
}
