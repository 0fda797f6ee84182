//! Typed command-line option primitives and the per-tool collection trait.
//!
//! Every Radiance flag is one of a small set of option kinds: a presence
//! boolean (with the Radiance trailing-dash negation, `-ld` / `-ld-`), an
//! integer or float with optional bounds, a free or enumerated string, a
//! "joined" string rendered without a separating space (`-vtv`), a
//! fixed-arity numeric tuple (`-P 6.3 0.12`), or an accumulating string flag
//! (`-m a -m b`). A failed assignment never mutates the previously-held
//! value.

pub mod dctimestep;
pub mod gendaylit;
pub mod oconv;
pub mod pinterp;
pub mod rcontrib;
pub mod rfluxmtx;
pub mod rmtxop;
pub mod rtrace;

use crate::error::{RadianceError, RadianceResult};
use crate::paths::{fmt_float, squash};

/// Uniform surface the collection machinery needs from every option kind.
pub trait RadianceOption {
    /// Short flag name, without the leading dash.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn is_set(&self) -> bool;

    fn is_protected(&self) -> bool {
        false
    }

    /// Value tokens consumed after the flag in a raw flag string. Zero for
    /// booleans; the collection synthesizes a `true`/`false` token for them
    /// from the flag spelling.
    fn arity(&self) -> usize;

    /// Flag and value rendered as one token (`-vtv`).
    fn joined(&self) -> bool {
        false
    }

    /// Assign from raw flag-string tokens. `tokens.len()` equals [`arity`]
    /// (or one synthesized token for booleans). Fails on protected options.
    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()>;

    /// Rendered form, or the empty string when unset.
    fn to_radiance(&self) -> String;
}

fn check_protected(protected: bool, name: &str) -> RadianceResult<()> {
    if protected {
        Err(RadianceError::protected(name))
    } else {
        Ok(())
    }
}

fn parse_number(name: &str, token: &str) -> RadianceResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| RadianceError::type_error(name, "a number", token))
}

/// Presence flag: `-name` when true, `-name-` when false, empty when unset.
#[derive(Clone, Debug)]
pub struct BoolOption {
    name: &'static str,
    description: &'static str,
    value: Option<bool>,
    protected: bool,
}

impl BoolOption {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: None,
            protected: false,
        }
    }

    pub(crate) fn protect(mut self) -> Self {
        self.protected = true;
        self
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub fn set(&mut self, value: bool) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn unset(&mut self) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.value = None;
        Ok(())
    }
}

impl RadianceOption for BoolOption {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn is_protected(&self) -> bool {
        self.protected
    }

    fn arity(&self) -> usize {
        0
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        self.set(tokens.first().is_some_and(|t| *t == "true"))
    }

    fn to_radiance(&self) -> String {
        match self.value {
            Some(true) => format!("-{}", self.name),
            Some(false) => format!("-{}-", self.name),
            None => String::new(),
        }
    }
}

/// Whole-number flag with optional bounds. Fractional input is truncated
/// rather than rejected, matching the Radiance tools themselves.
#[derive(Clone, Debug)]
pub struct IntegerOption {
    name: &'static str,
    description: &'static str,
    value: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    protected: bool,
}

impl IntegerOption {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: None,
            min: None,
            max: None,
            protected: false,
        }
    }

    pub fn min_value(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max_value(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn protect(mut self) -> Self {
        self.protected = true;
        self
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn set(&mut self, value: impl Into<f64>) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.assign(value.into())
    }

    pub fn unset(&mut self) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.value = None;
        Ok(())
    }

    fn assign(&mut self, raw: f64) -> RadianceResult<()> {
        if !raw.is_finite() {
            return Err(RadianceError::type_error(
                self.name,
                "a whole number",
                raw.to_string(),
            ));
        }
        let value = raw.trunc() as i64;
        if let Some(min) = self.min {
            if value < min {
                return Err(RadianceError::range(
                    self.name,
                    value as f64,
                    format!("minimum is {min}"),
                ));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(RadianceError::range(
                    self.name,
                    value as f64,
                    format!("maximum is {max}"),
                ));
            }
        }
        self.value = Some(value);
        Ok(())
    }
}

impl RadianceOption for IntegerOption {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn is_protected(&self) -> bool {
        self.protected
    }

    fn arity(&self) -> usize {
        1
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        let raw = parse_number(self.name, tokens[0])?;
        self.assign(raw)
    }

    fn to_radiance(&self) -> String {
        match self.value {
            Some(v) => format!("-{} {v}", self.name),
            None => String::new(),
        }
    }
}

/// Floating-point flag with optional bounds; renders with at least one
/// decimal place (`-aa 0.0`).
#[derive(Clone, Debug)]
pub struct NumericOption {
    name: &'static str,
    description: &'static str,
    value: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    protected: bool,
}

impl NumericOption {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: None,
            min: None,
            max: None,
            protected: false,
        }
    }

    pub fn min_value(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max_value(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn set(&mut self, value: impl Into<f64>) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.assign(value.into())
    }

    pub fn unset(&mut self) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.value = None;
        Ok(())
    }

    fn assign(&mut self, value: f64) -> RadianceResult<()> {
        if !value.is_finite() {
            return Err(RadianceError::type_error(
                self.name,
                "a finite number",
                value.to_string(),
            ));
        }
        if let Some(min) = self.min {
            if value < min {
                return Err(RadianceError::range(
                    self.name,
                    value,
                    format!("minimum is {min}"),
                ));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(RadianceError::range(
                    self.name,
                    value,
                    format!("maximum is {max}"),
                ));
            }
        }
        self.value = Some(value);
        Ok(())
    }
}

impl RadianceOption for NumericOption {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn is_protected(&self) -> bool {
        self.protected
    }

    fn arity(&self) -> usize {
        1
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        let raw = parse_number(self.name, tokens[0])?;
        self.assign(raw)
    }

    fn to_radiance(&self) -> String {
        match self.value {
            Some(v) => format!("-{} {}", self.name, fmt_float(v)),
            None => String::new(),
        }
    }
}

/// String flag, optionally restricted to an enumerated set of valid values.
#[derive(Clone, Debug)]
pub struct StringOption {
    name: &'static str,
    description: &'static str,
    value: Option<String>,
    valid_values: &'static [&'static str],
    protected: bool,
}

impl StringOption {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            value: None,
            valid_values: &[],
            protected: false,
        }
    }

    pub fn valid_values(mut self, values: &'static [&'static str]) -> Self {
        self.valid_values = values;
        self
    }

    pub(crate) fn protect(mut self) -> Self {
        self.protected = true;
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set(&mut self, value: impl Into<String>) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.assign(value.into())
    }

    pub fn unset(&mut self) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.value = None;
        Ok(())
    }

    pub(crate) fn force_set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    fn assign(&mut self, value: String) -> RadianceResult<()> {
        if !self.valid_values.is_empty() && !self.valid_values.contains(&value.as_str()) {
            return Err(RadianceError::invalid_value(
                self.name,
                value,
                self.valid_values,
            ));
        }
        self.value = Some(value);
        Ok(())
    }
}

impl RadianceOption for StringOption {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn is_protected(&self) -> bool {
        self.protected
    }

    fn arity(&self) -> usize {
        1
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.assign(tokens[0].to_string())
    }

    fn to_radiance(&self) -> String {
        match &self.value {
            Some(v) => format!("-{} {v}", self.name),
            None => String::new(),
        }
    }
}

/// String flag rendered with no separating space: `-vtv`.
#[derive(Clone, Debug)]
pub struct StringOptionJoined {
    inner: StringOption,
}

impl StringOptionJoined {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            inner: StringOption::new(name, description),
        }
    }

    pub fn valid_values(mut self, values: &'static [&'static str]) -> Self {
        self.inner = self.inner.valid_values(values);
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.inner.value()
    }

    pub fn set(&mut self, value: impl Into<String>) -> RadianceResult<()> {
        self.inner.set(value)
    }

    pub fn unset(&mut self) -> RadianceResult<()> {
        self.inner.unset()
    }
}

impl RadianceOption for StringOptionJoined {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn is_set(&self) -> bool {
        self.inner.is_set()
    }

    fn is_protected(&self) -> bool {
        self.inner.is_protected()
    }

    fn arity(&self) -> usize {
        1
    }

    fn joined(&self) -> bool {
        true
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        self.inner.parse_tokens(tokens)
    }

    fn to_radiance(&self) -> String {
        match self.inner.value() {
            Some(v) => format!("-{}{v}", self.inner.name()),
            None => String::new(),
        }
    }
}

/// Fixed-arity numeric vector flag: `-P 6.3 0.12`.
#[derive(Clone, Debug)]
pub struct TupleOption {
    name: &'static str,
    description: &'static str,
    arity: usize,
    value: Option<Vec<f64>>,
    protected: bool,
}

impl TupleOption {
    pub fn new(name: &'static str, description: &'static str, arity: usize) -> Self {
        Self {
            name,
            description,
            arity,
            value: None,
            protected: false,
        }
    }

    pub fn value(&self) -> Option<&[f64]> {
        self.value.as_deref()
    }

    pub fn set(&mut self, values: &[f64]) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        if values.len() != self.arity {
            return Err(RadianceError::type_error(
                self.name,
                "a tuple of the declared arity",
                format!("{} value(s), expected {}", values.len(), self.arity),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(RadianceError::type_error(
                self.name,
                "finite numbers",
                bad.to_string(),
            ));
        }
        self.value = Some(values.to_vec());
        Ok(())
    }

    pub fn unset(&mut self) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.value = None;
        Ok(())
    }
}

impl RadianceOption for TupleOption {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn is_protected(&self) -> bool {
        self.protected
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        let values = tokens
            .iter()
            .map(|t| parse_number(self.name, t))
            .collect::<RadianceResult<Vec<f64>>>()?;
        self.set(&values)
    }

    fn to_radiance(&self) -> String {
        match &self.value {
            Some(values) => {
                let rendered: Vec<String> = values.iter().map(|v| fmt_float(*v)).collect();
                format!("-{} {}", self.name, rendered.join(" "))
            }
            None => String::new(),
        }
    }
}

/// Accumulating string flag, one `-name value` pair per entry. Used for
/// rcontrib modifiers.
#[derive(Clone, Debug)]
pub struct RepeatedStringOption {
    name: &'static str,
    description: &'static str,
    values: Vec<String>,
    protected: bool,
}

impl RepeatedStringOption {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            values: Vec::new(),
            protected: false,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn push(&mut self, value: impl Into<String>) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.values.push(value.into());
        Ok(())
    }

    pub fn clear(&mut self) -> RadianceResult<()> {
        check_protected(self.protected, self.name)?;
        self.values.clear();
        Ok(())
    }
}

impl RadianceOption for RepeatedStringOption {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_set(&self) -> bool {
        !self.values.is_empty()
    }

    fn is_protected(&self) -> bool {
        self.protected
    }

    fn arity(&self) -> usize {
        1
    }

    fn parse_tokens(&mut self, tokens: &[&str]) -> RadianceResult<()> {
        self.push(tokens[0])
    }

    fn to_radiance(&self) -> String {
        self.values
            .iter()
            .map(|v| format!("-{} {v}", self.name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What `update_from_string` does with flags the schema does not declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownFlagPolicy {
    /// Fail with an error naming the flag.
    Reject,
    /// Keep the flag and its values as verbatim pass-through text appended
    /// after the declared options.
    Accumulate,
}

fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && token[1..].parse::<f64>().is_err()
}

/// One command's full flag surface.
///
/// Render order is deterministic and independent of assignment order: value
/// options in declaration order, then booleans in declaration order, then any
/// accumulated pass-through text.
pub trait OptionCollection {
    /// Declared options, in declaration order.
    fn options(&self) -> Vec<&dyn RadianceOption>;

    fn options_mut(&mut self) -> Vec<&mut dyn RadianceOption>;

    fn unknown_flag_policy(&self) -> UnknownFlagPolicy {
        UnknownFlagPolicy::Accumulate
    }

    /// Verbatim pass-through text accumulated from unrecognized flags.
    fn additional_args(&self) -> &str {
        ""
    }

    fn push_additional(&mut self, _raw: &str) {}

    /// Conflicts that involve more than one option (e.g. gendaylit `-W`
    /// against `-L`). Commands call this while validating.
    fn validate(&self) -> RadianceResult<()> {
        Ok(())
    }

    fn to_radiance(&self) -> String {
        let options = self.options();
        let mut parts: Vec<String> = options
            .iter()
            .filter(|o| o.arity() > 0)
            .map(|o| o.to_radiance())
            .filter(|s| !s.is_empty())
            .collect();
        parts.extend(
            options
                .iter()
                .filter(|o| o.arity() == 0)
                .map(|o| o.to_radiance())
                .filter(|s| !s.is_empty()),
        );
        let extra = self.additional_args();
        if !extra.is_empty() {
            parts.push(extra.to_string());
        }
        squash(&parts.join(" "))
    }

    /// Merge a user-supplied flag string over the current values.
    ///
    /// Tokens are whitespace-separated; each `-flag` consumes that option's
    /// declared arity of value tokens; `-flag-` negates a boolean. Joined
    /// options match by prefix (`-vtv`). Unrecognized flags follow
    /// [`unknown_flag_policy`].
    fn update_from_string(&mut self, raw: &str) -> RadianceResult<()> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            let Some(body) = token.strip_prefix('-') else {
                return Err(RadianceError::type_error(
                    "flag string",
                    "a token starting with '-'",
                    token,
                ));
            };

            // `-ld-` negates the boolean `ld`.
            let (name, negated) = match body.strip_suffix('-') {
                Some(stem)
                    if self
                        .options()
                        .iter()
                        .any(|o| o.name() == stem && o.arity() == 0) =>
                {
                    (stem, true)
                }
                _ => (body, false),
            };

            let declared = self
                .options()
                .iter()
                .find(|o| o.name() == name)
                .map(|o| (o.arity(), false, String::new()));
            // Joined options match by prefix: `-vtv` assigns `v` to `vt`.
            let declared = declared.or_else(|| {
                self.options().iter().find_map(|o| {
                    body.strip_prefix(o.name())
                        .filter(|rest| o.joined() && !rest.is_empty())
                        .map(|rest| (o.arity(), true, rest.to_string()))
                })
            });

            match declared {
                Some((arity, joined, joined_value)) => {
                    let lookup: String;
                    let value_tokens: Vec<&str> = if joined {
                        lookup = body[..body.len() - joined_value.len()].to_string();
                        i += 1;
                        vec![joined_value.as_str()]
                    } else if arity == 0 {
                        lookup = name.to_string();
                        i += 1;
                        vec![if negated { "false" } else { "true" }]
                    } else {
                        lookup = name.to_string();
                        if i + arity >= tokens.len() {
                            return Err(RadianceError::type_error(
                                name,
                                "value token(s) after the flag",
                                token,
                            ));
                        }
                        let slice = tokens[i + 1..=i + arity].to_vec();
                        i += 1 + arity;
                        slice
                    };
                    if let Some(option) = self
                        .options_mut()
                        .into_iter()
                        .find(|o| o.name() == lookup)
                    {
                        option.parse_tokens(&value_tokens)?;
                    }
                }
                None => match self.unknown_flag_policy() {
                    UnknownFlagPolicy::Reject => {
                        return Err(RadianceError::invalid_value(
                            "flag string",
                            token,
                            &["a declared flag"],
                        ));
                    }
                    UnknownFlagPolicy::Accumulate => {
                        let mut chunk = vec![token];
                        i += 1;
                        while i < tokens.len() && !looks_like_flag(tokens[i]) {
                            chunk.push(tokens[i]);
                            i += 1;
                        }
                        self.push_additional(&chunk.join(" "));
                    }
                },
            }
        }
        Ok(())
    }
}
