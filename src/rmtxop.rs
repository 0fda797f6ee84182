//! Matrix algebra: `rmtxop [options] [-t][-c …][-s …] m1 [op [-t]… m2 [op …
//! m3]]`.
//!
//! The Radiance binary accepts arbitrarily many matrices; this surface stops
//! at three, which covers the daylight-simulation matrix chains in practice.
//! An operand may also be an embedded command produced by
//! [`RadianceCommand::enclose`], e.g.
//! `rmtxop -c 47.4 119.9 11.6 '!rmtxop view.vmx t.xml d.dmx sky.smx'`.

use crate::command::{CommandChain, RadianceCommand};
use crate::error::{RadianceError, RadianceResult};
use crate::options::OptionCollection;
use crate::options::rmtxop::RmtxopOptions;
use crate::paths::{fmt_float, normpath};

/// Inter-operand operator. Concatenation (matrix multiplication) is the
/// tool's default when no operator is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
    Divide,
    Concat,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Concat => ".",
        }
    }

    pub fn from_str(raw: &str) -> RadianceResult<Self> {
        match raw {
            "+" => Ok(Self::Add),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "." => Ok(Self::Concat),
            other => Err(RadianceError::invalid_value(
                "rmtxop operator",
                other,
                &["+", "*", "/", "."],
            )),
        }
    }
}

/// Scale or transform coefficients: a single number or a sequence, always
/// carried as floats.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients(pub Vec<f64>);

impl From<f64> for Coefficients {
    fn from(value: f64) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<f64>> for Coefficients {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Coefficients {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Coefficients {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl std::str::FromStr for Coefficients {
    type Err = RadianceError;

    fn from_str(raw: &str) -> RadianceResult<Self> {
        raw.split([' ', ','])
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<f64>()
                    .map_err(|_| RadianceError::type_error("coefficients", "numbers", t))
            })
            .collect::<RadianceResult<Vec<f64>>>()
            .map(Self)
    }
}

/// One matrix slot with its per-operand modifiers. Transform (`-c`) and
/// scale (`-s`) coefficients are mutually exclusive per operand.
#[derive(Clone, Debug, Default)]
pub struct MatrixOperand {
    file: Option<String>,
    transpose: bool,
    transform: Option<Vec<f64>>,
    scale: Option<Vec<f64>>,
}

impl MatrixOperand {
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn set_file(&mut self, file: impl Into<String>) {
        self.file = Some(normpath(file.into()));
    }

    pub fn transpose(&self) -> bool {
        self.transpose
    }

    pub fn set_transpose(&mut self, transpose: bool) {
        self.transpose = transpose;
    }

    pub fn transform(&self) -> Option<&[f64]> {
        self.transform.as_deref()
    }

    /// Transformation coefficients (`-c`). Their count should be an even
    /// multiple of the matrix component count; the tool itself checks that.
    pub fn set_transform(&mut self, coefficients: impl Into<Coefficients>) {
        self.transform = Some(coefficients.into().0);
    }

    pub fn scale(&self) -> Option<&[f64]> {
        self.scale.as_deref()
    }

    /// Scale factors (`-s`), one per matrix component or a single factor for
    /// all of them.
    pub fn set_scale(&mut self, coefficients: impl Into<Coefficients>) {
        self.scale = Some(coefficients.into().0);
    }

    fn render_into(&self, parts: &mut Vec<String>) {
        if self.transpose {
            parts.push("-t".to_string());
        }
        if let Some(transform) = &self.transform {
            parts.push("-c".to_string());
            parts.extend(transform.iter().map(|v| fmt_float(*v)));
        }
        if let Some(scale) = &self.scale {
            parts.push("-s".to_string());
            parts.extend(scale.iter().map(|v| fmt_float(*v)));
        }
        if let Some(file) = &self.file {
            parts.push(file.clone());
        }
    }
}

#[derive(Default)]
pub struct Rmtxop {
    pub options: RmtxopOptions,
    /// Mode flags; exactly one must be set before rendering.
    pub is_one_mtx_calc: bool,
    pub is_two_mtx_calc: bool,
    pub is_three_mtx_calc: bool,
    operands: [MatrixOperand; 3],
    operators: [Option<Operator>; 2],
    chain: CommandChain,
}

impl Rmtxop {
    /// A single-matrix calculation (transpose, scale, or convert).
    pub fn for_one_matrix_calc(mtx1: Option<&str>) -> Self {
        let mut rmtxop = Self::default();
        rmtxop.is_one_mtx_calc = true;
        if let Some(file) = mtx1 {
            rmtxop.operands[0].set_file(file);
        }
        rmtxop
    }

    pub fn for_two_matrix_calc(
        mtx1: Option<&str>,
        mtx2: Option<&str>,
        operator: Option<Operator>,
    ) -> Self {
        let mut rmtxop = Self::default();
        rmtxop.is_two_mtx_calc = true;
        if let Some(file) = mtx1 {
            rmtxop.operands[0].set_file(file);
        }
        if let Some(file) = mtx2 {
            rmtxop.operands[1].set_file(file);
        }
        rmtxop.operators[0] = operator;
        rmtxop
    }

    pub fn for_three_matrix_calc(
        mtx1: Option<&str>,
        mtx2: Option<&str>,
        mtx3: Option<&str>,
        operator12: Option<Operator>,
        operator23: Option<Operator>,
    ) -> Self {
        let mut rmtxop = Self::default();
        rmtxop.is_three_mtx_calc = true;
        for (slot, file) in rmtxop.operands.iter_mut().zip([mtx1, mtx2, mtx3]) {
            if let Some(file) = file {
                slot.set_file(file);
            }
        }
        rmtxop.operators = [operator12, operator23];
        rmtxop
    }

    pub fn mtx1(&self) -> &MatrixOperand {
        &self.operands[0]
    }

    pub fn mtx1_mut(&mut self) -> &mut MatrixOperand {
        &mut self.operands[0]
    }

    pub fn mtx2(&self) -> &MatrixOperand {
        &self.operands[1]
    }

    pub fn mtx2_mut(&mut self) -> &mut MatrixOperand {
        &mut self.operands[1]
    }

    pub fn mtx3(&self) -> &MatrixOperand {
        &self.operands[2]
    }

    pub fn mtx3_mut(&mut self) -> &mut MatrixOperand {
        &mut self.operands[2]
    }

    pub fn set_operator12(&mut self, operator: Operator) {
        self.operators[0] = Some(operator);
    }

    pub fn set_operator23(&mut self, operator: Operator) {
        self.operators[1] = Some(operator);
    }

    /// Number of operands the active mode consumes.
    fn operand_count(&self) -> usize {
        if self.is_three_mtx_calc {
            3
        } else if self.is_two_mtx_calc {
            2
        } else {
            1
        }
    }
}

impl RadianceCommand for Rmtxop {
    fn name(&self) -> &'static str {
        "rmtxop"
    }

    fn validate(&self, _stdin_input: bool) -> RadianceResult<()> {
        self.warn_if_output_ignored();
        self.options.validate()?;

        // exactly one calculation mode
        let flags = [
            ("is_one_mtx_calc", self.is_one_mtx_calc),
            ("is_two_mtx_calc", self.is_two_mtx_calc),
            ("is_three_mtx_calc", self.is_three_mtx_calc),
        ];
        let active: Vec<&str> = flags
            .iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| *name)
            .collect();
        if active.len() != 1 {
            let listing = if active.is_empty() {
                "none".to_string()
            } else {
                active.join(", ")
            };
            return Err(RadianceError::conflicting(
                self.name(),
                format!("exactly one calc mode must be set; currently set: {listing}"),
            ));
        }

        // every operand the mode consumes needs a file
        let count = self.operand_count();
        let missing: Vec<String> = self.operands[..count]
            .iter()
            .enumerate()
            .filter(|(_, operand)| operand.file.is_none())
            .map(|(i, _)| format!("mtx{}", i + 1))
            .collect();
        if !missing.is_empty() {
            return Err(RadianceError::missing_argument(
                self.name(),
                missing.join(", "),
            ));
        }

        // transform and scale are mutually exclusive per operand
        for (i, operand) in self.operands[..count].iter().enumerate() {
            if operand.transform.is_some() && operand.scale.is_some() {
                return Err(RadianceError::conflicting(
                    self.name(),
                    format!(
                        "transform (-c) and scale (-s) coefficients are both set for mtx{}",
                        i + 1
                    ),
                ));
            }
        }
        Ok(())
    }

    fn body(&self, _stdin_input: bool) -> String {
        let mut parts = vec![self.name().to_string(), self.options.to_radiance()];
        let count = self.operand_count();
        for (i, operand) in self.operands[..count].iter().enumerate() {
            if i > 0 {
                if let Some(operator) = self.operators[i - 1] {
                    parts.push(operator.as_str().to_string());
                }
            }
            operand.render_into(&mut parts);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_matrix_transpose() {
        let mut rmtxop = Rmtxop::for_one_matrix_calc(Some("day.mtx"));
        rmtxop.mtx1_mut().set_transpose(true);
        assert_eq!(rmtxop.to_radiance().unwrap(), "rmtxop -t day.mtx");
    }

    #[test]
    fn transform_coefficients_precede_the_file() {
        let mut rmtxop = Rmtxop::for_one_matrix_calc(Some("illum.mtx"));
        rmtxop.mtx1_mut().set_transform([47.4, 119.9, 11.6]);
        assert_eq!(
            rmtxop.to_radiance().unwrap(),
            "rmtxop -c 47.4 119.9 11.6 illum.mtx"
        );
    }

    #[test]
    fn single_scale_factor_from_a_number() {
        let mut rmtxop = Rmtxop::for_one_matrix_calc(Some("a.mtx"));
        rmtxop.mtx1_mut().set_scale(-1.0);
        assert_eq!(rmtxop.to_radiance().unwrap(), "rmtxop -s -1.0 a.mtx");
    }

    #[test]
    fn two_matrix_addition() {
        let rmtxop =
            Rmtxop::for_two_matrix_calc(Some("a.mtx"), Some("b.mtx"), Some(Operator::Add));
        assert_eq!(rmtxop.to_radiance().unwrap(), "rmtxop a.mtx + b.mtx");
    }

    #[test]
    fn three_matrix_concatenation_without_operators() {
        let rmtxop = Rmtxop::for_three_matrix_calc(
            Some("view.vmx"),
            Some("t.xml"),
            Some("d.dmx"),
            None,
            None,
        );
        assert_eq!(
            rmtxop.to_radiance().unwrap(),
            "rmtxop view.vmx t.xml d.dmx"
        );
    }

    #[test]
    fn missing_operand_is_named() {
        let rmtxop =
            Rmtxop::for_three_matrix_calc(Some("view.vmx"), Some("t.xml"), None, None, None);
        let err = rmtxop.validate(false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rmtxop: missing required argument 'mtx3'"
        );
    }

    #[test]
    fn zero_modes_is_a_conflict() {
        let rmtxop = Rmtxop::default();
        let err = rmtxop.validate(false).unwrap_err();
        assert!(err.to_string().contains("currently set: none"));
    }

    #[test]
    fn two_modes_are_listed() {
        let mut rmtxop = Rmtxop::for_one_matrix_calc(Some("a.mtx"));
        rmtxop.is_two_mtx_calc = true;
        let err = rmtxop.validate(false).unwrap_err();
        assert!(
            err.to_string()
                .contains("is_one_mtx_calc, is_two_mtx_calc")
        );
    }

    #[test]
    fn transform_and_scale_conflict_per_operand() {
        let mut rmtxop = Rmtxop::for_one_matrix_calc(Some("a.mtx"));
        rmtxop.mtx1_mut().set_transform(0.265);
        rmtxop.mtx1_mut().set_scale(179.0);
        assert!(matches!(
            rmtxop.validate(false),
            Err(RadianceError::ConflictingArguments { .. })
        ));
    }

    #[test]
    fn coefficients_parse_from_text() {
        let coefficients: Coefficients = "47.4 119.9 11.6".parse().unwrap();
        assert_eq!(coefficients.0, vec![47.4, 119.9, 11.6]);
        assert!(matches!(
            "47.4 x".parse::<Coefficients>(),
            Err(RadianceError::Type { .. })
        ));
    }

    #[test]
    fn operator_spellings() {
        assert_eq!(Operator::from_str("+").unwrap(), Operator::Add);
        assert_eq!(Operator::Concat.as_str(), ".");
        assert!(Operator::from_str("-").is_err());
    }
}
