//! Calculator engine interface and the built-in RPN engine.
//!
//! The face only ever submits whole tokens and reads the stack back for
//! display; everything about what a token means lives behind
//! [`Calculator`].

use core::str::FromStr;

use heapless::Vec;

use crate::config::STACK_CAPACITY;
use crate::error::{status, CalcError};

/// Stack-based calculator engine.
pub trait Calculator {
    /// Feed one token (number or command word).
    fn submit(&mut self, token: &str) -> Result<(), CalcError>;

    /// Number of values on the stack.
    fn depth(&self) -> usize;

    /// Value `offset` places below the top (0 = top).
    ///
    /// Callers check `offset < depth()` first.
    fn item(&self, offset: usize) -> f64;
}

/// Fixed-capacity reverse-Polish calculator.
///
/// Tokens:
/// - numbers: anything `f64::from_str` accepts (`3`, `-2.5`, `1e5`)
/// - binary: `+ - x / pow`
/// - unary: `neg inv sqrt abs exp ln log sin cos tan`
/// - constants: `pi e`
/// - stack: `dup pop swap clr`
///
/// A failed token leaves the stack exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct RpnCalculator {
    stack: Vec<f64, STACK_CAPACITY>,
}

#[derive(Clone, Copy)]
enum Op {
    Push(f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Divide,
    Dup,
    Pop,
    Swap,
    Clear,
}

impl RpnCalculator {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Stack contents, bottom first.
    pub fn values(&self) -> &[f64] {
        &self.stack
    }

    fn parse(token: &str) -> Option<Op> {
        let op = match token {
            "+" => Op::Binary(|a, b| a + b),
            "-" => Op::Binary(|a, b| a - b),
            "x" => Op::Binary(|a, b| a * b),
            "/" => Op::Divide,
            "pow" => Op::Binary(libm::pow),
            "neg" => Op::Unary(|a| -a),
            "inv" => Op::Unary(|a| 1.0 / a),
            "sqrt" => Op::Unary(libm::sqrt),
            "abs" => Op::Unary(libm::fabs),
            "exp" => Op::Unary(libm::exp),
            "ln" => Op::Unary(libm::log),
            "log" => Op::Unary(libm::log10),
            "sin" => Op::Unary(libm::sin),
            "cos" => Op::Unary(libm::cos),
            "tan" => Op::Unary(libm::tan),
            "pi" => Op::Push(core::f64::consts::PI),
            "e" => Op::Push(core::f64::consts::E),
            "dup" => Op::Dup,
            "pop" => Op::Pop,
            "swap" => Op::Swap,
            "clr" => Op::Clear,
            other => Op::Push(f64::from_str(other).ok()?),
        };
        Some(op)
    }

    fn push(&mut self, value: f64) -> Result<(), CalcError> {
        self.stack.push(value).map_err(|_| CalcError::StackSize)
    }

    /// Pop the top `N` values, oldest first.
    fn take<const N: usize>(&mut self) -> Result<[f64; N], CalcError> {
        if self.stack.len() < N {
            return Err(CalcError::StackSize);
        }
        let base = self.stack.len() - N;
        let mut out = [0.0; N];
        out.copy_from_slice(&self.stack[base..]);
        self.stack.truncate(base);
        Ok(out)
    }

    fn apply(&mut self, op: Op) -> Result<(), CalcError> {
        match op {
            Op::Push(v) => self.push(v),
            Op::Unary(f) => {
                let [a] = self.take::<1>()?;
                self.push(f(a))
            }
            Op::Binary(f) => {
                let [a, b] = self.take::<2>()?;
                self.push(f(a, b))
            }
            Op::Divide => {
                let [a, b] = self.take::<2>()?;
                if b == 0.0 {
                    return Err(CalcError::Other(status::DIVIDE_BY_ZERO));
                }
                self.push(a / b)
            }
            Op::Dup => {
                let top = *self.stack.last().ok_or(CalcError::StackSize)?;
                self.push(top)
            }
            Op::Pop => self.take::<1>().map(|_| ()),
            Op::Swap => {
                let [a, b] = self.take::<2>()?;
                self.push(b)?;
                self.push(a)
            }
            Op::Clear => {
                self.stack.clear();
                Ok(())
            }
        }
    }
}

impl Calculator for RpnCalculator {
    fn submit(&mut self, token: &str) -> Result<(), CalcError> {
        if token.is_empty() {
            return Ok(());
        }
        let op = Self::parse(token).ok_or(CalcError::UnknownCommand)?;

        let saved = self.stack.clone();
        let result = self.apply(op);
        if result.is_err() {
            self.stack = saved;
        }
        result
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }

    fn item(&self, offset: usize) -> f64 {
        self.stack
            .len()
            .checked_sub(offset + 1)
            .and_then(|i| self.stack.get(i))
            .copied()
            .unwrap_or(f64::NAN)
    }
}
