use crate::error::{Error, Result};
use crate::parser::{ArithOp, Natural, Program, Statement, VarId};
use crate::runtime::VariableStore;

/// Limits applied while evaluating
#[derive(Clone, Debug, Default)]
pub struct EvaluatorConfig {
    /// Maximum number of statements to execute; `None` is unlimited
    pub step_limit: Option<u64>,
}

/// Tree-walking evaluator for LOOP programs
///
/// Assignments clamp at zero and fail on overflow. A loop reads its counter
/// once on entry; changes the body makes to the counter do not affect the
/// number of iterations.
pub struct Evaluator {
    store: VariableStore,
    config: EvaluatorConfig,
    steps: u64,
}

impl Evaluator {
    /// Creates an evaluator over a store holding only `x0 = 0`
    pub fn new() -> Self {
        Evaluator::with_store(VariableStore::with_output())
    }

    /// Creates an evaluator over an existing store
    pub fn with_store(store: VariableStore) -> Self {
        Evaluator::with_config(store, EvaluatorConfig::default())
    }

    /// Creates an evaluator with custom limits
    pub fn with_config(store: VariableStore, config: EvaluatorConfig) -> Self {
        Evaluator {
            store,
            config,
            steps: 0,
        }
    }

    /// Executes `program` against the store
    pub fn execute(&mut self, program: &Program) -> Result<()> {
        if self.store.is_empty() {
            return Err(Error::EmptyStore);
        }
        self.execute_program(program)
    }

    /// Statements executed so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current variable values
    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Consumes the evaluator, returning its store
    pub fn into_store(self) -> VariableStore {
        self.store
    }

    fn execute_program(&mut self, program: &Program) -> Result<()> {
        for statement in program {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<()> {
        self.count_step()?;

        match statement {
            Statement::Assignment {
                target,
                source,
                op,
                operand,
            } => self.assign(*target, *source, *op, *operand),

            Statement::Loop { counter, body } => {
                let bound = self.store.get_value(*counter)?;
                tracing::debug!(counter, bound, "entering LOOP");
                for _ in 0..bound {
                    self.execute_program(body)?;
                }
                Ok(())
            }
        }
    }

    fn assign(
        &mut self,
        target: VarId,
        source: VarId,
        op: ArithOp,
        operand: Natural,
    ) -> Result<()> {
        let value = self.store.get_value(source)?;
        let result = match op {
            ArithOp::Add => value
                .checked_add(operand)
                .ok_or(Error::ArithmeticOverflow {
                    target,
                    value,
                    operand,
                })?,
            ArithOp::Sub => value.saturating_sub(operand),
        };

        tracing::trace!("x{} := x{} {} {} // {}", target, source, op, operand, result);
        self.store.set_value(target, result)
    }

    fn count_step(&mut self) -> Result<()> {
        self.steps += 1;
        match self.config.step_limit {
            Some(limit) if self.steps > limit => Err(Error::ExecutionLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn run(source: &str, inputs: &[Natural]) -> Result<VariableStore> {
        let program = parse_str(source)?;
        let mut evaluator = Evaluator::with_store(VariableStore::from_inputs(inputs));
        evaluator.execute(&program)?;
        Ok(evaluator.into_store())
    }

    #[test]
    fn test_addition_and_copy() {
        let store = run("x1 := x1 + 3; x0 := x1 + 0", &[]).unwrap();
        assert_eq!(store.output(), 3);
        assert_eq!(store.peek(1), Some(3));
    }

    #[test]
    fn test_subtraction_clamps_at_zero() {
        let store = run("x0 := x1 - 10; x2 := x1 - 2", &[5]).unwrap();
        assert_eq!(store.output(), 0);
        assert_eq!(store.peek(2), Some(3));
    }

    #[test]
    fn test_loop_bound_fixed_at_entry() {
        let store = run("LOOP x1 DO x1 := x1 + 1; x0 := x0 + 1 END", &[3]).unwrap();
        assert_eq!(store.output(), 3);
        assert_eq!(store.peek(1), Some(6));

        let store = run("LOOP x1 DO x1 := x1 - 1; x0 := x0 + 1 END", &[4]).unwrap();
        assert_eq!(store.output(), 4);
    }

    #[test]
    fn test_zero_iterations() {
        let store = run("LOOP x1 DO x0 := x0 + 1 END", &[]).unwrap();
        assert_eq!(store.output(), 0);
    }

    #[test]
    fn test_multiplication() {
        let source = "LOOP x1 DO LOOP x2 DO x0 := x0 + 1 END END";
        assert_eq!(run(source, &[6, 7]).unwrap().output(), 42);
    }

    #[test]
    fn test_addition_overflow_faults() {
        let err = run("x0 := x1 + 1", &[u64::MAX]).unwrap_err();
        assert_eq!(
            err,
            Error::ArithmeticOverflow {
                target: 0,
                value: u64::MAX,
                operand: 1,
            }
        );
    }

    #[test]
    fn test_empty_store_fails() {
        let program = parse_str("x0 := x0 + 1").unwrap();
        let mut evaluator = Evaluator::with_store(VariableStore::new());
        assert_eq!(evaluator.execute(&program), Err(Error::EmptyStore));
    }

    #[test]
    fn test_step_limit() {
        let program = parse_str("LOOP x1 DO x0 := x0 + 1 END").unwrap();
        let config = EvaluatorConfig {
            step_limit: Some(10),
        };

        let store = VariableStore::from_inputs(&[100]);
        let mut evaluator = Evaluator::with_config(store, config.clone());
        assert_eq!(
            evaluator.execute(&program),
            Err(Error::ExecutionLimitExceeded { limit: 10 })
        );

        let mut evaluator = Evaluator::with_config(VariableStore::from_inputs(&[9]), config);
        evaluator.execute(&program).unwrap();
        assert_eq!(evaluator.steps(), 10);
        assert_eq!(evaluator.store().output(), 9);
    }
}
