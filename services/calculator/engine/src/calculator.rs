use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use telemetry::Measure;

use crate::config::EngineConfig;
use crate::error::CalcError;
use crate::format::{format_answer, format_input, round_significant, NOT_A_NUMBER};
use crate::parse_and_evaluate;

lazy_static! {
    static ref SUBMIT_MEASURE: Measure = Measure::new("engine", "submit");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input: String,
    pub answer: String,
}

/// Read-only view of the calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub answer: String,
    pub history: Vec<HistoryEntry>,
    pub error: String,
}

struct State {
    previous: f64,
    answer: String,
    history: Vec<HistoryEntry>,
    error: String,
}

/// Owns the previous answer and the history of every submission.
///
/// Each submission runs to completion under one lock, so concurrent callers
/// observe submissions in arrival order.
pub struct Calculator {
    config: EngineConfig,
    state: Mutex<State>,
}

impl Calculator {
    pub fn new(config: EngineConfig) -> Calculator {
        Calculator {
            config,
            state: Mutex::new(State {
                previous: 0.,
                answer: "0".to_string(),
                history: Vec::new(),
                error: String::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Fields are only assigned after evaluation completes
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evaluates `input_line` and records the outcome in the history
    pub fn submit(&self, input_line: &str) -> HistoryEntry {
        let digits = self.config.significant_digits;
        let mut state = self.lock();

        let previous = state.previous;
        let result = SUBMIT_MEASURE.stats(|| parse_and_evaluate(input_line, previous));

        let answer = match result {
            Ok(value) => {
                if value.is_finite() {
                    state.previous = round_significant(value, digits);
                }
                state.error.clear();
                format_answer(value, digits)
            }
            Err(e) => {
                match &e {
                    CalcError::Internal(_) => error!("Evaluating \"{}\": {}", input_line, e),
                    _ => warn!("Rejected \"{}\": {}", input_line, e),
                }
                state.error = e.user_message();
                NOT_A_NUMBER.to_string()
            }
        };

        let entry = HistoryEntry {
            input: format_input(input_line),
            answer: answer.clone(),
        };
        info!("{} = {}", entry.input, entry.answer);

        state.answer = answer;
        state.history.push(entry.clone());
        entry
    }

    pub fn current_state(&self) -> Snapshot {
        let state = self.lock();
        Snapshot {
            answer: state.answer.clone(),
            history: state.history.clone(),
            error: state.error.clone(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(EngineConfig::default())
    }
}
