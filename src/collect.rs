//! Interactive collection of labeled data series.
//!
//! Two count policies apply, deliberately different: too few entries is
//! rejected and asked again, too many is clamped with a notice.

use std::io::{BufRead, Write};

use crate::models::DataSeries;
use crate::prompt::{Bounds, Console, PromptError};

/// How many entries to ask for and how to word the questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountPolicy {
    pub count_prompt: String,
    /// Entry noun used in the clamp notice ("Maximum 6 bars allowed.").
    pub noun: String,
    /// Per-entry prompt stems; the 1-based index and ": " are appended.
    pub label_prompt: String,
    pub value_prompt: String,
    /// Counts above this are clamped.
    pub max: Option<usize>,
    /// Re-ask while the count is zero or negative.
    pub min_one: bool,
}

/// Hard cap for bar graphs.
pub const MAX_BARS: usize = 6;

impl CountPolicy {
    pub fn data_points() -> Self {
        Self {
            count_prompt: "How many data points? ".into(),
            noun: "data point".into(),
            label_prompt: "Enter label".into(),
            value_prompt: "Enter value".into(),
            max: None,
            min_one: true,
        }
    }

    pub fn bars() -> Self {
        Self {
            count_prompt: format!("How many bars (max {MAX_BARS})? "),
            noun: "bar".into(),
            label_prompt: "Enter label for bar".into(),
            value_prompt: "Enter value for bar".into(),
            max: Some(MAX_BARS),
            min_one: true,
        }
    }
}

/// Ask for a count under `policy`.
pub fn read_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    policy: &CountPolicy,
) -> Result<usize, PromptError> {
    loop {
        let n: i64 = console.read_number(&policy.count_prompt, None, Bounds::none())?;
        if n <= 0 {
            if policy.min_one {
                console.say("Error! Please enter a positive number.")?;
                continue;
            }
            return Ok(0);
        }
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        return match policy.max {
            Some(max) if n > max => {
                console.say(format_args!(
                    "Maximum {max} {}s allowed. Setting to {max}.",
                    policy.noun
                ))?;
                Ok(max)
            }
            _ => Ok(n),
        };
    }
}

/// Ask for a count, then a label and a value per entry.
pub fn collect_series<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    policy: &CountPolicy,
) -> Result<DataSeries, PromptError> {
    let count = read_count(console, policy)?;
    // The count is user input; grow as answers arrive instead of reserving it.
    let mut series = DataSeries::new();
    for i in 1..=count {
        let label = console.read_text(&format!("{} {i}: ", policy.label_prompt))?;
        let value: f64 = console.read_number(
            &format!("{} {i}: ", policy.value_prompt),
            None,
            Bounds::none(),
        )?;
        series.push(label, value);
    }
    log::debug!("collected {} {} entries", series.len(), policy.noun);
    Ok(series)
}
