//! Display projection of the calculator state.

/// Longest primary value shown untruncated.
const PRIMARY_MAX_CHARS: usize = 15;
/// Characters kept when the primary value is truncated.
const PRIMARY_KEEP_CHARS: usize = 12;
/// Longest history line shown untruncated.
const HISTORY_MAX_CHARS: usize = 20;
/// Characters kept when the history line is truncated.
const HISTORY_KEEP_CHARS: usize = 17;

const ELLIPSIS: &str = "...";

/// What a renderer should show for the current calculator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    /// The value being entered or the last result.
    pub primary: String,
    /// `"{previous} {operator}"` while an operation is pending, else empty.
    pub history: String,
    /// Whether `primary` is the error marker and should be styled as such.
    pub is_error: bool,
}

impl Display {
    pub(crate) fn project(current: &str, pending: Option<(&str, char)>, is_error: bool) -> Self {
        let history = match pending {
            Some((previous, op)) => truncate(
                &format!("{previous} {op}"),
                HISTORY_MAX_CHARS,
                HISTORY_KEEP_CHARS,
            ),
            None => String::new(),
        };

        Self {
            primary: truncate(current, PRIMARY_MAX_CHARS, PRIMARY_KEEP_CHARS),
            history,
            is_error,
        }
    }
}

/// Shorten `text` to `keep` characters plus an ellipsis if it exceeds `max`.
fn truncate(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() > max {
        let mut shortened: String = text.chars().take(keep).collect();
        shortened.push_str(ELLIPSIS);
        shortened
    } else {
        text.to_string()
    }
}
