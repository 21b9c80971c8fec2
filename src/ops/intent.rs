/// One discrete user action forwarded to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddTask(String),
    SetInputDraft(String),
    ToggleCompleted(usize),
    BeginEdit(usize),
    ChangeEditDraft(String),
    CommitEdit,
    CancelEdit,
    DeleteTask(usize),
    ToggleTheme,
}

/// Error type for intent scripts
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown intent `{verb}`")]
    UnknownVerb { line: usize, verb: String },
    #[error("line {line}: `{verb}` expects a task index, got `{arg}`")]
    BadIndex {
        line: usize,
        verb: String,
        arg: String,
    },
    #[error("line {line}: `{verb}` takes no argument")]
    UnexpectedArgument { line: usize, verb: String },
    #[error("failed to read script {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
}

/// Parse an intent script: one intent per line.
///
/// ```text
/// # comments and blank lines are skipped
/// add Buy milk
/// toggle 0
/// edit 0
/// draft Buy oat milk
/// commit
/// ```
///
/// Text arguments are everything after the first space, kept verbatim.
pub fn parse_script(source: &str) -> Result<Vec<Intent>, ScriptError> {
    let mut intents = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }
        intents.push(parse_line(line, raw)?);
    }
    Ok(intents)
}

fn parse_line(line: usize, raw: &str) -> Result<Intent, ScriptError> {
    let raw = raw.trim_start();
    let (verb, arg) = match raw.split_once(' ') {
        Some((verb, arg)) => (verb, Some(arg)),
        None => (raw, None),
    };
    let text = || arg.unwrap_or_default().to_string();
    let index = || -> Result<usize, ScriptError> {
        let arg = arg.unwrap_or_default().trim();
        parse_index(arg).ok_or_else(|| ScriptError::BadIndex {
            line,
            verb: verb.to_string(),
            arg: arg.to_string(),
        })
    };
    let bare = |intent: Intent| -> Result<Intent, ScriptError> {
        match arg {
            Some(a) if !a.trim().is_empty() => Err(ScriptError::UnexpectedArgument {
                line,
                verb: verb.to_string(),
            }),
            _ => Ok(intent),
        }
    };

    match verb {
        "add" => Ok(Intent::AddTask(text())),
        "input" => Ok(Intent::SetInputDraft(text())),
        "draft" => Ok(Intent::ChangeEditDraft(text())),
        "toggle" => Ok(Intent::ToggleCompleted(index()?)),
        "edit" => Ok(Intent::BeginEdit(index()?)),
        "delete" => Ok(Intent::DeleteTask(index()?)),
        "commit" => bare(Intent::CommitEdit),
        "cancel" => bare(Intent::CancelEdit),
        "theme" => bare(Intent::ToggleTheme),
        _ => Err(ScriptError::UnknownVerb {
            line,
            verb: verb.to_string(),
        }),
    }
}

/// A run of ASCII digits. Values past `usize::MAX` saturate, since any index
/// that large is out of range anyway.
fn parse_index(arg: &str) -> Option<usize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(arg.parse().unwrap_or(usize::MAX))
}
