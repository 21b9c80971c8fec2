use crate::model::task::Snapshot;

/// Plain-text rendering of a snapshot, one fact per line
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let input = if snapshot.input_draft.is_empty() {
        "input:".to_string()
    } else {
        format!("input: {}", snapshot.input_draft)
    };
    let mut lines = vec![format!("theme: {}", snapshot.theme.as_str()), input];
    for task in &snapshot.tasks {
        lines.push(format!("[{}] {}", task.check_char(), task.text));
    }
    if let Some(session) = &snapshot.edit_session {
        lines.push(format!(
            "editing: #{} {:?}",
            session.target_index, session.draft_text
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty JSON rendering of a snapshot
pub fn snapshot_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
