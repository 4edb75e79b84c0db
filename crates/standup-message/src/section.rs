use standup_core::entry::is_blank;
use standup_core::ListField;

/// Heading line for a list section, without the trailing newline.
pub fn heading(field: ListField) -> &'static str {
    match field {
        ListField::CompletedTasks => "✅ *Tasks Completed Yesterday:*",
        ListField::InProgressTasks => "🚧 *Tasks in Progress Today:* ",
        ListField::Dependencies => "⚠️ *Blockers / Dependencies:*",
    }
}

pub const NOTES_HEADING: &str = "📝 *Notes / Comments:*";

/// Append a list section: the heading followed by one bullet per non-blank
/// item, or the heading with a literal `null` when nothing is left.
pub fn append_list(msg: &mut String, field: ListField, items: &[String]) {
    let heading = heading(field);
    let mut items = items.iter().filter(|i| !is_blank(i)).peekable();

    if items.peek().is_none() {
        msg.push_str(heading.trim_end());
        msg.push_str(" null\n");
        return;
    }

    msg.push_str(heading);
    msg.push('\n');
    for item in items {
        append_bullet(msg, item);
    }
}

pub fn append_notes(msg: &mut String, notes: &str) {
    if is_blank(notes) {
        msg.push_str(NOTES_HEADING);
        msg.push_str(" null\n");
        return;
    }
    msg.push_str(NOTES_HEADING);
    msg.push('\n');
    append_bullet(msg, notes);
}

fn append_bullet(msg: &mut String, value: &str) {
    msg.push_str(" - ");
    msg.push_str(value);
    msg.push_str(" \n");
}
