//! Plain-text rendering of the list view, the edit form and single notes.

use crate::form::NoteForm;
use crate::note::Note;
use crate::search::Header;

pub const LIST_TITLE: &str = "My Notes";
pub const EMPTY_MESSAGE: &str = "No notes found.";
const SNIPPET_CHARS: usize = 60;

/// Header, then one entry per note with its position, id, title, snippet and date.
pub fn render_list(header: &Header<'_>, notes: &[&Note]) -> String {
    let mut out = String::new();

    match header {
        Header::Title => {
            out.push_str(&format!("{}    [search]\n", LIST_TITLE));
        }
        Header::SearchBox(query) => {
            out.push_str(&format!("Search: {}_    [close]\n", query));
        }
    }
    out.push('\n');

    if notes.is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_MESSAGE));
        return out;
    }

    for (i, note) in notes.iter().enumerate() {
        out.push_str(&format!("  {:>3}. ({}) {}\n", i + 1, note.short_id(), note.title));
        let snippet = note.snippet(SNIPPET_CHARS);
        if !snippet.is_empty() {
            out.push_str(&format!("        {}\n", snippet));
        }
        out.push_str(&format!("        {}\n", note.date));
    }
    out
}

/// Controls, then the title and body being edited.
pub fn render_form(form: &NoteForm) -> String {
    let mut out = String::new();

    out.push_str("[back] [save]");
    if form.can_delete() {
        out.push_str(" [delete]");
    }
    out.push_str("\n\n");

    let title = if form.title.is_empty() {
        "(title)"
    } else {
        form.title.as_str()
    };
    out.push_str(&format!("Title: {}\n", title));
    out.push_str("----\n");
    if form.text.is_empty() {
        out.push_str("(note details...)\n");
    } else {
        for line in form.text.lines() {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

/// Full view of one note.
pub fn render_note(note: &Note) -> String {
    let mut out = String::new();
    out.push_str(&format!("Note ({})\n", note.id));
    out.push_str(&format!("Title: {}\n", note.title));
    out.push_str(&format!("Date: {}\n", note.date));
    out.push_str(&format!("\n{}\n", note.text));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, text: &str) -> Note {
        Note {
            id: "0123456789".to_string(),
            title: title.to_string(),
            text: text.to_string(),
            date: "12/03/2023".to_string(),
        }
    }

    #[test]
    fn test_list_with_title_header() {
        let n = note("Groceries", "milk\neggs");
        let out = render_list(&Header::Title, &[&n]);
        assert!(out.starts_with("My Notes"));
        assert!(out.contains("1. (0123456) Groceries"));
        assert!(out.contains("milk"));
        assert!(!out.contains("eggs"));
        assert!(out.contains("12/03/2023"));
    }

    #[test]
    fn test_list_with_search_header() {
        let out = render_list(&Header::SearchBox("gro"), &[]);
        assert!(out.starts_with("Search: gro"));
        assert!(out.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_form_for_new_note_has_no_delete() {
        let out = render_form(&NoteForm::blank());
        assert!(out.contains("[save]"));
        assert!(!out.contains("[delete]"));
        assert!(out.contains("(title)"));
    }

    #[test]
    fn test_form_for_existing_note() {
        let n = note("Groceries", "milk\neggs");
        let out = render_form(&NoteForm::for_note(Some(&n)));
        assert!(out.contains("[delete]"));
        assert!(out.contains("Title: Groceries"));
        assert!(out.contains("milk\neggs\n"));
    }

    #[test]
    fn test_render_note() {
        let out = render_note(&note("Groceries", "milk"));
        assert!(out.contains("Note (0123456789)"));
        assert!(out.contains("Title: Groceries"));
        assert!(out.contains("Date: 12/03/2023"));
        assert!(out.ends_with("milk\n"));
    }
}
