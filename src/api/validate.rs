//! Field checks applied at the HTTP boundary before anything reaches the store.
//!
//! Bounds count characters, not bytes.

use crate::errors::AppError;
use crate::models::{
    NewNote, NewNoteRequest, NewReply, NewSuggestion, NewThread, NotePatch, NoteRequestPatch,
    SuggestionPatch, ThreadPatch,
};

const TITLE: (usize, usize) = (3, 100);
const SUGGESTION_DESCRIPTION: (usize, usize) = (10, 500);
const THREAD_BODY: (usize, usize) = (10, 600);
const REPLY_TEXT: (usize, usize) = (1, 300);
const REQUEST_SUBJECT: (usize, usize) = (2, 50);
const REQUEST_DETAILS: (usize, usize) = (10, 500);

fn length(field: &str, value: &str, (min, max): (usize, usize)) -> Result<(), AppError> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn optional<T>(
    value: Option<&T>,
    check: impl FnOnce(&T) -> Result<(), AppError>,
) -> Result<(), AppError> {
    value.map_or(Ok(()), check)
}

pub fn new_suggestion(new: &NewSuggestion) -> Result<(), AppError> {
    length("Title", &new.title, TITLE)?;
    length("Description", &new.description, SUGGESTION_DESCRIPTION)?;
    required("Author id", &new.author_id)
}

pub fn suggestion_patch(patch: &SuggestionPatch) -> Result<(), AppError> {
    optional(patch.title.as_ref(), |t| length("Title", t, TITLE))?;
    optional(patch.description.as_ref(), |d| {
        length("Description", d, SUGGESTION_DESCRIPTION)
    })
}

pub fn new_note(new: &NewNote) -> Result<(), AppError> {
    required("Title", &new.title)?;
    required("Subject", &new.subject)?;
    required("Link", &new.link)?;
    required("Author id", &new.author_id)
}

pub fn note_patch(patch: &NotePatch) -> Result<(), AppError> {
    optional(patch.title.as_ref(), |t| required("Title", t))?;
    optional(patch.subject.as_ref(), |s| required("Subject", s))?;
    optional(patch.link.as_ref(), |l| required("Link", l))
}

pub fn new_request(new: &NewNoteRequest) -> Result<(), AppError> {
    length("Subject", &new.subject, REQUEST_SUBJECT)?;
    optional(new.details.as_ref(), |d| length("Details", d, REQUEST_DETAILS))?;
    required("Requester id", &new.requester_id)
}

pub fn request_patch(patch: &NoteRequestPatch) -> Result<(), AppError> {
    optional(patch.subject.as_ref(), |s| length("Subject", s, REQUEST_SUBJECT))?;
    optional(patch.details.as_ref().and_then(Option::as_ref), |d| {
        length("Details", d, REQUEST_DETAILS)
    })
}

pub fn new_thread(new: &NewThread) -> Result<(), AppError> {
    length("Title", &new.title, TITLE)?;
    length("Body", &new.body, THREAD_BODY)?;
    required("Author id", &new.author_id)
}

pub fn thread_patch(patch: &ThreadPatch) -> Result<(), AppError> {
    optional(patch.title.as_ref(), |t| length("Title", t, TITLE))?;
    optional(patch.body.as_ref(), |b| length("Body", b, THREAD_BODY))
}

pub fn new_reply(new: &NewReply) -> Result<(), AppError> {
    length("Reply", &new.text, REPLY_TEXT)?;
    required("Author id", &new.author_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn suggestion(title: &str, description: &str) -> NewSuggestion {
        NewSuggestion {
            title: title.into(),
            description: description.into(),
            category: Category::Other,
            author_id: "guest-1".into(),
        }
    }

    #[test]
    fn test_suggestion_bounds() {
        assert!(new_suggestion(&suggestion("Gym", "0123456789")).is_ok());
        assert!(new_suggestion(&suggestion("Gy", "0123456789")).is_err());
        assert!(new_suggestion(&suggestion("Gym", "too short")).is_err());
        assert!(new_suggestion(&suggestion(&"x".repeat(101), "0123456789")).is_err());
    }

    #[test]
    fn test_bounds_count_characters() {
        // Three two-byte characters make a valid title
        assert!(new_suggestion(&suggestion("äöü", "0123456789")).is_ok());
        assert!(new_reply(&NewReply {
            text: "é".repeat(300),
            author_id: "guest-1".into(),
        })
        .is_ok());
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        assert!(thread_patch(&ThreadPatch::default()).is_ok());
        assert!(thread_patch(&ThreadPatch {
            body: Some("short".into()),
            ..Default::default()
        })
        .is_err());
        assert!(note_patch(&NotePatch {
            link: Some("  ".into()),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_request_details_optional() {
        let mut request = NewNoteRequest {
            subject: "CS".into(),
            details: None,
            requester_id: "guest-1".into(),
        };
        assert!(new_request(&request).is_ok());

        request.details = Some("too short".into());
        let err = new_request(&request).unwrap_err();
        assert_eq!(err.message(), "Details must be between 10 and 500 characters");
    }

    #[test]
    fn test_blank_actor_rejected() {
        let err = new_thread(&NewThread {
            title: "Exam timetable".into(),
            body: "When is the timetable out?".into(),
            author_id: " ".into(),
        })
        .unwrap_err();
        assert_eq!(err.message(), "Author id is required");
    }
}
