use crate::error::KioskError;
use crate::records::Editable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Viewing,
    Editing,
    Saving,
}

/// The network call a save turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest<R> {
    Create(R),
    Update(R),
}

impl<R> SaveRequest<R> {
    pub fn record(&self) -> &R {
        match self {
            SaveRequest::Create(record) | SaveRequest::Update(record) => record,
        }
    }
}

/// Read/edit state of one form.
///
/// `Viewing -> Editing -> Saving -> Viewing`, or back to `Viewing` on cancel.
/// A failed save drops back to `Editing` with the draft intact.
#[derive(Debug, Clone)]
pub struct EditSession<R: Editable> {
    phase: EditPhase,
    draft: Option<R>,
    original: Option<R>,
    error: Option<String>,
}

impl<R: Editable> Default for EditSession<R> {
    fn default() -> Self {
        Self {
            phase: EditPhase::Viewing,
            draft: None,
            original: None,
            error: None,
        }
    }
}

impl<R: Editable> EditSession<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Viewing
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    pub fn original(&self) -> Option<&R> {
        self.original.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The key input is read-only once the record exists on the server.
    pub fn key_locked(&self) -> bool {
        self.original.is_some()
    }

    pub fn begin_add(&mut self) {
        self.phase = EditPhase::Editing;
        self.draft = Some(R::default());
        self.original = None;
        self.error = None;
    }

    pub fn begin_edit(&mut self, record: R) {
        self.phase = EditPhase::Editing;
        self.draft = Some(record.clone());
        self.original = Some(record);
        self.error = None;
    }

    pub fn mutate_field(&mut self, field: R::Field, value: String) -> Result<(), KioskError> {
        if self.phase != EditPhase::Editing {
            return Err(KioskError::validation("The form is not open for editing"));
        }
        if field == R::KEY_FIELD && self.key_locked() {
            return Err(KioskError::validation("The ID of an existing record cannot be changed"));
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.set_field(field, value);
        }
        Ok(())
    }

    /// Discards the draft and hands back the untouched original.
    pub fn cancel(&mut self) -> Option<R> {
        self.phase = EditPhase::Viewing;
        self.draft = None;
        self.error = None;
        self.original.take()
    }

    /// Validates the draft and moves to `Saving`.
    pub fn save(&mut self) -> Result<SaveRequest<R>, KioskError> {
        if self.phase != EditPhase::Editing {
            return Err(KioskError::validation("Nothing to save"));
        }
        let Some(draft) = self.draft.clone() else {
            return Err(KioskError::validation("Nothing to save"));
        };
        if let Err(err) = validate(&draft) {
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.phase = EditPhase::Saving;
        self.error = None;
        Ok(if self.original.is_some() {
            SaveRequest::Update(draft)
        } else {
            SaveRequest::Create(draft)
        })
    }

    pub fn save_succeeded(&mut self) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Viewing;
            self.draft = None;
            self.original = None;
            self.error = None;
        }
    }

    pub fn save_failed(&mut self, err: &KioskError) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Editing;
            self.error = Some(err.to_string());
        }
    }
}

/// Required fields: key and name.
pub fn validate<R: Editable>(record: &R) -> Result<(), KioskError> {
    if record.field(R::KEY_FIELD).trim().is_empty() || record.field(R::NAME_FIELD).trim().is_empty() {
        return Err(KioskError::validation(format!("Please fill in the {} ID and name", R::NOUN)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Student, StudentField, Teacher, TeacherField};

    fn anan() -> Student {
        Student {
            student_id: "S1".into(),
            full_name: "Anan".into(),
            class_code: "1/1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn cancel_leaves_the_original_untouched() {
        let mut session = EditSession::new();
        session.begin_edit(anan());
        session.mutate_field(StudentField::FullName, "Changed".into()).unwrap();
        let restored = session.cancel();
        assert_eq!(restored, Some(anan()));
        assert_eq!(session.phase(), EditPhase::Viewing);
        assert!(session.draft().is_none());
    }

    #[test]
    fn key_is_locked_when_editing_existing_record() {
        let mut session = EditSession::new();
        session.begin_edit(anan());
        let err = session.mutate_field(StudentField::StudentId, "S2".into()).unwrap_err();
        assert!(matches!(err, KioskError::Validation(_)));
        assert_eq!(session.draft().unwrap().student_id, "S1");
    }

    #[test]
    fn add_form_allows_key_and_creates() {
        let mut session: EditSession<Teacher> = EditSession::new();
        session.begin_add();
        assert!(!session.key_locked());
        session.mutate_field(TeacherField::StaffId, "T9".into()).unwrap();
        session.mutate_field(TeacherField::FullName, "Kru Malee".into()).unwrap();
        let request = session.save().unwrap();
        assert!(matches!(request, SaveRequest::Create(ref t) if t.staff_id == "T9"));
        assert_eq!(session.phase(), EditPhase::Saving);
    }

    #[test]
    fn save_of_existing_record_is_an_update() {
        let mut session = EditSession::new();
        session.begin_edit(anan());
        session.mutate_field(StudentField::ClassCode, "1/2".into()).unwrap();
        let request = session.save().unwrap();
        assert_eq!(request, SaveRequest::Update(Student { class_code: "1/2".into(), ..anan() }));
        session.save_succeeded();
        assert_eq!(session.phase(), EditPhase::Viewing);
        assert!(session.draft().is_none());
    }

    #[test]
    fn missing_name_is_rejected_before_any_request() {
        let mut session: EditSession<Student> = EditSession::new();
        session.begin_add();
        session.mutate_field(StudentField::StudentId, "S5".into()).unwrap();
        assert!(session.save().is_err());
        assert_eq!(session.phase(), EditPhase::Editing);
        assert!(session.error().is_some());
    }

    #[test]
    fn failed_save_keeps_the_draft() {
        let mut session = EditSession::new();
        session.begin_edit(anan());
        session.mutate_field(StudentField::Phone, "0812345678".into()).unwrap();
        session.save().unwrap();
        session.save_failed(&KioskError::Http { status: 500, message: "Server error".into() });
        assert_eq!(session.phase(), EditPhase::Editing);
        assert_eq!(session.draft().unwrap().phone.as_deref(), Some("0812345678"));
        assert_eq!(session.error(), Some("Server error (HTTP 500)"));
    }

    #[test]
    fn mutation_outside_editing_is_rejected() {
        let mut session: EditSession<Student> = EditSession::new();
        assert!(session.mutate_field(StudentField::FullName, "x".into()).is_err());
    }
}
