//! Student entity - a person identified by a unique enrollment code.

/// A registered student.
///
/// `code` is the external natural key (enrollment code); `id` is the
/// storage-assigned surrogate. `created_at` is assigned by the store on
/// registration and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub created_at: String,
}

impl Student {
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            created_at: created_at.into(),
        }
    }
}
