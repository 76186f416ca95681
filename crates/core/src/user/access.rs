//! The signed-in user as seen by the rest of the core

use autocrm_domain::{AutoCrmError, Profile, Result, Role, Session};

/// A session paired with the profile that decides its role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub session: Session,
    pub profile: Profile,
}

impl Viewer {
    pub fn new(session: Session, profile: Profile) -> Self {
        Self { session, profile }
    }

    pub fn user_id(&self) -> &str {
        self.session.user_id()
    }

    pub fn role(&self) -> Role {
        self.profile.role
    }

    pub fn is_staff(&self) -> bool {
        self.profile.role.is_staff()
    }

    /// Fail with `Forbidden` unless the viewer is an employee.
    pub fn require_staff(&self) -> Result<()> {
        if self.is_staff() {
            Ok(())
        } else {
            Err(AutoCrmError::Forbidden(format!(
                "user {} has role {} but employee access is required",
                self.user_id(),
                self.role()
            )))
        }
    }

    pub fn display_name(&self) -> &str {
        self.profile.display_name()
    }
}
