use crate::users::application::domain::entities::UserRole;

/// The caller behind an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
    pub role: UserRole,
}

impl Actor {
    pub fn new(user_id: i32, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}
