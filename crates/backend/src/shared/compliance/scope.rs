use contracts::domain::a006_goal::Goal;
use contracts::enums::user_role::UserRole;
use contracts::system::settings::CaptureWindow;
use serde::Deserialize;

/// Who is asking. Passed explicitly by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Actor {
    pub role: UserRole,
    pub department_id: Option<String>,
}

impl Actor {
    pub fn scope(&self) -> GoalScope {
        scoped_goals(self.role, self.department_id.as_deref())
    }
}

/// Set of goals visible to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalScope {
    All,
    Department(String),
    Nothing,
}

impl GoalScope {
    pub fn allows(&self, goal: &Goal) -> bool {
        self.allows_department(goal.department_id.as_deref())
    }

    pub fn allows_department(&self, department_id: Option<&str>) -> bool {
        match self {
            GoalScope::All => true,
            GoalScope::Department(own) => department_id == Some(own.as_str()),
            GoalScope::Nothing => false,
        }
    }

    pub fn filter<'a>(&'a self, goals: &'a [Goal]) -> impl Iterator<Item = &'a Goal> + 'a {
        goals.iter().filter(move |g| self.allows(g))
    }
}

/// Docentes only see goals of their own department; every other role sees all
pub fn scoped_goals(role: UserRole, department_id: Option<&str>) -> GoalScope {
    match role {
        UserRole::Admin | UserRole::Apoyo | UserRole::Invitado => GoalScope::All,
        UserRole::Docente => match department_id {
            Some(id) if !id.trim().is_empty() => GoalScope::Department(id.to_string()),
            _ => GoalScope::Nothing,
        },
    }
}

/// Admins always write, Invitado never; the rest only while capture is open
pub fn can_register_progress(role: UserRole, window: CaptureWindow) -> bool {
    match role {
        UserRole::Admin => true,
        UserRole::Apoyo | UserRole::Docente => window.capture_enabled,
        UserRole::Invitado => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::compliance::goal_progress::fixtures::goal;

    #[test]
    fn test_docente_sees_only_own_department() {
        let scope = scoped_goals(UserRole::Docente, Some("dep-1"));
        assert_eq!(scope, GoalScope::Department("dep-1".to_string()));

        let own = goal("g1", false, false);
        let mut other = goal("g2", false, false);
        other.department_id = Some("dep-2".to_string());
        let mut orphan = goal("g3", false, false);
        orphan.department_id = None;

        let goals = vec![own, other, orphan];
        let visible: Vec<&str> = scope.filter(&goals).map(|g| g.id.as_str()).collect();
        assert_eq!(visible, vec!["g1"]);
    }

    #[test]
    fn test_docente_without_department_sees_nothing() {
        assert_eq!(scoped_goals(UserRole::Docente, None), GoalScope::Nothing);
        assert_eq!(scoped_goals(UserRole::Docente, Some("  ")), GoalScope::Nothing);
        assert!(!GoalScope::Nothing.allows(&goal("g1", false, false)));
    }

    #[test]
    fn test_other_roles_see_everything() {
        for role in [UserRole::Admin, UserRole::Apoyo, UserRole::Invitado] {
            assert_eq!(scoped_goals(role, Some("dep-9")), GoalScope::All);
            assert!(scoped_goals(role, None).allows_department(None));
        }
    }

    #[test]
    fn test_capture_window() {
        let closed = CaptureWindow::closed();
        let open = CaptureWindow::open();

        assert!(can_register_progress(UserRole::Admin, closed));
        assert!(!can_register_progress(UserRole::Apoyo, closed));
        assert!(!can_register_progress(UserRole::Docente, closed));
        assert!(can_register_progress(UserRole::Docente, open));
        assert!(!can_register_progress(UserRole::Invitado, open));
    }
}
