// Role dispatch: the single total mapping from role to dashboard, used by
// every caller so per-surface role comparisons don't drift.

use cliniq_contracts::Role;

/// The dashboard a session lands on. Exactly one per role; unknown roles
/// get a neutral placeholder rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Admin,
    Doctor,
    Patient,
    Receptionist,
    Unrecognized,
}

impl DashboardKind {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Admin => "Admin Dashboard",
            DashboardKind::Doctor => "Doctor Dashboard",
            DashboardKind::Patient => "Patient Dashboard",
            DashboardKind::Receptionist => "Receptionist Dashboard",
            DashboardKind::Unrecognized => "Role not recognized",
        }
    }
}

/// Total over `Role`: never panics, never errors.
pub fn dashboard_for(role: &Role) -> DashboardKind {
    match role {
        Role::Admin => DashboardKind::Admin,
        Role::Doctor => DashboardKind::Doctor,
        Role::Patient => DashboardKind::Patient,
        Role::Receptionist => DashboardKind::Receptionist,
        Role::Unknown(_) => DashboardKind::Unrecognized,
    }
}

/// Post-auth redirect target. Admin and doctor go to their dashboards;
/// everything else falls back to the patient dashboard, matching the
/// backend's observed default.
pub fn redirect_for(role: &Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Doctor => "/doctor/dashboard",
        _ => "/patient/dashboard",
    }
}
