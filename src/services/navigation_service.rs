use crate::models::navigation::{NavItem, Role};

pub fn nav_items(role: Role) -> Vec<NavItem> {
    match role {
        Role::Student => vec![
            NavItem::new("/dashboard/student", "Dashboard", "layout-dashboard"),
            NavItem::new("/dashboard/student/calendar", "Calendar", "calendar"),
            NavItem::new("/dashboard/student/courses", "Courses", "book-open"),
            NavItem::new("/dashboard/student/tests", "Tests", "file-text"),
            NavItem::new("/dashboard/student/performance", "Performance", "activity"),
        ],
        Role::Admin => vec![
            NavItem::new("/dashboard/admin", "Dashboard", "layout-dashboard"),
            NavItem::new("/dashboard/admin/users", "User Management", "users"),
            NavItem::new("/dashboard/admin/content", "Content Review", "file-text"),
            NavItem::new("/dashboard/admin/analytics", "Analytics", "bar-chart-3"),
        ],
        Role::Employee => vec![
            NavItem::new("/dashboard/employee", "Dashboard", "layout-dashboard"),
            NavItem::new("/dashboard/employee/upload", "Upload Content", "upload"),
            NavItem::new("/dashboard/employee/courses", "Manage Courses", "book-open"),
            NavItem::new("/dashboard/employee/analytics", "Analytics", "bar-chart-3"),
        ],
        Role::Owner => vec![
            NavItem::new("/dashboard/owner", "Dashboard", "layout-dashboard"),
            NavItem::new("/dashboard/owner/revenue", "Revenue", "database"),
            NavItem::new("/dashboard/owner/users", "Users", "users"),
            NavItem::new("/dashboard/owner/analytics", "Analytics", "bar-chart-3"),
        ],
    }
}

/// Settings and logout, shown under every role's items.
pub fn footer_items() -> Vec<NavItem> {
    vec![
        NavItem::new("/settings", "Settings", "settings"),
        NavItem::new("/logout", "Logout", "log-out"),
    ]
}

/// The item whose href equals the current path, if any.
pub fn active_item(role: Role, pathname: &str) -> Option<NavItem> {
    nav_items(role).into_iter().find(|item| item.href == pathname)
}
