/// Fixed, ordered category list. Checks are grouped by the `group` token
/// of their file name and executed in this order; categories with no
/// checks are still reported so coverage gaps stay visible.
pub const CATEGORIES: [&str; 7] = [
    "security",
    "storage",
    "communication",
    "environment",
    "monitoring",
    "performance",
    "platform-integration",
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}
