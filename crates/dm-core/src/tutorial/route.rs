/// Screens on which the tutorial may run.
pub const TUTORIAL_ROUTES: [&str; 3] = ["/plan", "/plan/add-task", "/today"];

/// Exact-match membership test against [`TUTORIAL_ROUTES`].
pub fn is_tutorial_route(path: &str) -> bool {
    TUTORIAL_ROUTES.contains(&path)
}
