use serde::{Deserialize, Serialize};

use super::state_machine::TutorialAction;

/// Tutorial flags that survive app restarts.
///
/// Everything else about the tutorial is session state and starts over on
/// every cold start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedTutorialPrefs {
    pub has_completed_tutorial: bool,
    /// Never decreases, not even on reset.
    pub abandon_count: u32,
}

impl PersistedTutorialPrefs {
    pub fn apply(&mut self, action: TutorialAction) {
        match action {
            TutorialAction::MarkCompleted => self.has_completed_tutorial = true,
            TutorialAction::RecordAbandon => {
                self.abandon_count = self.abandon_count.saturating_add(1)
            }
            TutorialAction::ClearCompleted => self.has_completed_tutorial = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_updates_flags() {
        let mut prefs = PersistedTutorialPrefs::default();

        prefs.apply(TutorialAction::MarkCompleted);
        prefs.apply(TutorialAction::RecordAbandon);
        assert!(prefs.has_completed_tutorial);
        assert_eq!(prefs.abandon_count, 1);

        prefs.apply(TutorialAction::ClearCompleted);
        assert!(!prefs.has_completed_tutorial);
        assert_eq!(prefs.abandon_count, 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let prefs = PersistedTutorialPrefs {
            has_completed_tutorial: true,
            abandon_count: 2,
        };
        let json = serde_json::to_value(prefs).unwrap();
        assert_eq!(json["hasCompletedTutorial"], true);
        assert_eq!(json["abandonCount"], 2);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs: PersistedTutorialPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, PersistedTutorialPrefs::default());
    }
}
