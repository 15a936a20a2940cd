//! Recently launched apps for the start menu search panel.

use crate::model::RecentApp;

/// Longest recent-apps list kept.
pub const MAX_RECENT_APPS: usize = 10;
/// Most search results shown.
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Moves `app` to the front, dropping any older entry with the same id.
pub fn record_recent_app(recent: &mut Vec<RecentApp>, app: RecentApp) {
    recent.retain(|existing| existing.id != app.id);
    recent.insert(0, app);
    recent.truncate(MAX_RECENT_APPS);
}

/// Case-insensitive name search over `recent`.
pub fn filter_recent_apps<'a>(recent: &'a [RecentApp], query: &str) -> Vec<&'a RecentApp> {
    let query = query.trim().to_lowercase();
    recent
        .iter()
        .filter(|app| app.name.to_lowercase().contains(&query))
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn app(id: &str, name: &str) -> RecentApp {
        RecentApp {
            id: id.to_string(),
            name: name.to_string(),
            icon: "terminal".to_string(),
        }
    }

    #[test]
    fn recording_deduplicates_and_caps() {
        let mut recent = Vec::new();
        for idx in 0..12 {
            record_recent_app(&mut recent, app(&format!("app-{idx}"), "App"));
        }
        record_recent_app(&mut recent, app("app-5", "App"));

        assert_eq!(recent.len(), MAX_RECENT_APPS);
        assert_eq!(recent[0].id, "app-5");
        assert_eq!(recent.iter().filter(|app| app.id == "app-5").count(), 1);
        assert_eq!(recent[1].id, "app-11");
    }

    #[test]
    fn search_is_case_insensitive_and_limited() {
        let recent: Vec<RecentApp> = (0..8)
            .map(|idx| app(&format!("n-{idx}"), &format!("Notes {idx} - Notepad")))
            .chain(std::iter::once(app("terminal", "Terminal")))
            .collect();

        let hits = filter_recent_apps(&recent, "NOTEPAD");
        assert_eq!(hits.len(), MAX_SEARCH_RESULTS);
        assert_eq!(hits[0].id, "n-0");

        let hits = filter_recent_apps(&recent, "term");
        assert_eq!(hits, vec![&recent[8]]);
    }
}
