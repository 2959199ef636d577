use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::{is_known_tab, DEFAULT_TAB};

/// Shell state: which screen is open and whether the sidebar is expanded.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_TAB.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Sync the active tab with `?tab=` so a refresh reopens the same screen.
    ///
    /// `initial` wins over the query string; it is set by routes such as
    /// `/orders` that open the shell on a given screen.
    pub fn init_router_integration(&self, initial: Option<&str>) {
        let from_query = read_tab_param();
        let start = initial
            .map(str::to_string)
            .or(from_query)
            .filter(|key| is_known_tab(key));
        if let Some(key) = start {
            self.active.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                active_key,
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str) {
        log::debug!("open tab '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn read_tab_param() -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    tab_from_query(&search)
}

pub fn tab_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("tab").cloned().filter(|t| !t.is_empty())
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(tab_from_query("?tab=a006_order"), Some("a006_order".to_string()));
        assert_eq!(tab_from_query("?other=1"), None);
        assert_eq!(tab_from_query(""), None);
        assert_eq!(tab_from_query("?tab="), None);
    }
}
