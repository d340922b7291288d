use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivePage {
    Dashboard,
    Stores,
    Targets,
    Settings,
    Admin,
}

impl ActivePage {
    pub fn key(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "dashboard",
            ActivePage::Stores => "stores",
            ActivePage::Targets => "targets",
            ActivePage::Settings => "settings",
            ActivePage::Admin => "admin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(ActivePage::Dashboard),
            "stores" => Some(ActivePage::Stores),
            "targets" => Some(ActivePage::Targets),
            "settings" => Some(ActivePage::Settings),
            "admin" => Some(ActivePage::Admin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "Dashboard",
            ActivePage::Stores => "Toko",
            ActivePage::Targets => "Target Produk",
            ActivePage::Settings => "Pengaturan",
            ActivePage::Admin => "Manajemen User",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "bar-chart",
            ActivePage::Stores => "store",
            ActivePage::Targets => "package",
            ActivePage::Settings => "settings",
            ActivePage::Admin => "users",
        }
    }

    /// Superuser-only screens.
    pub fn admin_only(&self) -> bool {
        matches!(self, ActivePage::Admin)
    }

    /// Page this role is actually allowed to see.
    ///
    /// The active page can arrive from outside the sidebar (the `?page=`
    /// query string, or a stale value left over from a previous session),
    /// so the role check has to happen here, not only in the menu.
    pub fn for_role(self, is_superuser: bool) -> ActivePage {
        if self.admin_only() && !is_superuser {
            ActivePage::Dashboard
        } else {
            self
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<ActivePage>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(ActivePage::Dashboard),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Sync the active page with the `?page=...` query string.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| ActivePage::from_key(key)) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
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

    pub fn open_page(&self, page: ActivePage) {
        self.active_page.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_user_is_bounced_off_admin_pages() {
        // The key can be fed in straight from the URL, so the role
        // check must hold even when the sidebar never offered the page.
        let page = ActivePage::from_key("admin").unwrap();
        assert_eq!(page.for_role(false), ActivePage::Dashboard);
        assert_eq!(page.for_role(true), ActivePage::Admin);
    }

    #[test]
    fn for_role_keeps_shared_pages_for_everyone() {
        for page in [
            ActivePage::Dashboard,
            ActivePage::Stores,
            ActivePage::Targets,
            ActivePage::Settings,
        ] {
            assert_eq!(page.for_role(false), page);
            assert_eq!(page.for_role(true), page);
        }
    }
}
