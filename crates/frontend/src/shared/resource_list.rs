//! View model shared by the client-side list screens (brands, categories,
//! subcategories).

use contracts::domain::common::RecordId;
use contracts::shared::list_state::{ClientList, Searchable, Sortable};
use contracts::shared::pagination::PageWindow;
use contracts::shared::resource::{remove_by_id, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::resource_api;

pub struct ResourceListVm<T: Resource + Send + Sync> {
    pub items: RwSignal<Vec<T>>,
    pub list: RwSignal<ClientList>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl<T: Resource + Send + Sync> Clone for ResourceListVm<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource + Send + Sync> Copy for ResourceListVm<T> {}

impl<T> ResourceListVm<T>
where
    T: Resource + Searchable + Sortable + Send + Sync,
{
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            list: RwSignal::new(ClientList::new(sort_field, page_size)),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match resource_api::fetch_all::<T>().await {
                Ok(items) => {
                    log::debug!("loaded {} {} record(s)", items.len(), T::LABEL);
                    this.items.set(items);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {} list: {}", T::LABEL, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Rows of the current page after search, extra filter and sort, with
    /// the window sized to the filtered count. Pure read: safe inside views.
    pub fn page<P: Fn(&T) -> bool>(&self, extra: P) -> (Vec<T>, PageWindow) {
        let mut list = self.list.get();
        let rows = self.items.with(|items| list.apply(items, extra));
        (rows, list.window)
    }

    pub fn set_search(&self, search: String) {
        self.list.update(|l| l.set_search(search));
    }

    pub fn toggle_sort(&self, field: String) {
        self.list.update(|l| l.sort.toggle(&field));
    }

    /// Bounds are enforced by [`Self::page`] against the filtered total.
    pub fn go_to(&self, page: usize) {
        self.list.update(|l| l.window.page = page.max(1));
    }

    pub fn set_page_size(&self, size: usize) {
        self.list.update(|l| l.window.set_limit(size));
    }

    /// After a form save: report it and refetch the whole list.
    pub fn saved(&self, saved: &T) {
        self.success.set(Some(saved_message(saved)));
        self.load();
    }

    /// Confirm, DELETE, and drop the row locally on success.
    pub fn delete(&self, id: RecordId, name: String) {
        if !confirm(&format!("Delete {} \"{}\"?", T::LABEL, name)) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            match resource_api::remove::<T>(&id).await {
                Ok(()) => {
                    this.items.update(|items| {
                        remove_by_id(items, &id);
                    });
                    this.success.set(Some(format!("{} deleted", capitalize(T::LABEL))));
                }
                Err(e) => {
                    log::error!("Failed to delete {} {}: {}", T::LABEL, id, e);
                    this.error.set(Some(e));
                }
            }
        });
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn saved_message<T: Resource>(item: &T) -> String {
    format!("{} '{}' saved", capitalize(T::LABEL), item.display_name())
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("brand"), "Brand");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_saved_message_names_the_record() {
        let brand = contracts::domain::a001_brand::aggregate::Brand {
            name: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(saved_message(&brand), "Brand 'Acme' saved");
    }
}
