use super::model;
use contracts::domain::a001_brand::aggregate::Brand;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::common::RecordId;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub form: RwSignal<Brand>,
    pub categories: RwSignal<Vec<Category>>,
    pub error: RwSignal<Option<String>>,
    /// Id of the control to highlight.
    pub invalid_field: RwSignal<Option<&'static str>>,
    pub saving: RwSignal<bool>,
}

impl BrandDetailsViewModel {
    pub fn new(initial: Option<Brand>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            invalid_field: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Categories feed the multi-select; a failure leaves it empty.
    pub fn load_categories(&self) {
        let this = *self;
        spawn_local(async move {
            match model::fetch_categories().await {
                Ok(list) => this.categories.set(list),
                Err(e) => {
                    log::error!("Failed to load categories for brand form: {}", e);
                    this.error.set(Some(format!("Could not load categories: {}", e)));
                }
            }
        });
    }

    pub fn toggle_category(&self, id: RecordId, checked: bool) {
        self.form.update(|f| f.toggle_category(id, checked));
    }

    pub fn save_command(&self, on_saved: Callback<Brand>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.invalid_field.set(Some(e.field));
            self.error.set(Some(e.message));
            return;
        }
        self.invalid_field.set(None);
        self.error.set(None);
        self.saving.set(true);

        let this = *self;
        spawn_local(async move {
            match model::save_form(&current).await {
                Ok(saved) => {
                    log::info!("Saved brand '{}'", saved.name);
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("Failed to save brand: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }
}
