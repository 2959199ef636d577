use crate::domain::a007_warranty_claim::api;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaim;
use contracts::domain::a007_warranty_claim::products::ProductClaim;
use contracts::domain::a007_warranty_claim::proof::ProofMethod;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ClaimEditViewModel {
    pub form: RwSignal<WarrantyClaim>,
    proof_file: StoredValue<Option<File>, LocalStorage>,
    pub proof_file_name: RwSignal<Option<String>>,
    pub invalid_field: RwSignal<Option<&'static str>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ClaimEditViewModel {
    pub fn new(claim: WarrantyClaim) -> Self {
        Self {
            form: RwSignal::new(claim),
            proof_file: StoredValue::new_local(None),
            proof_file_name: RwSignal::new(None),
            invalid_field: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn switch_proof(&self, method: ProofMethod) {
        self.form.update(|c| {
            c.proof.switch_to(method);
        });
    }

    pub fn set_proof_file(&self, file: Option<File>) {
        self.proof_file_name.set(file.as_ref().map(|f| f.name()));
        self.proof_file.set_value(file);
    }

    pub fn convert_to_multi(&self) {
        self.form.update(|c| {
            c.products.convert_to_multi();
        });
    }

    pub fn add_product(&self) {
        self.form.update(|c| {
            c.products.add_product();
        });
    }

    pub fn remove_product(&self, index: usize) {
        self.form.update(|c| {
            c.products.remove_product(index);
        });
    }

    pub fn edit_product(&self, index: usize, edit: impl FnOnce(&mut ProductClaim)) {
        self.form.update(|c| {
            if let Some(p) = c.products.product_mut(index) {
                edit(p);
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<WarrantyClaim>) {
        let claim = self.form.get_untracked();
        let file = self.proof_file.get_value();
        if let Err(e) = claim.validate(file.is_some()) {
            self.invalid_field.set(Some(e.field));
            self.error.set(Some(e.message));
            return;
        }
        self.invalid_field.set(None);
        self.error.set(None);
        self.saving.set(true);

        let this = *self;
        spawn_local(async move {
            let result = save_claim(&claim, file.as_ref()).await;
            match result {
                Ok(saved) => {
                    log::info!("Saved claim {}", saved.claim_number);
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("Failed to save claim {}: {}", claim.claim_number, e);
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }
}

/// PUT, then the proof upload, then a fresh read so the caller sees the
/// stored proof path.
async fn save_claim(claim: &WarrantyClaim, proof_file: Option<&File>) -> Result<WarrantyClaim, String> {
    api::update(claim).await?;
    let Some(id) = claim.id.as_ref() else {
        return Ok(claim.clone());
    };
    if let Some(file) = proof_file {
        api::upload_proof(id, file)
            .await
            .map_err(|e| format!("Claim saved, but the proof upload failed: {}", e))?;
    }
    match api::get(id).await {
        Ok(fresh) => Ok(fresh),
        Err(e) => {
            log::warn!("Reload after save failed: {}", e);
            Ok(claim.clone())
        }
    }
}
