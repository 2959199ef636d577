use crate::domain::a007_warranty_claim::api;
use crate::shared::api_utils::api_url;
use crate::shared::download::{download_via_iframe, mime_for, save_bytes};
use crate::shared::icons::icon;
use contracts::domain::a007_warranty_claim::aggregate::WarrantyClaimImage;
use contracts::domain::a007_warranty_claim::gallery::{
    archive_file_name, fault_file_name, pack_fault_images, zip_partial_failure_message,
    zip_success_message, GalleryDownload, ZIP_FALLBACK_MESSAGE,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Gap between fallback iframe downloads; browsers drop bursts.
const FALLBACK_STAGGER_MS: u32 = 400;

async fn download_individually(images: &[WarrantyClaimImage]) {
    for image in images {
        let url = api_url(&api::fault_image_path(&fault_file_name(image)));
        if let Err(e) = download_via_iframe(&url) {
            log::warn!("Fallback download of {} failed: {}", url, e);
        }
        TimeoutFuture::new(FALLBACK_STAGGER_MS).await;
    }
}

#[component]
pub fn FaultGallery(
    #[prop(into)] images: Signal<Vec<WarrantyClaimImage>>,
    #[prop(into)] claim_number: Signal<String>,
) -> impl IntoView {
    let progress = RwSignal::new(None::<u8>);
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let download_one = move |image: WarrantyClaimImage| {
        spawn_local(async move {
            let name = fault_file_name(&image);
            match api::fetch_fault_image(name.clone()).await {
                Ok(bytes) => {
                    if let Err(e) = save_bytes(&bytes, &name, mime_for(&name)) {
                        error.set(Some(e));
                    }
                }
                Err(e) => {
                    log::warn!("Direct download of {} failed ({}), using iframe", name, e);
                    if let Err(e) = download_via_iframe(&api_url(&api::fault_image_path(&name))) {
                        error.set(Some(e));
                    }
                }
            }
        });
    };

    let download_all = move |_| {
        let list = images.get_untracked();
        if list.is_empty() || progress.get_untracked().is_some() {
            return;
        }
        let zip_name = archive_file_name(&claim_number.get_untracked());
        message.set(None);
        error.set(None);
        progress.set(Some(0));
        spawn_local(async move {
            let packed = pack_fault_images(&list, api::fetch_fault_image, |p| progress.set(Some(p))).await;
            match packed {
                Ok(GalleryDownload::Archive { bytes, report }) => {
                    match save_bytes(&bytes, &zip_name, "application/zip") {
                        Ok(()) => {
                            message.set(Some(zip_success_message(report.succeeded())));
                            if report.failed() > 0 {
                                error.set(Some(zip_partial_failure_message(report.failed())));
                            }
                        }
                        Err(e) => error.set(Some(e)),
                    }
                }
                Ok(GalleryDownload::NothingFetched { .. }) => {
                    message.set(Some(ZIP_FALLBACK_MESSAGE.to_string()));
                    download_individually(&list).await;
                }
                Err(e) => {
                    log::error!("Packing fault images failed: {}", e);
                    message.set(Some(ZIP_FALLBACK_MESSAGE.to_string()));
                    download_individually(&list).await;
                }
            }
            progress.set(None);
        });
    };

    view! {
        <div class="fault-gallery">
            <div class="fault-gallery__header">
                <h4>{move || format!("Fault images ({})", images.with(|i| i.len()))}</h4>
                <Show when=move || images.with(|i| !i.is_empty())>
                    <button
                        class="button button--secondary button--small"
                        disabled=move || progress.get().is_some()
                        on:click=download_all
                    >
                        {icon("download")}
                        {move || match progress.get() {
                            Some(p) => format!("Packing... {}%", p),
                            None => "Download all (ZIP)".to_string(),
                        }}
                    </button>
                </Show>
            </div>
            {move || progress.get().map(|p| view! {
                <div class="progress"><div class="progress__bar" style=format!("width: {}%", p)></div></div>
            })}
            {move || message.get().map(|m| view! { <div class="info">{m}</div> })}
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="image-grid">
                {move || images.get().into_iter().map(|image| {
                    let name = fault_file_name(&image);
                    let src = image.image_url.clone();
                    view! {
                        <div class="image-grid__item">
                            <a href=src.clone() target="_blank" rel="noopener">
                                <img src=src.clone() alt=name.clone() />
                            </a>
                            <div class="image-grid__caption">
                                <span title=name.clone()>{name.clone()}</span>
                                <button
                                    class="button button--icon"
                                    title="Download"
                                    on:click=move |_| download_one(image.clone())
                                >
                                    {icon("download")}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
            <Show when=move || images.with(|i| i.is_empty())>
                <p class="hint">"No fault images attached"</p>
            </Show>
        </div>
    }
}
