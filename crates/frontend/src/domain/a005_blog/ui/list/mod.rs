pub mod state;

use self::state::{create_state, BlogListState};
use crate::domain::a005_blog::api::{self, BlogBatch};
use crate::domain::a005_blog::ui::details::BlogDetails;
use crate::shared::components::{ErrorBanner, PaginationControls, SuccessBanner};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeaderCell};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::confirm;
use contracts::domain::a005_blog::aggregate::Blog;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Banner texts for a finished bulk action.
fn report_messages(report: &BlogBatch, verb: &str) -> (Option<String>, Option<String>) {
    let success = (report.succeeded() > 0).then(|| report.summary(verb, "blog"));
    let failures: Vec<String> = report
        .failures()
        .map(|(id, e)| format!("#{}: {}", id, e))
        .collect();
    let error = (!failures.is_empty()).then(|| format!("Failed: {}", failures.join("; ")));
    (success, error)
}

#[component]
#[allow(non_snake_case)]
pub fn BlogList() -> impl IntoView {
    let config = use_config();
    let modal_stack = use_modal_stack();
    let state = create_state(config.default_page_size);
    let (loading, set_loading) = signal(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            let query = state.with_untracked(|s| s.query());
            match api::list(&query).await {
                Ok(paged) => state.update(|s| {
                    paged.apply_to(&mut s.window);
                    s.items = paged.items;
                    let visible: Vec<RecordId> = s.items.iter().filter_map(|b| b.id.clone()).collect();
                    s.selected.retain(|id| visible.contains(id));
                }),
                Err(e) => {
                    log::error!("Failed to load blogs: {}", e);
                    state.update(|s| {
                        s.items.clear();
                        s.window.reset_empty();
                    });
                    error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    load_items();

    let refilter = move |apply: Box<dyn FnOnce(&mut BlogListState)>| {
        state.update(|s| {
            apply(s);
            s.window.page = 1;
        });
        load_items();
    };

    let report_batch = move |report: &BlogBatch, verb: &str| {
        let (ok, failed) = report_messages(report, verb);
        success.set(ok);
        error.set(failed);
        busy.set(false);
    };

    // Deleted rows go away locally; the page is not refetched.
    let finish_delete = move |report: BlogBatch| {
        state.update(|s| s.remove_succeeded(&report));
        report_batch(&report, "deleted");
    };

    let bulk_delete = move |_| {
        let ids = state.with_untracked(|s| s.selected_ids());
        if ids.is_empty() || !confirm(&format!("Delete {} selected blog(s)?", ids.len())) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let report = api::delete_many(ids).await;
            finish_delete(report);
        });
    };

    let bulk_publish = move |publish: bool| {
        let blogs = state.with_untracked(|s| s.selected_blogs());
        if blogs.is_empty() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let report = api::set_published(blogs, publish).await;
            report_batch(&report, if publish { "published" } else { "unpublished" });
            state.update(|s| s.selected.clear());
            load_items();
        });
    };

    let open_form = move |id: Option<RecordId>| {
        let title = if id.is_some() { "Edit blog" } else { "New blog" };
        modal_stack.push(Some(title.to_string()), Some("blog-details-modal"), move |handle| {
            view! {
                <BlogDetails
                    id=id.clone()
                    on_saved=Callback::new(move |saved: Blog| {
                        handle.close();
                        success.set(Some(format!("Blog '{}' saved", saved.title)));
                        load_items();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let delete_one = move |id: RecordId, title: String| {
        if !confirm(&format!("Delete blog \"{}\"?", title)) {
            return;
        }
        spawn_local(async move {
            let report = api::delete_many(vec![id]).await;
            finish_delete(report);
        });
    };

    let sort = Signal::derive(move || state.get().sort);
    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.sort.toggle(&field));
        load_items();
    });
    let selected_count = move || state.with(|s| s.selected.len());

    view! {
        <div class="content">
            <div class="header">
                <h2>"Blogs"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(None)>
                        {icon("plus")}
                        "New blog"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load_items()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />
            <SuccessBanner message=success />

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |s: String| refilter(Box::new(move |st| st.search = s)))
                    placeholder="Search blogs..."
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.published = v));
                    }
                >
                    <option value="">"Published and drafts"</option>
                    <option value="true">"Published"</option>
                    <option value="false">"Drafts"</option>
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        refilter(Box::new(move |st| st.featured = v));
                    }
                >
                    <option value="">"Any"</option>
                    <option value="true">"Featured"</option>
                    <option value="false">"Not featured"</option>
                </select>
            </div>

            <Show when=move || { selected_count() > 0 }>
                <div class="bulk-bar">
                    <span>{move || format!("{} selected", selected_count())}</span>
                    <button class="button button--secondary" disabled=move || busy.get() on:click=move |_| bulk_publish(true)>
                        "Publish"
                    </button>
                    <button class="button button--secondary" disabled=move || busy.get() on:click=move |_| bulk_publish(false)>
                        "Unpublish"
                    </button>
                    <button class="button button--danger" disabled=move || busy.get() on:click=bulk_delete>
                        {icon("delete")}
                        "Delete"
                    </button>
                    <Show when=move || busy.get()>
                        <Spinner />
                    </Show>
                </div>
            </Show>

            <div class="table-container">
                <Show when=move || loading.get()>
                    <div class="table__loading">"Loading..."</div>
                </Show>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.all_selected())
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        state.update(|s| s.select_page(checked));
                                    }
                                />
                            </th>
                            <SortableHeaderCell label="Title" field="title" sort=sort on_sort=on_sort />
                            <th class="table__header-cell">"Author"</th>
                            <th class="table__header-cell">"Status"</th>
                            <SortableHeaderCell label="Published" field="published_at" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Created" field="created_at" sort=sort on_sort=on_sort />
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() && !loading.get() {
                                return view! {
                                    <tr><td colspan="7" class="table__empty">"No blogs found"</td></tr>
                                }.into_any();
                            }
                            items.into_iter().map(|blog| {
                                let id_select = blog.id.clone();
                                let id_checked = blog.id.clone();
                                let id_edit = blog.id.clone();
                                let id_delete = blog.id.clone();
                                let title = blog.title.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || state.with(|s| {
                                                    id_checked.as_ref().is_some_and(|id| s.selected.contains(id))
                                                })
                                                on:change=move |ev| {
                                                    if let Some(id) = id_select.clone() {
                                                        let checked = event_target_checked(&ev);
                                                        state.update(|s| s.toggle_selected(id, checked));
                                                    }
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <div class="blog-cell">
                                                <span class="blog-cell__title">{blog.title.clone()}</span>
                                                <span class="blog-cell__slug">{format!("/{}", blog.slug)}</span>
                                            </div>
                                        </td>
                                        <td class="table__cell">{blog.author.clone()}</td>
                                        <td class="table__cell">
                                            {if blog.is_published {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Published"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Draft"</Badge> }.into_any()
                                            }}
                                            {blog.is_featured.then(|| view! { <span class="table__flag" title="Featured">{icon("star")}</span> })}
                                        </td>
                                        <td class="table__cell">{format_optional(blog.published_at.as_deref())}</td>
                                        <td class="table__cell">{format_optional(blog.created_at.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| open_form(id_edit.clone())>
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Delete"
                                                on:click=move |_| {
                                                    if let Some(id) = id_delete.clone() {
                                                        delete_one(id, title.clone());
                                                    }
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                window=Signal::derive(move || state.get().window)
                on_page_change=Callback::new(move |p: usize| {
                    state.update(|s| s.window.go_to(p));
                    load_items();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| s.window.set_limit(size));
                    load_items();
                })
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_messages_split_success_and_failure() {
        let mut report = BlogBatch::default();
        report.push(RecordId::Int(1), Ok(()));
        report.push(RecordId::Int(2), Err("HTTP 500".to_string()));
        let (ok, failed) = report_messages(&report, "deleted");
        assert_eq!(ok.as_deref(), Some("Successfully deleted 1 out of 2 blog(s)"));
        assert_eq!(failed.as_deref(), Some("Failed: #2: HTTP 500"));
    }

    #[test]
    fn test_report_messages_all_failed() {
        let mut report = BlogBatch::default();
        report.push(RecordId::Int(5), Err("gone".to_string()));
        let (ok, failed) = report_messages(&report, "published");
        assert!(ok.is_none());
        assert!(failed.is_some());
    }
}
