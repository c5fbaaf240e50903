// Items page: list panel plus the edit form. This container owns what the
// form delegates: fetching, saving, deleting and password visibility.
use gloo_timers::callback::Timeout;
use keywarden_shared::{Item, ItemFields};
use yew::prelude::*;

use crate::components::edit_item::EditItemDetails;
use crate::l10n::use_strings;
use crate::services::{self, ApiError};
use crate::theme::ThemeToggle;

// Revealed passwords go back to hidden after this long.
const AUTO_HIDE_MS: u32 = 30_000;

#[derive(Clone, Debug, PartialEq)]
enum Selection {
    None,
    New,
    Existing(String),
}

#[function_component(ItemsPage)]
pub fn items_page() -> Html {
    let strings = use_strings();
    let items = use_state(|| None::<Vec<Item>>);
    let selection = use_state(|| Selection::None);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<ApiError>);
    let load_error = use_state(|| None::<ApiError>);
    let loading = use_state(|| true);

    // Fetch items on mount
    {
        let items = items.clone();
        let load_error = load_error.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::list().await {
                    Ok(list) => items.set(Some(list)),
                    Err(e) => {
                        load_error.set(Some(e));
                        items.set(Some(Vec::new()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // A revealed password hides itself again after a while
    {
        let show_password = show_password.clone();
        use_effect_with(*show_password, move |visible| -> Box<dyn FnOnce()> {
            if *visible {
                let show_password = show_password.clone();
                let timeout = Timeout::new(AUTO_HIDE_MS, move || show_password.set(false));
                Box::new(move || drop(timeout))
            } else {
                Box::new(|| ())
            }
        });
    }

    let on_new = {
        let selection = selection.clone();
        let show_password = show_password.clone();
        let error = error.clone();
        Callback::from(move |_| {
            selection.set(Selection::New);
            show_password.set(false);
            error.set(None);
        })
    };

    let on_select = {
        let selection = selection.clone();
        let show_password = show_password.clone();
        let error = error.clone();
        Callback::from(move |id: String| {
            selection.set(Selection::Existing(id));
            show_password.set(false);
            error.set(None);
        })
    };

    let on_save = {
        let items = items.clone();
        let selection = selection.clone();
        let error = error.clone();
        Callback::from(move |fields: ItemFields| {
            if let Err(e) = fields.validate() {
                error.set(Some(ApiError {
                    message: e.to_string(),
                    code: Some("INVALID_FIELDS".to_string()),
                }));
                return;
            }

            let items = items.clone();
            let selection = selection.clone();
            let error = error.clone();
            let current = (*selection).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &current {
                    Selection::New => services::items::create(&fields).await,
                    Selection::Existing(id) => services::items::update(id, &fields).await,
                    Selection::None => return,
                };
                match result {
                    Ok(saved) => {
                        let mut list = items.as_ref().cloned().unwrap_or_default();
                        match list.iter_mut().find(|i| i.id == saved.id) {
                            Some(slot) => *slot = saved.clone(),
                            None => list.push(saved.clone()),
                        }
                        items.set(Some(list));
                        selection.set(Selection::Existing(saved.id));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let on_cancel = {
        let selection = selection.clone();
        let show_password = show_password.clone();
        let error = error.clone();
        Callback::from(move |_| {
            selection.set(Selection::None);
            show_password.set(false);
            error.set(None);
        })
    };

    let on_delete = {
        let items = items.clone();
        let selection = selection.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let Selection::Existing(id) = (*selection).clone() else {
                return;
            };
            let items = items.clone();
            let selection = selection.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match services::items::delete(&id).await {
                    Ok(()) => {
                        let list = items
                            .as_ref()
                            .cloned()
                            .unwrap_or_default()
                            .into_iter()
                            .filter(|i| i.id != id)
                            .collect::<Vec<_>>();
                        items.set(Some(list));
                        selection.set(Selection::None);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let on_reveal = {
        let show_password = show_password.clone();
        Callback::from(move |_| {
            show_password.set(!*show_password);
        })
    };

    // Caller-side reaction to edits: drop the stale save error
    let on_change = {
        let error = error.clone();
        Callback::from(move |_| {
            if error.is_some() {
                error.set(None);
            }
        })
    };

    let detail = match &*selection {
        Selection::None => html! {
            <div class="h-full flex items-center justify-center">
                <p style="color: var(--fg-muted);">{strings.text("item-select-prompt")}</p>
            </div>
        },
        Selection::New => html! {
            <EditItemDetails
                fields={ItemFields::default()}
                show_password={*show_password}
                error={(*error).clone()}
                on_save={on_save.clone()}
                on_cancel={on_cancel.clone()}
                on_delete={on_delete.clone()}
                on_reveal={on_reveal.clone()}
                on_change={on_change.clone()}
            />
        },
        Selection::Existing(id) => {
            let item = items
                .as_ref()
                .and_then(|list| list.iter().find(|i| i.id == *id))
                .cloned();
            match item {
                Some(item) => html! {
                    <EditItemDetails
                        fields={item.fields()}
                        item_id={Some(item.id.clone())}
                        title={item.title.clone()}
                        show_password={*show_password}
                        error={(*error).clone()}
                        on_save={on_save.clone()}
                        on_cancel={on_cancel.clone()}
                        on_delete={on_delete.clone()}
                        on_reveal={on_reveal.clone()}
                        on_change={on_change.clone()}
                    />
                },
                None => html! {
                    <div class="h-full flex items-center justify-center">
                        <p style="color: var(--fg-muted);">{strings.text("item-select-prompt")}</p>
                    </div>
                },
            }
        }
    };

    html! {
        <div class="flex h-full min-h-screen" style="background-color: var(--bg-primary);">
            // Left panel: entry list
            <div class="w-96 flex-shrink-0 border-r flex flex-col" style="border-color: var(--border-primary); background-color: var(--bg-secondary);">
                <div class="p-4 border-b" style="border-color: var(--border-primary);">
                    <div class="flex items-center justify-between">
                        <h1 class="text-xl font-semibold" style="color: var(--fg-primary);">
                            {strings.text("item-list-heading")}
                        </h1>
                        <div class="flex items-center space-x-2">
                            <ThemeToggle />
                            <button
                                id="new-item-button"
                                onclick={on_new}
                                class="flex items-center space-x-1 px-3 py-1.5 rounded-lg text-sm font-medium"
                                style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                            >
                                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                                </svg>
                                <span>{strings.text("item-list-new")}</span>
                            </button>
                        </div>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto">
                    if *loading {
                        <div class="p-4 text-center" style="color: var(--fg-muted);">
                            {strings.text("item-list-loading")}
                        </div>
                    } else if load_error.is_some() {
                        <div class="p-4 text-center" style="color: var(--color-error);">
                            {strings.text("item-list-load-failed")}
                        </div>
                    } else if let Some(list) = items.as_ref() {
                        if list.is_empty() {
                            <div class="p-4 text-center" style="color: var(--fg-muted);">
                                {strings.text("item-list-empty")}
                            </div>
                        } else {
                            { for list.iter().map(|item| {
                                let id = item.id.clone();
                                let on_select = on_select.clone();
                                let selected = matches!(&*selection, Selection::Existing(s) if *s == item.id);

                                html! {
                                    <ItemListRow
                                        key={item.id.clone()}
                                        item={item.clone()}
                                        {selected}
                                        on_click={Callback::from(move |_| on_select.emit(id.clone()))}
                                    />
                                }
                            })}
                        }
                    }
                </div>
            </div>

            // Right panel: edit form or prompt
            <div class="flex-1 overflow-y-auto" style="background-color: var(--bg-primary);">
                {detail}
            </div>
        </div>
    }
}

// ===== Item List Row =====

#[derive(Properties, PartialEq)]
struct ItemListRowProps {
    item: Item,
    selected: bool,
    on_click: Callback<()>,
}

#[function_component(ItemListRow)]
fn item_list_row(props: &ItemListRowProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_| on_click.emit(()))
    };

    let bg_style = if props.selected {
        "background-color: var(--bg-highlight);"
    } else {
        ""
    };

    html! {
        <div
            {onclick}
            class="px-4 py-3 cursor-pointer border-b"
            style={format!("border-color: var(--border-primary); {}", bg_style)}
        >
            <div class="font-medium" style="color: var(--fg-primary);">{&props.item.title}</div>
            <div class="text-sm" style="color: var(--fg-muted);">
                {if props.item.username.is_empty() { "-" } else { props.item.username.as_str() }}
            </div>
        </div>
    }
}
