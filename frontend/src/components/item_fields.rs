// Editable origin/username/password inputs for one credential entry
use keywarden_shared::ItemFields;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::l10n::use_strings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    Origin,
    Username,
    Password,
}

impl ItemField {
    /// Stable form-control name, also used as the input id.
    pub fn name(self) -> &'static str {
        match self {
            ItemField::Origin => "origin",
            ItemField::Username => "username",
            ItemField::Password => "password",
        }
    }

    fn label_id(self) -> &'static str {
        match self {
            ItemField::Origin => "item-fields-origin",
            ItemField::Username => "item-fields-username",
            ItemField::Password => "item-fields-password",
        }
    }
}

/// One keystroke's worth of change: exactly one named field, its new value.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldEdit {
    pub field: ItemField,
    pub value: String,
}

#[derive(Properties, PartialEq)]
pub struct EditItemFieldsProps {
    pub fields: ItemFields,
    #[prop_or_default]
    pub show_password: bool,
    pub on_edit: Callback<FieldEdit>,
    pub on_reveal: Callback<()>,
}

#[function_component(EditItemFields)]
pub fn edit_item_fields(props: &EditItemFieldsProps) -> Html {
    let strings = use_strings();

    let edit_callback = |field: ItemField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit { field, value: input.value() });
        })
    };

    let on_reveal = {
        let on_reveal = props.on_reveal.clone();
        Callback::from(move |_| on_reveal.emit(()))
    };

    let input_style =
        "background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);";

    html! {
        <div class="space-y-4">
            <div>
                <label
                    for={ItemField::Origin.name()}
                    class="block text-sm mb-2"
                    style="color: var(--fg-muted);"
                >
                    {strings.text(ItemField::Origin.label_id())}
                </label>
                <input
                    id={ItemField::Origin.name()}
                    name={ItemField::Origin.name()}
                    type="text"
                    value={props.fields.origin.clone()}
                    oninput={edit_callback(ItemField::Origin)}
                    class="w-full px-4 py-2 rounded-lg"
                    style={input_style}
                />
            </div>

            <div>
                <label
                    for={ItemField::Username.name()}
                    class="block text-sm mb-2"
                    style="color: var(--fg-muted);"
                >
                    {strings.text(ItemField::Username.label_id())}
                </label>
                <input
                    id={ItemField::Username.name()}
                    name={ItemField::Username.name()}
                    type="text"
                    autocomplete="off"
                    value={props.fields.username.clone()}
                    oninput={edit_callback(ItemField::Username)}
                    class="w-full px-4 py-2 rounded-lg"
                    style={input_style}
                />
            </div>

            <div>
                <label
                    for={ItemField::Password.name()}
                    class="block text-sm mb-2"
                    style="color: var(--fg-muted);"
                >
                    {strings.text(ItemField::Password.label_id())}
                </label>
                <div class="flex items-center">
                    <input
                        id={ItemField::Password.name()}
                        name={ItemField::Password.name()}
                        type={if props.show_password { "text" } else { "password" }}
                        autocomplete="off"
                        value={props.fields.password.clone()}
                        oninput={edit_callback(ItemField::Password)}
                        class="flex-1 px-4 py-2 rounded-l-lg font-mono"
                        style={input_style}
                    />
                    <button
                        id="reveal-password-button"
                        type="button"
                        onclick={on_reveal}
                        class="px-4 py-2 rounded-r-lg border-l-0"
                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-muted);"
                        title={strings.text(if props.show_password { "item-fields-conceal" } else { "item-fields-reveal" })}
                    >
                        if props.show_password {
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.543-7a9.97 9.97 0 011.563-3.029m5.858.908a3 3 0 114.243 4.243M9.878 9.878l4.242 4.242M9.88 9.88l-3.29-3.29m7.532 7.532l3.29 3.29M3 3l3.59 3.59m0 0A9.953 9.953 0 0112 5c4.478 0 8.268 2.943 9.543 7a10.025 10.025 0 01-4.132 5.411m0 0L21 21"/>
                            </svg>
                        } else {
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"/>
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"/>
                            </svg>
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_stable() {
        assert_eq!(ItemField::Origin.name(), "origin");
        assert_eq!(ItemField::Username.name(), "username");
        assert_eq!(ItemField::Password.name(), "password");
    }
}
