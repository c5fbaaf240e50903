// Edit view for one credential entry. The component owns only the
// uncommitted edit buffer; saving, deleting and password visibility are the
// container's business, reached through the callback props.
use keywarden_shared::{host_for_display, ItemFields};
use yew::prelude::*;

use crate::components::duplicate_notification::DuplicateNotification;
use crate::components::item_fields::{EditItemFields, FieldEdit, ItemField};
use crate::components::widgets::{Button, ButtonTheme, Toolbar};
use crate::l10n::use_strings;
use crate::services::ApiError;

/// Uncommitted edits for the item identified by `item_id` (None while
/// creating a new entry).
#[derive(Clone, Debug, PartialEq)]
pub struct EditBuffer {
    pub item_id: Option<String>,
    pub fields: ItemFields,
}

impl EditBuffer {
    pub fn seeded(item_id: Option<String>, fields: &ItemFields) -> Self {
        Self { item_id, fields: fields.clone() }
    }

    /// Whether this buffer belongs to the given item identity.
    pub fn tracks(&self, item_id: &Option<String>) -> bool {
        self.item_id == *item_id
    }

    /// Copy of the buffer with exactly one named field replaced.
    pub fn with_edit(&self, edit: &FieldEdit) -> Self {
        let mut next = self.clone();
        match edit.field {
            ItemField::Origin => next.fields.origin = edit.value.clone(),
            ItemField::Username => next.fields.username = edit.value.clone(),
            ItemField::Password => next.fields.password = edit.value.clone(),
        }
        next
    }
}

#[derive(Properties, PartialEq)]
pub struct EditItemDetailsProps {
    /// Initial field values the buffer is seeded from.
    #[prop_or_default]
    pub fields: ItemFields,
    /// None means "creating a new entry".
    #[prop_or_default]
    pub item_id: Option<String>,
    /// Display title of an existing entry; unused while creating.
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub show_password: bool,
    #[prop_or_default]
    pub error: Option<ApiError>,
    pub on_save: Callback<ItemFields>,
    pub on_cancel: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_reveal: Callback<()>,
    pub on_change: Callback<()>,
}

#[function_component(EditItemDetails)]
pub fn edit_item_details(props: &EditItemDetailsProps) -> Html {
    let strings = use_strings();
    let buffer = use_state(|| EditBuffer::seeded(props.item_id.clone(), &props.fields));

    // Rendering a different item than the buffer tracks: discard pending
    // edits wholesale and reseed from the incoming fields. The id change is
    // the only reset trigger; everything else keeps the buffer as-is.
    let current = if buffer.tracks(&props.item_id) {
        (*buffer).clone()
    } else {
        let fresh = EditBuffer::seeded(props.item_id.clone(), &props.fields);
        buffer.set(fresh.clone());
        fresh
    };

    let new_item = props.item_id.is_none();
    let is_duplicate = props
        .error
        .as_ref()
        .map(ApiError::is_duplicate_entry)
        .unwrap_or(false);
    let hostname = host_for_display(&current.fields.origin);

    let onsubmit = {
        let on_save = props.on_save.clone();
        let fields = current.fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(fields.clone());
        })
    };

    let on_edit = {
        let buffer = buffer.clone();
        let current = current.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |edit: FieldEdit| {
            buffer.set(current.with_edit(&edit));
            on_change.emit(());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(()))
    };

    html! {
        <form
            id={if new_item { "new-item-form" } else { "edit-item-form" }}
            class="p-6 max-w-2xl"
            {onsubmit}
        >
            if is_duplicate {
                <DuplicateNotification hostname={hostname.clone()} />
            }
            <header class="flex items-center justify-between mb-6">
                if new_item {
                    <h1 class="text-2xl font-semibold" style="color: var(--fg-primary);">
                        {strings.text("item-details-heading-new")}
                    </h1>
                } else {
                    <>
                        <h1 class="text-2xl font-semibold" style="color: var(--fg-primary);">
                            {props.title.clone()}
                        </h1>
                        <Toolbar>
                            <Button
                                id="delete-item-button"
                                theme={ButtonTheme::Ghost}
                                onclick={on_delete}
                            >
                                {strings.text("item-details-delete")}
                            </Button>
                        </Toolbar>
                    </>
                }
            </header>

            <EditItemFields
                fields={current.fields.clone()}
                show_password={props.show_password}
                on_reveal={props.on_reveal.clone()}
                {on_edit}
            />

            <Toolbar class={classes!("mt-6")}>
                <Button button_type="submit" theme={ButtonTheme::Primary} wide=true>
                    {strings.text(if new_item { "item-details-save-new" } else { "item-details-save-existing" })}
                </Button>
                <Button id="edit-item-cancel-button" onclick={on_cancel}>
                    {strings.text("item-details-cancel")}
                </Button>
            </Toolbar>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(origin: &str, username: &str, password: &str) -> ItemFields {
        ItemFields {
            origin: origin.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn seeding_copies_the_initial_fields() {
        let initial = fields("https://example.com", "alice", "pw");
        let buffer = EditBuffer::seeded(Some("a".to_owned()), &initial);
        assert!(buffer.tracks(&Some("a".to_owned())));
        assert_eq!(buffer.fields, initial);
    }

    #[test]
    fn edit_replaces_exactly_one_field() {
        let buffer = EditBuffer::seeded(None, &fields("https://example.com", "alice", "pw"));
        let edited = buffer.with_edit(&FieldEdit {
            field: ItemField::Username,
            value: "bob".to_owned(),
        });
        assert_eq!(edited.fields.username, "bob");
        assert_eq!(edited.fields.origin, "https://example.com");
        assert_eq!(edited.fields.password, "pw");
        // the source buffer is untouched
        assert_eq!(buffer.fields.username, "alice");
    }

    #[test]
    fn identity_change_discards_pending_edits() {
        // Edit item A's username, then switch to item B: the reseeded buffer
        // must show B's original fields, not the stale edit.
        let item_a = fields("https://a.example", "alice", "pw-a");
        let item_b = fields("https://b.example", "bob", "pw-b");

        let buffer = EditBuffer::seeded(Some("a".to_owned()), &item_a)
            .with_edit(&FieldEdit { field: ItemField::Username, value: "x".to_owned() });
        assert_eq!(buffer.fields.username, "x");

        let switched = Some("b".to_owned());
        assert!(!buffer.tracks(&switched));

        let reseeded = EditBuffer::seeded(switched.clone(), &item_b);
        assert!(reseeded.tracks(&switched));
        assert_eq!(reseeded.fields, item_b);
    }

    #[test]
    fn same_identity_keeps_the_buffer() {
        let initial = fields("https://a.example", "alice", "pw-a");
        let buffer = EditBuffer::seeded(Some("a".to_owned()), &initial)
            .with_edit(&FieldEdit { field: ItemField::Password, value: "new".to_owned() });
        assert!(buffer.tracks(&Some("a".to_owned())));
        assert_eq!(buffer.fields.password, "new");
    }

    #[test]
    fn new_entry_buffer_tracks_none() {
        let buffer = EditBuffer::seeded(None, &ItemFields::default());
        assert!(buffer.tracks(&None));
        assert!(!buffer.tracks(&Some("a".to_owned())));
    }
}
