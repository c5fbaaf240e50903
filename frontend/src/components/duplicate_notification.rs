// Banner shown when a save collides with an already-stored entry
use yew::prelude::*;

use crate::l10n::use_strings;

#[derive(Properties, PartialEq)]
pub struct DuplicateNotificationProps {
    /// Hostname of the conflicting origin (raw origin when it is not a URL).
    pub hostname: AttrValue,
}

#[function_component(DuplicateNotification)]
pub fn duplicate_notification(props: &DuplicateNotificationProps) -> Html {
    let strings = use_strings();

    html! {
        <div
            id="duplicate-notification"
            class="flex items-center space-x-2 px-4 py-3 mb-4 rounded-lg text-sm"
            style="background-color: var(--bg-warning); border: 1px solid var(--color-warning); color: var(--fg-primary);"
            role="alert"
        >
            <svg class="w-4 h-4 flex-shrink-0" style="color: var(--color-warning);" fill="currentColor" viewBox="0 0 20 20">
                <path fill-rule="evenodd" d="M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z" clip-rule="evenodd"/>
            </svg>
            <span>{strings.text_with("duplicate-notification", "host", &props.hostname)}</span>
        </div>
    }
}
