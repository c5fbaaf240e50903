// Localized strings, resolved from a bundled table and handed around as a
// context. Keys are opaque ids; an unknown id falls back to the id itself so
// a missing translation never blanks the UI.
use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

const EN_US: &str = include_str!("../l10n/en-US.json");

#[derive(Clone, Debug, PartialEq)]
pub struct StringBundle {
    strings: Rc<HashMap<String, String>>,
}

impl StringBundle {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let strings: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { strings: Rc::new(strings) })
    }

    pub fn en_us() -> Self {
        // The bundled table is validated by tests; a broken build asset is
        // unrecoverable anyway, so fall back to pass-through resolution.
        Self::from_json(EN_US).unwrap_or(Self { strings: Rc::new(HashMap::new()) })
    }

    pub fn text(&self, id: &str) -> String {
        self.strings.get(id).cloned().unwrap_or_else(|| id.to_owned())
    }

    /// Resolves `id` and substitutes a single `{name}` placeholder.
    pub fn text_with(&self, id: &str, name: &str, value: &str) -> String {
        self.text(id).replace(&format!("{{{}}}", name), value)
    }
}

impl Default for StringBundle {
    fn default() -> Self {
        Self::en_us()
    }
}

#[hook]
pub fn use_strings() -> StringBundle {
    use_context::<StringBundle>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct L10nProviderProps {
    pub children: Children,
}

#[function_component(L10nProvider)]
pub fn l10n_provider(props: &L10nProviderProps) -> Html {
    let bundle = use_memo((), |_| StringBundle::en_us());

    html! {
        <ContextProvider<StringBundle> context={(*bundle).clone()}>
            {props.children.clone()}
        </ContextProvider<StringBundle>>
    }
}
