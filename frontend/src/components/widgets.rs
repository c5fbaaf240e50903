// Small building blocks shared by the item views
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonTheme {
    #[default]
    Default,
    Primary,
    Ghost,
}

impl ButtonTheme {
    fn style(&self) -> &'static str {
        match self {
            ButtonTheme::Default => {
                "background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
            }
            ButtonTheme::Primary => {
                "background-color: var(--button-primary-bg); border: 1px solid transparent; color: var(--button-primary-text);"
            }
            ButtonTheme::Ghost => {
                "background-color: transparent; border: 1px solid transparent; color: var(--color-error);"
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub theme: ButtonTheme,
    /// "button" unless the caller wants a submit control.
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let width = if props.wide { "flex-1 " } else { "" };

    html! {
        <button
            id={props.id.clone()}
            type={props.button_type.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            class={format!("{}px-4 py-2 rounded-lg text-sm font-medium disabled:opacity-50", width)}
            style={props.theme.style()}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "space-x-2", props.class.clone())} role="toolbar">
            {props.children.clone()}
        </div>
    }
}
