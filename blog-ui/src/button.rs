use yew::prelude::*;

/// Which element the button renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonElement {
    /// Navigational anchor, used when a destination is set and the
    /// control is enabled.
    Link,
    /// Plain container, used when there is no destination or the control
    /// is disabled.
    Container,
}

/// A disabled button never navigates, even when `to` is set.
pub fn element_for(to: Option<&str>, disabled: bool) -> ButtonElement {
    if to.is_some() && !disabled {
        ButtonElement::Link
    } else {
        ButtonElement::Container
    }
}

pub fn button_classes(theme: &str, disabled: bool) -> Classes {
    classes!(
        "button",
        theme.to_string(),
        disabled.then_some("disabled")
    )
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    /// Navigation destination. Without it the button is a plain control.
    #[prop_or_default]
    pub to: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("default"))]
    pub theme: AttrValue,
}

/// Presentational button. No internal state; everything comes in through
/// props. Disabling swaps the click callback for a no-op and adds the
/// `disabled` class.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(&props.theme, props.disabled);
    let onclick = if props.disabled {
        Callback::noop()
    } else {
        props.onclick.clone()
    };

    match element_for(props.to.as_deref(), props.disabled) {
        ButtonElement::Link => html! {
            <a href={props.to.clone()} {class} {onclick}>
                { props.children.clone() }
            </a>
        },
        ButtonElement::Container => html! {
            <div {class} {onclick}>
                { props.children.clone() }
            </div>
        },
    }
}
