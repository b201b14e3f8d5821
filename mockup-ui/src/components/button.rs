//! Toolbar buttons

use dioxus::prelude::*;

/// Button visual variant, mapped onto Bootstrap's button classes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Main action of a toolbar
    Primary,
    /// Secondary action
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-outline-secondary",
        }
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = format!(
        "btn btn-sm {} d-inline-flex align-items-center gap-2",
        variant.class()
    );

    rsx! {
        button {
            class,
            id: id.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
