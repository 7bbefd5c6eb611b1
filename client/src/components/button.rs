//! Primary and secondary action button.

use leptos::prelude::*;

/// Visual emphasis for [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Secondary => "btn btn--secondary",
        }
    }
}

/// Shared action button. Renders a link when `href` is set, otherwise a
/// `<button>` — a submit button inside a form when `submit` is set, a plain
/// button wired to `on_press` otherwise.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] submit: bool,
) -> impl IntoView {
    let classes = match class {
        Some(extra) => format!("{} {extra}", variant.class()),
        None => variant.class().to_owned(),
    };

    match href {
        Some(href) => view! {
            <a class=classes href=href>{label}</a>
        }
        .into_any(),
        None => {
            let button_type = if submit { "submit" } else { "button" };
            view! {
                <button
                    class=classes
                    type=button_type
                    on:click=move |_| {
                        if let Some(on_press) = on_press {
                            on_press.run(());
                        }
                    }
                >
                    {label}
                </button>
            }
            .into_any()
        }
    }
}
