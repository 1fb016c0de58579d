//! Application components.

use guard_core::markup::FormCopy;
use guard_core::{FormGuard, GuardConfig};
use guard_dom::DomSubmit;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::surface::SignalSurface;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GuardConfig::default());

    view! {
        <Meta name="description" content="Sign up with your email to get started"/>
        <Title text="Get Started"/>

        <main>
            <CtaSection
                headline="Ready to get started?"
                subheadline="Enter your email and we'll be in touch."
            />
        </main>
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Call-to-action section wrapping the guarded form.
#[component]
pub fn CtaSection(
    #[prop(into)] headline: String,
    #[prop(into)] subheadline: String,
) -> impl IntoView {
    view! {
        <section class="cta" data-section="cta">
            <div class="cta__content">
                <h2 class="cta__headline">{headline}</h2>
                <p class="cta__subheadline">{subheadline}</p>
                <CtaForm/>
            </div>
        </section>
    }
}

/// Email form guarded on submit.
///
/// Uses the `config` prop when given, else a `GuardConfig` from context, else
/// the defaults. An invalid config falls back to the defaults. The native
/// submission never happens.
#[component]
pub fn CtaForm(
    #[prop(optional)] config: Option<GuardConfig>,
    #[prop(optional)] copy: Option<FormCopy>,
) -> impl IntoView {
    let config = resolve_config(config.or_else(use_context::<GuardConfig>));
    let copy = copy.unwrap_or_default();
    let classes = config.classes.clone();

    let guard = FormGuard::new(config);
    let email_ref = NodeRef::<html::Input>::new();
    let surface = SignalSurface::new();

    let on_submit = move |ev: SubmitEvent| {
        let value = email_ref
            .get()
            .map(|input| input.value())
            .unwrap_or_default();
        let mut surface = surface;
        guard.handle_submit(&DomSubmit::new(&ev), &value, &mut surface);
    };

    view! {
        <form class=classes.form novalidate=true on:submit=on_submit>
            <input
                class=classes.email_input
                type="email"
                name="email"
                placeholder=copy.placeholder
                aria-label="Email address"
                node_ref=email_ref
            />
            <p
                class=classes.message
                style:display=move || surface.display()
                style:color=move || surface.color()
            >
                {move || surface.text()}
            </p>
            <button type="submit">{copy.button}</button>
        </form>
    }
}

/// Pick the config to guard with, rejecting one that fails validation.
pub fn resolve_config(config: Option<GuardConfig>) -> GuardConfig {
    match config {
        Some(config) => match config.ensure_valid() {
            Ok(()) => config,
            Err(err) => {
                leptos::logging::warn!("{}; using default guard config", err);
                GuardConfig::default()
            }
        },
        None => GuardConfig::default(),
    }
}
