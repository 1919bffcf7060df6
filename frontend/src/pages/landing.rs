use log::info;
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav::Nav,
    portfolio::Portfolio, services::Services,
};
use crate::navigation::{self, Section};
use crate::theme::{self, ThemeMode};

/// The whole site: every section stacked in page order under a sticky nav.
#[function_component(Landing)]
pub fn landing() -> Html {
    let theme_mode = use_state_eq(theme::detect);

    use_effect_with_deps(
        move |mode: &ThemeMode| {
            theme::apply(*mode);
            || ()
        },
        *theme_mode,
    );

    let on_toggle_theme = {
        let theme_mode = theme_mode.clone();
        Callback::from(move |_: ()| {
            let next = (*theme_mode).toggled();
            info!("Switching to {:?} theme", next);
            theme_mode.set(next);
        })
    };

    let on_jump = Callback::from(|section: Section| {
        navigation::jump_to(section.id());
    });

    let on_cta = Callback::from(|_: ()| {
        navigation::jump_to(Section::Contact.id());
    });

    html! {
        <div class="landing">
            <Nav theme={*theme_mode} {on_toggle_theme} {on_jump} />
            <main>
                <Hero {on_cta} />
                <Portfolio />
                <About />
                <Services />
                <Contact />
            </main>
            <Footer />

            <style>
                {r#"
                :root {
                    --bg: #ffffff;
                    --fg: #18181b;
                    --muted: #52525b;
                    --subtle: #71717a;
                    --surface: #fafafa;
                    --card: #ffffff;
                    --hover: #f4f4f5;
                    --border: rgba(228, 228, 231, 0.8);
                    --border-strong: #d4d4d8;
                    --accent: #18181b;
                    --accent-fg: #ffffff;
                    --nav-bg: rgba(255, 255, 255, 0.8);
                    color-scheme: light;
                }
                :root.dark {
                    --bg: #09090b;
                    --fg: #f4f4f5;
                    --muted: #d4d4d8;
                    --subtle: #71717a;
                    --surface: #09090b;
                    --card: #18181b;
                    --hover: #27272a;
                    --border: #27272a;
                    --border-strong: #3f3f46;
                    --accent: #ffffff;
                    --accent-fg: #18181b;
                    --nav-bg: rgba(24, 24, 27, 0.7);
                    color-scheme: dark;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .landing {
                    min-height: 100vh;
                    background: var(--bg);
                    color: var(--fg);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .section {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    scroll-margin-top: 4rem;
                }
                .section h2 {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                }
                .section-lead {
                    margin-top: 0.5rem;
                    max-width: 42rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .button-primary,
                .button-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 1rem;
                    font: inherit;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    cursor: pointer;
                    transition: opacity 0.2s ease, background 0.2s ease;
                }
                .button-primary {
                    border: none;
                    background: var(--accent);
                    color: var(--accent-fg);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .button-primary:hover {
                    opacity: 0.9;
                }
                .button-secondary {
                    color: var(--fg);
                    border: 1px solid var(--border-strong);
                }
                .button-secondary:hover {
                    background: var(--hover);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(12px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (prefers-reduced-motion: reduce) {
                    html {
                        scroll-behavior: auto;
                    }
                    .reveal {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }
                @media (max-width: 767px) {
                    .section {
                        padding: 5rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
