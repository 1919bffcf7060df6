use log::info;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::Section;
use crate::theme::ThemeMode;

const SCROLLED_AFTER_PX: f64 = 24.0;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub on_jump: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme, on_jump } = props;
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(offset > SCROLLED_AFTER_PX);
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Theme toggle pressed");
            on_toggle_theme.emit(());
        })
    };

    let nav_link = |section: Section, class: &'static str| {
        let menu_open = menu_open.clone();
        let on_jump = on_jump.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_jump.emit(section);
            menu_open.set(false);
        });
        html! {
            <button key={section.id()} class={class} {onclick}>
                {section.label()}
            </button>
        }
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <nav class="nav-content">
                <div class="nav-logo">
                    <img src="/assets/logo_horizontal.svg" alt="Logo del estudio" />
                </div>

                <div class="nav-links">
                    { for Section::ALL.into_iter().map(|section| nav_link(section, "nav-link")) }
                    <div class="nav-divider"></div>
                    <button
                        class="theme-toggle"
                        aria-label="Cambiar tema"
                        onclick={toggle_theme.clone()}
                    >
                        {theme.toggle_icon()}
                    </button>
                </div>

                <button
                    class="burger-menu"
                    aria-label={if *menu_open { "Cerrar menú" } else { "Abrir menú" }}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    { for Section::ALL.into_iter().map(|section| nav_link(section, "mobile-link")) }
                    <button class="mobile-link" aria-label="Cambiar tema" onclick={toggle_theme}>
                        {theme.toggle_icon()}{" Cambiar tema"}
                    </button>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    border-bottom: 1px solid var(--border);
                    background: var(--nav-bg);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0.5rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    height: 3rem;
                    width: auto;
                    object-fit: contain;
                }
                :root.dark .nav-logo img {
                    filter: invert(1);
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .nav-link, .mobile-link {
                    background: none;
                    border: none;
                    color: inherit;
                    font: inherit;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .nav-link {
                    padding: 0.5rem 1rem;
                }
                .nav-link:hover {
                    opacity: 0.75;
                }
                .nav-divider {
                    width: 1px;
                    height: 1.25rem;
                    margin: 0 0.5rem;
                    background: var(--border-strong);
                }
                .theme-toggle {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.1rem;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    cursor: pointer;
                }
                .theme-toggle:hover {
                    background: var(--hover);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.5rem;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    padding: 0.5rem 1rem;
                    border-top: 1px solid var(--border);
                    background: var(--bg);
                }
                .mobile-link {
                    text-align: left;
                    padding: 0.75rem 0.5rem;
                }
                @media (min-width: 768px) {
                    .nav-logo img {
                        height: 10rem;
                    }
                }
                @media (max-width: 767px) {
                    .nav-content {
                        padding: 0.5rem 1rem;
                    }
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
