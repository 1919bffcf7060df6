use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_cta: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let onclick = {
        let on_cta = props.on_cta.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_cta.emit(());
        })
    };

    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <Reveal>
                        <h1>{"Diseñamos espacios que inspiran, construimos valor duradero"}</h1>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <p class="hero-subtitle">
                            {"Estudio especializado en vivienda, interiorismo y proyectos comerciales con enfoque sostenible y soluciones a medida."}
                        </p>
                    </Reveal>
                    <div class="hero-actions">
                        <button class="button-primary" {onclick}>
                            {"Solicitar presupuesto"}<span class="arrow">{"→"}</span>
                        </button>
                        <a href={format!("#{}", Section::Projects.id())} class="button-secondary">
                            {"Ver proyectos"}
                        </a>
                    </div>
                </div>

                <Reveal delay_ms={150} class="hero-image">
                    <img
                        src="https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1600&auto=format&fit=crop"
                        alt="Arquitectura contemporánea"
                    />
                </Reveal>
            </div>

            <style>
                {r#"
                .hero {
                    background: var(--surface);
                    overflow: hidden;
                }
                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 7rem 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    margin: 0;
                }
                .hero-subtitle {
                    margin-top: 1.25rem;
                    max-width: 36rem;
                    color: var(--muted);
                }
                .hero-actions {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                @media (max-width: 767px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        padding: 5rem 1rem;
                    }
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
