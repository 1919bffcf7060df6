use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::navigation::Section;

const CREDENTIALS: [&str; 4] = [
    "Premio COAM 2023 – Vivienda",
    "Passivhaus Designer",
    "BIM (Revit) & Render 3D",
    "Dirección de obra",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="section about">
            <div class="about-grid">
                <Reveal class="about-copy">
                    <h2>{"Sobre mí"}</h2>
                    <p>
                        {"Soy arquitecto con más de 10 años de experiencia en vivienda, interiorismo y espacios comerciales. \
                          Me apasiona la relación entre materialidad, luz y confort. Trabajo cada proyecto desde la empatía, \
                          la sostenibilidad y la precisión técnica."}
                    </p>
                    <ul class="credentials">
                        { for CREDENTIALS.iter().map(|credential| html! { <li>{*credential}</li> }) }
                    </ul>
                </Reveal>
                <Reveal delay_ms={100} class="about-portrait">
                    <img
                        src="https://images.unsplash.com/photo-1487956382158-bb926046304a?q=80&w=1200&auto=format&fit=crop"
                        alt="Retrato profesional"
                        loading="lazy"
                    />
                </Reveal>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    align-items: center;
                    gap: 2.5rem;
                }
                .about-copy p {
                    margin-top: 1rem;
                    color: var(--muted);
                }
                .credentials {
                    list-style: none;
                    padding: 0;
                    margin-top: 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .credentials li {
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                }
                .about-portrait img {
                    width: 100%;
                    aspect-ratio: 3 / 4;
                    object-fit: cover;
                    border-radius: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                @media (max-width: 767px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-portrait {
                        order: -1;
                    }
                    .credentials {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
