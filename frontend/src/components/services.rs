use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::navigation::Section;

struct Service {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Diseño arquitectónico",
        icon: "🏠",
        description: "Proyectos de obra nueva y ampliaciones, desde anteproyecto hasta ejecutivos.",
    },
    Service {
        title: "Interiorismo",
        icon: "📐",
        description: "Reformas integrales, mobiliario a medida y dirección de obra.",
    },
    Service {
        title: "Comercial & Oficinas",
        icon: "🏢",
        description: "Diseño de espacios de trabajo y retail alineados con tu marca.",
    },
    Service {
        title: "Licencias y tramitaciones",
        icon: "📋",
        description: "Asesoramiento técnico, memorias y legalizaciones para tu proyecto.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section services">
            <h2>{"Servicios"}</h2>
            <p class="section-lead">
                {"Acompaño cada proyecto con metodología clara, comunicación transparente y foco en el detalle."}
            </p>

            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <Reveal key={service.title} class="service-card">
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </Reveal>
                }) }
            </div>

            <style>
                {r#"
                .services-grid {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.25rem;
                }
                .service-card {
                    padding: 1.25rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .service-card:hover {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }
                .service-icon {
                    display: inline-flex;
                    padding: 0.5rem;
                    margin-bottom: 0.75rem;
                    border-radius: 1rem;
                    background: var(--hover);
                }
                .service-card h3 {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 600;
                }
                .service-card p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                @media (max-width: 1023px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 639px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
