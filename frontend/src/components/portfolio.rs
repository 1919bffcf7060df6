use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::models::catalog::{CategoryFilter, Gallery, Project};
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <Reveal class="project-card">
            <article>
                <div class="project-image">
                    <img src={project.image_url} alt={project.title} loading="lazy" />
                </div>
                <div class="project-body">
                    <div class="project-heading">
                        <h3>{project.title}</h3>
                        <span class="project-year">{project.year.to_string()}</span>
                    </div>
                    <p>{format!("{} • {}", project.category.label(), project.location)}</p>
                </div>
            </article>
        </Reveal>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let gallery = use_reducer_eq(Gallery::default);
    let options = gallery.options();
    let visible = use_memo(|_| gallery.visible(), gallery.active());

    let filter_button = |option: CategoryFilter| {
        let selected = gallery.active() == option;
        let dispatcher = gallery.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| {
            info!("Filtering projects by {}", option.label());
            dispatcher.dispatch(option);
        });
        html! {
            <button
                key={option.label()}
                class={classes!("filter-button", selected.then_some("active"))}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                {option.label()}
            </button>
        }
    };

    html! {
        <section id={Section::Projects.id()} class="section portfolio">
            <div class="portfolio-header">
                <div>
                    <h2>{"Proyectos"}</h2>
                    <p class="section-lead">
                        {"Selección de obras y propuestas. Filtrá por tipología para explorar el portafolio."}
                    </p>
                </div>
                <div class="filter-bar">
                    { for options.into_iter().map(filter_button) }
                </div>
            </div>

            if visible.is_empty() {
                <p class="empty-state">{"No hay proyectos en esta categoría."}</p>
            } else {
                <div class="project-grid">
                    { for visible.iter().map(|project| html! {
                        <ProjectCard key={project.id} project={*project} />
                    }) }
                </div>
            }

            <style>
                {r#"
                .portfolio-header {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .filter-button {
                    border-radius: 1rem;
                    padding: 0.5rem 1rem;
                    font: inherit;
                    font-size: 0.875rem;
                    background: transparent;
                    color: var(--muted);
                    border: 1px solid var(--border-strong);
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .filter-button:hover {
                    background: var(--hover);
                }
                .filter-button.active {
                    background: var(--accent);
                    color: var(--accent-fg);
                    border-color: var(--accent);
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .project-card article {
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }
                .project-card article:hover {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }
                .project-image {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .project-card article:hover .project-image img {
                    transform: scale(1.03);
                }
                .project-body {
                    padding: 1rem;
                }
                .project-heading {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .project-heading h3 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .project-year {
                    font-size: 0.75rem;
                    color: var(--subtle);
                }
                .project-body p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .empty-state {
                    padding: 3rem 0;
                    text-align: center;
                    color: var(--subtle);
                }
                @media (max-width: 1023px) {
                    .project-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 767px) {
                    .portfolio-header {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                    .project-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
