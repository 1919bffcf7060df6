use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::models::contact::{
    plan_submission, post_draft, Banner, ContactDraft, Delivery, FormAction, FormState,
    Submission, ACK_MESSAGE,
};
use crate::navigation::Section;

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let form = use_reducer_eq(FormState::default);

    // Each acknowledgement gets its own dismiss timer; a newer one drops
    // (and so cancels) the previous.
    {
        let dispatcher = form.dispatcher();
        let showing_ack = form.banner == Some(Banner::Sent);
        use_effect_with_deps(
            move |&(ack, showing_ack): &(u32, bool)| {
                let timer = showing_ack.then(|| {
                    Timeout::new(config::ACK_DISMISS_MS, move || {
                        dispatcher.dispatch(FormAction::Dismiss { ack });
                    })
                });
                move || drop(timer)
            },
            (form.acks, showing_ack),
        );
    }

    let input_setter = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.sending {
                return;
            }

            let draft = ContactDraft::new(&name, &email, &subject, &message);
            let delivery = Delivery::from_config(config::contact_endpoint(), config::SUBMIT_TIMEOUT_MS);

            let acknowledge = {
                let name = name.clone();
                let email = email.clone();
                let subject = subject.clone();
                let message = message.clone();
                let dispatcher = form.dispatcher();
                move || {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    dispatcher.dispatch(FormAction::Acknowledged);
                }
            };

            match plan_submission(delivery) {
                Submission::Acknowledge => {
                    info!("Contact form acknowledged locally");
                    acknowledge();
                }
                Submission::Deliver { endpoint, timeout_ms } => {
                    info!("Sending contact form to {}", endpoint);
                    form.dispatch(FormAction::Sending);

                    let dispatcher = form.dispatcher();
                    spawn_local(async move {
                        match post_draft(endpoint, timeout_ms, &draft).await {
                            Ok(()) => {
                                info!("Contact form delivered");
                                acknowledge();
                            }
                            Err(e) => {
                                error!("Contact form delivery failed: {:?}", e);
                                dispatcher.dispatch(FormAction::Failed(e.to_string()));
                            }
                        }
                    });
                }
            }
        })
    };

    html! {
        <section id={Section::Contact.id()} class="section contact">
            <div class="contact-grid">
                <div class="contact-form-column">
                    <h2>{"Contacto"}</h2>
                    <p class="section-lead">{"Contame tu proyecto. Te responderé en 24–48h."}</p>

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <input
                                required={true}
                                placeholder="Nombre"
                                value={(*name).clone()}
                                oninput={input_setter(&name)}
                            />
                            <input
                                required={true}
                                type="email"
                                placeholder="Email"
                                value={(*email).clone()}
                                oninput={input_setter(&email)}
                            />
                        </div>
                        <input
                            placeholder="Asunto (opcional)"
                            value={(*subject).clone()}
                            oninput={input_setter(&subject)}
                        />
                        <textarea
                            required={true}
                            placeholder="Mensaje"
                            value={(*message).clone()}
                            oninput={on_message_input}
                        />
                        <button type="submit" class="button-primary" disabled={form.sending}>
                            {if form.sending { "Enviando…" } else { "Enviar mensaje" }}
                            <span class="arrow">{"→"}</span>
                        </button>
                    </form>

                    {
                        match &form.banner {
                            Some(Banner::Sent) => html! {
                                <div class="form-status success" role="status">{ACK_MESSAGE}</div>
                            },
                            Some(Banner::Failed(reason)) => html! {
                                <div class="form-status error" role="alert">{reason.clone()}</div>
                            },
                            None => html! {},
                        }
                    }
                </div>

                <aside class="contact-card">
                    <h3>{"Datos de contacto"}</h3>
                    <ul>
                        <li><span class="contact-icon">{"☎"}</span>{"+34 600 000 000"}</li>
                        <li><span class="contact-icon">{"✉"}</span>{"estudio@arquitecto.com"}</li>
                        <li><span class="contact-icon">{"⌖"}</span>{"Calle Ejemplo 123, Madrid"}</li>
                    </ul>
                    <div class="social-links">
                        <a href="#" aria-label="Instagram">{"Instagram"}</a>
                        <a href="#" aria-label="LinkedIn">{"LinkedIn"}</a>
                    </div>
                </aside>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2.5rem;
                }
                .contact-form {
                    margin-top: 1.5rem;
                    display: grid;
                    gap: 1rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-form input,
                .contact-form textarea {
                    font: inherit;
                    font-size: 0.875rem;
                    padding: 0.75rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border-strong);
                    background: var(--card);
                    color: inherit;
                    outline: none;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    border-color: var(--accent);
                }
                .contact-form textarea {
                    min-height: 130px;
                    resize: vertical;
                }
                .contact-form .button-primary {
                    width: fit-content;
                }
                .contact-form .button-primary:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-status {
                    margin-top: 1rem;
                    padding: 0.75rem 1rem;
                    border-radius: 1rem;
                    font-size: 0.875rem;
                }
                .form-status.success {
                    background: rgba(34, 197, 94, 0.12);
                    border: 1px solid rgba(34, 197, 94, 0.4);
                }
                .form-status.error {
                    background: rgba(239, 68, 68, 0.12);
                    border: 1px solid rgba(239, 68, 68, 0.4);
                }
                .contact-card {
                    align-self: start;
                    padding: 1.25rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .contact-card h3 {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 600;
                }
                .contact-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                    display: grid;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .contact-card li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .social-links {
                    margin-top: 1.25rem;
                    display: flex;
                    gap: 0.75rem;
                }
                .social-links a {
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    color: inherit;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .social-links a:hover {
                    background: var(--hover);
                }
                @media (max-width: 767px) {
                    .contact-grid,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
