use chrono::{Datelike, Local};
use yew::prelude::*;

pub fn copyright_notice(year: i32) -> String {
    format!("© {} Estudio de Arquitectura. Todos los derechos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="page-footer">
            <div class="footer-content">
                <p>{copyright_notice(year)}</p>
                <div class="footer-links">
                    <a href="#aviso">{"Aviso legal"}</a>
                    <a href="#privacidad">{"Privacidad"}</a>
                </div>
            </div>

            <style>
                {r#"
                .page-footer {
                    border-top: 1px solid var(--border);
                    background: var(--surface);
                    padding: 2rem 0;
                    font-size: 0.75rem;
                    color: var(--subtle);
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-content p {
                    margin: 0;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    text-decoration: underline;
                }
                @media (max-width: 767px) {
                    .footer-content {
                        flex-direction: column;
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_carries_the_year() {
        assert_eq!(
            copyright_notice(2026),
            "© 2026 Estudio de Arquitectura. Todos los derechos reservados."
        );
    }
}
