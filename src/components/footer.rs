use crate::Route;
use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
            {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: var(--surface);
                    padding: 4rem 1.5rem 2rem;
                    text-align: left;
                }
                .footer-grid {
                    max-width: 1100px;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; gap: 2rem; }
                }
                .footer-brand h3 { margin: 0 0 1rem; font-size: 1.2rem; }
                .footer-brand p {
                    font-size: 0.9rem;
                    line-height: 1.6;
                    opacity: 0.5;
                    max-width: 24rem;
                }
                .footer-col h4 {
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    color: var(--primary);
                    margin: 0 0 1rem;
                }
                .footer-col a {
                    display: block;
                    margin-bottom: 0.6rem;
                    font-size: 0.9rem;
                    color: var(--fg);
                    opacity: 0.6;
                    text-decoration: none;
                }
                .footer-col a:hover { opacity: 1; color: var(--primary); }
                .footer-bottom {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.82rem;
                    opacity: 0.4;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
            "#}
            </style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"ITIS Secure"}</h3>
                    <p>
                        {"World-class security audit firm specializing in TISAX, ISO 27001, and automotive compliance standards."}
                    </p>
                </div>
                <div class="footer-col">
                    <h4>{"Services"}</h4>
                    <a href="#services">{"TISAX® Assessment"}</a>
                    <a href="#services">{"TPISR Audit"}</a>
                    <a href="#services">{"ISO 27001:2022"}</a>
                    <a href="#services">{"GDPR Compliance"}</a>
                </div>
                <div class="footer-col">
                    <h4>{"Company"}</h4>
                    <a href="#faq">{"FAQ"}</a>
                    <a href="#contact">{"Contact"}</a>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} ITIS Secure. All rights reserved.", year)}</span>
                <span>{"TISAX® is a registered trademark of the ENX Association."}</span>
            </div>
        </footer>
    }
}
