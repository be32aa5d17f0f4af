use crate::assessment::relay;
use crate::assessment::state::is_valid_email;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

const SERVICE_CHOICES: &[&str] = &["TISAX", "TPISR", "ISO27001", "GDPR", "ISMS", "Other"];

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Contact section: pitch on the left, relay-backed form on the right.
/// Unlike the wizard's report dispatch, a failure here is shown to the
/// visitor — this form is their channel to us.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

    let on_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let service = service.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Loading {
                return;
            }
            if name.trim().is_empty() || message.trim().is_empty() {
                status.set(FormStatus::Error(
                    "Please fill in your name and message.".to_string(),
                ));
                return;
            }
            if !is_valid_email(&email) {
                status.set(FormStatus::Error(
                    "Please enter a valid email address.".to_string(),
                ));
                return;
            }

            status.set(FormStatus::Loading);
            let submission = relay::contact_message(
                name.trim(),
                email.trim(),
                company.trim(),
                &service,
                message.trim(),
            );
            let name = name.clone();
            let email = email.clone();
            let company = company.clone();
            let service = service.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                match submission.send().await {
                    Ok(()) => {
                        name.set(String::new());
                        email.set(String::new());
                        company.set(String::new());
                        service.set(String::new());
                        message.set(String::new());
                        status.set(FormStatus::Success);
                        let status = status.clone();
                        Timeout::new(5_000, move || status.set(FormStatus::Idle)).forget();
                    }
                    Err(_) => {
                        status.set(FormStatus::Error(
                            "Unable to send message. Please try again or contact us directly."
                                .to_string(),
                        ));
                    }
                }
            });
        })
    };

    html! {
        <section id="contact" class="section">
            <style>
            {r#"
                .contact-card {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    padding: 3.5rem;
                    text-align: left;
                    background: var(--surface);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 32px;
                }
                @media (max-width: 900px) {
                    .contact-card { grid-template-columns: 1fr; padding: 2rem; }
                }
                .contact-pitch h2 {
                    font-size: 2.6rem;
                    line-height: 1.05;
                    margin: 0 0 1.25rem;
                }
                .contact-pitch p { opacity: 0.6; max-width: 26rem; }
                .contact-proof {
                    margin-top: 1.5rem;
                    font-size: 0.88rem;
                    opacity: 0.45;
                    line-height: 1.9;
                }
                .contact-form .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                @media (max-width: 560px) {
                    .contact-form .form-row { grid-template-columns: 1fr; }
                }
                .contact-form label {
                    display: block;
                    font-size: 0.82rem;
                    opacity: 0.7;
                    margin-bottom: 0.4rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    margin-bottom: 1.1rem;
                    padding: 0.8rem 1rem;
                    font-size: 0.95rem;
                    font-family: inherit;
                    color: var(--fg);
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 10px;
                }
                .contact-form input:focus,
                .contact-form select:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .contact-form textarea { resize: none; }
                .contact-submit {
                    width: 100%;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    font-weight: 700;
                    color: var(--primary);
                    background: transparent;
                    border: 1px solid var(--primary);
                    border-radius: 10px;
                    cursor: pointer;
                }
                .contact-submit:hover { background: rgba(8, 97, 242, 0.05); }
                .contact-submit:disabled { opacity: 0.5; cursor: not-allowed; }
                .form-status {
                    padding: 0.9rem 1rem;
                    margin-bottom: 1.1rem;
                    font-size: 0.9rem;
                    border-radius: 10px;
                }
                .form-status.success {
                    color: #4ade80;
                    background: rgba(74, 222, 128, 0.1);
                    border: 1px solid rgba(74, 222, 128, 0.2);
                }
                .form-status.error {
                    color: #f87171;
                    background: rgba(248, 113, 113, 0.1);
                    border: 1px solid rgba(248, 113, 113, 0.2);
                }
            "#}
            </style>
            <div class="contact-card">
                <div class="contact-pitch">
                    <h2>{"Ready to be "}<span class="accent">{"Audit Proof?"}</span></h2>
                    <p>
                        {"Don't let compliance hold you back. Partner with ITIS Secure to navigate TISAX, ISO, and TPISR with confidence."}
                    </p>
                    <div class="contact-proof">
                        {"✓ Expert auditors with 10+ years experience"}<br />
                        {"✓ Trusted by 100+ automotive suppliers"}<br />
                        {"✓ 98% first-time pass rate"}
                    </div>
                </div>
                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <div>
                            <label for="name">{"Full Name *"}</label>
                            <input
                                id="name"
                                type="text"
                                required=true
                                placeholder="John Doe"
                                value={(*name).clone()}
                                oninput={on_input(&name)}
                            />
                        </div>
                        <div>
                            <label for="email">{"Email Address *"}</label>
                            <input
                                id="email"
                                type="email"
                                required=true
                                placeholder="john@company.com"
                                value={(*email).clone()}
                                oninput={on_input(&email)}
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div>
                            <label for="company">{"Company Name"}</label>
                            <input
                                id="company"
                                type="text"
                                placeholder="Your Company"
                                value={(*company).clone()}
                                oninput={on_input(&company)}
                            />
                        </div>
                        <div>
                            <label for="service">{"Service Interest"}</label>
                            <select
                                id="service"
                                onchange={{
                                    let service = service.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        service.set(select.value());
                                    })
                                }}
                            >
                                <option value="" selected={service.is_empty()}>{"Select a service"}</option>
                                { for SERVICE_CHOICES.iter().map(|choice| html! {
                                    <option value={*choice} selected={*service == *choice}>{choice}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <label for="message">{"Message *"}</label>
                    <textarea
                        id="message"
                        rows="5"
                        required=true
                        placeholder="Tell us about your compliance needs..."
                        value={(*message).clone()}
                        oninput={on_input(&message)}
                    />
                    {
                        match &*status {
                            FormStatus::Success => html! {
                                <div class="form-status success">
                                    {"Message sent successfully! We'll get back to you soon."}
                                </div>
                            },
                            FormStatus::Error(text) => html! {
                                <div class="form-status error">{text}</div>
                            },
                            _ => html! {},
                        }
                    }
                    <button
                        type="submit"
                        class="contact-submit"
                        disabled={*status == FormStatus::Loading}
                    >
                        { if *status == FormStatus::Loading { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </div>
        </section>
    }
}
