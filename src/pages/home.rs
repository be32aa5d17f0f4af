use crate::assessment::calculator::ReadinessCalculator;
use crate::components::contact::ContactSection;
use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::mesh::SecurityMesh;
use crate::components::navbar::Navbar;
use crate::components::projects::FeaturedProjects;
use crate::components::services::ServicesSection;
use crate::components::testimonials::Testimonials;
use web_sys::MouseEvent;
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let calculator_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_calculator = {
        let calculator_open = calculator_open.clone();
        Callback::from(move |_| calculator_open.set(true))
    };
    let open_calculator_click = {
        let calculator_open = calculator_open.clone();
        Callback::from(move |_: MouseEvent| calculator_open.set(true))
    };
    let close_calculator = {
        let calculator_open = calculator_open.clone();
        Callback::from(move |_| calculator_open.set(false))
    };

    html! {
        <div class="home-page">
            <style>
            {r#"
                .home-page { position: relative; }
                .home-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }
                .section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .section-narrow { max-width: 820px; }
                .section-head { margin-bottom: 3.5rem; }
                .section-head h2 {
                    font-size: 2.6rem;
                    margin: 0 0 1rem;
                    letter-spacing: -0.02em;
                }
                .section-head p {
                    max-width: 38rem;
                    margin: 0 auto;
                    font-size: 1.05rem;
                    opacity: 0.6;
                }
                .section-kicker {
                    display: block;
                    margin-bottom: 1rem;
                    font-family: monospace;
                    font-size: 0.8rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--primary);
                }
                .accent { color: var(--primary); }

                .hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 9rem 1.5rem 7rem;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.35rem 0.9rem;
                    font-family: monospace;
                    font-size: 0.78rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--primary);
                    background: rgba(8, 97, 242, 0.1);
                    border: 1px solid rgba(8, 97, 242, 0.2);
                    border-radius: 999px;
                    margin-bottom: 1.75rem;
                }
                .hero h1 {
                    font-size: clamp(2.8rem, 8vw, 5.5rem);
                    line-height: 1.02;
                    letter-spacing: -0.03em;
                    margin: 0 0 1.5rem;
                }
                .hero h1 .gradient {
                    background: linear-gradient(to right, var(--primary), var(--fg), var(--secondary));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-standards {
                    max-width: 36rem;
                    margin: 0 auto 3rem;
                    font-size: 1.1rem;
                    font-weight: 300;
                    opacity: 0.65;
                }
                .hero-standards strong { font-weight: 600; opacity: 1; }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 1.1rem 2.5rem;
                    font-size: 1.05rem;
                    font-weight: 700;
                    color: var(--primary);
                    background: transparent;
                    border: 1px solid var(--primary);
                    border-radius: 12px;
                    cursor: pointer;
                    text-decoration: none;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .hero-cta:hover {
                    transform: scale(1.04);
                    box-shadow: 0 0 30px rgba(8, 97, 242, 0.2);
                }
                .hero-cta.secondary {
                    border: 2px solid rgba(8, 97, 242, 0.5);
                }
            "#}
            </style>

            <SecurityMesh />
            <Navbar on_start_assessment={open_calculator.clone()} />

            <div class="home-content">
                <header class="hero">
                    <span class="hero-badge">{"Automotive Security Compliance"}</span>
                    <h1>
                        {"Secure Your "}<br />
                        <span class="gradient">{"Digital Future"}</span>
                    </h1>
                    <p class="hero-standards">
                        {"Expert audits for "}<strong>{"TISAX®"}</strong>{", "}
                        <strong>{"ISMS"}</strong>{", "}<strong>{"ISO 27001"}</strong>{", "}
                        <strong>{"GDPR"}</strong>{", and "}<strong>{"TPISR"}</strong>{". "}
                        {"The modern standard for automotive data protection."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_calculator_click}>
                            {"Start Assessment"}
                        </button>
                        <a class="hero-cta secondary" href="#contact">
                            {"Request Compliance Guide"}
                        </a>
                    </div>
                </header>

                <ServicesSection />

                <section class="section section-narrow about-strip">
                    <style>
                    {r#"
                        .about-strip p {
                            font-size: 1.15rem;
                            line-height: 1.8;
                            opacity: 0.7;
                        }
                        .about-strip .about-stats {
                            display: flex;
                            justify-content: center;
                            gap: 3rem;
                            margin-top: 2.5rem;
                            flex-wrap: wrap;
                        }
                        .about-stat { text-align: center; }
                        .about-stat strong {
                            display: block;
                            font-size: 2rem;
                            color: var(--primary);
                        }
                        .about-stat span { font-size: 0.85rem; opacity: 0.5; }
                    "#}
                    </style>
                    <p>
                        {"ITIS Secure is a specialist audit and advisory firm for the automotive supply chain. We prepare suppliers for TISAX® labels, build ISO 27001 management systems that survive recertification, and translate OEM security requirements into controls your engineers can actually live with."}
                    </p>
                    <div class="about-stats">
                        <div class="about-stat"><strong>{"100+"}</strong><span>{"suppliers audited"}</span></div>
                        <div class="about-stat"><strong>{"98%"}</strong><span>{"first-time pass rate"}</span></div>
                        <div class="about-stat"><strong>{"10+"}</strong><span>{"years in automotive security"}</span></div>
                    </div>
                </section>

                <FeaturedProjects />
                <Testimonials />
                <FaqSection />
                <ContactSection />
                <Footer />
            </div>

            <ReadinessCalculator is_open={*calculator_open} on_close={close_calculator} />
        </div>
    }
}
