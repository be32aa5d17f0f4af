use yew::prelude::*;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "ITIS Secure took us from a failed self-assessment to a clean AL2 label in under five months. The gap analysis alone was worth the engagement.",
        name: "M. Keller",
        role: "Head of IT, Tier-1 Interior Supplier",
    },
    Testimonial {
        quote: "Their auditors speak both VDA ISA and engineering. Our teams finally understood what the controls were for instead of just checking boxes.",
        name: "S. Varga",
        role: "CISO, EV Components Manufacturer",
    },
    Testimonial {
        quote: "We run TISAX, ISO 27001 and GDPR reviews through one partner now. One framework, one set of evidence, three certificates.",
        name: "J. Lindqvist",
        role: "Compliance Director, Logistics Group",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section">
            <style>
            {r#"
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .testimonial-card {
                    padding: 2rem;
                    text-align: left;
                    background: var(--surface);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 18px;
                }
                .testimonial-quote {
                    font-size: 0.95rem;
                    line-height: 1.65;
                    opacity: 0.75;
                    margin: 0 0 1.5rem;
                }
                .testimonial-quote::before { content: "“"; color: var(--primary); }
                .testimonial-quote::after { content: "”"; color: var(--primary); }
                .testimonial-name { font-weight: 700; font-size: 0.9rem; }
                .testimonial-role { font-size: 0.8rem; opacity: 0.5; }
            "#}
            </style>
            <div class="section-head">
                <h2>{"Trusted by "}<span class="accent">{"Suppliers"}</span></h2>
            </div>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div class="testimonial-card" key={t.name}>
                        <p class="testimonial-quote">{t.quote}</p>
                        <div class="testimonial-name">{t.name}</div>
                        <div class="testimonial-role">{t.role}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
