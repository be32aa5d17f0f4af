use yew::prelude::*;

struct Service {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    scope: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        id: "tisax",
        icon: "🛡️",
        title: "TISAX® Assessment",
        description: "Full preparation for the Trusted Information Security Assessment Exchange (VDA ISA). Essential for VW, BMW, and Mercedes suppliers.",
        scope: "Gap analysis • Documentation • Pre-audit • Certification support",
    },
    Service {
        id: "tpisr",
        icon: "🗄️",
        title: "TPISR Audit",
        description: "Compliance services for Third-Party Information Security Requirements (Auto-ISAC). Trusted by GM and Ford supply chains.",
        scope: "Risk assessment • Controls implementation • Audit preparation",
    },
    Service {
        id: "iso27001",
        icon: "🔒",
        title: "ISO 27001:2022",
        description: "The gold standard for Information Security Management Systems (ISMS). Build a resilient security framework.",
        scope: "ISMS design • Policy development • Internal audit • Certification",
    },
    Service {
        id: "gdpr",
        icon: "🔑",
        title: "GDPR Compliance",
        description: "Ensure your data handling meets strict EU privacy regulations. Protect personal data and avoid heavy fines.",
        scope: "Data mapping • Privacy impact assessment • Compliance roadmap",
    },
    Service {
        id: "isms",
        icon: "📋",
        title: "ISMS Implementation",
        description: "Build and maintain a comprehensive Information Security Management System tailored to your organization's needs and risk profile.",
        scope: "Framework design • Risk management • Continuous improvement",
    },
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="section">
            <style>
            {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    padding: 2rem;
                    text-align: left;
                    background: var(--surface);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 18px;
                    transition: border-color 0.3s, transform 0.3s;
                }
                .service-card:hover {
                    border-color: var(--primary);
                    transform: scale(1.02);
                }
                .service-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.2rem;
                    height: 3.2rem;
                    margin-bottom: 1.25rem;
                    font-size: 1.5rem;
                    background: rgba(8, 97, 242, 0.1);
                    border-radius: 12px;
                }
                .service-card h3 { margin: 0 0 0.6rem; font-size: 1.15rem; }
                .service-card p {
                    margin: 0 0 1rem;
                    font-size: 0.9rem;
                    line-height: 1.55;
                    opacity: 0.6;
                }
                .service-scope {
                    font-size: 0.78rem;
                    font-family: monospace;
                    color: var(--primary);
                }
            "#}
            </style>
            <div class="section-head">
                <h2>{"Compliance "}<span class="accent">{"Ecosystem"}</span></h2>
                <p>
                    {"We bridge the gap between complex security standards and your business operations. Select your audit path."}
                </p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card" key={service.id}>
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <div class="service-scope">{service.scope}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
