use yew::prelude::*;

struct CaseStudy {
    icon: &'static str,
    title: &'static str,
    client: &'static str,
    description: &'static str,
    impact: &'static str,
    category: &'static str,
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        icon: "🛡️",
        title: "Global Tier-1 Supplier ISMS",
        client: "Automotive Manufacturing Leader",
        description: "Full-scale ISO 27001 & TISAX® implementation across 12 international locations. Established a unified security framework and automated compliance monitoring.",
        impact: "100% Audit Success Rate",
        category: "Audit & Compliance",
    },
    CaseStudy {
        icon: "⚡",
        title: "Connected Vehicle Security",
        client: "European EV Start-up",
        description: "Designed and implemented a secure TPISR-compliant cloud architecture for vehicle telemetry mapping, ensuring robust data protection and sovereign cloud alignment.",
        impact: "TPISR Certification Secured",
        category: "Cloud Security",
    },
    CaseStudy {
        icon: "🎯",
        title: "Governance Transformation",
        client: "Multinational Logistics Group",
        description: "Transitioned a legacy governance model into a high-performance integrated risk management system, reducing audit overhead by 40% while enhancing threat visibility.",
        impact: "40% Efficiency Gain",
        category: "Risk Management",
    },
];

#[function_component(FeaturedProjects)]
pub fn featured_projects() -> Html {
    html! {
        <section class="section">
            <style>
            {r#"
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    padding: 2rem;
                    text-align: left;
                    background: var(--surface);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 18px;
                }
                .project-card:hover { border-color: rgba(8, 97, 242, 0.4); }
                .project-top {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.25rem;
                }
                .project-top .project-icon { font-size: 1.6rem; }
                .project-category {
                    font-family: monospace;
                    font-size: 0.72rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: var(--primary);
                }
                .project-card h3 { margin: 0 0 0.25rem; font-size: 1.2rem; }
                .project-client { font-size: 0.85rem; opacity: 0.5; margin-bottom: 1rem; }
                .project-card p {
                    font-size: 0.92rem;
                    line-height: 1.6;
                    opacity: 0.65;
                    margin: 0 0 1.25rem;
                }
                .project-impact {
                    display: inline-block;
                    padding: 0.35rem 0.8rem;
                    font-size: 0.8rem;
                    font-weight: 700;
                    color: #4ade80;
                    background: rgba(74, 222, 128, 0.1);
                    border-radius: 999px;
                }
            "#}
            </style>
            <div class="section-head">
                <span class="section-kicker">{"Success Stories"}</span>
                <h2>{"Impact Through "}<span class="accent">{"Precision"}</span></h2>
                <p>
                    {"We don't just advise; we deliver tangible security resilience. Explore how we've helped industry leaders navigate complex compliance landscapes."}
                </p>
            </div>
            <div class="projects-grid">
                { for CASE_STUDIES.iter().map(|study| html! {
                    <div class="project-card" key={study.title}>
                        <div class="project-top">
                            <span class="project-icon">{study.icon}</span>
                            <span class="project-category">{study.category}</span>
                        </div>
                        <h3>{study.title}</h3>
                        <div class="project-client">{study.client}</div>
                        <p>{study.description}</p>
                        <span class="project-impact">{study.impact}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
