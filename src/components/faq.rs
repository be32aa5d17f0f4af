use web_sys::MouseEvent;
use yew::prelude::*;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is TISAX and why do I need it?",
        answer: "TISAX (Trusted Information Security Assessment Exchange) is the automotive industry's standard for information security assessments. It's required by major OEMs (like BMW, Volkswagen, Daimler) for suppliers handling sensitive data. Without TISAX certification, you may lose existing contracts or be excluded from new business opportunities in the automotive supply chain.",
    },
    FaqEntry {
        question: "How long does TISAX certification take?",
        answer: "The timeline varies based on your current security maturity. Typically, gap analysis takes 1-2 weeks, remediation 2-6 months, and the audit itself 3-5 days. With our proven methodology, most clients achieve certification within 4-6 months from initial assessment to final approval.",
    },
    FaqEntry {
        question: "What are the different TISAX assessment levels?",
        answer: "TISAX has three assessment levels: AL1 (self-assessment), AL2 (3rd party audit for normal protection needs), and AL3 (enhanced audit for high protection needs). Most automotive suppliers require AL2 or AL3. The level depends on the type of data you handle and your customer's requirements.",
    },
    FaqEntry {
        question: "How much does TISAX certification cost?",
        answer: "Costs vary based on company size, scope, and current security posture. Typical investments range from €15,000-€50,000 including gap analysis, remediation support, audit fees, and certification. We provide transparent pricing after an initial assessment of your specific needs.",
    },
    FaqEntry {
        question: "Is TISAX the same as ISO 27001?",
        answer: "No, but they're closely related. TISAX is based on ISO 27001 but adds automotive-specific requirements like prototype protection and VDA ISA catalog controls. Having ISO 27001 certification significantly reduces TISAX preparation time, but you'll still need automotive-specific controls implemented.",
    },
    FaqEntry {
        question: "How often do I need to renew TISAX certification?",
        answer: "TISAX assessments are valid for 3 years. However, you must maintain your security controls continuously and may need surveillance audits. If your scope changes significantly (new locations, major process changes), you may need a reassessment before the 3-year period ends.",
    },
    FaqEntry {
        question: "What happens if I fail the TISAX audit?",
        answer: "TISAX uses a maturity-based scoring system rather than pass/fail. You receive a detailed report showing compliance levels for each control. If gaps are identified, you'll have time to remediate and request a follow-up assessment. Our 98% first-time success rate minimizes this risk through thorough preparation.",
    },
    FaqEntry {
        question: "Can I use one TISAX assessment for multiple customers?",
        answer: "Yes! That's the key benefit of TISAX. Once certified, your assessment results are shared via the ENX portal with all participating automotive OEMs and suppliers. You don't need separate audits for each customer—one TISAX label satisfies all participants.",
    },
    FaqEntry {
        question: "What documentation do I need for TISAX?",
        answer: "You'll need an Information Security Management System (ISMS) with policies, procedures, risk assessments, asset inventories, incident response plans, and evidence of implementation. We provide templates and guidance to streamline documentation creation based on your existing processes.",
    },
    FaqEntry {
        question: "Do you offer ongoing support after certification?",
        answer: "Absolutely. We provide post-certification support including annual compliance reviews, security awareness training, incident response assistance, and preparation for recertification. Many clients retain us as their virtual CISO for continuous security management.",
    },
];

/// Accordion with at most one entry open; opening another closes the last.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section section-narrow">
            <style>
            {r#"
                .faq-item {
                    margin-bottom: 1rem;
                    text-align: left;
                    background: var(--surface);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 14px;
                    overflow: hidden;
                }
                .faq-item.open { border-color: rgba(8, 97, 242, 0.4); }
                .faq-question {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    width: 100%;
                    padding: 1.2rem 1.5rem;
                    border: none;
                    background: none;
                    color: var(--fg);
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-toggle-icon { color: var(--primary); font-size: 1.2rem; }
                .faq-answer {
                    padding: 0 1.5rem 1.3rem;
                    font-size: 0.93rem;
                    line-height: 1.65;
                    opacity: 0.65;
                }
            "#}
            </style>
            <div class="section-head">
                <h2>{"Frequently Asked Questions"}</h2>
                <p>{"Everything you need to know about TISAX certification"}</p>
            </div>
            <div>
                { for FAQS.iter().enumerate().map(|(index, entry)| {
                    let is_open = *open_index == Some(index);
                    let toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open_index.set(if is_open { None } else { Some(index) });
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))} key={entry.question}>
                            <button class="faq-question" onclick={toggle}>
                                <span>{entry.question}</span>
                                <span class="faq-toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            if is_open {
                                <div class="faq-answer">{entry.answer}</div>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
