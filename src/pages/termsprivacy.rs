use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-page">
            <style>
            {r#"
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    text-align: left;
                }
                .legal-page h1 { font-size: 2.2rem; margin-bottom: 2rem; }
                .legal-page h2 { font-size: 1.2rem; margin: 2rem 0 0.75rem; }
                .legal-page p { line-height: 1.7; opacity: 0.7; }
                .legal-back { color: var(--primary); text-decoration: none; font-size: 0.9rem; }
            "#}
            </style>
            <Link<Route> to={Route::Home} classes="legal-back">{"← Back to site"}</Link<Route>>
            <h1>{props.title}</h1>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <h2>{"Engagements"}</h2>
            <p>
                {"Advisory and audit-preparation engagements are governed by the individual statement of work agreed with each client. Nothing on this website constitutes a certification decision; TISAX® labels are issued exclusively by ENX-approved audit providers."}
            </p>
            <h2>{"Website use"}</h2>
            <p>
                {"The readiness assessment on this site produces an indicative score based on self-reported answers. It is a planning aid, not an audit result, and carries no guarantee of assessment outcomes."}
            </p>
            <h2>{"Liability"}</h2>
            <p>
                {"Content on this site is provided for general information and may change without notice. We accept no liability for decisions taken solely on the basis of this material."}
            </p>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <h2>{"What we collect"}</h2>
            <p>
                {"The contact form and the readiness assessment send the details you enter (name, email, company, message, and your assessment answers) to our form processing provider so we can respond to you. Nothing is stored in this application beyond your browser session; your theme preference is kept locally in your browser."}
            </p>
            <h2>{"What we do not do"}</h2>
            <p>
                {"No advertising trackers, no analytics pipeline, no sale of personal data. Assessment results are emailed to the address you provide and are not retained here."}
            </p>
            <h2>{"Your rights"}</h2>
            <p>
                {"Under the GDPR you may request access to, correction of, or deletion of personal data you have sent us through the contact form. Use the same form to reach us about any of these requests."}
            </p>
        </LegalPage>
    }
}
