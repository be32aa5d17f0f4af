use crate::assessment::relay;
use crate::assessment::state::{Assessment, Step};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

// Matches the selection highlight animation before the step slides over.
const ADVANCE_DELAY_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum CalculatorMsg {
    Select(usize),
    Advance,
    Back,
    EmailInput(String),
    Submit,
    Restart,
    Close,
}

/// Modal wizard: four questions, a lead-capture step, then the scored
/// results. All session state lives here and dies with close.
pub struct ReadinessCalculator {
    assessment: Assessment,
    email_error: Option<String>,
    pending_advance: Option<Timeout>,
}

impl ReadinessCalculator {
    fn reset(&mut self) {
        self.assessment = Assessment::new();
        self.email_error = None;
        self.pending_advance = None;
    }

    fn dispatch_report(&self) {
        let submission = relay::assessment_report(
            self.assessment.email(),
            self.assessment.score_percent(),
            &self.assessment.report(),
        );
        // Fire and forget: the results screen never waits on the relay.
        spawn_local(async move {
            if let Err(err) = submission.send().await {
                log!("assessment report dispatch failed:", err.to_string());
            }
        });
    }
}

impl Component for ReadinessCalculator {
    type Message = CalculatorMsg;
    type Properties = CalculatorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReadinessCalculator {
            assessment: Assessment::new(),
            email_error: None,
            pending_advance: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Closing throws the session away; reopening starts fresh.
        if old_props.is_open && !ctx.props().is_open {
            self.reset();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CalculatorMsg::Select(option_index) => {
                if self.assessment.record_answer(option_index) {
                    let link = ctx.link().clone();
                    // Replacing the handle cancels any advance still pending.
                    self.pending_advance = Some(Timeout::new(ADVANCE_DELAY_MS, move || {
                        link.send_message(CalculatorMsg::Advance);
                    }));
                }
                true
            }
            CalculatorMsg::Advance => {
                self.pending_advance = None;
                self.assessment.advance();
                true
            }
            CalculatorMsg::Back => {
                self.pending_advance = None;
                self.email_error = None;
                self.assessment.back();
                true
            }
            CalculatorMsg::EmailInput(value) => {
                self.email_error = None;
                self.assessment.set_email(value);
                true
            }
            CalculatorMsg::Submit => {
                match self.assessment.submit() {
                    Ok(()) => {
                        self.email_error = None;
                        self.dispatch_report();
                    }
                    Err(err) => self.email_error = Some(err.to_string()),
                }
                true
            }
            CalculatorMsg::Restart => {
                self.reset();
                true
            }
            CalculatorMsg::Close => {
                self.reset();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| CalculatorMsg::Close);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="calc-overlay" onclick={close.clone()}>
                <style>
                {r#"
                    .calc-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(11, 14, 20, 0.8);
                        backdrop-filter: blur(12px);
                    }
                    .calc-card {
                        position: relative;
                        width: 100%;
                        max-width: 640px;
                        background: var(--surface);
                        border: 1px solid rgba(8, 97, 242, 0.3);
                        border-radius: 24px;
                        overflow: hidden;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.4);
                    }
                    .calc-progress {
                        height: 4px;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .calc-progress-fill {
                        height: 100%;
                        background: linear-gradient(to right, var(--primary), #3b82f6);
                        transition: width 0.2s linear;
                    }
                    .calc-close {
                        position: absolute;
                        top: 1.25rem;
                        right: 1.25rem;
                        border: none;
                        border-radius: 8px;
                        padding: 0.4rem 0.7rem;
                        background: rgba(255, 255, 255, 0.05);
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1rem;
                        cursor: pointer;
                        z-index: 2;
                    }
                    .calc-close:hover { background: rgba(255, 255, 255, 0.1); }
                    .calc-body { padding: 2.5rem; }
                    .calc-step-label {
                        font-family: monospace;
                        font-size: 0.85rem;
                        color: var(--primary);
                        margin-bottom: 0.5rem;
                    }
                    .calc-body h3 {
                        font-size: 1.7rem;
                        margin: 0 0 0.5rem;
                        color: var(--fg);
                    }
                    .calc-prompt {
                        font-size: 1.05rem;
                        color: rgba(255, 255, 255, 0.7);
                        margin-bottom: 2rem;
                    }
                    .calc-option {
                        display: block;
                        width: 100%;
                        padding: 1.1rem 1.25rem;
                        margin-bottom: 0.75rem;
                        text-align: left;
                        font-size: 1rem;
                        font-weight: 500;
                        color: var(--fg);
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        cursor: pointer;
                        transition: border-color 0.2s, background 0.2s;
                    }
                    .calc-option:hover {
                        border-color: rgba(8, 97, 242, 0.5);
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .calc-option.selected {
                        border-color: var(--primary);
                        background: rgba(8, 97, 242, 0.1);
                    }
                    .calc-back {
                        margin-top: 1.5rem;
                        border: none;
                        background: none;
                        color: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        font-size: 0.95rem;
                    }
                    .calc-back:hover { color: var(--fg); }
                    .calc-lead { text-align: center; }
                    .calc-lead p {
                        color: rgba(255, 255, 255, 0.6);
                        margin-bottom: 2rem;
                    }
                    .calc-lead input[type="email"] {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 1.25rem;
                        margin-bottom: 1rem;
                        font-size: 1rem;
                        color: var(--fg);
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                    }
                    .calc-lead input[type="email"]:focus {
                        outline: none;
                        border-color: var(--primary);
                    }
                    .calc-submit {
                        width: 100%;
                        padding: 1rem 2rem;
                        font-size: 1rem;
                        font-weight: 700;
                        color: var(--primary);
                        background: transparent;
                        border: 1px solid var(--primary);
                        border-radius: 12px;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .calc-submit:hover { background: rgba(8, 97, 242, 0.05); }
                    .calc-error {
                        color: #f87171;
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }
                    .calc-results { text-align: center; }
                    .calc-score {
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: var(--primary);
                        line-height: 1;
                        margin-bottom: 0.5rem;
                    }
                    .calc-tier { font-size: 1.3rem; font-weight: 600; margin-bottom: 0.25rem; }
                    .tier-green { color: #4ade80; }
                    .tier-blue { color: #60a5fa; }
                    .tier-amber { color: #fbbf24; }
                    .tier-red { color: #f87171; }
                    .calc-guidance { color: rgba(255, 255, 255, 0.5); margin-bottom: 2rem; }
                    .calc-breakdown {
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 16px;
                        padding: 1.5rem;
                        margin-bottom: 2rem;
                        text-align: left;
                    }
                    .calc-breakdown h4 {
                        font-family: monospace;
                        font-size: 0.8rem;
                        color: var(--primary);
                        margin: 0 0 1rem;
                    }
                    .calc-breakdown-row {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.6rem;
                        font-size: 0.95rem;
                    }
                    .calc-breakdown-row span:first-child { color: rgba(255, 255, 255, 0.7); }
                    .answer-full { color: #4ade80; font-weight: 600; }
                    .answer-partial { color: #fbbf24; font-weight: 600; }
                    .answer-none { color: #f87171; font-weight: 600; }
                    .calc-cta {
                        display: block;
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 2rem;
                        margin-bottom: 0.75rem;
                        font-weight: 700;
                        text-align: center;
                        text-decoration: none;
                        border-radius: 12px;
                        cursor: pointer;
                    }
                    .calc-cta.primary {
                        color: var(--primary);
                        border: 1px solid var(--primary);
                        background: transparent;
                    }
                    .calc-cta.primary:hover { background: rgba(8, 97, 242, 0.05); }
                    .calc-cta.secondary {
                        color: var(--secondary);
                        border: 1px solid rgba(0, 242, 255, 0.5);
                        background: transparent;
                    }
                    .calc-cta.secondary:hover { background: rgba(0, 242, 255, 0.1); }
                    .calc-restart {
                        margin-top: 1rem;
                        border: none;
                        background: none;
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.9rem;
                        cursor: pointer;
                    }
                    .calc-restart:hover { color: var(--fg); }
                    @media (max-width: 640px) {
                        .calc-body { padding: 1.5rem; }
                        .calc-score { font-size: 3.5rem; }
                    }
                "#}
                </style>
                <div class="calc-card" onclick={keep_open}>
                    <div class="calc-progress">
                        <div
                            class="calc-progress-fill"
                            style={format!("width: {}%;", self.assessment.progress_percent())}
                        />
                    </div>
                    <button class="calc-close" onclick={close}>{"✕"}</button>
                    <div class="calc-body">
                        {
                            match self.assessment.step() {
                                Step::Question(index) => self.view_question(ctx, index),
                                Step::LeadCapture => self.view_lead_capture(ctx),
                                Step::Results => self.view_results(ctx),
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl ReadinessCalculator {
    fn view_question(&self, ctx: &Context<Self>, index: usize) -> Html {
        let Some(question) = self.assessment.current_question() else {
            return html! {};
        };
        let selected_label = self
            .assessment
            .sheet()
            .answer_for(question.id)
            .map(|a| a.label);

        html! {
            <div>
                <p class="calc-step-label">
                    {format!("STEP {} OF {}", index + 1, self.assessment.question_count())}
                </p>
                <h3>{question.category}</h3>
                <p class="calc-prompt">{question.prompt}</p>
                <div>
                    { for question.options.iter().enumerate().map(|(i, option)| {
                        let selected = selected_label == Some(option.label);
                        html! {
                            <button
                                class={classes!("calc-option", selected.then(|| "selected"))}
                                onclick={ctx.link().callback(move |_| CalculatorMsg::Select(i))}
                            >
                                {option.label}
                            </button>
                        }
                    }) }
                </div>
                if index > 0 {
                    <button class="calc-back" onclick={ctx.link().callback(|_| CalculatorMsg::Back)}>
                        {"← Previous"}
                    </button>
                }
            </div>
        }
    }

    fn view_lead_capture(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            CalculatorMsg::EmailInput(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            CalculatorMsg::Submit
        });

        html! {
            <div class="calc-lead">
                <h3>{"Get Your Results"}</h3>
                <p>{"Enter your work email to receive your personalized Gap Analysis report"}</p>
                if let Some(error) = &self.email_error {
                    <p class="calc-error">{error}</p>
                }
                <form {onsubmit}>
                    <input
                        type="email"
                        required=true
                        placeholder="your.email@company.com"
                        value={self.assessment.email().to_string()}
                        {oninput}
                    />
                    <button type="submit" class="calc-submit">{"View My Results →"}</button>
                </form>
                <button class="calc-back" onclick={ctx.link().callback(|_| CalculatorMsg::Back)}>
                    {"← Previous"}
                </button>
            </div>
        }
    }

    fn view_results(&self, ctx: &Context<Self>) -> Html {
        let tier = self.assessment.tier();
        let close_to_contact = ctx.link().callback(|_: MouseEvent| CalculatorMsg::Close);

        html! {
            <div class="calc-results">
                <h3>{"Your TISAX Readiness Score"}</h3>
                <div class="calc-score">{format!("{}%", self.assessment.score_percent())}</div>
                <div class={classes!("calc-tier", tier.css_class())}>{tier.label()}</div>
                <p class="calc-guidance">{tier.guidance()}</p>

                <div class="calc-breakdown">
                    <h4>{"BREAKDOWN"}</h4>
                    { for self.assessment.sheet().iter().map(|answer| {
                        let class = if answer.weight == answer.out_of {
                            "answer-full"
                        } else if answer.weight > 0 {
                            "answer-partial"
                        } else {
                            "answer-none"
                        };
                        html! {
                            <div class="calc-breakdown-row" key={answer.question_id}>
                                <span>{answer.category}</span>
                                <span class={class}>{answer.label}</span>
                            </div>
                        }
                    }) }
                </div>

                <a class="calc-cta primary" href="#contact" onclick={close_to_contact.clone()}>
                    {"📅 Book TISAX Consultation"}
                </a>
                <a class="calc-cta secondary" href="#contact" onclick={close_to_contact}>
                    {"📥 Request Full Gap Analysis"}
                </a>

                <button class="calc-restart" onclick={ctx.link().callback(|_| CalculatorMsg::Restart)}>
                    {"Start New Assessment"}
                </button>
            </div>
        }
    }
}
