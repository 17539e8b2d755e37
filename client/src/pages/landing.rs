//! Marketing landing page with the lead qualification form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route of the site. It owns one `LeadForm` for the lifetime of the
//! mount: inputs edit it, submit validates it and hands valid leads to the
//! `LeadSinkHandle` from context. Once a lead is accepted the form section is
//! replaced by a thank-you panel for good.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::lead_field::LeadField;
use crate::components::logo::Logo;
use crate::components::site_footer::SiteFooter;
use crate::content::{
    FORM_INTRO, FORM_SUBMIT, FORM_TITLE, HERO_CTA, HERO_SUBTITLE, HERO_TITLE, PAIN_POINTS, PROBLEM_INTRO,
    PROBLEM_TITLE, QUALIFICATION_FIELDS, SINK_FAILURE_ALERT, SOLUTION_BODY, SOLUTION_TITLE, THANKS_BODY,
    THANKS_TITLE,
};
use crate::net::lead_sink::{LeadSink, LeadSinkHandle};
use crate::state::lead_form::{LeadForm, SubmitOutcome, VALIDATION_ALERT};
use crate::util::alert::blocking_alert;
use crate::util::clock::current_year;

/// Anchor id of the qualification section; the hero CTA links here.
pub const QUALIFY_ANCHOR: &str = "qualificar";

#[component]
pub fn LandingPage() -> impl IntoView {
    let sink = use_context::<LeadSinkHandle>().unwrap_or_default();
    let form = RwSignal::new(LeadForm::new(QUALIFICATION_FIELDS));
    let year = current_year();

    view! {
        <div class="landing">
            <header class="landing__header">
                <div class="landing__container landing__container--header">
                    <Logo/>
                </div>
            </header>

            <main class="landing__main">
                <section id="hero" class="hero">
                    <div class="hero__inner">
                        <h1 class="landing__heading landing__heading--hero">{HERO_TITLE}</h1>
                        <p class="hero__subtitle">{HERO_SUBTITLE}</p>
                        <a href=format!("#{QUALIFY_ANCHOR}") class="landing__cta">
                            {HERO_CTA}
                        </a>
                    </div>
                </section>

                <section id="solucao" class="problem">
                    <div class="landing__container">
                        <div class="problem__intro">
                            <h2 class="landing__heading">{PROBLEM_TITLE}</h2>
                            <p class="landing__lead">{PROBLEM_INTRO}</p>
                        </div>
                        <div class="problem__grid">
                            {PAIN_POINTS
                                .iter()
                                .map(|point| {
                                    view! {
                                        <div class="problem__card">
                                            <h3 class="problem__card-title">{point.title}</h3>
                                            <p class="problem__card-body">{point.body}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="solution">
                            <h2 class="landing__heading">{SOLUTION_TITLE}</h2>
                            <p class="solution__body">{SOLUTION_BODY}</p>
                        </div>
                    </div>
                </section>

                <QualifySection form=form sink=sink/>
            </main>

            <SiteFooter year=year/>
        </div>
    }
}

/// The `#qualificar` section: the form while `Form`, the thank-you panel once
/// `Thanked`.
#[component]
pub fn QualifySection(form: RwSignal<LeadForm>, sink: LeadSinkHandle) -> impl IntoView {
    let on_edit = Callback::new(move |(name, value): (&'static str, String)| {
        form.update(|f| {
            f.edit(name, value);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = deliver_lead(form, sink.sink());
        if let SubmitOutcome::Rejected(failure) = &outcome {
            leptos::logging::warn!("lead form incomplete: {:?}", failure.fields);
        }
        if let SubmitOutcome::SinkFailed(err) = &outcome {
            leptos::logging::error!("lead sink failed: {err}");
        }
        if let Some(message) = outcome_alert(&outcome) {
            blocking_alert(message);
        }
    };

    let submitted = move || form.with(|f| f.status().is_submitted());

    view! {
        <section id=QUALIFY_ANCHOR class="qualify">
            <div class="qualify__inner">
                <Show
                    when=move || !submitted()
                    fallback=|| {
                        view! {
                            <div class="qualify__thanks">
                                <h2 class="qualify__thanks-title">{THANKS_TITLE}</h2>
                                <p class="qualify__thanks-body">{THANKS_BODY}</p>
                            </div>
                        }
                    }
                >
                    <div class="qualify__intro">
                        <h2 class="landing__heading">{FORM_TITLE}</h2>
                        <p class="landing__lead">{FORM_INTRO}</p>
                    </div>
                    <form novalidate=true class="qualify__form" on:submit=on_submit.clone()>
                        {QUALIFICATION_FIELDS
                            .iter()
                            .map(|field| {
                                let name = field.name;
                                let value = Signal::derive(move || form.with(|f| f.value(name).to_owned()));
                                view! { <LeadField field=*field value=value on_edit=on_edit/> }
                            })
                            .collect_view()}
                        <div class="qualify__actions">
                            <button class="landing__cta landing__cta--block" type="submit">
                                {FORM_SUBMIT}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </section>
    }
}

/// Submit `form` to `sink`.
///
/// Validation runs under a read borrow and the sink is called with no borrow
/// held. The signal is only written when the lead is accepted.
fn deliver_lead(form: RwSignal<LeadForm>, sink: &dyn LeadSink) -> SubmitOutcome {
    let lead = match form.with_untracked(LeadForm::pending_lead) {
        Ok(lead) => lead,
        Err(outcome) => return outcome,
    };
    if let Err(err) = sink.submit_lead(&lead) {
        return SubmitOutcome::SinkFailed(err);
    }
    form.update(LeadForm::mark_submitted);
    SubmitOutcome::Accepted
}

/// Alert text for a submit outcome, if the visitor needs to be told.
fn outcome_alert(outcome: &SubmitOutcome) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::Rejected(_) => Some(VALIDATION_ALERT),
        SubmitOutcome::SinkFailed(_) => Some(SINK_FAILURE_ALERT),
        SubmitOutcome::Accepted | SubmitOutcome::Ignored => None,
    }
}
