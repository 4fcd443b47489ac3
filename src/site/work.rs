//! "Our Work" page: intro, case studies, testimonial, client grid, contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route handler loads case studies and passes them in already ordered.
//! Nothing here sorts, filters, or pages the records.
//!
//! PRESENTATION RULES
//! ==================
//! Two visual rules depend only on position, never on record content:
//! - the first two case study logos get the featured (dark, full-height)
//!   treatment, the rest render as fixed squares (`logo_treatment`);
//! - client grid items get a top offset when they sit in the first row of the
//!   2/3/4-column layout (`client_border_class`).

use leptos::prelude::*;

use super::PageMeta;
use super::clients::{CLIENTS, ClientLogo, MINLANDSBY_LOGO};
use super::components::{Blockquote, Border, ContactSection, Container, FadeIn, PageIntro, Testimonial};
use crate::content::CaseStudy;
use crate::content::date::format_date;

pub const WORK_META: PageMeta = PageMeta {
    title: "Our Work",
    description: "We believe in efficiency and maximizing our resources to provide the best value to our clients.",
};

/// Number of leading case studies whose logo gets the featured treatment.
const FEATURED_LOGO_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoTreatment {
    /// Full-height logo on a dark plate.
    Featured,
    /// Fixed square logo.
    Square,
}

impl LogoTreatment {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Featured => "h-16 flex-none bg-slate-950",
            Self::Square => "h-16 w-16 flex-none",
        }
    }
}

/// Logo treatment for the case study at `index` in display order.
#[must_use]
pub fn logo_treatment(index: usize) -> LogoTreatment {
    if index < FEATURED_LOGO_COUNT { LogoTreatment::Featured } else { LogoTreatment::Square }
}

/// Border offset classes for the client grid item at `index`.
///
/// The grid has 2 columns by default, 3 from `sm` and 4 from `lg`; items in
/// the first row at a breakpoint pull up by a pixel so their rule overlaps
/// the grid's top rule.
#[must_use]
pub fn client_border_class(index: usize) -> &'static str {
    match index {
        0 | 1 => "pt-12 -mt-px",
        2 => "pt-12 sm:-mt-px",
        3 => "pt-12 lg:-mt-px",
        _ => "pt-12",
    }
}

/// The full work page body.
#[component]
pub fn WorkPage(case_studies: Vec<CaseStudy>) -> impl IntoView {
    view! {
        <PageIntro eyebrow="Our work" title="Proven solutions for real-world problems.">
            <p>
                "We believe in efficiency and maximizing our resources to provide the best value to our clients. "
                "The primary way we do that is by re-using the open source projects that thousands of people "
                "have been developing for the past decade."
            </p>
        </PageIntro>

        <CaseStudies case_studies=case_studies/>

        <Testimonial class="mt-24 sm:mt-32 lg:mt-40" client_name="MinLandsby" client_logo=MINLANDSBY_LOGO>
            "We approached "<em>"Techveda"</em>" because we loved their past work. They delivered something "
            "remarkably similar in record time."
        </Testimonial>

        <Clients/>

        <ContactSection/>
    }
}

/// Case study cards in the order given.
#[component]
pub fn CaseStudies(case_studies: Vec<CaseStudy>) -> impl IntoView {
    view! {
        <Container class="mt-40">
            <FadeIn>
                <h2 class="font-display text-2xl font-semibold text-neutral-950">"Case studies"</h2>
            </FadeIn>
            <div class="mt-10 space-y-20 sm:space-y-24 lg:space-y-32" data-section="case-studies">
                {case_studies
                    .into_iter()
                    .enumerate()
                    .map(|(index, case_study)| view! { <CaseStudyCard index=index case_study=case_study/> })
                    .collect_view()}
            </div>
        </Container>
    }
}

#[component]
fn CaseStudyCard(index: usize, case_study: CaseStudy) -> impl IntoView {
    let CaseStudy { client, logo, service, date, title, summary, testimonial, .. } = case_study;
    let date_label = format_date(&date).unwrap_or_else(|_| date.clone());
    let data_client = client.clone();

    view! {
        <FadeIn>
            <article data-client=data_client>
                <Border class="grid grid-cols-3 gap-x-8 gap-y-8 pt-16">
                    <div class="col-span-full sm:flex sm:items-center sm:justify-between sm:gap-x-8 lg:col-span-1 lg:block">
                        <div class="sm:flex sm:items-center sm:gap-x-6 lg:block">
                            <img src=logo alt="" class=logo_treatment(index).class()/>
                            <h3 class="mt-6 text-sm font-semibold text-neutral-950 sm:mt-0 lg:mt-8">{client}</h3>
                        </div>
                        <div class="mt-1 flex gap-x-4 sm:mt-0 lg:block">
                            <p class="text-sm tracking-tight text-neutral-950 after:ml-4 after:font-semibold after:text-neutral-300 after:content-['/'] lg:mt-2 lg:after:hidden">
                                {service}
                            </p>
                            <p class="text-sm text-neutral-950 lg:mt-2">
                                <time datetime=date>{date_label}</time>
                            </p>
                        </div>
                    </div>
                    <div class="col-span-full lg:col-span-2 lg:max-w-2xl">
                        <p class="font-display text-4xl font-medium text-neutral-950">{title}</p>
                        <div class="mt-6 space-y-6 text-base text-neutral-600">
                            {summary.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
                        </div>
                        {testimonial.map(|testimonial| {
                            view! {
                                <Blockquote
                                    author=testimonial.author
                                    content=testimonial.content
                                    class="mt-12"
                                />
                            }
                        })}
                    </div>
                </Border>
            </article>
        </FadeIn>
    }
}

/// Client logo grid on a dark panel.
#[component]
pub fn Clients() -> impl IntoView {
    view! {
        <Container class="mt-24 rounded-4xl bg-neutral-950 py-20 sm:mt-32 sm:py-16 lg:mt-56">
            <FadeIn>
                <h2 class="font-display text-2xl font-semibold text-white">"You’re in good company"</h2>
            </FadeIn>
            <div class="mt-10">
                <FadeIn>
                    <Border invert=true/>
                </FadeIn>
                <ul role="list" class="grid grid-cols-2 gap-x-8 gap-y-12 sm:grid-cols-3 lg:grid-cols-4">
                    {CLIENTS.iter().enumerate().map(|(index, client)| view! { <ClientItem index=index client=*client/> }).collect_view()}
                </ul>
            </div>
        </Container>
    }
}

#[component]
fn ClientItem(index: usize, client: ClientLogo) -> impl IntoView {
    view! {
        <li class="group" data-client=client.name>
            <FadeIn class="overflow-hidden">
                <Border invert=true class=client_border_class(index)>
                    <img src=client.logo alt=client.name height="80"/>
                </Border>
            </FadeIn>
        </li>
    }
}

#[cfg(test)]
#[path = "work_test.rs"]
mod tests;
