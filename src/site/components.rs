//! Layout primitives shared by site pages.
//!
//! DESIGN
//! ======
//! These are markup-only wrappers: no state, no client-side behavior. Pages
//! compose them so spacing and typography stay consistent.

use leptos::prelude::*;

/// Centered, padded content column.
#[component]
pub fn Container(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("mx-auto max-w-7xl px-6 lg:px-8 {class}")>
            <div class="mx-auto max-w-2xl lg:max-w-none">{children()}</div>
        </div>
    }
}

/// Top rule separating stacked blocks. `invert` switches to the light-on-dark
/// variant. Without children it renders a bare rule.
#[component]
pub fn Border(
    #[prop(optional, into)] class: String,
    #[prop(optional)] invert: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let tone = if invert { "before:bg-white after:bg-white/10" } else { "before:bg-neutral-950 after:bg-neutral-950/10" };
    view! {
        <div class=format!("relative before:absolute after:absolute before:left-0 before:top-0 before:h-px before:w-6 after:left-8 after:right-0 after:top-0 after:h-px {tone} {class}")>
            {children.map(|children| children())}
        </div>
    }
}

/// Entrance animation hook. Scripts key off `data-fade-in`; without them the
/// content renders as-is.
#[component]
pub fn FadeIn(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=class data-fade-in="">
            {children()}
        </div>
    }
}

/// Hero block with an eyebrow label, a headline and lead copy.
#[component]
pub fn PageIntro(eyebrow: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Container class="mt-24 sm:mt-32 lg:mt-40">
            <FadeIn class="max-w-3xl">
                <h1>
                    <span class="block font-display text-base font-semibold text-neutral-950">{eyebrow}</span>
                    <span class="sr-only">" - "</span>
                    <span class="mt-6 block max-w-5xl font-display text-5xl font-medium tracking-tight text-neutral-950 sm:text-6xl">
                        {title}
                    </span>
                </h1>
                <div class="mt-6 max-w-3xl text-xl text-neutral-600">{children()}</div>
            </FadeIn>
        </Container>
    }
}

/// Attributed quote with a left rule.
#[component]
pub fn Blockquote(author: String, content: String, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <figure class=format!("border-l border-neutral-300 pl-8 {class}")>
            <blockquote class="text-xl font-display tracking-tight text-neutral-950">
                <p>{content}</p>
            </blockquote>
            <figcaption class="mt-6 text-sm font-semibold text-neutral-950">{author}</figcaption>
        </figure>
    }
}

/// Full-width client testimonial with the client's logo.
#[component]
pub fn Testimonial(
    client_name: &'static str,
    client_logo: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("relative isolate bg-neutral-50 py-16 sm:py-28 md:py-32 {class}")>
            <Container>
                <FadeIn>
                    <figure class="mx-auto max-w-4xl">
                        <blockquote class="relative font-display text-3xl font-medium tracking-tight text-neutral-950 sm:text-4xl">
                            <p>{children()}</p>
                        </blockquote>
                        <figcaption class="mt-10">
                            <img src=client_logo alt=client_name class="h-16"/>
                        </figcaption>
                    </figure>
                </FadeIn>
            </Container>
        </div>
    }
}

/// Closing call to action linking to the contact page.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Container class="mt-24 sm:mt-32 lg:mt-40">
            <FadeIn class="-mx-6 rounded-4xl bg-neutral-950 px-6 py-20 sm:mx-0 sm:py-32 md:px-12">
                <section id="contact" class="mx-auto max-w-4xl">
                    <div class="max-w-xl">
                        <h2 class="font-display text-3xl font-medium text-white sm:text-4xl">
                            "Tell us about your project"
                        </h2>
                        <div class="mt-6 flex">
                            <a href="/contact" class="inline-flex rounded-full bg-white px-4 py-1.5 text-sm font-semibold text-neutral-950">
                                "Say Hej"
                            </a>
                        </div>
                    </div>
                </section>
            </FadeIn>
        </Container>
    }
}
