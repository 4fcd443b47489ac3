//! Server-rendered site pages.
//!
//! ARCHITECTURE
//! ============
//! Pages are Leptos components rendered to a complete HTML string per
//! request with `RenderHtml::to_html`. There is no hydration: the output is
//! static markup plus links to stylesheet and image assets.

pub mod clients;
pub mod components;
pub mod work;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::content::CaseStudy;
use components::Container;
use work::{WORK_META, WorkPage};

/// Title and description for crawlers and social previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

#[component]
fn Document(site_name: String, meta: PageMeta, children: Children) -> impl IntoView {
    let full_title = format!("{} - {site_name}", meta.title);
    view! {
        <html lang="en" class="h-full bg-neutral-950 text-base antialiased">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{full_title.clone()}</title>
                <meta name="description" content=meta.description/>
                <meta name="twitter:title" content=full_title/>
                <meta name="twitter:description" content=meta.description/>
                <link rel="stylesheet" href="/assets/site.css"/>
            </head>
            <body class="flex min-h-full flex-col">
                <main class="w-full flex-auto bg-white">{children()}</main>
            </body>
        </html>
    }
}

fn finish_document(html: String) -> String {
    format!("<!DOCTYPE html>\n{html}")
}

/// Render the complete "Our Work" document.
#[must_use]
pub fn render_work_page(site_name: &str, case_studies: Vec<CaseStudy>) -> String {
    let doc = view! {
        <Document site_name=site_name.to_owned() meta=WORK_META>
            <WorkPage case_studies=case_studies/>
        </Document>
    };
    finish_document(doc.to_html())
}

/// Render a minimal error document: status line plus a short message.
#[must_use]
pub fn render_error_page(site_name: &str, status: u16, reason: &'static str, message: &'static str) -> String {
    let meta = PageMeta { title: reason, description: message };
    let doc = view! {
        <Document site_name=site_name.to_owned() meta=meta>
            <Container class="mt-24 sm:mt-32">
                <h1 class="font-display text-4xl font-medium text-neutral-950">{status}" "{reason}</h1>
                <p class="mt-6 text-base text-neutral-600">{message}</p>
            </Container>
        </Document>
    };
    finish_document(doc.to_html())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
