use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::{LandingPage, NotFoundPage};

/// HTML document wrapping the application, rendered on the server only.
///
/// When a Tag Manager container is given its loader is injected so the
/// page's `dataLayer` events reach it.
pub fn shell(options: LeptosOptions, gtm_container_id: Option<String>) -> impl IntoView {
    let gtm = gtm_container_id.map(|id| gtm_snippet(&id));

    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {gtm.map(|snippet| view! { <script inner_html=snippet></script> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Google Tag Manager loader for `container_id`
pub fn gtm_snippet(container_id: &str) -> String {
    format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':new Date().getTime(),event:'gtm.js'}});\
         var f=d.getElementsByTagName(s)[0],j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';\
         j.async=true;j.src='https://www.googletagmanager.com/gtm.js?id='+i+dl;\
         f.parentNode.insertBefore(j,f);}})(window,document,'script','dataLayer','{container_id}');"
    )
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/landing-enhancer.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
