//! Not found page component
//!
//! A 404 page for anything but the landing page.

use leptos::prelude::*;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <h2>"Halaman Tidak Ditemukan"</h2>
            <p>"Halaman yang Anda cari tidak ada atau sudah dipindahkan."</p>
            <a href="/" class="btn btn-primary">"Kembali ke Beranda"</a>
        </main>
    }
}
