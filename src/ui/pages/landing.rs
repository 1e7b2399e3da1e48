//! Landing page component
//!
//! Single marketing page for the Aqiqah & Qurban service featuring:
//! - Header with smooth-scroll navigation and mobile menu
//! - Hero section with tracked call-to-action buttons
//! - Service cards revealed with a staggered fade-in
//! - Photo gallery and testimonial sliders
//! - Package pricing, process steps and FAQ accordion
//! - Quick lead form handing off to WhatsApp
//! - Back-to-top button and scroll-depth analytics

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::lead_form::DEFAULT_WHATSAPP_NUMBER;
use crate::core::scroll::stagger_delay_ms;
use crate::ui::analytics::provide_analytics_context;
use crate::ui::cta::{BackToTop, TrackedLink};
use crate::ui::header::{Header, NavLink};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::QuickLeadForm;
use crate::ui::page_effects::provide_page_state;
use crate::ui::slider::Slider;

const BRAND: &str = "Berkah Aqiqah";

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#layanan", label: "Layanan" },
    NavLink { href: "#galeri", label: "Galeri" },
    NavLink { href: "#paket", label: "Paket" },
    NavLink { href: "#testimoni", label: "Testimoni" },
    NavLink { href: "#faq", label: "FAQ" },
    NavLink { href: "#kontak", label: "Kontak" },
];

const PACKAGES: &[&str] = &[
    "Aqiqah Paket Hemat",
    "Aqiqah Paket Keluarga",
    "Aqiqah Paket Premium",
    "Qurban Kambing",
    "Qurban Sapi (1/7)",
];

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Hewan Sesuai Syariat",
        description: "Kambing dan sapi sehat, cukup umur, dipilih dan diperiksa sebelum disembelih.",
    },
    Feature {
        title: "Masak Siap Saji",
        description: "Diolah juru masak berpengalaman menjadi gulai, sate, atau tongseng sesuai pilihan.",
    },
    Feature {
        title: "Antar ke Lokasi",
        description: "Pengiriman tepat waktu ke rumah, masjid, atau tempat acara Anda.",
    },
    Feature {
        title: "Dokumentasi Lengkap",
        description: "Foto dan video penyembelihan dikirim langsung ke WhatsApp Anda.",
    },
];

struct Package {
    name: &'static str,
    price: &'static str,
    items: &'static [&'static str],
    featured: bool,
}

const PRICING: &[Package] = &[
    Package {
        name: "Hemat",
        price: "Rp 2.100.000",
        items: &["1 ekor kambing", "Olahan gulai", "Kemasan box 40 porsi"],
        featured: false,
    },
    Package {
        name: "Keluarga",
        price: "Rp 2.900.000",
        items: &["1 ekor kambing pilihan", "Gulai + sate", "Kemasan box 60 porsi", "Sertifikat aqiqah"],
        featured: true,
    },
    Package {
        name: "Premium",
        price: "Rp 4.500.000",
        items: &["2 ekor kambing pilihan", "Menu bebas pilih", "Nasi box 100 porsi", "Sertifikat + dokumentasi video"],
        featured: false,
    },
];

const PROCESS: &[(&str, &str)] = &[
    ("Konsultasi", "Hubungi kami via WhatsApp untuk memilih paket dan tanggal."),
    ("Pilih Hewan", "Kami kirim foto hewan untuk Anda setujui."),
    ("Penyembelihan", "Disembelih sesuai syariat dan didokumentasikan."),
    ("Pengantaran", "Masakan diantar hangat ke lokasi acara."),
];

const GALLERY: &[(&str, &str)] = &[
    ("Kandang", "Hewan dirawat di kandang bersih dan terawat."),
    ("Penyembelihan", "Dilakukan oleh penyembelih bersertifikat."),
    ("Dapur", "Dapur higienis dengan bumbu pilihan."),
    ("Pengemasan", "Dikemas rapi dan siap dibagikan."),
    ("Pengantaran", "Armada kami menjangkau seluruh kota."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Ibu Aisyah", "Masakannya enak, tamu banyak yang tanya pesan di mana. Pengantaran tepat waktu."),
    ("Bapak Hendra", "Prosesnya transparan, dapat foto dan video lengkap. Sangat amanah."),
    ("Keluarga Rahman", "Qurban sapi kolektif jadi mudah, semua diurus dari awal sampai distribusi."),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let analytics = provide_analytics_context();
    let page = provide_page_state();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let sections: Vec<&str> = NAV_LINKS.iter().map(NavLink::section_id).collect();
        crate::ui::page_effects::install(page, analytics.clone(), &sections);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (analytics, page);

    let whatsapp_href = format!("https://wa.me/{DEFAULT_WHATSAPP_NUMBER}");

    let gallery_slides: Vec<AnyView> = GALLERY
        .iter()
        .enumerate()
        .map(|(i, (title, caption))| {
            view! {
                <figure class="photo-gallery-slide" style=stagger_style(i)>
                    <div class="photo-placeholder">{*title}</div>
                    <figcaption>{*caption}</figcaption>
                </figure>
            }
            .into_any()
        })
        .collect();

    let testimonial_slides: Vec<AnyView> = TESTIMONIALS
        .iter()
        .map(|(author, quote)| {
            view! {
                <blockquote class="testimonial-card">
                    <p>{*quote}</p>
                    <cite>{*author}</cite>
                </blockquote>
            }
            .into_any()
        })
        .collect();

    view! {
        <SeoMeta />

        <Header brand=BRAND links=NAV_LINKS />

        <main>
            // Hero Section
            <section id="beranda" class="hero">
                <div class="container hero-inner reveal">
                    <h1>"Aqiqah & Qurban Amanah, Siap Saji di Rumah Anda"</h1>
                    <p class="lead">
                        "Hewan sesuai syariat, dimasak juru masak berpengalaman, dan diantar tepat waktu."
                    </p>
                    <div class="hero-actions">
                        <TrackedLink href="#kontak" track_id="hero_konsultasi">
                            "Konsultasi Gratis"
                        </TrackedLink>
                        <TrackedLink href="#paket" track_id="hero_lihat_paket" class="btn btn-secondary">
                            "Lihat Paket"
                        </TrackedLink>
                    </div>
                </div>
                <a href="#layanan" class="scroll-hint" aria-hidden="true">
                    <Icon name=icons::CHEVRON_DOWN />
                </a>
            </section>

            // Features Section
            <section id="layanan" class="section">
                <div class="container">
                    <SectionHeading
                        title="Kenapa Memilih Kami?"
                        subtitle="Semua kebutuhan aqiqah dan qurban Anda, diurus dari awal sampai akhir."
                    />
                    <div class="grid grid-4">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(i, feature)| {
                                view! {
                                    <article class="feature-card reveal" style=stagger_style(i)>
                                        <Icon name=icons::CHECK class="icon feature-icon" />
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Gallery Section
            <section id="galeri" class="section section-alt">
                <div class="container">
                    <SectionHeading
                        title="Galeri Kegiatan"
                        subtitle="Intip proses kami dari kandang hingga pengantaran."
                    />
                    <Slider class="photo-gallery reveal" label="foto" speed="3200" slides=gallery_slides />
                </div>
            </section>

            <PricingSection whatsapp_href=whatsapp_href.clone() />

            // Testimonials Section
            <section id="testimoni" class="section section-alt">
                <div class="container">
                    <SectionHeading
                        title="Kata Mereka"
                        subtitle="Ratusan keluarga telah mempercayakan aqiqah dan qurbannya kepada kami."
                    />
                    <Slider class="testimonial-slider reveal" label="testimoni" slides=testimonial_slides />
                </div>
            </section>

            // Process Section
            <section id="proses" class="section">
                <div class="container">
                    <SectionHeading
                        title="Cara Pesan"
                        subtitle="Empat langkah mudah, tanpa repot."
                    />
                    <ol class="grid grid-4 process">
                        {PROCESS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, body))| {
                                view! {
                                    <li class="process-step reveal" style=stagger_style(i)>
                                        <span class="step-number">{i + 1}</span>
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <FaqSection />

            // Contact Section
            <section id="kontak" class="section section-alt">
                <div class="container contact">
                    <div class="reveal">
                        <h2>"Konsultasi Sekarang"</h2>
                        <p>
                            "Isi formulir singkat ini, kami lanjutkan percakapan di WhatsApp."
                        </p>
                        <TrackedLink
                            href=whatsapp_href
                            track_id="kontak_whatsapp"
                            class="btn btn-secondary"
                            external=true
                        >
                            <Icon name=icons::CHAT />
                            " Chat Langsung"
                        </TrackedLink>
                    </div>
                    <div class="reveal">
                        <QuickLeadForm packages=PACKAGES />
                    </div>
                </div>
            </section>
        </main>

        <Footer />
        <BackToTop />
    }
}

/// Reveal delay for the `index`-th card of a group
fn stagger_style(index: usize) -> String {
    format!("--delay: {}ms", stagger_delay_ms(index))
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Berkah Aqiqah - Layanan Aqiqah & Qurban Siap Saji" />
        <Meta
            name="description"
            content="Layanan aqiqah dan qurban sesuai syariat: hewan sehat, masakan lezat, diantar ke lokasi Anda."
        />
        <Meta property="og:title" content="Berkah Aqiqah - Aqiqah & Qurban Siap Saji" />
        <Meta property="og:type" content="website" />
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading reveal">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

/// Pricing section component
#[component]
fn PricingSection(whatsapp_href: String) -> impl IntoView {
    view! {
        <section id="paket" class="section">
            <div class="container">
                <SectionHeading
                    title="Paket Aqiqah"
                    subtitle="Harga sudah termasuk hewan, pengolahan, dan pengantaran dalam kota."
                />
                <div class="grid grid-3">
                    {PRICING
                        .iter()
                        .enumerate()
                        .map(|(i, package)| {
                            view! {
                                <article
                                    class="pricing-card reveal"
                                    class:featured=package.featured
                                    style=stagger_style(i)
                                >
                                    <h3>{package.name}</h3>
                                    <p class="price">{package.price}</p>
                                    <ul>
                                        {package
                                            .items
                                            .iter()
                                            .map(|item| view! { <li>{*item}</li> })
                                            .collect_view()}
                                    </ul>
                                    <TrackedLink
                                        href=whatsapp_href.clone()
                                        track_id=package.name
                                        external=true
                                    >
                                        "Pesan Paket"
                                    </TrackedLink>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <div class="container narrow">
                <SectionHeading
                    title="Pertanyaan Umum"
                    subtitle="Belum menemukan jawaban? Tanyakan langsung lewat WhatsApp."
                />
                <div class="faq-list">
                    <FaqItem
                        question="Berapa lama sebelum acara saya harus memesan?"
                        answer="Idealnya 3-7 hari sebelum acara agar kami dapat menyiapkan hewan terbaik. Pesanan mendadak tetap kami usahakan."
                    />
                    <FaqItem
                        question="Apakah bisa memilih hewan sendiri?"
                        answer="Bisa. Kami mengirimkan foto dan video hewan yang tersedia, atau Anda dapat berkunjung langsung ke kandang kami."
                    />
                    <FaqItem
                        question="Apakah ada sertifikat aqiqah?"
                        answer="Ya, paket Keluarga dan Premium sudah termasuk sertifikat aqiqah atas nama anak."
                    />
                    <FaqItem
                        question="Bagaimana dengan qurban kolektif?"
                        answer="Untuk qurban sapi, Anda dapat bergabung sebagai salah satu dari tujuh peserta. Daging dibagikan sesuai amanah."
                    />
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="faq-item reveal" class:open=move || is_open.get()>
            <button
                type="button"
                class="faq-question"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span>{question}</span>
                <Icon name=icons::CHEVRON_DOWN class="icon faq-chevron" />
            </button>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p>"© 2026 " {BRAND} ". Amanah, halal, dan tepat waktu."</p>
                <nav>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
