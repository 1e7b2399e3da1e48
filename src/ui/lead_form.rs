//! Quick lead form
//!
//! Submitting never posts anywhere: the values are turned into a WhatsApp
//! message that opens in a new tab.

use leptos::prelude::*;

use crate::core::LeadForm;
use crate::core::lead_form::DEFAULT_WHATSAPP_NUMBER;
use crate::ui::analytics::use_analytics;
use crate::ui::browser;

/// Quick consultation form handing off to WhatsApp
#[component]
pub fn QuickLeadForm(
    /// Options offered in the package select
    packages: &'static [&'static str],
    #[prop(default = DEFAULT_WHATSAPP_NUMBER)]
    whatsapp_number: &'static str,
) -> impl IntoView {
    let analytics = use_analytics();

    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (package, set_package) = signal(packages.first().copied().unwrap_or_default().to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LeadForm::new(
            &name.get_untracked(),
            &date.get_untracked(),
            &package.get_untracked(),
        );
        let url = form.whatsapp_url(whatsapp_number);

        analytics.track(form.analytics_event());
        if let Err(err) = browser::open_in_new_tab(&url) {
            leptos::logging::warn!("lead form: could not open WhatsApp: {err}");
        }
    };

    view! {
        <form id="quickLeadForm" class="lead-form" on:submit=on_submit>
            <label class="field">
                <span>"Nama"</span>
                <input
                    type="text"
                    name="nama"
                    placeholder="Nama lengkap"
                    required
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Tanggal Pelaksanaan"</span>
                <input
                    type="date"
                    name="tanggal"
                    required
                    prop:value=date
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Pilihan Layanan"</span>
                <select
                    name="paket"
                    prop:value=package
                    on:change=move |ev| set_package.set(event_target_value(&ev))
                >
                    {packages
                        .iter()
                        .map(|option| view! { <option value=*option>{*option}</option> })
                        .collect_view()}
                </select>
            </label>
            <button type="submit" class="btn btn-primary">
                "Konsultasi via WhatsApp"
            </button>
        </form>
    }
}
