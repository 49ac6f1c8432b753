use leptos::prelude::*;
use lespro_core::Section;
use lespro_core::content::{CALLBACK_FORM, CONTACTS, CONTACTS_HEADER};
use tracing::debug;

use crate::components::Icon;

#[component]
pub fn Contacts() -> impl IntoView {
    view! {
        <section id=Section::Contacts.id() class="contacts">
            <div class="container">
                <div class="contacts-grid">
                    <div class="contacts-info">
                        <h2 class="section-title">{CONTACTS_HEADER.title}</h2>
                        <p class="section-description">{CONTACTS_HEADER.description}</p>
                        <div class="contacts-list">
                            {CONTACTS
                                .iter()
                                .map(|contact| {
                                    let value = match contact.href() {
                                        Some(href) => {
                                            view! { <a href=href class="contact-value">{contact.value}</a> }
                                                .into_any()
                                        }
                                        None => {
                                            view! { <div class="contact-value">{contact.value}</div> }
                                                .into_any()
                                        }
                                    };
                                    view! {
                                        <div class="contact-row">
                                            <div class="icon-circle icon-circle-light">
                                                <Icon name=contact.icon />
                                            </div>
                                            <div>
                                                <div class="contact-title">{contact.title}</div>
                                                {value}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <CallbackCard />
                </div>
            </div>
        </section>
    }
}

/// Callback request card. Fields are plain uncontrolled inputs and the
/// send button goes nowhere: there is no backend to receive the request.
#[component]
fn CallbackCard() -> impl IntoView {
    view! {
        <div class="card callback-card">
            <div class="card-header">
                <h3 class="card-title text-primary">{CALLBACK_FORM.title}</h3>
                <p class="card-description">{CALLBACK_FORM.description}</p>
            </div>
            <div class="card-content callback-form">
                {CALLBACK_FORM
                    .fields
                    .iter()
                    .map(|field| {
                        view! {
                            <div class="field">
                                <label for=field.id class="label">{field.label}</label>
                                <input id=field.id class="input" placeholder=field.placeholder />
                            </div>
                        }
                    })
                    .collect_view()}
                <button
                    type="button"
                    class="btn btn-secondary btn-block"
                    on:click=move |_| debug!("callback form has no submission endpoint")
                >
                    <Icon name="send" size=16 class="mr-2" />
                    {CALLBACK_FORM.submit}
                </button>
            </div>
        </div>
    }
}
