//! Component Gallery - a small sign-up form built from the field components
//!
//! The form state below plays the caller's role: it owns the values, decides
//! what counts as an error and hands the results to the components.

use leptos::prelude::*;

use crate::components::{FieldWrapper, SelectField, TextAreaField, TextInputField};

const ROLES: &[(&str, &str)] = &[
    ("", "Choose a role"),
    ("developer", "Developer"),
    ("designer", "Designer"),
    ("operations", "Operations"),
];

/// Caller-side state for the gallery form
#[derive(Clone, Copy)]
struct SignupForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    role: RwSignal<String>,
    bio: RwSignal<String>,
    submitted: RwSignal<bool>,
}

impl SignupForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            role: RwSignal::new(String::new()),
            bio: RwSignal::new(String::new()),
            submitted: RwSignal::new(false),
        }
    }

    /// Errors only show up once the user has tried to submit.
    fn error_for(&self, message: Option<&'static str>) -> Option<String> {
        self.submitted
            .get()
            .then_some(message)
            .flatten()
            .map(str::to_string)
    }

    fn name_error(&self) -> Option<String> {
        self.error_for(self.name.with(|name| name.trim().is_empty()).then_some("Name is required"))
    }

    fn email_error(&self) -> Option<String> {
        let message = self.email.with(|email| {
            if email.trim().is_empty() {
                Some("Email is required")
            } else if !email.contains('@') {
                Some("Invalid email")
            } else {
                None
            }
        });
        self.error_for(message)
    }

    fn role_error(&self) -> Option<String> {
        self.error_for(self.role.with(String::is_empty).then_some("Pick a role"))
    }

    fn is_valid(&self) -> bool {
        self.name_error().is_none() && self.email_error().is_none() && self.role_error().is_none()
    }
}

#[component]
pub fn FormGallery() -> impl IntoView {
    let form = SignupForm::new();

    let name_error = Signal::derive(move || form.name_error());
    let email_error = Signal::derive(move || form.email_error());
    let role_error = Signal::derive(move || form.role_error());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submitted.set(true);
        if form.is_valid() {
            log::info!("Gallery form submitted for {}", form.email.get_untracked());
        } else {
            log::debug!("Gallery form has errors");
        }
    };

    view! {
        <main class="gallery">
            <h1>"Form fields"</h1>
            <form class="gallery-form" on:submit=on_submit novalidate=true>
                <FieldWrapper label="Name" required=true error=name_error html_for="name">
                    <TextInputField
                        error=Signal::derive(move || name_error.get().is_some())
                        {..}
                        id="name"
                        type="text"
                        placeholder="Ada Lovelace"
                        prop:value=form.name
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                    />
                </FieldWrapper>

                <FieldWrapper label="Email" required=true error=email_error html_for="email">
                    <TextInputField
                        error=Signal::derive(move || email_error.get().is_some())
                        class="wide"
                        {..}
                        id="email"
                        type="email"
                        placeholder="ada@example.com"
                        prop:value=form.email
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                </FieldWrapper>

                <FieldWrapper label="Role" required=true error=role_error html_for="role">
                    <SelectField
                        error=Signal::derive(move || role_error.get().is_some())
                        {..}
                        id="role"
                        prop:value=form.role
                        on:change=move |ev| form.role.set(event_target_value(&ev))
                    >
                        {ROLES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </SelectField>
                </FieldWrapper>

                <FieldWrapper label="Bio" html_for="bio" class="full-width">
                    <TextAreaField
                        {..}
                        id="bio"
                        rows="4"
                        placeholder="A few words about yourself"
                        prop:value=form.bio
                        on:input=move |ev| form.bio.set(event_target_value(&ev))
                    />
                </FieldWrapper>

                <button type="submit" class="btn">"Sign up"</button>
            </form>
        </main>
    }
}
